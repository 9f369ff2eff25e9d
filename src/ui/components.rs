use bevy::prelude::*;

/// Full-screen backdrop shown until the globe texture is loaded
#[derive(Component)]
pub struct LoadingOverlay;

#[derive(Component)]
pub struct LoadingText;
