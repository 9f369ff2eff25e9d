use bevy::prelude::*;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct MainCamera;

#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct KeyLight;
