pub mod bundles;
pub mod components;
mod systems;

use crate::core::state::ViewPhase;
use bevy::prelude::*;
use systems::*;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_loading_overlay).add_systems(
            Update,
            hide_loading_overlay.run_if(resource_changed::<ViewPhase>),
        );
    }
}
