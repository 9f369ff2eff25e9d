pub(crate) mod components;
mod logic;
mod systems;

use crate::core::camera::components::*;
use crate::core::camera::systems::*;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MainCamera>()
            .register_type::<KeyLight>()
            .add_systems(Startup, spawn_camera);
    }
}
