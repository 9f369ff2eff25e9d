pub mod components;
pub mod heatmap_material;
pub mod patch;
pub mod resources;
pub mod systems;
mod logic;

use crate::core::state::ViewPhase;
use crate::globe::heatmap_material::HeatmapMaterial;
use crate::globe::patch::apply_material_patch;
use crate::globe::systems::*;
use bevy::prelude::*;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<HeatmapMaterial>::default())
            .add_systems(Startup, (spawn_globe_group, spawn_globe).chain())
            .add_systems(
                Update,
                (
                    spawn_textured_sphere.run_if(resource_changed::<ViewPhase>),
                    (drag_globe_group, rotate_globe_group).chain(),
                    apply_material_patch,
                ),
            );
    }
}
