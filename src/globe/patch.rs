use crate::globe::components::HeatmapGlobe;
use crate::globe::heatmap_material::HeatmapMaterial;
use crate::globe::resources::GlobeSettings;
use bevy::prelude::*;
use globegen::config::PatchConfig;
use std::time::Duration;

/// Counts down to the one-time material patch. Lives on the globe entity, so
/// despawning the globe cancels the patch.
#[derive(Component, Deref, DerefMut)]
pub struct MaterialPatchTimer(pub Timer);

impl MaterialPatchTimer {
    pub fn new(delay: Duration) -> Self {
        Self(Timer::new(delay, TimerMode::Once))
    }
}

/// Flags forced onto every heatmap material under the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialPatch {
    pub transparent: bool,
    pub opacity: f32,
    pub depth_write: bool,
}

impl MaterialPatch {
    pub fn from_config(config: &PatchConfig) -> Self {
        Self {
            transparent: config.transparent,
            opacity: config.opacity,
            depth_write: config.depth_write,
        }
    }

    /// Bevy writes depth for opaque materials and never for blended ones, so
    /// `depth_write` is only honoured through `transparent`.
    pub fn alpha_mode(&self) -> AlphaMode {
        if self.transparent {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        }
    }

    /// Describes a `depth_write` setting that the alpha mode overrides.
    pub fn depth_write_conflict(&self) -> Option<&'static str> {
        match (self.transparent, self.depth_write) {
            (true, true) => Some("Blended heatmap materials cannot write depth"),
            (false, false) => Some("Opaque heatmap materials always write depth"),
            _ => None,
        }
    }

    pub fn apply(&self, material: &mut HeatmapMaterial) {
        material.alpha_mode = self.alpha_mode();
        // Has no visible effect while opaque
        material.tint.alpha = self.opacity;
    }
}

pub fn apply_material_patch(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<GlobeSettings>,
    mut globes: Query<(Entity, &mut MaterialPatchTimer), With<HeatmapGlobe>>,
    children: Query<&Children>,
    shader_materials: Query<&MeshMaterial3d<HeatmapMaterial>>,
    mut materials: ResMut<Assets<HeatmapMaterial>>,
) {
    for (globe, mut timer) in &mut globes {
        if !timer.tick(time.delta()).just_finished() {
            continue;
        }
        commands.entity(globe).remove::<MaterialPatchTimer>();

        let patch = MaterialPatch::from_config(&settings.patch);
        if let Some(conflict) = patch.depth_write_conflict() {
            warn!("{conflict}, ignoring depth_write = {}", patch.depth_write);
        }

        info!("Patching heatmap materials...");
        let descendants: Vec<Entity> = children.iter_descendants(globe).collect();
        info!("Globe descendants count: {}", descendants.len());

        let mut patched = 0;
        for entity in descendants {
            let Ok(handle) = shader_materials.get(entity) else {
                continue;
            };
            if let Some(material) = materials.get_mut(&handle.0) {
                patch.apply(material);
                patched += 1;
            }
        }

        if patched == 0 {
            warn!("Material patch found no heatmap materials");
        } else {
            info!("Patched {patched} heatmap material(s)");
        }
    }
}
