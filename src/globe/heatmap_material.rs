use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;

/// Unlit vertex-colored material for the heatmap shell
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct HeatmapMaterial {
    /// Multiplied into the vertex color; alpha is the layer opacity
    #[uniform(0)]
    pub tint: LinearRgba,
    pub alpha_mode: AlphaMode,
}

impl Material for HeatmapMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/heatmap.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }
}

impl Default for HeatmapMaterial {
    fn default() -> Self {
        Self {
            tint: LinearRgba::WHITE,
            alpha_mode: AlphaMode::Blend,
        }
    }
}
