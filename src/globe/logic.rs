use crate::globe::resources::GlobeSettings;
use globegen::mesh_data::{HeatmapLayer, MeshData};
use globegen::sample::{HeatmapSample, generate_samples};
use rand::Rng;

/// Draws the heatmap samples and builds the layer geometry for them.
pub fn generate_heatmap<R: Rng>(settings: &GlobeSettings, rng: &mut R) -> (Vec<HeatmapSample>, MeshData) {
    let heatmap = &settings.heatmap;
    let samples = generate_samples(rng, heatmap.point_count, heatmap.max_latitude);
    let layer = HeatmapLayer::new(settings.globe.radius, heatmap);
    let mesh_data = layer.build(&samples);
    (samples, mesh_data)
}

pub fn drag_yaw(delta_x: f32, sensitivity: f32) -> f32 {
    delta_x * sensitivity
}

pub fn auto_yaw(speed: f32, delta_time: f32, dragging: bool) -> f32 {
    if dragging { 0.0 } else { speed * delta_time }
}
