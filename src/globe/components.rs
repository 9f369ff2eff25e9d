use bevy::prelude::*;
use globegen::sample::HeatmapSample;

/// Parent of the textured sphere and the heatmap globe; the whole group spins.
#[derive(Component)]
pub struct GlobeGroup;

#[derive(Component, Default)]
pub struct GlobeControls {
    pub yaw: f32,
    pub dragging: bool,
}

/// Root of the heatmap globe. Built once per view.
#[derive(Component)]
pub struct HeatmapGlobe;

/// The samples the globe was built from. Never updated.
#[derive(Component, Deref)]
pub struct HeatmapData(pub Vec<HeatmapSample>);

#[derive(Component)]
pub struct HeatmapLayerMesh;

#[derive(Component)]
pub struct BaseSphere;

#[derive(Component)]
pub struct TexturedSphere;
