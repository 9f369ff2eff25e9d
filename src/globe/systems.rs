use crate::core::state::ViewPhase;
use crate::globe::components::*;
use crate::globe::heatmap_material::HeatmapMaterial;
use crate::globe::logic::{auto_yaw, drag_yaw, generate_heatmap};
use crate::globe::patch::MaterialPatchTimer;
use crate::globe::resources::GlobeSettings;
use crate::helpers::mesh::{mesh_from_data, textured_sphere_mesh};
use crate::loading::TextureAssets;
use bevy::input::mouse::MouseMotion;
use bevy::input::touch::Touch;
use bevy::prelude::*;
use std::time::Duration;

pub fn spawn_globe_group(mut commands: Commands, groups: Query<(), With<GlobeGroup>>) {
    if !groups.is_empty() {
        return;
    }
    commands.spawn((
        Transform::default(),
        Visibility::default(),
        GlobeGroup,
        GlobeControls::default(),
    ));
}

/// Builds the heatmap globe. Does nothing if the view already has one.
pub fn spawn_globe(
    mut commands: Commands,
    settings: Res<GlobeSettings>,
    mut phase: ResMut<ViewPhase>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut heatmap_materials: ResMut<Assets<HeatmapMaterial>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    globes: Query<(), With<HeatmapGlobe>>,
    groups: Query<Entity, With<GlobeGroup>>,
) {
    if phase.globe_ready() || !globes.is_empty() {
        return;
    }
    let Ok(group) = groups.single() else {
        warn!("No globe group to attach the globe to");
        return;
    };

    let (samples, mesh_data) = generate_heatmap(&settings, &mut rand::rng());
    let heatmap_mesh = meshes.add(mesh_from_data(mesh_data));
    let heatmap_material = heatmap_materials.add(HeatmapMaterial::default());
    let globe_layer = &settings.globe;

    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            HeatmapGlobe,
            HeatmapData(samples),
            MaterialPatchTimer::new(Duration::from_millis(settings.patch.delay_ms)),
            ChildOf(group),
        ))
        .with_children(|parent| {
            if globe_layer.show_base_sphere {
                let [r, g, b] = globe_layer.base_color;
                parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(globe_layer.radius).mesh().uv(64, 32))),
                    MeshMaterial3d(standard_materials.add(StandardMaterial {
                        base_color: Color::srgb(r, g, b),
                        ..default()
                    })),
                    BaseSphere,
                ));
            }

            parent.spawn((
                Mesh3d(heatmap_mesh),
                MeshMaterial3d(heatmap_material),
                HeatmapLayerMesh,
            ));
        });

    let next = phase.on_globe_built();
    phase.set_if_neq(next);
    info!("Globe created");
}

/// Adds the textured sphere once the texture is in. Keeps the sphere out of
/// the scene until then so the untextured material never shows.
pub fn spawn_textured_sphere(
    mut commands: Commands,
    settings: Res<GlobeSettings>,
    phase: Res<ViewPhase>,
    textures: Option<Res<TextureAssets>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    spheres: Query<(), With<TexturedSphere>>,
    groups: Query<Entity, With<GlobeGroup>>,
) {
    if !phase.texture_ready() || !spheres.is_empty() {
        return;
    }
    let Some(textures) = textures else {
        return;
    };
    let Ok(group) = groups.single() else {
        return;
    };

    commands.spawn((
        Mesh3d(meshes.add(textured_sphere_mesh(&settings.sphere))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(textures.globe_texture.clone()),
            perceptual_roughness: 0.6,
            ..default()
        })),
        TexturedSphere,
        ChildOf(group),
    ));
}

pub fn drag_globe_group(
    settings: Res<GlobeSettings>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut groups: Query<&mut GlobeControls, With<GlobeGroup>>,
) {
    let mouse_drag = mouse_input.pressed(MouseButton::Left);
    let mut delta_x: f32 = mouse_motion
        .read()
        .filter(|_| mouse_drag)
        .map(|motion| motion.delta.x)
        .sum();

    let active: Vec<&Touch> = touches.iter().collect();
    if let [touch] = active.as_slice() {
        delta_x += touch.delta().x;
    }

    let Ok(mut controls) = groups.single_mut() else {
        return;
    };
    controls.dragging = mouse_drag || !active.is_empty();
    controls.yaw += drag_yaw(delta_x, settings.rotation.drag_sensitivity);
}

pub fn rotate_globe_group(
    time: Res<Time>,
    settings: Res<GlobeSettings>,
    mut groups: Query<(&mut Transform, &mut GlobeControls), With<GlobeGroup>>,
) {
    for (mut transform, mut controls) in &mut groups {
        controls.yaw += auto_yaw(
            settings.rotation.auto_speed,
            time.delta_secs(),
            controls.dragging,
        );
        transform.rotation = Quat::from_rotation_y(controls.yaw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use globegen::config::{GlobeConfig, HeatmapConfig};

    fn view_world(phase: ViewPhase) -> World {
        let mut world = World::new();
        world.insert_resource(GlobeSettings(GlobeConfig {
            heatmap: HeatmapConfig {
                segments: 24,
                rings: 12,
                ..HeatmapConfig::default()
            },
            ..GlobeConfig::default()
        }));
        world.insert_resource(phase);
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<HeatmapMaterial>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.run_system_once(spawn_globe_group).unwrap();
        world
    }

    fn count<C: Component>(world: &mut World) -> usize {
        world.query_filtered::<(), With<C>>().iter(world).count()
    }

    #[test]
    fn globe_is_built_once() {
        let mut world = view_world(ViewPhase::Initializing);

        world.run_system_once(spawn_globe).unwrap();
        world.run_system_once(spawn_globe).unwrap();

        assert_eq!(count::<HeatmapGlobe>(&mut world), 1);
        assert_eq!(count::<HeatmapLayerMesh>(&mut world), 1);
        assert_eq!(*world.resource::<ViewPhase>(), ViewPhase::GlobeReady);
    }

    #[test]
    fn globe_keeps_its_samples() {
        let mut world = view_world(ViewPhase::Initializing);

        world.run_system_once(spawn_globe).unwrap();

        let mut data = world.query::<&HeatmapData>();
        let samples = &data.single(&world).unwrap().0;
        assert_eq!(samples.len(), 688);
        assert!(samples.iter().all(|s| s.lat.abs() <= 80.0 && s.lng.abs() <= 180.0));
    }

    #[test]
    fn globe_hides_base_sphere_by_default() {
        let mut world = view_world(ViewPhase::Initializing);

        world.run_system_once(spawn_globe).unwrap();

        assert_eq!(count::<BaseSphere>(&mut world), 0);
        assert_eq!(count::<MaterialPatchTimer>(&mut world), 1);
    }

    #[test]
    fn sphere_waits_for_texture() {
        let mut world = view_world(ViewPhase::GlobeReady);
        world.insert_resource(TextureAssets {
            globe_texture: Handle::default(),
        });

        world.run_system_once(spawn_textured_sphere).unwrap();

        assert_eq!(count::<TexturedSphere>(&mut world), 0);
    }

    #[test]
    fn sphere_appears_after_texture() {
        let mut world = view_world(ViewPhase::Ready);
        world.insert_resource(TextureAssets {
            globe_texture: Handle::default(),
        });

        world.run_system_once(spawn_textured_sphere).unwrap();
        world.run_system_once(spawn_textured_sphere).unwrap();

        assert_eq!(count::<TexturedSphere>(&mut world), 1);
        let mut spheres = world.query_filtered::<&Mesh3d, With<TexturedSphere>>();
        let handle = spheres.single(&world).unwrap().0.clone();
        let mesh = world.resource::<Assets<Mesh>>().get(&handle).unwrap();
        assert_eq!(mesh.count_vertices(), 33 * 33);
    }
}
