use crate::core::camera::components::{KeyLight, MainCamera};
use crate::core::camera::logic::{
    ambient_brightness, directional_illuminance, light_direction, msaa_for,
};
use crate::globe::resources::GlobeSettings;
use bevy::prelude::*;

pub fn spawn_camera(mut commands: Commands, settings: Res<GlobeSettings>) {
    let scene = &settings.scene;
    let camera_position = Vec3::from_array(scene.camera_position);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: scene.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_translation(camera_position).looking_at(Vec3::ZERO, Vec3::Y),
        msaa_for(scene.antialias),
        AmbientLight {
            color: Color::WHITE,
            brightness: ambient_brightness(scene.ambient_intensity),
            ..default()
        },
        MainCamera,
    ));

    let light_position = Vec3::from_array(scene.directional_light_position);
    commands.spawn((
        DirectionalLight {
            illuminance: directional_illuminance(scene.directional_light_intensity),
            ..default()
        },
        Transform::from_translation(light_position)
            .looking_to(light_direction(light_position, Vec3::ZERO), Vec3::Y),
        KeyLight,
    ));

    info!("Camera spawned");
}
