// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow, WindowResolution};
use bevy::winit::WinitWindows;
use heatglobe::{HeatGlobePlugin, clear_color};
use std::io::Cursor;
use winit::window::Icon;

fn main() {
    App::new()
        .insert_resource(clear_color())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Heat Globe".into(),
                resolution: WindowResolution::new(900, 900),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(HeatGlobePlugin)
        .add_systems(Startup, set_window_icon)
        .run();
}

fn set_window_icon(
    windows: Option<NonSend<WinitWindows>>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
) {
    let Some(windows) = windows else {
        return;
    };
    let Ok(primary_entity) = primary_window.single() else {
        return;
    };
    let Some(primary) = windows.get_window(primary_entity) else {
        return;
    };
    let icon_buf = Cursor::new(include_bytes!("../assets/icons/icon.png"));
    if let Ok(image) = image::load(icon_buf, image::ImageFormat::Png) {
        let image = image.into_rgba8();
        let (width, height) = image.dimensions();
        let rgba = image.into_raw();
        match Icon::from_rgba(rgba, width, height) {
            Ok(icon) => primary.set_window_icon(Some(icon)),
            Err(err) => warn!("Invalid window icon: {err}"),
        }
    };
}
