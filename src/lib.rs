mod core;
mod globe;
mod helpers;
mod loading;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::state::{AppState, ViewPhase};
use crate::globe::GlobePlugin;
use crate::globe::resources::GlobeSettings;
use crate::loading::LoadingPlugin;
use crate::ui::UIPlugin;

use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct HeatGlobePlugin;

impl Plugin for HeatGlobePlugin {
    fn build(&self, app: &mut App) {
        if let Err(err) = globegen::reload_config() {
            warn!(
                "Could not read {}, using defaults: {err}",
                globegen::config::CONFIG_PATH
            );
        }

        app.init_state::<AppState>()
            .init_resource::<GlobeSettings>()
            .init_resource::<ViewPhase>()
            .add_plugins((CameraPlugin, LoadingPlugin, GlobePlugin, UIPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}

/// sRGB clear color from the config, for `main` to install before the plugins
pub fn clear_color() -> ClearColor {
    let [r, g, b] = globegen::get_config().scene.clear_color;
    ClearColor(Color::srgb(r, g, b))
}
