use bevy::prelude::{Deref, Resource};
use globegen::config::GlobeConfig;

/// Snapshot of `globe_config.toml` taken when the app starts.
#[derive(Resource, Clone, Debug, Deref)]
pub struct GlobeSettings(pub GlobeConfig);

impl Default for GlobeSettings {
    fn default() -> Self {
        Self(globegen::get_config())
    }
}
