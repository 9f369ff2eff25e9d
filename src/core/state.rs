use bevy::prelude::{Resource, States};

/// Driven by the asset loader. Never leaves `Ready` or `LoadFailed`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum AppState {
    #[default]
    AssetLoading,
    Ready,
    // The overlay stays up in this state, nothing retries the load
    LoadFailed,
}

/// What the view has finished setting up. Only moves forward.
#[derive(Resource, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ViewPhase {
    #[default]
    Initializing,
    TextureReady,
    GlobeReady,
    Ready,
}

impl ViewPhase {
    pub fn on_texture_loaded(self) -> Self {
        match self {
            ViewPhase::Initializing => ViewPhase::TextureReady,
            ViewPhase::GlobeReady => ViewPhase::Ready,
            other => other,
        }
    }

    pub fn on_globe_built(self) -> Self {
        match self {
            ViewPhase::Initializing => ViewPhase::GlobeReady,
            ViewPhase::TextureReady => ViewPhase::Ready,
            other => other,
        }
    }

    pub fn texture_ready(self) -> bool {
        matches!(self, ViewPhase::TextureReady | ViewPhase::Ready)
    }

    pub fn globe_ready(self) -> bool {
        matches!(self, ViewPhase::GlobeReady | ViewPhase::Ready)
    }

    pub fn overlay_visible(self) -> bool {
        !self.texture_ready()
    }
}
