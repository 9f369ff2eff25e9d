use crate::core::state::ViewPhase;
use crate::globe::resources::GlobeSettings;
use crate::ui::bundles::*;
use crate::ui::components::*;
use bevy::prelude::*;

pub fn spawn_loading_overlay(
    mut commands: Commands,
    settings: Res<GlobeSettings>,
    overlays: Query<(), With<LoadingOverlay>>,
) {
    if !overlays.is_empty() {
        return;
    }
    let overlay = &settings.overlay;
    let [r, g, b, a] = overlay.background;

    commands
        .spawn(OverlayBundle::new(Color::srgba(r, g, b, a)))
        .with_children(|parent| {
            parent.spawn((
                LabelBundle::new(&overlay.text, overlay.font_size, Color::WHITE),
                LoadingText,
            ));
        });
}

/// Removes the overlay for good once the texture is in
pub fn hide_loading_overlay(
    mut commands: Commands,
    phase: Res<ViewPhase>,
    overlays: Query<Entity, With<LoadingOverlay>>,
) {
    if phase.overlay_visible() || overlays.is_empty() {
        return;
    }
    for entity in &overlays {
        commands.entity(entity).despawn();
    }
    info!("Loading overlay hidden");
}
