use crate::core::state::{AppState, ViewPhase};
use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TextureLoaded>()
            .add_loading_state(
                LoadingState::new(AppState::AssetLoading)
                    .continue_to_state(AppState::Ready)
                    .on_failure_continue_to_state(AppState::LoadFailed)
                    .load_collection::<TextureAssets>(),
            )
            .add_systems(OnEnter(AppState::Ready), configure_texture)
            .add_systems(OnEnter(AppState::LoadFailed), report_texture_failure)
            .add_systems(Update, record_texture_loaded);
    }
}

#[derive(AssetCollection, Resource)]
pub struct TextureAssets {
    #[asset(path = "images/baseball.png")]
    pub globe_texture: Handle<Image>,
}

/// Sent once, when the globe texture is decoded and configured
#[derive(Message, Debug, Clone, Copy)]
pub struct TextureLoaded;

pub fn configure_texture(
    textures: Res<TextureAssets>,
    mut images: ResMut<Assets<Image>>,
    mut loaded: MessageWriter<TextureLoaded>,
) {
    // Bevy samples images top row first, so there is no vertical flip to turn off
    if let Some(image) = images.get_mut(&textures.globe_texture) {
        image.sampler = repeat_sampler();
    }
    info!("Texture loaded");
    loaded.write(TextureLoaded);
}

pub fn report_texture_failure() {
    // The asset server has already logged the failing path
    error!("Error loading texture: the globe texture could not be loaded");
}

pub fn record_texture_loaded(
    mut loaded: MessageReader<TextureLoaded>,
    mut phase: ResMut<ViewPhase>,
) {
    for _ in loaded.read() {
        let next = phase.on_texture_loaded();
        phase.set_if_neq(next);
    }
}

pub fn repeat_sampler() -> ImageSampler {
    ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..ImageSamplerDescriptor::linear()
    })
}
