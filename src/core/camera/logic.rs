use bevy::math::Vec3;
use bevy::prelude::Msaa;

/// Ambient brightness for an intensity of 1.0
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 400.0;
/// Directional illuminance (lux) for an intensity of 1.0
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 5_000.0;

pub fn msaa_for(antialias: bool) -> Msaa {
    if antialias { Msaa::Sample4 } else { Msaa::Off }
}

pub fn ambient_brightness(intensity: f32) -> f32 {
    intensity.max(0.0) * AMBIENT_BRIGHTNESS_PER_UNIT
}

pub fn directional_illuminance(intensity: f32) -> f32 {
    intensity.max(0.0) * DIRECTIONAL_LUX_PER_UNIT
}

/// Directional lights only use their rotation, so the position just sets the
/// direction the light shines from towards `target`.
pub fn light_direction(position: Vec3, target: Vec3) -> Vec3 {
    (target - position).normalize_or(Vec3::NEG_Z)
}
