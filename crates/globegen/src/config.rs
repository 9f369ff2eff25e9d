use serde::{Deserialize, Serialize};
use std::sync::{Mutex, OnceLock, PoisonError};

pub const CONFIG_PATH: &str = "globe_config.toml";

static CONFIG: OnceLock<Mutex<GlobeConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading from file if not already loaded.
/// A missing or malformed file yields the built-in defaults.
pub fn get_config() -> GlobeConfig {
    let config_mutex = CONFIG.get_or_init(|| {
        Mutex::new(GlobeConfig::load_from_file(CONFIG_PATH).unwrap_or_default())
    });
    config_mutex
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Re-read the config file. On error the previously cached config is kept.
pub fn reload_config() -> Result<(), Box<dyn std::error::Error>> {
    reload_config_from_file(CONFIG_PATH)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub scene: SceneConfig,
    pub sphere: SphereConfig,
    pub globe: GlobeLayerConfig,
    pub heatmap: HeatmapConfig,
    pub patch: PatchConfig,
    pub rotation: RotationConfig,
    pub overlay: OverlayConfig,
}

/// Camera, lights and canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera_position: [f32; 3],
    /// Vertical field of view
    pub fov_degrees: f32,
    pub antialias: bool,
    /// sRGB
    pub clear_color: [f32; 3],
    pub ambient_intensity: f32,
    pub directional_light_position: [f32; 3],
    pub directional_light_intensity: f32,
}

/// The textured sphere shown once the bundled image is decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub radius: f32,
    pub sectors: u32,
    pub stacks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeLayerConfig {
    pub radius: f32,
    pub show_base_sphere: bool,
    /// sRGB, only used when `show_base_sphere` is on
    pub base_color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub point_count: usize,
    /// Samples are drawn from [-max_latitude, max_latitude] to keep them off the poles
    pub max_latitude: f32,
    /// Altitudes are fractions of the globe radius
    pub base_altitude: f32,
    pub top_altitude: f32,
    pub bandwidth_deg: f32,
    pub color_saturation: f32,
    pub segments: u32,
    pub rings: u32,
}

/// Material flags forced onto the heatmap layer after `delay_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    pub delay_ms: u64,
    pub transparent: bool,
    pub opacity: f32,
    pub depth_write: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Radians per second around the vertical axis
    pub auto_speed: f32,
    /// Radians per pixel of horizontal drag
    pub drag_sensitivity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub text: String,
    pub font_size: f32,
    /// sRGBA
    pub background: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_position: [0.0, 0.0, 400.0],
            fov_degrees: 50.0,
            antialias: true,
            clear_color: [0.0, 0.0, 17.0 / 255.0],
            ambient_intensity: 1.0,
            directional_light_position: [5.0, 3.0, 5.0],
            directional_light_intensity: 1.0,
        }
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            sectors: 32,
            stacks: 32,
        }
    }
}

impl Default for GlobeLayerConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            show_base_sphere: false,
            base_color: [0.0, 0.0, 0.3],
        }
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            point_count: 688,
            max_latitude: 80.0,
            base_altitude: 0.01,
            top_altitude: 0.7,
            bandwidth_deg: 2.5,
            color_saturation: 1.5,
            segments: 128,
            rings: 64,
        }
    }
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            transparent: false,
            opacity: 0.6,
            depth_write: true,
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            auto_speed: 0.1,
            drag_sensitivity: 0.005,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            text: "Loading texture...".to_string(),
            font_size: 18.0,
            background: [0.0, 0.0, 17.0 / 255.0, 0.8],
        }
    }
}

impl GlobeConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GlobeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn reload_config_from_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let new_config = GlobeConfig::load_from_file(path)?;

    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *config_mutex.lock().unwrap_or_else(PoisonError::into_inner) = new_config;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_screen_layout() {
        let config = GlobeConfig::default();

        assert_eq!(config.scene.camera_position, [0.0, 0.0, 400.0]);
        assert_eq!(config.scene.fov_degrees, 50.0);
        assert!(config.scene.antialias);
        assert_eq!(config.scene.directional_light_position, [5.0, 3.0, 5.0]);
        assert_eq!(config.sphere.radius, 100.0);
        assert_eq!((config.sphere.sectors, config.sphere.stacks), (32, 32));
        assert!(!config.globe.show_base_sphere);
        assert_eq!(config.heatmap.point_count, 688);
        assert_eq!(config.heatmap.top_altitude, 0.7);
        assert_eq!(config.patch.delay_ms, 1000);
        assert_eq!(config.patch.opacity, 0.6);
        assert!(!config.patch.transparent);
        assert!(config.patch.depth_write);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let content = r#"
            [heatmap]
            point_count = 10

            [patch]
            delay_ms = 250
        "#;

        let config: GlobeConfig = toml::from_str(content).unwrap();

        assert_eq!(config.heatmap.point_count, 10);
        assert_eq!(config.heatmap.max_latitude, 80.0);
        assert_eq!(config.patch.delay_ms, 250);
        assert_eq!(config.patch.opacity, 0.6);
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(GlobeConfig::load_from_file("does/not/exist.toml").is_err());
    }

    #[test]
    fn saved_file_loads_back() {
        let path = std::env::temp_dir().join("globegen_config_test.toml");
        let path = path.to_str().unwrap();
        let mut config = GlobeConfig::default();
        config.rotation.auto_speed = 0.0;

        config.save_to_file(path).unwrap();
        let loaded = GlobeConfig::load_from_file(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, config);
    }
}
