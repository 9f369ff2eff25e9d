pub mod color;
pub mod config;
pub mod density;
pub mod geo;
pub mod mesh_data;
pub mod sample;

pub use config::{get_config, reload_config};
