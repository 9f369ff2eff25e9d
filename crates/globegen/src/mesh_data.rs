use crate::color::heat_color;
use crate::config::HeatmapConfig;
use crate::density::{DensityField, normalise};
use crate::geo::lat_lng_to_dir;
use crate::sample::HeatmapPoint;

/// Raw mesh data that can be used by any rendering engine
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

/// A density shell around a globe of `radius`. Vertices rise from
/// `base_altitude` to `top_altitude` (fractions of the radius) with density.
#[derive(Debug, Clone)]
pub struct HeatmapLayer {
    pub radius: f32,
    pub base_altitude: f32,
    pub top_altitude: f32,
    pub bandwidth_deg: f32,
    pub color_saturation: f32,
    pub segments: u32,
    pub rings: u32,
}

impl HeatmapLayer {
    pub fn new(radius: f32, config: &HeatmapConfig) -> Self {
        Self {
            radius,
            base_altitude: config.base_altitude,
            top_altitude: config.top_altitude,
            bandwidth_deg: config.bandwidth_deg,
            color_saturation: config.color_saturation,
            segments: config.segments.max(3),
            rings: config.rings.max(2),
        }
    }

    /// Altitude, in globe radii, for a normalised density.
    pub fn altitude(&self, t: f32) -> f32 {
        self.base_altitude + (self.top_altitude - self.base_altitude) * t
    }

    /// Builds the shell as a lat/lng grid, rows from north to south and
    /// columns from west to east, wound counter-clockwise seen from outside.
    pub fn build<P: HeatmapPoint>(&self, points: &[P]) -> MeshData {
        let field = DensityField::new(points, self.bandwidth_deg);
        let cols = self.segments + 1;
        let rows = self.rings + 1;

        let mut dirs = Vec::with_capacity((cols * rows) as usize);
        for row in 0..rows {
            let lat = 90.0 - 180.0 * row as f32 / self.rings as f32;
            for col in 0..cols {
                let lng = -180.0 + 360.0 * col as f32 / self.segments as f32;
                dirs.push(lat_lng_to_dir(lat, lng));
            }
        }

        let mut density = vec![0.0; dirs.len()];
        if !field.is_empty() {
            for (value, dir) in density.iter_mut().zip(&dirs) {
                *value = field.sample(*dir);
            }
            normalise(&mut density, self.color_saturation);
        }

        let positions = dirs
            .iter()
            .zip(&density)
            .map(|(d, t)| (*d * self.radius * (1.0 + self.altitude(*t))).to_array())
            .collect();
        let normals = dirs.iter().map(|d| d.to_array()).collect();
        let colors = density.iter().map(|t| heat_color(*t)).collect();

        let mut indices = Vec::with_capacity((self.segments * self.rings * 6) as usize);
        for row in 0..self.rings {
            for col in 0..self.segments {
                let a = row * cols + col;
                let b = a + 1;
                let c = a + cols;
                let d = c + 1;
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        MeshData {
            positions,
            normals,
            colors,
            indices,
        }
    }
}
