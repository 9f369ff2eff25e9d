use crate::geo::{angular_distance, lat_lng_to_dir};
use crate::sample::HeatmapPoint;
use glam::Vec3;

/// Kernels are cut off past this many bandwidths.
const KERNEL_CUTOFF: f32 = 3.0;

/// Weighted Gaussian kernel density over great-circle distance.
#[derive(Debug, Clone)]
pub struct DensityField {
    dirs: Vec<Vec3>,
    weights: Vec<f32>,
    inv_two_sigma_sq: f32,
    cos_cutoff: f32,
}

impl DensityField {
    pub fn new<P: HeatmapPoint>(points: &[P], bandwidth_deg: f32) -> Self {
        let sigma = bandwidth_deg.max(f32::EPSILON).to_radians();
        let cutoff = (sigma * KERNEL_CUTOFF).min(std::f32::consts::PI);
        Self {
            dirs: points
                .iter()
                .map(|p| lat_lng_to_dir(p.lat(), p.lng()))
                .collect(),
            weights: points.iter().map(|p| p.weight().max(0.0)).collect(),
            inv_two_sigma_sq: 1.0 / (2.0 * sigma * sigma),
            cos_cutoff: cutoff.cos(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Density at a unit direction.
    pub fn sample(&self, dir: Vec3) -> f32 {
        self.dirs
            .iter()
            .zip(&self.weights)
            .filter_map(|(d, w)| {
                if d.dot(dir) < self.cos_cutoff {
                    return None;
                }
                let angle = angular_distance(*d, dir);
                Some(w * (-angle * angle * self.inv_two_sigma_sq).exp())
            })
            .sum()
    }
}

/// Scales densities into `[0, 1]` relative to the peak, boosted by `saturation`.
/// An all-zero field stays zero.
pub fn normalise(values: &mut [f32], saturation: f32) {
    let max = values.iter().copied().fold(0.0_f32, f32::max);
    if max <= 0.0 {
        return;
    }
    for v in values.iter_mut() {
        *v = (*v / max * saturation).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::HeatmapSample;

    fn point(lat: f32, lng: f32, weight: f32) -> HeatmapSample {
        HeatmapSample { lat, lng, weight }
    }

    #[test]
    fn density_peaks_at_the_sample() {
        let field = DensityField::new(&[point(10.0, 20.0, 1.0)], 2.5);

        let at = field.sample(lat_lng_to_dir(10.0, 20.0));
        let near = field.sample(lat_lng_to_dir(12.0, 20.0));
        let far = field.sample(lat_lng_to_dir(-40.0, -100.0));

        assert!((at - 1.0).abs() < 1e-4, "peak was {at}");
        assert!(near < at && near > 0.0);
        assert_eq!(far, 0.0);
    }

    #[test]
    fn density_falls_off_with_great_circle_angle() {
        let field = DensityField::new(&[point(0.0, 0.0, 1.0)], 2.5);
        let probe = lat_lng_to_dir(0.0, 2.5);

        let angle = angular_distance(Vec3::Z, probe);
        let sigma = 2.5_f32.to_radians();
        let expected = (-angle * angle / (2.0 * sigma * sigma)).exp();

        assert!((field.sample(probe) - expected).abs() < 1e-4);
        assert!((expected - (-0.5_f32).exp()).abs() < 1e-3);
    }

    #[test]
    fn heavier_points_dominate() {
        let field = DensityField::new(&[point(0.0, 0.0, 0.2), point(0.0, 90.0, 0.9)], 2.5);

        assert!(field.sample(lat_lng_to_dir(0.0, 90.0)) > field.sample(lat_lng_to_dir(0.0, 0.0)));
    }

    #[test]
    fn empty_field_is_zero_everywhere() {
        let field = DensityField::new::<HeatmapSample>(&[], 2.5);

        assert!(field.is_empty());
        assert_eq!(field.sample(Vec3::Y), 0.0);
    }

    #[test]
    fn normalise_saturates_and_clamps() {
        let mut values = vec![0.0, 1.0, 2.0, 4.0];

        normalise(&mut values, 1.5);

        assert_eq!(values, vec![0.0, 0.375, 0.75, 1.0]);
    }

    #[test]
    fn normalise_leaves_zero_field_alone() {
        let mut values = vec![0.0; 3];
        normalise(&mut values, 1.5);
        assert_eq!(values, vec![0.0; 3]);
    }
}
