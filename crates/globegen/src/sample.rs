use rand::Rng;

/// Accessors the heatmap layer reads a point through.
pub trait HeatmapPoint {
    fn lat(&self) -> f32;
    fn lng(&self) -> f32;
    fn weight(&self) -> f32;
}

/// A geographic point with an intensity, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapSample {
    pub lat: f32,
    pub lng: f32,
    pub weight: f32,
}

impl HeatmapPoint for HeatmapSample {
    fn lat(&self) -> f32 {
        self.lat
    }

    fn lng(&self) -> f32 {
        self.lng
    }

    fn weight(&self) -> f32 {
        self.weight
    }
}

/// Draws `count` independent uniform samples. Latitude is limited to
/// `[-max_latitude, max_latitude]`, longitude spans the whole globe and the
/// weight lies in `[0, 1)`.
pub fn generate_samples<R: Rng>(
    rng: &mut R,
    count: usize,
    max_latitude: f32,
) -> Vec<HeatmapSample> {
    (0..count)
        .map(|_| HeatmapSample {
            lat: (rng.random::<f32>() - 0.5) * 2.0 * max_latitude,
            lng: (rng.random::<f32>() - 0.5) * 360.0,
            weight: rng.random::<f32>(),
        })
        .collect()
}
