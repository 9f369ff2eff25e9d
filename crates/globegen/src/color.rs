/// Turbo colormap, polynomial fit. Returns sRGB in `[0, 1]`.
pub fn turbo(t: f32) -> [f32; 3] {
    let x = t.clamp(0.0, 1.0);
    let r = 0.135_721_38
        + x * (4.615_392_6 + x * (-42.660_32 + x * (132.131_08 + x * (-152.942_4 + x * 59.286_38))));
    let g = 0.091_402_61
        + x * (2.194_188_4 + x * (4.842_966_6 + x * (-14.185_033 + x * (4.277_298_6 + x * 2.829_566))));
    let b = 0.106_673_3
        + x * (12.641_946 + x * (-60.582_05 + x * (110.362_77 + x * (-89.903_11 + x * 27.348_25))));
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear RGBA vertex color for a normalised density. Alpha rises with the
/// cube root so faint regions still show.
pub fn heat_color(t: f32) -> [f32; 4] {
    let t = t.clamp(0.0, 1.0);
    let [r, g, b] = turbo(t);
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), t.cbrt()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1.0)]
    #[case(0.0)]
    #[case(0.25)]
    #[case(0.5)]
    #[case(0.75)]
    #[case(1.0)]
    #[case(2.0)]
    fn turbo_stays_in_unit_range(#[case] t: f32) {
        for c in turbo(t) {
            assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn turbo_runs_from_blue_to_red() {
        let [r0, _, b0] = turbo(0.15);
        let [r1, _, b1] = turbo(1.0);

        assert!(b0 > r0);
        assert!(r1 > b1);
    }

    #[test]
    fn empty_density_is_fully_transparent() {
        assert_eq!(heat_color(0.0)[3], 0.0);
        assert!((heat_color(1.0)[3] - 1.0).abs() < 1e-6);
        assert!((heat_color(0.125)[3] - 0.5).abs() < 1e-6);
    }
}
