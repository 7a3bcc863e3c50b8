use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::EscapeResult;
use log::warn;
use std::convert::Infallible;

/// What to do when a smoothed count maps outside `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntensityPolicy {
    #[default]
    Clamp,
    /// Keep the low 8 bits, as an unchecked `u8` conversion would.
    Wrap,
}

/// Bounded points are white, escaped points a grey proportional to their
/// smoothed count. Every colour is opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreyEscapeColourMap {
    max_iterations: u32,
    policy: IntensityPolicy,
}

impl GreyEscapeColourMap {
    #[must_use]
    pub fn new(max_iterations: u32, policy: IntensityPolicy) -> Self {
        Self {
            max_iterations,
            policy,
        }
    }

    fn intensity(&self, smoothed: f32) -> u8 {
        let ratio = smoothed / self.max_iterations as f32;
        let scaled = (ratio * 255.0).floor();

        // counts from `iterate` stay below `max_iterations - 1`, so only
        // values produced elsewhere land here
        if !(0.0..=255.0).contains(&scaled) {
            let diagnostic = format!(
                "intensity {} out of range for smoothed count {} (max iterations {})",
                scaled, smoothed, self.max_iterations
            );
            println!("{}", diagnostic);
            warn!("{}", diagnostic);
        }

        match self.policy {
            IntensityPolicy::Clamp => (ratio.clamp(0.0, 1.0) * 255.0).floor() as u8,
            IntensityPolicy::Wrap => (scaled as i64).rem_euclid(256) as u8,
        }
    }
}

impl ColourMap for GreyEscapeColourMap {
    type T = EscapeResult;
    type Failure = Infallible;

    fn map(&self, value: EscapeResult) -> Result<Colour, Self::Failure> {
        Ok(match value {
            EscapeResult::BoundedOrUnknown => Colour::WHITE,
            EscapeResult::Escaped(smoothed) => Colour::grey(self.intensity(smoothed)),
        })
    }

    fn display_name(&self) -> &str {
        "Grey escape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::fractal_params::FractalParams;
    use crate::core::fractals::escape_time::iterate;

    fn map(max_iterations: u32, policy: IntensityPolicy, value: EscapeResult) -> Colour {
        GreyEscapeColourMap::new(max_iterations, policy)
            .map(value)
            .unwrap()
    }

    #[test]
    fn bounded_is_opaque_white() {
        let colour = map(20, IntensityPolicy::Clamp, EscapeResult::BoundedOrUnknown);

        assert_eq!(colour, Colour { r: 255, g: 255, b: 255, a: 255 });
    }

    #[test]
    fn escaped_grey_is_floor_of_ratio() {
        for (smoothed, expected) in [(0.0, 0), (5.0, 63), (10.0, 127), (19.5, 248), (20.0, 255)] {
            let colour = map(20, IntensityPolicy::Clamp, EscapeResult::Escaped(smoothed));

            assert_eq!(colour, Colour::grey(expected), "smoothed={}", smoothed);
            assert_eq!(colour.a, 255);
        }
    }

    #[test]
    fn clamp_policy_saturates_overflow() {
        let colour = map(20, IntensityPolicy::Clamp, EscapeResult::Escaped(30.0));

        assert_eq!(colour, Colour::grey(255));
    }

    #[test]
    fn wrap_policy_keeps_low_bits() {
        // 30 / 20 * 255 = 382.5 -> 382 -> 126
        let colour = map(20, IntensityPolicy::Wrap, EscapeResult::Escaped(30.0));

        assert_eq!(colour, Colour::grey(126));
    }

    #[test]
    fn policies_agree_in_range() {
        for step in 0..=40 {
            let value = EscapeResult::Escaped(step as f32 * 0.5);

            assert_eq!(
                map(20, IntensityPolicy::Clamp, value),
                map(20, IntensityPolicy::Wrap, value)
            );
        }
    }

    #[test]
    fn kernel_counts_never_overflow_the_channel() {
        let params = FractalParams::new(Complex::new(2.0, 0.0), 8).unwrap();
        let colour_map = GreyEscapeColourMap::new(params.max_iterations(), IntensityPolicy::Wrap);

        for step in 0..400 {
            let c = Complex::new(-2.5 + step as f32 * 0.00875, 0.05);
            if let EscapeResult::Escaped(smoothed) = iterate(Complex::ZERO, c, &params) {
                let scaled = (smoothed / params.max_iterations() as f32 * 255.0).floor();

                assert!((0.0..255.0).contains(&scaled), "c={:?}", c);
                assert_eq!(colour_map.map(EscapeResult::Escaped(smoothed)).unwrap().r, scaled as u8);
            }
        }
    }

    #[test]
    fn default_policy_is_clamp() {
        assert_eq!(IntensityPolicy::default(), IntensityPolicy::Clamp);
    }
}
