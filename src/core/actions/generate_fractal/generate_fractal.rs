use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates `algorithm` over its whole pixel rect in row-major order into
/// `results`, which is cleared first and keeps its allocation between frames.
pub fn generate_fractal_into<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    results: &mut Vec<Alg::Success>,
) -> Result<(), Alg::Failure> {
    let pixel_rect = algorithm.pixel_rect();

    results.clear();
    results.reserve(pixel_rect.size() as usize);

    for pixel in pixel_rect.points() {
        results.push(algorithm.compute(pixel)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError;

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "stub failure")
        }
    }

    impl Error for StubError {}

    struct StubAlgorithm {
        pixel_rect: PixelRect,
        fail_at: Option<Point>,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if self.fail_at == Some(pixel) {
                return Err(StubError);
            }

            Ok((pixel.x, pixel.y))
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[test]
    fn test_visits_every_pixel_row_major() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(Point { x: 10, y: 5 }, Point { x: 12, y: 6 }).unwrap(),
            fail_at: None,
        };

        let mut results = Vec::new();

        generate_fractal_into(&algorithm, &mut results).unwrap();

        assert_eq!(
            results,
            vec![(10, 5), (11, 5), (12, 5), (10, 6), (11, 6), (12, 6)]
        );
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(Point { x: 0, y: 0 }, Point { x: 3, y: 3 }).unwrap(),
            fail_at: Some(Point { x: 2, y: 1 }),
        };

        let mut results = Vec::new();

        assert_eq!(generate_fractal_into(&algorithm, &mut results), Err(StubError));
    }

    #[test]
    fn test_into_replaces_previous_contents() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 0 }).unwrap(),
            fail_at: None,
        };
        let mut results = vec![(9, 9); 10];

        generate_fractal_into(&algorithm, &mut results).unwrap();

        assert_eq!(results, vec![(0, 0), (1, 0)]);
    }
}
