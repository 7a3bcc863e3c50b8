use crate::core::data::complex::Complex;

/// Which set a pane shows. Julia panes carry the seed `c` they iterate with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia {
        seed: Complex,
    },
}

impl FractalMode {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_mandelbrot() {
        assert_eq!(FractalMode::default(), FractalMode::Mandelbrot);
    }

    #[test]
    fn display_names() {
        let julia = FractalMode::Julia {
            seed: Complex::new(-0.7, 0.27),
        };

        assert_eq!(FractalMode::Mandelbrot.display_name(), "Mandelbrot");
        assert_eq!(julia.display_name(), "Julia");
    }
}
