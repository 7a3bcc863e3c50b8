use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::{DEFAULT_EXPONENT, DEFAULT_MAX_ITERATIONS, FractalParams};
use crate::core::fractals::colour_map::IntensityPolicy;
use clap::Parser;
use std::error::Error;
use std::fmt;

pub const DEFAULT_FRAME_RATE: u32 = 144;
pub const MAX_POSITIONAL_ARGS: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "viewer")]
#[command(about = "Mandelbrot and Julia set viewer", long_about = None)]
pub struct Cli {
    /// EXP_RE [EXP_IM [MAX_ITERATIONS]]. The exponent defaults to 2+0i and
    /// the iteration cap to 20.
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub positionals: Vec<String>,

    /// Frame rate cap.
    #[arg(
        long = "frame-rate",
        value_name = "FPS",
        default_value_t = DEFAULT_FRAME_RATE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub frame_rate: u32,

    /// Wrap out-of-range grey intensities instead of clamping them.
    #[arg(long = "wrap-intensity")]
    pub wrap_intensity: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupArgsError {
    InvalidArgument {
        position: usize,
        value: String,
        reason: String,
    },
}

impl fmt::Display for StartupArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                position,
                value,
                reason,
            } => {
                write!(f, "invalid argument {} '{}': {}", position, value, reason)
            }
        }
    }
}

impl Error for StartupArgsError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupArgsWarning {
    IgnoredInput { ignored: Vec<String> },
}

impl fmt::Display for StartupArgsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IgnoredInput { ignored } => {
                write!(
                    f,
                    "Too many arguments, only accepting the first {} (ignored: {})",
                    MAX_POSITIONAL_ARGS,
                    ignored.join(" ")
                )
            }
        }
    }
}

/// Everything the viewer needs from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub params: FractalParams,
    pub frame_rate: u32,
    pub intensity_policy: IntensityPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            params: FractalParams::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            intensity_policy: IntensityPolicy::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_cli(cli: &Cli) -> Result<(Self, Vec<StartupArgsWarning>), StartupArgsError> {
        let (params, warnings) = parse_positionals(&cli.positionals)?;

        let intensity_policy = if cli.wrap_intensity {
            IntensityPolicy::Wrap
        } else {
            IntensityPolicy::Clamp
        };

        let config = Self {
            params,
            frame_rate: cli.frame_rate,
            intensity_policy,
        };

        Ok((config, warnings))
    }
}

/// Reads `[EXP_RE [EXP_IM [MAX_ITERATIONS]]]`. Anything past the third value
/// is reported back as a warning rather than rejected.
pub fn parse_positionals(
    args: &[String],
) -> Result<(FractalParams, Vec<StartupArgsWarning>), StartupArgsError> {
    let mut warnings = Vec::new();

    if args.len() > MAX_POSITIONAL_ARGS {
        warnings.push(StartupArgsWarning::IgnoredInput {
            ignored: args[MAX_POSITIONAL_ARGS..].to_vec(),
        });
    }

    let real = match args.first() {
        Some(value) => parse_component(1, value)?,
        None => DEFAULT_EXPONENT.real,
    };
    let imag = match args.get(1) {
        Some(value) => parse_component(2, value)?,
        None => DEFAULT_EXPONENT.imag,
    };
    let max_iterations = match args.get(2) {
        Some(value) => parse_iterations(3, value)?,
        None => DEFAULT_MAX_ITERATIONS,
    };

    let params = FractalParams::new(Complex::new(real, imag), max_iterations).map_err(|err| {
        StartupArgsError::InvalidArgument {
            position: 3,
            value: max_iterations.to_string(),
            reason: err.to_string(),
        }
    })?;

    Ok((params, warnings))
}

fn parse_component(position: usize, value: &str) -> Result<f32, StartupArgsError> {
    let invalid = |reason: &str| StartupArgsError::InvalidArgument {
        position,
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let parsed: f32 = value.trim().parse().map_err(|_| invalid("not a number"))?;

    if !parsed.is_finite() {
        return Err(invalid("not a finite number"));
    }

    Ok(parsed)
}

fn parse_iterations(position: usize, value: &str) -> Result<u32, StartupArgsError> {
    value
        .trim()
        .parse()
        .map_err(|_| StartupArgsError::InvalidArgument {
            position,
            value: value.to_string(),
            reason: "not a positive integer".to_string(),
        })
}
