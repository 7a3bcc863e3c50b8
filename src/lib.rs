pub mod controllers;
pub mod core;
pub mod input;
#[cfg(feature = "gui")]
pub mod presenters;

pub use crate::controllers::viewer::controller::ViewerController;
pub use crate::core::actions::render_fractal::render_fractal::{FractalRenderer, RenderFractalError, render};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::fractal_params::FractalParams;
pub use crate::core::fractals::colour_map::IntensityPolicy;
pub use crate::core::fractals::fractal_mode::FractalMode;
pub use crate::core::probe::ProbeControlsSnapshot;
pub use crate::input::cli::startup_args::{Cli, StartupArgsError, StartupArgsWarning, ViewerConfig};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
