use crate::controllers::viewer::layout::PaneLayout;
use crate::core::actions::render_fractal::render_fractal::{FractalRenderer, RenderFractalError};
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;
use crate::core::fractals::colour_map::{GreyEscapeColourMap, IntensityPolicy};
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::probe::{ProbeBounds, ProbeControlsSnapshot, initial_probe, update_probe};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords_unchecked;
use log::{debug, trace};
use std::time::Instant;

pub const PROBE_MARKER_RADIUS: i32 = 2;
pub const PROBE_MARKER_COLOUR: Colour = Colour::RED;
pub const CLEAR_COLOUR: Colour = Colour::BLACK;

struct FrameBuffers {
    layout: PaneLayout,
    mandelbrot: PixelBuffer,
    julia: PixelBuffer,
    frame: PixelBuffer,
}

impl FrameBuffers {
    fn new(layout: PaneLayout) -> Self {
        Self {
            layout,
            mandelbrot: PixelBuffer::new(layout.mandelbrot),
            julia: PixelBuffer::new(layout.julia),
            frame: PixelBuffer::new(layout.frame),
        }
    }

    fn resize(&mut self, layout: PaneLayout) {
        self.layout = layout;
        self.mandelbrot.resize(layout.mandelbrot);
        self.julia.resize(layout.julia);
        self.frame.resize(layout.frame);
    }
}

/// Frame logic of the viewer, independent of any window: moves the probe,
/// renders both panes and composes them with the probe marker.
pub struct ViewerController {
    params: FractalParams,
    colour_map: GreyEscapeColourMap,
    probe: Point,
    julia_seed: Complex,
    renderer: FractalRenderer,
    buffers: Option<FrameBuffers>,
}

impl ViewerController {
    #[must_use]
    pub fn new(
        params: FractalParams,
        intensity_policy: IntensityPolicy,
        window_width: u32,
        window_height: u32,
    ) -> Self {
        let probe = initial_probe(window_width, window_height);

        Self {
            params,
            colour_map: GreyEscapeColourMap::new(params.max_iterations(), intensity_policy),
            probe,
            julia_seed: Complex::ZERO,
            renderer: FractalRenderer::new(),
            buffers: None,
        }
    }

    #[must_use]
    pub fn probe(&self) -> Point {
        self.probe
    }

    /// Seed used by the most recently rendered Julia pane.
    #[must_use]
    pub fn julia_seed(&self) -> Complex {
        self.julia_seed
    }

    /// Runs one frame. Returns `None` when the window is too small to show
    /// both panes; the probe is still updated.
    pub fn render_frame(
        &mut self,
        controls: ProbeControlsSnapshot,
        window_width: u32,
        window_height: u32,
    ) -> Result<Option<&PixelBuffer>, RenderFractalError> {
        let start = Instant::now();

        let report = update_probe(
            &mut self.probe,
            controls,
            ProbeBounds::for_window(window_width, window_height),
        );

        if report.moved {
            debug!("probe moved to ({}, {})", self.probe.x, self.probe.y);
        }

        if report.clamped {
            trace!(
                "probe held at ({}, {}) by a {}x{} window",
                self.probe.x, self.probe.y, window_width, window_height
            );
        }

        let Some(layout) = PaneLayout::for_window(window_width, window_height) else {
            return Ok(None);
        };

        let buffers = match self.buffers.take() {
            Some(mut buffers) => {
                if buffers.layout != layout {
                    debug!("resizing frame to {}x{}", window_width, window_height);
                    buffers.resize(layout);
                }
                buffers
            }
            None => FrameBuffers::new(layout),
        };
        let buffers = self.buffers.insert(buffers);

        buffers.frame.fill(CLEAR_COLOUR);

        self.renderer.render_into(
            &mut buffers.mandelbrot,
            FractalMode::Mandelbrot,
            &self.params,
            &self.colour_map,
        )?;

        self.julia_seed = pixel_to_complex_coords_unchecked(
            self.probe,
            layout.mandelbrot,
            ComplexRect::plane_window(),
        );

        self.renderer.render_into(
            &mut buffers.julia,
            FractalMode::Julia {
                seed: self.julia_seed,
            },
            &self.params,
            &self.colour_map,
        )?;

        buffers.frame.blit(&buffers.mandelbrot);
        buffers.frame.blit(&buffers.julia);
        draw_marker(&mut buffers.frame, self.probe).map_err(RenderFractalError::PixelBuffer)?;

        trace!("frame rendered in {:?}", start.elapsed());

        Ok(Some(&buffers.frame))
    }
}

/// Filled disc centred on `centre`, clipped to the frame.
fn draw_marker(frame: &mut PixelBuffer, centre: Point) -> Result<(), PixelBufferError> {
    let radius = PROBE_MARKER_RADIUS;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }

            let pixel = Point {
                x: centre.x + dx,
                y: centre.y + dy,
            };

            if frame.pixel_rect().contains_point(pixel) {
                frame.set_pixel(pixel, PROBE_MARKER_COLOUR)?;
            }
        }
    }

    Ok(())
}
