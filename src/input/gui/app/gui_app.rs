use crate::controllers::viewer::controller::ViewerController;
use crate::input::cli::startup_args::ViewerConfig;
use crate::input::gui::app::frame_limiter::FrameLimiter;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::probe_input::ProbeInputState;
use crate::input::gui::errors::GuiError;
use log::{debug, error, info};
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::Window,
};

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    presenter: T,
    controller: ViewerController,
    input: ProbeInputState,
    limiter: FrameLimiter,
    failure: Option<GuiError>,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &Window, presenter: T, config: &ViewerConfig) -> Self {
        let size = window.inner_size();

        info!(
            "opening {}x{} window, exponent {:?}, {} max iterations, {} fps cap",
            size.width,
            size.height,
            config.params.exponent(),
            config.params.max_iterations(),
            config.frame_rate
        );

        Self {
            width: size.width,
            height: size.height,
            presenter,
            controller: ViewerController::new(
                config.params,
                config.intensity_policy,
                size.width,
                size.height,
            ),
            input: ProbeInputState::default(),
            limiter: FrameLimiter::new(config.frame_rate, Instant::now()),
            failure: None,
        }
    }

    /// Drives the event loop until the window closes or a frame fails.
    pub fn run(mut self, window: &'static Window, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::AboutToWait => {
                let now = Instant::now();

                if self.limiter.frame_due(now) {
                    self.limiter.mark_frame(now);
                    window.request_redraw();
                }

                elwt.set_control_flow(ControlFlow::WaitUntil(self.limiter.next_deadline()));
            }
            _ => {}
        })?;

        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => {
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                debug!("window resized to {}x{}", size.width, size.height);
                self.width = size.width;
                self.height = size.height;

                if size.width > 0 && size.height > 0 {
                    if let Err(err) = self.presenter.resize(size.width, size.height) {
                        self.fail(err, elwt);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_cursor_moved(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => {
                self.input.handle_cursor_left();
            }
            WindowEvent::MouseInput { state, .. } => {
                self.input.handle_mouse_input(state);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    self.input.handle_key_event(key_code, event.state);
                }
            }
            WindowEvent::Focused(false) => {
                self.input.release_keys();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(err, elwt);
                }
            }
            _ => {}
        }
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        let controls = self.input.snapshot();

        if let Some(frame) = self.controller.render_frame(controls, self.width, self.height)? {
            self.presenter.present(frame)?;
        }

        Ok(())
    }

    fn fail(&mut self, err: GuiError, elwt: &EventLoopWindowTarget<()>) {
        error!("{}", err);
        self.failure = Some(err);
        elwt.exit();
    }
}
