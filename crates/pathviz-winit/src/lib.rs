//! Winit graphical front end for pathviz.
//!
//! Draws the grid as coloured squares in a fixed-size native window using:
//! - [`winit`] for window creation and input events
//! - [`softbuffer`] for CPU-based pixel presentation
//!
//! # Usage
//!
//! ```rust,no_run
//! use pathviz_app::{Visualizer, VisualizerConfig};
//! use pathviz_winit::{WinitConfig, WinitDriver};
//!
//! let visualizer = Visualizer::new(VisualizerConfig::default()).unwrap();
//! WinitDriver::new(WinitConfig::default()).run(visualizer).unwrap();
//! ```

mod input;
mod renderer;

use std::error::Error;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use pathviz_app::{Flow, InputMapper, Visualizer};
use pathviz_core::{MouseAction, Msg, Point, Renderer};

use renderer::CanvasRenderer;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit driver.
pub struct WinitConfig {
    /// Window title prefix; the status line is appended.
    pub title: String,
    /// Time between redraws while the window is idle or a search runs.
    pub frame_interval: Duration,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "Path Finding Visualizer".into(),
            frame_interval: Duration::from_millis(16),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Owns the main-thread event loop and drives a [`Visualizer`].
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }

    /// Open the window and block until it is closed.
    pub fn run(self, visualizer: Visualizer) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let mut app = WinitApp::new(self.config, visualizer);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitApp: ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp {
    config: WinitConfig,
    visualizer: Visualizer,
    mapper: InputMapper,
    cursor: Point,
    title: String,
    state: Option<WinitState>,
    error: Option<Box<dyn Error>>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    renderer: CanvasRenderer,
}

impl WinitApp {
    fn new(config: WinitConfig, visualizer: Visualizer) -> Self {
        let cell = visualizer.config().cell_width();
        let size = visualizer.grid().size();
        Self {
            mapper: InputMapper::new(size, cell, cell),
            config,
            visualizer,
            cursor: Point::ZERO,
            title: String::new(),
            state: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<WinitState, Box<dyn Error>> {
        let renderer = CanvasRenderer::new(
            self.visualizer.grid().size() as usize,
            self.visualizer.config().cell_width() as usize,
        );
        let side = renderer.pixel_width() as u32;

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(side, side))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;
        log::debug!("opened {side}x{side} window");

        Ok(WinitState {
            window,
            surface,
            renderer,
        })
    }

    fn dispatch(&mut self, msg: Msg, event_loop: &ActiveEventLoop) {
        let Some(cmd) = self.mapper.map(&msg) else {
            return;
        };
        if self.visualizer.handle(cmd) == Flow::Quit {
            event_loop.exit();
        } else if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }

    fn render(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.renderer.draw(self.visualizer.grid());

        let PhysicalSize { width, height } = state.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        if let Err(err) = state.surface.resize(w, h) {
            log::warn!("surface resize failed: {err}");
            return;
        }
        let mut buf = match state.surface.buffer_mut() {
            Ok(b) => b,
            Err(err) => {
                log::warn!("no surface buffer: {err}");
                return;
            }
        };
        state
            .renderer
            .blit_to_buffer(&mut buf, width as usize, height as usize);
        if let Err(err) = buf.present() {
            log::warn!("present failed: {err}");
        }
    }

    fn update_title(&mut self) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        let title = format!("{}: {}", self.config.title, self.visualizer.status());
        if title != self.title {
            state.window.set_title(&title);
            self.title = title;
        }
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.init(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                self.update_title();
                self.render();
            }
            Err(err) => {
                log::error!("window initialization failed: {err}");
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.dispatch(Msg::Quit, event_loop),

            WindowEvent::RedrawRequested => self.render(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(msg) = input::translate_keyboard(&event) {
                    self.dispatch(msg, event_loop);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(msg) = input::translate_mouse_button(state, button, self.cursor) {
                    self.dispatch(msg, event_loop);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = input::cursor_point(position);
                self.dispatch(Msg::mouse(MouseAction::Move, self.cursor), event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.visualizer.poll();
        self.update_title();
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            Instant::now() + self.config.frame_interval,
        ));
    }
}
