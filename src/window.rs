//! Native window management using winit

use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window as WinitWindow, WindowBuilder},
};

use crate::assets::AssetSource;
use crate::demos::Demo;
use crate::error::DemoError;
use crate::frame_loop::FrameLoop;
use crate::input::{InputEvent, Key};
use crate::renderer::RecordingRenderer;
use crate::DemoConfig;

/// Wrapper around winit window with additional state
pub struct Window {
    window: Arc<WinitWindow>,
    width: u32,
    height: u32,
    close_requested: bool,
}

impl Window {
    /// Create a new window with the given title and logical dimensions
    pub fn new(event_loop: &EventLoop<()>, title: &str, width: u32, height: u32) -> Result<Self, DemoError> {
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(title)
                .with_inner_size(LogicalSize::new(width, height))
                .build(event_loop)?,
        );

        Ok(Self {
            window,
            width,
            height,
            close_requested: false,
        })
    }

    /// Get the raw window
    pub fn window(&self) -> &WinitWindow {
        &self.window
    }

    /// Get current logical dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.window.scale_factor() as f32
    }

    /// Check if close was requested
    pub fn should_close(&self) -> bool {
        self.close_requested
    }

    /// Track size and close state. Returns the new logical size on resize.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<(u32, u32)> {
        match event {
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f64>(self.window.scale_factor());
                self.width = logical.width.round() as u32;
                self.height = logical.height.round() as u32;
                Some((self.width, self.height))
            }
            WindowEvent::CloseRequested => {
                self.close_requested = true;
                None
            }
            _ => None,
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Open a window and run `demo` until the window closes or Escape is pressed.
///
/// Space pauses and resumes the frame loop.
pub fn run(config: &DemoConfig, demo: Box<dyn Demo>, source: Box<dyn AssetSource>) -> Result<(), DemoError> {
    let event_loop = EventLoop::new()?;
    let title = format!("{} - {}", config.title, demo.name());
    let mut window = Window::new(&event_loop, &title, config.width, config.height)?;

    let mut config = config.clone();
    config.pixel_ratio = window.pixel_ratio();

    let renderer = RecordingRenderer::new(config.width, config.height, config.pixel_ratio);
    let mut frames = FrameLoop::new(demo, renderer, source, &config);
    let (width, height) = window.dimensions();
    frames.resize(width, height);
    frames.start();

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => {
                match &event {
                    WindowEvent::RedrawRequested => {
                        frames.step();
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        frames.set_pixel_ratio(*scale_factor as f32);
                    }
                    _ => {}
                }

                if let Some((width, height)) = window.handle_event(&event) {
                    frames.resize(width, height);
                }
                if window.should_close() {
                    elwt.exit();
                    return;
                }

                match InputEvent::from_window_event(&event, window.window().scale_factor()) {
                    Some(InputEvent::KeyDown { key: Key::Escape, .. }) => elwt.exit(),
                    Some(InputEvent::KeyDown { key: Key::Space, repeat: false }) => {
                        frames.toggle();
                    }
                    // Already applied above in logical units
                    Some(InputEvent::Resize { .. }) | None => {}
                    Some(input) => {
                        frames.handle_event(&input);
                    }
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
