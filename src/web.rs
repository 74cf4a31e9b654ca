//! Web-specific functionality for running the demos in a browser.
//!
//! The page fetches asset files itself and hands their bytes over with
//! [`register_asset`] before calling [`start_demo`]. Requests for paths that
//! were never registered fail like a missing file would.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::web::{EventLoopExtWebSys, WindowExtWebSys};
use winit::window::WindowBuilder;

use crate::assets::{AssetSource, MemoryAssetSource};
use crate::demos::DemoKind;
use crate::error::LoadResult;
use crate::frame_loop::FrameLoop;
use crate::input::InputEvent;
use crate::renderer::RecordingRenderer;
use crate::{init_web_logging, DemoConfig};

thread_local! {
    static REGISTERED: RefCell<MemoryAssetSource> = RefCell::new(MemoryAssetSource::new());
}

/// Asset source backed by the bytes the page registered
struct RegisteredAssets;

impl AssetSource for RegisteredAssets {
    fn read(&self, path: &str) -> LoadResult<Vec<u8>> {
        REGISTERED.with(|assets| assets.borrow().read(path))
    }
}

/// Make the bytes of one asset file available to demos
#[wasm_bindgen]
pub fn register_asset(path: &str, bytes: Vec<u8>) {
    log::debug!("Registered '{}' ({} bytes)", path, bytes.len());
    REGISTERED.with(|assets| assets.borrow_mut().insert(path, bytes));
}

/// Get the browser window's logical size and device pixel ratio
pub fn get_window_size() -> Result<(u32, u32, f32), JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let dimension = |value: JsValue| value.as_f64().unwrap_or(0.0) as u32;
    let width = dimension(window.inner_width()?);
    let height = dimension(window.inner_height()?);
    Ok((width.max(100), height.max(100), window.device_pixel_ratio() as f32))
}

/// Attach the canvas to the element with `container_id` (or the body) and size it
pub fn setup_canvas(
    window: &winit::window::Window,
    container_id: &str,
    config: &DemoConfig,
) -> Result<web_sys::HtmlCanvasElement, JsValue> {
    let canvas = window.canvas().ok_or("window has no canvas")?;

    let web_window = web_sys::window().ok_or("no global window exists")?;
    let document = web_window.document().ok_or("no document exists")?;

    let container: web_sys::Element = match document.get_element_by_id(container_id) {
        Some(element) => element,
        None => document.body().ok_or("document has no body")?.into(),
    };
    container.append_child(&canvas)?;

    // Drawing buffer in device pixels, CSS box in logical pixels
    canvas.set_width((config.width as f32 * config.pixel_ratio) as u32);
    canvas.set_height((config.height as f32 * config.pixel_ratio) as u32);

    let style = canvas.style();
    style.set_property("width", &format!("{}px", config.width))?;
    style.set_property("height", &format!("{}px", config.height))?;
    style.set_property("display", "block")?;

    log::info!(
        "Canvas setup: {}x{} (CSS: {}x{}, DPR: {})",
        canvas.width(),
        canvas.height(),
        config.width,
        config.height,
        config.pixel_ratio
    );

    Ok(canvas)
}

/// Start the named demo on the page
#[wasm_bindgen]
pub fn start_demo(name: &str) -> Result<(), JsValue> {
    init_web_logging();

    let kind: DemoKind = name.parse().map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let (width, height, pixel_ratio) = get_window_size()?;
    let config = DemoConfig {
        width,
        height,
        pixel_ratio,
        ..Default::default()
    };

    let event_loop = EventLoop::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let window = WindowBuilder::new()
        .with_title(format!("{} - {}", config.title, kind))
        .with_inner_size(LogicalSize::new(width, height))
        .build(&event_loop)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    setup_canvas(&window, "canvas-container", &config)?;

    let renderer = RecordingRenderer::new(width, height, pixel_ratio);
    let mut frames = FrameLoop::new(kind.build(&config), renderer, Box::new(RegisteredAssets), &config);
    frames.resize(width, height);
    frames.start();

    event_loop.spawn(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match &event {
                WindowEvent::RedrawRequested => {
                    frames.step();
                }
                WindowEvent::CloseRequested => elwt.exit(),
                _ => {
                    if let Some(input) = InputEvent::from_window_event(&event, window.scale_factor()) {
                        frames.handle_event(&input);
                    }
                }
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        }
    });

    Ok(())
}
