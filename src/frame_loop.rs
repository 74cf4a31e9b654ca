//! Frame scheduling
//!
//! [`FrameLoop`] is the repeating per-frame task. The host (a winit event
//! loop, the browser, or a test) calls [`FrameLoop::step`] once per display
//! refresh and forwards input through [`FrameLoop::handle_event`]. The loop
//! can be stopped and restarted at any time; while stopped, steps do nothing.
//!
//! Each tick:
//! 1. resolves up to `asset_loads_per_frame` pending asset requests
//! 2. runs the demo's per-frame update
//! 3. renders the scene

use crate::assets::AssetSource;
use crate::demos::{Demo, EventResponse};
use crate::input::InputEvent;
use crate::renderer::Renderer;
use crate::DemoConfig;

pub struct FrameLoop<R: Renderer> {
    demo: Box<dyn Demo>,
    renderer: R,
    source: Box<dyn AssetSource>,
    running: bool,
    loads_per_frame: usize,
    pixel_ratio: f32,
    ticks: u64,
}

impl<R: Renderer> FrameLoop<R> {
    /// Create a stopped loop
    pub fn new(
        demo: Box<dyn Demo>,
        renderer: R,
        source: Box<dyn AssetSource>,
        config: &DemoConfig,
    ) -> Self {
        Self {
            demo,
            renderer,
            source,
            running: false,
            loads_per_frame: config.asset_loads_per_frame,
            pixel_ratio: config.pixel_ratio,
            ticks: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("Starting '{}'", self.demo.name());
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("Stopping '{}' after {} ticks", self.demo.name(), self.ticks);
            self.running = false;
        }
    }

    /// Flip between running and stopped. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one tick if the loop is running. Returns whether a tick ran.
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.tick();
        true
    }

    /// Step up to `frames` times. Returns how many ticks ran.
    pub fn run_frames(&mut self, frames: usize) -> usize {
        (0..frames).take_while(|_| self.step()).count()
    }

    fn tick(&mut self) {
        let budget = self.loads_per_frame;
        if budget > 0 {
            self.demo
                .scene_mut()
                .assets
                .load_pending(self.source.as_ref(), budget);
        }
        self.demo.update();
        self.renderer.render(self.demo.scene());
        self.ticks += 1;
    }

    /// Forward an input event to the demo
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if let InputEvent::Resize { width, height } = *event {
            self.resize(width, height);
            return EventResponse::Redraw;
        }

        let response = self.demo.handle_event(event);
        if response == EventResponse::Redraw {
            self.renderer.render(self.demo.scene());
        }
        response
    }

    /// Apply a new viewport size and draw immediately
    pub fn resize(&mut self, width: u32, height: u32) {
        let scene = self.demo.scene_mut();
        scene.camera.set_aspect(width as f32, height as f32);
        self.renderer.resize(width, height, self.pixel_ratio);
        self.renderer.render(self.demo.scene());
    }

    pub fn set_pixel_ratio(&mut self, pixel_ratio: f32) {
        self.pixel_ratio = pixel_ratio;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn demo(&self) -> &dyn Demo {
        self.demo.as_ref()
    }

    pub fn demo_mut(&mut self) -> &mut dyn Demo {
        self.demo.as_mut()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetSource;
    use crate::demos::DemoKind;
    use crate::renderer::RecordingRenderer;

    fn frame_loop(kind: DemoKind) -> FrameLoop<RecordingRenderer> {
        let config = DemoConfig::default();
        FrameLoop::new(
            kind.build(&config),
            RecordingRenderer::new(config.width, config.height, 1.0),
            Box::new(MemoryAssetSource::new()),
            &config,
        )
    }

    #[test]
    fn stopped_loop_does_nothing() {
        let mut frames = frame_loop(DemoKind::PcDesk);
        assert!(!frames.step());
        assert_eq!(frames.run_frames(10), 0);
        assert_eq!(frames.renderer().frame_count(), 0);

        frames.start();
        assert_eq!(frames.run_frames(10), 10);
        assert_eq!(frames.renderer().frame_count(), 10);

        assert!(!frames.toggle());
        assert!(!frames.step());
        assert_eq!(frames.ticks(), 10);
    }

    #[test]
    fn one_asset_resolves_per_tick() {
        let mut frames = frame_loop(DemoKind::Playground);
        let requested = frames.demo().scene().assets.pending_count();
        assert!(requested > 3);

        frames.start();
        frames.run_frames(3);
        assert_eq!(frames.demo().scene().assets.pending_count(), requested - 3);
    }

    #[test]
    fn resize_updates_aspect_and_renders() {
        let mut frames = frame_loop(DemoKind::Ludo);
        let response = frames.handle_event(&InputEvent::Resize { width: 400, height: 200 });
        assert_eq!(response, EventResponse::Redraw);
        assert_eq!(frames.demo().scene().camera.projection.aspect, 2.0);
        assert_eq!(frames.renderer().size(), (400, 200));
        assert_eq!(frames.renderer().frame_count(), 1);
    }

    #[test]
    fn forwarded_window_resize_is_not_scaled_twice() {
        use winit::dpi::PhysicalSize;
        use winit::event::WindowEvent;

        let mut frames = frame_loop(DemoKind::Ludo);
        frames.set_pixel_ratio(2.0);
        let event = WindowEvent::Resized(PhysicalSize::new(800, 400));
        let input = InputEvent::from_window_event(&event, 2.0).unwrap();
        frames.handle_event(&input);

        assert_eq!(frames.renderer().size(), (400, 200));
        assert_eq!(frames.renderer().physical_size(), (800, 400));
    }

    #[test]
    fn redraw_response_renders_while_stopped() {
        let mut frames = frame_loop(DemoKind::LockKey);
        frames.handle_event(&InputEvent::key_down(crate::input::Key::ArrowLeft));
        assert_eq!(frames.renderer().frame_count(), 1);
    }
}
