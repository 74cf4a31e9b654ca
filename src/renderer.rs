//! Renderer boundary
//!
//! Drawing is left to whatever graphics backend hosts the demos. The frame
//! loop only needs something it can resize and hand the scene to once per
//! frame.

use glam::{Mat4, Vec3};

use crate::scene::Scene;

/// Consumer of finished frames
pub trait Renderer {
    /// Resize the drawing surface (logical size and device pixel ratio)
    fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32);

    /// Draw the scene from its camera
    fn render(&mut self, scene: &Scene);
}

/// Summary of one rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub view_projection: Mat4,
    pub light_positions: Vec<Vec3>,
    /// Objects present this frame (models still loading are skipped)
    pub drawn_objects: usize,
}

/// Headless renderer that records what each frame would draw
pub struct RecordingRenderer {
    size: (u32, u32),
    pixel_ratio: f32,
    frames: u64,
    last: Option<FrameRecord>,
    log_interval: u64,
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self {
            size: (width, height),
            pixel_ratio,
            frames: 0,
            last: None,
            log_interval: 600,
        }
    }

    /// Log a frame summary every `frames` frames (0 disables)
    pub fn with_log_interval(mut self, frames: u64) -> Self {
        self.log_interval = frames;
        self
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.last.as_ref()
    }

    /// Logical surface size
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Surface size in device pixels
    pub fn physical_size(&self) -> (u32, u32) {
        let scale = |v: u32| (v as f32 * self.pixel_ratio).round() as u32;
        (scale(self.size.0), scale(self.size.1))
    }
}

impl Renderer for RecordingRenderer {
    fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        self.size = (width, height);
        self.pixel_ratio = pixel_ratio;
        log::debug!("Renderer resized to {}x{} @{}x", width, height, pixel_ratio);
    }

    fn render(&mut self, scene: &Scene) {
        let record = FrameRecord {
            camera_position: scene.camera.position,
            camera_target: scene.camera.target,
            view_projection: scene.camera.view_projection_matrix(),
            light_positions: scene.lights().iter().map(|l| l.position).collect(),
            drawn_objects: scene.present_objects().count(),
        };
        self.frames += 1;

        if self.log_interval > 0 && self.frames % self.log_interval == 0 {
            log::debug!(
                "Frame {}: {} objects, camera at {:?}",
                self.frames,
                record.drawn_objects,
                record.camera_position
            );
        }
        self.last = Some(record);
    }
}
