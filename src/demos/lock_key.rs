//! LockKey: click to insert the key and watch the shackle lift

use glam::Vec3;
use std::f32::consts::PI;

use super::{demo_camera, Demo, EventResponse};
use crate::animation::ToggleAnimator;
use crate::input::InputEvent;
use crate::scene::{
    AxisConvention, CameraController, Color, Light, ObjectId, OrbitState, Scene, SceneObject,
    Shape, Side, SteppedOrbitController, Surface, Transform,
};
use crate::DemoConfig;

/// Lock head height with the key removed
pub const LOCKED_OFFSET: f32 = -0.45;
/// Lock head height with the key inserted
pub const UNLOCKED_OFFSET: f32 = -0.34;
const HEAD_START: f32 = -0.43;
const HEAD_SPEED: f32 = 0.001;

const KEY_REST: f32 = -0.4;
/// How far the key jumps when inserted
pub const KEY_TRAVEL: f32 = 0.45;

pub struct LockKey {
    scene: Scene,
    camera_controller: SteppedOrbitController,
    lock_head: ObjectId,
    key: ObjectId,
    head_animation: ToggleAnimator,
}

impl LockKey {
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();
        scene.camera = demo_camera(config, Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO);

        let wall = Surface::Texture(scene.assets.request_texture("texture/wall-texture.jpg"));
        let floor = Surface::Texture(scene.assets.request_texture("texture/floor-texture.avif"));
        scene.add_object(
            SceneObject::new("room", Shape::Box { width: 10.0, height: 5.0, depth: 10.0 })
                .with_surfaces(vec![wall, wall, Surface::Color(Color::BLACK), floor, wall, wall])
                .with_side(Side::Back)
                .with_position(Vec3::new(0.0, 1.0, 0.0)),
        );

        let body = scene.assets.request_model("models/lock.gltf");
        scene.add_object(SceneObject::new("lock_body", Shape::Model(body)));

        let head = scene.assets.request_model("models/lock_head.gltf");
        let lock_head = scene.add_object(
            SceneObject::new("lock_head", Shape::Model(head)).with_position(Vec3::new(0.0, HEAD_START, 0.0)),
        );

        let key_model = scene.assets.request_model("models/key.gltf");
        let key = scene.add_object(
            SceneObject::new("key", Shape::Model(key_model)).with_transform(
                Transform::from_position(Vec3::new(0.0, KEY_REST, 0.0))
                    .with_euler(PI, 0.0, 0.0)
                    .with_scale(0.1),
            ),
        );

        scene.add_light(Light::point(Vec3::new(2.0, 2.0, 2.0), Color::WHITE, 65.0, 50.0));

        let orbit = OrbitState::new(2.0, 0.0, 0.08).with_convention(AxisConvention::SinCos);

        Self {
            scene,
            camera_controller: SteppedOrbitController::new(orbit).with_repeat(config.key_repeat),
            lock_head,
            key,
            head_animation: ToggleAnimator::new(LOCKED_OFFSET, UNLOCKED_OFFSET, HEAD_SPEED, HEAD_START),
        }
    }

    pub fn key_inserted(&self) -> bool {
        self.head_animation.is_active()
    }

    /// Whether the lock head has reached the bound for the current key state
    pub fn head_settled(&self) -> bool {
        self.head_animation.is_settled()
    }

    pub fn head_offset(&self) -> f32 {
        self.head_animation.offset()
    }

    pub fn key_height(&self) -> Option<f32> {
        self.scene
            .object(self.key)
            .map(|k| k.transform.position.y)
    }

    pub fn camera_orbit(&self) -> &OrbitState {
        &self.camera_controller.orbit
    }
}

impl Demo for LockKey {
    fn name(&self) -> &'static str {
        "lock-key"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if *event == InputEvent::Click {
            let Some(key) = self.scene.loaded_object_mut(self.key) else {
                log::debug!("Key not loaded yet, ignoring click");
                return EventResponse::Ignored;
            };
            let inserted = self.head_animation.toggle();
            key.transform.position.y += if inserted { KEY_TRAVEL } else { -KEY_TRAVEL };
            return EventResponse::Updated;
        }

        if self
            .camera_controller
            .handle_event(&mut self.scene.camera, event)
        {
            EventResponse::Redraw
        } else {
            EventResponse::Ignored
        }
    }

    fn update(&mut self) {
        let Some(head) = self.scene.loaded_object_mut(self.lock_head) else {
            return;
        };
        if let Some(offset) = self.head_animation.tick() {
            head.transform.position.y = offset;
        }
    }
}
