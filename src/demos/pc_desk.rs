//! PcDesk: a desk setup with a monitor whose wallpaper changes on click

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::{demo_camera, request_textures, Demo, EventResponse};
use crate::animation::{AutoOrbit, Cycler};
use crate::assets::AssetId;
use crate::input::InputEvent;
use crate::scene::{
    CameraController, Color, Light, LightId, ObjectId, OrbitState, Scene, SceneObject, Shape,
    Side, SteppedOrbitController, Surface, Transform,
};
use crate::DemoConfig;

const SCREEN_TEXTURES: [&str; 6] = [
    "textures/s1.jpg",
    "textures/s2.jpg",
    "textures/s3.jpg",
    "textures/s4.jpg",
    "textures/s5.jpg",
    "textures/s6.jpg",
];

const LOOK_AT: Vec3 = Vec3::new(0.0, 2.0, 0.0);

pub struct PcDesk {
    scene: Scene,
    camera_controller: SteppedOrbitController,
    light: LightId,
    light_orbit: AutoOrbit,
    screen: ObjectId,
    wallpapers: Cycler<AssetId>,
}

impl PcDesk {
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();
        scene.camera = demo_camera(config, Vec3::new(0.0, 3.0, 3.0), LOOK_AT);

        scene.add_object(SceneObject::new("target", Shape::Group).with_position(LOOK_AT));

        let setup = scene.assets.request_model("models/setup.glb");
        scene.add_object(
            SceneObject::new("setup", Shape::Model(setup)).with_transform(
                Transform::new()
                    .with_euler(0.0, (-130f32).to_radians(), 0.0)
                    .with_scale(0.4),
            ),
        );
        let monitor = scene.assets.request_model("models/computer_monitor_.glb");
        scene.add_object(
            SceneObject::new("monitor", Shape::Model(monitor)).with_transform(
                Transform::from_position(Vec3::new(0.7, 1.64, -1.2))
                    .with_euler(0.0, (-40f32).to_radians(), 0.0)
                    .with_scale(0.4),
            ),
        );

        let wallpapers = request_textures(&mut scene, &SCREEN_TEXTURES);
        let screen = scene.add_object(
            SceneObject::new("screen", Shape::Plane { width: 1.3, height: 0.72 })
                .with_surface(Surface::Texture(wallpapers[0]))
                .with_transform(
                    Transform::from_position(Vec3::new(0.7, 2.06, -1.203))
                        .with_euler(0.0, (-40f32).to_radians(), 0.0),
                ),
        );

        let floor = scene.assets.request_texture("textures/floor-texture.avif");
        scene.add_object(
            SceneObject::new("environment", Shape::Box { width: 10.0, height: 6.0, depth: 15.0 })
                .with_surface(Surface::Texture(floor))
                .with_side(Side::Back)
                .with_transform(
                    Transform::from_position(Vec3::new(0.0, 3.0, 2.0))
                        .with_euler(0.0, 50f32.to_radians(), 0.0),
                ),
        );

        let light_position = Vec3::new(-5.0, 4.0, -5.0);
        let light = scene.add_light(Light::point(light_position, Color::WHITE, 100.0, 20.0));

        let orbit = OrbitState::new(3.0, FRAC_PI_2, 0.04).with_target(LOOK_AT);

        Self {
            scene,
            camera_controller: SteppedOrbitController::new(orbit).with_repeat(config.key_repeat),
            light,
            light_orbit: AutoOrbit::from_position(light_position, 0.003),
            screen,
            wallpapers: Cycler::new(wallpapers),
        }
    }

    pub fn wallpaper_index(&self) -> usize {
        self.wallpapers.index()
    }

    pub fn camera_orbit(&self) -> &OrbitState {
        &self.camera_controller.orbit
    }
}

impl Demo for PcDesk {
    fn name(&self) -> &'static str {
        "pc-desk"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if *event == InputEvent::Click {
            if let Some(&texture) = self.wallpapers.advance() {
                if let Some(screen) = self.scene.object_mut(self.screen) {
                    screen.set_surface(0, Surface::Texture(texture));
                }
            }
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
        if let Some(light) = self.scene.light_mut(self.light) {
            self.light_orbit.tick(&mut light.position);
        }
    }
}
