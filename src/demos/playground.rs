//! Playground: a textured tower among benches and a climbing frame

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::{demo_camera, request_textures, Demo, EventResponse};
use crate::animation::{AutoOrbit, Cycler};
use crate::assets::AssetId;
use crate::input::InputEvent;
use crate::scene::{
    CameraController, Color, Light, LightId, ObjectId, OrbitState, Scene, SceneObject, Shape,
    Side, SteppedOrbitController, Surface, Transform, VerticalControl,
};
use crate::DemoConfig;

const BUILDING_TEXTURES: [&str; 4] = [
    "textures/bt1.jpeg",
    "textures/bt2.jpeg",
    "textures/bt3.jpg",
    "textures/bt4.jpg",
];

/// Bench positions around the tower; `true` marks benches turned a quarter turn
const BENCHES: [(Vec3, bool); 8] = [
    (Vec3::new(-2.0, -5.0, 4.0), false),
    (Vec3::new(2.0, -5.0, 4.0), false),
    (Vec3::new(4.0, -5.0, 2.0), true),
    (Vec3::new(4.0, -5.0, -2.0), true),
    (Vec3::new(2.0, -5.0, -4.0), false),
    (Vec3::new(-2.0, -5.0, -4.0), false),
    (Vec3::new(-4.0, -5.0, -2.0), true),
    (Vec3::new(-4.0, -5.0, 2.0), true),
];

pub struct Playground {
    scene: Scene,
    camera_controller: SteppedOrbitController,
    light: LightId,
    light_orbit: AutoOrbit,
    building: ObjectId,
    building_textures: Cycler<AssetId>,
}

impl Playground {
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();
        scene.camera = demo_camera(config, Vec3::new(0.0, 0.0, 11.0), Vec3::ZERO);

        let textures = request_textures(&mut scene, &BUILDING_TEXTURES);
        let grass = scene.assets.request_texture("textures/grass.jpg");
        let sky = scene.assets.request_texture("textures/sky_360.jpg");

        let building = scene.add_object(
            SceneObject::new("building", Shape::Box { width: 5.0, height: 10.0, depth: 5.0 })
                .with_surface(Surface::Texture(textures[0])),
        );
        scene.add_object(
            SceneObject::new("ground", Shape::Plane { width: 40.0, height: 40.0 })
                .with_surface(Surface::Texture(grass))
                .with_transform(
                    Transform::from_position(Vec3::new(0.0, -5.0, 0.0)).with_euler(-FRAC_PI_2, 0.0, 0.0),
                ),
        );
        scene.add_object(
            SceneObject::new("environment", Shape::Sphere { radius: 20.0 })
                .with_surface(Surface::Texture(sky))
                .with_side(Side::Back),
        );

        let bench = scene.assets.request_model("models/double_bench.glb");
        for (i, (position, turned)) in BENCHES.iter().enumerate() {
            let yaw = if *turned { FRAC_PI_2 } else { 0.0 };
            scene.add_object(
                SceneObject::new(format!("bench_{i}"), Shape::Model(bench)).with_transform(
                    Transform::from_position(*position)
                        .with_euler(0.0, yaw, 0.0)
                        .with_scale(0.2),
                ),
            );
        }
        let frame = scene.assets.request_model("models/playground.glb");
        scene.add_object(
            SceneObject::new("playground", Shape::Model(frame))
                .with_position(Vec3::new(6.0, -4.35, -2.0)),
        );

        let light_position = Vec3::new(8.0, 10.0, -8.0);
        let light = scene.add_light(Light::directional(light_position, Color::WHITE, 1.0));
        let light_orbit = AutoOrbit::from_position(light_position, 0.004);

        let orbit = OrbitState::new(11.0, FRAC_PI_2, 0.04)
            .with_target(Vec3::new(0.0, scene.camera.position.y, 0.0))
            .with_vertical(VerticalControl::new(0.1, -4.0, 4.0));
        let camera_controller = SteppedOrbitController::new(orbit).with_repeat(config.key_repeat);

        Self {
            scene,
            camera_controller,
            light,
            light_orbit,
            building,
            building_textures: Cycler::new(textures),
        }
    }

    pub fn camera_orbit(&self) -> &OrbitState {
        &self.camera_controller.orbit
    }

    pub fn texture_index(&self) -> usize {
        self.building_textures.index()
    }
}

impl Demo for Playground {
    fn name(&self) -> &'static str {
        "playground"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if *event == InputEvent::Click {
            if let Some(&texture) = self.building_textures.advance() {
                if let Some(building) = self.scene.object_mut(self.building) {
                    building.set_surface(0, Surface::Texture(texture));
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
