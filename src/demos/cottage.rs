//! Cottage: a round cottage beside a tower, camera driven by held arrow keys

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3};

use super::{demo_camera, request_textures, Demo, EventResponse};
use crate::animation::{AutoOrbit, Cycler};
use crate::assets::AssetId;
use crate::input::InputEvent;
use crate::scene::{
    CameraController, Color, Light, LightId, ObjectId, OrbitState, PolledOrbitController, Scene,
    SceneObject, Shape, Side, Surface, Transform, VerticalControl,
};
use crate::DemoConfig;

const WALL_TEXTURES: [&str; 3] = [
    "textures/ct1.jpg",
    "textures/ct2.jpg",
    "textures/ct3.jpg",
];

const BUILDING_POSITION: Vec3 = Vec3::new(4.0, 3.0, 0.0);
const LIGHT_POSITION: Vec3 = Vec3::new(8.0, 6.0, -8.0);

pub struct Cottage {
    scene: Scene,
    camera_controller: PolledOrbitController,
    light: LightId,
    light_orbit: AutoOrbit,
    wall: ObjectId,
    wall_textures: Cycler<AssetId>,
}

impl Cottage {
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();
        scene.camera = demo_camera(config, Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO);

        let walls = request_textures(&mut scene, &WALL_TEXTURES);
        let building_texture = scene.assets.request_texture("textures/bt.jpg");
        let straw = scene.assets.request_texture("textures/straw.jpg");
        let ground = scene.assets.request_texture("textures/ground.jpg");
        let sky = scene.assets.request_texture("textures/sky.jpg");

        scene.add_object(
            SceneObject::new("building", Shape::Box { width: 8.0, height: 16.0, depth: 8.0 })
                .with_surface(Surface::Texture(building_texture))
                .with_position(BUILDING_POSITION),
        );

        let cottage = scene.add_object(
            SceneObject::new("cottage", Shape::Group).with_position(Vec3::new(-4.0, -2.0, -5.0)),
        );
        let wall = scene.add_child(
            cottage,
            SceneObject::new(
                "wall",
                Shape::Cylinder { radius_top: 3.0, radius_bottom: 3.0, height: 6.0 },
            )
            .with_surface(Surface::Texture(walls[0])),
        );
        scene.add_child(
            cottage,
            SceneObject::new("roof", Shape::Sphere { radius: 3.2 })
                .with_surface(Surface::Texture(straw))
                .with_side(Side::Double)
                .with_transform(
                    Transform::from_position(Vec3::new(0.0, 2.6, 0.0)).with_euler(0.0, 0.0, PI),
                ),
        );
        scene.add_child(
            cottage,
            SceneObject::new("tip", Shape::Cone { radius: 2.0, height: 1.5 })
                .with_surface(Surface::Texture(straw))
                .with_side(Side::Double)
                .with_position(Vec3::new(0.0, 5.8, 0.0)),
        );

        scene.add_object(
            SceneObject::new("ground", Shape::Plane { width: 40.0, height: 40.0 })
                .with_surface(Surface::Texture(ground))
                .with_transform(
                    Transform::from_position(Vec3::new(0.0, -5.0, 0.0)).with_euler(-FRAC_PI_2, 0.0, 0.0),
                ),
        );
        scene.add_object(
            SceneObject::new("environment", Shape::Sphere { radius: 20.0 })
                .with_surface(Surface::Texture(sky))
                .with_side(Side::Back),
        );

        let light = scene.add_light(Light::directional(LIGHT_POSITION, Color::WHITE, 1.0));
        // Radius is measured from the tower, the angle from the origin
        let offset = LIGHT_POSITION - BUILDING_POSITION;
        let light_radius = Vec2::new(offset.x, offset.z).length();
        let light_orbit = AutoOrbit::new(OrbitState::new(
            light_radius,
            LIGHT_POSITION.z.atan2(LIGHT_POSITION.x),
            0.004,
        ));

        let orbit = OrbitState::new(15.0, FRAC_PI_2, 0.004)
            .with_target(Vec3::new(0.0, scene.camera.position.y, 0.0))
            .with_vertical(VerticalControl::new(0.04, -4.0, 4.0));

        Self {
            scene,
            camera_controller: PolledOrbitController::new(orbit),
            light,
            light_orbit,
            wall,
            wall_textures: Cycler::new(walls),
        }
    }

    pub fn camera_orbit(&self) -> &OrbitState {
        &self.camera_controller.orbit
    }

    pub fn light_orbit(&self) -> &OrbitState {
        self.light_orbit.orbit()
    }
}

impl Demo for Cottage {
    fn name(&self) -> &'static str {
        "cottage"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if *event == InputEvent::Click {
            if let Some(&texture) = self.wall_textures.advance() {
                if let Some(wall) = self.scene.object_mut(self.wall) {
                    wall.set_surface(0, Surface::Texture(texture));
                }
            }
            return EventResponse::Updated;
        }

        let before = self.camera_controller.input;
        self.camera_controller
            .handle_event(&mut self.scene.camera, event);
        if self.camera_controller.input != before {
            EventResponse::Updated
        } else {
            EventResponse::Ignored
        }
    }

    fn update(&mut self) {
        if let Some(light) = self.scene.light_mut(self.light) {
            self.light_orbit.tick(&mut light.position);
        }
        self.camera_controller.update(&mut self.scene.camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn light_radius_is_measured_from_the_tower() {
        let demo = Cottage::new(&DemoConfig::default());
        assert!((demo.light_orbit().radius() - 80f32.sqrt()).abs() < 1e-5);
        assert!((demo.light_orbit().angle - (-8f32).atan2(8.0)).abs() < 1e-6);
    }

    #[test]
    fn held_key_moves_once_per_frame() {
        let mut demo = Cottage::new(&DemoConfig::default());
        demo.handle_event(&InputEvent::key_down(Key::ArrowLeft));
        for _ in 0..5 {
            demo.update();
        }
        let expected = FRAC_PI_2 + 5.0 * 0.004;
        assert!((demo.camera_orbit().angle - expected).abs() < 1e-5);

        demo.handle_event(&InputEvent::KeyUp { key: Key::ArrowLeft });
        demo.update();
        assert!((demo.camera_orbit().angle - expected).abs() < 1e-5);
    }

    #[test]
    fn click_cycles_three_wall_textures() {
        let mut demo = Cottage::new(&DemoConfig::default());
        let first = demo.scene().object(demo.wall).unwrap().surfaces[0];
        demo.handle_event(&InputEvent::Click);
        assert_ne!(demo.scene().object(demo.wall).unwrap().surfaces[0], first);
        demo.handle_event(&InputEvent::Click);
        demo.handle_event(&InputEvent::Click);
        assert_eq!(demo.scene().object(demo.wall).unwrap().surfaces[0], first);
    }
}
