//! MobilePhone: a phone on a stand with a slideshow screen

use glam::Vec3;

use super::{demo_camera, request_textures, Demo, EventResponse};
use crate::animation::{Cycler, IntervalCycler};
use crate::assets::AssetId;
use crate::input::{InputEvent, MouseButton};
use crate::scene::{
    AxisConvention, CameraController, Color, Light, LightId, ObjectId, OrbitState, Scene,
    SceneObject, Shape, Side, SteppedOrbitController, Surface, Transform,
};
use crate::DemoConfig;

const SCREEN_TEXTURES: [&str; 5] = [
    "textures/t1.jpg",
    "textures/t2.jpg",
    "textures/t3.jpg",
    "textures/t4.jpg",
    "textures/t5.jpg",
];

const FIRST_SCREEN: usize = 4;
/// Frames each screen texture stays up
const SCREEN_INTERVAL: u32 = 30;
const PHONE_TILT: f32 = -0.29;
const LIGHT_STEP: f32 = 0.2;

pub struct MobilePhone {
    scene: Scene,
    camera_controller: SteppedOrbitController,
    light: LightId,
    light_orbit: OrbitState,
    screen: ObjectId,
    slideshow: IntervalCycler<AssetId>,
}

impl MobilePhone {
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();
        scene.camera = demo_camera(config, Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);

        let stand = scene.add_object(SceneObject::new("stand", Shape::Group));
        let phone_model = scene.assets.request_model("models/mobile.gltf");
        scene.add_child(
            stand,
            SceneObject::new("phone", Shape::Model(phone_model)).with_transform(
                Transform::from_position(Vec3::new(0.0, 1.49, -0.53)).with_euler(PHONE_TILT, 0.0, 0.0),
            ),
        );
        let stand_model = scene.assets.request_model("models/stand.gltf");
        scene.add_child(stand, SceneObject::new("stand_model", Shape::Model(stand_model)));

        let screens = request_textures(&mut scene, &SCREEN_TEXTURES);
        let slides = Cycler::new(screens).starting_at(FIRST_SCREEN);
        let first = slides.current().copied();
        let mut screen = SceneObject::new("screen", Shape::Plane { width: 1.51, height: 3.4 })
            .with_transform(
                Transform::from_position(Vec3::new(0.0, 1.49, -0.438)).with_euler(PHONE_TILT, 0.0, 0.0),
            );
        if let Some(texture) = first {
            screen = screen.with_surface(Surface::Texture(texture));
        }
        let screen = scene.add_object(screen);

        let environment = scene.assets.request_texture("textures/environment.jpg");
        scene.add_object(
            SceneObject::new("environment", Shape::Sphere { radius: 6.0 })
                .with_surface(Surface::Texture(environment))
                .with_side(Side::Back)
                .with_transform(Transform::new().with_euler(0.0, 1.4, 0.0)),
        );

        let light_position = Vec3::new(-2.0, 2.0, -2.0);
        let light = scene.add_light(Light::directional(light_position, Color::WHITE, 100.0));
        let light_orbit = OrbitState::from_position(light_position, LIGHT_STEP, AxisConvention::CosSin);

        let orbit = OrbitState::new(5.0, 0.0, 0.04).with_convention(AxisConvention::SinCos);

        Self {
            scene,
            camera_controller: SteppedOrbitController::new(orbit).with_repeat(config.key_repeat),
            light,
            light_orbit,
            screen,
            slideshow: IntervalCycler::new(slides, SCREEN_INTERVAL),
        }
    }

    pub fn screen_index(&self) -> usize {
        self.slideshow.cycler().index()
    }

    pub fn light_orbit(&self) -> &OrbitState {
        &self.light_orbit
    }

    /// Swing the light around by `steps` increments
    fn nudge_light(&mut self, steps: f32) {
        self.light_orbit.step(steps);
        if let Some(light) = self.scene.light_mut(self.light) {
            self.light_orbit.place(&mut light.position);
        }
    }
}

impl Demo for MobilePhone {
    fn name(&self) -> &'static str {
        "mobile-phone"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        match *event {
            InputEvent::MouseDown(MouseButton::Left) => {
                self.nudge_light(1.0);
                EventResponse::Redraw
            }
            InputEvent::MouseDown(MouseButton::Right) => {
                self.nudge_light(-1.0);
                EventResponse::Redraw
            }
            _ if self
                .camera_controller
                .handle_event(&mut self.scene.camera, event) =>
            {
                EventResponse::Redraw
            }
            _ => EventResponse::Ignored,
        }
    }

    fn update(&mut self) {
        if let Some(&texture) = self.slideshow.tick() {
            if let Some(screen) = self.scene.object_mut(self.screen) {
                screen.set_surface(0, Surface::Texture(texture));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use std::f32::consts::PI;

    #[test]
    fn screen_changes_every_thirty_frames() {
        let mut demo = MobilePhone::new(&DemoConfig::default());
        assert_eq!(demo.screen_index(), FIRST_SCREEN);
        for _ in 0..29 {
            demo.update();
        }
        assert_eq!(demo.screen_index(), FIRST_SCREEN);
        demo.update();
        assert_eq!(demo.screen_index(), 0);
    }

    #[test]
    fn mouse_buttons_swing_the_light() {
        let mut demo = MobilePhone::new(&DemoConfig::default());
        let start = demo.light_orbit().angle;
        assert!((start - (-3.0 * PI / 4.0)).abs() < 1e-5);

        demo.handle_event(&InputEvent::MouseDown(MouseButton::Left));
        demo.handle_event(&InputEvent::MouseDown(MouseButton::Left));
        demo.handle_event(&InputEvent::MouseDown(MouseButton::Right));
        assert!((demo.light_orbit().angle - (start + LIGHT_STEP)).abs() < 1e-5);

        let light = demo.scene().light(demo.light).unwrap();
        assert_eq!(light.position.y, 2.0);
        let r = (light.position.x.powi(2) + light.position.z.powi(2)).sqrt();
        assert!((r - 8f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn middle_button_and_click_do_nothing() {
        let mut demo = MobilePhone::new(&DemoConfig::default());
        assert_eq!(
            demo.handle_event(&InputEvent::MouseDown(MouseButton::Middle)),
            EventResponse::Ignored
        );
        assert_eq!(demo.handle_event(&InputEvent::Click), EventResponse::Ignored);
    }

    #[test]
    fn arrows_orbit_the_camera() {
        let mut demo = MobilePhone::new(&DemoConfig::default());
        demo.handle_event(&InputEvent::key_down(Key::ArrowRight));
        let camera = &demo.scene().camera;
        assert!((camera.position.x - 5.0 * (-0.04f32).sin()).abs() < 1e-5);
        assert!((camera.position.z - 5.0 * (-0.04f32).cos()).abs() < 1e-5);
    }
}
