//! Ludo: a tilted board with a spinning die

use glam::Vec3;

use super::{demo_camera, request_textures, Demo, EventResponse};
use crate::animation::Cycler;
use crate::assets::AssetId;
use crate::input::InputEvent;
use crate::scene::{
    AxisConvention, CameraController, Color, Light, ObjectId, OrbitState, Scene, SceneObject,
    Shape, Side, SteppedOrbitController, Surface, Transform,
};
use crate::DemoConfig;

const BOARD_TEXTURES: [&str; 4] = [
    "textures/t1.jpg",
    "textures/t2.jpg",
    "textures/t3.jpg",
    "textures/t4.jpg",
];

/// Die faces in box face order: +X, -X, +Y, -Y, +Z, -Z
const DIE_FACES: [&str; 6] = [
    "textures/d1.png",
    "textures/d2.png",
    "textures/d3.png",
    "textures/d4.png",
    "textures/d5.png",
    "textures/d6.png",
];

/// Index of the board's top face
const BOARD_TOP: usize = 2;
const BOARD_TILT: f32 = 0.3;
const DIE_SPIN: f32 = 0.02;

pub struct Ludo {
    scene: Scene,
    camera_controller: SteppedOrbitController,
    board: ObjectId,
    die: ObjectId,
    board_textures: Cycler<AssetId>,
}

impl Ludo {
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();
        scene.camera = demo_camera(config, Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);

        let boards = request_textures(&mut scene, &BOARD_TEXTURES);
        let faces = request_textures(&mut scene, &DIE_FACES);

        let side = Surface::Color(Color::from_hex(0x5c4033));
        let mut board_faces = vec![side; 6];
        board_faces[BOARD_TOP] = Surface::Texture(boards[0]);
        let board = scene.add_object(
            SceneObject::new("board", Shape::Box { width: 3.0, height: 0.1, depth: 3.0 })
                .with_surfaces(board_faces)
                .with_transform(
                    Transform::from_position(Vec3::new(0.0, -1.5, 0.0)).with_euler(BOARD_TILT, 0.0, 0.0),
                ),
        );

        let die = scene.add_object(
            SceneObject::new("die", Shape::Box { width: 0.2, height: 0.2, depth: 0.2 })
                .with_surfaces(faces.into_iter().map(Surface::Texture).collect())
                .with_transform(
                    Transform::from_position(Vec3::new(0.0, -1.35, 0.0)).with_euler(BOARD_TILT, 0.0, 0.0),
                ),
        );

        let wall = Surface::Texture(scene.assets.request_texture("textures/wall-texture.jpg"));
        let floor = Surface::Texture(scene.assets.request_texture("textures/floor-texture.avif"));
        scene.add_object(
            SceneObject::new("room", Shape::Box { width: 10.0, height: 10.0, depth: 10.0 })
                .with_surfaces(vec![wall, wall, Surface::Color(Color::BLACK), floor, wall, wall])
                .with_side(Side::Back)
                .with_position(Vec3::new(0.0, 1.0, 0.0)),
        );

        scene.add_light(Light::point(Vec3::new(-2.0, 2.0, -2.0), Color::WHITE, 60.0, 50.0));

        let orbit = OrbitState::new(5.0, 0.0, 0.08).with_convention(AxisConvention::SinCos);

        Self {
            scene,
            camera_controller: SteppedOrbitController::new(orbit).with_repeat(config.key_repeat),
            board,
            die,
            board_textures: Cycler::new(boards),
        }
    }

    pub fn board_texture_index(&self) -> usize {
        self.board_textures.index()
    }
}

impl Demo for Ludo {
    fn name(&self) -> &'static str {
        "ludo"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if *event == InputEvent::Click {
            if let Some(&texture) = self.board_textures.advance() {
                if let Some(board) = self.scene.object_mut(self.board) {
                    board.set_surface(BOARD_TOP, Surface::Texture(texture));
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
        if let Some(die) = self.scene.object_mut(self.die) {
            die.transform.rotate_local(Vec3::Y, DIE_SPIN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn die_spins_about_its_tilted_axis() {
        let mut demo = Ludo::new(&DemoConfig::default());
        for _ in 0..50 {
            demo.update();
        }
        let rotation = demo.scene().object(demo.die).unwrap().transform.rotation;
        let expected = Quat::from_rotation_x(BOARD_TILT) * Quat::from_rotation_y(50.0 * DIE_SPIN);
        assert!(rotation.abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn click_only_changes_the_top_face() {
        let mut demo = Ludo::new(&DemoConfig::default());
        let before = demo.scene().object(demo.board).unwrap().surfaces.clone();
        demo.handle_event(&InputEvent::Click);
        let after = &demo.scene().object(demo.board).unwrap().surfaces;

        for (i, (a, b)) in before.iter().zip(after.iter()).enumerate() {
            if i == BOARD_TOP {
                assert_ne!(a, b);
            } else {
                assert_eq!(a, b);
            }
        }
        assert_eq!(demo.board_texture_index(), 1);
    }
}
