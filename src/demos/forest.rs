//! Forest: two hundred trees to walk between, lit by a colour-changing sun

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{demo_camera, Demo, EventResponse};
use crate::animation::LightColorCycler;
use crate::input::InputEvent;
use crate::scene::{
    CameraController, Color, FreeMoveController, Light, LightId, ObjectId, Scene, SceneObject,
    Shape, Side, Surface, Transform,
};
use crate::DemoConfig;

const TREE_COUNT: usize = 200;
const FOREST_MIN: f32 = -100.0;
const FOREST_MAX: f32 = 100.0;
const TREE_SPACING: f32 = 10.0;
const MAX_ATTEMPTS_PER_TREE: usize = 10_000;
const CLOCK_STEP: f32 = 0.005;

/// Scatter up to `count` points uniformly over the square `[min, max)²`,
/// keeping every pair at least `min_distance` apart.
///
/// Candidates are drawn and rejected until one fits. If `max_attempts`
/// candidates in a row are rejected the square is considered full and
/// fewer points are returned.
pub fn scatter_points(
    rng: &mut impl Rng,
    count: usize,
    min: f32,
    max: f32,
    min_distance: f32,
    max_attempts: usize,
) -> Vec<Vec2> {
    let mut points: Vec<Vec2> = Vec::with_capacity(count);
    if max <= min {
        return points;
    }

    'points: while points.len() < count {
        for _ in 0..max_attempts {
            let candidate = Vec2::new(rng.random_range(min..max), rng.random_range(min..max));
            if points
                .iter()
                .all(|p| p.distance(candidate) >= min_distance)
            {
                points.push(candidate);
                continue 'points;
            }
        }
        log::warn!(
            "Placed only {} of {} points after {} rejected attempts",
            points.len(),
            count,
            max_attempts
        );
        break;
    }
    points
}

pub struct Forest {
    scene: Scene,
    camera_controller: FreeMoveController,
    light: LightId,
    trees: Vec<ObjectId>,
    light_colors: LightColorCycler,
}

impl Forest {
    pub fn new(config: &DemoConfig) -> Self {
        let mut scene = Scene::new();
        let eye = Vec3::new(0.0, 0.0, 30.0);
        scene.camera = demo_camera(config, eye, eye - Vec3::Z);

        let light = scene.add_light(Light::point(
            Vec3::new(0.0, 200.0, 0.0),
            Color::WHITE,
            100_000.0,
            400.0,
        ));

        let sky = scene.assets.request_texture("texture/sky.jpg");
        let ground = scene.assets.request_texture("texture/ground.jpg");
        let mut room_faces = vec![Surface::Texture(sky); 6];
        room_faces[3] = Surface::Texture(ground);
        scene.add_object(
            SceneObject::new("room", Shape::Box { width: 300.0, height: 200.0, depth: 300.0 })
                .with_surfaces(room_faces)
                .with_side(Side::Back)
                .with_position(Vec3::new(0.0, 95.0, 0.0)),
        );

        let template = build_tree(&mut scene);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let spots = scatter_points(
            &mut rng,
            TREE_COUNT,
            FOREST_MIN,
            FOREST_MAX,
            TREE_SPACING,
            MAX_ATTEMPTS_PER_TREE,
        );

        let mut trees = Vec::with_capacity(spots.len());
        for (i, spot) in spots.iter().enumerate() {
            let tree = if i == 0 { template } else { scene.duplicate(template) };
            if let Some(trunk) = scene.object_mut(tree) {
                trunk.transform.position = Vec3::new(spot.x, 0.0, spot.y);
            }
            trees.push(tree);
        }

        let mut camera_controller = FreeMoveController::default();
        camera_controller.accept_repeat = config.key_repeat;
        camera_controller.sync_with_camera(&scene.camera);

        Self {
            scene,
            camera_controller,
            light,
            trees,
            light_colors: LightColorCycler::new(config.seed, 5),
        }
    }

    pub fn trees(&self) -> &[ObjectId] {
        &self.trees
    }

    pub fn light_color(&self) -> Color {
        self.scene
            .light(self.light)
            .map(|l| l.color)
            .unwrap_or(Color::WHITE)
    }

    pub fn yaw(&self) -> f32 {
        self.camera_controller.yaw
    }
}

/// Trunk with two branches and five leaf clusters. Returns the trunk.
fn build_tree(scene: &mut Scene) -> ObjectId {
    let bark = Surface::Texture(scene.assets.request_texture("texture/tree.jpg"));
    let leaves = Surface::Seasonal(scene.assets.request_texture("texture/leaves.jpg"));

    let trunk = scene.add_object(
        SceneObject::new(
            "trunk",
            Shape::Cylinder { radius_top: 1.0, radius_bottom: 1.0, height: 10.0 },
        )
        .with_surface(bark),
    );

    let branches = [
        (5.0, Vec3::new(0.9, 7.0, 0.0), -15f32),
        (3.5, Vec3::new(-0.7, 6.0, 0.0), 15f32),
    ];
    for (height, position, tilt) in branches {
        scene.add_child(
            trunk,
            SceneObject::new(
                "branch",
                Shape::Cylinder { radius_top: 0.5, radius_bottom: 0.8, height },
            )
            .with_surface(bark)
            .with_transform(Transform::from_position(position).with_euler(0.0, 0.0, tilt.to_radians())),
        );
    }

    let clusters = [
        (4.0, Vec3::new(3.0, 12.0, 0.0)),
        (3.0, Vec3::new(-3.0, 10.0, 2.0)),
        (3.0, Vec3::new(0.0, 10.0, -2.0)),
        (3.0, Vec3::new(-1.0, 10.0, 3.0)),
        (3.5, Vec3::new(-0.3, 14.0, 0.0)),
    ];
    for (radius, position) in clusters {
        scene.add_child(
            trunk,
            SceneObject::new("leaves", Shape::Sphere { radius })
                .with_surface(leaves)
                .with_position(position),
        );
    }
    trunk
}

impl Demo for Forest {
    fn name(&self) -> &'static str {
        "forest"
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if *event == InputEvent::Click {
            let color = self.light_colors.next_color();
            log::debug!("Forest light colour #{:06x}", color.to_hex());
            if let Some(light) = self.scene.light_mut(self.light) {
                light.color = color;
            }
            for &tree in &self.trees {
                self.scene.tint_subtree(tree, color);
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
        self.scene.clock += CLOCK_STEP;
    }
}
