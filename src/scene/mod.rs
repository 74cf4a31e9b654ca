//! Scene management

mod camera;
mod camera_controller;
mod light;
mod orbit;
mod transform;

pub use camera::*;
pub use camera_controller::*;
pub use light::*;
pub use orbit::*;
pub use transform::*;

use glam::{Mat4, Vec3};

use crate::assets::{AssetId, AssetStore};

/// Handle to an object in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// Handle to a light in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightId(usize);

/// Geometry of an object
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Box { width: f32, height: f32, depth: f32 },
    Plane { width: f32, height: f32 },
    Sphere { radius: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Cone { radius: f32, height: f32 },
    /// Transform-only node
    Group,
    /// Geometry supplied by a loaded model
    Model(AssetId),
}

/// Appearance of one face group of an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    Color(Color),
    Texture(AssetId),
    /// Texture blended toward a colour that drifts with [`Scene::clock`]
    Seasonal(AssetId),
}

/// Which side of a surface is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// A node of the scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub shape: Shape,
    /// One surface for the whole shape, or one per face (boxes use six)
    pub surfaces: Vec<Surface>,
    pub side: Side,
    /// Multiplied into every surface colour
    pub tint: Color,
    pub transform: Transform,
    pub parent: Option<ObjectId>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
            surfaces: Vec::new(),
            side: Side::default(),
            tint: Color::WHITE,
            transform: Transform::default(),
            parent: None,
        }
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surfaces = vec![surface];
        self
    }

    pub fn with_surfaces(mut self, surfaces: Vec<Surface>) -> Self {
        self.surfaces = surfaces;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Replace the surface at `index`. Returns false if the object has no such surface.
    pub fn set_surface(&mut self, index: usize, surface: Surface) -> bool {
        match self.surfaces.get_mut(index) {
            Some(slot) => {
                *slot = surface;
                true
            }
            None => false,
        }
    }

    /// Model asset this object waits on, if any
    pub fn model(&self) -> Option<AssetId> {
        match self.shape {
            Shape::Model(id) => Some(id),
            _ => None,
        }
    }
}

/// The scene containing all renderable content, owned by one demo
pub struct Scene {
    pub camera: Camera,
    pub ambient: AmbientLight,
    /// Time input for seasonal surfaces
    pub clock: f32,
    pub assets: AssetStore,
    lights: Vec<Light>,
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            camera: Camera::default(),
            ambient: AmbientLight::default(),
            clock: 0.0,
            assets: AssetStore::new(),
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Add a root object to the scene
    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object);
        id
    }

    /// Add an object under `parent`; its transform becomes parent-relative
    pub fn add_child(&mut self, parent: ObjectId, mut object: SceneObject) -> ObjectId {
        object.parent = Some(parent);
        self.add_object(object)
    }

    /// Copy `id` and all its descendants. The copy shares the original's parent.
    pub fn duplicate(&mut self, id: ObjectId) -> ObjectId {
        let root = self.objects[id.0].clone();
        let copy = self.add_object(root);

        let mut stack = vec![(id, copy)];
        while let Some((from, to)) = stack.pop() {
            for child in self.children(from) {
                let object = self.objects[child.0].clone();
                let new_child = self.add_child(to, object);
                stack.push((child, new_child));
            }
        }
        copy
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    /// Mutable access to an object that is actually present in the scene.
    ///
    /// Returns `None` while the object, or any ancestor, still waits on a model
    /// and forever after that model failed to load.
    pub fn loaded_object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        if !self.is_present(id) {
            return None;
        }
        self.objects.get_mut(id.0)
    }

    /// Whether the object and all its ancestors have their geometry available
    pub fn is_present(&self, id: ObjectId) -> bool {
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(object) = self.objects.get(id.0) else {
                return false;
            };
            if let Some(model) = object.model() {
                if !self.assets.is_ready(model) {
                    return false;
                }
            }
            current = object.parent;
        }
        true
    }

    /// Direct children of `id`
    pub fn children(&self, id: ObjectId) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.parent == Some(id))
            .map(|(i, _)| ObjectId(i))
            .collect()
    }

    /// First object with the given name
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .map(ObjectId)
    }

    /// Iterate over all objects, present or not
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    /// Iterate over objects that should be drawn this frame
    pub fn present_objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects().filter(|(id, _)| self.is_present(*id))
    }

    /// Set the tint of `id` and every descendant
    pub fn tint_subtree(&mut self, id: ObjectId, tint: Color) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(object) = self.objects.get_mut(id.0) {
                object.tint = tint;
            }
            stack.extend(self.children(id));
        }
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Object-to-world matrix, composed through the parent chain
    pub fn world_matrix(&self, id: ObjectId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(object) = self.objects.get(id.0) else {
                break;
            };
            matrix = object.transform.matrix() * matrix;
            current = object.parent;
        }
        matrix
    }

    pub fn world_position(&self, id: ObjectId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    /// Add a light to the scene
    pub fn add_light(&mut self, light: Light) -> LightId {
        let id = LightId(self.lights.len());
        self.lights.push(light);
        id
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0)
    }

    pub fn light_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.get_mut(id.0)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the directional light (if any)
    pub fn directional_light(&self) -> Option<&Light> {
        self.lights
            .iter()
            .find(|l| matches!(l.kind, LightKind::Directional { .. }))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetSource;

    const EPS: f32 = 1e-5;

    #[test]
    fn children_inherit_parent_transform() {
        let mut scene = Scene::new();
        let parent = scene.add_object(
            SceneObject::new("trunk", Shape::Group).with_position(Vec3::new(10.0, 0.0, -4.0)),
        );
        let child = scene.add_child(
            parent,
            SceneObject::new("leaves", Shape::Sphere { radius: 3.0 })
                .with_position(Vec3::new(0.0, 12.0, 0.0)),
        );

        let world = scene.world_position(child);
        assert!(world.abs_diff_eq(Vec3::new(10.0, 12.0, -4.0), EPS));
    }

    #[test]
    fn duplicate_copies_the_subtree() {
        let mut scene = Scene::new();
        let trunk = scene.add_object(SceneObject::new("trunk", Shape::Group));
        let branch = scene.add_child(trunk, SceneObject::new("branch", Shape::Group));
        scene.add_child(branch, SceneObject::new("leaf", Shape::Sphere { radius: 1.0 }));

        let copy = scene.duplicate(trunk);
        assert_eq!(scene.object_count(), 6);
        assert_eq!(scene.object(copy).unwrap().parent, None);

        let copied_children = scene.children(copy);
        assert_eq!(copied_children.len(), 1);
        assert_ne!(copied_children[0], branch);
        assert_eq!(scene.children(copied_children[0]).len(), 1);
        // The original subtree is untouched
        assert_eq!(scene.children(trunk), vec![branch]);
    }

    #[test]
    fn model_objects_are_absent_until_loaded() {
        let mut scene = Scene::new();
        let model = scene.assets.request_model("models/lock_head.gltf");
        let head = scene.add_object(SceneObject::new("lock_head", Shape::Model(model)));
        let part = scene.add_child(head, SceneObject::new("decal", Shape::Plane { width: 1.0, height: 1.0 }));

        assert!(scene.loaded_object_mut(head).is_none());
        assert!(!scene.is_present(part));
        assert_eq!(scene.present_objects().count(), 0);

        let mut source = MemoryAssetSource::new();
        source.insert("models/lock_head.gltf", b"{}".to_vec());
        scene.assets.load_pending(&source, 1);

        assert!(scene.loaded_object_mut(head).is_some());
        assert!(scene.is_present(part));
        assert_eq!(scene.present_objects().count(), 2);
    }

    #[test]
    fn failed_model_stays_absent() {
        let mut scene = Scene::new();
        let model = scene.assets.request_model("models/missing.glb");
        let id = scene.add_object(SceneObject::new("bench", Shape::Model(model)));

        scene.assets.load_pending(&MemoryAssetSource::new(), 4);
        assert!(scene.assets.is_failed(model));
        assert!(scene.loaded_object_mut(id).is_none());
    }

    #[test]
    fn set_surface_checks_bounds() {
        let mut object = SceneObject::new("board", Shape::Box { width: 3.0, height: 0.1, depth: 3.0 })
            .with_surfaces(vec![Surface::Color(Color::BLACK); 6]);
        assert!(object.set_surface(2, Surface::Color(Color::WHITE)));
        assert_eq!(object.surfaces[2], Surface::Color(Color::WHITE));
        assert!(!object.set_surface(6, Surface::Color(Color::WHITE)));
    }

    #[test]
    fn find_by_name_and_lights() {
        let mut scene = Scene::new();
        scene.add_object(SceneObject::new("room", Shape::Box { width: 10.0, height: 5.0, depth: 10.0 }));
        let screen = scene.add_object(SceneObject::new("screen", Shape::Plane { width: 1.3, height: 0.72 }));
        assert_eq!(scene.find("screen"), Some(screen));
        assert_eq!(scene.find("nothing"), None);

        let light = scene.add_light(Light::directional(Vec3::new(-2.0, 2.0, -2.0), Color::WHITE, 100.0));
        assert!(scene.directional_light().is_some());
        scene.light_mut(light).unwrap().position.y = 5.0;
        assert_eq!(scene.light(light).unwrap().position.y, 5.0);
    }
}
