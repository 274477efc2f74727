//! Scene description types.
//!
//! A [`Scene`] aggregates a camera, point lights, and a flat list of
//! analytic scene objects. It is a plain value: renderer-agnostic,
//! serializable, and read-only for the duration of a render pass.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::surface::Surface;

/// A point light with no distance attenuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    /// Light color; channels are unit-less and may push shading past 1.0.
    pub color: Vec3,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// An analytic renderable primitive.
///
/// A closed set of two variants is all the tracer needs; both answer
/// ray-intersection and surface-normal queries (see the renderer crate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneObject {
    Sphere {
        center: Vec3,
        /// Sphere radius. A negative radius is a valid degenerate form:
        /// the quadratic still solves and the surface is seen from inside.
        radius: f32,
        surface: Surface,
    },
    Plane {
        /// Unit normal of the visible face. Planes are one-sided.
        normal: Vec3,
        /// Offset in the implicit form `normal . P + offset = 0`.
        offset: f32,
        surface: Surface,
    },
}

impl SceneObject {
    /// The surface material of this object.
    pub fn surface(&self) -> Surface {
        match self {
            SceneObject::Sphere { surface, .. } => *surface,
            SceneObject::Plane { surface, .. } => *surface,
        }
    }
}

/// A complete renderable scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene with the given camera.
    ///
    /// An empty scene is valid and renders all-black.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// The classic demo scene: a checkerboard floor, two shiny spheres,
    /// and four tinted point lights.
    ///
    /// This is a fixture for examples and tests, passed explicitly into
    /// the renderer rather than living as global state.
    pub fn sample() -> Self {
        let camera = Camera::look_at(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0));
        let mut scene = Scene::new(camera);

        scene.add_object(SceneObject::Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            offset: 0.0,
            surface: Surface::Checkerboard,
        });
        scene.add_object(SceneObject::Sphere {
            center: Vec3::new(0.0, 1.0, -0.25),
            radius: 1.0,
            surface: Surface::Shiny,
        });
        scene.add_object(SceneObject::Sphere {
            center: Vec3::new(-1.0, 0.5, 1.5),
            radius: 0.5,
            surface: Surface::Shiny,
        });

        scene.add_light(Light::new(
            Vec3::new(-2.0, 2.5, 0.0),
            Vec3::new(0.49, 0.07, 0.07),
        ));
        scene.add_light(Light::new(
            Vec3::new(1.5, 2.5, 1.5),
            Vec3::new(0.07, 0.07, 0.49),
        ));
        scene.add_light(Light::new(
            Vec3::new(1.5, 2.5, -1.5),
            Vec3::new(0.07, 0.49, 0.071),
        ));
        scene.add_light(Light::new(
            Vec3::new(0.0, 3.5, 0.0),
            Vec3::new(0.21, 0.21, 0.35),
        ));

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene() {
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let scene = Scene::new(camera);

        assert!(scene.objects.is_empty());
        assert!(scene.lights.is_empty());
    }

    #[test]
    fn test_sample_scene_contents() {
        let scene = Scene::sample();

        assert_eq!(scene.objects.len(), 3);
        assert_eq!(scene.lights.len(), 4);

        // Ground plane first, so intersection ties favor it.
        assert!(matches!(scene.objects[0], SceneObject::Plane { .. }));
    }

    #[test]
    fn test_object_surface_accessor() {
        let sphere = SceneObject::Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
            surface: Surface::Shiny,
        };
        assert_eq!(sphere.surface(), Surface::Shiny);
    }
}
