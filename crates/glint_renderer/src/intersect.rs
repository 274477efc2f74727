//! Nearest-hit queries against a whole scene.
//!
//! Object counts are small, so intersection is a brute-force scan; no
//! acceleration structure is involved.

use glint_core::{Scene, SceneObject};
use glint_math::Ray;

use crate::geometry::Intersectable;

/// The nearest valid hit of a ray against one scene object.
///
/// Transient: produced and consumed within a single trace step.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Distance along the ray; always positive for well-formed scenes.
    pub distance: f32,
    /// The ray that produced the hit.
    pub ray: Ray,
    /// The object that was hit.
    pub object: &'a SceneObject,
}

/// Find the nearest intersection of `ray` with any object in `scene`.
///
/// Ties go to the first object in scene order.
pub fn nearest<'a>(ray: &Ray, scene: &'a Scene) -> Option<Intersection<'a>> {
    let mut closest: Option<Intersection<'a>> = None;

    for object in &scene.objects {
        if let Some(distance) = object.intersect_distance(ray) {
            let nearer = match &closest {
                Some(hit) => distance < hit.distance,
                None => true,
            };
            if nearer {
                closest = Some(Intersection {
                    distance,
                    ray: *ray,
                    object,
                });
            }
        }
    }

    closest
}

/// Distance to the nearest occluder along `ray`, or `0.0` when nothing is
/// hit.
///
/// The zero sentinel is unambiguous: the intersector never produces a
/// genuine zero-distance hit.
pub fn shadow_distance(ray: &Ray, scene: &Scene) -> f32 {
    nearest(ray, scene).map_or(0.0, |hit| hit.distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Camera, Surface};
    use glint_math::Vec3;

    fn scene_with(objects: Vec<SceneObject>) -> Scene {
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let mut scene = Scene::new(camera);
        for object in objects {
            scene.add_object(object);
        }
        scene
    }

    fn sphere_at(z: f32) -> SceneObject {
        SceneObject::Sphere {
            center: Vec3::new(0.0, 0.0, z),
            radius: 1.0,
            surface: Surface::Shiny,
        }
    }

    #[test]
    fn test_nearest_picks_closest_object() {
        let scene = scene_with(vec![sphere_at(-10.0), sphere_at(-5.0)]);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = nearest(&ray, &scene).expect("two candidates");
        assert!((hit.distance - 4.0).abs() < 1e-5);
        assert!(std::ptr::eq(hit.object, &scene.objects[1]));
    }

    #[test]
    fn test_nearest_empty_scene() {
        let scene = scene_with(vec![]);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(nearest(&ray, &scene).is_none());
    }

    #[test]
    fn test_shadow_distance_sentinel() {
        let scene = scene_with(vec![sphere_at(-5.0)]);

        let hit = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!((shadow_distance(&hit, &scene) - 4.0).abs() < 1e-5);

        let miss = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(shadow_distance(&miss, &scene), 0.0);
    }
}
