//! Ray intersection and surface normals for scene objects.

use glint_core::SceneObject;
use glint_math::{Ray, Vec3};

/// Objects that can answer ray-intersection and surface-normal queries.
pub trait Intersectable {
    /// Distance along `ray` to the nearest forward hit, if any.
    ///
    /// Returns `None` for misses, for hits behind the origin, and for a
    /// computed distance of exactly zero (a hit at the ray origin would
    /// otherwise self-intersect forever).
    fn intersect_distance(&self, ray: &Ray) -> Option<f32>;

    /// Surface normal at a point on the object's boundary.
    fn normal(&self, point: Vec3) -> Vec3;
}

impl Intersectable for SceneObject {
    fn intersect_distance(&self, ray: &Ray) -> Option<f32> {
        match self {
            SceneObject::Sphere { center, radius, .. } => {
                // Project the center onto the ray: eo.v is the distance to
                // the closest approach.
                let eo = *center - ray.origin;
                let v = eo.dot(ray.direction);
                if v < 0.0 {
                    return None;
                }

                // A negative radius squares to the same discriminant; the
                // inverted sphere intersects like its positive twin.
                let disc = radius * radius - (eo.dot(eo) - v * v);
                if disc < 0.0 {
                    return None;
                }

                let dist = v - disc.sqrt();
                if dist == 0.0 || !dist.is_finite() {
                    return None;
                }
                Some(dist)
            }
            SceneObject::Plane { normal, offset, .. } => {
                // One-sided: a ray traveling with the normal sees the back
                // face and misses.
                let denom = normal.dot(ray.direction);
                if denom > 0.0 {
                    return None;
                }

                let dist = (normal.dot(ray.origin) + offset) / -denom;
                if !dist.is_finite() {
                    return None;
                }
                Some(dist)
            }
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            SceneObject::Sphere { center, .. } => (point - *center).normalize_or_zero(),
            SceneObject::Plane { normal, .. } => *normal,
        }
    }
}
