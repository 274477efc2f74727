//! Recursive Whitted shading.
//!
//! `trace_color` is the heart of the renderer: nearest hit, local
//! diffuse + specular lighting with shadow tests, and a recursive mirror
//! bounce with a bounded depth budget.

use glint_core::{Scene, SceneObject};
use glint_math::{Ray, Vec3};

use crate::geometry::Intersectable;
use crate::intersect::{nearest, shadow_distance, Intersection};

/// Maximum reflection recursion depth.
pub const MAX_DEPTH: u32 = 10;

/// Offset along the reflection direction before re-tracing, so the
/// bounced ray cannot immediately re-hit its own origin point.
const REFLECT_EPSILON: f32 = 0.001;

/// Flat stand-in for the reflection contribution once the depth budget is
/// spent; avoids both infinite recursion and a jarring black cutoff.
const DEPTH_EXCEEDED_GREY: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Compute the color seen along `ray`.
///
/// Returns black when the ray escapes the scene. Accumulated color is
/// deliberately unclamped; saturation happens at the final pixel write.
pub fn trace_color(ray: &Ray, scene: &Scene, depth: u32) -> Vec3 {
    match nearest(ray, scene) {
        Some(hit) => shade(&hit, scene, depth),
        None => Vec3::ZERO,
    }
}

/// Shade a single intersection: direct lighting plus the mirror bounce.
fn shade(hit: &Intersection<'_>, scene: &Scene, depth: u32) -> Vec3 {
    let direction = hit.ray.direction;
    let point = hit.ray.at(hit.distance);
    let normal = hit.object.normal(point);
    let reflect_dir = reflect(direction, normal);

    let color = natural_color(hit.object, point, normal, reflect_dir, scene);

    if depth >= MAX_DEPTH {
        return color + DEPTH_EXCEEDED_GREY;
    }

    let bounce = Ray::new(point + REFLECT_EPSILON * reflect_dir, reflect_dir);
    color + hit.object.surface().reflectivity(point) * trace_color(&bounce, scene, depth + 1)
}

/// Direct lighting at `point`: diffuse and specular terms summed over
/// every unoccluded light, with no distance attenuation.
fn natural_color(
    object: &SceneObject,
    point: Vec3,
    normal: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
) -> Vec3 {
    let surface = object.surface();
    let mut color = Vec3::ZERO;

    for light in &scene.lights {
        let to_light = light.position - point;
        let light_dir = to_light.normalize_or_zero();

        // In shadow iff something sits between the point and the light.
        let occluder = shadow_distance(&Ray::new(point, light_dir), scene);
        if occluder != 0.0 && occluder <= to_light.length() {
            continue;
        }

        let diffuse_term = light_dir.dot(normal);
        if diffuse_term > 0.0 {
            color += diffuse_term * surface.diffuse(point) * light.color;
        }

        let specular_term = light_dir.dot(reflect_dir.normalize_or_zero());
        if specular_term > 0.0 {
            color += specular_term.powf(surface.roughness()) * surface.specular(point) * light.color;
        }
    }

    color
}

/// Mirror `v` about the unit normal `n`.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
