//! Glint Renderer - CPU Whitted Ray Tracing
//!
//! A recursive Whitted-style ray tracer: primary rays from a pinhole
//! camera, brute-force nearest intersection against analytic spheres and
//! planes, Phong-like direct lighting with shadow rays, and bounded
//! mirror-reflection recursion. Pixels render in parallel via rayon.

mod geometry;
mod intersect;
mod renderer;
mod tracer;

pub use geometry::Intersectable;
pub use intersect::{nearest, shadow_distance, Intersection};
pub use renderer::{render, render_pixel, Frame};
pub use tracer::{trace_color, MAX_DEPTH};

/// Re-export the scene description and math types for convenience
pub use glint_core::{Camera, Light, Scene, SceneObject, Surface};
pub use glint_math::{Ray, Vec3};
