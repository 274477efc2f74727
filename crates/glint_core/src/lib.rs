//! Glint Core - Scene description for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `SceneObject`, `Light`, `Camera`, `Surface`
//! - **Scene loading**: JSON scene files via serde
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{load_scene, Scene};
//!
//! // Load a scene file, or use the built-in fixture
//! let scene = load_scene("scene.json")?;
//! let demo = Scene::sample();
//! println!("{} objects, {} lights", demo.objects.len(), demo.lights.len());
//! ```

pub mod camera;
pub mod loader;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use camera::Camera;
pub use loader::{load_scene, scene_from_json, LoadError};
pub use scene::{Light, Scene, SceneObject};
pub use surface::Surface;
