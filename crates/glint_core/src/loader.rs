//! JSON scene loading.
//!
//! Scenes are plain serde values, so the on-disk format is their JSON
//! form. A scene with zero objects or zero lights is valid (it renders
//! black); only I/O and malformed JSON are errors.

use std::path::Path;

use log::info;
use thiserror::Error;

use crate::scene::Scene;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, LoadError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let scene = scene_from_json(&text)?;
    info!(
        "loaded scene from {}: {} objects, {} lights",
        path.as_ref().display(),
        scene.objects.len(),
        scene.lights.len()
    );
    Ok(scene)
}

/// Parse a scene from a JSON string.
pub fn scene_from_json(json: &str) -> Result<Scene, LoadError> {
    Ok(serde_json::from_str(json)?)
}
