//! Render the sample scene and save it as a PNG.
//!
//! Run with `RUST_LOG=debug` for render timing details.

use anyhow::Context;
use glint_renderer::{render, Scene};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (width, height) = (800, 600);
    let scene = Scene::sample();
    info!(
        "rendering sample scene: {} objects, {} lights",
        scene.objects.len(),
        scene.lights.len()
    );

    let start = std::time::Instant::now();
    let frame = render(&scene, width, height);
    info!("rendered {}x{} in {:?}", width, height, start.elapsed());

    let filename = "sample.png";
    image::save_buffer(
        filename,
        frame.data(),
        width as u32,
        height as u32,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("failed to save {filename}"))?;
    info!("saved {filename}");

    Ok(())
}
