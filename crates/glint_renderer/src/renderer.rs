//! Parallel per-pixel renderer.
//!
//! Maps every pixel to a camera ray, traces it, and writes 8-bit RGB
//! into a flat frame buffer. Pixels are fully independent, so the loop
//! is a rayon parallel iteration over disjoint 3-byte chunks.

use glint_core::Scene;
use glint_math::{Ray, Vec3};
use log::debug;
use rayon::prelude::*;

use crate::tracer::trace_color;

/// Bytes per pixel in a [`Frame`].
const CHANNELS: usize = 3;

/// A rendered image: a flat, row-major buffer of RGB byte triples.
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    /// Create a black frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * CHANNELS],
        }
    }

    /// The raw RGB buffer, `width * height * 3` bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the pixel at (x, y) as an RGB triple.
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * CHANNELS;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Convert to RGBA bytes (for display hosts expecting 4 channels).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width * self.height * 4);
        for rgb in self.pixels.chunks_exact(CHANNELS) {
            bytes.extend_from_slice(rgb);
            bytes.push(255);
        }
        bytes
    }
}

/// Render `scene` at the given resolution.
pub fn render(scene: &Scene, width: usize, height: usize) -> Frame {
    debug!(
        "rendering {}x{}: {} objects, {} lights",
        width,
        height,
        scene.objects.len(),
        scene.lights.len()
    );

    let mut frame = Frame::new(width, height);

    frame
        .pixels
        .par_chunks_exact_mut(CHANNELS)
        .enumerate()
        .for_each(|(i, out)| {
            let x = i % width;
            let y = i / width;
            out.copy_from_slice(&render_pixel(scene, x, y, width, height));
        });

    frame
}

/// Trace the primary ray for pixel (x, y) and legalize the result.
pub fn render_pixel(scene: &Scene, x: usize, y: usize, width: usize, height: usize) -> [u8; 3] {
    let direction = pixel_direction(&scene.camera, x, y, width, height);
    let ray = Ray::new(scene.camera.position, direction);
    let color = trace_color(&ray, scene, 0);
    legalize(color)
}

/// Camera-space direction for pixel (x, y).
///
/// The 0.9 horizontal and 1.6 vertical scale factors set the field of
/// view; they are part of the camera model, not free parameters.
fn pixel_direction(
    camera: &glint_core::Camera,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> Vec3 {
    let rx = (x as f32 - width as f32 / 2.0) / (0.9 * width as f32);
    let ry = -(y as f32 - height as f32 / 2.0) / (1.6 * height as f32);
    (camera.forward + rx * camera.right + ry * camera.up).normalize_or_zero()
}

/// Saturate an accumulated color into an 8-bit RGB triple.
///
/// Channels at or above 1.0 clip to 255; there is no lower clamp, the
/// tracer never produces negative channels.
fn legalize(color: Vec3) -> [u8; 3] {
    [
        (color.x.min(1.0) * 255.0) as u8,
        (color.y.min(1.0) * 255.0) as u8,
        (color.z.min(1.0) * 255.0) as u8,
    ]
}
