//! Procedural surface materials.
//!
//! A [`Surface`] maps a world-space position to the local shading inputs:
//! diffuse color, specular color, reflectivity, and a Phong roughness
//! exponent. Materials are a closed set of tagged variants rather than
//! closures so scenes stay serializable and carry no hidden state.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const BLACK: Vec3 = Vec3::ZERO;
const GREY: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Cutoff for the ripple pattern's `sin(z) + cos(x)` field.
const RIPPLE_THRESHOLD: f32 = 0.5;

/// A procedural material, evaluated at a world-space position.
///
/// The checker variants alternate on the parity of two floored axes, so
/// they only pattern correctly on the matching principal plane; using
/// them on arbitrary geometry is an accepted limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    /// Position-independent glossy white: full diffuse, grey highlight,
    /// strong mirror reflection.
    Shiny,
    /// Black/white checker on the XZ (floor) plane.
    Checkerboard,
    /// Black/white checker on the XY (wall) plane.
    WallCheckerboard,
    /// Concentric ripple bands from `sin(z) + cos(x)`.
    Ripple,
}

impl Surface {
    /// Diffuse color at `p`.
    pub fn diffuse(&self, p: Vec3) -> Vec3 {
        match self {
            Surface::Shiny => WHITE,
            Surface::Checkerboard | Surface::WallCheckerboard | Surface::Ripple => {
                if self.is_light_cell(p) {
                    WHITE
                } else {
                    BLACK
                }
            }
        }
    }

    /// Specular highlight color at `p`.
    pub fn specular(&self, _p: Vec3) -> Vec3 {
        match self {
            Surface::Shiny => GREY,
            Surface::Checkerboard | Surface::WallCheckerboard | Surface::Ripple => WHITE,
        }
    }

    /// Mirror reflectivity at `p`, in [0, 1].
    pub fn reflectivity(&self, p: Vec3) -> f32 {
        match self {
            Surface::Shiny => 0.7,
            Surface::Checkerboard | Surface::WallCheckerboard | Surface::Ripple => {
                // Dark cells reflect more, matching the classic checker floor.
                if self.is_light_cell(p) {
                    0.1
                } else {
                    0.7
                }
            }
        }
    }

    /// Phong specular exponent (highlight sharpness). Not position-dependent.
    pub fn roughness(&self) -> f32 {
        match self {
            Surface::Shiny => 250.0,
            Surface::Checkerboard | Surface::WallCheckerboard | Surface::Ripple => 150.0,
        }
    }

    /// Whether `p` falls on the light (white, low-reflectivity) branch of
    /// the pattern. `Shiny` is uniform and always reports light.
    fn is_light_cell(&self, p: Vec3) -> bool {
        match self {
            Surface::Shiny => true,
            Surface::Checkerboard => parity(p.x, p.z),
            Surface::WallCheckerboard => parity(p.x, p.y),
            Surface::Ripple => p.z.sin() + p.x.cos() > RIPPLE_THRESHOLD,
        }
    }
}

/// Checker parity: true on cells where `floor(a) + floor(b)` is odd.
fn parity(a: f32, b: f32) -> bool {
    (a.floor() + b.floor()).rem_euclid(2.0) != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_parity_alternates() {
        let s = Surface::Checkerboard;

        // (0.5, _, 0.5): floor 0 + 0 = even -> black
        assert_eq!(s.diffuse(Vec3::new(0.5, 0.0, 0.5)), BLACK);
        // Step one cell over in x: odd -> white
        assert_eq!(s.diffuse(Vec3::new(1.5, 0.0, 0.5)), WHITE);
        // Step one cell over in z as well: even again
        assert_eq!(s.diffuse(Vec3::new(1.5, 0.0, 1.5)), BLACK);
    }

    #[test]
    fn test_checkerboard_ignores_y() {
        let s = Surface::Checkerboard;
        let a = s.diffuse(Vec3::new(0.5, 0.0, 0.5));
        let b = s.diffuse(Vec3::new(0.5, 100.0, 0.5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_checkerboard_negative_coordinates() {
        let s = Surface::Checkerboard;

        // floor(-0.5) = -1, floor(0.5) = 0 -> odd -> white
        assert_eq!(s.diffuse(Vec3::new(-0.5, 0.0, 0.5)), WHITE);
        // floor(-0.5) + floor(-0.5) = -2 -> even -> black
        assert_eq!(s.diffuse(Vec3::new(-0.5, 0.0, -0.5)), BLACK);
    }

    #[test]
    fn test_wall_checkerboard_uses_xy() {
        let s = Surface::WallCheckerboard;

        assert_eq!(s.diffuse(Vec3::new(0.5, 0.5, 0.0)), BLACK);
        assert_eq!(s.diffuse(Vec3::new(0.5, 1.5, 0.0)), WHITE);
        // z must not matter
        assert_eq!(
            s.diffuse(Vec3::new(0.5, 1.5, 7.25)),
            s.diffuse(Vec3::new(0.5, 1.5, 0.0))
        );
    }

    #[test]
    fn test_ripple_thresholds_sin_cos() {
        let s = Surface::Ripple;

        // sin(0) + cos(0) = 1.0 > 0.5 -> white branch
        assert_eq!(s.diffuse(Vec3::ZERO), WHITE);
        assert_eq!(s.reflectivity(Vec3::ZERO), 0.1);

        // sin(pi) + cos(pi) = -1.0 -> black branch
        let p = Vec3::new(std::f32::consts::PI, 0.0, std::f32::consts::PI);
        assert_eq!(s.diffuse(p), BLACK);
        assert_eq!(s.reflectivity(p), 0.7);
    }

    #[test]
    fn test_shiny_is_position_independent() {
        let s = Surface::Shiny;
        let a = Vec3::new(-3.0, 2.0, 17.0);
        let b = Vec3::new(0.25, -9.0, 1.0);

        assert_eq!(s.diffuse(a), s.diffuse(b));
        assert_eq!(s.specular(a), s.specular(b));
        assert_eq!(s.reflectivity(a), s.reflectivity(b));
        assert_eq!(s.roughness(), 250.0);
    }

    #[test]
    fn test_checker_reflectivity_tracks_parity() {
        let s = Surface::Checkerboard;
        let dark = Vec3::new(0.5, 0.0, 0.5);
        let light = Vec3::new(1.5, 0.0, 0.5);

        assert_eq!(s.reflectivity(dark), 0.7);
        assert_eq!(s.reflectivity(light), 0.1);
    }
}
