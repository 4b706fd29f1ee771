//! The intersection seam consumed by the render driver.
//!
//! Intersection testing, scene representation and acceleration structures
//! all live behind [`Tracer`]; this crate only generates rays and consumes
//! hit colors.

use prism_math::{DVec3, Ray};

/// Color type alias (RGB values typically 0-1)
pub type Color = DVec3;

/// Background color for rays that miss everything: black.
pub const BACKGROUND: Color = Color::ZERO;

/// Surface information for the nearest polygon hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Color of the hit surface.
    pub color: Color,
}

impl Hit {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

/// Trait for intersection engines.
///
/// `Ok(None)` is the designed miss path and is resolved to [`BACKGROUND`]
/// by the render driver, never treated as an error. An `Err` is fatal to
/// the render pass and propagated unmodified; there is no partial-result
/// contract for a render.
pub trait Tracer: Send + Sync {
    /// Intersect a ray against the scene, returning the nearest hit.
    fn trace(&self, ray: &Ray) -> anyhow::Result<Option<Hit>>;
}
