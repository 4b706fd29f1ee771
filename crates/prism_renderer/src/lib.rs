//! Prism camera and render driver - CPU viewport subsystem
//!
//! Turns a camera pose (position, view direction, roll angle) and a virtual
//! screen (resolution, horizontal field of view) into a dense grid of
//! primary rays, drives the per-pixel scan, and composes the final image
//! including a supersampling antialiasing pass.
//!
//! Intersection testing lives entirely behind the [`Tracer`] seam; the
//! output is an in-memory [`PixelMap`] owned by the caller.

mod camera;
mod pixmap;
mod renderer;
mod scan;
mod tracer;
mod viewport;

pub use camera::{Camera, ConfigError, Pose, Screen};
pub use pixmap::PixelMap;
pub use renderer::{render, RenderError};
pub use scan::{ScanCursor, ScanStatus};
pub use tracer::{Color, Hit, Tracer, BACKGROUND};
pub use viewport::ViewportBasis;

/// Re-export common math types from prism_math
pub use prism_math::{DQuat, DVec3, Ray};
