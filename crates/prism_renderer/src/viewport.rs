//! Viewport basis: the vectors mapping a 2D pixel coordinate to a 3D ray
//! direction.
//!
//! [`ViewportBasis::build`] is a pure function of the camera direction, roll
//! angle and screen geometry, and is the single source of truth for the
//! projection. The camera rebuilds it when its configuration changes; the
//! render driver rebuilds it at supersampled dimensions for an antialiasing
//! pass.

use prism_math::{DQuat, DVec3, Ray};
use std::f64::consts::FRAC_PI_2;

/// Tolerance for the vX . direction orthogonality check. The axis is unit
/// length when checked, so this is a relative tolerance.
const ORTHO_TOLERANCE: f64 = 1e-14;

/// Below this horizontal magnitude the view direction counts as collinear
/// with world up and the horizontal-axis seed falls back to world +X.
const DEGENERATE_EPS: f64 = 1e-12;

/// Derived vectors defining the image plane rectangle.
///
/// `v_x` spans the full screen width, `v_y` the full height; `vd_x`/`vd_y`
/// are the per-pixel steps; `v_diag = v_x + v_y`; `v_bl` is the ray
/// direction (before adding the camera position) through the center of
/// pixel (0, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBasis {
    pub v_x: DVec3,
    pub v_y: DVec3,
    pub vd_x: DVec3,
    pub vd_y: DVec3,
    pub v_diag: DVec3,
    pub v_bl: DVec3,
}

impl ViewportBasis {
    /// Build the basis for a unit view direction, roll angle (degrees) and
    /// screen geometry. World up is +Z; the horizontal field of view is in
    /// degrees, converted at the trigonometric call site.
    ///
    /// The aspect ratio is derived from width/height at build time, never
    /// stored, so it cannot drift from the screen geometry.
    pub fn build(direction: DVec3, roll_deg: f64, width: u32, height: u32, hfov_deg: f64) -> Self {
        let aspect = width as f64 / height as f64;

        // Drop the world-up component of the view direction. Straight up or
        // down leaves no horizontal part; seed from world +X instead so the
        // result stays deterministic (pre-roll horizontal axis +Y).
        let mut seed = DVec3::new(direction.x, direction.y, 0.0);
        if seed.length_squared() < DEGENERATE_EPS * DEGENERATE_EPS {
            log::warn!(
                "view direction {direction} is collinear with world up, seeding horizontal axis from +X"
            );
            seed = DVec3::X;
        }

        // Rotate 90 degrees CCW about world up, then roll about the view
        // direction: the unit horizontal axis of the image plane.
        let unit_x = (DQuat::from_axis_angle(direction, roll_deg.to_radians())
            * (DQuat::from_rotation_z(FRAC_PI_2) * seed))
            .normalize();

        let skew = unit_x.dot(direction);
        if skew.abs() > ORTHO_TOLERANCE {
            log::warn!("horizontal axis not orthogonal to view direction: vX . dir = {skew:e}");
        }

        // |vX| = 2 tan(hfov/2) / sqrt(1 + 1/aspect^2), |vY| = |vX| / aspect
        let len_x =
            2.0 * (hfov_deg * 0.5).to_radians().tan() / (1.0 + 1.0 / (aspect * aspect)).sqrt();
        let v_x = unit_x * len_x;
        let v_y = direction.cross(v_x).normalize() * (len_x / aspect);

        let vd_x = v_x / width as f64;
        let vd_y = v_y / height as f64;

        let v_diag = v_x + v_y;
        let v_bl = direction - 0.5 * v_diag + 0.5 * vd_x + 0.5 * vd_y;

        Self {
            v_x,
            v_y,
            vd_x,
            vd_y,
            v_diag,
            v_bl,
        }
    }

    /// Ray direction through the center of pixel (x, y).
    ///
    /// Recomputed from the anchor on every call rather than accumulated
    /// across a scan line, so repeated calls with the same pixel are
    /// bit-identical and no drift builds up over a row.
    #[inline]
    pub fn ray_direction(&self, x: u32, y: u32) -> DVec3 {
        self.v_bl + self.vd_x * x as f64 + self.vd_y * y as f64
    }

    /// Rewrite the direction of `ray` in place for pixel (x, y).
    #[inline]
    pub fn update_ray_direction(&self, ray: &mut Ray, x: u32, y: u32) {
        ray.direction = self.ray_direction(x, y);
    }
}
