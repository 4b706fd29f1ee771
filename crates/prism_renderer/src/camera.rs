//! Camera pose and screen configuration.
//!
//! Setters only mutate configuration and mark the derived viewport basis
//! dirty; [`Camera::rebuild`] recomputes it explicitly, and [`Camera::basis`]
//! and the render driver rebuild lazily. All angles are degrees, converted
//! with `to_radians` at trigonometric call sites.

use std::fmt;

use prism_math::{DVec3, Ray};
use thiserror::Error;

use crate::viewport::ViewportBasis;

/// Errors for invalid camera or render configuration.
///
/// A rejected setter leaves the prior valid state untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("screen resolution {width}x{height} must be at least 1x1")]
    Resolution { width: u32, height: u32 },

    #[error("horizontal field of view {0} degrees must lie strictly between 0 and 180")]
    FieldOfView(f64),

    #[error("view direction must have nonzero length")]
    Direction,

    #[error("supersampling factor {0} must be at least 1")]
    Supersample(u32),
}

/// Camera pose: position, unit view direction and roll angle.
///
/// The direction is normalized on construction and never stored
/// un-normalized; a zero-length direction is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    position: DVec3,
    direction: DVec3,
    roll_deg: f64,
}

impl Pose {
    /// Create a pose. Position and roll are stored verbatim; the direction
    /// is normalized before storing.
    pub fn new(position: DVec3, direction: DVec3, roll_deg: f64) -> Result<Self, ConfigError> {
        let direction = direction.try_normalize().ok_or(ConfigError::Direction)?;
        Ok(Self {
            position,
            direction,
            roll_deg,
        })
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Unit view direction.
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    pub fn roll_deg(&self) -> f64 {
        self.roll_deg
    }
}

/// Virtual screen geometry: resolution and horizontal field of view.
///
/// The aspect ratio is always derived from width/height, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    width: u32,
    height: u32,
    hfov_deg: f64,
}

impl Screen {
    /// Create a screen. Width and height must be at least 1 and the field
    /// of view strictly inside (0, 180) degrees.
    pub fn new(width: u32, height: u32, hfov_deg: f64) -> Result<Self, ConfigError> {
        if width < 1 || height < 1 {
            return Err(ConfigError::Resolution { width, height });
        }
        if !(hfov_deg > 0.0 && hfov_deg < 180.0) {
            return Err(ConfigError::FieldOfView(hfov_deg));
        }
        Ok(Self {
            width,
            height,
            hfov_deg,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn hfov_deg(&self) -> f64 {
        self.hfov_deg
    }

    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Camera: pose + screen plus the cached viewport basis derived from them.
#[derive(Debug, Clone)]
pub struct Camera {
    pose: Pose,
    screen: Screen,
    basis: ViewportBasis,
    dirty: bool,
}

impl Camera {
    /// Create a camera from an already-validated pose and screen; the
    /// viewport basis is built once up front.
    pub fn new(pose: Pose, screen: Screen) -> Self {
        let basis = ViewportBasis::build(
            pose.direction,
            pose.roll_deg,
            screen.width,
            screen.height,
            screen.hfov_deg,
        );
        Self {
            pose,
            screen,
            basis,
            dirty: false,
        }
    }

    /// Replace the pose. The direction is normalized before storing; on
    /// error the prior pose is retained. Marks the basis dirty.
    pub fn set_pose(
        &mut self,
        position: DVec3,
        direction: DVec3,
        roll_deg: f64,
    ) -> Result<(), ConfigError> {
        self.pose = Pose::new(position, direction, roll_deg)?;
        self.dirty = true;
        Ok(())
    }

    /// Replace the screen geometry; on error the prior screen is retained.
    /// Marks the basis dirty.
    pub fn set_screen(&mut self, width: u32, height: u32, hfov_deg: f64) -> Result<(), ConfigError> {
        self.screen = Screen::new(width, height, hfov_deg)?;
        self.dirty = true;
        Ok(())
    }

    /// Recompute the viewport basis from the current pose and screen.
    ///
    /// This is the only place the camera's cached basis is written, so two
    /// rebuilds from identical configuration yield identical vectors.
    pub fn rebuild(&mut self) {
        self.basis = ViewportBasis::build(
            self.pose.direction,
            self.pose.roll_deg,
            self.screen.width,
            self.screen.height,
            self.screen.hfov_deg,
        );
        self.dirty = false;
    }

    /// Whether the configuration changed since the basis was last built.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The viewport basis, rebuilt first if the configuration changed.
    pub fn basis(&mut self) -> ViewportBasis {
        if self.dirty {
            self.rebuild();
        }
        self.basis
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn position(&self) -> DVec3 {
        self.pose.position
    }

    pub fn direction(&self) -> DVec3 {
        self.pose.direction
    }

    pub fn roll_deg(&self) -> f64 {
        self.pose.roll_deg
    }

    pub fn width(&self) -> u32 {
        self.screen.width
    }

    pub fn height(&self) -> u32 {
        self.screen.height
    }

    pub fn hfov_deg(&self) -> f64 {
        self.screen.hfov_deg
    }

    /// Set the ray origin to the camera position. Called once per render
    /// pass, before the scan loop begins.
    pub fn init_ray(&self, ray: &mut Ray) {
        ray.origin = self.pose.position;
    }
}

impl Default for Camera {
    fn default() -> Self {
        // Origin, looking along +X, level, 800x600 at 46.8 degrees.
        let pose = Pose {
            position: DVec3::ZERO,
            direction: DVec3::X,
            roll_deg: 0.0,
        };
        let screen = Screen {
            width: 800,
            height: 600,
            hfov_deg: 46.8,
        };
        Self::new(pose, screen)
    }
}

impl fmt::Display for Camera {
    /// Human-readable dump of pose, screen geometry and the last-built
    /// basis vectors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Camera:")?;
        writeln!(f, "  position:  {}", self.pose.position)?;
        writeln!(f, "  direction: {}", self.pose.direction)?;
        writeln!(f, "  roll:      {} deg", self.pose.roll_deg)?;
        writeln!(
            f,
            "  screen:    {} x {} ({} : 1)",
            self.screen.width,
            self.screen.height,
            self.screen.aspect()
        )?;
        writeln!(f, "  hfov:      {} deg", self.screen.hfov_deg)?;
        writeln!(f, "  vX:    {}", self.basis.v_x)?;
        writeln!(f, "  vY:    {}", self.basis.v_y)?;
        writeln!(f, "  vDiag: {}", self.basis.v_diag)?;
        write!(f, "  vBL:   {}", self.basis.v_bl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_normalizes_direction() {
        let pose = Pose::new(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0), 0.0).unwrap();
        assert_eq!(pose.direction(), DVec3::X);
    }

    #[test]
    fn test_pose_rejects_zero_direction() {
        assert_eq!(
            Pose::new(DVec3::ZERO, DVec3::ZERO, 0.0),
            Err(ConfigError::Direction)
        );
    }

    #[test]
    fn test_screen_validation() {
        assert!(Screen::new(1, 1, 90.0).is_ok());
        assert!(matches!(
            Screen::new(0, 600, 90.0),
            Err(ConfigError::Resolution { .. })
        ));
        assert!(matches!(
            Screen::new(800, 0, 90.0),
            Err(ConfigError::Resolution { .. })
        ));
        assert!(matches!(
            Screen::new(800, 600, 0.0),
            Err(ConfigError::FieldOfView(_))
        ));
        assert!(matches!(
            Screen::new(800, 600, 180.0),
            Err(ConfigError::FieldOfView(_))
        ));
    }

    #[test]
    fn test_rejected_setter_retains_prior_state() {
        let mut camera = Camera::default();

        assert!(camera.set_screen(0, 0, 90.0).is_err());
        assert_eq!(camera.width(), 800);
        assert_eq!(camera.height(), 600);
        assert!(!camera.is_dirty());

        assert!(camera.set_pose(DVec3::ONE, DVec3::ZERO, 0.0).is_err());
        assert_eq!(camera.position(), DVec3::ZERO);
        assert_eq!(camera.direction(), DVec3::X);
    }

    #[test]
    fn test_setters_defer_rebuild_until_requested() {
        let mut camera = Camera::default();
        let before = camera.basis();

        camera.set_pose(DVec3::ZERO, DVec3::Y, 0.0).unwrap();
        camera.set_screen(400, 300, 60.0).unwrap();
        assert!(camera.is_dirty());

        // Both changes are paid for by a single rebuild.
        let after = camera.basis();
        assert!(!camera.is_dirty());
        assert_ne!(before, after);
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let mut camera = Camera::default();
        camera
            .set_pose(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.5, -1.0, 0.25), 12.0)
            .unwrap();
        camera.rebuild();
        let first = camera.basis();
        camera.rebuild();
        assert_eq!(camera.basis(), first);
    }

    #[test]
    fn test_init_ray_sets_origin_only() {
        let mut camera = Camera::default();
        camera
            .set_pose(DVec3::new(4.0, 5.0, 6.0), DVec3::X, 0.0)
            .unwrap();

        let mut ray = Ray::new(DVec3::ZERO, DVec3::Y);
        camera.init_ray(&mut ray);
        assert_eq!(ray.origin, DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(ray.direction, DVec3::Y);
    }

    #[test]
    fn test_display_dump_mentions_geometry() {
        let camera = Camera::default();
        let dump = camera.to_string();
        assert!(dump.contains("800 x 600"));
        assert!(dump.contains("vX:"));
        assert!(dump.contains("vBL:"));
    }
}
