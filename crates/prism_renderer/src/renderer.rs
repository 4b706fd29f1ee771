//! Render driver: scan loop, trace delegation and antialiasing.
//!
//! Single-threaded and synchronous: one ray is fully resolved (traced and
//! written) before the next is generated. The scan cursor, the ray and the
//! pixel map are exclusively owned by one render pass.

use prism_math::Ray;
use thiserror::Error;

use crate::camera::{Camera, ConfigError};
use crate::pixmap::PixelMap;
use crate::scan::{ScanCursor, ScanStatus};
use crate::tracer::{Tracer, BACKGROUND};
use crate::viewport::ViewportBasis;

/// Errors that abort a render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failure from the external tracer, fatal to the pass and propagated
    /// unmodified; there is no partial-result contract.
    #[error("tracer failed: {0}")]
    Trace(#[source] anyhow::Error),
}

/// Render one frame.
///
/// Traces a primary ray per pixel of the `factor`-times supersampled grid,
/// resolves misses to the background color, then box-filters the result
/// back down to the camera's screen resolution. Returns the final image;
/// the caller owns it.
pub fn render(
    camera: &mut Camera,
    tracer: &dyn Tracer,
    factor: u32,
) -> Result<PixelMap, RenderError> {
    // Fail fast, before any allocation.
    if factor < 1 {
        return Err(ConfigError::Supersample(factor).into());
    }

    // Keep the camera's own cached basis in step with its configuration so
    // diagnostics after the pass describe what was rendered.
    if camera.is_dirty() {
        camera.rebuild();
    }

    let width = factor * camera.width();
    let height = factor * camera.height();

    // The supersampled pass goes through the same pure basis builder with
    // scaled screen dimensions; only the per-pixel steps shrink.
    let basis = ViewportBasis::build(
        camera.direction(),
        camera.roll_deg(),
        width,
        height,
        camera.hfov_deg(),
    );

    let mut image = PixelMap::new("render", width, height);
    image.reset_cursor();

    let mut cursor = ScanCursor::new(width, height);
    let mut ray = Ray::default();
    camera.init_ray(&mut ray);

    loop {
        let (x, y) = cursor.current();
        basis.update_ray_direction(&mut ray, x, y);

        let color = match tracer.trace(&ray).map_err(RenderError::Trace)? {
            Some(hit) => hit.color,
            None => BACKGROUND,
        };
        image.write(color, true);

        if cursor.row_complete() {
            log::debug!("finished scan row {y}");
        }
        if cursor.advance() == ScanStatus::Done {
            break;
        }
    }

    let image = image.downsample(factor);
    log::info!(
        "finished rendering {}x{} ({}x supersampled)",
        camera.width(),
        camera.height(),
        factor
    );

    Ok(image)
}
