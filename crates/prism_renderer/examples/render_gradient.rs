//! Renders a direction-shaded gradient and saves it as a PNG.
//!
//! The tracer here is a stand-in that colors each ray by its direction, so
//! the example exercises the camera, scan and antialiasing paths without a
//! real intersection engine.
//!
//! Run with `RUST_LOG=debug` to see the per-row progress lines.

use anyhow::Result;
use prism_renderer::{render, Camera, DVec3, Hit, Pose, Ray, Screen, Tracer};

struct DirectionShade;

impl Tracer for DirectionShade {
    fn trace(&self, ray: &Ray) -> Result<Option<Hit>> {
        let d = ray.direction.normalize();
        // Map the unit direction into the RGB cube.
        let color = (DVec3::new(d.y, d.z, -d.x) + DVec3::ONE) * 0.5;
        Ok(Some(Hit::new(color)))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let pose = Pose::new(DVec3::ZERO, DVec3::X, 0.0)?;
    let screen = Screen::new(800, 600, 46.8)?;
    let mut camera = Camera::new(pose, screen);

    println!("{camera}");

    let start = std::time::Instant::now();
    let frame = render(&mut camera, &DirectionShade, 2)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "render.png";
    image::save_buffer(
        filename,
        &frame.to_rgba8(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
    )?;
    println!("Saved {} ({}x{})", filename, frame.width(), frame.height());

    Ok(())
}
