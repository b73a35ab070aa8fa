//! Frame rendering: parallel pixel dispatch and image export.

use crate::tonemap::{fast_gamma, ToneMapper};
use crate::{Camera, Color, Scene, ShadingMode};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::path::Path;

/// Output resolution and per-frame shading options.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub shading_mode: ShadingMode,
    pub tone_mapper: ToneMapper,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            shading_mode: ShadingMode::BlinnPhong,
            tone_mapper: ToneMapper::Reinhard,
        }
    }
}

/// Failure while writing a rendered frame to disk.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

/// A linear-RGB image stored in row-major order.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Quantize to 8-bit RGB, clamping each channel to [0, 1] first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| {
                let clamped = color.clamp(Color::ZERO, Color::ONE);
                [
                    (clamped.x * 255.0) as u8,
                    (clamped.y * 255.0) as u8,
                    (clamped.z * 255.0) as u8,
                ]
            })
            .collect()
    }

    /// Encode the buffer as a PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let data = self.to_rgb8();
        image::save_buffer(
            path,
            &data,
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }
}

/// Render the scene into a new frame buffer.
///
/// Rows are distributed across the rayon thread pool; each row owns a
/// cheap RNG for area-light sampling, so rows are independent and the
/// scene is only read.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> FrameBuffer {
    let start = std::time::Instant::now();
    let mut frame = FrameBuffer::new(config.width, config.height);
    let width = config.width as usize;

    log::debug!(
        "scene: {} primitives, {} lights",
        scene.primitive_count(),
        scene.light_count()
    );

    frame
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let mut rng = SmallRng::from_entropy();
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = camera.ray_at_pixel(x as u32, y as u32);
                let radiance = scene.ray_cast(&ray, 0, config.shading_mode, &mut rng);
                *pixel = fast_gamma(config.tone_mapper.apply(radiance));
            }
        });

    log::info!(
        "rendered {}x{} in {:.2?}",
        config.width,
        config.height,
        start.elapsed()
    );

    frame
}
