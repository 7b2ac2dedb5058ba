//! Polygon drawing onto a surface

use crate::canvas::PixelSurface;
use crate::error::Result;
use crate::fill::{fill_with, SpanRounding};
use crate::vertex::{vertices_from_coords, Vertex};

use log::debug;

/// Rasterizer settings
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RasterizerConfig {
    /// Conversion of edge intercepts to whole pixels
    pub rounding: SpanRounding,
}

/// Draws filled polygons using only single pixel writes
///
/// Holds configuration only; every polygon is filled independently, so a
///   `Rasterizer` can be shared between threads.
///
///     use scanfill::{Canvas, Rasterizer, Rgb8, Vertex};
///
///     let mut canvas = Canvas::new(12, 12).unwrap();
///     let ras = Rasterizer::new();
///     ras.draw_polygon(&[Vertex::new(3,3), Vertex::new(9,3), Vertex::new(6,9)], &mut canvas);
///     assert_eq!(canvas.get(6, 8), Some(Rgb8::black()));
///     assert_eq!(canvas.get(6, 9), Some(Rgb8::white()));
///
#[derive(Debug, Default, Copy, Clone)]
pub struct Rasterizer {
    config: RasterizerConfig,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: RasterizerConfig) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &RasterizerConfig {
        &self.config
    }
    /// Fill the closed polygon through `vertices` onto `surface`
    ///
    /// Polygons with fewer than 3 vertices or no height draw nothing
    pub fn draw_polygon<S: PixelSurface>(&self, vertices: &[Vertex], surface: &mut S) {
        let mut n = 0usize;
        fill_with(vertices, self.config.rounding, |x, y| {
            surface.set_pixel(x, y);
            n += 1;
        });
        debug!("DRAW_POLYGON: vertices {} pixels {}", vertices.len(), n);
    }
    /// Fill a polygon given as separate x and y coordinate arrays
    ///
    /// Fails if the arrays differ in length; nothing is drawn in that case
    pub fn draw_polygon_coords<S: PixelSurface>(&self, xs: &[i64], ys: &[i64], surface: &mut S) -> Result<()> {
        let vertices = vertices_from_coords(xs, ys)?;
        self.draw_polygon(&vertices, surface);
        Ok(())
    }
}
