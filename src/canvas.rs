//! Drawing surfaces

use crate::buffer::RenderingBuffer;
use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::ppm;

use std::convert::TryFrom;
use std::path::Path;

/// Surface receiving individual pixel writes
///
/// `set_pixel` is expected to be cheap; it is called once per filled pixel.
pub trait PixelSurface {
    /// Mark pixel (`x`,`y`)
    fn set_pixel(&mut self, x: i64, y: i64);
}

/// RGB image with a current drawing color
///
/// Pixels written outside the canvas are ignored
///
///     use scanfill::{Canvas, PixelSurface, Rgb8};
///
///     let mut canvas = Canvas::new(4, 3).unwrap();
///     canvas.set_color(Rgb8::new(255, 0, 0));
///     canvas.set_pixel(1, 2);
///     canvas.set_pixel(-1, 2); // Ignored, outside of range
///     assert_eq!(canvas.get(1, 2), Some(Rgb8::new(255, 0, 0)));
///     assert_eq!(canvas.get(0, 0), Some(Rgb8::white()));
///     assert_eq!(canvas.get(4, 0), None);
///
#[derive(Debug, Clone)]
pub struct Canvas {
    rbuf: RenderingBuffer,
    color: Rgb8,
    background: Rgb8,
}

impl Canvas {
    /// Create a white canvas of `width` x `height`, drawing in black
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let mut canvas = Canvas {
            rbuf: RenderingBuffer::new(width, height, 3),
            color: Rgb8::black(),
            background: Rgb8::white(),
        };
        canvas.clear();
        Ok(canvas)
    }
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Color used by subsequent pixel writes
    pub fn set_color(&mut self, color: Rgb8) {
        self.color = color;
    }
    pub fn color(&self) -> Rgb8 {
        self.color
    }
    /// Color used by [`clear`](Canvas::clear)
    pub fn set_background(&mut self, color: Rgb8) {
        self.background = color;
    }
    /// Set every pixel to the background color
    pub fn clear(&mut self) {
        self.rbuf.fill(&self.background.bytes());
    }
    /// Color at (`x`,`y`), `None` outside the canvas
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb8> {
        if !self.rbuf.contains(x, y) {
            return None;
        }
        let px = &self.rbuf[(x, y)];
        Some(Rgb8::new(px[0], px[1], px[2]))
    }
    /// Number of pixels with color `c`
    pub fn count(&self, c: Rgb8) -> usize {
        self.rbuf.data.chunks(3).filter(|px| *px == c.bytes()).count()
    }
    /// Raw RGB data, row major
    pub fn as_bytes(&self) -> &[u8] {
        &self.rbuf.data
    }
    /// One text line per row, `.` for background and `#` for anything else
    pub fn to_ascii(&self) -> String {
        let bg = self.background.bytes();
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0 .. self.height() {
            for px in self.rbuf.row(y).chunks(3) {
                out.push(if px == bg { '.' } else { '#' });
            }
            out.push('\n');
        }
        out
    }
    /// Save the canvas; format chosen by file extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        ppm::write_file(self.as_bytes(), self.width(), self.height(), filename)
    }
}

impl PixelSurface for Canvas {
    fn set_pixel(&mut self, x: i64, y: i64) {
        let (x, y) = match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) if self.rbuf.contains(x, y) => (x, y),
            _ => return,
        };
        self.rbuf[(x, y)].copy_from_slice(&self.color.bytes());
    }
}
