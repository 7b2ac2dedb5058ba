//! Colors

/// Color as Red, Green and Blue
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Gray level `g` in all three components
    pub fn gray(g: u8) -> Self {
        Self::new(g, g, g)
    }
    /// Create from components in [0,1]; values outside are clamped
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(cu8(r), cu8(g), cu8(b))
    }
    /// Components as bytes, `[r, g, b]`
    pub fn bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Convert an f64 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f64) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}
