//! Scanline polygon fill
//!
//! Converts a polygon, given as an ordered list of integer vertices, into
//!   the set of pixels covering its interior under the even-odd rule. Pixels
//!   are emitted one at a time through a callback or a [`PixelSurface`].
//!
//! How does this work
//!    ras = Rasterizer::new()
//!    ras.draw_polygon(vertices, canvas)
//!      fill()
//!        ScanlineFiller::new()
//!          build_edges()    -- 'BUILD EDGES'
//!          sort_edges()
//!          sweep_scanline() -- 'SWEEP' once per scanline
//!            activate / deactivate / sort / pair / advance
//!        canvas.set_pixel() -- once per inside pixel
//!
//! Little Black Triangle
//!
//!     use scanfill::{Canvas, Rasterizer, Vertex};
//!
//!     let mut canvas = Canvas::new(100, 100).unwrap();
//!     let tri = [Vertex::new(10,10), Vertex::new(50,90), Vertex::new(90,10)];
//!     Rasterizer::new().draw_polygon(&tri, &mut canvas);
//!     assert_eq!(canvas.to_ascii().lines().count(), 100);
//!

pub mod error;
pub mod vertex;
pub mod rational;
pub mod edge;
pub mod table;
pub mod fill;
pub mod color;
pub mod buffer;
pub mod canvas;
pub mod raster;
pub mod ppm;
pub mod logging;

pub use error::*;
pub use vertex::*;
pub use rational::*;
pub use edge::*;
pub use table::*;
pub use fill::*;
pub use color::*;
pub use buffer::*;
pub use canvas::*;
pub use raster::*;
