//! Polygon edges

use crate::rational::Rational;
use crate::vertex::Vertex;

use std::cmp::Ordering;

/// Edge between two consecutive polygon vertices
///
/// Horizontal edges carry no slope and never cross a scanline, so they are
///   kept apart from sloped edges and never enter the edge table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Edge {
    /// Both endpoints share the same `y`
    Horizontal,
    /// Edge spanning at least one scanline
    Sloped(SlopedEdge),
}

impl Edge {
    /// Create an edge from `a` to `b`
    ///
    ///     use scanfill::{Edge, Rational, Vertex};
    ///
    ///     let e = Edge::new(Vertex::new(6, 9), Vertex::new(3, 3));
    ///     let s = e.sloped().unwrap();
    ///     assert_eq!((s.y_low, s.y_high), (3, 9));
    ///     assert_eq!(s.x_at_y_low, 3);
    ///     assert_eq!(s.inverse_slope, Rational::ratio(1, 2));
    ///
    ///     let h = Edge::new(Vertex::new(3, 3), Vertex::new(9, 3));
    ///     assert!(h.sloped().is_none());
    ///
    pub fn new(a: Vertex, b: Vertex) -> Self {
        if a.y == b.y {
            return Edge::Horizontal;
        }
        let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
        // Widened: differences of i64 coordinates need 65 bits
        let dx = i128::from(hi.x) - i128::from(lo.x);
        let dy = (i128::from(hi.y) - i128::from(lo.y)) as u64;
        Edge::Sloped(SlopedEdge {
            y_low: lo.y,
            y_high: hi.y,
            x_at_y_low: lo.x,
            inverse_slope: Rational::ratio(dx, dy),
        })
    }
    /// Sloped part of the edge, `None` for horizontal edges
    pub fn sloped(&self) -> Option<SlopedEdge> {
        match *self {
            Edge::Sloped(s) => Some(s),
            Edge::Horizontal => None,
        }
    }
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Edge::Horizontal)
    }
}

/// Non-horizontal edge with `y_low < y_high`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlopedEdge {
    /// Lower y value of the two endpoints; first scanline crossed
    pub y_low: i64,
    /// Upper y value of the two endpoints; excluded from the edge
    pub y_high: i64,
    /// x value of the endpoint at `y_low`
    pub x_at_y_low: i64,
    /// dx/dy, added to the x intercept once per scanline; its denominator
    ///   is the edge height
    pub inverse_slope: Rational,
}

impl SlopedEdge {
    /// Number of scanlines crossed, `y_high - y_low`
    pub fn height(&self) -> u64 {
        self.inverse_slope.den()
    }
    /// Does the edge cross scanline `y`
    pub fn spans(&self, y: i64) -> bool {
        self.y_low <= y && y < self.y_high
    }
    /// x intercept on scanline `y_low`, over the edge's denominator
    pub fn start(&self) -> Rational {
        Rational::new(i128::from(self.x_at_y_low), 0, self.height())
    }
    /// Edge table order: `y_low`, then `x_at_y_low`, then `inverse_slope`
    pub fn table_order(&self, other: &SlopedEdge) -> Ordering {
        self.y_low.cmp(&other.y_low)
            .then_with(|| self.x_at_y_low.cmp(&other.x_at_y_low))
            .then_with(|| self.inverse_slope.cmp(&other.inverse_slope))
    }
}

/// Edges of the closed polygon through `vertices`, including the closing
///   edge from the last vertex back to the first
///
/// Fewer than 3 vertices do not make a polygon and produce no edges
pub fn polygon_edges(vertices: &[Vertex]) -> impl Iterator<Item = Edge> + '_ {
    let n = if vertices.len() < 3 { 0 } else { vertices.len() };
    (0..n).map(move |i| Edge::new(vertices[i], vertices[(i + 1) % n]))
}
