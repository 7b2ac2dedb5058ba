//! Edge table and active edge set

use crate::edge::{polygon_edges, SlopedEdge};
use crate::rational::Rational;
use crate::vertex::Vertex;

/// Global edge table
///
/// Sloped edges sorted by `y_low`, then `x_at_y_low`. Edges are handed to
///   the active set in order through a cursor, so activation never removes
///   from the middle of the table.
#[derive(Debug, Default, Clone)]
pub struct EdgeTable {
    edges: Vec<SlopedEdge>,
    next: usize,
}

impl EdgeTable {
    /// Build the unsorted table from the closed polygon through `vertices`
    ///
    /// Horizontal edges are dropped
    pub fn new(vertices: &[Vertex]) -> Self {
        let edges = polygon_edges(vertices)
            .filter_map(|e| e.sloped())
            .collect();
        Self { edges, next: 0 }
    }
    /// Sort edges into scanline order
    pub fn sort(&mut self) {
        self.edges.sort_by(|a, b| a.table_order(b));
    }
    /// Number of edges retained, including those already activated
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    /// Edges not yet handed to the active set
    pub fn pending(&self) -> &[SlopedEdge] {
        &self.edges[self.next..]
    }
    /// All retained edges
    pub fn edges(&self) -> &[SlopedEdge] {
        &self.edges
    }
    /// First scanline crossed by any edge
    pub fn min_y(&self) -> Option<i64> {
        self.edges.iter().map(|e| e.y_low).min()
    }
    /// Scanline above the last crossed by any edge
    pub fn max_y(&self) -> Option<i64> {
        self.edges.iter().map(|e| e.y_high).max()
    }
    /// Take the pending edges starting at scanline `y`
    ///
    /// Requires the table to be sorted
    pub fn take_starting_at(&mut self, y: i64) -> &[SlopedEdge] {
        let start = self.next;
        while self.next < self.edges.len() && self.edges[self.next].y_low <= y {
            self.next += 1;
        }
        &self.edges[start..self.next]
    }
}

/// Sloped edge with its x intercept on the current scanline
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ActiveEdge {
    pub edge: SlopedEdge,
    pub x: Rational,
}

/// Edges crossing the current scanline
#[derive(Debug, Default, Clone)]
pub struct ActiveEdges {
    edges: Vec<ActiveEdge>,
}

impl ActiveEdges {
    pub fn new() -> Self {
        Self { edges: vec![] }
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    /// Add edges, intercept starting at `x_at_y_low`
    pub fn activate(&mut self, edges: &[SlopedEdge]) {
        self.edges.extend(edges.iter().map(|&edge| ActiveEdge { edge, x: edge.start() }));
    }
    /// Remove edges whose span ends at scanline `y`
    pub fn deactivate(&mut self, y: i64) {
        self.edges.retain(|a| a.edge.y_high > y);
    }
    /// Sort by current x intercept
    pub fn sort(&mut self) {
        self.edges.sort_by(|a, b| {
            a.x.cmp(&b.x)
                .then_with(|| a.edge.inverse_slope.cmp(&b.edge.inverse_slope))
        });
    }
    /// Move every intercept up one scanline
    pub fn advance(&mut self) {
        for a in self.edges.iter_mut() {
            a.x.advance(a.edge.inverse_slope);
        }
    }
    /// Current intercepts, in active set order
    pub fn intercepts(&self) -> impl Iterator<Item = Rational> + '_ {
        self.edges.iter().map(|a| a.x)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, ActiveEdge> {
        self.edges.iter()
    }
}
