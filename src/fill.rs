//! Scanline polygon fill
//!
//! Data flow
//!
//! ```text
//! vertices
//!   EdgeTable::new()     -- horizontal edges dropped
//!   EdgeTable::sort()    -- y_low, then x_at_y_low
//! sweep_scanline()       -- once per y in [min y_low, max y_high)
//!   activate             -- edges with y_low == y
//!   deactivate           -- edges with y_high == y
//!   sort                 -- by current x intercept
//!   pair intercepts      -- even-odd rule, emits Spans
//!                           a pixel shared by two runs goes to the left one
//!   advance              -- x += inverse_slope, exact
//! ```
//!
//! Pixel ownership: intercepts are rounded to whole pixels by
//!   [`SpanRounding`], both ends of a span are filled. The top scanline of
//!   every edge is excluded, so a shared vertex is counted once and the
//!   apex of a polygon is never filled. Intercepts are kept as exact
//!   fractions ([`Rational`]), so rounding does not depend on edge length.

use crate::rational::Rational;
use crate::table::{ActiveEdges, EdgeTable};
use crate::vertex::Vertex;

use log::{debug, trace};

use std::convert::TryFrom;

/// Conversion of a pair of intercepts into a run of whole pixels
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SpanRounding {
    /// Round each intercept to the nearest pixel, halves up, and fill both
    ///   ends: `[floor(x0 + 0.5), floor(x1 + 0.5)]`
    Nearest,
    /// Fill pixels whose centre lies inside the run: `[ceil(x0), floor(x1)]`
    ///
    /// Runs narrower than a pixel may cover no centre and produce nothing
    PixelCenters,
}

impl Default for SpanRounding {
    fn default() -> SpanRounding {
        SpanRounding::Nearest
    }
}

impl SpanRounding {
    /// First and last pixel covered between `x0` and `x1`, `x0 <= x1`
    ///
    ///     use scanfill::{Rational, SpanRounding};
    ///
    ///     let (x0, x1) = (Rational::ratio(11, 2), Rational::ratio(13, 2));
    ///     assert_eq!(SpanRounding::Nearest.pixels(x0, x1), Some((6, 7)));
    ///     assert_eq!(SpanRounding::PixelCenters.pixels(x0, x1), Some((6, 6)));
    ///
    ///     let (x0, x1) = (Rational::ratio(26, 5), Rational::ratio(29, 5));
    ///     assert_eq!(SpanRounding::PixelCenters.pixels(x0, x1), None);
    ///
    pub fn pixels(self, x0: Rational, x1: Rational) -> Option<(i64, i64)> {
        let (a, b) = match self {
            SpanRounding::Nearest => (x0.round_half_up(), x1.round_half_up()),
            SpanRounding::PixelCenters => (x0.ceil(), x1.floor()),
        };
        if a > b {
            None
        } else {
            Some((saturate(a), saturate(b)))
        }
    }
}

/// Intercepts lie between edge endpoints, so rounding stays in range
fn saturate(v: i128) -> i64 {
    i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX })
}

/// Inside run of pixels on a single scanline, inclusive on both ends
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Span {
    pub y: i64,
    pub x_start: i64,
    pub x_end: i64,
}

impl Span {
    /// Number of pixels in the span, saturating at `u64::MAX`
    pub fn len(&self) -> u64 {
        let n = i128::from(self.x_end) - i128::from(self.x_start) + 1;
        u64::try_from(n).unwrap_or(u64::MAX)
    }
    /// x values of the pixels in the span
    pub fn xs(&self) -> std::ops::RangeInclusive<i64> {
        self.x_start..=self.x_end
    }
}

/// Progress of a single fill
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum FillState {
    /// Vertices received, no edges yet
    Unbuilt,
    /// Edge table built, horizontal edges removed
    EdgesBuilt,
    /// Edge table in scanline order
    Sorted,
    /// Next scanline to process
    Sweeping(i64),
    /// Every scanline processed
    Done,
}

/// Scanline fill of a single polygon
///
/// Each filler owns its edge table and active set and is consumed by the
///   sweep; nothing is shared between fills.
///
///     use scanfill::{ScanlineFiller, Span, Vertex};
///
///     let tri = [Vertex::new(3,3), Vertex::new(9,3), Vertex::new(6,9)];
///     let spans: Vec<Span> = ScanlineFiller::new(&tri).spans().collect();
///     assert_eq!(spans.len(), 6);
///     assert_eq!(spans[0], Span { y: 3, x_start: 3, x_end: 9 });
///     assert_eq!(spans[5], Span { y: 8, x_start: 6, x_end: 7 });
///
#[derive(Debug)]
pub struct ScanlineFiller<'a> {
    vertices: &'a [Vertex],
    rounding: SpanRounding,
    state: FillState,
    table: EdgeTable,
    active: ActiveEdges,
    y_end: i64,
}

impl<'a> ScanlineFiller<'a> {
    /// Create a filler for the closed polygon through `vertices`
    pub fn new(vertices: &'a [Vertex]) -> Self {
        Self {
            vertices,
            rounding: SpanRounding::default(),
            state: FillState::Unbuilt,
            table: EdgeTable::default(),
            active: ActiveEdges::new(),
            y_end: 0,
        }
    }
    /// Set the intercept rounding
    pub fn rounding(mut self, rounding: SpanRounding) -> Self {
        self.rounding = rounding;
        self
    }
    pub fn state(&self) -> FillState {
        self.state
    }
    /// Edge table, empty until edges are built
    pub fn edge_table(&self) -> &EdgeTable {
        &self.table
    }
    /// Build the edge table: `Unbuilt` to `EdgesBuilt`
    pub fn build_edges(&mut self) {
        if self.state != FillState::Unbuilt {
            return;
        }
        self.table = EdgeTable::new(self.vertices);
        debug!("BUILD EDGES: vertices {} edges {}", self.vertices.len(), self.table.len());
        self.state = FillState::EdgesBuilt;
    }
    /// Sort the edge table: `EdgesBuilt` to `Sorted`
    ///
    /// Builds the edge table first if needed
    pub fn sort_edges(&mut self) {
        self.build_edges();
        if self.state != FillState::EdgesBuilt {
            return;
        }
        self.table.sort();
        self.state = FillState::Sorted;
    }
    /// Process the next scanline, pushing its inside runs onto `spans`
    ///
    /// Earlier steps run first if they have not yet been done. Returns
    ///   false once every scanline has been processed; a processed scanline
    ///   may contribute no spans.
    pub fn sweep_scanline(&mut self, spans: &mut Vec<Span>) -> bool {
        self.sort_edges();
        let y = match self.state {
            FillState::Sorted => match (self.table.min_y(), self.table.max_y()) {
                (Some(y0), Some(y1)) => {
                    debug!("SWEEP: scanlines {} .. {}", y0, y1);
                    self.y_end = y1;
                    y0
                }
                _ => {
                    debug!("SWEEP: no sloped edges, nothing to fill");
                    self.state = FillState::Done;
                    return false;
                }
            },
            FillState::Sweeping(y) => y,
            _ => return false,
        };
        if y >= self.y_end {
            self.state = FillState::Done;
            return false;
        }

        self.active.activate(self.table.take_starting_at(y));
        self.active.deactivate(y);
        self.active.sort();

        {
            let mut xs = self.active.intercepts();
            let mut last_x: Option<i64> = None;
            while let (Some(x0), Some(x1)) = (xs.next(), xs.next()) {
                if let Some((x_start, x_end)) = self.rounding.pixels(x0, x1) {
                    // Runs meeting at a crossing may round onto the same pixel
                    let x_start = match last_x {
                        None => x_start,
                        Some(l) => match l.checked_add(1) {
                            Some(next) => x_start.max(next),
                            None => continue,
                        },
                    };
                    if x_start > x_end {
                        continue;
                    }
                    trace!("SWEEP: y {} span {} .. {} ({:.3} .. {:.3})",
                           y, x_start, x_end, x0.to_f64(), x1.to_f64());
                    spans.push(Span { y, x_start, x_end });
                    last_x = Some(x_end);
                }
            }
        }

        self.active.advance();
        self.state = FillState::Sweeping(y + 1);
        true
    }
    /// Iterate over all inside runs, scanline by scanline, left to right
    pub fn spans(self) -> Spans<'a> {
        Spans { filler: self, buf: vec![], pos: 0 }
    }
}

/// Iterator over the [`Span`]s of a fill
#[derive(Debug)]
pub struct Spans<'a> {
    filler: ScanlineFiller<'a>,
    buf: Vec<Span>,
    pos: usize,
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span;
    fn next(&mut self) -> Option<Span> {
        loop {
            if let Some(&span) = self.buf.get(self.pos) {
                self.pos += 1;
                return Some(span);
            }
            self.buf.clear();
            self.pos = 0;
            if !self.filler.sweep_scanline(&mut self.buf) {
                return None;
            }
        }
    }
}

/// Fill the polygon through `vertices`, calling `pixel_writer(x, y)` once
///   for every pixel inside it under the even-odd rule
///
/// Fewer than 3 vertices, or a polygon with no height, writes nothing
///
///     use scanfill::Vertex;
///
///     let tri = [Vertex::new(3,3), Vertex::new(9,3), Vertex::new(6,9)];
///     let mut n = 0;
///     scanfill::fill(&tri, |_x, _y| n += 1);
///     assert_eq!(n, 7 + 6 + 5 + 4 + 3 + 2);
///
pub fn fill<F>(vertices: &[Vertex], pixel_writer: F)
where
    F: FnMut(i64, i64),
{
    fill_with(vertices, SpanRounding::default(), pixel_writer)
}

/// [`fill`] with an explicit intercept rounding
pub fn fill_with<F>(vertices: &[Vertex], rounding: SpanRounding, mut pixel_writer: F)
where
    F: FnMut(i64, i64),
{
    for span in ScanlineFiller::new(vertices).rounding(rounding).spans() {
        for x in span.xs() {
            pixel_writer(x, span.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn poly(pts: &[(i64, i64)]) -> Vec<Vertex> {
        pts.iter().map(|&p| p.into()).collect()
    }

    fn row(spans: &[Span], y: i64) -> Vec<(i64, i64)> {
        spans.iter().filter(|s| s.y == y).map(|s| (s.x_start, s.x_end)).collect()
    }

    #[test]
    fn state_machine_steps() {
        let tri = poly(&[(3, 3), (9, 3), (6, 9)]);
        let mut f = ScanlineFiller::new(&tri);
        assert_eq!(f.state(), FillState::Unbuilt);
        f.build_edges();
        assert_eq!(f.state(), FillState::EdgesBuilt);
        assert_eq!(f.edge_table().len(), 2);
        f.sort_edges();
        assert_eq!(f.state(), FillState::Sorted);
        let mut spans = vec![];
        assert!(f.sweep_scanline(&mut spans));
        assert_eq!(f.state(), FillState::Sweeping(4));
        while f.sweep_scanline(&mut spans) {}
        assert_eq!(f.state(), FillState::Done);
        assert!(!f.sweep_scanline(&mut spans));
        assert_eq!(spans.len(), 6);
    }

    #[test]
    fn sweep_builds_and_sorts_on_demand() {
        let tri = poly(&[(3, 3), (9, 3), (6, 9)]);
        let mut f = ScanlineFiller::new(&tri);
        let mut spans = vec![];
        assert!(f.sweep_scanline(&mut spans));
        assert_eq!(spans, vec![Span { y: 3, x_start: 3, x_end: 9 }]);
    }

    #[test]
    fn degenerate_goes_straight_to_done() {
        let flat = poly(&[(0, 4), (5, 4), (9, 4)]);
        let mut f = ScanlineFiller::new(&flat);
        let mut spans = vec![];
        assert!(!f.sweep_scanline(&mut spans));
        assert_eq!(f.state(), FillState::Done);
        assert!(spans.is_empty());
    }

    #[test]
    fn triangle_rows() {
        let tri = poly(&[(3, 3), (9, 3), (6, 9)]);
        let spans: Vec<_> = ScanlineFiller::new(&tri).spans().collect();
        assert_eq!(row(&spans, 3), vec![(3, 9)]);
        assert_eq!(row(&spans, 4), vec![(4, 9)]);
        assert_eq!(row(&spans, 8), vec![(6, 7)]);
        assert!(row(&spans, 9).is_empty());
    }

    #[test]
    fn triangle_rows_pixel_centers() {
        let tri = poly(&[(3, 3), (9, 3), (6, 9)]);
        let spans: Vec<_> = ScanlineFiller::new(&tri)
            .rounding(SpanRounding::PixelCenters)
            .spans()
            .collect();
        assert_eq!(row(&spans, 3), vec![(3, 9)]);
        // 3.5 .. 8.5
        assert_eq!(row(&spans, 4), vec![(4, 8)]);
        // 5.5 .. 6.5
        assert_eq!(row(&spans, 8), vec![(6, 6)]);
    }

    #[test]
    fn local_minimum_fills_single_pixel() {
        // V shape, bottom vertex shared by two edges
        let v = poly(&[(0, 4), (4, 0), (8, 4)]);
        let spans: Vec<_> = ScanlineFiller::new(&v).spans().collect();
        assert_eq!(row(&spans, 0), vec![(4, 4)]);
        assert_eq!(row(&spans, 3), vec![(1, 7)]);
        assert!(row(&spans, 4).is_empty());
    }

    #[test]
    fn pass_through_vertex_counted_once() {
        // Vertex (0,4) ends one edge and starts the next on the left side
        let p = poly(&[(2, 0), (6, 0), (6, 8), (2, 8), (0, 4)]);
        let spans: Vec<_> = ScanlineFiller::new(&p).spans().collect();
        assert_eq!(row(&spans, 4), vec![(0, 6)]);
        assert_eq!(row(&spans, 2), vec![(1, 6)]);
        assert_eq!(row(&spans, 6), vec![(1, 6)]);
    }

    #[test]
    fn concave_notch_splits_rows() {
        // U shape: notch from the top down to y = 4
        let u = poly(&[(0, 0), (9, 0), (9, 8), (6, 8), (6, 4), (3, 4), (3, 8), (0, 8)]);
        let spans: Vec<_> = ScanlineFiller::new(&u).spans().collect();
        assert_eq!(row(&spans, 2), vec![(0, 9)]);
        assert_eq!(row(&spans, 6), vec![(0, 3), (6, 9)]);
    }

    #[test]
    fn fill_matches_spans() {
        let tri = poly(&[(3, 3), (9, 3), (6, 9)]);
        let mut pixels = BTreeSet::new();
        fill(&tri, |x, y| {
            assert!(pixels.insert((x, y)), "pixel written twice");
        });
        let from_spans: u64 = ScanlineFiller::new(&tri).spans().map(|s| s.len()).sum();
        assert_eq!(pixels.len() as u64, from_spans);
        assert!(pixels.contains(&(6, 8)));
        assert!(!pixels.contains(&(6, 9)));
    }

    #[test]
    fn crossing_pixel_written_once() {
        let bowtie = poly(&[(0, 0), (8, 8), (8, 0), (0, 8)]);
        let spans: Vec<_> = ScanlineFiller::new(&bowtie).spans().collect();
        assert_eq!(row(&spans, 2), vec![(0, 2), (6, 8)]);
        assert_eq!(row(&spans, 4), vec![(0, 4), (5, 8)]);
    }

    #[test]
    fn too_few_vertices() {
        let mut n = 0;
        fill(&poly(&[(0, 0), (5, 5)]), |_, _| n += 1);
        fill(&[], |_, _| n += 1);
        assert_eq!(n, 0);
    }

    #[test]
    fn rounding_is_exact_at_halves() {
        assert_eq!(SpanRounding::Nearest.pixels(Rational::ratio(1, 2), Rational::new(3, 0, 1)),
                   Some((1, 3)));
        let just_below = Rational::new(2, u64::MAX - 1, u64::MAX);
        assert_eq!(SpanRounding::PixelCenters.pixels(Rational::ratio(-2, 1), just_below),
                   Some((-2, 2)));
    }

    #[test]
    fn nearest_rounds_halves_up_for_negatives() {
        let (x0, x1) = (Rational::ratio(-5, 2), Rational::ratio(-1, 2));
        assert_eq!(SpanRounding::Nearest.pixels(x0, x1), Some((-2, 0)));
    }

    #[test]
    fn long_edge_rounds_exactly() {
        // Left edge x = 100000 + y / 200000 is exactly 100000.5 at y = 100000
        let p = poly(&[(100_000, 0), (100_001, 200_000), (100_010, 200_000), (100_010, 0)]);
        let spans: Vec<_> = ScanlineFiller::new(&p).spans().collect();
        assert_eq!(spans.len(), 200_000);
        assert_eq!(row(&spans, 99_999), vec![(100_000, 100_010)]);
        assert_eq!(row(&spans, 100_000), vec![(100_001, 100_010)]);
        assert_eq!(row(&spans, 199_999), vec![(100_001, 100_010)]);

        let spans: Vec<_> = ScanlineFiller::new(&p)
            .rounding(SpanRounding::PixelCenters)
            .spans()
            .collect();
        assert_eq!(row(&spans, 0), vec![(100_000, 100_010)]);
        assert_eq!(row(&spans, 1), vec![(100_001, 100_010)]);
    }

    #[test]
    fn extreme_coordinates() {
        let tri = poly(&[(i64::MIN, 0), (i64::MAX, 0), (0, 2)]);
        let spans: Vec<_> = ScanlineFiller::new(&tri).spans().collect();
        assert_eq!(row(&spans, 0), vec![(i64::MIN, i64::MAX)]);
        // Right intercept is 2^62 - 1/2
        assert_eq!(row(&spans, 1), vec![(-(1 << 62), 1 << 62)]);
        assert_eq!(spans[0].len(), u64::MAX);
        assert_eq!(spans[1].len(), (1 << 63) + 1);

        let mut pixels = vec![];
        fill(&poly(&[(i64::MIN, 0), (i64::MAX, 1), (0, 1)]), |x, y| pixels.push((x, y)));
        assert_eq!(pixels, vec![(i64::MIN, 0)]);
    }
}
