//! Polygon vertices

use crate::error::{Error, Result};

/// Integer pixel coordinate of a polygon corner
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    /// Create a new vertex at (`x`,`y`)
    pub fn new(x: i64, y: i64) -> Self {
        Vertex { x, y }
    }
}

impl From<(i64, i64)> for Vertex {
    fn from((x, y): (i64, i64)) -> Self {
        Vertex::new(x, y)
    }
}

/// Zip separate x and y coordinate arrays into vertices
///
/// Both arrays must have the same length
///
///     use scanfill::vertices_from_coords;
///
///     let v = vertices_from_coords(&[3, 9, 6], &[3, 3, 9]).unwrap();
///     assert_eq!(v.len(), 3);
///     assert_eq!((v[2].x, v[2].y), (6, 9));
///
///     assert!(vertices_from_coords(&[1, 2], &[1]).is_err());
///
pub fn vertices_from_coords(xs: &[i64], ys: &[i64]) -> Result<Vec<Vertex>> {
    if xs.len() != ys.len() {
        return Err(Error::CoordinateMismatch { xs: xs.len(), ys: ys.len() });
    }
    Ok(xs.iter().zip(ys.iter()).map(|(&x, &y)| Vertex::new(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tuple() {
        assert_eq!(Vertex::from((4, -2)), Vertex::new(4, -2));
    }

    #[test]
    fn mismatched_coordinates() {
        match vertices_from_coords(&[0, 1, 2], &[0, 1]) {
            Err(Error::CoordinateMismatch { xs, ys }) => assert_eq!((xs, ys), (3, 2)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_coordinates() {
        assert!(vertices_from_coords(&[], &[]).unwrap().is_empty());
    }
}
