//! Domain boundaries and the size field.
//!
//! A [`Domain`] couples a set of closed polygonal boundary loops with a
//! [`SizeField`]: a scalar function of position giving the desired local
//! edge length. The front is seeded from the loops and sized by the field;
//! the domain itself is never mutated by the front.
//!
//! # Example
//!
//! ```
//! use frontline::domain::{BoundaryLoop, Domain};
//! use nalgebra::Point2;
//!
//! let outer = BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 10.0, 10.0, 1);
//! let domain = Domain::new(|_p: &Point2<f64>| 2.0).with_loop(outer);
//!
//! assert_eq!(domain.size_function(&Point2::new(5.0, 5.0)), 2.0);
//! ```

use nalgebra::Point2;

/// A scalar field of desired local edge length.
///
/// Implementations must return strictly positive values; the refinement
/// algorithm treats non-positive samples as a contract violation.
pub trait SizeField {
    /// Sample the field at a point.
    fn size_at(&self, p: &Point2<f64>) -> f64;
}

impl<F> SizeField for F
where
    F: Fn(&Point2<f64>) -> f64,
{
    fn size_at(&self, p: &Point2<f64>) -> f64 {
        self(p)
    }
}

/// A closed polygonal boundary loop.
///
/// The loop is implicitly closed: edge `i` runs from position `i` to
/// position `(i + 1) % len`, carrying marker `i`. Outer boundaries must be
/// wound counter-clockwise; hole loops clockwise, so that the meshable
/// region always lies to the left of every edge.
#[derive(Debug, Clone)]
pub struct BoundaryLoop {
    positions: Vec<Point2<f64>>,
    markers: Vec<i32>,
}

impl BoundaryLoop {
    /// Create a loop with the same marker on every edge.
    pub fn new(positions: Vec<Point2<f64>>, marker: i32) -> Self {
        let markers = vec![marker; positions.len()];
        Self { positions, markers }
    }

    /// Create a loop with one marker per edge.
    ///
    /// `markers` must have the same length as `positions`.
    pub fn with_markers(positions: Vec<Point2<f64>>, markers: Vec<i32>) -> Self {
        debug_assert_eq!(positions.len(), markers.len());
        Self { positions, markers }
    }

    /// Create a counter-clockwise axis-aligned rectangle loop.
    pub fn rectangle(origin: Point2<f64>, width: f64, height: f64, marker: i32) -> Self {
        Self::new(
            vec![
                origin,
                Point2::new(origin.x + width, origin.y),
                Point2::new(origin.x + width, origin.y + height),
                Point2::new(origin.x, origin.y + height),
            ],
            marker,
        )
    }

    /// This loop with reversed winding (e.g. to turn an outer loop into a
    /// hole loop).
    pub fn reversed(&self) -> Self {
        let mut positions = self.positions.clone();
        positions.reverse();
        let mut markers = self.markers.clone();
        markers.reverse();
        Self { positions, markers }
    }

    /// The loop's vertex positions in order.
    #[inline]
    pub fn positions(&self) -> &[Point2<f64>] {
        &self.positions
    }

    /// Marker of edge `i` (from position `i` to position `i + 1`).
    #[inline]
    pub fn marker(&self, i: usize) -> i32 {
        self.markers[i]
    }

    /// Number of vertices (and edges) in the loop.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the loop has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A meshing domain: boundary loops plus a size field.
#[derive(Debug, Clone)]
pub struct Domain<F: SizeField> {
    size: F,
    loops: Vec<BoundaryLoop>,
}

impl<F: SizeField> Domain<F> {
    /// Create a domain with no boundary loops.
    pub fn new(size: F) -> Self {
        Self {
            size,
            loops: Vec::new(),
        }
    }

    /// Add a boundary loop (builder style).
    pub fn with_loop(mut self, boundary: BoundaryLoop) -> Self {
        self.loops.push(boundary);
        self
    }

    /// Add a boundary loop.
    pub fn add_loop(&mut self, boundary: BoundaryLoop) {
        self.loops.push(boundary);
    }

    /// Sample the size field at a point.
    #[inline]
    pub fn size_function(&self, p: &Point2<f64>) -> f64 {
        self.size.size_at(p)
    }

    /// The domain's boundary loops.
    #[inline]
    pub fn loops(&self) -> &[BoundaryLoop] {
        &self.loops
    }
}
