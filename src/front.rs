//! The advancing front.
//!
//! The [`Front`] is the oriented, closed boundary curve separating the
//! already-meshed region from the unmeshed interior. It is seeded from a
//! domain's boundary loops, immediately refined so that local edge length
//! matches the domain's size field, and then consumed edge by edge by the
//! meshing driver, which removes edges as elements are placed and inserts
//! new ones as the mesh grows.
//!
//! # Refinement
//!
//! Each edge is subdivided by predictor-corrector marching: from the
//! endpoint where the size field is smallest, trial steps of the local
//! size are taken along the edge and corrected with the trapezoidal
//! average of the size at both ends of the step. The residual gap at the
//! far endpoint (the crop distance) is redistributed over the interior
//! points, weighted by their local size, so relative spacing stays
//! consistent with the field.
//!
//! # Example
//!
//! ```
//! use frontline::prelude::*;
//! use nalgebra::Point2;
//!
//! let mut vertices = VertexStore::new();
//! let domain = Domain::new(|_p: &Point2<f64>| 2.0)
//!     .with_loop(BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 10.0, 10.0, 1));
//!
//! // A 10x10 square at constant size 2 refines to 5 edges per side.
//! let front = Front::new(&domain, &mut vertices).unwrap();
//! assert_eq!(front.len(), 20);
//! assert!((front.area() - 100.0).abs() < 1e-9);
//! ```

use nalgebra::Point2;

use crate::domain::{Domain, SizeField};
use crate::error::{FrontError, Result};
use crate::mesh::{Edge, EdgeId, EdgeList, Orientation, TopologyHook, VertexId, VertexStore};

/// Upper bound on marching steps per edge. A positive size field always
/// advances the march, so this only trips on numerically broken input.
const MAX_MARCH_STEPS: usize = 1_000_000;

/// Hook tagging every vertex touched by a new front edge as a front member.
struct FrontTag;

impl TopologyHook for FrontTag {
    fn on_edge_added(&self, store: &mut VertexStore, edge: &Edge) {
        store.vertex_mut(edge.v1).on_front = true;
        store.vertex_mut(edge.v2).on_front = true;
    }
}

/// The advancing front: a closed, counter-clockwise sequence of edges with
/// a movable base pointer.
#[derive(Debug)]
pub struct Front {
    edges: EdgeList,
    base: EdgeId,
}

impl Front {
    /// Build a front from a domain's boundary loops and refine it.
    ///
    /// Every boundary edge is copied into the front with its marker; loop
    /// vertices are created in `vertices`, flagged fixed and on-boundary.
    /// The seeded front must be counter-clockwise
    /// ([`FrontError::InvalidOrientation`] otherwise), and every loop must
    /// have at least three vertices.
    pub fn new<F: SizeField>(domain: &Domain<F>, vertices: &mut VertexStore) -> Result<Self> {
        Self::with_hook(domain, vertices, Box::new(FrontTag))
    }

    /// Build a front with a custom new-topology hook.
    ///
    /// The hook is invoked for every edge added to the front, at seeding
    /// and during all later refinement and growth. The default hook
    /// (see [`Front::new`]) flags both endpoints `on_front`.
    pub fn with_hook<F: SizeField>(
        domain: &Domain<F>,
        vertices: &mut VertexStore,
        hook: Box<dyn TopologyHook>,
    ) -> Result<Self> {
        let mut edges = EdgeList::new(Orientation::Ccw);
        edges.set_hook(hook);

        for boundary in domain.loops() {
            if boundary.len() < 3 {
                return Err(FrontError::DegenerateBoundary {
                    vertices: boundary.len(),
                });
            }

            let ids: Vec<_> = boundary
                .positions()
                .iter()
                .map(|p| vertices.push(*p, 1.0))
                .collect();

            for i in 0..ids.len() {
                let v1 = ids[i];
                let v2 = ids[(i + 1) % ids.len()];

                // Boundary geometry must not move during later smoothing.
                vertices.vertex_mut(v1).is_fixed = true;

                edges.add_edge(vertices, v1, v2, boundary.marker(i));

                vertices.vertex_mut(v1).on_boundary = true;
                vertices.vertex_mut(v2).on_boundary = true;
            }
        }

        if !edges.check_orientation(vertices) {
            let area = edges.compute_area(vertices);
            return Err(FrontError::InvalidOrientation { area });
        }
        edges.compute_area(vertices);

        let mut front = Self {
            edges,
            base: EdgeId::invalid(),
        };
        front.refine(domain, vertices)?;
        front.set_base_first();
        Ok(front)
    }

    // ==================== Accessors ====================

    /// Number of edges in the front.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the front has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The current base edge, or an invalid id on an empty front.
    #[inline]
    pub fn base(&self) -> EdgeId {
        self.base
    }

    /// Set the base edge. `id` must name a live edge of the front.
    #[inline]
    pub fn set_base(&mut self, id: EdgeId) {
        debug_assert!(self.edges.contains(id), "set_base with dead edge id");
        self.base = id;
    }

    /// Get an edge by id.
    ///
    /// # Panics
    /// Panics if `id` does not name a live edge.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.edges.edge(id)
    }

    /// First edge in traversal order.
    #[inline]
    pub fn first(&self) -> Option<EdgeId> {
        self.edges.first()
    }

    /// Iterate over edge ids in traversal order.
    pub fn ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.ids()
    }

    /// Iterate over `(id, edge)` pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter()
    }

    /// Net area enclosed by the front, as of the last refinement or
    /// explicit recomputation.
    #[inline]
    pub fn area(&self) -> f64 {
        self.edges.area()
    }

    /// Validate the counter-clockwise winding of the edge sequence.
    pub fn check_orientation(&self, vertices: &VertexStore) -> bool {
        self.edges.check_orientation(vertices)
    }

    /// Check topological closure: every vertex referenced by the front is
    /// entered exactly as often as it is left, so the edge sequence forms
    /// closed loops.
    pub fn is_closed(&self) -> bool {
        use std::collections::HashMap;

        let mut degree: HashMap<VertexId, i64> = HashMap::new();
        for (_, e) in self.edges.iter() {
            *degree.entry(e.v1).or_insert(0) += 1;
            *degree.entry(e.v2).or_insert(0) -= 1;
        }
        degree.values().all(|&d| d == 0)
    }

    // ==================== Base-pointer and ordering ====================

    /// Point the base at the first edge in traversal order.
    ///
    /// No-op on an empty front.
    pub fn set_base_first(&mut self) {
        if let Some(first) = self.edges.first() {
            self.base = first;
        }
    }

    /// Advance the base to the next edge, wrapping to the first edge after
    /// the last.
    ///
    /// No-op on an empty front.
    pub fn set_base_next(&mut self) {
        if self.edges.is_empty() {
            return;
        }
        self.base = self
            .edges
            .next_of(self.base)
            .or_else(|| self.edges.first())
            .unwrap_or_else(EdgeId::invalid);
    }

    /// Reorder the front's edges by length and reset the base to the first
    /// (shortest or longest) edge.
    ///
    /// Topology is unchanged; only the traversal order the meshing driver
    /// observes. Ordering among equal-length edges is unspecified.
    pub fn sort_edges(&mut self, vertices: &VertexStore, ascending: bool) {
        self.edges.sort_by_length(vertices, ascending);
        self.set_base_first();
    }

    // ==================== Structural mutation ====================

    /// Append an edge to the front (new topology is tagged via the hook).
    pub fn add_edge(
        &mut self,
        vertices: &mut VertexStore,
        v1: VertexId,
        v2: VertexId,
        marker: i32,
    ) -> EdgeId {
        self.edges.add_edge(vertices, v1, v2, marker)
    }

    /// Insert an edge before `at` in traversal order (tagged via the hook).
    pub fn insert_edge(
        &mut self,
        vertices: &mut VertexStore,
        at: EdgeId,
        v1: VertexId,
        v2: VertexId,
        marker: i32,
    ) -> EdgeId {
        self.edges.insert_edge(vertices, at, v1, v2, marker)
    }

    /// Remove an edge from the front.
    ///
    /// If the base referenced the removed edge it is reset to the first
    /// remaining edge (or invalidated on an emptied front), so the base
    /// never dangles.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let removed = self.edges.remove(id);
        if removed.is_some() && self.base == id {
            self.base = self.edges.first().unwrap_or_else(EdgeId::invalid);
        }
        removed
    }

    // ==================== Refinement ====================

    /// Refine the front so local edge length approximates the size field.
    ///
    /// Makes a single pass over the edges currently in the front (edges
    /// created by this pass are not re-examined). An edge whose march
    /// yields no interior point is left unchanged; otherwise it is
    /// replaced in place by its sub-edges, each carrying the parent's
    /// marker. Returns the net increase in edge count.
    ///
    /// Calling this again on an already sufficiently refined front is a
    /// no-op returning 0.
    pub fn refine<F: SizeField>(
        &mut self,
        domain: &Domain<F>,
        vertices: &mut VertexStore,
    ) -> Result<usize> {
        let n_before = self.edges.len();

        let snapshot: Vec<EdgeId> = self.edges.ids().collect();
        let mut marked: Vec<EdgeId> = Vec::new();

        for id in snapshot {
            let e = *self.edges.edge(id);

            let p1 = vertices.position(e.v1);
            let p2 = vertices.position(e.v2);
            let rho_1 = domain.size_function(&p1);
            let rho_2 = domain.size_function(&p2);
            for (p, rho) in [(p1, rho_1), (p2, rho_2)] {
                if rho <= 0.0 {
                    return Err(FrontError::NonPositiveSize {
                        x: p.x,
                        y: p.y,
                        value: rho,
                    });
                }
            }

            // March from the endpoint with the smaller size value, where
            // spacing is tightest.
            let dir = rho_1 < rho_2;

            let coords = sub_vertex_coords(&e, dir, rho_1, rho_2, domain, vertices)?;

            // Only the two original endpoints: nothing fits between them.
            if coords.len() < 3 {
                continue;
            }
            marked.push(id);

            self.materialize_sub_edges(id, &coords, vertices);
        }

        for id in marked {
            self.remove_edge(id);
        }

        self.edges.compute_area(vertices);

        #[cfg(debug_assertions)]
        {
            if !self.is_closed() {
                eprintln!("WARNING: front not closed after refinement!");
            }
        }

        Ok(self.edges.len() - n_before)
    }

    /// Replace an edge by sub-edges through its interior point sequence.
    ///
    /// `coords` reads from the edge's `v1` to its `v2`, endpoints
    /// included. One vertex per interior point is inserted adjacent to the
    /// edge's `v2` in the store, fixed and weighted 1.0; one edge per
    /// consecutive pair is spliced in before the parent edge, carrying the
    /// parent's marker. The parent itself is left for the caller to remove.
    fn materialize_sub_edges(
        &mut self,
        parent: EdgeId,
        coords: &[Point2<f64>],
        vertices: &mut VertexStore,
    ) {
        let e = *self.edges.edge(parent);
        let mut v_cur = e.v1;

        for p in &coords[1..coords.len() - 1] {
            let v_n = vertices.insert_before(e.v2, *p, 1.0);

            // Front sub-vertices are fixed so grid smoothing cannot pull
            // them off the boundary curve.
            vertices.vertex_mut(v_n).is_fixed = true;

            self.edges.insert_edge(vertices, parent, v_cur, v_n, e.marker);
            vertices.vertex_mut(v_cur).on_boundary = true;
            vertices.vertex_mut(v_n).on_boundary = true;

            v_cur = v_n;
        }

        self.edges.insert_edge(vertices, parent, v_cur, e.v2, e.marker);
        vertices.vertex_mut(v_cur).on_boundary = true;
        vertices.vertex_mut(e.v2).on_boundary = true;
    }
}

/// Generate sub-vertex coordinates along an edge by predictor-corrector
/// marching.
///
/// With `dir` true the march runs from the edge's `v1` to its `v2`,
/// otherwise from `v2` to `v1`; the caller picks `dir` so the march starts
/// where the size field is smaller. The returned sequence always reads
/// from `v1` to `v2` and includes both endpoints exactly.
fn sub_vertex_coords<F: SizeField>(
    e: &Edge,
    dir: bool,
    rho_1: f64,
    rho_2: f64,
    domain: &Domain<F>,
    vertices: &VertexStore,
) -> Result<Vec<Point2<f64>>> {
    let (v_a, v_b) = if dir { (e.v1, e.v2) } else { (e.v2, e.v1) };
    let xy_a = vertices.position(v_a);
    let xy_b = vertices.position(v_b);

    let length = e.length(vertices);
    let tang = if dir {
        e.tangent(vertices)
    } else {
        -e.tangent(vertices)
    };

    // Stop marching half a far-endpoint spacing short of the end; the
    // crop step below absorbs the remainder.
    let rho_b = if dir { rho_2 } else { rho_1 };
    let s_end = 1.0 - 0.5 * rho_b / length;

    let mut coords = vec![xy_a];
    let mut s_last = 0.0;
    let mut xy = xy_a;

    loop {
        // Predictor
        let rho = domain.size_function(&xy);
        if rho <= 0.0 {
            return Err(FrontError::NonPositiveSize {
                x: xy.x,
                y: xy.y,
                value: rho,
            });
        }
        let xy_p = xy + rho * tang;

        // Corrector: trapezoidal average of the size at both step ends.
        let rho_p = domain.size_function(&xy_p);
        if rho_p <= 0.0 {
            return Err(FrontError::NonPositiveSize {
                x: xy_p.x,
                y: xy_p.y,
                value: rho_p,
            });
        }
        let xy_c = xy + 0.5 * (rho + rho_p) * tang;

        let s = (xy_c - xy_a).norm() / length;

        coords.push(xy_c);
        s_last = s;
        xy = xy_c;

        if s > s_end {
            break;
        }
        if coords.len() > MAX_MARCH_STEPS {
            return Err(FrontError::MarchDiverged { steps: coords.len() });
        }
    }

    // Force the last marched point onto the far endpoint.
    let last = coords.len() - 1;
    coords[last] = xy_b;

    // Crop distance: the gap between the last marched position and the
    // far endpoint.
    let d_cr = (1.0 - s_last) * length * tang;

    // Redistribute the crop over the interior points, weighted by their
    // local size normalized over the interior. Endpoints carry weight 0
    // and stay exactly in place.
    if coords.len() > 2 {
        let rho_i: Vec<f64> = coords[1..last]
            .iter()
            .map(|p| domain.size_function(p))
            .collect();
        let rho_tot: f64 = rho_i.iter().sum();
        if rho_tot > 0.0 {
            for (p, rho) in coords[1..last].iter_mut().zip(&rho_i) {
                *p += (rho / rho_tot) * d_cr;
            }
        }
    }

    // The redistributed points must still be strictly ordered along the
    // edge; anything else means the size field is pathological here.
    let mut s_prev = 0.0;
    for (i, p) in coords.iter().enumerate().skip(1) {
        let s = (*p - xy_a).norm();
        if s <= s_prev {
            return Err(FrontError::NonMonotonicSpacing { index: i });
        }
        s_prev = s;
    }

    if !dir {
        coords.reverse();
    }

    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundaryLoop;

    fn square_domain(side: f64, size: f64) -> Domain<impl SizeField> {
        let positions = vec![
            Point2::new(0.0, 0.0),
            Point2::new(side, 0.0),
            Point2::new(side, side),
            Point2::new(0.0, side),
        ];
        Domain::new(move |_p: &Point2<f64>| size)
            .with_loop(BoundaryLoop::with_markers(positions, vec![0, 1, 2, 3]))
    }

    #[test]
    fn test_square_refines_to_uniform_edges() {
        let mut vertices = VertexStore::new();
        let domain = square_domain(10.0, 2.0);
        let front = Front::new(&domain, &mut vertices).unwrap();

        assert_eq!(front.len(), 20);
        for (_, e) in front.iter() {
            assert!((e.length(&vertices) - 2.0).abs() < 1e-9);
        }
        assert!((front.area() - 100.0).abs() < 1e-9);
        assert!(front.check_orientation(&vertices));
        assert!(front.is_closed());
    }

    #[test]
    fn test_marker_propagation() {
        let mut vertices = VertexStore::new();
        let domain = square_domain(10.0, 2.0);
        let front = Front::new(&domain, &mut vertices).unwrap();

        for marker in 0..4 {
            let count = front.iter().filter(|(_, e)| e.marker == marker).count();
            assert_eq!(count, 5, "side {} should split into 5 edges", marker);
        }
    }

    #[test]
    fn test_endpoint_preservation() {
        let mut vertices = VertexStore::new();
        let domain = square_domain(10.0, 2.0);
        let front = Front::new(&domain, &mut vertices).unwrap();

        for corner in [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ] {
            let found = front
                .iter()
                .any(|(_, e)| vertices.position(e.v1) == corner);
            assert!(found, "corner {:?} must survive refinement exactly", corner);
        }
    }

    #[test]
    fn test_refine_is_idempotent() {
        let mut vertices = VertexStore::new();
        let domain = square_domain(10.0, 2.0);
        let mut front = Front::new(&domain, &mut vertices).unwrap();

        let added = front.refine(&domain, &mut vertices).unwrap();
        assert_eq!(added, 0);
        assert_eq!(front.len(), 20);
    }

    #[test]
    fn test_vertex_flags_after_construction() {
        let mut vertices = VertexStore::new();
        let domain = square_domain(10.0, 2.0);
        let front = Front::new(&domain, &mut vertices).unwrap();

        for (_, e) in front.iter() {
            for v in [e.v1, e.v2] {
                let vertex = vertices.vertex(v);
                assert!(vertex.is_fixed);
                assert!(vertex.on_boundary);
                assert!(vertex.on_front);
                assert_eq!(vertex.weight, 1.0);
            }
        }
    }

    #[test]
    fn test_variable_size_field() {
        let mut vertices = VertexStore::new();
        let positions = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let domain = Domain::new(|p: &Point2<f64>| 1.0 + 0.15 * p.x)
            .with_loop(BoundaryLoop::new(positions, 0));

        let mut front = Front::new(&domain, &mut vertices).unwrap();

        assert!(front.len() > 4);
        assert!(front.check_orientation(&vertices));
        assert!(front.is_closed());
        assert!((front.area() - 100.0).abs() < 1e-9);

        // Spacing already matches the field everywhere.
        assert_eq!(front.refine(&domain, &mut vertices).unwrap(), 0);
    }

    #[test]
    fn test_hole_loop_reduces_area() {
        let mut vertices = VertexStore::new();
        let outer = BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 10.0, 10.0, 1);
        let hole = BoundaryLoop::rectangle(Point2::new(4.0, 4.0), 2.0, 2.0, 2).reversed();
        let domain = Domain::new(|_p: &Point2<f64>| 50.0)
            .with_loop(outer)
            .with_loop(hole);

        let front = Front::new(&domain, &mut vertices).unwrap();

        assert_eq!(front.len(), 8);
        assert!((front.area() - 96.0).abs() < 1e-9);
        assert!(front.check_orientation(&vertices));
        assert!(front.is_closed());
    }

    #[test]
    fn test_clockwise_boundary_rejected() {
        let mut vertices = VertexStore::new();
        let cw = BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 10.0, 10.0, 0).reversed();
        let domain = Domain::new(|_p: &Point2<f64>| 2.0).with_loop(cw);

        match Front::new(&domain, &mut vertices) {
            Err(FrontError::InvalidOrientation { area }) => assert!(area < 0.0),
            other => panic!("expected InvalidOrientation, got {:?}", other.map(|f| f.len())),
        }
    }

    #[test]
    fn test_degenerate_loop_rejected() {
        let mut vertices = VertexStore::new();
        let bad = BoundaryLoop::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], 0);
        let domain = Domain::new(|_p: &Point2<f64>| 1.0).with_loop(bad);

        assert!(matches!(
            Front::new(&domain, &mut vertices),
            Err(FrontError::DegenerateBoundary { vertices: 2 })
        ));
    }

    #[test]
    fn test_non_positive_size_field_rejected() {
        let mut vertices = VertexStore::new();
        let domain = Domain::new(|_p: &Point2<f64>| 0.0)
            .with_loop(BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 1.0, 1.0, 0));

        assert!(matches!(
            Front::new(&domain, &mut vertices),
            Err(FrontError::NonPositiveSize { .. })
        ));
    }

    #[test]
    fn test_spiking_size_field_fails_monotonicity() {
        // A narrow spike ahead of the march blows up one corrected step;
        // the large negative crop then shoves the interior points behind
        // the start of the edge.
        let mut vertices = VertexStore::new();
        let positions = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 8.0),
        ];
        let spike = |p: &Point2<f64>| {
            if p.y > 0.1 {
                100.0
            } else if p.x > 7.4 && p.x < 8.6 {
                40.0
            } else {
                0.5
            }
        };
        let domain = Domain::new(spike).with_loop(BoundaryLoop::new(positions, 0));

        assert!(matches!(
            Front::new(&domain, &mut vertices),
            Err(FrontError::NonMonotonicSpacing { .. })
        ));
    }

    #[test]
    fn test_sort_edges_ascending_and_base() {
        let mut vertices = VertexStore::new();
        let positions = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 1.0),
            Point2::new(2.0, 1.0),
        ];
        // Edge lengths 5, 1, 3, sqrt(5); size large enough that
        // refinement leaves them alone.
        let domain =
            Domain::new(|_p: &Point2<f64>| 50.0).with_loop(BoundaryLoop::new(positions, 0));
        let mut front = Front::new(&domain, &mut vertices).unwrap();
        assert_eq!(front.len(), 4);

        front.sort_edges(&vertices, true);
        let lengths: Vec<f64> = front.iter().map(|(_, e)| e.length(&vertices)).collect();
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
        assert!((front.edge(front.base()).length(&vertices) - 1.0).abs() < 1e-12);

        front.sort_edges(&vertices, false);
        let lengths: Vec<f64> = front.iter().map(|(_, e)| e.length(&vertices)).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        assert!((front.edge(front.base()).length(&vertices) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_base_next_wraps_cyclically() {
        let mut vertices = VertexStore::new();
        let domain = Domain::new(|_p: &Point2<f64>| 50.0)
            .with_loop(BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 1.0, 1.0, 0));
        let mut front = Front::new(&domain, &mut vertices).unwrap();

        front.set_base_first();
        let start = front.base();
        for _ in 0..front.len() {
            front.set_base_next();
        }
        assert_eq!(front.base(), start);
    }

    #[test]
    fn test_base_reset_on_removal() {
        let mut vertices = VertexStore::new();
        let domain = Domain::new(|_p: &Point2<f64>| 50.0)
            .with_loop(BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 1.0, 1.0, 0));
        let mut front = Front::new(&domain, &mut vertices).unwrap();

        front.set_base_next();
        let victim = front.base();
        front.remove_edge(victim);

        assert_ne!(front.base(), victim);
        assert_eq!(front.base(), front.first().unwrap());
        assert_eq!(front.len(), 3);
    }

    #[test]
    fn test_empty_front_no_ops() {
        let mut vertices = VertexStore::new();
        let domain = Domain::new(|_p: &Point2<f64>| 1.0);
        let mut front = Front::new(&domain, &mut vertices).unwrap();

        assert!(front.is_empty());
        assert!(!front.base().is_valid());

        front.set_base_first();
        front.set_base_next();
        front.sort_edges(&vertices, true);
        assert!(!front.base().is_valid());

        assert_eq!(front.refine(&domain, &mut vertices).unwrap(), 0);
        assert_eq!(front.area(), 0.0);
    }

    #[test]
    fn test_driver_growth_tags_new_topology() {
        let mut vertices = VertexStore::new();
        let domain = Domain::new(|_p: &Point2<f64>| 50.0)
            .with_loop(BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 1.0, 1.0, 0));
        let mut front = Front::new(&domain, &mut vertices).unwrap();

        // Simulate the driver consuming the base edge and advancing over
        // a newly placed interior vertex.
        let base = front.base();
        let e = *front.edge(base);
        let apex = vertices.push(Point2::new(0.5, 0.5), 1.0);

        front.insert_edge(&mut vertices, base, e.v1, apex, e.marker);
        front.insert_edge(&mut vertices, base, apex, e.v2, e.marker);
        front.remove_edge(base);

        assert!(vertices.vertex(apex).on_front);
        assert!(!vertices.vertex(apex).on_boundary);
        assert!(front.is_closed());
        assert_eq!(front.len(), 5);
    }

    #[test]
    fn test_refined_closure_and_successor_order() {
        let mut vertices = VertexStore::new();
        let domain = square_domain(10.0, 2.0);
        let front = Front::new(&domain, &mut vertices).unwrap();

        // In traversal order, consecutive edges share their joint vertex.
        let ids: Vec<EdgeId> = front.ids().collect();
        for w in ids.windows(2) {
            assert_eq!(front.edge(w[0]).v2, front.edge(w[1]).v1);
        }
        assert_eq!(
            front.edge(ids[ids.len() - 1]).v2,
            front.edge(ids[0]).v1
        );
    }
}
