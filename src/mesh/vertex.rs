//! Vertex storage for the advancing front.
//!
//! Vertices are owned by a [`VertexStore`] and referenced everywhere else
//! by [`VertexId`] handles. Edges that share an endpoint reference the same
//! vertex; adjacency is decided by vertex identity, never by comparing
//! coordinates. The store keeps an explicit traversal order so that
//! refinement can place new sub-vertices adjacent to an edge's endpoint.

use nalgebra::Point2;

use super::arena::OrderedArena;
use super::index::VertexId;

/// A vertex of the advancing front.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// The 2D position of this vertex.
    pub position: Point2<f64>,

    /// Size-function weighting attribute, used by downstream meshing.
    pub weight: f64,

    /// Fixed vertices are excluded from later position smoothing.
    pub is_fixed: bool,

    /// Whether this vertex lies on the original domain boundary.
    pub on_boundary: bool,

    /// Whether this vertex is currently part of the advancing front.
    pub on_front: bool,
}

impl Vertex {
    /// Create a new vertex at the given position.
    pub fn new(position: Point2<f64>, weight: f64) -> Self {
        Self {
            position,
            weight,
            is_fixed: false,
            on_boundary: false,
            on_front: false,
        }
    }

    /// Create a new vertex from coordinates.
    pub fn from_coords(x: f64, y: f64, weight: f64) -> Self {
        Self::new(Point2::new(x, y), weight)
    }
}

/// Ordered store of vertices with stable handles.
///
/// Handles stay valid across insertions and removals of other vertices.
/// Removed slots are recycled, so a handle is only meaningful while its
/// vertex is alive.
#[derive(Debug, Clone, Default)]
pub struct VertexStore {
    arena: OrderedArena<Vertex>,
}

impl VertexStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Check if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Check whether `id` names a live vertex.
    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.is_valid() && self.arena.contains(id.index())
    }

    /// Append a vertex at the end of the traversal order.
    pub fn push(&mut self, position: Point2<f64>, weight: f64) -> VertexId {
        VertexId::new(self.arena.push_back(Vertex::new(position, weight)))
    }

    /// Insert a vertex immediately before `hint` in the traversal order.
    ///
    /// `hint` must name a live vertex.
    pub fn insert_before(
        &mut self,
        hint: VertexId,
        position: Point2<f64>,
        weight: f64,
    ) -> VertexId {
        VertexId::new(
            self.arena
                .insert_before(hint.index(), Vertex::new(position, weight)),
        )
    }

    /// Remove a vertex, returning it.
    ///
    /// Returns `None` if `id` does not name a live vertex.
    pub fn remove(&mut self, id: VertexId) -> Option<Vertex> {
        if !id.is_valid() {
            return None;
        }
        self.arena.remove(id.index())
    }

    /// Get a vertex by id.
    ///
    /// # Panics
    /// Panics if `id` does not name a live vertex.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        self.arena.get(id.index()).expect("dead vertex id")
    }

    /// Get a mutable vertex by id.
    ///
    /// # Panics
    /// Panics if `id` does not name a live vertex.
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        self.arena.get_mut(id.index()).expect("dead vertex id")
    }

    /// Get a vertex by id, or `None` if the id is dead.
    #[inline]
    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        if !id.is_valid() {
            return None;
        }
        self.arena.get(id.index())
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, id: VertexId) -> Point2<f64> {
        self.vertex(id).position
    }

    /// Iterate over `(id, vertex)` pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.arena.iter().map(|(i, v)| (VertexId::new(i), v))
    }

    /// Iterate over vertex ids in traversal order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.arena.indices().map(VertexId::new)
    }
}
