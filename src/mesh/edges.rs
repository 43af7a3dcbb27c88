//! Oriented edge container.
//!
//! An [`EdgeList`] owns directed edges arranged in a mutable traversal
//! order. Edges reference vertices in an external [`VertexStore`] by id;
//! the container never owns vertex data. The traversal order is what the
//! meshing driver observes when it walks the front, so insertion before an
//! existing edge (used to splice sub-edges in place of a removed parent)
//! must preserve the surrounding order — the free-list arena underneath
//! keeps every handle stable while that happens.
//!
//! # Orientation
//!
//! A closed, consistently wound edge sequence encloses a signed area: the
//! shoelace sum over its directed edges. The container can validate that
//! this sign matches its declared [`Orientation`] and caches the enclosed
//! area for its consumers.

use std::fmt;

use nalgebra::Vector2;

use super::arena::OrderedArena;
use super::index::{EdgeId, VertexId};
use super::vertex::VertexStore;

/// A directed edge of the front.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// Start vertex.
    pub v1: VertexId,

    /// End vertex.
    pub v2: VertexId,

    /// Boundary-segment classification tag.
    ///
    /// Carried unchanged from the original domain boundary through every
    /// refinement of this edge.
    pub marker: i32,
}

impl Edge {
    /// Create a new directed edge.
    pub fn new(v1: VertexId, v2: VertexId, marker: i32) -> Self {
        Self { v1, v2, marker }
    }

    /// Length of this edge.
    pub fn length(&self, store: &VertexStore) -> f64 {
        (store.position(self.v2) - store.position(self.v1)).norm()
    }

    /// Unit direction from `v1` to `v2`.
    pub fn tangent(&self, store: &VertexStore) -> Vector2<f64> {
        (store.position(self.v2) - store.position(self.v1)).normalize()
    }
}

/// Winding convention an [`EdgeList`] declares for its edge sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// No winding requirement; orientation checks always pass.
    None,
    /// Counter-clockwise: the net enclosed area must be positive.
    Ccw,
    /// Clockwise: the net enclosed area must be negative.
    Cw,
}

/// Customization point invoked for every edge added to the container.
///
/// The advancing front installs a hook that tags both endpoints of new
/// edges as front members, so that any topology added to the front
/// automatically becomes part of it. The hook is a structural guarantee
/// enforced at the point of insertion; algorithms adding edges never tag
/// vertices themselves.
pub trait TopologyHook {
    /// Called after `edge` has been added, with its endpoints live in `store`.
    fn on_edge_added(&self, store: &mut VertexStore, edge: &Edge);
}

/// Ordered container of directed edges with stable handles.
pub struct EdgeList {
    arena: OrderedArena<Edge>,
    orientation: Orientation,
    hook: Option<Box<dyn TopologyHook>>,
    area: f64,
}

impl fmt::Debug for EdgeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeList")
            .field("len", &self.arena.len())
            .field("orientation", &self.orientation)
            .field("area", &self.area)
            .finish()
    }
}

impl EdgeList {
    /// Create a new empty edge list with the given winding convention.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            arena: OrderedArena::new(),
            orientation,
            hook: None,
            area: 0.0,
        }
    }

    /// Install the hook invoked for every newly added edge.
    pub fn set_hook(&mut self, hook: Box<dyn TopologyHook>) {
        self.hook = Some(hook);
    }

    /// The declared winding convention.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Check if the container holds no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Check whether `id` names a live edge.
    #[inline]
    pub fn contains(&self, id: EdgeId) -> bool {
        id.is_valid() && self.arena.contains(id.index())
    }

    /// Get an edge by id.
    ///
    /// # Panics
    /// Panics if `id` does not name a live edge.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.arena.get(id.index()).expect("dead edge id")
    }

    /// Get an edge by id, or `None` if the id is dead.
    #[inline]
    pub fn get(&self, id: EdgeId) -> Option<&Edge> {
        if !id.is_valid() {
            return None;
        }
        self.arena.get(id.index())
    }

    /// Append an edge at the end of the traversal order.
    pub fn add_edge(
        &mut self,
        store: &mut VertexStore,
        v1: VertexId,
        v2: VertexId,
        marker: i32,
    ) -> EdgeId {
        let edge = Edge::new(v1, v2, marker);
        let id = EdgeId::new(self.arena.push_back(edge));
        if let Some(hook) = &self.hook {
            hook.on_edge_added(store, &edge);
        }
        id
    }

    /// Insert an edge immediately before `at` in the traversal order.
    ///
    /// `at` must name a live edge.
    pub fn insert_edge(
        &mut self,
        store: &mut VertexStore,
        at: EdgeId,
        v1: VertexId,
        v2: VertexId,
        marker: i32,
    ) -> EdgeId {
        let edge = Edge::new(v1, v2, marker);
        let id = EdgeId::new(self.arena.insert_before(at.index(), edge));
        if let Some(hook) = &self.hook {
            hook.on_edge_added(store, &edge);
        }
        id
    }

    /// Remove an edge, returning it.
    ///
    /// Returns `None` if `id` does not name a live edge.
    pub fn remove(&mut self, id: EdgeId) -> Option<Edge> {
        if !id.is_valid() {
            return None;
        }
        self.arena.remove(id.index())
    }

    /// First edge in traversal order.
    #[inline]
    pub fn first(&self) -> Option<EdgeId> {
        self.arena.first().map(EdgeId::new)
    }

    /// Edge following `id` in traversal order, if any.
    #[inline]
    pub fn next_of(&self, id: EdgeId) -> Option<EdgeId> {
        if !id.is_valid() {
            return None;
        }
        self.arena.next(id.index()).map(EdgeId::new)
    }

    /// Edge preceding `id` in traversal order, if any.
    #[inline]
    pub fn prev_of(&self, id: EdgeId) -> Option<EdgeId> {
        if !id.is_valid() {
            return None;
        }
        self.arena.prev(id.index()).map(EdgeId::new)
    }

    /// Iterate over edge ids in traversal order.
    pub fn ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.arena.indices().map(EdgeId::new)
    }

    /// Iterate over `(id, edge)` pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.arena.iter().map(|(i, e)| (EdgeId::new(i), e))
    }

    /// The cached enclosed area from the last [`compute_area`](Self::compute_area).
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    fn signed_area(&self, store: &VertexStore) -> f64 {
        // Shoelace sum over the directed edges. For a sequence of closed
        // loops this telescopes into the net enclosed area, with clockwise
        // loops (holes) contributing negatively.
        let mut sum = 0.0;
        for (_, e) in self.iter() {
            let p1 = store.position(e.v1);
            let p2 = store.position(e.v2);
            sum += p1.x * p2.y - p2.x * p1.y;
        }
        0.5 * sum
    }

    /// Recompute and cache the net enclosed area.
    pub fn compute_area(&mut self, store: &VertexStore) -> f64 {
        self.area = self.signed_area(store);
        self.area
    }

    /// Validate that the winding of the edge sequence matches the declared
    /// orientation. An empty container passes vacuously.
    pub fn check_orientation(&self, store: &VertexStore) -> bool {
        if self.is_empty() {
            return true;
        }
        match self.orientation {
            Orientation::None => true,
            Orientation::Ccw => self.signed_area(store) > 0.0,
            Orientation::Cw => self.signed_area(store) < 0.0,
        }
    }

    /// Reorder the traversal order by edge length.
    ///
    /// Ordering among equal-length edges is unspecified. Topology is
    /// untouched; only the order the consumer observes changes.
    pub fn sort_by_length(&mut self, store: &VertexStore, ascending: bool) {
        let mut order: Vec<(usize, f64)> = self
            .iter()
            .map(|(id, e)| (id.index(), e.length(store)))
            .collect();
        if ascending {
            order.sort_by(|a, b| a.1.total_cmp(&b.1));
        } else {
            order.sort_by(|a, b| b.1.total_cmp(&a.1));
        }
        let order: Vec<usize> = order.into_iter().map(|(i, _)| i).collect();
        self.arena.set_order(&order);
    }
}
