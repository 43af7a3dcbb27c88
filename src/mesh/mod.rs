//! Core data structures for the advancing front.
//!
//! This module provides the vertex store and the oriented edge container
//! that the front is built on.
//!
//! # Overview
//!
//! Vertices live in a [`VertexStore`] and edges in an [`EdgeList`]; both
//! are free-list-backed arenas with an intrusive traversal order, so
//! element handles stay valid while elements are inserted or removed
//! around them. This is what makes refinement safe: sub-edges are spliced
//! into the traversal order before their parent edge while a snapshot of
//! the old sequence is still being walked.
//!
//! # Index Types
//!
//! Elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`EdgeId`] - Identifies an edge
//!
//! # Ownership
//!
//! The edge container does not own vertices; edges hold [`VertexId`]
//! handles into a store passed in by the caller. Two edges are adjacent
//! exactly when they reference the same vertex id.

mod arena;
mod edges;
mod index;
mod vertex;

pub use edges::{Edge, EdgeList, Orientation, TopologyHook};
pub use index::{EdgeId, VertexId};
pub use vertex::{Vertex, VertexStore};
