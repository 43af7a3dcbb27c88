//! # Frontline
//!
//! An advancing-front boundary manager for 2D mesh generation.
//!
//! Frontline maintains the evolving polygonal boundary (the "front")
//! separating the already-meshed region from the unmeshed interior, and
//! discretizes that boundary into segments sized by a user-supplied
//! spatial density field.
//!
//! ## Features
//!
//! - **Stable-handle edge container**: free-list arena with an intrusive
//!   traversal order, safe under insertion and removal mid-iteration
//! - **Density-driven refinement**: predictor-corrector marching places
//!   sub-vertices so edge lengths track the local size function
//! - **Base-pointer protocol**: a movable "current edge" reference for the
//!   meshing driver, guaranteed never to dangle
//! - **Marker propagation**: boundary classification tags survive every
//!   subdivision
//!
//! ## Quick Start
//!
//! ```
//! use frontline::prelude::*;
//! use nalgebra::Point2;
//!
//! // A 10x10 square domain with a constant target edge length of 2.
//! let mut vertices = VertexStore::new();
//! let domain = Domain::new(|_p: &Point2<f64>| 2.0)
//!     .with_loop(BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 10.0, 10.0, 1));
//!
//! // Construction seeds the front from the boundary and refines it.
//! let mut front = Front::new(&domain, &mut vertices).unwrap();
//! assert_eq!(front.len(), 20); // 5 edges of length 2 per side
//! assert!((front.area() - 100.0).abs() < 1e-9);
//!
//! // The meshing driver walks the front through its base pointer.
//! front.sort_edges(&vertices, true);
//! let shortest = front.base();
//! println!("next edge to mesh: {:?}", shortest);
//! front.set_base_next();
//! ```
//!
//! ## Spatially Varying Density
//!
//! ```
//! use frontline::prelude::*;
//! use nalgebra::Point2;
//!
//! let mut vertices = VertexStore::new();
//! let domain = Domain::new(|p: &Point2<f64>| 1.0 + 0.15 * p.x)
//!     .with_loop(BoundaryLoop::rectangle(Point2::new(0.0, 0.0), 10.0, 10.0, 0));
//!
//! let front = Front::new(&domain, &mut vertices).unwrap();
//!
//! // Edges are short where the field is small and long where it is large.
//! for (_, edge) in front.iter() {
//!     assert!(edge.length(&vertices) > 0.0);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod error;
pub mod front;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use frontline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::domain::{BoundaryLoop, Domain, SizeField};
    pub use crate::error::{FrontError, Result};
    pub use crate::front::Front;
    pub use crate::mesh::{
        Edge, EdgeId, EdgeList, Orientation, TopologyHook, Vertex, VertexId, VertexStore,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
