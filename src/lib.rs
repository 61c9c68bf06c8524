//! # Inkline
//!
//! Half-edge adjacency construction for silhouette outline rendering.
//!
//! Non-photorealistic outline passes draw a mesh with a "triangles with
//! adjacency" primitive: six indices per triangle, interleaving the
//! triangle's own vertices with the far vertex of the neighboring triangle
//! across each edge. A geometry shader compares the facing of each neighbor
//! against the triangle itself and extrudes outline geometry along
//! silhouette edges. Inkline builds that adjacency index buffer from a plain
//! triangle index list by constructing a half-edge registry per mesh.
//!
//! ## Quick Start
//!
//! ```
//! use inkline::prelude::*;
//!
//! // A tetrahedron: four triangles, every edge shared by exactly two.
//! let triangles = [0u32, 2, 1, 0, 1, 3, 1, 2, 3, 2, 0, 3];
//!
//! let adjacency = build_adjacency(&triangles, 4, &AdjacencyOptions::default()).unwrap();
//! assert_eq!(adjacency.len(), 24);
//!
//! // Upload `adjacency.as_slice()` as the index buffer of a
//! // triangles-with-adjacency draw call.
//! for [v0, a01, v1, a12, v2, a20] in adjacency.iter_triangles() {
//!     let _ = (v0, a01, v1, a12, v2, a20);
//! }
//! ```
//!
//! ## Boundary Edges
//!
//! Open meshes have edges with no neighboring triangle. Those adjacency
//! slots fall back to the triangle's own remaining vertex, which the
//! geometry shader sees as a degenerate, zero-area neighbor and never
//! extrudes:
//!
//! ```
//! use inkline::prelude::*;
//!
//! let adjacency = build_adjacency(&[0, 1, 2], 3, &AdjacencyOptions::default()).unwrap();
//! assert_eq!(adjacency.as_slice(), &[0, 2, 1, 0, 2, 1]);
//! ```
//!
//! ## Inspecting Topology
//!
//! The intermediate [`adjacency::EdgeRegistry`] is available on its own for
//! topology queries (boundary detection, face cycles, manifoldness checks);
//! it lives only as long as the caller keeps it.
//!
//! ## Meshes and Styles
//!
//! [`mesh::Mesh`] pairs imported vertex data with its topology and caches
//! the adjacency buffer at load time, mirroring how a renderer holds one
//! index buffer per mesh for its outline pass. [`style`] collects the
//! parameter sets of the NPR techniques the buffer feeds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adjacency;
pub mod error;
pub mod mesh;
pub mod style;

/// Prelude module for convenient imports.
///
/// ```
/// use inkline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adjacency::{
        build_adjacency, build_adjacency_batch, build_adjacency_indices, AdjacencyIndices,
        AdjacencyOptions, EdgeRegistry, HalfEdge, HalfEdgeId, NonManifoldPolicy, VertexId,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::Mesh;
}

// Re-export nalgebra types for convenience
pub use nalgebra;
