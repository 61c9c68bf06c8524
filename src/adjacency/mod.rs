//! Half-edge adjacency construction.
//!
//! This module turns a plain triangle index list into the six-index-per-
//! triangle "adjacency index buffer" consumed by silhouette outline
//! rendering. The computation has two stages:
//!
//! 1. [`EdgeRegistry::build`] registers a half-edge for every directed edge
//!    of every triangle and links each one to the next edge around its
//!    triangle and to its opposite across the shared edge, if any.
//! 2. [`build_adjacency_indices`] walks the registry once per triangle and
//!    emits the triangle's vertices interleaved with the far vertices of its
//!    neighbors, falling back to the triangle's own vertices along
//!    boundaries.
//!
//! [`build_adjacency`] runs both stages and drops the registry, which is
//! usually all a mesh loader needs:
//!
//! ```
//! use inkline::adjacency::{build_adjacency, AdjacencyOptions};
//!
//! // A tetrahedron: a closed mesh, so no boundary fallbacks appear.
//! let triangles = [0u32, 2, 1, 0, 1, 3, 1, 2, 3, 2, 0, 3];
//! let adjacency = build_adjacency(&triangles, 4, &AdjacencyOptions::default()).unwrap();
//!
//! assert_eq!(adjacency.len(), 2 * triangles.len());
//! ```
//!
//! Builds are independent and idempotent: the registry is function-local
//! state, so adjacency for many meshes can run concurrently
//! ([`build_adjacency_batch`]).

mod buffer;
mod index;
mod registry;

use rayon::prelude::*;

use crate::error::Result;

pub use buffer::{build_adjacency_indices, AdjacencyIndices};
pub use index::{HalfEdgeId, VertexId};
pub use registry::{validate_triangles, EdgeRegistry, FaceCycle, HalfEdge, NonManifoldPolicy};

/// Options for adjacency construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyOptions {
    /// How to treat triangle lists that repeat a directed edge.
    pub non_manifold: NonManifoldPolicy,
}

/// Build the adjacency index buffer for one triangle list.
///
/// Validates the input, builds the half-edge registry, derives the buffer
/// and frees the registry before returning. The output length is exactly
/// `2 * triangles.len()` and every value is below `vertex_count`.
pub fn build_adjacency(
    triangles: &[u32],
    vertex_count: u32,
    options: &AdjacencyOptions,
) -> Result<AdjacencyIndices> {
    let registry = EdgeRegistry::build(triangles, vertex_count, options.non_manifold)?;
    build_adjacency_indices(triangles, &registry)
}

/// Build adjacency buffers for many independent meshes in parallel.
///
/// Each entry pairs a triangle list with the vertex count it indexes into.
/// Every mesh gets its own registry, so the builds share no state; the
/// first error encountered fails the whole batch.
pub fn build_adjacency_batch(
    meshes: &[(&[u32], u32)],
    options: &AdjacencyOptions,
) -> Result<Vec<AdjacencyIndices>> {
    meshes
        .par_iter()
        .map(|&(triangles, vertex_count)| build_adjacency(triangles, vertex_count, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_call_build_matches_staged_build() {
        let triangles = [0u32, 1, 2, 1, 0, 3];

        let staged = {
            let registry =
                EdgeRegistry::build(&triangles, 4, NonManifoldPolicy::Reject).unwrap();
            build_adjacency_indices(&triangles, &registry).unwrap()
        };
        let direct = build_adjacency(&triangles, 4, &AdjacencyOptions::default()).unwrap();

        assert_eq!(staged, direct);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let a: Vec<u32> = vec![0, 1, 2];
        let b: Vec<u32> = vec![0, 2, 1, 0, 1, 3, 1, 2, 3, 2, 0, 3];
        let meshes: Vec<(&[u32], u32)> = vec![(&a, 3), (&b, 4)];

        let options = AdjacencyOptions::default();
        let batch = build_adjacency_batch(&meshes, &options).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], build_adjacency(&a, 3, &options).unwrap());
        assert_eq!(batch[1], build_adjacency(&b, 4, &options).unwrap());
    }

    #[test]
    fn test_batch_propagates_errors() {
        let good: Vec<u32> = vec![0, 1, 2];
        let ragged: Vec<u32> = vec![0, 1, 2, 0];
        let meshes: Vec<(&[u32], u32)> = vec![(&good, 3), (&ragged, 3)];

        let result = build_adjacency_batch(&meshes, &AdjacencyOptions::default());
        assert!(result.is_err());
    }
}
