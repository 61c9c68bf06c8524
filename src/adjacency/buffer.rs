//! Adjacency index buffer construction.
//!
//! A "triangles with adjacency" draw call consumes six indices per triangle:
//! the triangle's own vertices at even positions, and at odd positions the
//! far vertex of the neighboring triangle across each edge. A geometry
//! shader uses the far vertices to detect silhouette edges and extrude
//! outline geometry. This module derives that buffer from an
//! [`EdgeRegistry`].

use crate::error::{MeshError, Result};

use super::index::HalfEdgeId;
use super::registry::EdgeRegistry;

/// A finished adjacency index buffer: six indices per source triangle.
///
/// The layout per triangle `(v0, v1, v2)` is
/// `[v0, adj(v0,v1), v1, adj(v1,v2), v2, adj(v2,v0)]`, where `adj(a,b)` is
/// the far vertex of the triangle sharing edge `(a, b)`. For boundary edges
/// the slot holds the triangle's own remaining vertex instead, which gives
/// the geometry shader a zero-area extrusion direction rather than an
/// out-of-range read.
///
/// The buffer is immutable once built and is the only output of the
/// adjacency computation that outlives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyIndices {
    indices: Vec<u32>,
}

impl AdjacencyIndices {
    /// View the buffer as a flat index slice, ready for GPU upload.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    /// Consume the wrapper and take the underlying buffer.
    #[inline]
    pub fn into_inner(self) -> Vec<u32> {
        self.indices
    }

    /// Total number of indices (always six per triangle).
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the buffer holds no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of source triangles represented.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Iterate over the six-index groups, one per source triangle.
    pub fn iter_triangles(&self) -> impl Iterator<Item = [u32; 6]> + '_ {
        self.indices
            .chunks_exact(6)
            .map(|c| [c[0], c[1], c[2], c[3], c[4], c[5]])
    }
}

/// Derive the adjacency index buffer for a triangle list from its registry.
///
/// `registry` must have been built from the same `triangles` slice; pairing
/// it with a different list fails with [`MeshError::DanglingEdge`].
///
/// # Example
///
/// ```
/// use inkline::adjacency::{build_adjacency_indices, EdgeRegistry, NonManifoldPolicy};
///
/// let triangles = [0u32, 1, 2];
/// let registry = EdgeRegistry::build(&triangles, 3, NonManifoldPolicy::Reject).unwrap();
/// let adjacency = build_adjacency_indices(&triangles, &registry).unwrap();
///
/// // All three edges are boundaries, so every adjacency slot collapses to
/// // the triangle's own remaining vertex.
/// assert_eq!(adjacency.as_slice(), &[0, 2, 1, 0, 2, 1]);
/// ```
pub fn build_adjacency_indices(
    triangles: &[u32],
    registry: &EdgeRegistry,
) -> Result<AdjacencyIndices> {
    let mut indices = Vec::with_capacity(triangles.len() * 2);

    for tri in triangles.chunks_exact(3) {
        let (v0, v1, v2) = (tri[0], tri[1], tri[2]);

        let current = registry
            .lookup(v0, v1)
            .ok_or(MeshError::DanglingEdge { from: v0, to: v1 })?;
        let next = registry.next(current);
        let prev = registry.next(next);

        // The far vertex of the neighbor across a half-edge: walk to the
        // opposite half-edge, then one step around the neighbor triangle.
        let across = |edge: HalfEdgeId| -> Option<u32> {
            registry
                .opposite(edge)
                .map(|opp| registry.head(registry.next(opp)).raw())
        };

        indices.push(v0);
        indices.push(across(current).unwrap_or(v2));
        indices.push(v1);
        indices.push(across(next).unwrap_or(v0));
        indices.push(v2);
        indices.push(across(prev).unwrap_or(v1));
    }

    Ok(AdjacencyIndices { indices })
}
