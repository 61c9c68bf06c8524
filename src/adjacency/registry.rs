//! Half-edge registry over a triangle index list.
//!
//! The registry is the topological core of the crate: for every triangle it
//! records one half-edge per directed edge, then links each half-edge to the
//! next edge around its triangle and to its opposite-direction counterpart in
//! the neighboring triangle, if one exists. The adjacency index buffer
//! ([`crate::adjacency::build_adjacency_indices`]) is derived from these
//! links.
//!
//! All half-edges live in a single contiguous arena owned by the registry and
//! are addressed by [`HalfEdgeId`]. The registry is built fresh per mesh,
//! holds no shared state, and is dropped wholesale once the adjacency buffer
//! has been produced.

use std::collections::HashMap;

use crate::error::{MeshError, Result};

use super::index::{HalfEdgeId, VertexId};

/// One directed traversal of one triangle edge.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge {
    /// The vertex this half-edge points to (its end vertex).
    pub head: VertexId,

    /// The next half-edge counter-clockwise around the same triangle.
    /// Always valid after a successful build.
    pub next: HalfEdgeId,

    /// The half-edge traversing the same undirected edge in the other
    /// direction, belonging to the neighboring triangle. `None` for
    /// boundary edges.
    pub opposite: Option<HalfEdgeId>,
}

/// Policy for triangle lists in which the same directed edge appears more
/// than once (non-manifold input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonManifoldPolicy {
    /// Fail the build with [`MeshError::NonManifoldEdge`].
    #[default]
    Reject,

    /// Keep the half-edge registered last. Adjacency for the affected edges
    /// then refers to whichever triangle came last in the input, and the
    /// superseded half-edges drop out of the registry's edge map.
    KeepLast,
}

/// Validate a triangle index list against a vertex count.
///
/// Checks that the list is non-empty, that its length is a multiple of 3 and
/// that every index is in range. All structural errors are reported before
/// any registry state exists, so a failed build has no partial output.
pub fn validate_triangles(triangles: &[u32], vertex_count: u32) -> Result<()> {
    if triangles.is_empty() {
        return Err(MeshError::EmptyTriangleList);
    }
    if triangles.len() % 3 != 0 {
        return Err(MeshError::RaggedTriangleList { len: triangles.len() });
    }
    for (triangle, tri) in triangles.chunks_exact(3).enumerate() {
        for &vertex in tri {
            if vertex >= vertex_count {
                return Err(MeshError::VertexIndexOutOfRange {
                    triangle,
                    vertex,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}

/// A per-mesh map of directed edges to half-edges.
///
/// # Example
///
/// ```
/// use inkline::adjacency::{EdgeRegistry, NonManifoldPolicy};
///
/// // A single isolated triangle: three half-edges, all on the boundary.
/// let triangles = [0u32, 1, 2];
/// let registry = EdgeRegistry::build(&triangles, 3, NonManifoldPolicy::Reject).unwrap();
///
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.boundary_edge_count(), 3);
/// assert!(!registry.is_closed());
/// ```
#[derive(Debug)]
pub struct EdgeRegistry {
    /// Arena holding every half-edge created during the build.
    half_edges: Vec<HalfEdge>,

    /// Directed edge key `(from, to)` to arena id.
    edge_map: HashMap<(u32, u32), HalfEdgeId>,

    /// Per mesh vertex, one half-edge leaving that vertex. Last write wins
    /// among candidates, matching insertion order. `None` for vertices no
    /// triangle references.
    outgoing: Vec<Option<HalfEdgeId>>,

    /// Number of vertices the triangle list indexes into.
    vertex_count: u32,
}

impl EdgeRegistry {
    /// Build the registry for a triangle index list.
    ///
    /// The list must be non-empty, have a length divisible by 3 and index
    /// only vertices below `vertex_count`; triangles are assumed to be
    /// consistently wound. The build runs in two passes: the first registers
    /// every directed edge of every triangle, the second links `next` and
    /// `opposite` and records an outgoing half-edge per vertex. The second
    /// pass requires the fully populated edge map, so the passes cannot be
    /// fused.
    pub fn build(
        triangles: &[u32],
        vertex_count: u32,
        policy: NonManifoldPolicy,
    ) -> Result<Self> {
        validate_triangles(triangles, vertex_count)?;

        let mut registry = Self {
            half_edges: Vec::with_capacity(triangles.len()),
            edge_map: HashMap::with_capacity(triangles.len()),
            outgoing: vec![None; vertex_count as usize],
            vertex_count,
        };

        // Pass 1: register one half-edge per directed edge, in winding order.
        for tri in triangles.chunks_exact(3) {
            for k in 0..3 {
                let from = tri[k];
                let to = tri[(k + 1) % 3];

                let id = HalfEdgeId::new(registry.half_edges.len());
                registry.half_edges.push(HalfEdge {
                    head: VertexId::from_raw(to),
                    next: HalfEdgeId::invalid(),
                    opposite: None,
                });

                let previous = registry.edge_map.insert((from, to), id);
                if previous.is_some() && policy == NonManifoldPolicy::Reject {
                    return Err(MeshError::NonManifoldEdge { from, to });
                }
            }
        }

        // Pass 2: link next edges within each triangle and opposite edges
        // across triangles.
        for tri in triangles.chunks_exact(3) {
            for k in 0..3 {
                let from = tri[k];
                let to = tri[(k + 1) % 3];
                let after = tri[(k + 2) % 3];

                let current = registry
                    .lookup(from, to)
                    .ok_or(MeshError::DanglingEdge { from, to })?;
                let next = registry
                    .lookup(to, after)
                    .ok_or(MeshError::DanglingEdge { from: to, to: after })?;

                registry.half_edges[current.index()].next = next;
                registry.outgoing[to as usize] = Some(next);

                if let Some(opposite) = registry.lookup(to, from) {
                    registry.half_edges[current.index()].opposite = Some(opposite);
                    registry.half_edges[opposite.index()].opposite = Some(current);
                }
            }
        }

        Ok(registry)
    }

    // ==================== Accessors ====================

    /// Number of half-edges in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.half_edges.len()
    }

    /// Whether the arena is empty. Never true for a successfully built
    /// registry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.half_edges.is_empty()
    }

    /// Number of vertices the source triangle list indexes into.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Get a half-edge by id.
    #[inline]
    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.index()]
    }

    /// Find the half-edge registered for the directed edge `(from, to)`.
    #[inline]
    pub fn lookup(&self, from: u32, to: u32) -> Option<HalfEdgeId> {
        self.edge_map.get(&(from, to)).copied()
    }

    // ==================== Topology Queries ====================

    /// The vertex a half-edge points to.
    #[inline]
    pub fn head(&self, id: HalfEdgeId) -> VertexId {
        self.half_edge(id).head
    }

    /// The next half-edge around the same triangle.
    #[inline]
    pub fn next(&self, id: HalfEdgeId) -> HalfEdgeId {
        self.half_edge(id).next
    }

    /// The opposite-direction half-edge, if the edge is interior.
    #[inline]
    pub fn opposite(&self, id: HalfEdgeId) -> Option<HalfEdgeId> {
        self.half_edge(id).opposite
    }

    /// One half-edge leaving the given vertex, if any triangle uses it.
    #[inline]
    pub fn outgoing(&self, vertex: VertexId) -> Option<HalfEdgeId> {
        self.outgoing[vertex.index()]
    }

    /// Whether a half-edge lies on the mesh boundary (has no opposite).
    #[inline]
    pub fn is_boundary(&self, id: HalfEdgeId) -> bool {
        self.half_edge(id).opposite.is_none()
    }

    /// Count of registered directed edges without an opposite.
    ///
    /// Counts through the edge map, so half-edges superseded under
    /// [`NonManifoldPolicy::KeepLast`] do not contribute.
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_map
            .values()
            .filter(|&&id| self.half_edges[id.index()].opposite.is_none())
            .count()
    }

    /// Whether every registered edge has an opposite, i.e. the mesh is
    /// topologically closed.
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }

    /// Iterate over the 3-cycle of half-edges starting at `id`.
    pub fn face_cycle(&self, id: HalfEdgeId) -> FaceCycle<'_> {
        FaceCycle {
            registry: self,
            start: id,
            current: id,
            done: !id.is_valid(),
        }
    }
}

/// Iterator over the half-edges of one triangle, following `next` links.
pub struct FaceCycle<'a> {
    registry: &'a EdgeRegistry,
    start: HalfEdgeId,
    current: HalfEdgeId,
    done: bool,
}

impl<'a> Iterator for FaceCycle<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current;
        self.current = self.registry.next(self.current);

        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Vec<u32> {
        // Closed mesh: every directed edge has its reverse in a neighbor.
        vec![
            0, 2, 1, // bottom
            0, 1, 3, // front
            1, 2, 3, // right
            2, 0, 3, // left
        ]
    }

    #[test]
    fn test_single_triangle() {
        let triangles = [0u32, 1, 2];
        let registry = EdgeRegistry::build(&triangles, 3, NonManifoldPolicy::Reject).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.boundary_edge_count(), 3);
        assert!(!registry.is_closed());

        // next links form the 3-cycle (0,1) -> (1,2) -> (2,0)
        let e01 = registry.lookup(0, 1).unwrap();
        let e12 = registry.lookup(1, 2).unwrap();
        let e20 = registry.lookup(2, 0).unwrap();
        assert_eq!(registry.next(e01), e12);
        assert_eq!(registry.next(e12), e20);
        assert_eq!(registry.next(e20), e01);

        for id in [e01, e12, e20] {
            assert!(registry.is_boundary(id));
        }
    }

    #[test]
    fn test_two_triangles_share_an_edge() {
        let triangles = [0u32, 1, 2, 1, 0, 3];
        let registry = EdgeRegistry::build(&triangles, 4, NonManifoldPolicy::Reject).unwrap();

        assert_eq!(registry.len(), 6);

        let e01 = registry.lookup(0, 1).unwrap();
        let e10 = registry.lookup(1, 0).unwrap();
        assert_eq!(registry.opposite(e01), Some(e10));
        assert_eq!(registry.opposite(e10), Some(e01));

        // The four remaining edges are boundaries.
        assert_eq!(registry.boundary_edge_count(), 4);
    }

    #[test]
    fn test_tetrahedron_is_closed() {
        let triangles = tetrahedron();
        let registry = EdgeRegistry::build(&triangles, 4, NonManifoldPolicy::Reject).unwrap();

        assert_eq!(registry.len(), 12);
        assert_eq!(registry.boundary_edge_count(), 0);
        assert!(registry.is_closed());

        // Mutual opposite links everywhere.
        for tri in triangles.chunks_exact(3) {
            for k in 0..3 {
                let id = registry.lookup(tri[k], tri[(k + 1) % 3]).unwrap();
                let opp = registry.opposite(id).unwrap();
                assert_eq!(registry.opposite(opp), Some(id));
            }
        }
    }

    #[test]
    fn test_head_and_outgoing() {
        let triangles = [0u32, 1, 2];
        let registry = EdgeRegistry::build(&triangles, 3, NonManifoldPolicy::Reject).unwrap();

        let e01 = registry.lookup(0, 1).unwrap();
        assert_eq!(registry.head(e01).raw(), 1);

        // outgoing(v) starts at v
        let out = registry.outgoing(crate::adjacency::VertexId::from_raw(1)).unwrap();
        assert_eq!(out, registry.lookup(1, 2).unwrap());
    }

    #[test]
    fn test_face_cycle() {
        let triangles = [0u32, 1, 2];
        let registry = EdgeRegistry::build(&triangles, 3, NonManifoldPolicy::Reject).unwrap();

        let e01 = registry.lookup(0, 1).unwrap();
        let cycle: Vec<_> = registry.face_cycle(e01).collect();
        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle[0], e01);
        assert_eq!(cycle[1], registry.lookup(1, 2).unwrap());
        assert_eq!(cycle[2], registry.lookup(2, 0).unwrap());
    }

    #[test]
    fn test_empty_input() {
        let result = EdgeRegistry::build(&[], 0, NonManifoldPolicy::Reject);
        assert!(matches!(result, Err(MeshError::EmptyTriangleList)));
    }

    #[test]
    fn test_ragged_input() {
        let triangles = [0u32, 1, 2, 0, 1, 2, 0];
        let result = EdgeRegistry::build(&triangles, 3, NonManifoldPolicy::Reject);
        assert!(matches!(
            result,
            Err(MeshError::RaggedTriangleList { len: 7 })
        ));
    }

    #[test]
    fn test_out_of_range_index() {
        let triangles = [0u32, 1, 5];
        let result = EdgeRegistry::build(&triangles, 3, NonManifoldPolicy::Reject);
        assert!(matches!(
            result,
            Err(MeshError::VertexIndexOutOfRange {
                triangle: 0,
                vertex: 5,
                vertex_count: 3,
            })
        ));
    }

    #[test]
    fn test_non_manifold_rejected() {
        // Two triangles traverse the directed edge (0, 1).
        let triangles = [0u32, 1, 2, 0, 1, 3];
        let result = EdgeRegistry::build(&triangles, 4, NonManifoldPolicy::Reject);
        assert!(matches!(
            result,
            Err(MeshError::NonManifoldEdge { from: 0, to: 1 })
        ));
    }

    #[test]
    fn test_non_manifold_keep_last() {
        let triangles = [0u32, 1, 2, 0, 1, 3];
        let registry =
            EdgeRegistry::build(&triangles, 4, NonManifoldPolicy::KeepLast).unwrap();

        // The surviving (0, 1) half-edge belongs to the second triangle.
        let e01 = registry.lookup(0, 1).unwrap();
        assert_eq!(registry.next(e01), registry.lookup(1, 3).unwrap());
    }
}
