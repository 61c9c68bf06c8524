//! Error types for inkline.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while analyzing mesh topology.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The triangle list has no triangles.
    #[error("triangle list is empty")]
    EmptyTriangleList,

    /// The triangle list length is not a multiple of 3.
    #[error("triangle list length {len} is not a multiple of 3")]
    RaggedTriangleList {
        /// The offending length.
        len: usize,
    },

    /// A triangle references a vertex index outside the mesh.
    #[error("triangle {triangle} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        /// The triangle's position in the input list.
        triangle: usize,
        /// The out-of-range vertex index.
        vertex: u32,
        /// Number of vertices the mesh actually has.
        vertex_count: u32,
    },

    /// The same directed edge appears in more than one triangle.
    ///
    /// A consistently wound 2-manifold mesh traverses each undirected edge at
    /// most twice, once per direction. A repeated directed edge means three
    /// or more faces meet at that edge, or two faces are wound against each
    /// other.
    #[error("directed edge ({from}, {to}) appears in more than one triangle")]
    NonManifoldEdge {
        /// Start vertex of the directed edge.
        from: u32,
        /// End vertex of the directed edge.
        to: u32,
    },

    /// A half-edge expected by a lookup is missing from the edge registry.
    ///
    /// This indicates an internal invariant violation (or a registry paired
    /// with a triangle list it was not built from), not bad input.
    #[error("half-edge ({from}, {to}) is missing from the edge registry")]
    DanglingEdge {
        /// Start vertex of the missing directed edge.
        from: u32,
        /// End vertex of the missing directed edge.
        to: u32,
    },

    /// The normal list does not match the vertex list.
    #[error("mesh has {normals} normals for {vertices} vertices")]
    NormalCountMismatch {
        /// Number of normals supplied.
        normals: usize,
        /// Number of vertices supplied.
        vertices: usize,
    },
}
