//! Render-side triangle mesh container.
//!
//! [`Mesh`] owns the data an importer hands over for one drawable mesh:
//! vertex positions, per-vertex normals and the triangle index list. The
//! adjacency index buffer is computed once at load time and stored alongside
//! the topology for the lifetime of the mesh, so the outline pass can bind
//! it on every frame without recomputation.
//!
//! ```
//! use inkline::adjacency::AdjacencyOptions;
//! use inkline::mesh::Mesh;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let topology = vec![0, 1, 2];
//!
//! let mesh = Mesh::with_adjacency(positions, vec![], topology, &AdjacencyOptions::default())
//!     .unwrap();
//! assert_eq!(mesh.adjacency().unwrap().len(), 6);
//! ```

use nalgebra::{Point3, Vector3};

use crate::adjacency::{build_adjacency, validate_triangles, AdjacencyIndices, AdjacencyOptions};
use crate::error::{MeshError, Result};

/// A triangle mesh with optional precomputed outline adjacency.
#[derive(Debug, Clone)]
pub struct Mesh {
    positions: Vec<Point3<f32>>,
    normals: Vec<Vector3<f32>>,
    topology: Vec<u32>,
    adjacency: Option<AdjacencyIndices>,
}

impl Mesh {
    /// Create a mesh from positions, normals and a triangle index list.
    ///
    /// `normals` may be empty (see [`Mesh::compute_vertex_normals`]) or must
    /// have one entry per position. The topology is validated against the
    /// vertex count up front.
    pub fn new(
        positions: Vec<Point3<f32>>,
        normals: Vec<Vector3<f32>>,
        topology: Vec<u32>,
    ) -> Result<Self> {
        validate_triangles(&topology, positions.len() as u32)?;
        if !normals.is_empty() && normals.len() != positions.len() {
            return Err(MeshError::NormalCountMismatch {
                normals: normals.len(),
                vertices: positions.len(),
            });
        }

        Ok(Self {
            positions,
            normals,
            topology,
            adjacency: None,
        })
    }

    /// Create a mesh and compute its adjacency index buffer immediately.
    pub fn with_adjacency(
        positions: Vec<Point3<f32>>,
        normals: Vec<Vector3<f32>>,
        topology: Vec<u32>,
        options: &AdjacencyOptions,
    ) -> Result<Self> {
        let mut mesh = Self::new(positions, normals, topology)?;
        mesh.ensure_adjacency(options)?;
        Ok(mesh)
    }

    /// Compute and store the adjacency buffer if it has not been built yet.
    ///
    /// The stored buffer is immutable; calling this again is a no-op.
    pub fn ensure_adjacency(&mut self, options: &AdjacencyOptions) -> Result<()> {
        if self.adjacency.is_none() {
            let adjacency = build_adjacency(&self.topology, self.vertex_count(), options)?;
            self.adjacency = Some(adjacency);
        }
        Ok(())
    }

    // ==================== Accessors ====================

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.topology.len() / 3
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point3<f32>] {
        &self.positions
    }

    /// Per-vertex normals. Empty if none were supplied or computed.
    #[inline]
    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    /// The triangle index list.
    #[inline]
    pub fn topology(&self) -> &[u32] {
        &self.topology
    }

    /// The adjacency index buffer, if it has been built.
    #[inline]
    pub fn adjacency(&self) -> Option<&AdjacencyIndices> {
        self.adjacency.as_ref()
    }

    // ==================== Geometry ====================

    /// The three corner positions of triangle `i`.
    pub fn triangle_positions(&self, i: usize) -> Option<[Point3<f32>; 3]> {
        let tri = self.topology.get(i * 3..i * 3 + 3)?;
        Some([
            self.positions[tri[0] as usize],
            self.positions[tri[1] as usize],
            self.positions[tri[2] as usize],
        ])
    }

    /// The unit normal of triangle `i`, from its winding order.
    pub fn face_normal(&self, i: usize) -> Option<Vector3<f32>> {
        let [p0, p1, p2] = self.triangle_positions(i)?;
        let e1 = p1 - p0;
        let e2 = p2 - p0;
        Some(e1.cross(&e2).normalize())
    }

    /// Axis-aligned bounding box of the vertex positions.
    pub fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;

        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }

    /// Compute area-weighted per-vertex normals from the topology,
    /// replacing any existing normals.
    ///
    /// Useful when the importer supplies no normals of its own.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.positions.len()];

        for tri in self.topology.chunks_exact(3) {
            let p0 = self.positions[tri[0] as usize];
            let p1 = self.positions[tri[1] as usize];
            let p2 = self.positions[tri[2] as usize];

            // Cross product magnitude is twice the triangle area, so the
            // unnormalized sum is area-weighted.
            let weighted = (p1 - p0).cross(&(p2 - p0));
            for &v in tri {
                normals[v as usize] += weighted;
            }
        }

        for n in &mut normals {
            let len = n.norm();
            if len > 0.0 {
                *n /= len;
            }
        }

        self.normals = normals;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> (Vec<Point3<f32>>, Vec<u32>) {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let topology = vec![0, 1, 2, 0, 2, 3];
        (positions, topology)
    }

    #[test]
    fn test_new_validates_topology() {
        let (positions, _) = quad();
        let result = Mesh::new(positions, vec![], vec![0, 1, 9]);
        assert!(matches!(
            result,
            Err(MeshError::VertexIndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_normal_count_mismatch() {
        let (positions, topology) = quad();
        let normals = vec![Vector3::z(); 2];
        let result = Mesh::new(positions, normals, topology);
        assert!(matches!(
            result,
            Err(MeshError::NormalCountMismatch {
                normals: 2,
                vertices: 4,
            })
        ));
    }

    #[test]
    fn test_with_adjacency() {
        let (positions, topology) = quad();
        let mesh =
            Mesh::with_adjacency(positions, vec![], topology, &AdjacencyOptions::default())
                .unwrap();

        let adjacency = mesh.adjacency().unwrap();
        assert_eq!(adjacency.len(), 12);
        assert_eq!(adjacency.triangle_count(), mesh.triangle_count());
    }

    #[test]
    fn test_ensure_adjacency_is_idempotent() {
        let (positions, topology) = quad();
        let mut mesh = Mesh::new(positions, vec![], topology).unwrap();
        assert!(mesh.adjacency().is_none());

        let options = AdjacencyOptions::default();
        mesh.ensure_adjacency(&options).unwrap();
        let first = mesh.adjacency().unwrap().clone();

        mesh.ensure_adjacency(&options).unwrap();
        assert_eq!(mesh.adjacency().unwrap(), &first);
    }

    #[test]
    fn test_face_normal() {
        let (positions, topology) = quad();
        let mesh = Mesh::new(positions, vec![], topology).unwrap();

        // Counter-clockwise in the XY plane faces +Z.
        let n = mesh.face_normal(0).unwrap();
        assert!((n.z - 1.0).abs() < 1e-6);
        assert!(mesh.face_normal(2).is_none());
    }

    #[test]
    fn test_bounding_box() {
        let (positions, topology) = quad();
        let mesh = Mesh::new(positions, vec![], topology).unwrap();

        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_compute_vertex_normals() {
        let (positions, topology) = quad();
        let mut mesh = Mesh::new(positions, vec![], topology).unwrap();
        mesh.compute_vertex_normals();

        assert_eq!(mesh.normals().len(), 4);
        for n in mesh.normals() {
            assert!((n.z - 1.0).abs() < 1e-6);
        }
    }
}
