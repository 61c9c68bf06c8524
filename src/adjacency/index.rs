//! Index types for half-edge elements.
//!
//! This module provides type-safe index wrappers for vertices and half-edges.
//! The underlying type is fixed to `u32` because the adjacency buffer this
//! crate produces is consumed as a GPU index buffer, and `u32::MAX` doubles
//! as the null value (the same value GPU-side code reserves for primitive
//! restart).

use std::fmt::{self, Debug};

/// The raw value reserved for invalid/null indices.
const INVALID: u32 = u32::MAX;

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

/// A type-safe half-edge index into the registry arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct HalfEdgeId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from an arena position.
            ///
            /// # Panics
            /// Panics in debug builds if the value does not fit in `u32`.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index < INVALID as usize, "index {} too large for u32", index);
                Self(index as u32)
            }

            /// Create an index directly from a raw `u32` value.
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Create an invalid/null index.
            #[inline]
            pub const fn invalid() -> Self {
                Self(INVALID)
            }

            /// Get the index as a `usize`, for arena access.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw `u32` value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Check if this is a valid (non-null) index.
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != INVALID
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.0)
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(HalfEdgeId, "HE");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);
        assert_eq!(v.raw(), 42);
        assert!(v.is_valid());

        let invalid = VertexId::invalid();
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_type_safety() {
        // Same raw value, distinct types
        let v = VertexId::new(0);
        let he = HalfEdgeId::new(0);
        assert_eq!(v.index(), he.index());
    }

    #[test]
    fn test_debug_format() {
        let v = VertexId::new(42);
        assert_eq!(format!("{:?}", v), "V(42)");

        let he = HalfEdgeId::invalid();
        assert_eq!(format!("{:?}", he), "HE(INVALID)");
    }

    #[test]
    fn test_default_is_invalid() {
        assert!(!HalfEdgeId::default().is_valid());
        assert!(!VertexId::default().is_valid());
    }
}
