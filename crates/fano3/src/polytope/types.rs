//! The polytope value type.

use crate::lattice::Point3;

use super::faces::is_simplicial;

/// A lattice polytope given by its vertices, with the origin as its unique
/// interior lattice point (by construction; never re-derived here).
///
/// Invariants:
/// - vertices are pairwise distinct and none is the origin;
/// - `simplicial` is derived from the vertex set at construction and never
///   mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polytope {
    vertices: Vec<Point3>,
    simplicial: bool,
}

impl Polytope {
    pub fn new(vertices: Vec<Point3>) -> Self {
        let simplicial = is_simplicial(&vertices);
        Self {
            vertices,
            simplicial,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_simplicial(&self) -> bool {
        self.simplicial
    }

    #[inline]
    pub fn has_vertex(&self, p: &Point3) -> bool {
        self.vertices.contains(p)
    }

    /// Child polytope: this polytope's vertices with `v` appended.
    pub fn child_with(&self, v: Point3) -> Self {
        let mut verts = Vec::with_capacity(self.vertices.len() + 1);
        verts.extend_from_slice(&self.vertices);
        verts.push(v);
        Self::new(verts)
    }

    /// Order-independent vertex-set equality. Vertices are distinct, so for
    /// equal counts a one-sided containment check suffices.
    pub fn same_vertex_set(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self.vertices.iter().all(|v| other.vertices.contains(v))
    }
}
