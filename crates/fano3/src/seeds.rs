//! The thirteen minimal seed polytopes.
//!
//! Hand-derived in the source classification (Kasprzyk, "Toric Fano
//! threefolds with terminal singularities"): eight tetrahedra, three
//! 5-vertex polytopes, two 6-vertex polytopes. Every terminal Fano 3-tope
//! is reachable from one of these by single-vertex growth. Coordinates are
//! fixed data, not user input; all seeds start with (1,0,0), (0,1,0).

use crate::lattice::Point3;
use crate::polytope::Polytope;

/// Number of minimal polytopes.
pub const NUM_SEEDS: usize = 13;

const SEED_VERTICES: [&[[i64; 3]]; NUM_SEEDS] = [
    &[[1, 0, 0], [0, 1, 0], [0, 0, 1], [-1, -1, -1]],
    &[[1, 0, 0], [0, 1, 0], [1, -3, 5], [-2, 2, -5]],
    &[[1, 0, 0], [0, 1, 0], [1, 1, 2], [-1, -1, -1]],
    &[[1, 0, 0], [0, 1, 0], [1, -2, 3], [-1, 1, -2]],
    &[[1, 0, 0], [0, 1, 0], [-2, 1, 5], [1, -1, -3]],
    &[[1, 0, 0], [0, 1, 0], [1, -2, 5], [-1, 1, -4]],
    &[[1, 0, 0], [0, 1, 0], [1, -2, 7], [-1, 1, -5]],
    &[[1, 0, 0], [0, 1, 0], [-2, 2, 7], [1, -2, -5]],
    &[[1, 0, 0], [0, 1, 0], [0, 0, 1], [-1, -1, 0], [0, 0, -1]],
    &[[1, 0, 0], [0, 1, 0], [1, 2, 3], [-1, -1, 0], [-1, -2, -3]],
    &[[1, 0, 0], [0, 1, 0], [1, 1, 1], [-1, -1, 0], [0, 0, -1]],
    &[
        [1, 0, 0],
        [0, 1, 0],
        [0, 0, 1],
        [-1, 0, 0],
        [0, -1, 0],
        [0, 0, -1],
    ],
    &[
        [1, 0, 0],
        [0, 1, 0],
        [1, 1, 2],
        [-1, 0, 0],
        [0, -1, 0],
        [-1, -1, -2],
    ],
];

/// Build all thirteen seeds, in the fixed order the search grows them.
pub fn seed_polytopes() -> Vec<Polytope> {
    SEED_VERTICES
        .iter()
        .map(|verts| {
            Polytope::new(
                verts
                    .iter()
                    .map(|&[x, y, z]| Point3::new(x, y, z))
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts_match_the_classification() {
        let seeds = seed_polytopes();
        assert_eq!(seeds.len(), NUM_SEEDS);
        let by_count = |n: usize| seeds.iter().filter(|p| p.num_vertices() == n).count();
        assert_eq!(by_count(4), 8);
        assert_eq!(by_count(5), 3);
        assert_eq!(by_count(6), 2);
    }

    #[test]
    fn seed_vertices_are_distinct_and_nonzero() {
        for p in seed_polytopes() {
            let v = p.vertices();
            for (i, a) in v.iter().enumerate() {
                assert_ne!(*a, Point3::zeros());
                for b in &v[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn seed_simplicial_flags_match_the_classification() {
        // Hand-verified: every seed is simplicial except seed 10, whose
        // vertices (1,0,0), (0,1,0), (1,1,1), (0,0,-1) span a
        // quadrilateral facet.
        let expected = [
            true, true, true, true, true, true, true, true, // tetrahedra
            true, true, false, // 5-vertex seeds
            true, true, // 6-vertex seeds
        ];
        let seeds = seed_polytopes();
        assert_eq!(seeds.len(), expected.len());
        for (i, (p, want)) in seeds.iter().zip(expected).enumerate() {
            assert_eq!(p.is_simplicial(), want, "seed {i}");
        }
    }
}
