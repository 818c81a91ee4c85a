//! Unimodular equivalence of lattice polytopes.
//!
//! Two polytopes are equivalent when an integer linear map with determinant
//! ±1 carries one vertex set onto the other. The search fixes a linearly
//! independent vertex triple of `p` and enumerates ordered target triples of
//! `q`; each pair of triples determines at most one rational map, which is
//! solved exactly via the adjugate and kept only when it is integral and
//! unimodular. O(n^3) triples, O(n^2) to apply and compare; second-largest
//! cost center after the emptiness oracle.

use nalgebra::Matrix3;

use crate::lattice::{adj3, det3, Point3};
use crate::polytope::Polytope;

/// Whether an integer map with determinant ±1 sends `p`'s vertex set onto
/// `q`'s. Polytopes with different vertex counts are never similar.
pub fn are_similar(p: &Polytope, q: &Polytope) -> bool {
    if p.num_vertices() != q.num_vertices() {
        return false;
    }
    let pv = p.vertices();
    let qv = q.vertices();

    // Source triple: the first linearly independent one. Every polytope
    // grown from the seeds has (1,0,0), (0,1,0) as its first two vertices
    // and an independent third, so this is (0, 1, 2) in practice; scanning
    // keeps the engine correct for any full-dimensional input.
    let Some((sa, sb, sc)) = independent_triple(pv) else {
        return false;
    };
    let src = Matrix3::from_columns(&[pv[sa], pv[sb], pv[sc]]);
    let src_adj = adj3(&src);
    let src_det = det3(&src);

    let n = qv.len();
    for i in 0..n {
        for j in 0..n {
            if j == i {
                continue;
            }
            for k in 0..n {
                if k == i || k == j {
                    continue;
                }
                let dst = Matrix3::from_columns(&[qv[i], qv[j], qv[k]]);
                let Some(t) = solve_unimodular(&dst, &src_adj, src_det) else {
                    continue;
                };
                if maps_onto(&t, pv, qv) {
                    return true;
                }
            }
        }
    }
    false
}

/// The unique integer map with `t * src = dst` (given `src`'s adjugate and
/// determinant), if it exists and has determinant ±1.
fn solve_unimodular(
    dst: &Matrix3<i64>,
    src_adj: &Matrix3<i64>,
    src_det: i64,
) -> Option<Matrix3<i64>> {
    // t = dst * src^{-1} = dst * adj(src) / det(src), entrywise exact.
    let scaled = dst * src_adj;
    let mut t = Matrix3::zeros();
    for r in 0..3 {
        for c in 0..3 {
            let entry = scaled[(r, c)];
            if entry % src_det != 0 {
                return None;
            }
            t[(r, c)] = entry / src_det;
        }
    }
    if det3(&t).abs() == 1 {
        Some(t)
    } else {
        None
    }
}

/// Whether `t` applied to every vertex of `pv` lands in `qv`'s vertex set.
/// Vertices are distinct and counts equal, so containment is equality.
fn maps_onto(t: &Matrix3<i64>, pv: &[Point3], qv: &[Point3]) -> bool {
    pv.iter().all(|v| qv.contains(&(t * v)))
}

fn independent_triple(vertices: &[Point3]) -> Option<(usize, usize, usize)> {
    let n = vertices.len();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                let m = Matrix3::from_columns(&[vertices[a], vertices[b], vertices[c]]);
                if det3(&m) != 0 {
                    return Some((a, b, c));
                }
            }
        }
    }
    None
}
