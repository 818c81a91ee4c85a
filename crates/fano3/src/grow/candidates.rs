//! Candidate vertices proposed from an existing vertex set.
//!
//! Three rules, emitted in this fixed order (the order determines discovery
//! order and thereby the tie-break of the final id assignment):
//! 1. vertex rule: `-v` for every vertex;
//! 2. edge rule: `-(v + w)` for every unordered pair;
//! 3. face rule: `-(l1*a + l2*b + l3*c) / l4` for every unordered triple
//!    and every weight quadruple in the fixed catalogue, kept only when
//!    `l4` divides every coordinate exactly.

use crate::lattice::Point3;

/// Barycentric weight quadruples tried by the face rule, in catalogue
/// order: (1,1,1,1); the four rotations of (1,1,1,2); twelve arrangements
/// of (1,1,2,3); then all 24 orderings of each of (1,2,3,5), (1,3,4,5),
/// (2,3,5,7), (3,4,5,7).
pub fn weight_catalogue() -> Vec<[i64; 4]> {
    let mut weights: Vec<[i64; 4]> = vec![
        [1, 1, 1, 1],
        [1, 1, 1, 2],
        [1, 1, 2, 1],
        [1, 2, 1, 1],
        [2, 1, 1, 1],
        [1, 1, 2, 3],
        [1, 2, 1, 3],
        [2, 1, 1, 3],
        [1, 1, 3, 2],
        [1, 2, 3, 1],
        [2, 1, 3, 1],
        [1, 3, 1, 2],
        [1, 3, 2, 1],
        [2, 3, 1, 1],
        [3, 1, 1, 2],
        [3, 1, 2, 1],
        [3, 2, 1, 1],
    ];
    for quad in [[1, 2, 3, 5], [1, 3, 4, 5], [2, 3, 5, 7], [3, 4, 5, 7]] {
        push_orderings(&mut weights, quad);
    }
    weights
}

/// All 24 orderings of a quadruple with distinct entries, in nested-loop
/// order.
fn push_orderings(out: &mut Vec<[i64; 4]>, quad: [i64; 4]) {
    for c1 in 0..4 {
        for c2 in 0..4 {
            if c2 == c1 {
                continue;
            }
            for c3 in 0..4 {
                if c3 == c1 || c3 == c2 {
                    continue;
                }
                for c4 in 0..4 {
                    if c4 == c1 || c4 == c2 || c4 == c3 {
                        continue;
                    }
                    out.push([quad[c1], quad[c2], quad[c3], quad[c4]]);
                }
            }
        }
    }
}

/// Weighted reflection `-(l1*a + l2*b + l3*c) / l4`, when it lands on the
/// lattice.
pub fn barycentric_candidate(a: &Point3, b: &Point3, c: &Point3, w: &[i64; 4]) -> Option<Point3> {
    let s = -(a * w[0] + b * w[1] + c * w[2]);
    if s.x % w[3] == 0 && s.y % w[3] == 0 && s.z % w[3] == 0 {
        Some(s / w[3])
    } else {
        None
    }
}

/// All candidate vertices of a vertex set, in rule order. Duplicates across
/// rules are possible and harmless; the scheduler re-checks each candidate
/// against the current registry anyway.
pub fn all_candidates(vertices: &[Point3]) -> Vec<Point3> {
    let n = vertices.len();
    let mut out = Vec::new();

    // Vertex rule.
    for v in vertices {
        out.push(-v);
    }

    // Edge rule.
    for i in 0..n {
        for j in i + 1..n {
            out.push(-(vertices[i] + vertices[j]));
        }
    }

    // Face rule.
    let weights = weight_catalogue();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for w in &weights {
                    if let Some(p) =
                        barycentric_candidate(&vertices[i], &vertices[j], &vertices[k], w)
                    {
                        out.push(p);
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_the_documented_shape() {
        let weights = weight_catalogue();
        assert_eq!(weights.len(), 17 + 4 * 24);
        assert_eq!(weights[0], [1, 1, 1, 1]);
        // The permuted quadruples keep their multiset of entries.
        for w in &weights[17..41] {
            let mut sorted = *w;
            sorted.sort_unstable();
            assert_eq!(sorted, [1, 2, 3, 5]);
        }
        // All 24 orderings are distinct.
        let mut block: Vec<_> = weights[17..41].to_vec();
        block.sort_unstable();
        block.dedup();
        assert_eq!(block.len(), 24);
    }

    #[test]
    fn barycentric_division_must_be_exact() {
        let a = Point3::new(1, 0, 0);
        let b = Point3::new(0, 1, 0);
        let c = Point3::new(0, 0, 1);
        // -(a + b + c) / 2 is not a lattice point.
        assert_eq!(barycentric_candidate(&a, &b, &c, &[1, 1, 1, 2]), None);
        // -(a + b + 2c) / 2 is not; -(2a + 2b + 2c) would be, but that
        // quadruple is not in the catalogue. Use an exactly divisible case:
        let d = Point3::new(1, 1, 2);
        assert_eq!(
            barycentric_candidate(&d, &d, &d, &[1, 1, 1, 1]),
            Some(Point3::new(-3, -3, -6))
        );
        assert_eq!(
            barycentric_candidate(&a, &b, &d, &[1, 1, 2, 2]),
            None // (-3, -3, -4) has odd coordinates
        );
    }

    #[test]
    fn rule_order_is_vertex_then_edge_then_face() {
        let verts = vec![
            Point3::new(1, 0, 0),
            Point3::new(0, 1, 0),
            Point3::new(0, 0, 1),
            Point3::new(-1, -1, -1),
        ];
        let cands = all_candidates(&verts);
        // First four are the vertex reflections.
        assert_eq!(cands[0], Point3::new(-1, 0, 0));
        assert_eq!(cands[3], Point3::new(1, 1, 1));
        // Next six are edge reflections.
        assert_eq!(cands[4], Point3::new(-1, -1, 0));
        // The (1,1,1,1) face combination of the first triple follows.
        assert_eq!(cands[10], Point3::new(-1, -1, -1));
    }
}
