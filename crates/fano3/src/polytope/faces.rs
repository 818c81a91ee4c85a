//! Face, edge, and simplicial predicates over a vertex list.

use crate::lattice::{are_coplanar, on_interior_side, Point3};

/// Whether the plane through `a`, `b`, `c` supports the polytope, i.e.
/// every other vertex lies on the interior side (or on the plane), with the
/// origin as the interior reference.
pub fn is_face(vertices: &[Point3], a: &Point3, b: &Point3, c: &Point3) -> bool {
    let o = Point3::zeros();
    let n = (b - a).cross(&(c - a));
    vertices
        .iter()
        .filter(|v| *v != a && *v != b && *v != c)
        .all(|v| on_interior_side(v, &n, &o, a))
}

/// Whether `a`, `b` span an edge: two face-forming third vertices exist
/// whose faces are not mutually coplanar.
pub fn is_edge(vertices: &[Point3], a: &Point3, b: &Point3) -> bool {
    for (i, u) in vertices.iter().enumerate() {
        if u == a || u == b || !is_face(vertices, u, a, b) {
            continue;
        }
        for w in &vertices[i + 1..] {
            if w != a && w != b && is_face(vertices, w, a, b) && !are_coplanar(u, w, a, b) {
                return true;
            }
        }
    }
    false
}

/// Whether every facet is a triangle: no coplanar 4-subset whose first
/// three vertices support the polytope.
pub fn is_simplicial(vertices: &[Point3]) -> bool {
    let n = vertices.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for l in k + 1..n {
                    if are_coplanar(&vertices[i], &vertices[j], &vertices[k], &vertices[l])
                        && is_face(vertices, &vertices[i], &vertices[j], &vertices[k])
                    {
                        return false;
                    }
                }
            }
        }
    }
    true
}
