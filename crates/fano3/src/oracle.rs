//! Lattice-point emptiness oracle for tetrahedra cornered at the origin.
//!
//! This is the dominant cost center of the whole search: its work grows
//! with the volume of the bounding box, i.e. with coordinate magnitude,
//! not with vertex count.

use crate::lattice::{on_interior_side, Bounds3, Point3};

/// Whether the tetrahedron `{a, b, c, 0}` contains no lattice point other
/// than its four corners.
///
/// Walks the axis-aligned bounding box of the corners and tests every
/// non-corner point against the four bounding half-spaces. Each face plane
/// is paired with the opposite corner as interior reference, so a point is
/// inside the tetrahedron iff it passes all four tests.
pub fn is_free_tetrahedron(a: &Point3, b: &Point3, c: &Point3) -> bool {
    let o = Point3::zeros();

    let mut bbox = Bounds3::default();
    bbox.expand(a);
    bbox.expand(b);
    bbox.expand(c);

    // Face normals: abc, and the three faces through the origin.
    let n_abc = (b - a).cross(&(c - a));
    let n_oab = a.cross(b);
    let n_oac = a.cross(c);
    let n_obc = b.cross(c);

    for p in bbox.lattice_points() {
        if p == *a || p == *b || p == *c || p == o {
            continue;
        }
        if on_interior_side(&p, &n_abc, &o, a)
            && on_interior_side(&p, &n_oab, c, &o)
            && on_interior_side(&p, &n_oac, b, &o)
            && on_interior_side(&p, &n_obc, a, &o)
        {
            return false;
        }
    }
    true
}
