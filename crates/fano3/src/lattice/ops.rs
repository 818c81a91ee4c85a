//! Exact predicates on lattice points and 3x3 integer matrices.

use nalgebra::Matrix3;

use super::types::Point3;

/// Whether the four points lie in a common plane.
///
/// Normal of the plane through `a`, `b`, `c`, dotted with `d` shifted into
/// `a`'s frame; zero means coplanar.
#[inline]
pub fn are_coplanar(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> bool {
    let n = (b - a).cross(&(c - a));
    n.dot(&(d - a)) == 0
}

/// Signed half-space membership of `x` relative to the plane with normal `n`
/// through `face_pt`, with `interior` deciding which side counts as inside.
///
/// Convention (load-bearing for both the face test and the emptiness
/// oracle):
/// - the plane passes through `interior` itself => outside;
/// - `x` lies exactly on the plane => inside;
/// - otherwise inside iff `x` and `interior` have offsets of equal sign.
#[inline]
pub fn on_interior_side(x: &Point3, n: &Point3, interior: &Point3, face_pt: &Point3) -> bool {
    let base = n.dot(face_pt);
    let par = n.dot(interior) - base;
    let nor = n.dot(x) - base;
    if par == 0 {
        return false;
    }
    if nor == 0 {
        return true;
    }
    (par > 0) == (nor > 0)
}

/// Exact determinant of a 3x3 integer matrix.
///
/// nalgebra's generic `determinant` needs a field, so this is expanded by
/// hand.
#[inline]
pub fn det3(m: &Matrix3<i64>) -> i64 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Adjugate of a 3x3 integer matrix, so that `m * adj3(m) = det3(m) * I`.
///
/// Rows are cross products of `m`'s columns; used to solve integer linear
/// systems exactly (divide by the determinant with a divisibility check).
pub fn adj3(m: &Matrix3<i64>) -> Matrix3<i64> {
    let c0 = m.column(0).into_owned();
    let c1 = m.column(1).into_owned();
    let c2 = m.column(2).into_owned();
    Matrix3::from_rows(&[
        c1.cross(&c2).transpose(),
        c2.cross(&c0).transpose(),
        c0.cross(&c1).transpose(),
    ])
}
