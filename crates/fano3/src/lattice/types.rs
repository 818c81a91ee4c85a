//! Basic lattice types: the integer point and an axis-aligned integer box.

use nalgebra::Vector3;

/// A point of the lattice Z^3. Plain `i64` coordinates; all arithmetic on
/// points is exact.
pub type Point3 = Vector3<i64>;

/// Axis-aligned integer bounding box, grown point by point.
///
/// Starts as the degenerate box `{0}` so the origin is always covered,
/// which is what the emptiness oracle needs.
#[derive(Clone, Copy, Debug)]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self {
            min: Point3::zeros(),
            max: Point3::zeros(),
        }
    }
}

impl Bounds3 {
    /// Enlarge the box to cover `p`.
    pub fn expand(&mut self, p: &Point3) {
        for axis in 0..3 {
            if p[axis] < self.min[axis] {
                self.min[axis] = p[axis];
            } else if p[axis] > self.max[axis] {
                self.max[axis] = p[axis];
            }
        }
    }

    /// All lattice points of the box, inclusive on every axis.
    pub fn lattice_points(&self) -> impl Iterator<Item = Point3> + '_ {
        let (min, max) = (self.min, self.max);
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y)
                .flat_map(move |y| (min.z..=max.z).map(move |z| Point3::new(x, y, z)))
        })
    }
}
