//! Reproducible random unimodular maps for tests and benchmarks.
//!
//! Products of elementary integer matrices (shears, swaps, sign flips) stay
//! in GL(3,Z) by construction. Callers seed a `StdRng` so every stream is
//! replayable; the step count bounds how large the entries get.

use nalgebra::Matrix3;
use rand::rngs::StdRng;
use rand::Rng;

/// A random element of GL(3,Z): the product of `steps` elementary matrices.
///
/// Each step is one of: add ±1 times one row to another (shear), swap two
/// rows, or negate a row. Shears dominate the mix so the result is usually
/// not a signed permutation.
pub fn random_unimodular(rng: &mut StdRng, steps: usize) -> Matrix3<i64> {
    let mut m = Matrix3::identity();
    for _ in 0..steps {
        let e = match rng.gen_range(0..4) {
            0 | 1 => {
                let (r, s) = distinct_pair(rng);
                shear(r, s, if rng.gen::<bool>() { 1 } else { -1 })
            }
            2 => {
                let (r, s) = distinct_pair(rng);
                swap(r, s)
            }
            _ => negate(rng.gen_range(0..3)),
        };
        m = e * m;
    }
    m
}

fn distinct_pair(rng: &mut StdRng) -> (usize, usize) {
    let r = rng.gen_range(0..3);
    let mut s = rng.gen_range(0..3);
    if s == r {
        s = (s + 1) % 3;
    }
    (r, s)
}

fn shear(r: usize, s: usize, amount: i64) -> Matrix3<i64> {
    let mut e = Matrix3::identity();
    e[(r, s)] = amount;
    e
}

fn swap(r: usize, s: usize) -> Matrix3<i64> {
    let mut e = Matrix3::zeros();
    let t = 3 - r - s;
    e[(r, s)] = 1;
    e[(s, r)] = 1;
    e[(t, t)] = 1;
    e
}

fn negate(r: usize) -> Matrix3<i64> {
    let mut e = Matrix3::identity();
    e[(r, r)] = -1;
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::det3;
    use rand::SeedableRng;

    #[test]
    fn products_stay_unimodular() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let t = random_unimodular(&mut rng, 8);
            assert_eq!(det3(&t).abs(), 1);
        }
    }

    #[test]
    fn streams_replay_from_the_same_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_unimodular(&mut a, 6), random_unimodular(&mut b, 6));
    }
}
