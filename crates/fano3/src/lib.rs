//! Classification of three-dimensional terminal Fano lattice polytopes.
//!
//! Every polytope here has the origin as its unique interior lattice point
//! and is reached from one of thirteen minimal seeds by appending a single
//! vertex at a time. The crate provides the exact-arithmetic kernel, the
//! growth rules, the lattice-point emptiness oracle, the unimodular
//! equivalence engine, and the discovery registry that deduplicates and
//! links parents to children. All arithmetic is exact `i64`; there are no
//! tolerances anywhere.
//!
//! The search itself is `grow::classify`, which runs to exhaustion and
//! returns the finished registry with report ids assigned.

pub mod equiv;
pub mod grow;
pub mod lattice;
pub mod oracle;
pub mod polytope;
pub mod randmap;
pub mod registry;
pub mod seeds;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use lattice::Point3;
pub use polytope::Polytope;
pub use registry::{PolyId, Registry};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grow::{classify, enlarge, grow_step};
    pub use crate::lattice::{are_coplanar, det3, on_interior_side, Bounds3, Point3};
    pub use crate::oracle::is_free_tetrahedron;
    pub use crate::polytope::Polytope;
    pub use crate::registry::{PolyId, Registry};
    pub use crate::seeds::seed_polytopes;
}
