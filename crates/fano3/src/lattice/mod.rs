//! Exact integer lattice geometry (the kernel everything else builds on).
//!
//! Purpose
//! - Provide the `i64` point type, the coplanarity test, the signed
//!   half-space membership test, and the bounding-box walk used by the
//!   emptiness oracle.
//! - Keep everything exact: no floats, no epsilons. Overflow is not a
//!   practical concern (coordinates stay in the low hundreds, weights <= 7).
//!
//! Conventions
//! - The origin is always the interior reference of the polytopes under
//!   study; `on_interior_side` encodes the one directionality convention the
//!   whole search depends on (see its doc comment).

mod ops;
mod types;

pub use ops::{adj3, are_coplanar, det3, on_interior_side};
pub use types::{Bounds3, Point3};
