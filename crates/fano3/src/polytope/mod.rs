//! The vertex-set polytope model and its derived predicates.
//!
//! A `Polytope` is just its distinct vertices (order fixed for storage,
//! irrelevant for identity) plus a simplicial flag computed once at
//! construction. The face/edge/simplicial predicates are brute force over
//! vertex subsets; vertex counts stay below ~20 for the whole search, so
//! nothing cleverer is warranted.

mod faces;
mod types;

pub use faces::{is_edge, is_face, is_simplicial};
pub use types::Polytope;

#[cfg(test)]
mod tests;
