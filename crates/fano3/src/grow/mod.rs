//! Vertex growth: candidate generation plus the recursive scheduler.
//!
//! Purpose
//! - `candidates` proposes new vertices from an existing polytope via the
//!   three growth rules (vertex reflection, edge reflection, barycentric
//!   face combinations).
//! - `search` filters candidates through the emptiness oracle, deduplicates
//!   children against the registry, links the growth DAG, and recurses into
//!   genuinely new polytopes.
//!
//! Termination is a domain fact (the growth rules converge on a finite set
//! of terminal Fano polytopes), not something this module enforces.

pub mod candidates;
mod search;

pub use search::{classify, enlarge, grow_step, seed_registry};
