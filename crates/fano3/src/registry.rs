//! The discovery registry: arena of all distinct polytopes found.
//!
//! Entries are owned by the registry for the whole run and addressed by
//! `PolyId` handles; parent/child adjacency is stored as handle lists, so
//! the back-referencing DAG creates no ownership cycles. The registry is
//! append-only: rejected candidates (equivalent to an existing entry) never
//! enter it and never acquire adjacency.
//!
//! Check-then-insert is a single `&mut self` operation; a concurrent port
//! would have to keep exactly that unit atomic, or two threads could both
//! decide the same geometric polytope is new.

use crate::equiv::are_similar;
use crate::polytope::Polytope;

/// Stable handle into the registry arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PolyId(pub usize);

/// One discovered polytope plus its growth relations.
#[derive(Clone, Debug)]
pub struct Entry {
    pub poly: Polytope,
    pub parents: Vec<PolyId>,
    pub children: Vec<PolyId>,
    /// Report identifier; 0 until `assign_ids` runs after the search.
    pub report_id: u32,
}

/// Append-only, insertion-ordered collection of all distinct polytopes.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entry(&self, id: PolyId) -> &Entry {
        &self.entries[id.0]
    }

    #[inline]
    pub fn poly(&self, id: PolyId) -> &Polytope {
        &self.entries[id.0].poly
    }

    pub fn ids(&self) -> impl Iterator<Item = PolyId> {
        (0..self.entries.len()).map(PolyId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PolyId, &Entry)> {
        self.entries.iter().enumerate().map(|(i, e)| (PolyId(i), e))
    }

    /// Append without an equivalence check. Used for the seeds, which are
    /// pairwise distinct by construction.
    pub fn insert(&mut self, poly: Polytope) -> PolyId {
        let id = PolyId(self.entries.len());
        self.entries.push(Entry {
            poly,
            parents: Vec::new(),
            children: Vec::new(),
            report_id: 0,
        });
        id
    }

    /// Deduplicating insert: scan entries with the same vertex count for an
    /// equivalent polytope. Returns the canonical handle and whether the
    /// candidate was genuinely new (and therefore inserted).
    pub fn check_insert(&mut self, candidate: Polytope) -> (PolyId, bool) {
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.poly.num_vertices() == candidate.num_vertices()
                && are_similar(&candidate, &entry.poly)
            {
                return (PolyId(i), false);
            }
        }
        (self.insert(candidate), true)
    }

    /// Record the parent→child relation, each direction at most once.
    pub fn link(&mut self, parent: PolyId, child: PolyId) {
        if !self.entries[parent.0].children.contains(&child) {
            self.entries[parent.0].children.push(child);
        }
        if !self.entries[child.0].parents.contains(&parent) {
            self.entries[child.0].parents.push(parent);
        }
    }

    /// Assign report ids once the whole search has terminated: grouped by
    /// ascending vertex count, then ascending child count, discovery order
    /// as the tie-break. Ids are 1-based.
    pub fn assign_ids(&mut self) {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        // Stable sort preserves discovery order among ties.
        order.sort_by_key(|&i| {
            (
                self.entries[i].poly.num_vertices(),
                self.entries[i].children.len(),
            )
        });
        for (rank, idx) in order.into_iter().enumerate() {
            self.entries[idx].report_id = (rank + 1) as u32;
        }
    }

    /// Handles sorted by report id; call after `assign_ids`.
    pub fn ids_in_report_order(&self) -> Vec<PolyId> {
        let mut ids: Vec<PolyId> = self.ids().collect();
        ids.sort_by_key(|id| self.entries[id.0].report_id);
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Point3;
    use crate::randmap::random_unimodular;
    use crate::seeds::seed_polytopes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn check_insert_rejects_equivalent_copies() {
        let mut reg = Registry::new();
        let seeds = seed_polytopes();
        let first = reg.insert(seeds[0].clone());

        // A unimodular image of the same seed is not new.
        let mut rng = StdRng::seed_from_u64(11);
        let t = random_unimodular(&mut rng, 5);
        let image = Polytope::new(seeds[0].vertices().iter().map(|v| t * v).collect());
        let (canon, was_new) = reg.check_insert(image);
        assert_eq!(canon, first);
        assert!(!was_new);
        assert_eq!(reg.len(), 1);

        // A genuinely different seed is new.
        let (second, was_new) = reg.check_insert(seeds[1].clone());
        assert!(was_new);
        assert_ne!(second, first);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn link_is_idempotent_and_symmetric() {
        let mut reg = Registry::new();
        let seeds = seed_polytopes();
        let a = reg.insert(seeds[0].clone());
        let b = reg.insert(seeds[1].clone());
        reg.link(a, b);
        reg.link(a, b);
        assert_eq!(reg.entry(a).children, vec![b]);
        assert_eq!(reg.entry(b).parents, vec![a]);
        assert!(reg.entry(a).parents.is_empty());
        assert!(reg.entry(b).children.is_empty());
    }

    #[test]
    fn ids_group_by_vertex_count_then_child_count() {
        let mut reg = Registry::new();
        let seeds = seed_polytopes();
        // Insert out of vertex-count order: 5, 4, 6, 4.
        let p5 = reg.insert(seeds[8].clone());
        let p4a = reg.insert(seeds[0].clone());
        let p6 = reg.insert(seeds[11].clone());
        let p4b = reg.insert(seeds[1].clone());
        // Give p4a a child so it sorts after the childless p4b.
        reg.link(p4a, p5);
        reg.assign_ids();
        assert_eq!(reg.entry(p4b).report_id, 1);
        assert_eq!(reg.entry(p4a).report_id, 2);
        assert_eq!(reg.entry(p5).report_id, 3);
        assert_eq!(reg.entry(p6).report_id, 4);
        let order = reg.ids_in_report_order();
        assert_eq!(order, vec![p4b, p4a, p5, p6]);
    }

    #[test]
    fn discovery_order_breaks_ties() {
        let mut reg = Registry::new();
        let seeds = seed_polytopes();
        let first = reg.insert(seeds[0].clone());
        let second = reg.insert(seeds[1].clone());
        reg.assign_ids();
        assert!(reg.entry(first).report_id < reg.entry(second).report_id);
    }
}
