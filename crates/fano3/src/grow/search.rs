//! The recursive growth scheduler.

use crate::lattice::Point3;
use crate::oracle::is_free_tetrahedron;
use crate::registry::{PolyId, Registry};
use crate::seeds::seed_polytopes;

use super::candidates::all_candidates;

/// Run the whole classification: seed the registry, grow every seed to
/// exhaustion, and assign the final report ids.
pub fn classify() -> Registry {
    let (mut reg, seeds) = seed_registry();
    for id in seeds {
        enlarge(&mut reg, id);
    }
    reg.assign_ids();
    reg
}

/// A fresh registry holding the thirteen seeds (no growth yet).
pub fn seed_registry() -> (Registry, Vec<PolyId>) {
    let mut reg = Registry::new();
    let ids = seed_polytopes()
        .into_iter()
        .map(|p| reg.insert(p))
        .collect();
    (reg, ids)
}

/// Grow `id` to exhaustion: every admissible candidate becomes a linked
/// child, and the scheduler recurses immediately into children that are
/// genuinely new. Equivalent-to-existing children only gain the new
/// parent/child edge.
pub fn enlarge(reg: &mut Registry, id: PolyId) {
    let verts = reg.poly(id).vertices().to_vec();
    for cand in all_candidates(&verts) {
        if let Some((child, was_new)) = attach_child(reg, id, &verts, cand) {
            if was_new {
                enlarge(reg, child);
            }
        }
    }
}

/// A single growth step without recursion: attach every admissible child of
/// `id` and report which were new. Used by the one-step scenario tests.
pub fn grow_step(reg: &mut Registry, id: PolyId) -> Vec<(PolyId, bool)> {
    let verts = reg.poly(id).vertices().to_vec();
    all_candidates(&verts)
        .into_iter()
        .filter_map(|cand| attach_child(reg, id, &verts, cand))
        .collect()
}

/// Admit one candidate vertex: reject the origin and repeated vertices,
/// then require every tetrahedron over a parent vertex pair plus the
/// candidate to be lattice-point free. Admitted candidates become a child
/// polytope, deduplicated through the registry and linked to the parent.
fn attach_child(
    reg: &mut Registry,
    parent: PolyId,
    verts: &[Point3],
    cand: Point3,
) -> Option<(PolyId, bool)> {
    if cand == Point3::zeros() || verts.contains(&cand) {
        return None;
    }
    for (i, v) in verts.iter().enumerate() {
        for w in &verts[i + 1..] {
            if !is_free_tetrahedron(v, w, &cand) {
                return None;
            }
        }
    }
    let child = reg.poly(parent).child_with(cand);
    let (child_id, was_new) = reg.check_insert(child);
    reg.link(parent, child_id);
    Some((child_id, was_new))
}
