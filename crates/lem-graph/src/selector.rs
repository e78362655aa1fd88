//! Route-set selection: pick a group of interior-disjoint routes to run in
//! parallel.
//!
//! # Heuristic
//!
//! Every route (shortest first) is tried as an *anchor*.  From the anchor,
//! the remaining routes are walked in shortest-first order and each one is
//! accepted if none of its interior rooms is already taken:
//!
//! ```text
//! walk order for anchor a = [a, 0, 1, …, a-1, a+1, …, n-1]
//! ```
//!
//! The candidate with the most routes wins; on a tie the earliest anchor
//! wins.  This is not a search over all disjoint combinations and can miss a
//! larger or better-balanced set.

use rustc_hash::FxHashSet;
use tracing::debug;

use lem_core::RoomId;

use crate::route::{Route, RouteSet};

// ── RouteSetSelector trait ────────────────────────────────────────────────────

/// Pluggable route-set selection.
pub trait RouteSetSelector {
    /// Choose the routes to schedule agents on.
    ///
    /// `routes` is the shortest-first output of a
    /// [`RouteFinder`](crate::RouteFinder).  Must return a non-empty set for
    /// non-empty input.
    fn select(&self, routes: &[Route]) -> RouteSet;
}

// ── AnchorGreedySelector ──────────────────────────────────────────────────────

/// The anchor-by-anchor greedy heuristic described in the module docs.
///
/// With the `parallel` feature, anchors are evaluated on Rayon's thread pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnchorGreedySelector;

impl RouteSetSelector for AnchorGreedySelector {
    fn select(&self, routes: &[Route]) -> RouteSet {
        if routes.is_empty() {
            return RouteSet::empty();
        }

        let best = best_candidate(routes);
        debug!(
            anchor     = best[0],
            candidates = routes.len(),
            selected   = best.len(),
            "route set selected"
        );
        RouteSet::new(best.into_iter().map(|i| routes[i].clone()).collect())
    }
}

/// Greedily extend `anchor` with every compatible route.
///
/// Returns indices into `routes`, anchor first, in acceptance order.
pub fn extend_from_anchor(routes: &[Route], anchor: usize) -> Vec<usize> {
    let mut accepted = vec![anchor];
    let mut occupied: FxHashSet<RoomId> = routes[anchor].interior().iter().copied().collect();

    for i in (0..anchor).chain(anchor + 1..routes.len()) {
        let interior = routes[i].interior();
        if interior.iter().any(|room| occupied.contains(room)) {
            continue;
        }
        occupied.extend(interior.iter().copied());
        accepted.push(i);
    }
    accepted
}

#[cfg(not(feature = "parallel"))]
fn best_candidate(routes: &[Route]) -> Vec<usize> {
    let mut best = extend_from_anchor(routes, 0);
    for anchor in 1..routes.len() {
        let candidate = extend_from_anchor(routes, anchor);
        if candidate.len() > best.len() {
            best = candidate;
        }
    }
    best
}

#[cfg(feature = "parallel")]
fn best_candidate(routes: &[Route]) -> Vec<usize> {
    use rayon::prelude::*;

    // Indexed collect keeps anchor order; earliest anchor wins ties.
    let candidates: Vec<Vec<usize>> = (0..routes.len())
        .into_par_iter()
        .map(|anchor| extend_from_anchor(routes, anchor))
        .collect();

    candidates
        .into_iter()
        .reduce(|best, candidate| if candidate.len() > best.len() { candidate } else { best })
        .unwrap_or_default()
}
