//! Route enumeration trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! `lem-sim` calls route enumeration via the [`RouteFinder`] trait, so
//! applications can swap in a bounded or pruned search without touching the
//! solver.  The default [`BfsRouteFinder`] is exhaustive.
//!
//! # Ordering
//!
//! Breadth-first expansion yields routes in non-decreasing room count.  The
//! selector relies on this: shorter routes are tried first as anchors.

use std::collections::VecDeque;

use lem_core::RoomId;

use crate::graph::Graph;
use crate::route::Route;
use crate::{GraphError, GraphResult};

// ── RouteFinder trait ─────────────────────────────────────────────────────────

/// Pluggable route enumeration.
pub trait RouteFinder {
    /// Enumerate simple routes from `start` to `end`, shortest first.
    ///
    /// Returns [`GraphError::NoPath`] if there is none.
    fn find_routes(&self, graph: &Graph, start: RoomId, end: RoomId) -> GraphResult<Vec<Route>>;
}

// ── BfsRouteFinder ────────────────────────────────────────────────────────────

/// Exhaustive breadth-first enumeration of every simple start→end path.
///
/// The queue holds partial paths; each dequeued path is either complete (its
/// last room is `end`) or extended by every neighbor it does not already
/// contain.  Every partial path is simple and strictly growing, so the search
/// terminates, but the number of paths is exponential on dense graphs.
pub struct BfsRouteFinder;

impl RouteFinder for BfsRouteFinder {
    fn find_routes(&self, graph: &Graph, start: RoomId, end: RoomId) -> GraphResult<Vec<Route>> {
        all_simple_paths(graph, start, end)
    }
}

fn all_simple_paths(graph: &Graph, start: RoomId, end: RoomId) -> GraphResult<Vec<Route>> {
    for room in [start, end] {
        if !graph.contains(room) {
            return Err(GraphError::RoomNotFound(room));
        }
    }
    if start == end {
        return Err(GraphError::SameEndpoints(start));
    }

    let mut routes = Vec::new();
    let mut queue: VecDeque<Vec<RoomId>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let Some(&last) = path.last() else { continue };

        if last == end {
            routes.push(Route::new(path));
            continue;
        }

        for next in graph.neighbors(last) {
            // Simple paths only.
            if path.contains(&next) {
                continue;
            }
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(next);
            queue.push_back(extended);
        }
    }

    if routes.is_empty() {
        return Err(GraphError::NoPath { from: start, to: end });
    }
    Ok(routes)
}
