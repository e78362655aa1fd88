//! Unit tests for lem-graph.
//!
//! All tests use hand-crafted farms so they run without any input file.

#[cfg(test)]
mod helpers {
    use lem_core::RoomId;

    use crate::{Graph, GraphBuilder};

    /// `0 - 1 - 2`, start `0`, end `2`.
    pub fn line() -> (Graph, RoomId, RoomId) {
        let mut b = GraphBuilder::new();
        b.add_tunnel("0", "1");
        b.add_tunnel("1", "2");
        let g = b.build();
        let (s, e) = (g.room_id("0").unwrap(), g.room_id("2").unwrap());
        (g, s, e)
    }

    /// Two interior-disjoint routes of three rooms each:
    ///
    /// ```text
    ///   s - a - e
    ///   s - b - e
    /// ```
    pub fn diamond() -> (Graph, RoomId, RoomId) {
        let mut b = GraphBuilder::new();
        b.add_tunnel("s", "a");
        b.add_tunnel("a", "e");
        b.add_tunnel("s", "b");
        b.add_tunnel("b", "e");
        let g = b.build();
        let (s, e) = (g.room_id("s").unwrap(), g.room_id("e").unwrap());
        (g, s, e)
    }

    /// The shortest route `s x y e` blocks two longer routes that are
    /// disjoint from each other:
    ///
    /// ```text
    ///   s - x - y - e
    ///       |   |
    ///      q1   p2
    ///       |   |
    ///      q2   p1 - s
    ///       |
    ///       e
    /// ```
    ///
    /// Enumeration order:
    /// `R0 = s x y e`, `R1 = s x q1 q2 e`, `R2 = s p1 p2 y e`,
    /// `R3 = s p1 p2 y x q1 q2 e`.
    pub fn blocking_shortcut() -> (Graph, RoomId, RoomId) {
        let mut b = GraphBuilder::new();
        b.add_tunnel("s", "x");
        b.add_tunnel("x", "y");
        b.add_tunnel("y", "e");
        b.add_tunnel("x", "q1");
        b.add_tunnel("q1", "q2");
        b.add_tunnel("q2", "e");
        b.add_tunnel("s", "p1");
        b.add_tunnel("p1", "p2");
        b.add_tunnel("p2", "y");
        let g = b.build();
        let (s, e) = (g.room_id("s").unwrap(), g.room_id("e").unwrap());
        (g, s, e)
    }

    /// Names of every room on `route`, for readable assertions.
    pub fn names(g: &Graph, route: &crate::Route) -> Vec<String> {
        route.rooms().iter().map(|&r| g.room_name(r).to_owned()).collect()
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use lem_core::RoomId;

    use crate::GraphBuilder;

    #[test]
    fn empty_build() {
        let g = GraphBuilder::new().build();
        assert_eq!(g.room_count(), 0);
        assert_eq!(g.tunnel_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn rooms_are_interned_in_order() {
        let mut b = GraphBuilder::new();
        assert_eq!(b.room("start"), RoomId(0));
        assert_eq!(b.room("mid"), RoomId(1));
        assert_eq!(b.room("start"), RoomId(0));
        let g = b.build();
        assert_eq!(g.room_name(RoomId(1)), "mid");
        assert_eq!(g.room_id("mid"), Some(RoomId(1)));
        assert_eq!(g.room_id("nope"), None);
    }

    #[test]
    fn isolated_room_has_no_neighbors() {
        let mut b = GraphBuilder::new();
        let lonely = b.room("lonely");
        b.add_tunnel("a", "b");
        let g = b.build();
        assert_eq!(g.degree(lonely), 0);
        assert_eq!(g.neighbors(lonely).count(), 0);
    }

    #[test]
    fn duplicate_tunnels_are_idempotent() {
        let mut b = GraphBuilder::new();
        b.add_tunnel("a", "b");
        b.add_tunnel("a", "b");
        b.add_tunnel("b", "a");
        let g = b.build();
        assert_eq!(g.tunnel_count(), 1);
        let a = g.room_id("a").unwrap();
        assert_eq!(g.degree(a), 1);
    }

    #[test]
    fn self_loop_dropped() {
        let mut b = GraphBuilder::new();
        let (a, _) = b.add_tunnel("a", "a");
        assert!(!b.add_tunnel_ids(a, a));
        let g = b.build();
        assert_eq!(g.tunnel_count(), 0);
        assert_eq!(g.room_count(), 1);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let (g, ..) = super::helpers::diamond();
        for room in (0..g.room_count()).map(|i| RoomId(i as u32)) {
            for n in g.neighbors(room) {
                assert!(g.neighbors(n).any(|back| back == room));
            }
        }
    }

    #[test]
    fn neighbors_keep_declaration_order() {
        let mut b = GraphBuilder::new();
        b.add_tunnel("hub", "c");
        b.add_tunnel("a", "hub");
        b.add_tunnel("hub", "b");
        let g = b.build();
        let hub = g.room_id("hub").unwrap();
        let order: Vec<&str> = g.neighbors(hub).map(|r| g.room_name(r)).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }
}

// ── Route & RouteSet ──────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use lem_core::RoomId;

    use crate::{Route, RouteSet};

    fn r(ids: &[u32]) -> Route {
        Route::new(ids.iter().map(|&i| RoomId(i)).collect())
    }

    #[test]
    fn accessors() {
        let route = r(&[0, 5, 6, 9]);
        assert_eq!(route.room_count(), 4);
        assert_eq!(route.hops(), 3);
        assert_eq!(route.start(), RoomId(0));
        assert_eq!(route.end(), RoomId(9));
        assert_eq!(route.interior(), &[RoomId(5), RoomId(6)]);
        assert_eq!(route.span(), &[RoomId(5), RoomId(6), RoomId(9)]);
    }

    #[test]
    fn direct_tunnel_has_empty_interior() {
        let route = r(&[0, 1]);
        assert!(route.interior().is_empty());
        assert_eq!(route.span(), &[RoomId(1)]);
    }

    #[test]
    fn simplicity() {
        assert!(r(&[0, 1, 2]).is_simple());
        assert!(!r(&[0, 1, 0, 2]).is_simple());
    }

    #[test]
    fn interior_sharing_ignores_endpoints() {
        assert!(!r(&[0, 1, 9]).shares_interior_with(&r(&[0, 2, 9])));
        assert!(r(&[0, 1, 2, 9]).shares_interior_with(&r(&[0, 3, 2, 9])));
    }

    #[test]
    fn capacity_profile() {
        let set = RouteSet::new(vec![r(&[0, 1, 9]), r(&[0, 2, 3, 9]), r(&[0, 9])]);
        assert_eq!(set.capacity_profile(), vec![3, 4, 2]);
        assert!(set.is_interior_disjoint());
        assert_eq!(set.len(), 3);
    }
}

// ── BFS route finder ──────────────────────────────────────────────────────────

#[cfg(test)]
mod finder {
    use lem_core::RoomId;

    use crate::{BfsRouteFinder, GraphBuilder, GraphError, RouteFinder};

    use super::helpers::{blocking_shortcut, diamond, line, names};

    #[test]
    fn single_line_route() {
        let (g, s, e) = line();
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(names(&g, &routes[0]), ["0", "1", "2"]);
    }

    #[test]
    fn diamond_routes_in_neighbor_order() {
        let (g, s, e) = diamond();
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(names(&g, &routes[0]), ["s", "a", "e"]);
        assert_eq!(names(&g, &routes[1]), ["s", "b", "e"]);
    }

    #[test]
    fn shortest_first_enumeration() {
        let (g, s, e) = blocking_shortcut();
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();
        let all: Vec<Vec<String>> = routes.iter().map(|r| names(&g, r)).collect();
        assert_eq!(
            all,
            vec![
                vec!["s", "x", "y", "e"],
                vec!["s", "x", "q1", "q2", "e"],
                vec!["s", "p1", "p2", "y", "e"],
                vec!["s", "p1", "p2", "y", "x", "q1", "q2", "e"],
            ]
        );
        assert!(routes.windows(2).all(|w| w[0].room_count() <= w[1].room_count()));
    }

    #[test]
    fn routes_are_simple_and_anchored() {
        let (g, s, e) = blocking_shortcut();
        for route in BfsRouteFinder.find_routes(&g, s, e).unwrap() {
            assert!(route.is_simple());
            assert_eq!(route.start(), s);
            assert_eq!(route.end(), e);
        }
    }

    #[test]
    fn routes_do_not_continue_past_end() {
        // e has a dead-end branch behind it; nothing may route through e.
        let mut b = GraphBuilder::new();
        b.add_tunnel("s", "e");
        b.add_tunnel("e", "t");
        b.add_tunnel("t", "u");
        let g = b.build();
        let (s, e) = (g.room_id("s").unwrap(), g.room_id("e").unwrap());
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(names(&g, &routes[0]), ["s", "e"]);
    }

    #[test]
    fn disconnected_is_no_path() {
        let mut b = GraphBuilder::new();
        b.add_tunnel("s", "a");
        b.add_tunnel("b", "e");
        let g = b.build();
        let (s, e) = (g.room_id("s").unwrap(), g.room_id("e").unwrap());
        let err = BfsRouteFinder.find_routes(&g, s, e).unwrap_err();
        assert_eq!(err, GraphError::NoPath { from: s, to: e });
    }

    #[test]
    fn unknown_room_rejected() {
        let (g, s, _) = line();
        let err = BfsRouteFinder.find_routes(&g, s, RoomId(99)).unwrap_err();
        assert_eq!(err, GraphError::RoomNotFound(RoomId(99)));
    }

    #[test]
    fn same_endpoints_rejected() {
        let (g, s, _) = line();
        let err = BfsRouteFinder.find_routes(&g, s, s).unwrap_err();
        assert_eq!(err, GraphError::SameEndpoints(s));
    }
}

// ── Route-set selector ────────────────────────────────────────────────────────

#[cfg(test)]
mod selector {
    use lem_core::RoomId;

    use crate::selector::extend_from_anchor;
    use crate::{AnchorGreedySelector, BfsRouteFinder, GraphBuilder, Route, RouteFinder, RouteSetSelector};

    use super::helpers::{blocking_shortcut, diamond, line, names};

    #[test]
    fn empty_input_gives_empty_set() {
        assert!(AnchorGreedySelector.select(&[]).is_empty());
    }

    #[test]
    fn single_route_is_singleton() {
        let (g, s, e) = line();
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();
        let set = AnchorGreedySelector.select(&routes);
        assert_eq!(set.routes(), routes.as_slice());
    }

    #[test]
    fn disjoint_routes_all_selected() {
        let (g, s, e) = diamond();
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();
        let set = AnchorGreedySelector.select(&routes);
        assert_eq!(set.len(), 2);
        assert_eq!(set.capacity_profile(), vec![3, 3]);
    }

    #[test]
    fn bottleneck_falls_back_to_shortest() {
        // Every route goes through c, so no anchor can be extended.
        let mut b = GraphBuilder::new();
        b.add_tunnel("s", "a");
        b.add_tunnel("s", "b");
        b.add_tunnel("a", "c");
        b.add_tunnel("b", "c");
        b.add_tunnel("c", "e");
        b.add_tunnel("a", "b");
        let g = b.build();
        let (s, e) = (g.room_id("s").unwrap(), g.room_id("e").unwrap());
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();
        assert!(routes.len() > 1);

        let set = AnchorGreedySelector.select(&routes);
        assert_eq!(set.len(), 1);
        assert_eq!(set.routes()[0], routes[0]);
    }

    #[test]
    fn larger_set_beats_shortest_anchor() {
        let (g, s, e) = blocking_shortcut();
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();

        assert_eq!(extend_from_anchor(&routes, 0), vec![0]);
        assert_eq!(extend_from_anchor(&routes, 1), vec![1, 2]);
        assert_eq!(extend_from_anchor(&routes, 2), vec![2, 1]);
        assert_eq!(extend_from_anchor(&routes, 3), vec![3]);

        // Anchors 1 and 2 tie at two routes; the earlier anchor wins and
        // stays in front.
        let set = AnchorGreedySelector.select(&routes);
        let picked: Vec<Vec<String>> = set.iter().map(|r| names(&g, r)).collect();
        assert_eq!(
            picked,
            vec![vec!["s", "x", "q1", "q2", "e"], vec!["s", "p1", "p2", "y", "e"]]
        );
    }

    #[test]
    fn direct_tunnel_is_compatible_with_everything() {
        let mut b = GraphBuilder::new();
        b.add_tunnel("s", "e");
        b.add_tunnel("s", "a");
        b.add_tunnel("a", "e");
        let g = b.build();
        let (s, e) = (g.room_id("s").unwrap(), g.room_id("e").unwrap());
        let routes = BfsRouteFinder.find_routes(&g, s, e).unwrap();
        let set = AnchorGreedySelector.select(&routes);
        assert_eq!(set.capacity_profile(), vec![2, 3]);
    }

    #[test]
    fn walk_keeps_shortest_first_order_behind_anchor() {
        // Hand-built: anchor 2 is compatible with both 0 and 1, which must
        // follow it in their enumeration order.
        let r = |ids: &[u32]| Route::new(ids.iter().map(|&i| RoomId(i)).collect());
        let routes = vec![r(&[0, 1, 9]), r(&[0, 2, 9]), r(&[0, 3, 4, 9])];
        assert_eq!(extend_from_anchor(&routes, 2), vec![2, 0, 1]);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::selector::extend_from_anchor;
    use crate::{AnchorGreedySelector, BfsRouteFinder, GraphBuilder, RouteFinder, RouteSetSelector};

    /// Up to 7 rooms named `0..n`, start `0`, end `n-1`, random tunnels.
    fn farm() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (2usize..7).prop_flat_map(|n| {
            let edge = (0..n, 0..n);
            (Just(n), proptest::collection::vec(edge, 0..14))
        })
    }

    proptest! {
        #[test]
        fn finder_and_selector_invariants((n, tunnels) in farm()) {
            let mut b = GraphBuilder::new();
            for i in 0..n {
                b.room(&i.to_string());
            }
            for (a, c) in tunnels {
                b.add_tunnel(&a.to_string(), &c.to_string());
            }
            let g = b.build();
            let s = g.room_id("0").unwrap();
            let e = g.room_id(&(n - 1).to_string()).unwrap();

            let Ok(routes) = BfsRouteFinder.find_routes(&g, s, e) else {
                return Ok(());
            };

            prop_assert!(!routes.is_empty());
            for route in &routes {
                prop_assert!(route.is_simple());
                prop_assert_eq!(route.start(), s);
                prop_assert_eq!(route.end(), e);
                prop_assert!(route.room_count() >= 2);
            }
            prop_assert!(routes.windows(2).all(|w| w[0].room_count() <= w[1].room_count()));

            let set = AnchorGreedySelector.select(&routes);
            prop_assert!(!set.is_empty());
            prop_assert!(set.is_interior_disjoint());
            for picked in &set {
                prop_assert!(routes.contains(picked));
            }

            // Same pick as a plain first-largest scan over all anchors, with
            // or without the `parallel` feature.
            let mut expected = extend_from_anchor(&routes, 0);
            for anchor in 1..routes.len() {
                let candidate = extend_from_anchor(&routes, anchor);
                if candidate.len() > expected.len() {
                    expected = candidate;
                }
            }
            let expected: Vec<_> = expected.into_iter().map(|i| routes[i].clone()).collect();
            prop_assert_eq!(set.routes(), expected.as_slice());
        }
    }
}
