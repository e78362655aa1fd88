//! Routes and route sets.

use rustc_hash::FxHashSet;

use lem_core::RoomId;

// ── Route ─────────────────────────────────────────────────────────────────────

/// A simple path of rooms from the start room to the end room.
///
/// Always holds at least two rooms.  Produced by a
/// [`RouteFinder`](crate::RouteFinder) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    rooms: Vec<RoomId>,
}

impl Route {
    /// Wrap a room sequence.
    ///
    /// # Panics
    /// Panics in debug mode if `rooms` has fewer than two entries.
    pub fn new(rooms: Vec<RoomId>) -> Self {
        debug_assert!(rooms.len() >= 2, "a route needs at least one tunnel");
        Self { rooms }
    }

    /// Every room, start and end included.
    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms, start and end included.
    #[inline]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of tunnels walked (= turns an agent needs on an empty route).
    #[inline]
    pub fn hops(&self) -> usize {
        self.rooms.len() - 1
    }

    #[inline]
    pub fn start(&self) -> RoomId {
        self.rooms[0]
    }

    #[inline]
    pub fn end(&self) -> RoomId {
        self.rooms[self.rooms.len() - 1]
    }

    /// Rooms strictly between start and end.  Empty for a direct tunnel.
    #[inline]
    pub fn interior(&self) -> &[RoomId] {
        &self.rooms[1..self.rooms.len() - 1]
    }

    /// Rooms an agent occupies after leaving the start: interior then end.
    #[inline]
    pub fn span(&self) -> &[RoomId] {
        &self.rooms[1..]
    }

    /// `true` if no room appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.rooms.iter().all(|r| seen.insert(*r))
    }

    /// `true` if the two routes have an interior room in common.
    pub fn shares_interior_with(&self, other: &Route) -> bool {
        self.interior().iter().any(|r| other.interior().contains(r))
    }
}

// ── RouteSet ──────────────────────────────────────────────────────────────────

/// An ordered collection of pairwise interior-disjoint routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Wrap already-selected routes.
    ///
    /// # Panics
    /// Panics in debug mode if two routes share an interior room.
    pub fn new(routes: Vec<Route>) -> Self {
        let set = Self { routes };
        debug_assert!(set.is_interior_disjoint());
        set
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    /// Room count of each route, in set order.
    pub fn capacity_profile(&self) -> Vec<usize> {
        self.routes.iter().map(Route::room_count).collect()
    }

    /// `true` if no interior room is used by more than one route.
    pub fn is_interior_disjoint(&self) -> bool {
        let mut used = FxHashSet::default();
        self.routes
            .iter()
            .flat_map(|r| r.interior().iter())
            .all(|room| used.insert(*room))
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
