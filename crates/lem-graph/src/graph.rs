//! Room graph representation and builder.
//!
//! # Data layout
//!
//! Room names are interned into dense [`RoomId`]s on first sight.  Tunnels
//! are stored in **Compressed Sparse Row (CSR)** format: the neighbors of
//! `RoomId r` occupy the slice
//!
//! ```text
//! adj_to[ adj_start[r] .. adj_start[r+1] ]
//! ```
//!
//! Each undirected tunnel is stored as two directed entries.  Within one
//! room's slice, neighbors keep the order in which their tunnels were first
//! declared, so route enumeration is reproducible for a given input file.

use rustc_hash::{FxHashMap, FxHashSet};

use lem_core::RoomId;

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected room graph in CSR format plus the interned name table.
///
/// Built once from input and never mutated.  Do not construct directly; use
/// [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct Graph {
    // ── Room data ─────────────────────────────────────────────────────────
    /// Name of each room.  Indexed by `RoomId`.
    pub room_names: Vec<String>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Neighbors of room `r` are at
    /// `adj_start[r] .. adj_start[r+1]`.  Length = `room_count + 1`.
    pub adj_start: Vec<u32>,

    /// Neighbor entries, grouped by source room.
    pub adj_to: Vec<RoomId>,

    index: FxHashMap<String, RoomId>,
}

impl Graph {
    /// Construct an empty graph with no rooms or tunnels.
    pub fn empty() -> Self {
        GraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.room_names.len()
    }

    /// Number of undirected tunnels.
    pub fn tunnel_count(&self) -> usize {
        self.adj_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.room_names.is_empty()
    }

    pub fn contains(&self, room: RoomId) -> bool {
        room.index() < self.room_count()
    }

    // ── Names ─────────────────────────────────────────────────────────────

    /// Look up the id of a room by name.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    /// Name of `room` as it appeared in the input.
    ///
    /// # Panics
    /// Panics if `room` does not belong to this graph.
    #[inline]
    pub fn room_name(&self, room: RoomId) -> &str {
        &self.room_names[room.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `room`, in declaration order.
    ///
    /// This is a contiguous slice scan with no heap allocation.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> impl Iterator<Item = RoomId> + '_ {
        let start = self.adj_start[room.index()] as usize;
        let end   = self.adj_start[room.index() + 1] as usize;
        self.adj_to[start..end].iter().copied()
    }

    /// Number of tunnels touching `room`.
    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        let start = self.adj_start[room.index()] as usize;
        let end   = self.adj_start[room.index() + 1] as usize;
        end - start
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Rooms are interned by name; declaring the same tunnel twice (in either
/// direction) is a no-op, and a tunnel from a room to itself is dropped.
///
/// # Example
///
/// ```
/// use lem_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_tunnel("0", "1");
/// b.add_tunnel("1", "2");
/// b.add_tunnel("2", "1"); // duplicate
/// let graph = b.build();
/// assert_eq!(graph.room_count(), 3);
/// assert_eq!(graph.tunnel_count(), 2);
/// ```
pub struct GraphBuilder {
    names:   Vec<String>,
    index:   FxHashMap<String, RoomId>,
    edges:   Vec<(RoomId, RoomId)>,
    seen:    FxHashSet<(RoomId, RoomId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            index: FxHashMap::default(),
            edges: Vec::new(),
            seen:  FxHashSet::default(),
        }
    }

    /// Pre-allocate for the expected number of rooms and tunnels.
    pub fn with_capacity(rooms: usize, tunnels: usize) -> Self {
        Self {
            names: Vec::with_capacity(rooms),
            index: FxHashMap::with_capacity_and_hasher(rooms, Default::default()),
            edges: Vec::with_capacity(tunnels * 2),
            seen:  FxHashSet::with_capacity_and_hasher(tunnels * 2, Default::default()),
        }
    }

    /// Intern `name` and return its `RoomId` (sequential from 0 in order of
    /// first appearance).
    pub fn room(&mut self, name: &str) -> RoomId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = RoomId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        id
    }

    /// Add an undirected tunnel between two named rooms, interning both.
    pub fn add_tunnel(&mut self, a: &str, b: &str) -> (RoomId, RoomId) {
        let a = self.room(a);
        let b = self.room(b);
        self.add_tunnel_ids(a, b);
        (a, b)
    }

    /// Add an undirected tunnel between two already-interned rooms.
    ///
    /// Returns `false` if the tunnel was a duplicate or a self-loop.
    pub fn add_tunnel_ids(&mut self, a: RoomId, b: RoomId) -> bool {
        if a == b || !self.seen.insert((a, b)) {
            return false;
        }
        self.seen.insert((b, a));
        self.edges.push((a, b));
        self.edges.push((b, a));
        true
    }

    pub fn room_count(&self) -> usize { self.names.len() }
    pub fn tunnel_count(&self) -> usize { self.edges.len() / 2 }

    /// Consume the builder and produce a [`Graph`].
    ///
    /// Time complexity: O(E log E) for the edge sort, where E = tunnels.
    pub fn build(self) -> Graph {
        let room_count = self.names.len();

        // Stable sort keeps each room's neighbors in declaration order.
        let mut edges = self.edges;
        edges.sort_by_key(|&(from, _)| from.0);

        let adj_to: Vec<RoomId> = edges.iter().map(|&(_, to)| to).collect();

        let mut adj_start = vec![0u32; room_count + 1];
        for &(from, _) in &edges {
            adj_start[from.index() + 1] += 1;
        }
        for i in 1..=room_count {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[room_count] as usize, adj_to.len());

        Graph {
            room_names: self.names,
            adj_start,
            adj_to,
            index: self.index,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
