//! Lanes: routes promoted to scheduling units.

use lem_core::{AgentId, LaneId, RoomId, Turn};
use lem_graph::Route;

// ── Lane ──────────────────────────────────────────────────────────────────────

/// A selected route plus the queue of agents assigned to it.
///
/// The route length and the number of assigned agents are kept apart; the
/// combined [`load`](Self::load) is what the scheduler compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub id: LaneId,
    route:  Route,
    queue:  Vec<AgentId>,
}

impl Lane {
    pub fn new(id: LaneId, route: Route) -> Self {
        Self { id, route, queue: Vec::new() }
    }

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Rooms on the route, start and end included.  Never changes.
    #[inline]
    pub fn route_len(&self) -> u32 {
        self.route.room_count() as u32
    }

    #[inline]
    pub fn assigned_count(&self) -> u32 {
        self.queue.len() as u32
    }

    /// Projected completion estimate: `route_len + assigned_count`.
    #[inline]
    pub fn load(&self) -> u32 {
        self.route_len() + self.assigned_count()
    }

    /// Agents in assignment order.  The index of an agent is its rank.
    #[inline]
    pub fn agents(&self) -> &[AgentId] {
        &self.queue
    }

    /// Rooms an agent passes through after leaving the start, end included.
    #[inline]
    pub fn span(&self) -> &[RoomId] {
        self.route.span()
    }

    /// Append `agent` and return its rank.
    pub fn push(&mut self, agent: AgentId) -> u32 {
        let rank = self.queue.len() as u32;
        self.queue.push(agent);
        rank
    }

    /// Turn on which the agent at `rank` steps into the end room.
    #[inline]
    pub fn arrival_turn(&self, rank: u32) -> Turn {
        Turn(rank) + (self.span().len() as u32 - 1)
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

/// Where one agent was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub agent: AgentId,
    pub lane:  LaneId,
    /// 0-based position in the lane's queue; also the turn the agent leaves
    /// the start room.
    pub rank:  u32,
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// The filled lanes plus a per-agent index of assignments.
///
/// `assignments[i]` belongs to `AgentId(i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub lanes:       Vec<Lane>,
    pub assignments: Vec<Assignment>,
}

impl Schedule {
    pub fn agent_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn lane(&self, id: LaneId) -> &Lane {
        &self.lanes[id.index()]
    }

    pub fn assignment(&self, agent: AgentId) -> Option<&Assignment> {
        self.assignments.get(agent.index())
    }

    /// Turn on which `agent` reaches the end room.
    pub fn arrival_turn(&self, agent: AgentId) -> Option<Turn> {
        self.assignment(agent)
            .map(|a| self.lane(a.lane).arrival_turn(a.rank))
    }

    /// The agent created last, if any.
    pub fn last_agent(&self) -> Option<AgentId> {
        self.assignments.last().map(|a| a.agent)
    }

    /// Agents per lane, in lane order.
    pub fn occupancy(&self) -> Vec<u32> {
        self.lanes.iter().map(Lane::assigned_count).collect()
    }
}
