//! `AgentScheduler`: assigns every agent to exactly one lane.
//!
//! # Placement rule
//!
//! The first agent always goes to lane 0.  After that a cursor walks the lane
//! list as a sliding window over adjacent pairs `(index, index + 1)`, wrapping
//! to 0 when `index + 1` would run past the last lane:
//!
//! ```text
//! cur   = load(index)
//! next  = load(index + 1)
//! first = load(0)
//!
//! if cur + 1 > next + 1   → lane index + 1
//! else if next >= first   → lane 0
//! else                    → lane index
//! ```
//!
//! The receiving lane's load grows by one, then the cursor advances.  With a
//! single lane every agent is appended to it.

use lem_core::{AgentId, LaneId};
use lem_graph::RouteSet;

use crate::lane::{Assignment, Lane, Schedule};
use crate::{ScheduleError, ScheduleResult};

/// Rolling position of the comparison window.
#[derive(Debug, Default, Clone, Copy)]
struct SchedulerCursor {
    index: usize,
}

impl SchedulerCursor {
    /// Current window start, resetting to 0 when the pair would overrun.
    fn window(&mut self, lane_count: usize) -> usize {
        if self.index + 1 >= lane_count {
            self.index = 0;
        }
        self.index
    }

    fn advance(&mut self) {
        self.index += 1;
    }
}

/// Incremental load-balancing scheduler.
///
/// Create with [`AgentScheduler::new`], then call
/// [`assign_next`](Self::assign_next) once per agent in creation order, or
/// use [`AgentScheduler::schedule`] to do both in one go.
#[derive(Debug, Clone)]
pub struct AgentScheduler {
    lanes:       Vec<Lane>,
    assignments: Vec<Assignment>,
    cursor:      SchedulerCursor,
}

impl AgentScheduler {
    /// Promote every route of `route_set` to a lane, in set order.
    pub fn new(route_set: RouteSet) -> ScheduleResult<Self> {
        if route_set.is_empty() {
            return Err(ScheduleError::NoLanes);
        }
        let lanes = route_set
            .into_routes()
            .into_iter()
            .enumerate()
            .map(|(i, route)| Lane::new(LaneId(i as u32), route))
            .collect();
        Ok(Self {
            lanes,
            assignments: Vec::new(),
            cursor:      SchedulerCursor::default(),
        })
    }

    /// Assign `agent_count` agents and return the filled schedule.
    pub fn schedule(route_set: RouteSet, agent_count: usize) -> ScheduleResult<Schedule> {
        if u32::try_from(agent_count).is_err() {
            return Err(ScheduleError::TooManyAgents(agent_count));
        }
        let mut scheduler = Self::new(route_set)?;
        scheduler.assignments.reserve(agent_count);
        for _ in 0..agent_count {
            scheduler.assign_next();
        }
        Ok(scheduler.finish())
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Create the next agent and place it.
    pub fn assign_next(&mut self) -> Assignment {
        let agent = AgentId(self.assignments.len() as u32);
        let target = self.pick_lane();
        let rank = self.lanes[target].push(agent);
        let assignment = Assignment { agent, lane: LaneId(target as u32), rank };
        self.assignments.push(assignment);
        assignment
    }

    /// Consume the scheduler and return lanes plus assignments.
    pub fn finish(self) -> Schedule {
        Schedule { lanes: self.lanes, assignments: self.assignments }
    }

    fn pick_lane(&mut self) -> usize {
        if self.assignments.is_empty() || self.lanes.len() == 1 {
            return 0;
        }

        let index = self.cursor.window(self.lanes.len());
        let cur   = self.lanes[index].load();
        let next  = self.lanes[index + 1].load();
        let first = self.lanes[0].load();

        let target = if cur + 1 > next + 1 {
            index + 1
        } else if next >= first {
            0
        } else {
            index
        };
        self.cursor.advance();
        target
    }
}
