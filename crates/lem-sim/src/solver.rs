//! The `Solver` struct and its pipeline.

use tracing::{debug, info};

use lem_core::{RoomId, SolveConfig};
use lem_graph::{Graph, GraphError, RouteFinder, RouteSetSelector};
use lem_schedule::{AgentScheduler, Schedule};

use crate::{SolveError, SolveResult, TurnLine, TurnObserver, TurnSimulator};

// ── Plan / report ─────────────────────────────────────────────────────────────

/// Everything decided before the first turn.
#[derive(Debug, Clone)]
pub struct Plan {
    /// How many simple routes the finder enumerated.
    pub routes_found: usize,

    /// Filled lanes, in route-set order.
    pub schedule: Schedule,
}

impl Plan {
    /// Room count of each selected route, in lane order.
    pub fn lane_profile(&self) -> Vec<usize> {
        self.schedule
            .lanes
            .iter()
            .map(|lane| lane.route().room_count())
            .collect()
    }
}

/// Summary returned by [`Solver::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub routes_found: usize,
    pub lane_profile: Vec<usize>,
    /// Agents per lane.
    pub occupancy:    Vec<u32>,
    /// Turns emitted.
    pub turns:        u32,
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// The solve pipeline: route → select → schedule → simulate.
///
/// Each stage consumes only the previous stage's output.  Routing and
/// scheduling both finish before any observer callback, so a failed solve
/// never produces partial output.
///
/// Create via [`SolverBuilder`][crate::SolverBuilder].
pub struct Solver<F: RouteFinder, S: RouteSetSelector> {
    pub config: SolveConfig,

    /// The room graph.  Never mutated.
    pub graph: Graph,

    pub start: RoomId,
    pub end:   RoomId,

    /// Number of ants released from the start room.
    pub agent_count: usize,

    pub finder:   F,
    pub selector: S,
}

impl<F: RouteFinder, S: RouteSetSelector> Solver<F, S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the three planning stages and return the filled schedule.
    pub fn plan(&self) -> SolveResult<Plan> {
        let routes = self
            .finder
            .find_routes(&self.graph, self.start, self.end)
            .map_err(|e| self.named(e))?;
        debug!(
            routes   = routes.len(),
            shortest = ?routes.first().map(|r| r.room_count()),
            "routes enumerated"
        );

        let route_set = self.selector.select(&routes);
        debug!(profile = ?route_set.capacity_profile(), "route set selected");

        let schedule = AgentScheduler::schedule(route_set, self.agent_count)?;
        debug!(occupancy = ?schedule.occupancy(), "agents scheduled");

        Ok(Plan { routes_found: routes.len(), schedule })
    }

    /// Swap room ids for names in errors that reach the user.
    fn named(&self, err: GraphError) -> SolveError {
        match err {
            GraphError::NoPath { from, to }
                if self.graph.contains(from) && self.graph.contains(to) =>
            {
                SolveError::NoPath {
                    from: self.graph.room_name(from).to_owned(),
                    to:   self.graph.room_name(to).to_owned(),
                }
            }
            other => other.into(),
        }
    }

    /// Plan, then simulate, calling observer hooks along the way.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you only want the report.
    pub fn run<O: TurnObserver>(&self, observer: &mut O) -> SolveResult<SolveReport> {
        let plan = self.plan()?;
        info!(
            routes = plan.routes_found,
            lanes  = plan.schedule.lanes.len(),
            agents = self.agent_count,
            "plan ready"
        );
        observer.on_plan(&plan, &self.graph);

        let simulator = TurnSimulator::new(&plan.schedule, self.config.termination);
        let turns = simulator.turn_count();
        for line in simulator {
            observer.on_turn(&line, &self.graph);
        }
        observer.on_finish(turns);
        info!(turns, "simulation complete");

        Ok(SolveReport {
            routes_found: plan.routes_found,
            lane_profile: plan.lane_profile(),
            occupancy:    plan.schedule.occupancy(),
            turns,
        })
    }

    /// Plan and simulate, collecting every turn.
    pub fn solve(&self) -> SolveResult<Vec<TurnLine>> {
        let plan = self.plan()?;
        Ok(TurnSimulator::new(&plan.schedule, self.config.termination).collect())
    }
}
