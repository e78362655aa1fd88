//! Fluent builder for constructing a [`Solver`].

use lem_core::{RoomId, SolveConfig};
use lem_graph::{AnchorGreedySelector, BfsRouteFinder, Graph, GraphError, RouteFinder, RouteSetSelector};

use crate::{Solver, SolveResult, TopologyError};

/// Fluent builder for [`Solver<F, S>`].
///
/// # Required inputs
///
/// - [`Graph`]: from [`lem_graph::GraphBuilder`] or the farm loader
/// - start and end [`RoomId`]s
/// - the agent count
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `.config(c)`    | `SolveConfig::default()`   |
/// | `.finder(f)`    | `BfsRouteFinder`           |
/// | `.selector(s)`  | `AnchorGreedySelector`     |
///
/// # Example
///
/// ```rust,ignore
/// let solver = SolverBuilder::new(graph, start, end, 10)
///     .config(config)
///     .build()?;
/// solver.run(&mut NoopObserver)?;
/// ```
pub struct SolverBuilder<F: RouteFinder, S: RouteSetSelector> {
    graph:       Graph,
    start:       RoomId,
    end:         RoomId,
    agent_count: usize,
    config:      Option<SolveConfig>,
    finder:      F,
    selector:    S,
}

impl SolverBuilder<BfsRouteFinder, AnchorGreedySelector> {
    /// Create a builder with all required inputs and the default stages.
    pub fn new(graph: Graph, start: RoomId, end: RoomId, agent_count: usize) -> Self {
        Self {
            graph,
            start,
            end,
            agent_count,
            config:   None,
            finder:   BfsRouteFinder,
            selector: AnchorGreedySelector,
        }
    }
}

impl<F: RouteFinder, S: RouteSetSelector> SolverBuilder<F, S> {
    pub fn config(mut self, config: SolveConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the route enumeration stage.
    pub fn finder<F2: RouteFinder>(self, finder: F2) -> SolverBuilder<F2, S> {
        SolverBuilder {
            graph:       self.graph,
            start:       self.start,
            end:         self.end,
            agent_count: self.agent_count,
            config:      self.config,
            finder,
            selector:    self.selector,
        }
    }

    /// Replace the route-set selection stage.
    pub fn selector<S2: RouteSetSelector>(self, selector: S2) -> SolverBuilder<F, S2> {
        SolverBuilder {
            graph:       self.graph,
            start:       self.start,
            end:         self.end,
            agent_count: self.agent_count,
            config:      self.config,
            finder:      self.finder,
            selector,
        }
    }

    /// Validate inputs and return a ready-to-run [`Solver`].
    ///
    /// Fails with [`TopologyError`] when start and end coincide or there are
    /// no agents; no route is computed in that case.
    pub fn build(self) -> SolveResult<Solver<F, S>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        for room in [self.start, self.end] {
            if !self.graph.contains(room) {
                return Err(GraphError::RoomNotFound(room).into());
            }
        }
        if self.start == self.end {
            let name = self.graph.room_name(self.start).to_owned();
            return Err(TopologyError::StartIsEnd(name).into());
        }
        if self.agent_count == 0 {
            return Err(TopologyError::NoAgents(0).into());
        }

        Ok(Solver {
            config,
            graph:       self.graph,
            start:       self.start,
            end:         self.end,
            agent_count: self.agent_count,
            finder:      self.finder,
            selector:    self.selector,
        })
    }
}
