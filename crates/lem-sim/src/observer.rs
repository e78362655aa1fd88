//! Solver observer trait for move-log output and data collection.

use lem_graph::Graph;

use crate::{Plan, TurnLine};

/// Callbacks invoked by [`Solver::run`][crate::Solver::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  No callback fires until routing and
/// scheduling have both succeeded.
///
/// # Example: turn counter
///
/// ```rust,ignore
/// struct Counter(u32);
///
/// impl TurnObserver for Counter {
///     fn on_turn(&mut self, _line: &TurnLine, _graph: &Graph) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called once, after scheduling and before the first turn.
    fn on_plan(&mut self, _plan: &Plan, _graph: &Graph) {}

    /// Called for every emitted turn, in order.
    fn on_turn(&mut self, _line: &TurnLine, _graph: &Graph) {}

    /// Called once after the final turn.  `turns` is the number emitted.
    fn on_finish(&mut self, _turns: u32) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}

/// A [`TurnObserver`] that keeps every turn in memory.
#[derive(Debug, Default)]
pub struct TurnCollector {
    pub lines: Vec<TurnLine>,
}

impl TurnObserver for TurnCollector {
    fn on_turn(&mut self, line: &TurnLine, _graph: &Graph) {
        self.lines.push(line.clone());
    }
}
