//! `MoveObserver<W>` bridges `TurnObserver` to a `MoveWriter`.

use lem_core::SolveConfig;
use lem_graph::Graph;
use lem_sim::{TurnLine, TurnObserver};

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputError, OutputResult};

/// A [`TurnObserver`] that renders every turn through a [`MoveWriter`].
///
/// `TurnObserver` methods return nothing, so writer errors are kept here.
/// After `solver.run()` returns, check with [`take_error`][Self::take_error].
pub struct MoveObserver<W: MoveWriter> {
    writer:     W,
    config:     SolveConfig,
    last_error: Option<OutputError>,
}

impl<W: MoveWriter> MoveObserver<W> {
    /// `config` supplies the agent name prefix.
    pub fn new(writer: W, config: &SolveConfig) -> Self {
        Self { writer, config: config.clone(), last_error: None }
    }

    /// First write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: MoveWriter> TurnObserver for MoveObserver<W> {
    fn on_turn(&mut self, line: &TurnLine, graph: &Graph) {
        if self.last_error.is_some() {
            return;
        }
        let turn = line.turn.0 + 1;
        let rows: Vec<MoveRow> = line
            .moves
            .iter()
            .map(|m| MoveRow {
                turn,
                agent: self.config.agent_name(m.agent),
                room:  graph.room_name(m.room).to_owned(),
            })
            .collect();
        let result = self.writer.write_turn(turn, &rows);
        self.store_err(result);
    }

    fn on_finish(&mut self, _turns: u32) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
