//! CSV move-log backend: one `turn,agent,room` record per in-flight agent.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputResult};

pub struct CsvMoveWriter {
    moves:    Writer<File>,
    finished: bool,
}

impl CsvMoveWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut moves = Writer::from_path(path)?;
        moves.write_record(["turn", "agent", "room"])?;
        Ok(Self { moves, finished: false })
    }
}

impl MoveWriter for CsvMoveWriter {
    fn write_turn(&mut self, turn: u32, rows: &[MoveRow]) -> OutputResult<()> {
        let turn = turn.to_string();
        for row in rows {
            self.moves.write_record([turn.as_str(), &row.agent, &row.room])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        Ok(())
    }
}
