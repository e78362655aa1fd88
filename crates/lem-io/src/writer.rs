//! The `MoveWriter` trait implemented by all move-log backends.

use crate::{MoveRow, OutputResult};

/// Sink for the rows of one turn at a time.
///
/// Errors are stored by [`MoveObserver`][crate::MoveObserver] and retrieved
/// with its `take_error`.
pub trait MoveWriter {
    /// Write every row of one turn.  `rows` may be empty.
    fn write_turn(&mut self, turn: u32, rows: &[MoveRow]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Absent sink, for optional outputs such as `--csv`.
impl<W: MoveWriter> MoveWriter for Option<W> {
    fn write_turn(&mut self, turn: u32, rows: &[MoveRow]) -> OutputResult<()> {
        match self {
            Some(w) => w.write_turn(turn, rows),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None => Ok(()),
        }
    }
}

/// Fan out to two sinks, first one first.
impl<A: MoveWriter, B: MoveWriter> MoveWriter for (A, B) {
    fn write_turn(&mut self, turn: u32, rows: &[MoveRow]) -> OutputResult<()> {
        self.0.write_turn(turn, rows)?;
        self.1.write_turn(turn, rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
