//! Text move log: one line per turn, `L<n>-<room>` tokens separated by spaces.

use std::io::{BufWriter, Write};

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputError, OutputResult};

/// Writes the classic move log to any [`Write`] sink (usually stdout).
pub struct MoveLogWriter<W: Write> {
    out:      BufWriter<W>,
    finished: bool,
}

impl<W: Write> MoveLogWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out), finished: false }
    }

    /// Flush and return the inner sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.out.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> MoveWriter for MoveLogWriter<W> {
    fn write_turn(&mut self, _turn: u32, rows: &[MoveRow]) -> OutputResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "{}-{}", row.agent, row.room)?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
