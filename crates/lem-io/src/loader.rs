//! Farm loader: parses the plain-text farm description into a [`Farm`].
//!
//! # Format
//!
//! ```text
//! 3            agent count, first non-empty line
//! ##start
//! 0 1 0        room line: name x y (coordinates ignored)
//! ##end
//! 2 5 0
//! 1 3 0
//! 0-1          tunnel
//! 1-2
//! ```
//!
//! The line after `##start` / `##end` names the room by its first token.  Any
//! other line containing `-` is a tunnel between its first two `-`-separated
//! fields.  Everything else is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use lem_core::RoomId;
use lem_graph::{AnchorGreedySelector, BfsRouteFinder, Graph, GraphBuilder};
use lem_sim::{SolverBuilder, TopologyError};

use crate::{LoadError, LoadResult};

const START_MARKER: &str = "##start";
const END_MARKER:   &str = "##end";

/// A parsed farm: graph, endpoints and the raw agent count.
#[derive(Debug, Clone)]
pub struct Farm {
    pub graph: Graph,
    pub start: RoomId,
    pub end:   RoomId,

    /// As written in the file.  Zero or negative is rejected by
    /// [`Farm::into_solver`].
    pub agent_count: i64,
}

impl Farm {
    /// Hand the farm to a [`SolverBuilder`] with the default stages.
    ///
    /// Fails with [`LoadError::Topology`] unless the agent count is positive.
    pub fn into_solver(self) -> LoadResult<SolverBuilder<BfsRouteFinder, AnchorGreedySelector>> {
        let count = usize::try_from(self.agent_count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(TopologyError::NoAgents(self.agent_count))?;
        Ok(SolverBuilder::new(self.graph, self.start, self.end, count))
    }
}

/// Load a farm from a file on disk.
pub fn load_farm_file(path: &Path) -> LoadResult<Farm> {
    let file = File::open(path)?;
    load_farm_reader(file)
}

/// Load a farm from any byte source.
pub fn load_farm_reader<R: Read>(reader: R) -> LoadResult<Farm> {
    let lines = BufReader::new(reader)
        .lines()
        .collect::<Result<Vec<_>, _>>()?;
    parse_farm(&lines)
}

fn parse_farm(lines: &[String]) -> LoadResult<Farm> {
    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return Err(LoadError::Parse { line: 1, reason: "empty farm description".into() });
    };
    let agent_count = parse_agent_count(&lines[first], first + 1)?;

    let mut builder = GraphBuilder::new();
    let mut start = None;
    let mut end = None;

    for (i, raw) in lines.iter().enumerate().skip(first + 1) {
        let line = raw.trim_end();
        match line {
            START_MARKER => start = marked_room(lines, i).map(|name| builder.room(name)),
            END_MARKER => end = marked_room(lines, i).map(|name| builder.room(name)),
            _ if line.contains('-') => {
                let (a, b) = tunnel_ends(line, i + 1)?;
                builder.add_tunnel(a, b);
            }
            _ if is_room_line(line) => {
                if let Some(name) = line.split_whitespace().next() {
                    builder.room(name);
                }
            }
            _ => {}
        }
    }

    let start = start.ok_or(LoadError::MissingMarker(START_MARKER))?;
    let end = end.ok_or(LoadError::MissingMarker(END_MARKER))?;
    let graph = builder.build();
    debug!(
        rooms   = graph.room_count(),
        tunnels = graph.tunnel_count(),
        agents  = agent_count,
        "farm loaded"
    );

    Ok(Farm { graph, start, end, agent_count })
}

fn parse_agent_count(line: &str, line_no: usize) -> LoadResult<i64> {
    line.trim().parse().map_err(|_| LoadError::Parse {
        line:   line_no,
        reason: format!("agent count {:?} is not an integer", line.trim()),
    })
}

/// First token of the line following a marker.
fn marked_room(lines: &[String], marker: usize) -> Option<&str> {
    lines.get(marker + 1)?.split_whitespace().next()
}

fn tunnel_ends(line: &str, line_no: usize) -> LoadResult<(&str, &str)> {
    let mut fields = line.split('-');
    let a = fields.next().unwrap_or_default();
    let b = fields.next().unwrap_or_default();
    if a.is_empty() || b.is_empty() {
        return Err(LoadError::Parse {
            line:   line_no,
            reason: format!("tunnel {line:?} has an empty room name"),
        });
    }
    Ok((a, b))
}

/// `name x y`, not a comment or command.
fn is_room_line(line: &str) -> bool {
    !line.starts_with('#') && line.split_whitespace().count() == 3
}
