//! `TurnSimulator`: derives every agent's room on every turn.
//!
//! # Position rule
//!
//! On turn `t` the agent at rank `k` of a lane whose span (rooms after the
//! start, end included) has `m` rooms stands on span index `t - k`, provided
//! `0 <= t - k < m`.  Before that it is still waiting in the start room; after
//! that it has finished.  Both cases are omitted from the turn's line.
//!
//! Two agents of the same lane are always `k1 - k2 != 0` rooms apart, and
//! different lanes share no interior room, so no interior room ever holds two
//! agents.
//!
//! # Termination
//!
//! See [`TerminationRule`].  The final turn is known up front from the
//! schedule, so the simulator is a plain [`Iterator`] over [`TurnLine`]s.

use lem_core::{AgentId, RoomId, TerminationRule, Turn};
use lem_schedule::{Lane, Schedule};

// ── TurnLine ──────────────────────────────────────────────────────────────────

/// One agent standing in one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub agent: AgentId,
    pub room:  RoomId,
}

/// Every in-flight agent on one turn.
///
/// Ordered lane by lane (route-set order), and within a lane by ascending
/// rank, which is the most advanced agent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnLine {
    pub turn:  Turn,
    pub moves: Vec<Move>,
}

impl TurnLine {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Room of `agent` on this turn, if it is in flight.
    pub fn room_of(&self, agent: AgentId) -> Option<RoomId> {
        self.moves.iter().find(|m| m.agent == agent).map(|m| m.room)
    }
}

/// Span index of the agent at `rank` on `turn`, or `None` if it is not in
/// flight.
#[inline]
pub fn span_index(turn: Turn, rank: u32, span_len: usize) -> Option<usize> {
    turn.offset_from(rank).filter(|&i| i < span_len)
}

// ── TurnSimulator ─────────────────────────────────────────────────────────────

/// Mutable simulation state, kept apart from the read-only schedule.
#[derive(Debug, Clone, Copy, Default)]
struct SimState {
    turn: Turn,
}

/// Iterator over the turns of a filled schedule.
pub struct TurnSimulator<'a> {
    schedule:   &'a Schedule,
    final_turn: Option<Turn>,
    state:      SimState,
}

impl<'a> TurnSimulator<'a> {
    pub fn new(schedule: &'a Schedule, rule: TerminationRule) -> Self {
        let final_turn = match rule {
            TerminationRule::LastAssigned => schedule
                .last_agent()
                .and_then(|agent| schedule.arrival_turn(agent)),
            TerminationRule::AllArrived => schedule
                .assignments
                .iter()
                .map(|a| schedule.lane(a.lane).arrival_turn(a.rank))
                .max(),
        };
        Self { schedule, final_turn, state: SimState::default() }
    }

    /// The last turn that will be emitted, or `None` for an empty schedule.
    pub fn final_turn(&self) -> Option<Turn> {
        self.final_turn
    }

    /// Total number of turns this simulator emits.
    pub fn turn_count(&self) -> u32 {
        self.final_turn.map_or(0, |t| t.0 + 1)
    }

    /// `true` once the final turn has been emitted.
    pub fn is_complete(&self) -> bool {
        self.final_turn.is_none_or(|last| self.state.turn > last)
    }

    /// Positions on `turn`, independent of the iterator's progress.
    pub fn line_at(&self, turn: Turn) -> TurnLine {
        let mut moves = Vec::new();
        for lane in &self.schedule.lanes {
            push_lane_moves(lane, turn, &mut moves);
        }
        TurnLine { turn, moves }
    }
}

fn push_lane_moves(lane: &Lane, turn: Turn, out: &mut Vec<Move>) {
    let span = lane.span();
    let agents = lane.agents();
    if agents.is_empty() {
        return;
    }

    // Only ranks in [t - m + 1, t] can be in flight.
    let lo = (turn.0 as usize + 1).saturating_sub(span.len());
    let hi = (turn.0 as usize).min(agents.len() - 1);
    for rank in lo..=hi {
        if let Some(i) = span_index(turn, rank as u32, span.len()) {
            out.push(Move { agent: agents[rank], room: span[i] });
        }
    }
}

impl Iterator for TurnSimulator<'_> {
    type Item = TurnLine;

    fn next(&mut self) -> Option<TurnLine> {
        if self.is_complete() {
            return None;
        }
        let line = self.line_at(self.state.turn);
        self.state.turn = self.state.turn.next();
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.final_turn {
            Some(last) if self.state.turn <= last => (last.0 - self.state.turn.0 + 1) as usize,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TurnSimulator<'_> {}
