//! Solve configuration.
//!
//! Everything here is cosmetic or opt-in: the default [`SolveConfig`]
//! reproduces the classic `lem-in` output exactly (`L1`, `L2`, … agent names,
//! stop as soon as the last released ant reaches the end room).

use std::str::FromStr;

use crate::{AgentId, LemError, LemResult};

/// When the turn simulator stops emitting turns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationRule {
    /// Stop after the turn in which the last-created agent reaches the end
    /// room.  Agents on a slower lane may still be in flight at that point
    /// and are not shown arriving.
    #[default]
    LastAssigned,

    /// Keep going until every agent has reached the end room.
    AllArrived,
}

impl FromStr for TerminationRule {
    type Err = LemError;

    fn from_str(s: &str) -> LemResult<Self> {
        match s.trim() {
            "last-assigned" => Ok(Self::LastAssigned),
            "all-arrived"   => Ok(Self::AllArrived),
            other => Err(LemError::Parse(format!(
                "invalid termination rule {other:?}: expected \"last-assigned\" or \"all-arrived\""
            ))),
        }
    }
}

/// Top-level solve configuration.
///
/// Typically assembled from command-line arguments by the application crate
/// and passed to the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveConfig {
    /// Prefix prepended to the 1-based agent number in the move log.
    /// Default: `"L"`.
    pub agent_prefix: String,

    /// Which agent's arrival ends the simulation.
    pub termination: TerminationRule,
}

impl SolveConfig {
    /// Reject prefixes that would make the move log ambiguous.
    ///
    /// The prefix must be non-empty and may not contain `-` (the agent/room
    /// separator) or whitespace (the token separator).
    pub fn validate(&self) -> LemResult<()> {
        if self.agent_prefix.is_empty() {
            return Err(LemError::Config("agent prefix must not be empty".into()));
        }
        if self
            .agent_prefix
            .chars()
            .any(|c| c == '-' || c.is_whitespace())
        {
            return Err(LemError::Config(format!(
                "agent prefix {:?} may not contain '-' or whitespace",
                self.agent_prefix
            )));
        }
        Ok(())
    }

    /// Display name of `agent` in the move log, e.g. `L1` for `AgentId(0)`.
    pub fn agent_name(&self, agent: AgentId) -> String {
        format!("{}{}", self.agent_prefix, agent.0 as u64 + 1)
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            agent_prefix: "L".to_owned(),
            termination:  TerminationRule::default(),
        }
    }
}
