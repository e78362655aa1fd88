//! Plain data row written by move-log backends.

/// One agent standing in one room on one turn, with names already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    /// 1-based, matching the line number of the text log.
    pub turn:  u32,
    pub agent: String,
    pub room:  String,
}
