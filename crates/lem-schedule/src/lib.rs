//! `lem-schedule`: lanes and agent assignment.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`lane`]      | `Lane`, `Assignment`, `Schedule`                         |
//! | [`scheduler`] | `AgentScheduler` (rolling-window load balancer)          |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Load model (summary)
//!
//! Each lane carries an estimate of when its last agent would arrive:
//!
//! ```text
//! load = route_len (rooms, start and end included) + assigned agents
//! ```
//!
//! Agents are placed one at a time by comparing the loads of a sliding pair
//! of adjacent lanes against lane 0.  See [`scheduler`] for the exact rule.

pub mod error;
pub mod lane;
pub mod scheduler;


pub use error::{ScheduleError, ScheduleResult};
pub use lane::{Assignment, Lane, Schedule};
pub use scheduler::AgentScheduler;
