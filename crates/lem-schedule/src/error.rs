use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("cannot schedule agents on an empty route set")]
    NoLanes,

    #[error("{0} agents exceed the supported maximum")]
    TooManyAgents(usize),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
