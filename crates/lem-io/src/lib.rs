//! `lem-io`: farm loader and move-log writers for the lem-in router.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | `loader`   | Text farm description → [`Farm`]                      |
//! | `text`     | [`MoveLogWriter`]: one line of `L<n>-<room>` per turn |
//! | `csv`      | [`CsvMoveWriter`]: `turn,agent,room` records          |
//! | `observer` | [`MoveObserver`]: drives any [`MoveWriter`]           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lem_io::{load_farm_file, MoveLogWriter, MoveObserver};
//!
//! let farm = load_farm_file(Path::new("file/example00.txt"))?;
//! let solver = farm.into_solver()?.config(config.clone()).build()?;
//! let mut obs = MoveObserver::new(MoveLogWriter::new(io::stdout()), &config);
//! solver.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod loader;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use crate::csv::CsvMoveWriter;
pub use error::{LoadError, LoadResult, OutputError, OutputResult};
pub use loader::{load_farm_file, load_farm_reader, Farm};
pub use observer::MoveObserver;
pub use row::MoveRow;
pub use text::MoveLogWriter;
pub use writer::MoveWriter;
