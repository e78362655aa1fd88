//! `lem-sim`: turn simulator and solve pipeline for the lem-in router.
//!
//! # Pipeline
//!
//! ```text
//! ① Route    : RouteFinder enumerates every simple start→end route.
//! ② Select   : RouteSetSelector keeps an interior-disjoint subset.
//! ③ Schedule : AgentScheduler places each ant on one lane.
//! ④ Simulate : TurnSimulator yields one TurnLine per turn until the
//!               termination rule is met.
//! ```
//!
//! ① to ③ run inside [`Solver::plan`]; any failure there aborts the solve
//! before a single turn is emitted.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates selector anchors on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lem_graph::GraphBuilder;
//! use lem_sim::{SolverBuilder, TurnCollector};
//!
//! let mut b = GraphBuilder::new();
//! let (start, _) = b.add_tunnel("0", "1");
//! let (_, end) = b.add_tunnel("1", "2");
//! let solver = SolverBuilder::new(b.build(), start, end, 1).build()?;
//! let mut turns = TurnCollector::default();
//! solver.run(&mut turns)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod simulator;
pub mod solver;


pub use builder::SolverBuilder;
pub use error::{SolveError, SolveResult, TopologyError};
pub use observer::{NoopObserver, TurnCollector, TurnObserver};
pub use simulator::{Move, TurnLine, TurnSimulator};
pub use solver::{Plan, SolveReport, Solver};
