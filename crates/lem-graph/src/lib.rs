//! `lem-graph`: room graph, route enumeration, and route-set selection.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`graph`]    | `Graph` (interned names + CSR adjacency), `GraphBuilder`     |
//! | [`route`]    | `Route`, `RouteSet`                                          |
//! | [`finder`]   | `RouteFinder` trait, `BfsRouteFinder`                        |
//! | [`selector`] | `RouteSetSelector` trait, `AnchorGreedySelector`             |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Evaluates selector anchors on the Rayon pool.             |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `lem-core` types.    |

pub mod error;
pub mod finder;
pub mod graph;
pub mod route;
pub mod selector;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use finder::{BfsRouteFinder, RouteFinder};
pub use graph::{Graph, GraphBuilder};
pub use route::{Route, RouteSet};
pub use selector::{AnchorGreedySelector, RouteSetSelector};
