//! Shortest travel times between stations of a transit network.
//!
//! Connection rows are parsed into a symmetric weighted [`Graph`], which is then
//! queried with [`find_shortest_path`] as many times as needed.

pub mod config;
pub mod encoding;
pub mod error;
pub mod graph;
pub mod loader;
pub mod path;
pub mod planner;
pub mod query;
pub mod record;
pub mod search;

pub use config::LoaderConfig;
pub use error::{LoadError, SearchError};
pub use graph::Graph;
pub use loader::build_graph;
pub use path::Route;
pub use planner::find_shortest_path;
