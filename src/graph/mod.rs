// src/graph/mod.rs
//! Graph Builder: turns raw edge records into a label-keyed incidence graph.

pub mod builder;
pub mod types;

pub use builder::resolve;
pub use types::{Direction, Edge, EdgeRecord, Graph};
