#![forbid(unsafe_code)]

//! Graph container APIs used by `stemma`.
//!
//! A [`Dag`] is built once from a flat list of `[source, target]` id pairs. [`Relations`] wraps
//! it with the relations the link list does not store directly (parents, undirected
//! adjacency), computed lazily for the whole graph and cached.

pub mod error;
pub mod graph;
pub mod relations;

pub use error::{Error, Result};
pub use graph::{Dag, Link, Node, NodeIx};
pub use relations::{AdjacencySet, Relations};
