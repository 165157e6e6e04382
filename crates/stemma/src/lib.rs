#![forbid(unsafe_code)]

//! Generation-layered layout for genealogical graphs.
//!
//! The input is a flat list of `[source, target]` links between member nodes (people) and
//! family nodes (unions connecting parents to their children). [`layout`] assigns every node
//! an integer generation and an x coordinate inside it, so that parents, partners and
//! siblings cluster without overlapping.
//!
//! ```
//! use std::collections::BTreeMap;
//! use stemma::{FamilyGraph, LayoutOptions, layout};
//!
//! let links = [("A", "F1"), ("B", "F1"), ("F1", "C")];
//! let graph = FamilyGraph::from_links(&links, &BTreeMap::new()).unwrap();
//! let result = layout(&graph, &LayoutOptions::default()).unwrap();
//! let c = graph.find("C").unwrap();
//! assert_eq!(result.generation(c), 2);
//! ```

pub use stemma_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod age;
pub mod align;
pub mod error;
pub mod family;
pub mod generation;
pub mod grouping;
pub mod model;
pub mod pipeline;
pub mod relax;
pub mod validate;

pub use error::{Error, Result};
pub use family::{FamilyData, FamilyGraph, MemberRecord, NodeKind};
pub use graph::NodeIx;
pub use model::{LayoutOptions, NodeLayout, NodeSize, Point};
pub use pipeline::{FamilyLayout, layout};
