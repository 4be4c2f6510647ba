//! Generic A* pathfinding over caller-defined graphs.
//!
//! Describe a graph by implementing [`SearchGraph`] (or build one from closures
//! with [`from_fn`]), then ask it for the cheapest sequence of edges between two
//! nodes with [`SearchGraph::find_path`].

mod collections;
pub mod graph_algos;

pub use graph_algos::a_star::{Path, find_path, find_path_with_cost};
pub use graph_algos::searchable::{EdgeListElement, SearchFn, SearchGraph, from_fn};
