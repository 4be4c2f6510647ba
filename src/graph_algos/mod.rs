pub mod a_star;
pub mod searchable;
mod frontier;
mod shortest_path;

use shortest_path::{CameFrom, shortest_path};

use crate::collections::FxIndexMap;

/// Per-node bookkeeping kept by the search
/// base_cost: lowest cost found so far from the start node
/// approx_remainder: heuristic estimate to the goal, computed once at discovery
/// finalized: node has been popped from the frontier and expanded
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NodeInfo<C> {
    pub base_cost: C,
    pub approx_remainder: C,
    pub finalized: bool,
}

impl<C> NodeInfo<C> {
    pub fn new(base_cost: C, approx_remainder: C) -> Self {
        Self { base_cost, approx_remainder, finalized: false }
    }
}

/// Type alias for the node ledger used by the search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The index of a node in the map is its id in the predecessor table and the frontier
pub(crate) type GraphNodeMap<N, C> = FxIndexMap<N, NodeInfo<C>>;
