use super::a_star::{self, Path};

use std::{fmt::Debug, hash::Hash, marker::PhantomData};
use num_traits::Zero;


/// One outgoing transition from a node
/// edge: caller's value describing the move, handed back in the result path
/// cost: cost of taking this edge, must not be negative
/// neighbor: node reached by the edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListElement<E, C, N> {
    pub edge: E,
    pub cost: C,
    pub neighbor: N,
}

impl<E, C, N> EdgeListElement<E, C, N> {
    pub fn new(edge: E, cost: C, neighbor: N) -> Self {
        Self { edge, cost, neighbor }
    }
}


/// Graph that can be searched with A*
///
/// Implementors describe the graph through two queries and get
/// [`find_path`](SearchGraph::find_path) for free.
/// The search gives optimal results when:
/// 1. edge costs are never negative
/// 2. the heuristic never overestimates the remaining cost and is consistent across edges
pub trait SearchGraph {
    type Node: Eq + Hash + Debug;
    type Edge;
    type Cost: Zero + Ord + Copy + Debug;
    type EdgeList: IntoIterator<Item = EdgeListElement<Self::Edge, Self::Cost, Self::Node>>;

    /// Estimated cost from `from` to `to`, zero when they are the same node
    fn heuristic(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost;

    /// Outgoing transitions of `at`, in any order
    /// Must return the same transitions every time it is asked about the same node.
    fn edges(&self, at: &Self::Node) -> Self::EdgeList;

    /// Cheapest sequence of edges leading from `start` to `goal`
    /// Returns None when the goal cannot be reached, and an empty path when start is the goal
    fn find_path(&self, start: Self::Node, goal: Self::Node) -> Option<Vec<Self::Edge>> {
        a_star::find_path(self, start, goal)
    }

    /// Same as [`find_path`](SearchGraph::find_path), also reporting the total cost of the path
    fn find_path_with_cost(&self, start: Self::Node, goal: Self::Node) -> Option<Path<Self::Edge, Self::Cost>> {
        a_star::find_path_with_cost(self, start, goal)
    }
}


/// Graph described by a pair of closures, see [`from_fn`]
pub struct SearchFn<H, F, I> {
    heuristic_fn: H,
    edges_fn: F,
    _edges: PhantomData<fn() -> I>,
}

/// Build a searchable graph from closures
/// heuristic_fn: (from, to) -> estimated cost
/// edges_fn: node -> iterator of outgoing transitions
pub fn from_fn<N, E, C, H, F, I>(heuristic_fn: H, edges_fn: F) -> SearchFn<H, F, I>
where
    H: Fn(&N, &N) -> C,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = EdgeListElement<E, C, N>>,
    {
    SearchFn {
        heuristic_fn,
        edges_fn,
        _edges: PhantomData,
    }
}

impl<N, E, C, H, F, I> SearchGraph for SearchFn<H, F, I>
where
    N: Eq + Hash + Debug,
    C: Zero + Ord + Copy + Debug,
    H: Fn(&N, &N) -> C,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = EdgeListElement<E, C, N>>,
    {
    type Node = N;
    type Edge = E;
    type Cost = C;
    type EdgeList = I;

    fn heuristic(&self, from: &N, to: &N) -> C {
        (self.heuristic_fn)(from, to)
    }

    fn edges(&self, at: &N) -> I {
        (self.edges_fn)(at)
    }
}
