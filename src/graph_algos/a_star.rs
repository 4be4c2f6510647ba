use super::frontier::Frontier;
use super::searchable::{EdgeListElement, SearchGraph};
use super::{CameFrom, GraphNodeMap, NodeInfo, shortest_path};

use log::{debug, trace};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Path found by the search
/// edges: transitions from start to goal, empty when start is the goal
/// cost: total cost of the path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<E, C> {
    pub edges: Vec<E>,
    pub cost: C,
}

/// Everything the search learned about the graph
/// nodes: ledger of discovered nodes with their costs
/// came_from: predecessor entry per ledger index, None for the start node
#[derive(Debug)]
pub(crate) struct SearchTree<N, E, C> {
    pub nodes: GraphNodeMap<N, C>,
    pub came_from: Vec<Option<CameFrom<E>>>,
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Finds the cheapest sequence of edges from start to goal
/// Returns None when no sequence of edges connects them
pub fn find_path<G>(graph: &G, start: G::Node, goal: G::Node) -> Option<Vec<G::Edge>>
where
    G: SearchGraph + ?Sized,
    {
    find_path_with_cost(graph, start, goal).map(|path| path.edges)
}


/// A* search returning the path along with its total cost
/// The approach has 2 requirements for the result to be optimal:
/// 1. Edge costs are never negative
/// 2. The heuristic is admissible and consistent, since expanded nodes are never reopened
pub fn find_path_with_cost<G>(graph: &G, start: G::Node, goal: G::Node) -> Option<Path<G::Edge, G::Cost>>
where
    G: SearchGraph + ?Sized,
    {

    let (mut tree, goal_index) = build_graph(graph, start, goal);
    let goal_index = goal_index?;

    let (_, goal_info) = tree.nodes.get_index(goal_index)?;
    let cost = goal_info.base_cost;
    let edges = shortest_path(&mut tree.came_from, goal_index);

    debug!("a_star: path of {} edges, cost {:?}", edges.len(), cost);
    Some(Path { edges, cost })
}


/// Traverses the graph using A* until the goal is expanded or the frontier runs dry
/// Returns the search tree along with the ledger index of the goal node, if reached
pub(crate) fn build_graph<G>(graph: &G, start: G::Node, goal: G::Node) -> (SearchTree<G::Node, G::Edge, G::Cost>, Option<usize>)
where
    G: SearchGraph + ?Sized,
    {

    // Node ledger - every discovered node with its best known cost
    // A node's index in the ledger identifies it in came_from and the frontier
    let mut nodes: GraphNodeMap<G::Node, G::Cost> = GraphNodeMap::default();

    // Predecessor table, indexed like the ledger
    // start node has no predecessor
    let mut came_from: Vec<Option<CameFrom<G::Edge>>> = Vec::new();

    // Open list
    // Discovered nodes that still need to be expanded, sorted by cost + heuristic
    let mut frontier: Frontier<G::Cost> = Frontier::new();

    let approx_remainder = graph.heuristic(&start, &goal);
    let start_index = nodes.insert_full(start, NodeInfo::new(Zero::zero(), approx_remainder)).0;
    came_from.push(None);
    frontier.push(start_index, Zero::zero(), approx_remainder);

    let mut expanded = 0usize;

    while let Some(entry) = frontier.pop() {
        let index = entry.index;

        let Some((_, info)) = nodes.get_index_mut(index) else {
            continue;
        };

        // Already expanded, or a cheaper entry for this node was pushed after this one
        if info.finalized || entry.cost > info.base_cost {
            continue;
        }
        info.finalized = true;
        let base_cost = info.base_cost;

        let Some((node, _)) = nodes.get_index(index) else {
            continue;
        };

        // Check if we've reached the goal
        if *node == goal {
            debug!("a_star: reached {:?} after expanding {} of {} discovered nodes", node, expanded, nodes.len());
            return (SearchTree { nodes, came_from }, Some(index));
        }

        trace!("a_star: expanding {:?} at cost {:?}, {} frontier entries", node, base_cost, frontier.len());
        expanded += 1;

        // loop over outgoing edges
        for EdgeListElement { edge, cost, neighbor } in graph.edges(node) {

            // cost to reach neighbor through this node
            // This is confirmed cost, not heuristic
            let candidate = base_cost + cost;

            match nodes.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let approx_remainder = graph.heuristic(e.key(), &goal);
                    let neighbor_index = e.index();
                    e.insert(NodeInfo::new(candidate, approx_remainder));
                    came_from.push(Some(CameFrom { source: index, edge }));
                    frontier.push(neighbor_index, candidate, candidate + approx_remainder);
                }
                Occupied(mut e) => {
                    let neighbor_index = e.index();
                    let info = e.get_mut();
                    if candidate >= info.base_cost {
                        // The existing path is at least as good, do nothing
                        continue;
                    }

                    // We've found a better path to this neighbor
                    info.base_cost = candidate;
                    came_from[neighbor_index] = Some(CameFrom { source: index, edge });

                    // Expanded nodes are never reopened
                    if !info.finalized {
                        frontier.push(neighbor_index, candidate, candidate + info.approx_remainder);
                    }
                }
            }
        }
    }

    debug!("a_star: no path to {:?}, frontier exhausted after expanding {} nodes", goal, expanded);
    (SearchTree { nodes, came_from }, None)
}
