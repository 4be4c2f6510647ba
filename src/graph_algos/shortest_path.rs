/// Predecessor entry - the transition that explains a node's current base cost
/// source: index of the predecessor node in the node ledger
/// edge: caller's edge value taken from source to this node
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CameFrom<E> {
    pub source: usize,
    pub edge: E,
}


/// Construct the edge sequence from the start node to the goal node
/// Walks the predecessor table backwards from the goal and returns the edges in start -> goal order
/// came_from: predecessor entry per ledger index, None for the start node
/// goal_index: index of the goal node in the node ledger
///
/// Entries are moved out as they are visited, so the walk ends even if the table holds a cycle.
pub(crate) fn shortest_path<E>(came_from: &mut [Option<CameFrom<E>>], goal_index: usize) -> Vec<E> {

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while let Some(step) = came_from.get_mut(current_index).and_then(Option::take) {
        path.push(step.edge);
        current_index = step.source;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
