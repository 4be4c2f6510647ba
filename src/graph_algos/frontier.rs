use std::{cmp::Ordering, collections::BinaryHeap};


/// Frontier entry
/// - for ordering we only need the priority and a way to identify the node
/// - cost is the base cost at push time, used to spot entries superseded by a relaxation
#[derive(Debug)]
pub(crate) struct FrontierEntry<C> {
    pub index: usize, // index in the node ledger
    pub cost: C, // cost to reach this node when the entry was pushed
    f_cost: C, // cost + approx remainder
    order: usize, // push sequence, breaks ties between equal f_cost
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the biggest, so both comparisons are reversed
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.order.cmp(&self.order))
    }
}
impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Ord> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Ord> Eq for FrontierEntry<C> {}


/// Discovered nodes waiting to be expanded, cheapest estimated total first
///
/// A node may have several entries when its cost was lowered while it was waiting,
/// the caller drops the stale ones on pop by comparing against the ledger.
#[derive(Debug)]
pub(crate) struct Frontier<C> {
    heap: BinaryHeap<FrontierEntry<C>>,
    pushed: usize,
}

impl<C: Ord + Copy> Frontier<C> {

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Queue a node with its current cost and estimated total cost
    pub fn push(&mut self, index: usize, cost: C, f_cost: C) {
        self.heap.push(FrontierEntry {
            index,
            cost,
            f_cost,
            order: self.pushed,
        });
        self.pushed += 1;
    }

    /// Remove the entry with the lowest estimated total cost
    pub fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
