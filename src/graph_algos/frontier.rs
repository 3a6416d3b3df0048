use std::cmp::Ordering;


/// Entry in the priority frontier
/// - for ordering we only need the priority and a way to identify the node
/// - index points into the search's node map
/// - BinaryHeap sorts biggest to smallest, so the comparison is reversed
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub index: usize,
    pub cost: T,   // accumulated cost from the start
    pub f_cost: T, // priority - cost + heuristic, equal to cost for Dijkstra
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // equal f_cost: prefer the entry that is further along
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| self.cost.cmp(&other.cost))
    }
}
impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Ord> Eq for Node<T> {}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_pops_smallest_f_cost_first() {
        let mut heap = BinaryHeap::new();
        heap.push(Node { index: 0, cost: 1, f_cost: 9 });
        heap.push(Node { index: 1, cost: 2, f_cost: 3 });
        heap.push(Node { index: 2, cost: 0, f_cost: 5 });

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|n| n.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_prefer_larger_cost() {
        let mut heap = BinaryHeap::new();
        heap.push(Node { index: 0, cost: 1, f_cost: 4 });
        heap.push(Node { index: 1, cost: 3, f_cost: 4 });
        assert_eq!(heap.pop().map(|n| n.index), Some(1));
    }
}
