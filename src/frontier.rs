//! Min-priority queue over tentative distances. Ordering is fully determined by the cost and an
//! insertion sequence number, so equal-cost entries pop according to an explicit [TieBreak] rule
//! instead of whatever order the heap happens to leave them in.
use core::fmt;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// How entries with equal cost are ordered relative to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The entry pushed first pops first.
    #[default]
    Fifo,
    /// The entry pushed last pops first.
    Lifo,
}

struct FrontierEntry<C, N> {
    cost: C,
    seq: u64,
    node: N,
}

impl<C: PartialEq, N> Eq for FrontierEntry<C, N> {}

impl<C: PartialEq, N> PartialEq for FrontierEntry<C, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.seq == other.seq
    }
}

impl<C: Ord, N> PartialOrd for FrontierEntry<C, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord, N> Ord for FrontierEntry<C, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest cost must compare greatest. For Lifo the
        // sequence number is stored inverted by push.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Frontier<C, N> {
    heap: BinaryHeap<FrontierEntry<C, N>>,
    next_seq: u64,
    tie_break: TieBreak,
}

impl<C: Ord + Copy, N> Frontier<C, N> {
    pub fn new(tie_break: TieBreak) -> Frontier<C, N> {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
            tie_break,
        }
    }
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
    /// Inserts an entry. The same node may be pushed several times; stale entries are left for the
    /// consumer to discard when they pop.
    pub fn push(&mut self, cost: C, node: N) {
        let n = self.next_seq;
        self.next_seq += 1;
        let seq = match self.tie_break {
            TieBreak::Fifo => n,
            TieBreak::Lifo => u64::MAX - n,
        };
        self.heap.push(FrontierEntry { cost, seq, node });
    }
    /// Removes the entry with the smallest cost, ties resolved by the [TieBreak] rule.
    pub fn pop_min(&mut self) -> Option<(C, N)> {
        self.heap.pop().map(|e| (e.cost, e.node))
    }
    pub fn peek_cost(&self) -> Option<C> {
        self.heap.peek().map(|e| e.cost)
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<C: Zero + Ord + Copy, N> Frontier<C, N> {
    /// Pushes a source node at zero cost.
    pub fn seed(&mut self, node: N) {
        self.push(Zero::zero(), node);
    }
}

impl<C, N> fmt::Debug for Frontier<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Frontier")
            .field("len", &self.heap.len())
            .field("tie_break", &self.tie_break)
            .finish()
    }
}

impl<C: Ord + Copy, N> Default for Frontier<C, N> {
    fn default() -> Self {
        Frontier::new(TieBreak::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<N>(frontier: &mut Frontier<u32, N>) -> Vec<(u32, N)> {
        std::iter::from_fn(|| frontier.pop_min()).collect()
    }

    #[test]
    fn pops_in_cost_order() {
        let mut frontier = Frontier::default();
        for (c, n) in [(5, 'a'), (1, 'b'), (3, 'c'), (0, 'd')] {
            frontier.push(c, n);
        }
        assert_eq!(frontier.peek_cost(), Some(0));
        assert_eq!(drain(&mut frontier), vec![(0, 'd'), (1, 'b'), (3, 'c'), (5, 'a')]);
        assert!(frontier.pop_min().is_none());
    }

    #[test]
    fn fifo_ties_pop_in_insertion_order() {
        let mut frontier = Frontier::new(TieBreak::Fifo);
        for n in ['a', 'b', 'c'] {
            frontier.push(2u32, n);
        }
        frontier.push(1, 'z');
        let order = drain(&mut frontier).into_iter().map(|(_, n)| n).collect::<String>();
        assert_eq!(order, "zabc");
    }

    #[test]
    fn lifo_ties_pop_in_reverse_insertion_order() {
        let mut frontier = Frontier::new(TieBreak::Lifo);
        for n in ['a', 'b', 'c'] {
            frontier.push(2u32, n);
        }
        frontier.push(3, 'z');
        let order = drain(&mut frontier).into_iter().map(|(_, n)| n).collect::<String>();
        assert_eq!(order, "cbaz");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut frontier = Frontier::default();
        frontier.seed('s');
        frontier.push(4u32, 'x');
        frontier.push(2, 'x');
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec![(0, 's'), (2, 'x'), (4, 'x')]);
    }

    #[test]
    fn clear_resets_sequence() {
        let mut frontier = Frontier::new(TieBreak::Fifo);
        frontier.push(1u32, 'a');
        frontier.clear();
        assert!(frontier.is_empty());
        frontier.push(1, 'b');
        frontier.push(1, 'c');
        assert_eq!(frontier.pop_min(), Some((1, 'b')));
    }
}
