//! Priority frontier for the cost-aware searches.
//!
//! An indexed binary min-heap over `(priority, cell)` entries. A
//! position index keyed by cell gives O(log n) decrease-key, so
//! re-offering a cell at a better priority updates its entry in place
//! instead of inserting a duplicate.

use std::cmp::Ordering;
use std::collections::HashMap;

use wayfind_core::Point;

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    cell: Point,
}

impl Entry {
    /// Heap order: lowest priority first. Ties between distinct cells
    /// fall back to the row-major `Point` order, so selection is fully
    /// deterministic (note: not FIFO).
    fn before(&self, other: &Entry) -> bool {
        match self.priority.total_cmp(&other.priority) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.cell < other.cell,
        }
    }
}

/// Indexed min-priority frontier over grid cells.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: Vec<Entry>,
    index: HashMap<Point, usize>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued cells.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all entries, keeping allocations for reuse.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Offer `cell` at `priority`.
    ///
    /// If the cell is already queued at an equal-or-better priority the
    /// existing entry is kept untouched. A strictly better priority
    /// decreases the queued entry's key in place. An unqueued cell is
    /// inserted. Returns whether the frontier changed.
    pub fn offer(&mut self, cell: Point, priority: f64) -> bool {
        if let Some(&i) = self.index.get(&cell) {
            if self.heap[i].priority <= priority {
                return false;
            }
            self.heap[i].priority = priority;
            self.sift_up(i);
        } else {
            let i = self.heap.len();
            self.heap.push(Entry { priority, cell });
            self.sift_up(i);
        }
        true
    }

    /// Remove and return the best (lowest-priority) entry.
    pub fn pop(&mut self) -> Option<(f64, Point)> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        let top = self.heap.pop()?;
        self.index.remove(&top.cell);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((top.priority, top.cell))
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].before(&self.heap[b])
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.index.insert(self.heap[a].cell, a);
        self.index.insert(self.heap[b].cell, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        self.index.insert(self.heap[i].cell, i);
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap_entries(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        self.index.insert(self.heap[i].cell, i);
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < self.heap.len() && self.less(left, best) {
                best = left;
            }
            if right < self.heap.len() && self.less(right, best) {
                best = right;
            }
            if best == i {
                break;
            }
            self.swap_entries(i, best);
            i = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut fr = Frontier::new();
        fr.offer(Point::new(0, 0), 3.0);
        fr.offer(Point::new(1, 0), 1.0);
        fr.offer(Point::new(2, 0), 2.0);
        assert_eq!(fr.len(), 3);
        assert_eq!(fr.pop(), Some((1.0, Point::new(1, 0))));
        assert_eq!(fr.pop(), Some((2.0, Point::new(2, 0))));
        assert_eq!(fr.pop(), Some((3.0, Point::new(0, 0))));
        assert_eq!(fr.pop(), None);
        assert!(fr.is_empty());
    }

    #[test]
    fn decrease_key_updates_in_place() {
        let mut fr = Frontier::new();
        fr.offer(Point::new(5, 5), 10.0);
        fr.offer(Point::new(1, 1), 4.0);
        assert!(fr.offer(Point::new(5, 5), 2.0));
        // No duplicate entry was inserted.
        assert_eq!(fr.len(), 2);
        assert_eq!(fr.pop(), Some((2.0, Point::new(5, 5))));
        assert_eq!(fr.pop(), Some((4.0, Point::new(1, 1))));
    }

    #[test]
    fn equal_or_worse_offer_keeps_existing_entry() {
        let mut fr = Frontier::new();
        fr.offer(Point::new(2, 3), 5.0);
        assert!(!fr.offer(Point::new(2, 3), 5.0));
        assert!(!fr.offer(Point::new(2, 3), 7.5));
        assert_eq!(fr.len(), 1);
        assert_eq!(fr.pop(), Some((5.0, Point::new(2, 3))));
    }

    #[test]
    fn priority_ties_break_row_major() {
        let mut fr = Frontier::new();
        fr.offer(Point::new(0, 1), 1.0);
        fr.offer(Point::new(3, 0), 1.0);
        fr.offer(Point::new(1, 0), 1.0);
        assert_eq!(fr.pop(), Some((1.0, Point::new(1, 0))));
        assert_eq!(fr.pop(), Some((1.0, Point::new(3, 0))));
        assert_eq!(fr.pop(), Some((1.0, Point::new(0, 1))));
    }

    #[test]
    fn clear_allows_reuse() {
        let mut fr = Frontier::new();
        fr.offer(Point::new(0, 0), 1.0);
        fr.clear();
        assert!(fr.is_empty());
        fr.offer(Point::new(0, 0), 9.0);
        assert_eq!(fr.pop(), Some((9.0, Point::new(0, 0))));
    }

    #[test]
    fn interleaved_offers_and_pops_stay_consistent() {
        let mut fr = Frontier::new();
        for i in 0..20 {
            fr.offer(Point::new(i, 0), f64::from(20 - i));
        }
        for i in 0..10 {
            fr.offer(Point::new(i, 0), f64::from(i));
        }
        let mut prev = f64::NEG_INFINITY;
        let mut n = 0;
        while let Some((pri, _)) = fr.pop() {
            assert!(pri >= prev);
            prev = pri;
            n += 1;
        }
        assert_eq!(n, 20);
    }
}
