//! Double-ended priority queue (min-max heap).
//!
//! Levels alternate between min levels (even depth, root included) and max
//! levels (odd depth). The smallest element sits at the root and the
//! largest is one of the root's children, so both ends peek in O(1) and
//! push/pop in O(log n).
//!
//! Expansion uses two of these: the frontier pops its largest path to grow
//! next, and the kept set pops its smallest path when it grows past the cap.

use std::cmp::Ordering;

/// A min-max heap over `T`'s total order.
#[derive(Debug, Clone)]
pub struct DualPriorityQueue<T> {
    heap: Vec<T>,
}

impl<T: Ord> DualPriorityQueue<T> {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.bubble_up(self.heap.len() - 1);
    }

    pub fn peek_smallest(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn peek_largest(&self) -> Option<&T> {
        self.largest_index().map(|i| &self.heap[i])
    }

    pub fn pop_smallest(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let item = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.trickle_down(0);
        }
        Some(item)
    }

    pub fn pop_largest(&mut self) -> Option<T> {
        let i = self.largest_index()?;
        let item = self.heap.swap_remove(i);
        if i < self.heap.len() {
            self.trickle_down(i);
        }
        Some(item)
    }

    fn largest_index(&self) -> Option<usize> {
        match self.heap.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => Some(if self.heap[2] > self.heap[1] { 2 } else { 1 }),
        }
    }

    fn bubble_up(&mut self, i: usize) {
        if i == 0 {
            return;
        }
        let parent = (i - 1) / 2;
        if is_min_level(i) {
            if self.heap[i] > self.heap[parent] {
                self.heap.swap(i, parent);
                self.bubble_up_by(parent, Ordering::Greater);
            } else {
                self.bubble_up_by(i, Ordering::Less);
            }
        } else if self.heap[i] < self.heap[parent] {
            self.heap.swap(i, parent);
            self.bubble_up_by(parent, Ordering::Less);
        } else {
            self.bubble_up_by(i, Ordering::Greater);
        }
    }

    /// Climb grandparent links while `i` compares `toward` its grandparent.
    fn bubble_up_by(&mut self, mut i: usize, toward: Ordering) {
        while i >= 3 {
            let grandparent = ((i - 1) / 2 - 1) / 2;
            if self.heap[i].cmp(&self.heap[grandparent]) != toward {
                break;
            }
            self.heap.swap(i, grandparent);
            i = grandparent;
        }
    }

    fn trickle_down(&mut self, i: usize) {
        if is_min_level(i) {
            self.trickle_down_by(i, Ordering::Less);
        } else {
            self.trickle_down_by(i, Ordering::Greater);
        }
    }

    /// Sink `i` toward the leaves. `toward` is `Less` on min levels and
    /// `Greater` on max levels.
    fn trickle_down_by(&mut self, mut i: usize, toward: Ordering) {
        let len = self.heap.len();
        loop {
            let first_child = 2 * i + 1;
            if first_child >= len {
                return;
            }

            // Most extreme among children and grandchildren.
            let mut m = first_child;
            for c in [first_child + 1, 4 * i + 3, 4 * i + 4, 4 * i + 5, 4 * i + 6] {
                if c < len && self.heap[c].cmp(&self.heap[m]) == toward {
                    m = c;
                }
            }

            if self.heap[m].cmp(&self.heap[i]) != toward {
                return;
            }
            self.heap.swap(m, i);

            if m <= first_child + 1 {
                return;
            }

            let parent = (m - 1) / 2;
            if self.heap[m].cmp(&self.heap[parent]) == toward.reverse() {
                self.heap.swap(m, parent);
            }
            i = m;
        }
    }
}

impl<T: Ord> Default for DualPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for DualPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.push(item);
        }
        queue
    }
}

/// Even depth (root = depth 0) is a min level.
fn is_min_level(i: usize) -> bool {
    (i + 1).ilog2() % 2 == 0
}
