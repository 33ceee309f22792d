//! The frontier: at most one not-yet-final label per vertex, kept in an
//! indexed binary min-heap so a cheaper label can replace the old one in place.
//!
//! Heap order is `(cost, serial)` where `serial` counts insertions. Equal-cost
//! labels therefore leave in the order they arrived, independent of heap shape.

use serde::Serialize;

use crate::graph::VertexKey;
use crate::label::Label;
use crate::weight::Weight;

/// Push/pop counters for one search, same shape as the sssp heap stats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HeapStats {
    pub pushes: u64,
    pub pops: u64,
    pub improvements: u64,
    pub max_size: u64,
}

#[derive(Copy, Clone, Debug)]
struct Slot<W, E> {
    label: Label<W, E>,
    serial: u64,
}

#[derive(Clone, Debug)]
pub struct TentativeStore<W, E> {
    slots: Vec<Option<Slot<W, E>>>,
    // heap of vertex keys
    heap: Vec<VertexKey>,
    // vertex -> index in `heap`, None when the vertex has no tentative label
    position: Vec<Option<usize>>,
    next_serial: u64,
    stats: HeapStats,
}

impl<W: Weight, E: Copy> TentativeStore<W, E> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            slots: vec![None; vertex_count],
            heap: Vec::with_capacity(vertex_count.min(1024)),
            position: vec![None; vertex_count],
            next_serial: 0,
            stats: HeapStats::default(),
        }
    }

    #[inline] pub fn len(&self) -> usize { self.heap.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.heap.is_empty() }
    #[inline] pub fn capacity(&self) -> usize { self.slots.len() }
    #[inline] pub fn contains(&self, vertex: VertexKey) -> bool { self.position.get(vertex).is_some_and(Option::is_some) }
    #[inline] pub fn stats(&self) -> HeapStats { self.stats }

    pub fn get(&self, vertex: VertexKey) -> Option<&Label<W, E>> { self.slots.get(vertex)?.as_ref().map(|s| &s.label) }

    /// An entry for the candidate's vertex that is at least as cheap.
    pub fn dominates_or_equal(&self, candidate: &Label<W, E>) -> bool {
        self.get(candidate.vertex()).is_some_and(|l| l.is_no_worse_than(candidate))
    }

    /// Inserts the label if its vertex has no entry, or replaces the entry if
    /// the label is strictly cheaper. Returns false when the label is dropped.
    pub fn try_insert_or_improve(&mut self, label: Label<W, E>) -> bool {
        let v = label.vertex();
        let serial = self.next_serial;
        match self.position[v] {
            None => {
                self.slots[v] = Some(Slot { label, serial });
                self.heap.push(v);
                let idx = self.heap.len() - 1;
                self.position[v] = Some(idx);
                self.sift_up(idx);
                self.stats.pushes += 1;
                if self.heap.len() as u64 > self.stats.max_size { self.stats.max_size = self.heap.len() as u64; }
            }
            Some(idx) => {
                let improves = self.slots[v].as_ref().is_some_and(|s| label.cost() < s.label.cost());
                if !improves { return false; }
                self.slots[v] = Some(Slot { label, serial });
                // key only decreased, so the entry can only move up
                self.sift_up(idx);
                self.stats.improvements += 1;
            }
        }
        self.next_serial += 1;
        true
    }

    /// Removes the minimum label, or `None` if the frontier is empty.
    pub fn pop(&mut self) -> Option<Label<W, E>> {
        let len = self.heap.len();
        if len == 0 { return None; }
        self.swap(0, len - 1);
        let v = self.heap.pop()?;
        self.position[v] = None;
        if !self.heap.is_empty() { self.sift_down(0); }
        self.stats.pops += 1;
        self.slots[v].take().map(|s| s.label)
    }

    /// Removes the minimum label.
    ///
    /// # Panics
    /// If the store is empty; callers check `is_empty` first.
    pub fn extract_min(&mut self) -> Label<W, E> {
        match self.pop() {
            Some(label) => label,
            None => panic!("extract_min on an empty tentative store"),
        }
    }

    #[inline]
    fn key(&self, idx: usize) -> (W, u64) {
        let v = self.heap[idx];
        match &self.slots[v] {
            Some(s) => (s.label.cost(), s.serial),
            None => unreachable!("heap references vertex {v} without a tentative label"),
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.key(idx) < self.key(parent) { self.swap(idx, parent); idx = parent; } else { break; }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let n = self.heap.len();
        loop {
            let left = idx * 2 + 1;
            if left >= n { break; }
            let right = left + 1;
            let mut best = left;
            if right < n && self.key(right) < self.key(left) { best = right; }
            if self.key(best) < self.key(idx) { self.swap(idx, best); idx = best; } else { break; }
        }
    }
}
