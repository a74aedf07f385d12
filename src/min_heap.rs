use std::fmt::{self, Debug, Display};

use log::debug;

use crate::dynamic_array::DynamicArray;
use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// A binary min-heap stored in a [`DynamicArray`].
///
/// The node at index `i` has children at `2i + 1` and `2i + 2`. For every non-root
/// index, the parent's element is less than or equal to the element itself.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    heap: DynamicArray<T>,
}

impl<T> MinHeap<T>
where
    T: Ord,
{
    pub fn new() -> Self {
        MinHeap {
            heap: DynamicArray::new(),
        }
    }

    /// Builds a heap by adding each element of `start_heap` in turn.
    pub fn new_from<I>(start_heap: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap: MinHeap<T> = MinHeap::new();
        for node in start_heap {
            heap.add(node);
        }
        heap
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.length()
    }

    /// The backing array in index order.
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Appends `node` and sifts it toward the root while its parent is strictly greater.
    pub fn add(&mut self, node: T) {
        self.heap.append(node);
        let mut end: usize = self.heap.length() - 1;
        while end > 0 && self.heap[parent(end)] > self.heap[end] {
            self.heap.swap(parent(end), end);
            end = parent(end);
        }
    }

    pub fn get_min(&self) -> Result<&T> {
        self.heap.get_at_index(0).map_err(|_| Error::EmptyHeap)
    }

    /// Removes and returns the minimum. The last element takes the root's place and is
    /// sifted down.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let end: usize = self.heap.length() - 1;
        self.heap.swap(0, end);
        let min: T = self.heap.pop().ok_or(Error::EmptyHeap)?;
        self.sift_down(0);
        Ok(min)
    }

    /// Replaces the contents with a copy of `da` and restores heap order bottom-up,
    /// sifting down every internal node from the last one to the root.
    pub fn build_heap(&mut self, da: &[T])
    where
        T: Clone,
    {
        self.heap.clear();
        for node in da {
            self.heap.append(node.clone());
        }
        debug!("building heap from {} elements", self.heap.length());

        let length: usize = self.heap.length();
        if length < 2 {
            return;
        }
        for index in (0..=parent(length - 1)).rev() {
            self.sift_down(index);
        }
    }

    /// Picks the child that should replace the node at `index`, if any.
    ///
    /// A child qualifies when it is less than or equal to the node. When both qualify the
    /// smaller one wins, and the left one on a tie.
    fn find_replacement(&self, index: usize) -> Option<usize> {
        let length: usize = self.heap.length();
        let left: usize = left_child(index);
        let right: usize = right_child(index);
        if left >= length {
            return None;
        }
        let value: &T = &self.heap[index];
        if right >= length {
            return (self.heap[left] <= *value).then(|| left);
        }
        let (l, r) = (&self.heap[left], &self.heap[right]);
        if l <= value && l <= r {
            Some(left)
        } else if r <= value && r <= l {
            Some(right)
        } else {
            None
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.find_replacement(index) {
            self.heap.swap(index, child);
            index = child;
        }
    }
}

impl<T> Default for MinHeap<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for MinHeap<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MinHeap::new_from(iter)
    }
}

impl<T> Display for MinHeap<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HEAP {}", self.heap)
    }
}
