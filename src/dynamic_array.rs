use std::fmt::{self, Debug, Display};
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A growable array with checked indexed access.
///
/// This is the backing store for both the bucket table of [`crate::HashMap`] and the
/// element array of [`crate::MinHeap`]. Growth is delegated to `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    data: Vec<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn append(&mut self, value: T) {
        self.data.push(value);
    }

    pub fn get_at_index(&self, index: usize) -> Result<&T> {
        let length: usize = self.length();
        self.data
            .get(index)
            .ok_or(Error::IndexOutOfBounds { index, length })
    }

    pub fn get_at_index_mut(&mut self, index: usize) -> Result<&mut T> {
        let length: usize = self.length();
        self.data
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, length })
    }

    pub fn set_at_index(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_at_index_mut(index)? = value;
        Ok(())
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Swaps the elements at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(array: DynamicArray<T>) -> Self {
        array.data
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Display for DynamicArray<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_access() {
        let mut da: DynamicArray<i32> = DynamicArray::from(vec![1, 2, 3]);
        assert_eq!(da.get_at_index(2), Ok(&3));
        assert_eq!(
            da.get_at_index(3),
            Err(Error::IndexOutOfBounds {
                index: 3,
                length: 3
            })
        );
        da.set_at_index(0, 10).unwrap();
        assert_eq!(da[0], 10);
        assert!(da.set_at_index(5, 0).is_err());
    }

    #[test]
    fn pop_and_swap() {
        let mut da: DynamicArray<&str> = ["a", "b", "c"].into_iter().collect();
        da.swap(0, 2);
        assert_eq!(da.as_slice(), &["c", "b", "a"]);
        assert_eq!(da.pop(), Some("a"));
        assert_eq!(da.length(), 2);
        da.clear();
        assert_eq!(da.pop(), None);
        assert!(da.is_empty());
    }

    #[test]
    fn display() {
        let da: DynamicArray<i32> = DynamicArray::from(vec![4, 5, 6]);
        assert_eq!(da.to_string(), "[4, 5, 6]");
        assert_eq!(DynamicArray::<i32>::new().to_string(), "[]");
    }
}
