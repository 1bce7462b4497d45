use super::ifaces::{Collection, Elements, Enumerable};
use crate::constants::{DEFAULT_CAP, DISPLAY_SEPARATOR};
use crate::errors::{CollectionError, CollectionResult};

use itertools::Itertools;
use std::collections::vec_deque::{self, VecDeque};
use std::fmt;
use std::iter::FromIterator;

///
/// FIFO queue: the element resident the longest is always the next one popped.
///
/// `add` is an alias of [offer](PrimaryQueue::offer). Popping or peeking an empty
/// queue fails with [EmptyContainer](CollectionError::EmptyContainer), it never waits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrimaryQueue<T> {
    data: VecDeque<T>,
}

impl<T> PrimaryQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAP)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(cap),
        }
    }

    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    pub fn copy_of<E>(elements: &E) -> Self
    where
        E: Enumerable<T> + ?Sized,
    {
        let mut data = VecDeque::with_capacity(elements.size());
        data.extend(elements.enumerate());
        Self { data }
    }

    #[inline]
    pub fn offer(&mut self, element: T) {
        self.data.push_back(element);
    }

    #[inline]
    pub fn pop(&mut self) -> CollectionResult<T> {
        self.data.pop_front().ok_or(CollectionError::EmptyContainer)
    }

    /// Non-failing [pop](PrimaryQueue::pop).
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    #[inline]
    pub fn peek(&self) -> CollectionResult<&T> {
        self.data.front().ok_or(CollectionError::EmptyContainer)
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Default for PrimaryQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Enumerable<T> for PrimaryQueue<T> {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn enumerate<'a>(&'a self) -> Elements<'a, T>
    where
        T: 'a,
    {
        Box::new(self.data.iter().cloned())
    }
}

impl<T> Collection<T> for PrimaryQueue<T>
where
    T: Clone + PartialEq,
{
    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.offer(element);
        true
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.data.contains(element)
    }

    fn remove(&mut self, element: &T) -> bool {
        let idx = self.data.iter().position(|el| el == element);
        match idx {
            Some(idx) => self.data.remove(idx).is_some(),
            None => false,
        }
    }

    fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.data.len();
        self.data.retain(|el| !predicate(el));
        before != self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.data.iter().for_each(action);
    }

    fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for PrimaryQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for PrimaryQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter)
    }
}

impl<T> From<Vec<T>> for PrimaryQueue<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data: data.into() }
    }
}

impl<T, const N: usize> From<[T; N]> for PrimaryQueue<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T> IntoIterator for PrimaryQueue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PrimaryQueue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for PrimaryQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue=[{}]", self.data.iter().join(DISPLAY_SEPARATOR))
    }
}

impl<T: fmt::Debug> fmt::Debug for PrimaryQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod queue_tests {
    use super::*;

    #[test]
    fn queue_pops_in_fifo_order() {
        let mut queue = PrimaryQueue::new();
        for el in [5, 4, 3, 2, 1] {
            queue.offer(el);
        }

        let mut popped = vec![];
        while let Ok(el) = queue.pop() {
            popped.push(el);
        }
        assert_eq!(popped, vec![5, 4, 3, 2, 1]);
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_empty_pop_and_peek_fail() {
        let mut queue = PrimaryQueue::<u32>::new();
        assert_eq!(queue.pop(), Err(CollectionError::EmptyContainer));
        assert_eq!(queue.peek(), Err(CollectionError::EmptyContainer));
        assert_eq!(queue.poll(), None);
    }

    #[test]
    fn queue_peek_does_not_remove() {
        let mut queue = PrimaryQueue::from([1, 2]);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.size(), 2);
        assert_eq!(queue.pop(), Ok(1));
        assert_eq!(queue.peek(), Ok(&2));
    }

    #[test]
    fn queue_remove_keeps_remaining_order() {
        let mut queue = PrimaryQueue::from([1, 2, 3, 2]);
        assert!(queue.remove(&2));
        assert!(!queue.remove(&7));
        assert_eq!(queue.to_vec(), vec![1, 3, 2]);

        assert!(queue.remove_if(|el: &i32| *el > 1));
        assert_eq!(queue.to_vec(), vec![1]);
    }

    #[test]
    fn queue_add_is_offer() {
        let mut queue = PrimaryQueue::from([1]);
        assert!(queue.add(2));
        assert!(queue.add_all_from(&[3, 4]));
        assert_eq!(queue.poll(), Some(1));
        assert_eq!(queue.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn queue_equality_is_order_sensitive() {
        assert_eq!(PrimaryQueue::from([1, 2, 3]), PrimaryQueue::from([1, 2, 3]));
        assert_ne!(PrimaryQueue::from([1, 2, 3]), PrimaryQueue::from([3, 2, 1]));
    }

    #[test]
    fn queue_display() {
        assert_eq!(PrimaryQueue::from(["a", "b"]).to_string(), "Queue=[a, b]");
    }
}
