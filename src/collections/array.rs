use super::ifaces::{Collection, Elements, Enumerable};
use crate::constants::{DEFAULT_CAP, DISPLAY_SEPARATOR};
use crate::errors::{CollectionError, CollectionResult};

use itertools::Itertools;
use std::fmt;
use std::iter::FromIterator;
use std::slice;
use std::vec;

///
/// Insertion-ordered list backed by a vector.
///
/// Single-owner only; wrap it into [SyncList](crate::sync::list::SyncList) to share it
/// between threads.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayList<T> {
    data: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAP)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            data: Vec::with_capacity(cap),
        }
    }

    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    ///
    /// Drains the current enumeration of another collection into a new list.
    pub fn copy_of<E>(elements: &E) -> Self
    where
        E: Enumerable<T> + ?Sized,
    {
        let mut data = Vec::with_capacity(elements.size());
        data.extend(elements.enumerate());
        Self { data }
    }

    #[inline]
    pub fn get(&self, index: usize) -> CollectionResult<&T> {
        self.data.get(index).ok_or(CollectionError::IndexOutOfRange {
            index,
            size: self.data.len(),
        })
    }

    #[inline]
    pub fn safe_get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Position of the first element equal to the given one.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.data.iter().position(|el| el == element)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Enumerable<T> for ArrayList<T> {
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

impl<T> Collection<T> for ArrayList<T>
where
    T: Clone + PartialEq,
{
    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.data.push(element);
        true
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.data.contains(element)
    }

    fn remove(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(idx) => {
                self.data.remove(idx);
                true
            }
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
        self.data.clone()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter)
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List=[{}]", self.data.iter().join(DISPLAY_SEPARATOR))
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod array_tests {
    use super::*;

    const THOUSAND: usize = 1_000;

    fn list_of(size: usize) -> ArrayList<usize> {
        (0..size).collect()
    }

    #[test]
    fn array_add_keeps_insertion_order() {
        let mut list = list_of(THOUSAND);
        assert!(list.add(THOUSAND));
        assert_eq!(list.size(), THOUSAND + 1);
        assert!(list.iter().copied().eq(0..=THOUSAND));
    }

    #[test]
    fn array_add_all_appends_in_order() {
        let mut list = list_of(10);
        assert!(list.add_all(&list_of(100)));
        assert!(list.add_all_from(&[7, 8]));
        assert!(!list.add_all(&Vec::<usize>::new()));

        let expected = (0..10).chain(0..100).chain(vec![7, 8]);
        assert!(list.iter().copied().eq(expected));
    }

    #[test]
    fn array_positional_access() {
        let list = ArrayList::from([10, 20, 30]);
        assert_eq!(list.get(1), Ok(&20));
        assert_eq!(
            list.get(3),
            Err(CollectionError::IndexOutOfRange { index: 3, size: 3 })
        );
        assert_eq!(list.safe_get(2), Some(&30));
        assert_eq!(list.safe_get(3), None);
        assert_eq!(list.index_of(&30), Some(2));
        assert_eq!(list.index_of(&40), None);
    }

    #[test]
    fn array_remove_first_occurrence_only() {
        let mut list = ArrayList::from([1, 2, 1, 3]);
        assert!(list.remove(&1));
        assert_eq!(list.as_slice(), &[2, 1, 3]);
        assert!(!list.remove(&9));
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn array_remove_all_and_contains_all() {
        let mut list = list_of(THOUSAND);
        let deleted = vec![3, 500, 999];
        assert!(list.contains_all(&deleted));
        assert!(list.remove_all(&deleted));
        assert!(!list.contains_all(&deleted));
        assert!(!list.contains_all_from(&[3]));
        assert!(list.contains_all_from(&[4, 998]));
        assert_eq!(list.size(), THOUSAND - 3);
        assert!(!list.remove_all_from(&deleted));
    }

    #[test]
    fn array_remove_if() {
        let mut list = list_of(THOUSAND);
        assert!(list.remove_if(|el: &usize| el % 2 == 0));
        assert_eq!(list.size(), THOUSAND / 2);
        assert!(list.iter().all(|el| el % 2 == 1));
        assert!(!list.remove_if(|el: &usize| el % 2 == 0));
    }

    #[test]
    fn array_clear_and_is_empty() {
        let mut list = list_of(0);
        assert!(list.is_empty());
        list.add(1);
        assert!(!list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn array_copy_of_and_equality() {
        let origin = ArrayList::from([1, 2, 3]);
        let copy = ArrayList::copy_of(&origin);
        assert_eq!(origin, copy);
        assert_ne!(origin, ArrayList::from([3, 2, 1]));
    }

    #[test]
    fn array_display() {
        assert_eq!(ArrayList::from([1, 2, 3]).to_string(), "List=[1, 2, 3]");
        assert_eq!(ArrayList::<u8>::new().to_string(), "List=[]");
    }

    #[test]
    fn array_for_each_visits_in_order() {
        let list = ArrayList::from([1, 2, 3]);
        let mut seen = vec![];
        list.for_each(|el| seen.push(*el));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
