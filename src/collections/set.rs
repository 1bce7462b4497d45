use super::ifaces::{Collection, Elements, Enumerable};
use crate::constants::{DEFAULT_CAP, DISPLAY_SEPARATOR};

use itertools::Itertools;
use std::collections::hash_map::RandomState;
use std::collections::hash_set::{self, HashSet};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

///
/// Uniqueness-enforcing collection backed by a typed hash set.
///
/// Adding an element which is already present leaves the set untouched.
/// Iteration order is unspecified, so is the order of the diagnostic rendering.
#[derive(Clone)]
pub struct HashedSet<T, S = RandomState> {
    data: HashSet<T, S>,
}

impl<T> HashedSet<T, RandomState> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAP)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self::with_capacity_and_hasher(cap, RandomState::new())
    }
}

impl<T, S> HashedSet<T, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAP, hasher)
    }

    pub fn with_capacity_and_hasher(cap: usize, hasher: S) -> Self {
        Self {
            data: HashSet::with_capacity_and_hasher(cap, hasher),
        }
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T, S> HashedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
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
        let mut data = HashSet::with_capacity_and_hasher(elements.size(), S::default());
        data.extend(elements.enumerate());
        Self { data }
    }
}

impl<T, S> HashedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Whether every element of this set is present in `elements`.
    pub fn is_subset<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        let other: HashSet<T> = elements.enumerate().collect();
        self.data.iter().all(|el| other.contains(el))
    }

    /// Whether every element of `elements` is present in this set.
    pub fn is_superset<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        elements.enumerate().all(|el| self.data.contains(&el))
    }
}

impl<T, S: Default> Default for HashedSet<T, S> {
    fn default() -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAP, S::default())
    }
}

impl<T: Clone, S> Enumerable<T> for HashedSet<T, S> {
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

impl<T, S> Collection<T> for HashedSet<T, S>
where
    T: Clone + Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.data.insert(element)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.data.contains(element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        self.data.remove(element)
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
}

impl<T, S> PartialEq for HashedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T, S> Eq for HashedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> FromIterator<T> for HashedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T, S> Extend<T> for HashedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for HashedSet<T, RandomState> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for HashedSet<T, RandomState> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T, S> IntoIterator for HashedSet<T, S> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a HashedSet<T, S> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Display, S> fmt::Display for HashedSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set=[{}]", self.data.iter().join(DISPLAY_SEPARATOR))
    }
}

impl<T: fmt::Debug, S> fmt::Debug for HashedSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}
