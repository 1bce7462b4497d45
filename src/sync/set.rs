use super::ifaces::ConcurrentCollection;
use super::snapshot::Snapshot;
use super::synchronized::Synchronized;
use crate::collections::ifaces::Enumerable;
use crate::collections::set::HashedSet;

use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

///
/// Uniqueness-enforcing set shareable between threads.
///
/// `add` of a present element returns `false` and changes nothing. Equality
/// ignores order. There is no positional access.
pub type SyncSet<T, S = RandomState> = Synchronized<HashedSet<T, S>>;

impl<T> SyncSet<T, RandomState> {
    pub fn with_capacity(cap: usize) -> Self {
        Self::from_core(HashedSet::with_capacity(cap))
    }
}

impl<T, S> SyncSet<T, S> {
    pub fn with_capacity_and_hasher(cap: usize, hasher: S) -> Self {
        Self::from_core(HashedSet::with_capacity_and_hasher(cap, hasher))
    }
}

impl<T, S> SyncSet<T, S>
where
    T: Clone + Hash + Eq,
    S: BuildHasher,
{
    /// Whether every element of this set is present in `elements`.
    pub fn is_subset<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        let other: HashSet<T> = elements.enumerate().collect();
        self.latch.read().iter().all(|el| other.contains(el))
    }

    /// Whether every element of `elements` is present in this set.
    pub fn is_superset<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        let incoming: Vec<T> = elements.enumerate().collect();
        self.latch.read().is_superset(&incoming)
    }
}

impl<T, S> From<HashedSet<T, S>> for SyncSet<T, S> {
    fn from(core: HashedSet<T, S>) -> Self {
        Self::from_core(core)
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for SyncSet<T, RandomState> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<'a, T, S> IntoIterator for &'a SyncSet<T, S>
where
    T: Clone + Hash + Eq,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}

#[cfg(test)]
mod set_tests {
    use super::*;

    #[test]
    fn set_add_is_idempotent() {
        let set = SyncSet::from([1, 2, 3]);
        assert!(!set.add(2));
        assert_eq!(set.size(), 3);
        assert!(set.contains(&2));
    }

    #[test]
    fn set_equality_ignores_order() {
        assert_eq!(SyncSet::from([1, 2, 3]), SyncSet::from([3, 2, 1]));
        assert_ne!(SyncSet::from([1, 2, 3]), SyncSet::from([1, 2, 4]));
    }

    #[test]
    fn set_subset_and_superset_of_itself() {
        let set = SyncSet::from([1, 2, 3]);
        assert!(set.is_subset(&set));
        assert!(set.is_superset(&set));
        assert!(set.is_superset(&vec![1, 3]));
        assert!(!set.is_subset(&vec![1, 3]));
    }

    #[test]
    fn set_snapshot_covers_every_element() {
        let set: SyncSet<u32> = (0..50).collect();
        let mut seen: Vec<u32> = set.snapshot().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());

        let count = (&set).into_iter().count();
        assert_eq!(count, 50);
    }

    #[test]
    fn set_with_custom_capacity() {
        let set: SyncSet<&str> = SyncSet::with_capacity(2);
        assert!(set.add_all_from(&["a", "b", "c", "a"]));
        assert_eq!(set.size(), 3);
        set.clear();
        assert!(set.is_empty());
    }
}
