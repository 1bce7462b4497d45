//! Point-in-time enumeration of a synchronized collection.
//!
//! A [Snapshot] owns a copy of the elements taken while the source collection's
//! read lock was held. The lock is released before the snapshot is handed out,
//! so consuming it takes no lock, never observes later updates of the source,
//! and can be dropped at any point without leaving anything locked or running.

use std::fmt;
use std::iter::FusedIterator;
use std::vec;

/// `Snapshot`
///
/// One enumeration session over a synchronized collection. Every call to
/// `snapshot()` produces a fresh instance; an instance is not restartable.
#[derive(Clone)]
pub struct Snapshot<T> {
    elements: vec::IntoIter<T>,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_iter(),
        }
    }

    /// Elements not consumed yet.
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.elements.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for Snapshot<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Snapshot").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn snapshot_yields_owned_elements() {
        let mut snap = Snapshot::new(vec![1, 2, 3]);
        assert_eq!(snap.len(), 3);
        assert_eq!(snap.next(), Some(1));
        assert_eq!(snap.next_back(), Some(3));
        assert_eq!(snap.as_slice(), &[2]);
        assert_eq!(snap.next(), Some(2));
        assert_eq!(snap.next(), None);
        assert_eq!(snap.next(), None);
    }

    #[test]
    fn snapshot_clone_is_independent() {
        let mut snap = Snapshot::new(vec!["a", "b"]);
        let other = snap.clone();
        snap.next();
        assert_eq!(other.collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(format!("{:?}", snap), "Snapshot([\"b\"])");
    }
}
