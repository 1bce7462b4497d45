use super::snapshot::Snapshot;
use super::synchronized::Synchronized;
use super::ifaces::ConcurrentCollection;
use crate::collections::array::ArrayList;
use crate::errors::CollectionResult;

///
/// Insertion-ordered list shareable between threads.
///
/// Equality is order-sensitive. Positional reads take the shared lock and hand
/// out clones, never references into the live list.
pub type SyncList<T> = Synchronized<ArrayList<T>>;

impl<T> SyncList<T> {
    pub fn with_capacity(cap: usize) -> Self {
        Self::from_core(ArrayList::with_capacity(cap))
    }
}

impl<T: Clone> SyncList<T> {
    ///
    /// Fails with [IndexOutOfRange](crate::errors::CollectionError::IndexOutOfRange)
    /// when `index >= size`.
    #[inline]
    pub fn get(&self, index: usize) -> CollectionResult<T> {
        self.latch.read().get(index).cloned()
    }

    #[inline]
    pub fn safe_get(&self, index: usize) -> Option<T> {
        self.latch.read().safe_get(index).cloned()
    }
}

impl<T: PartialEq> SyncList<T> {
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.latch.read().index_of(element)
    }
}

impl<T> From<ArrayList<T>> for SyncList<T> {
    fn from(core: ArrayList<T>) -> Self {
        Self::from_core(core)
    }
}

impl<T, const N: usize> From<[T; N]> for SyncList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<'a, T> IntoIterator for &'a SyncList<T>
where
    T: Clone + PartialEq,
{
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}
