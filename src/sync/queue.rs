use super::ifaces::ConcurrentCollection;
use super::snapshot::Snapshot;
use super::synchronized::Synchronized;
use crate::collections::queue::PrimaryQueue;
use crate::errors::CollectionResult;

///
/// FIFO queue shareable between threads.
///
/// `pop` on an empty queue fails right away with
/// [EmptyContainer](crate::errors::CollectionError::EmptyContainer); nothing
/// here waits for an element to show up.
pub type SyncQueue<T> = Synchronized<PrimaryQueue<T>>;

impl<T> SyncQueue<T> {
    pub fn with_capacity(cap: usize) -> Self {
        Self::from_core(PrimaryQueue::with_capacity(cap))
    }

    #[inline]
    pub fn offer(&self, element: T) {
        self.latch.write().offer(element)
    }

    #[inline]
    pub fn pop(&self) -> CollectionResult<T> {
        self.latch.write().pop()
    }

    #[inline]
    pub fn poll(&self) -> Option<T> {
        self.latch.write().poll()
    }
}

impl<T: Clone> SyncQueue<T> {
    #[inline]
    pub fn peek(&self) -> CollectionResult<T> {
        self.latch.read().peek().cloned()
    }
}

impl<T> From<PrimaryQueue<T>> for SyncQueue<T> {
    fn from(core: PrimaryQueue<T>) -> Self {
        Self::from_core(core)
    }
}

impl<T, const N: usize> From<[T; N]> for SyncQueue<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<'a, T> IntoIterator for &'a SyncQueue<T>
where
    T: Clone + PartialEq,
{
    type Item = T;
    type IntoIter = Snapshot<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}
