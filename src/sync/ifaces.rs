use super::snapshot::Snapshot;
use crate::collections::ifaces::Enumerable;

///
/// Collection contract of the lock-guarded collections.
///
/// Every method acquires the collection's lock exactly once and releases it
/// before returning. Bulk operations drain their argument *before* locking the
/// receiver, so a collection can be passed to its own bulk methods.
pub trait ConcurrentCollection<T>: Enumerable<T> {
    fn add(&self, element: T) -> bool;

    fn add_all<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized;

    fn add_all_from(&self, elements: &[T]) -> bool
    where
        T: Clone;

    fn contains(&self, element: &T) -> bool;

    fn contains_all<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized;

    fn contains_all_from(&self, elements: &[T]) -> bool;

    fn remove(&self, element: &T) -> bool;

    fn remove_all<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized;

    fn remove_all_from(&self, elements: &[T]) -> bool;

    ///
    /// Runs under the write lock. The predicate must not call back into the
    /// same collection.
    fn remove_if<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    fn is_empty(&self) -> bool;

    fn clear(&self);

    ///
    /// Runs over a snapshot with no lock held; the action may mutate the
    /// collection it iterates.
    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T);

    fn snapshot(&self) -> Snapshot<T>;

    fn to_vec(&self) -> Vec<T>;
}
