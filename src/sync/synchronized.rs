use log::*;

use super::ifaces::ConcurrentCollection;
use super::snapshot::Snapshot;
use crate::collections::ifaces::{Collection, Elements, Enumerable};

use parking_lot::RwLock;
use std::fmt;
use std::iter::FromIterator;
use std::ptr;

///
/// Reader-writer locked wrapper over a single-owner collection.
///
/// The wrapped collection lives inside the lock, so it is only reachable
/// through a guard. Each public method takes the lock once, calls the
/// collection's own lock-free primitives through the guard and releases the
/// lock on return. A locked method cannot reach another locking method of the
/// same instance, which keeps the non-reentrant lock safe.
///
/// Observers (`contains*`, `size`, `is_empty`, snapshots, equality, display)
/// take the shared lock; mutators take the exclusive one.
pub struct Synchronized<C> {
    pub(crate) latch: RwLock<C>,
}

impl<C> Synchronized<C> {
    pub fn from_core(core: C) -> Self {
        Self {
            latch: RwLock::new(core),
        }
    }

    pub fn from_elements<T, I>(elements: I) -> Self
    where
        C: FromIterator<T>,
        I: IntoIterator<Item = T>,
    {
        Self::from_core(elements.into_iter().collect())
    }

    ///
    /// Drains the current enumeration of another collection into a new,
    /// independent instance.
    pub fn copy_of<T, E>(elements: &E) -> Self
    where
        C: FromIterator<T>,
        E: Enumerable<T> + ?Sized,
    {
        Self::from_core(elements.enumerate().collect())
    }

    #[inline]
    pub fn into_inner(self) -> C {
        self.latch.into_inner()
    }

    /// Exclusive access needs no locking.
    #[inline]
    pub fn get_mut(&mut self) -> &mut C {
        self.latch.get_mut()
    }

    ///
    /// Whether a writer would have to wait right now.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.latch.try_write().is_none()
    }
}

impl<C: Default> Synchronized<C> {
    pub fn new() -> Self {
        Self::from_core(C::default())
    }
}

impl<C: Default> Default for Synchronized<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Enumerable<T> for Synchronized<C>
where
    T: Clone,
    C: Collection<T>,
{
    #[inline]
    fn size(&self) -> usize {
        self.latch.read().size()
    }

    fn enumerate<'a>(&'a self) -> Elements<'a, T>
    where
        T: 'a,
    {
        Box::new(self.snapshot())
    }
}

impl<T, C> ConcurrentCollection<T> for Synchronized<C>
where
    T: Clone,
    C: Collection<T>,
{
    #[inline]
    fn add(&self, element: T) -> bool {
        self.latch.write().add(element)
    }

    fn add_all<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        let incoming: Vec<T> = elements.enumerate().collect();
        trace!("add_all::incoming::{}", incoming.len());

        let mut core = self.latch.write();
        incoming
            .into_iter()
            .fold(false, |modified, el| core.add(el) || modified)
    }

    fn add_all_from(&self, elements: &[T]) -> bool
    where
        T: Clone,
    {
        self.latch.write().add_all_from(elements)
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.latch.read().contains(element)
    }

    fn contains_all<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        let incoming: Vec<T> = elements.enumerate().collect();
        trace!("contains_all::incoming::{}", incoming.len());

        self.latch.read().contains_all_from(&incoming)
    }

    fn contains_all_from(&self, elements: &[T]) -> bool {
        self.latch.read().contains_all_from(elements)
    }

    #[inline]
    fn remove(&self, element: &T) -> bool {
        self.latch.write().remove(element)
    }

    fn remove_all<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        let incoming: Vec<T> = elements.enumerate().collect();
        trace!("remove_all::incoming::{}", incoming.len());

        self.latch.write().remove_all_from(&incoming)
    }

    fn remove_all_from(&self, elements: &[T]) -> bool {
        self.latch.write().remove_all_from(elements)
    }

    fn remove_if<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut core = self.latch.write();
        let before = core.size();
        let modified = core.remove_if(predicate);
        trace!("remove_if::removed::{}", before - core.size());
        modified
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.latch.read().is_empty()
    }

    fn clear(&self) {
        let mut core = self.latch.write();
        debug!("clear::size::{}", core.size());
        core.clear();
    }

    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        for el in self.snapshot() {
            action(&el);
        }
    }

    fn snapshot(&self) -> Snapshot<T> {
        // Lock is held only for the copy.
        let elements = self.latch.read().to_vec();
        trace!("snapshot::taken::{}", elements.len());
        Snapshot::new(elements)
    }

    fn to_vec(&self) -> Vec<T> {
        self.latch.read().to_vec()
    }
}

impl<C: Clone> Clone for Synchronized<C> {
    fn clone(&self) -> Self {
        Self::from_core(C::clone(&self.latch.read()))
    }
}

impl<C> PartialEq for Synchronized<C>
where
    C: PartialEq + Clone,
{
    ///
    /// Never holds both locks at once: the argument is copied under its own read
    /// lock, which is released before the receiver is read-locked.
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }

        let theirs = C::clone(&other.latch.read());
        let ours = self.latch.read();
        *ours == theirs
    }
}

impl<C> Eq for Synchronized<C> where C: Eq + Clone {}

impl<T, C> FromIterator<T> for Synchronized<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<C: fmt::Display> fmt::Display for Synchronized<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.latch.read(), f)
    }
}

impl<C: fmt::Debug> fmt::Debug for Synchronized<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.latch.try_read() {
            Some(guard) => f
                .debug_struct("Synchronized")
                .field("data", &&*guard)
                .finish(),
            None => f
                .debug_struct("Synchronized")
                .field("data", &"<locked>")
                .finish(),
        }
    }
}
