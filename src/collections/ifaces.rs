///
/// Lazily produced elements of a collection.
///
/// Unsynchronized collections hand out clones straight from their backing
/// store, synchronized collections hand out a [Snapshot](crate::sync::snapshot::Snapshot).
pub type Elements<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

///
/// Anything that knows its size and can enumerate its current elements.
///
/// This is all the bulk operations (`add_all`, `contains_all`, `remove_all`)
/// need from their argument.
pub trait Enumerable<T> {
    fn size(&self) -> usize;

    fn enumerate<'a>(&'a self) -> Elements<'a, T>
    where
        T: 'a;
}

///
/// Mutation, membership, bulk and enumeration contract of the single-owner
/// collections.
///
/// Implementations never lock. Bulk operations are expressed through the
/// single element primitives `add`, `remove` and `contains`.
pub trait Collection<T>: Enumerable<T> {
    /// Adds an element. Returns `false` if the collection was left unchanged.
    fn add(&mut self, element: T) -> bool;

    fn add_all<E>(&mut self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        elements
            .enumerate()
            .fold(false, |modified, el| self.add(el) || modified)
    }

    fn add_all_from(&mut self, elements: &[T]) -> bool
    where
        T: Clone,
    {
        elements
            .iter()
            .cloned()
            .fold(false, |modified, el| self.add(el) || modified)
    }

    fn contains(&self, element: &T) -> bool;

    fn contains_all<E>(&self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        elements.enumerate().all(|el| self.contains(&el))
    }

    fn contains_all_from(&self, elements: &[T]) -> bool {
        elements.iter().all(|el| self.contains(el))
    }

    /// Removes at most one element equal to the given one.
    fn remove(&mut self, element: &T) -> bool;

    fn remove_all<E>(&mut self, elements: &E) -> bool
    where
        E: Enumerable<T> + ?Sized,
    {
        elements
            .enumerate()
            .fold(false, |modified, el| self.remove(&el) || modified)
    }

    fn remove_all_from(&mut self, elements: &[T]) -> bool {
        elements
            .iter()
            .fold(false, |modified, el| self.remove(el) || modified)
    }

    /// Removes every element matching the predicate.
    fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn clear(&mut self);

    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T);

    fn to_vec(&self) -> Vec<T> {
        self.enumerate().collect()
    }
}

impl<T: Clone> Enumerable<T> for [T] {
    fn size(&self) -> usize {
        self.len()
    }

    fn enumerate<'a>(&'a self) -> Elements<'a, T>
    where
        T: 'a,
    {
        Box::new(self.iter().cloned())
    }
}

impl<T: Clone> Enumerable<T> for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn enumerate<'a>(&'a self) -> Elements<'a, T>
    where
        T: 'a,
    {
        self.as_slice().enumerate()
    }
}
