mod index;
mod permute;

pub use index::{index_sort, index_sort_by, stable_index_sort, stable_index_sort_by};
use index::sorted_permutation;
use permute::apply_permutation;

/// An index-addressable sequence the sorts can reorder.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reports whether the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

impl<T: Ord> Sequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

impl<T: Ord> Sequence for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}

/// A [`Sequence`] made of closures. The length is fixed for the whole call, so it
/// is a plain value.
pub struct Closures<L, S> {
    pub len: usize,
    pub less: L,
    pub swap: S,
}

impl<L, S> Sequence for Closures<L, S>
where
    L: Fn(usize, usize) -> bool,
    S: FnMut(usize, usize),
{
    fn len(&self) -> usize {
        self.len
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.less)(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        (self.swap)(i, j)
    }
}

/// A slice ordered by an element comparator, see [`by`].
pub struct SliceBy<'a, T, F> {
    data: &'a mut [T],
    less: F,
}

/// Views `data` as a [`Sequence`] ordered by `less`.
///
/// # Examples
///
/// ```
/// let mut words = vec!["ccc", "a", "bb"];
/// sortp::sort(&mut sortp::by(&mut words, |a, b| a.len() < b.len()));
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn by<T, F: Fn(&T, &T) -> bool>(data: &mut [T], less: F) -> SliceBy<'_, T, F> {
    SliceBy { data, less }
}

impl<'a, T, F: Fn(&T, &T) -> bool> Sequence for SliceBy<'a, T, F> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.less)(&self.data[i], &self.data[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }
}

pub fn sort<S: Sequence + ?Sized>(data: &mut S) {
    let perm = sorted_permutation(data.len(), false, |i, j| data.less(i, j));
    apply_permutation(&perm, |i, j| data.swap(i, j));
}

pub fn stable_sort<S: Sequence + ?Sized>(data: &mut S) {
    let perm = sorted_permutation(data.len(), true, |i, j| data.less(i, j));
    apply_permutation(&perm, |i, j| data.swap(i, j));
}

/// Sorts `len` elements through `less` and `swap`. Equal elements may end up in
/// any order.
///
/// The comparisons run on the standard library sort over an index permutation;
/// the sequence itself is then rearranged with at most `len - 1` swaps, never with
/// `i == j`. `less` is not called once swapping has started.
pub fn sort_by<L, S>(len: usize, less: L, swap: S)
where
    L: FnMut(usize, usize) -> bool,
    S: FnMut(usize, usize),
{
    let perm = sorted_permutation(len, false, less);
    apply_permutation(&perm, swap);
}

/// Like [`sort_by`], keeping equal elements in their original order.
pub fn stable_sort_by<L, S>(len: usize, less: L, swap: S)
where
    L: FnMut(usize, usize) -> bool,
    S: FnMut(usize, usize),
{
    let perm = sorted_permutation(len, true, less);
    apply_permutation(&perm, swap);
}

pub fn is_sorted<S: Sequence + ?Sized>(data: &S) -> bool {
    is_sorted_by(data.len(), |i, j| data.less(i, j))
}

/// True if no element is less than its predecessor.
pub fn is_sorted_by<L: FnMut(usize, usize) -> bool>(len: usize, mut less: L) -> bool {
    (1..len).all(|i| !less(i, i - 1))
}

/// Swaps the arguments of `less`, turning any ascending sort into a descending one.
pub fn reverse_less<L: FnMut(usize, usize) -> bool>(mut less: L) -> impl FnMut(usize, usize) -> bool {
    move |i, j| less(j, i)
}
