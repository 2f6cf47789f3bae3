use tracing::trace;

use crate::Side;

/// Merges two ascending sequences, emitting each index through `emit`.
///
/// `less(l, r)` must report that the left element strictly precedes the right one.
/// When it does not, including on equal elements, the right element goes first.
/// Once a side runs out the rest of the other is emitted without comparisons.
pub fn merge_with<L, E>(left_len: usize, right_len: usize, mut less: L, mut emit: E)
where
    L: FnMut(usize, usize) -> bool,
    E: FnMut(Side),
{
    trace!(left_len, right_len, "merging");
    let (mut l, mut r) = (0, 0);
    while l < left_len && r < right_len {
        if less(l, r) {
            emit(Side::Left(l));
            l += 1;
        } else {
            emit(Side::Right(r));
            r += 1;
        }
    }

    for l in l..left_len {
        emit(Side::Left(l));
    }
    for r in r..right_len {
        emit(Side::Right(r));
    }
}

/// [`merge_with`] reporting each side through its own callback.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
///
/// let left = [1, 3, 5, 7];
/// let right = [4, 6, 8, 10, 11];
/// let merged = RefCell::new(Vec::new());
///
/// sortp::merge(
///     left.len(),
///     right.len(),
///     |l, r| left[l] < right[r],
///     |l| merged.borrow_mut().push(left[l]),
///     |r| merged.borrow_mut().push(right[r]),
/// );
/// assert_eq!(merged.into_inner(), vec![1, 3, 4, 5, 6, 7, 8, 10, 11]);
/// ```
pub fn merge<L, AL, AR>(left_len: usize, right_len: usize, less: L, mut append_left: AL, mut append_right: AR)
where
    L: FnMut(usize, usize) -> bool,
    AL: FnMut(usize),
    AR: FnMut(usize),
{
    merge_with(left_len, right_len, less, |side| match side {
        Side::Left(l) => append_left(l),
        Side::Right(r) => append_right(r),
    });
}

/// Merges two sorted slices into a new vector. Equal elements from `right` come
/// before those from `left`.
pub fn merge_sorted<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    merge_with(left.len(), right.len(), |l, r| left[l] < right[r], |side| match side {
        Side::Left(l) => merged.push(left[l].clone()),
        Side::Right(r) => merged.push(right[r].clone()),
    });
    merged
}
