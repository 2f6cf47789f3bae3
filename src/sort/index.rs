use std::cmp::Ordering;

use tracing::trace;

use super::Sequence;

/// Sorts the identity permutation of `0..len` with comparisons made through it.
pub(super) fn sorted_permutation<L>(len: usize, stable: bool, mut less: L) -> Vec<usize>
where
    L: FnMut(usize, usize) -> bool,
{
    trace!(len, stable, "sorting index permutation");
    let mut perm: Vec<usize> = (0..len).collect();
    if len < 2 {
        return perm;
    }

    let compare = |a: &usize, b: &usize| {
        if less(*a, *b) {
            Ordering::Less
        } else if less(*b, *a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    };

    if stable {
        perm.sort_by(compare);
    } else {
        perm.sort_unstable_by(compare);
    }
    perm
}

pub fn index_sort<S: Sequence + ?Sized>(data: &S) -> Vec<usize> {
    sorted_permutation(data.len(), false, |i, j| data.less(i, j))
}

pub fn stable_index_sort<S: Sequence + ?Sized>(data: &S) -> Vec<usize> {
    sorted_permutation(data.len(), true, |i, j| data.less(i, j))
}

/// Returns `perm` such that `perm[0]`, `perm[1]`, ... visit the sequence in sorted
/// order. The sequence is left untouched.
///
/// # Examples
///
/// ```
/// let names = ["carol", "alice", "bob"];
/// let perm = sortp::index_sort_by(names.len(), |i, j| names[i] < names[j]);
/// assert_eq!(perm, vec![1, 2, 0]);
/// ```
pub fn index_sort_by<L: FnMut(usize, usize) -> bool>(len: usize, less: L) -> Vec<usize> {
    sorted_permutation(len, false, less)
}

/// Like [`index_sort_by`]; equal elements keep ascending index order.
pub fn stable_index_sort_by<L: FnMut(usize, usize) -> bool>(len: usize, less: L) -> Vec<usize> {
    sorted_permutation(len, true, less)
}
