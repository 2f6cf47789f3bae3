use tracing::trace;

use crate::sort::Sequence;

/// Bubble sort, especially useful for an almost sorted sequence. Stable.
pub fn bubble<S: Sequence + ?Sized>(data: &mut S) {
    let len = data.len();
    bubble_steps(len, data, |data, i, j| data.less(i, j), |data, i, j| data.swap(i, j));
}

/// Like [`bubble`] but over closures.
///
/// Each pass stops at the last swap of the previous one, since nothing past it can
/// still be out of place. A sorted sequence costs one pass and no swaps.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
///
/// let mut data = [5, 3, 1, 8, 0];
/// let cells = Cell::from_mut(&mut data[..]).as_slice_of_cells();
/// sortp::bubble_by(5, |i, j| cells[i].get() < cells[j].get(), |i, j| cells[i].swap(&cells[j]));
/// assert_eq!(data, [0, 1, 3, 5, 8]);
/// ```
pub fn bubble_by<L, S>(len: usize, mut less: L, mut swap: S)
where
    L: FnMut(usize, usize) -> bool,
    S: FnMut(usize, usize),
{
    bubble_steps(len, &mut (), |_, i, j| less(i, j), |_, i, j| swap(i, j));
}

fn bubble_steps<C: ?Sized, L, S>(mut len: usize, ctx: &mut C, mut less: L, mut swap: S)
where
    L: FnMut(&C, usize, usize) -> bool,
    S: FnMut(&mut C, usize, usize),
{
    trace!(len, "bubble sort");
    while len > 0 {
        let mut last = 0;
        for i in 1..len {
            if less(&*ctx, i, i - 1) {
                swap(&mut *ctx, i, i - 1);
                last = i;
            }
        }
        len = last;
    }
}
