//! Sequence algorithms driven by caller-supplied closures.
//!
//! Nothing here needs the caller's data to be a slice or any other container:
//! sorts see a sequence through `len`, `less(i, j)` and `swap(i, j)`, merge and
//! diff see two sequences through a comparison and per-side callbacks. Every
//! index handed to a callback is within the bound stated for that call.
//!
//! Callers are trusted. Unsorted input to [`merge()`] or [`diff()`], or a `less`
//! that is not a strict weak ordering, gives wrong output or a panic rather than an
//! error.
//!
//! A `less` and a `swap` closure that both touch the same data must share it
//! through interior mutability:
//!
//! ```
//! use std::cell::RefCell;
//!
//! let data = RefCell::new(vec![5, 3, 1, 8, 0]);
//! sortp::sort_by(
//!     5,
//!     |i, j| data.borrow()[i] < data.borrow()[j],
//!     |i, j| data.borrow_mut().swap(i, j),
//! );
//! assert_eq!(data.into_inner(), vec![0, 1, 3, 5, 8]);
//! ```
//!
//! Or implement [`Sequence`] for the data and use the trait-form functions.

pub mod less;
mod sort;
mod bubble;
mod merge;
mod diff;

pub use sort::{Sequence, Closures, SliceBy, by};
pub use sort::{sort, sort_by, stable_sort, stable_sort_by};
pub use sort::{index_sort, index_sort_by, stable_index_sort, stable_index_sort_by};
pub use sort::{is_sorted, is_sorted_by, reverse_less};
pub use bubble::{bubble, bubble_by};
pub use merge::{merge, merge_with, merge_sorted};
pub use diff::{diff, diff_with, diff_sorted_list};

/// Which of two input sequences an emitted index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left(usize),
    Right(usize),
}
