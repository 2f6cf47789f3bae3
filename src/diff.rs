use std::cmp::Ordering;

use tracing::trace;

use crate::Side;

/// Walks two ascending sequences and emits the indices present on one side only.
/// Matching elements advance both sides and are not reported.
///
/// Indices of each side come out in ascending order. Both inputs must be sorted by
/// the order `compare` implies.
pub fn diff_with<C, E>(left_len: usize, right_len: usize, mut compare: C, mut emit: E)
where
    C: FnMut(usize, usize) -> Ordering,
    E: FnMut(Side),
{
    trace!(left_len, right_len, "diffing");
    let (mut l, mut r) = (0, 0);
    while l < left_len && r < right_len {
        match compare(l, r) {
            Ordering::Less => {
                emit(Side::Left(l));
                l += 1;
            }
            Ordering::Greater => {
                emit(Side::Right(r));
                r += 1;
            }
            Ordering::Equal => {
                l += 1;
                r += 1;
            }
        }
    }

    for l in l..left_len {
        emit(Side::Left(l));
    }
    for r in r..right_len {
        emit(Side::Right(r));
    }
}

pub fn diff<C, OL, OR>(left_len: usize, right_len: usize, compare: C, mut on_left_only: OL, mut on_right_only: OR)
where
    C: FnMut(usize, usize) -> Ordering,
    OL: FnMut(usize),
    OR: FnMut(usize),
{
    diff_with(left_len, right_len, compare, |side| match side {
        Side::Left(l) => on_left_only(l),
        Side::Right(r) => on_right_only(r),
    });
}

/// Returns the elements only in `from` (extra) and those only in `to` (missing).
///
/// # Examples
///
/// ```
/// let (extra, missing) = sortp::diff_sorted_list(&["a", "b", "d", "f"], &["b", "c", "d", "g", "h"]);
/// assert_eq!(extra, vec!["a", "f"]);
/// assert_eq!(missing, vec!["c", "g", "h"]);
/// ```
pub fn diff_sorted_list<T: Ord + Clone>(from: &[T], to: &[T]) -> (Vec<T>, Vec<T>) {
    let mut extra = Vec::new();
    let mut missing = Vec::new();
    diff(
        from.len(),
        to.len(),
        |l, r| from[l].cmp(&to[r]),
        |l| extra.push(from[l].clone()),
        |r| missing.push(to[r].clone()),
    );
    (extra, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: [&str; 4] = ["a", "b", "d", "f"];
    const TO: [&str; 5] = ["b", "c", "d", "g", "h"];

    #[test]
    fn extra_and_missing() {
        let mut extra = Vec::new();
        let mut missing = Vec::new();
        diff(
            FROM.len(),
            TO.len(),
            |l, r| FROM[l].cmp(TO[r]),
            |l| extra.push(l),
            |r| missing.push(r),
        );
        assert_eq!(extra, vec![0, 3]);
        assert_eq!(missing, vec![1, 3, 4]);
    }

    #[test]
    fn swapped_roles() {
        let (extra, missing) = diff_sorted_list(&TO, &FROM);
        assert_eq!(extra, vec!["c", "g", "h"]);
        assert_eq!(missing, vec!["a", "f"]);
    }

    #[test]
    fn against_itself() {
        diff_with(FROM.len(), FROM.len(), |l, r| FROM[l].cmp(FROM[r]), |side| {
            panic!("unexpected {:?}", side)
        });
    }

    #[test]
    fn one_side_empty() {
        let mut sides = Vec::new();
        diff_with(0, 2, |_, _| panic!("no comparisons expected"), |side| sides.push(side));
        assert_eq!(sides, vec![Side::Right(0), Side::Right(1)]);

        let (extra, missing) = diff_sorted_list(&[1, 2], &[]);
        assert_eq!(extra, vec![1, 2]);
        assert!(missing.is_empty());
    }

    #[test]
    fn each_side_ascending() {
        let from = [1, 2, 2, 5, 9, 10];
        let to = [0, 2, 3, 9, 11];
        let mut sides = Vec::new();
        diff_with(from.len(), to.len(), |l, r| from[l].cmp(&to[r]), |side| sides.push(side));
        assert_eq!(
            sides,
            vec![Side::Right(0), Side::Left(0), Side::Left(2), Side::Right(2), Side::Left(3), Side::Left(5), Side::Right(4)]
        );
    }
}
