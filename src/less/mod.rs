//! Building blocks for `less` functions.

/// Returns `true`/`false` if `a` is strictly less/greater than `b`, otherwise the
/// result of `tie`. `tie` is called only when neither holds, which for floats
/// includes a NaN operand.
pub fn with_tie<T: PartialOrd, F: FnOnce() -> bool>(a: T, b: T, tie: F) -> bool {
    if a < b {
        return true;
    }
    if a > b {
        return false;
    }
    tie()
}

pub fn float64_with_tie<F: FnOnce() -> bool>(a: f64, b: f64, tie: F) -> bool {
    with_tie(a, b, tie)
}

pub fn int_with_tie<F: FnOnce() -> bool>(a: i64, b: i64, tie: F) -> bool {
    with_tie(a, b, tie)
}

/// Shorter sequences first, equal lengths ordered elementwise.
///
/// # Examples
///
/// ```
/// use sortp::less::length_then_lexicographic;
///
/// assert!(length_then_lexicographic(&[9], &[1, 1]));
/// assert!(length_then_lexicographic(&[1, 2], &[1, 3]));
/// assert!(!length_then_lexicographic(&[1, 3], &[1, 3]));
/// ```
pub fn length_then_lexicographic<T: Ord>(a: &[T], b: &[T]) -> bool {
    with_tie(a.len(), b.len(), || a < b)
}

/// [`length_then_lexicographic`] over the UTF-8 bytes of two strings.
pub fn str_length_then_lexicographic(a: &str, b: &str) -> bool {
    length_then_lexicographic(a.as_bytes(), b.as_bytes())
}
