/// Rearranges a sequence with `swap` so that position `i` ends up holding the element
/// that was at `perm[i]`.
///
/// Every swap settles one position for good, so there are at most `len - 1` of them.
pub(super) fn apply_permutation<S: FnMut(usize, usize)>(perm: &[usize], mut swap: S) {
    let len = perm.len();
    // holder[pos] is the original index now at pos, position is its inverse.
    let mut holder: Vec<usize> = (0..len).collect();
    let mut position = holder.clone();

    for (i, &wanted) in perm.iter().enumerate() {
        let from = position[wanted];
        if from == i {
            continue;
        }
        debug_assert!(from > i, "{} appears twice in the permutation", wanted);

        swap(i, from);
        let displaced = holder[i];
        holder[from] = displaced;
        position[displaced] = from;
        holder[i] = wanted;
        position[wanted] = i;
    }
}
