use std::cmp::Ordering;

sort_impl!("selection_sort_stable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    selection_sort(v, &mut |a, b| a.gt(b));
}

#[inline]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

/// Sorts `v` by selecting the least remaining element for every position but the last.
///
/// Always performs `len * (len - 1) / 2` comparisons. The scan keeps the first of several
/// equal candidates, and the chosen element is rotated into place instead of swapped, so the
/// elements it jumps over keep their relative order. Nothing moves when the element at the
/// position is already the least.
pub fn selection_sort<T, F>(v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for pos in 0..len - 1 {
        let mut least = pos;

        for i in (pos + 1)..len {
            if is_greater(&v[least], &v[i]) {
                least = i;
            }
        }

        if least != pos {
            v[pos..=least].rotate_right(1);
        }
    }
}
