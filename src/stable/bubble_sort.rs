use std::cmp::Ordering;

sort_impl!("bubble_sort_stable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    bubble_sort(v, &mut |a, b| a.gt(b));
}

#[inline]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

/// Sorts `v` with repeated adjacent-swap passes.
///
/// Each pass moves the greatest remaining element to the end of the active range, which then
/// shrinks by one. Stops after the first pass that swapped nothing, so already sorted input costs
/// `len - 1` comparisons.
pub fn bubble_sort<T, F>(v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut end = v.len();

    while end > 1 {
        let mut swapped = false;

        for i in 1..end {
            if is_greater(&v[i - 1], &v[i]) {
                v.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            return;
        }

        end -= 1;
    }
}
