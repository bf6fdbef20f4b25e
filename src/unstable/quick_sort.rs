use std::cmp::Ordering;
use std::ops::Range;

use crate::stable::insertion_sort::insertion_sort;
use crate::unstable::partition::{choose_pivot, partition};

sort_impl!("quick_sort_median_3_unstable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    quick_sort(v, &mut |a, b| a.gt(b));
}

#[inline]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    quick_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

/// Sorts `v` with median-of-three quicksort, partitioning down to single elements.
///
/// *O*(*n* \* log(*n*)) on average, *O*(*n*^2) worst-case.
pub fn quick_sort<T, F>(v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort(v, 1, is_greater);
}

/// Partitions `v` until every sub-range has at most `insertion_threshold` elements and finishes
/// those with insertion sort. A threshold of one partitions all the way down.
///
/// Sub-ranges are tracked as absolute bounds into `v`. Instead of recursing, the larger side of
/// every partition is deferred on an explicit stack and the smaller side is handled next, which
/// keeps at most *O*(log(*n*)) sub-ranges pending even on adversarial input.
pub(crate) fn quicksort<T, F>(v: &mut [T], insertion_threshold: usize, is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut pending: Vec<Range<usize>> = Vec::new();
    let mut current = 0..v.len();

    loop {
        if current.len() <= insertion_threshold {
            insertion_sort(&mut v[current], is_greater);

            match pending.pop() {
                Some(next) => {
                    current = next;
                    continue;
                }
                None => return,
            }
        }

        let sub = &mut v[current.clone()];
        let pivot_pos = choose_pivot(sub, is_greater);
        let mid = current.start + partition(sub, pivot_pos, is_greater);

        // The pivot at `mid` is in its final place.
        let left = current.start..mid;
        let right = (mid + 1)..current.end;

        let (smaller, larger) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };

        if larger.len() > 1 {
            pending.push(larger);
        }
        current = smaller;
    }
}
