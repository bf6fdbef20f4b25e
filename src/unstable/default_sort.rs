use std::cmp::Ordering;

use crate::stable::insertion_sort::insertion_sort;
use crate::unstable::quick_sort::quicksort;
use crate::DEFAULT_SORT_INSERTION_THRESHOLD;

sort_impl!("default_sort_hybrid_unstable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    default_sort(v, &mut |a, b| a.gt(b));
}

#[inline]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    default_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

/// Sorts `v` with insertion sort if it has at most [`DEFAULT_SORT_INSERTION_THRESHOLD`] elements,
/// otherwise with quicksort that stops partitioning once a sub-range shrinks to that size and
/// finishes it with insertion sort.
///
/// Same asymptotic bounds as quicksort, with fewer expensive partition steps. Not stable.
pub fn default_sort<T, F>(v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= DEFAULT_SORT_INSERTION_THRESHOLD {
        insertion_sort(v, is_greater);
    } else {
        quicksort(v, DEFAULT_SORT_INSERTION_THRESHOLD, is_greater);
    }
}
