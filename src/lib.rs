//! Six interchangeable in-place sorting strategies behind one dispatch entry point.
//!
//! Every strategy works on a `&mut [T]` and a comparator `is_greater(a, b)` that returns `true`
//! when `a` must be placed after `b`. Ascending order over `Ord` types is `|a, b| a.gt(b)`.

use std::cmp::Ordering;
use std::mem;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

mod algorithm;

pub mod stable;
pub mod unstable;

pub use algorithm::{ParseSortAlgorithmError, SortAlgorithm};

/// Sub-ranges of at most this many elements are finished with insertion sort by
/// [`SortAlgorithm::Default`].
pub const DEFAULT_SORT_INSERTION_THRESHOLD: usize = 200;

/// Sorts `v` in place with the strategy picked by `algorithm`.
///
/// `is_greater(a, b)` must return `true` when `a` has to be placed after `b`, and must define a
/// strict weak ordering. If it doesn't, the resulting order is unspecified, but `v` still holds
/// every original element exactly once. The same holds if `is_greater` panics.
///
/// Only [`SortAlgorithm::Merge`] allocates, one pair of temporary buffers per merge step.
pub fn sort_with<T, F>(v: &mut [T], mut is_greater: F, algorithm: SortAlgorithm)
where
    F: FnMut(&T, &T) -> bool,
{
    // Empty and single element ranges are sorted, so are slices of zero-sized types.
    if v.len() < 2 || mem::size_of::<T>() == 0 {
        return;
    }

    let is_greater = &mut is_greater;
    match algorithm {
        SortAlgorithm::Default => unstable::default_sort::default_sort(v, is_greater),
        SortAlgorithm::Bubble => stable::bubble_sort::bubble_sort(v, is_greater),
        SortAlgorithm::Selection => stable::selection_sort::selection_sort(v, is_greater),
        SortAlgorithm::Insertion => stable::insertion_sort::insertion_sort(v, is_greater),
        SortAlgorithm::Merge => stable::merge_sort::merge_sort(v, is_greater),
        SortAlgorithm::Quick => unstable::quick_sort::quick_sort(v, is_greater),
    }
}

/// Sorts `v` ascending with [`SortAlgorithm::Default`].
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with(v, |a, b| a.gt(b), SortAlgorithm::Default);
}

/// Sorts `v` with an [`Ordering`] comparator and [`SortAlgorithm::Default`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_algorithm(v, compare, SortAlgorithm::Default);
}

/// Sorts `v` with an [`Ordering`] comparator and an explicit strategy.
#[inline]
pub fn sort_by_algorithm<T, F>(v: &mut [T], mut compare: F, algorithm: SortAlgorithm)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_with(v, |a, b| compare(a, b) == Ordering::Greater, algorithm);
}
