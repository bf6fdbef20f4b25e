//! Partition based strategies, equal elements may cross the pivot.

pub mod partition;

pub mod quick_sort;

// Quicksort that hands sub-ranges at or below the threshold to insertion sort.
pub mod default_sort;
