//! Strategies that keep equal elements in their relative input order.

pub mod bubble_sort;

pub mod selection_sort;

// Also finishes small sub-ranges for `unstable::default_sort`.
pub mod insertion_sort;

pub mod merge_sort;
