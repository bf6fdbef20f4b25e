//! Shared test suite and input patterns for sort implementations.

use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
pub mod tests;

#[doc(hidden)]
pub use paste;
