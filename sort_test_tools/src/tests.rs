//! Test bodies shared by every sort implementation. Instantiate them with
//! [`instantiate_sort_tests!`](crate::instantiate_sort_tests) and, for sorts that keep equal
//! elements in order, [`instantiate_stable_sort_tests!`](crate::instantiate_stable_sort_tests).

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 199, 200, 201,
    280, 400, 500,
];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: &[usize] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 199, 200, 201,
    280, 400, 500, 1_000, 2_048, 10_000,
];

fn sort_comp<T, S>(v: &mut [T])
where
    T: Ord + Clone + Debug,
    S: Sort,
{
    let seed = patterns::random_init_seed();
    let is_small_test = v.len() <= 100;
    let original = v.to_vec();

    let mut expected = v.to_vec();
    expected.sort();

    <S as Sort>::sort(v);

    if v[..] != expected[..] {
        if is_small_test {
            eprintln!("Original: {original:?}");
            eprintln!("Expected: {expected:?}");
            eprintln!("Got:      {v:?}");
        } else {
            // Large arrays output them as files.
            let original_name = format!("original_{}.txt", seed);
            let std_name = format!("stdlib_sorted_{}.txt", seed);
            let test_name = format!("testsort_sorted_{}.txt", seed);

            let _ = std::fs::write(&original_name, format!("{original:?}"));
            let _ = std::fs::write(&std_name, format!("{expected:?}"));
            let _ = std::fs::write(&test_name, format!("{v:?}"));

            eprintln!(
                "Failed comparison, see files {original_name}, {std_name}, and {test_name}"
            );
        }

        panic!(
            "Test assertion failed! {} with seed {seed} and len {}",
            <S as Sort>::name(),
            v.len()
        );
    }
}

fn test_pattern<S: Sort>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for &len in TEST_SIZES {
        let mut v = pattern_fn(len);
        sort_comp::<i32, S>(&mut v);
    }
}

fn is_sorted_by<T>(v: &[T], mut is_greater: impl FnMut(&T, &T) -> bool) -> bool {
    v.windows(2).all(|w| !is_greater(&w[0], &w[1]))
}

pub fn basic<S: Sort>() {
    // Empty and single element ranges are left alone.
    let mut empty: [i32; 0] = [];
    <S as Sort>::sort(&mut empty);
    assert!(empty.is_empty());

    let mut single = [77];
    <S as Sort>::sort(&mut single);
    assert_eq!(single, [77]);

    let mut never_compared = [-1];
    <S as Sort>::sort_by(&mut never_compared, |_, _| panic!("compared a single element"));
    assert_eq!(never_compared, [-1]);

    let mut two = [2, 1];
    <S as Sort>::sort(&mut two);
    assert_eq!(two, [1, 2]);

    let mut three = [3, 1, 2];
    <S as Sort>::sort(&mut three);
    assert_eq!(three, [1, 2, 3]);
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn scenarios<S: Sort>() {
    let cases = [
        (vec![5, 3, 4, 1, 2], vec![1, 2, 3, 4, 5]),
        (vec![9, 1, 2, 3, 4, 5, 6, 7, 8], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]),
        (vec![1, 2, 3, 4, 9, 5, 6, 7, 8], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]),
        (vec![9, 8, 7, 6, 5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]),
    ];

    for (input, expected) in cases {
        let mut v = input.clone();
        <S as Sort>::sort(&mut v);
        assert_eq!(v, expected, "{}: input {input:?}", <S as Sort>::name());
    }
}

pub fn random<S: Sort>() {
    test_pattern::<S>(patterns::random);
}

pub fn random_dense<S: Sort>() {
    test_pattern::<S>(|len| patterns::random_uniform(len, 0..=(len / 4) as i32));
}

pub fn random_binary<S: Sort>() {
    test_pattern::<S>(|len| patterns::random_uniform(len, 0..=1));
}

pub fn random_zipf<S: Sort>() {
    test_pattern::<S>(|len| patterns::random_zipf(len, 1.0));
}

pub fn all_equal<S: Sort>() {
    test_pattern::<S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_pattern::<S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_pattern::<S>(patterns::descending);
}

pub fn front_anomaly<S: Sort>() {
    test_pattern::<S>(patterns::front_anomaly);
}

pub fn middle_anomaly<S: Sort>() {
    test_pattern::<S>(patterns::middle_anomaly);
}

pub fn back_anomaly<S: Sort>() {
    test_pattern::<S>(patterns::back_anomaly);
}

pub fn bitonic<S: Sort>() {
    test_pattern::<S>(patterns::bitonic);
}

pub fn rotated<S: Sort>() {
    test_pattern::<S>(patterns::rotated);
}

pub fn int_edge<S: Sort>() {
    let mut v = vec![i32::MAX, 0, i32::MIN, -1, i32::MAX, 1, i32::MIN];
    sort_comp::<i32, S>(&mut v);

    let mut v = vec![u64::MAX, 0, u64::MAX / 2, 1];
    sort_comp::<u64, S>(&mut v);
}

pub fn strings<S: Sort>() {
    for &len in TEST_SIZES {
        let mut v: Vec<String> = patterns::random(len)
            .into_iter()
            .map(|val| format!("{:010}", val))
            .collect();
        sort_comp::<String, S>(&mut v);
    }
}

pub fn idempotent<S: Sort>() {
    for &len in TEST_SIZES {
        let mut v = patterns::random(len);
        <S as Sort>::sort(&mut v);
        let once = v.clone();
        <S as Sort>::sort(&mut v);
        assert_eq!(v, once);
    }
}

pub fn descending_comparator<S: Sort>() {
    for &len in TEST_SIZES {
        let mut v = patterns::random(len);
        let mut expected = v.clone();
        expected.sort_by(|a, b| b.cmp(a));

        <S as Sort>::sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, expected);
        assert!(is_sorted_by(&v, |a, b| a < b));
    }
}

pub fn key_comparator<S: Sort>() {
    for &len in TEST_SIZES {
        let mut v: Vec<(i32, u8)> = patterns::random(len)
            .into_iter()
            .map(|val| (val, (val % 7) as u8))
            .collect();
        let mut expected_keys: Vec<u8> = v.iter().map(|e| e.1).collect();
        expected_keys.sort();

        <S as Sort>::sort_by(&mut v, |a, b| a.1.cmp(&b.1));
        assert!(is_sorted_by(&v, |a, b| a.1 > b.1));
        assert!(v.iter().map(|e| e.1).eq(expected_keys));
    }
}

pub fn stateful_comparator<S: Sort>() {
    for &len in TEST_SIZES {
        let mut v = patterns::random(len);
        let mut comparisons = 0usize;

        <S as Sort>::sort_by(&mut v, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        assert!(is_sorted_by(&v, |a, b| a > b));
        if len >= 2 {
            assert!(comparisons >= len - 1, "{comparisons} comparisons for len {len}");
        } else {
            assert_eq!(comparisons, 0);
        }
    }
}

pub fn panic_retain_original_set<S: Sort>() {
    for &len in TEST_SIZES.iter().filter(|&&len| len >= 2 && len <= 500) {
        let original: Vec<String> = patterns::random(len)
            .into_iter()
            .map(|val| val.to_string())
            .collect();
        let mut v = original.clone();

        let panic_after = len / 2;
        let mut comparisons = 0usize;
        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            <S as Sort>::sort_by(&mut v, |a, b| {
                comparisons += 1;
                if comparisons > panic_after {
                    panic!("comparator gave up");
                }
                a.cmp(b)
            });
        }));

        // Only the shortest inputs may finish before the comparator gives up.
        if res.is_ok() {
            assert!(len <= 3, "expected a panic for len {len}");
        }

        let mut after = v.clone();
        after.sort();
        let mut expected = original;
        expected.sort();
        assert_eq!(after, expected, "elements lost or duplicated for len {len}");
    }
}

// --- Stable sorts only ---

fn tagged(len: usize, key_range: i32) -> Vec<(i32, usize)> {
    patterns::random_uniform(len, 0..=key_range)
        .into_iter()
        .enumerate()
        .map(|(idx, key)| (key, idx))
        .collect()
}

fn check_stable(v: &[(i32, usize)]) {
    for w in v.windows(2) {
        assert!(w[0].0 <= w[1].0, "not sorted by key: {:?}", w);
        if w[0].0 == w[1].0 {
            assert!(w[0].1 < w[1].1, "equal keys out of input order: {:?}", w);
        }
    }
}

pub fn stability<S: Sort>() {
    for &len in TEST_SIZES {
        for key_range in [1, 8, (len / 4) as i32] {
            let mut v = tagged(len, key_range);
            <S as Sort>::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
            check_stable(&v);
        }
    }
}

pub fn stability_patterns<S: Sort>() {
    let pattern_fns: [fn(usize) -> Vec<i32>; 6] = [
        patterns::descending,
        patterns::front_anomaly,
        patterns::middle_anomaly,
        patterns::back_anomaly,
        patterns::bitonic,
        patterns::rotated,
    ];

    for pattern_fn in pattern_fns {
        for &len in TEST_SIZES {
            // Halving the values turns every pattern into one with duplicate keys.
            let mut v: Vec<(i32, usize)> = pattern_fn(len)
                .into_iter()
                .enumerate()
                .map(|(idx, val)| (val / 2, idx))
                .collect();
            <S as Sort>::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
            check_stable(&v);
        }
    }
}

pub fn stability_with_reverse_comparator<S: Sort>() {
    for &len in TEST_SIZES {
        let mut v = tagged(len, 8);
        <S as Sort>::sort_by(&mut v, |a, b| b.0.cmp(&a.0));

        for w in v.windows(2) {
            assert!(w[0].0 >= w[1].0);
            if w[0].0 == w[1].0 {
                assert!(w[0].1 < w[1].1);
            }
        }
    }
}

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        $crate::paste::paste! {
            #[test]
            fn [<sort_ $test_fn_name>]() {
                $crate::tests::$test_fn_name::<$sort_impl>();
            }
        }
    };
}

/// Generates one `#[test]` per shared test body for `$sort_impl`.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, basic);
        $crate::instantiate_sort_test_inner!($sort_impl, fixed_seed);
        $crate::instantiate_sort_test_inner!($sort_impl, scenarios);
        $crate::instantiate_sort_test_inner!($sort_impl, random);
        $crate::instantiate_sort_test_inner!($sort_impl, random_dense);
        $crate::instantiate_sort_test_inner!($sort_impl, random_binary);
        $crate::instantiate_sort_test_inner!($sort_impl, random_zipf);
        $crate::instantiate_sort_test_inner!($sort_impl, all_equal);
        $crate::instantiate_sort_test_inner!($sort_impl, ascending);
        $crate::instantiate_sort_test_inner!($sort_impl, descending);
        $crate::instantiate_sort_test_inner!($sort_impl, front_anomaly);
        $crate::instantiate_sort_test_inner!($sort_impl, middle_anomaly);
        $crate::instantiate_sort_test_inner!($sort_impl, back_anomaly);
        $crate::instantiate_sort_test_inner!($sort_impl, bitonic);
        $crate::instantiate_sort_test_inner!($sort_impl, rotated);
        $crate::instantiate_sort_test_inner!($sort_impl, int_edge);
        $crate::instantiate_sort_test_inner!($sort_impl, strings);
        $crate::instantiate_sort_test_inner!($sort_impl, idempotent);
        $crate::instantiate_sort_test_inner!($sort_impl, descending_comparator);
        $crate::instantiate_sort_test_inner!($sort_impl, key_comparator);
        $crate::instantiate_sort_test_inner!($sort_impl, stateful_comparator);
        $crate::instantiate_sort_test_inner!($sort_impl, panic_retain_original_set);
    };
}

/// Stability checks on top of [`instantiate_sort_tests!`].
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!($sort_impl);
        $crate::instantiate_sort_test_inner!($sort_impl, stability);
        $crate::instantiate_sort_test_inner!($sort_impl, stability_patterns);
        $crate::instantiate_sort_test_inner!($sort_impl, stability_with_reverse_comparator);
    };
}
