//! Median-of-three pivot selection and the two-sided partition shared by quicksort and the
//! default sort.

/// Selects a pivot from `v` as the median of the elements at 1/4, 1/2 and 3/4 of its length.
///
/// Panics if `v` is empty.
pub fn choose_pivot<T, F>(v: &[T], is_greater: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let half = len / 2;
    let quarter = half / 2;

    median3(v, quarter, half, len - 1 - quarter, is_greater)
}

/// Returns whichever of the positions `a`, `b` and `c` holds the middle element.
fn median3<T, F>(v: &[T], a: usize, b: usize, c: usize, is_greater: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Avoids the third comparison when `a` is already known to be the median.
    let x = is_greater(&v[a], &v[b]);
    let y = is_greater(&v[a], &v[c]);
    if x == y {
        // If x=y=1 then b, c < a. In this case we want the greater of b and c.
        // If x=y=0 then a <= b, c. In this case we want the lesser of b and c.
        // By toggling the outcome of b > c using XOR x we get this behavior.
        let z = is_greater(&v[b], &v[c]);
        if z ^ x {
            c
        } else {
            b
        }
    } else {
        // Either c <= a < b or b <= a < c, thus a is our median.
        a
    }
}

/// Re-arranges `v` around the element at `pivot` and returns the pivot's final position `p`.
///
/// Afterwards no element in `v[..p]` must follow the pivot and the pivot must not follow any
/// element in `v[p + 1..]`.
///
/// The first pass gathers every element before the pivot that must precede it at the front and
/// places the pivot right behind them. The second pass scans from the back towards the pivot and
/// gathers every element that must follow it at the back, then swaps the pivot in front of them.
/// Equal elements may cross, this is not stable.
///
/// If `is_greater` does not implement a strict weak ordering the resulting order is unspecified,
/// but all original elements remain in `v`.
pub fn partition<T, F>(v: &mut [T], pivot: usize, is_greater: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(pivot < len, "pivot {pivot} out of bounds for length {len}");

    let mut front = 0;
    for i in 0..pivot {
        if is_greater(&v[pivot], &v[i]) {
            v.swap(i, front);
            front += 1;
        }
    }
    v.swap(front, pivot);
    let pivot = front;

    // Only positions past the pivot are swapped here, `back >= i > pivot` holds throughout.
    let mut back = len - 1;
    for i in ((pivot + 1)..len).rev() {
        if is_greater(&v[i], &v[pivot]) {
            v.swap(i, back);
            back -= 1;
        }
    }
    v.swap(back, pivot);

    back
}
