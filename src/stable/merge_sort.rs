use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("merge_sort_stable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    merge_sort(v, &mut |a, b| a.gt(b));
}

#[inline]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

/// Sorts `v` with top-down merge sort.
///
/// *O*(*n* \* log(*n*)) comparisons on every input. Each merge step allocates its own buffers for
/// the two runs it merges, *O*(*n*) auxiliary memory at the top level.
pub fn merge_sort<T, F>(v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    merge_sort_range(v, 0, len, is_greater);
}

/// Sorts `v[start..end]`. Bounds are absolute positions in the full slice, so the split point of
/// a sub-range is the same no matter how it was reached.
fn merge_sort_range<T, F>(v: &mut [T], start: usize, end: usize, is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if end - start < 2 {
        return;
    }

    let mid = start + (end - start) / 2;
    merge_sort_range(v, start, mid, is_greater);
    merge_sort_range(v, mid, end, is_greater);
    merge(&mut v[start..end], mid - start, is_greater);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `v`.
///
/// Both runs are moved out into fresh buffers and interleaved back. An element of the right run is
/// only taken while the next left element must follow it, so equal elements of the left run stay
/// in front.
fn merge<T, F>(v: &mut [T], mid: usize, is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if mid == 0 || mid >= len {
        return;
    }

    let mut left_buf: Vec<T> = Vec::with_capacity(mid);
    let mut right_buf: Vec<T> = Vec::with_capacity(len - mid);

    // Panic safety:
    //
    // From the moment the runs are copied out, `hole` owns the unconsumed part of both buffers. If
    // `is_greater` panics it copies them into the trailing gap of `v`, so `v` still holds every
    // element exactly once. The buffers never have their length set, they only release memory.
    //
    // SAFETY: the buffers have capacity for their run, the runs don't overlap the buffers, and
    // `dest` stays at the start of the gap, which is exactly as long as what is left unconsumed.
    unsafe {
        let v = v.as_mut_ptr();
        let left = left_buf.as_mut_ptr();
        let right = right_buf.as_mut_ptr();

        ptr::copy_nonoverlapping(v, left, mid);
        ptr::copy_nonoverlapping(v.add(mid), right, len - mid);

        let mut hole = MergeHole {
            left,
            left_end: left.add(mid),
            right,
            right_end: right.add(len - mid),
            dest: v,
        };

        while hole.left < hole.left_end && hole.right < hole.right_end {
            let take_right = is_greater(&*hole.left, &*hole.right);

            if take_right {
                ptr::copy_nonoverlapping(hole.right, hole.dest, 1);
                hole.right = hole.right.add(1);
            } else {
                ptr::copy_nonoverlapping(hole.left, hole.dest, 1);
                hole.left = hole.left.add(1);
            }
            hole.dest = hole.dest.add(1);
        }
        // `hole` gets dropped and appends what remains of either run.
    }
}

// When dropped, copies `left..left_end` followed by `right..right_end` into `dest..`.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, and these are pointers into the run buffers and the
        // gap in the merged slice.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}
