use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

sort_impl!("insertion_sort_stable");

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    insertion_sort(v, &mut |a, b| a.gt(b));
}

#[inline]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Greater);
}

/// Sorts `v` by inserting every element from the second onward into the sorted prefix before it.
///
/// Sorted input costs `len - 1` comparisons.
pub fn insertion_sort<T, F>(v: &mut [T], is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for tail in 1..v.len() {
        // SAFETY: 0 < tail < v.len().
        unsafe {
            insert_tail(v, tail, is_greater);
        }
    }
}

/// Moves `v[tail]` left into place assuming `v[..tail]` is already sorted.
///
/// The element is held aside while every predecessor that must follow it shifts one slot to the
/// right, then written into the gap that is left.
///
/// # Safety
///
/// `0 < tail < v.len()`.
unsafe fn insert_tail<T, F>(v: &mut [T], tail: usize, is_greater: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // SAFETY: see individual comments.
    unsafe {
        let v_base = v.as_mut_ptr();
        // SAFETY: tail is in-bounds and tail - 1 as well since tail > 0.
        let tail = v_base.add(tail);
        let mut sift = tail.sub(1);

        if !is_greater(&*sift, &*tail) {
            return;
        }

        // SAFETY: after this read `tail` is never read from again, only overwritten. Should
        // `is_greater` panic, or the insertion point is found, `hole` writes the element back into
        // the current gap.
        let tmp = ManuallyDrop::new(ptr::read(tail));
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: tail,
        };

        loop {
            // SAFETY: `sift` is in-bounds and `hole.dest` is the gap right of it.
            ptr::copy_nonoverlapping(sift, hole.dest, 1);
            hole.dest = sift;

            if sift == v_base {
                break;
            }

            // SAFETY: sift != v_base, so the predecessor is in-bounds.
            sift = sift.sub(1);
            if !is_greater(&*sift, &*tmp) {
                break;
            }
        }
        // `hole` gets dropped and copies `tmp` into the remaining gap.
    }
}

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` holds the element that was read out and `dest` is the single gap.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
