//! Stable top-down merge sort.
//!
//! The slice is split with the left half taking the extra element on odd
//! lengths. Merges copy both halves to temporaries and write back in
//! place; on ties the left element wins, which keeps the sort stable.
//!
//! [`par_merge_sort`] sorts the two halves of large ranges with
//! `rayon::join` and merges after both return. The halves are disjoint
//! `&mut` borrows from `split_at_mut`, so no element is reachable from two
//! tasks.

/// Ranges shorter than this are sorted sequentially by [`par_merge_sort`].
pub const PAR_CUTOFF: usize = 1 << 13;

fn merge<T: Ord + Clone>(data: &mut [T], mid: usize) {
    let left = data[..mid].to_vec();
    let right = data[mid..].to_vec();
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    for x in &left[i..] {
        data[k] = x.clone();
        k += 1;
    }
    for x in &right[j..] {
        data[k] = x.clone();
        k += 1;
    }
}

/// Sort `data` in place, stably, in ascending order.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let mid = data.len().div_ceil(2);
    {
        let (left, right) = data.split_at_mut(mid);
        merge_sort(left);
        merge_sort(right);
    }
    merge(data, mid);
}

/// Fork-join [`merge_sort`]; the result is identical.
pub fn par_merge_sort<T: Ord + Clone + Send>(data: &mut [T]) {
    if data.len() < PAR_CUTOFF {
        merge_sort(data);
        return;
    }
    let mid = data.len().div_ceil(2);
    {
        let (left, right) = data.split_at_mut(mid);
        rayon::join(|| par_merge_sort(left), || par_merge_sort(right));
    }
    merge(data, mid);
}

/// `true` if every adjacent pair is in non-decreasing order.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
