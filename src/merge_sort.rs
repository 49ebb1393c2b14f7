use ndarray::{ArrayView1, ArrayViewMut1, Axis, s};

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc as no_std_alloc;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use no_std_alloc::vec;

/// Sorts `v` using top-down merge sort, which is *O*(*n* \* log(*n*)) worst-case.
///
/// Allocates a single scratch buffer of `v.len()` elements that is shared by all recursion levels.
#[cfg(feature = "alloc")]
pub fn merge_sort(v: ArrayViewMut1<'_, i64>) {
	let len = v.len();
	if len < 2 {
		return;
	}

	let mut buf = vec![0; len];
	merge_sort_with_buffer(v, ArrayViewMut1::from(&mut buf[..]));
}

/// Sorts `v` using `buf` as scratch memory.
///
/// Only the first `v.len()` elements of `buf` are written to. Their content afterwards is
/// unspecified.
///
/// # Panics
///
/// Panics if `buf` is shorter than `v`.
pub fn merge_sort_with_buffer(v: ArrayViewMut1<'_, i64>, mut buf: ArrayViewMut1<'_, i64>) {
	let len = v.len();
	assert!(
		buf.len() >= len,
		"merge sort buffer of length {} is shorter than the array of length {}",
		buf.len(),
		len
	);
	if len < 2 {
		return;
	}

	recurse(v, buf.slice_mut(s![..len]));
}

/// Sorts `v` recursively, `buf` being the sub-range of the scratch buffer matching `v`.
///
/// Both must be of the same length, which must be at least 2.
fn recurse(mut v: ArrayViewMut1<'_, i64>, mut buf: ArrayViewMut1<'_, i64>) {
	let len = v.len();
	debug_assert!(len >= 2 && buf.len() == len);

	// Pairs are the leaves.
	if len == 2 {
		if v[1] < v[0] {
			v.swap(0, 1);
		}
		return;
	}

	let mid = len / 2;
	{
		let (left, right) = v.view_mut().split_at(Axis(0), mid);
		let (left_buf, right_buf) = buf.view_mut().split_at(Axis(0), mid);
		if left.len() >= 2 {
			recurse(left, left_buf);
		}
		if right.len() >= 2 {
			recurse(right, right_buf);
		}
	}

	merge(v.view(), mid, buf.view_mut());
	v.assign(&buf);
}

/// Merges the non-decreasing runs `v[..mid]` and `v[mid..]` into `out`.
///
/// If equal, the left run is consumed first.
fn merge(v: ArrayView1<'_, i64>, mid: usize, mut out: ArrayViewMut1<'_, i64>) {
	let len = v.len();
	let (mut l, mut r) = (0, mid);
	for dest in out.iter_mut() {
		if r == len || (l < mid && v[l] <= v[r]) {
			*dest = v[l];
			l += 1;
		} else {
			*dest = v[r];
			r += 1;
		}
	}
	debug_assert!(l == mid && r == len);
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{merge, merge_sort, merge_sort_with_buffer};
	use ndarray::{Array1, ArrayView1, ArrayViewMut1, arr1, arr2};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<i64>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		merge_sort(array.view_mut());
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn sorted_with_reused_buffer(xss: Vec<Vec<i64>>) {
		let mut buf = vec![0; xss.iter().map(Vec::len).max().unwrap_or(0) + 3];
		for xs in xss {
			let mut sorted = xs.clone();
			sorted.sort_unstable();
			let mut array = Array1::from_vec(xs);
			merge_sort_with_buffer(array.view_mut(), ArrayViewMut1::from(&mut buf[..]));
			assert_eq!(array, Array1::from_vec(sorted));
		}
	}

	#[test]
	fn small() {
		let cases: [&[i64]; 8] = [
			&[],
			&[0],
			&[1, 0],
			&[0, 1],
			&[3, 1, 2],
			&[2, 2, 1, 2],
			&[2, 1, 0],
			&[1, 0, 1],
		];
		for case in cases {
			let mut sorted = case.to_vec();
			sorted.sort_unstable();
			let mut array = Array1::from_vec(case.to_vec());
			merge_sort(array.view_mut());
			assert_eq!(array.to_vec(), sorted, "merge sort of {case:?}");
		}
	}

	#[test]
	fn column() {
		let mut v = arr2(&[[3, -1], [1, 7], [2, 0]]);
		merge_sort(v.column_mut(0));
		assert_eq!(v, arr2(&[[1, -1], [2, 7], [3, 0]]));
	}

	#[test]
	fn merges_into_out() {
		let v = [1, 4, 4, 9, 0, 4, 5];
		let mut out = [0; 7];
		merge(ArrayView1::from(&v), 4, ArrayViewMut1::from(&mut out[..]));
		assert_eq!(out, [0, 1, 4, 4, 4, 5, 9]);
	}

	#[test]
	fn leaves_buffer_tail_alone() {
		let mut v = arr1(&[5, 4, 3]);
		let mut buf = [-7; 5];
		merge_sort_with_buffer(v.view_mut(), ArrayViewMut1::from(&mut buf[..]));
		assert_eq!(v, arr1(&[3, 4, 5]));
		assert_eq!(buf[3..], [-7, -7]);
	}

	#[test]
	#[should_panic(expected = "shorter than the array")]
	fn short_buffer() {
		let mut v = arr1(&[3, 2, 1]);
		let mut buf = [0; 2];
		merge_sort_with_buffer(v.view_mut(), ArrayViewMut1::from(&mut buf[..]));
	}
}
