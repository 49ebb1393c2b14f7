//! Pivot selection strategies for [`partition_sort`](crate::partition_sort).
//!
//! A strategy maps a non-empty view to the `(index, value)` of the element it picks. None of them
//! has to find the true median, they only need to approximate it well enough to keep partitions
//! balanced on the inputs they are meant for.
//!
//! Custom strategies are plain functions or closures with the same signature.
//!
//! ```
//! use ndarray_isort::{ndarray::ArrayView1, partition_sort};
//!
//! // Always picks the first element, which is quadratic on sorted input.
//! fn first(v: ArrayView1<'_, i64>) -> (usize, i64) {
//! 	(0, v[0])
//! }
//!
//! let mut v = [5, -1, 3, 3, 0];
//! partition_sort(&mut v, first);
//! assert_eq!(v, [-1, 0, 3, 3, 5]);
//! ```

use ndarray::{ArrayView1, s};

/// Signature shared by all pivot strategies.
pub type Pivoter = for<'a> fn(ArrayView1<'a, i64>) -> (usize, i64);

/// Picks an element uniformly at random using the thread-local generator.
///
/// # Panics
///
/// Panics if `v` is empty.
#[cfg(feature = "std")]
pub fn random(v: ArrayView1<'_, i64>) -> (usize, i64) {
	use rand::Rng;

	let i = rand::rng().random_range(0..v.len());
	(i, v[i])
}

/// Picks the element at `len / 2`.
///
/// # Panics
///
/// Panics if `v` is empty.
#[inline]
pub fn middle(v: ArrayView1<'_, i64>) -> (usize, i64) {
	let i = v.len() / 2;
	(i, v[i])
}

/// Picks the median of the first, middle and last elements.
///
/// On ties the first element is preferred over the middle one, and the middle one over the last.
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn median3(v: ArrayView1<'_, i64>) -> (usize, i64) {
	let (i, j) = (v.len() / 2, v.len() - 1);
	let (lo, mid, hi) = (v[0], v[i], v[j]);
	if (mid <= lo && lo <= hi) || (hi <= lo && lo <= mid) {
		(0, lo)
	} else if (lo <= mid && mid <= hi) || (hi <= mid && mid <= lo) {
		(i, mid)
	} else {
		(j, hi)
	}
}

/// Picks the median of the medians-of-three of the three thirds of `v`.
///
/// Views shorter than 3 fall back to [`median3`].
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn ninther(v: ArrayView1<'_, i64>) -> (usize, i64) {
	let len = v.len();
	if len < 3 {
		return median3(v);
	}

	let (mid_start, mid_end) = (len / 3, 2 * len / 3);
	let (i0, m0) = median3(v.slice(s![..mid_start]));
	let (i1, m1) = median3(v.slice(s![mid_start..mid_end]));
	let (i2, m2) = median3(v.slice(s![mid_end..]));
	let indices = [i0, i1 + mid_start, i2 + mid_end];
	let medians = [m0, m1, m2];
	let (j, p) = median3(ArrayView1::from(&medians));
	(indices[j], p)
}
