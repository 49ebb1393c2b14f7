//! Toy [merge sort] and [quicksort] implementations for `i64` slices and for 1-dimensional
//! (sub)views into *n*-dimensional arrays with arbitrary memory layout (e.g., non-contiguous).
//!
//! They exist to compare sorting strategies against each other and against [`slice::sort`], not
//! to replace it. The quicksort is parameterized by a [pivot strategy](pivot); four strategies are
//! provided and callers may plug in their own.
//!
//! # Example
//!
//! ```
//! use ndarray_isort::{ndarray::arr2, pivot, Sort1Ext};
//!
//! // 2-dimensional array of 3 rows and 4 columns.
//! let mut v = arr2(&[[ 7i64, 4, 1, -3],
//!                    [-2,    3, 2,  4],
//!                    [ 5,    9, 3,  0]]);
//!
//! // Columns are non-contiguous in row-major layout but can be sorted in place.
//! v.column_mut(0).merge_sort();
//! v.column_mut(3).partition_sort(pivot::ninther);
//!
//! assert!(v == arr2(&[[-2, 4, 1, -3],
//!                     [ 5, 3, 2,  0],
//!                     [ 7, 9, 3,  4]]));
//!
//! // Plain slices work too.
//! let mut w = [3, 1, 2];
//! ndarray_isort::sort(&mut w);
//! assert_eq!(w, [1, 2, 3]);
//! ```
//!
//! # Current Implementation
//!
//! | Resource | Complexity | Merge sort       | Partition sort             |
//! |----------|------------|------------------|----------------------------|
//! | Time     | Average    | *O*(*n* log *n*) | *O*(*n* log *n*)           |
//! | Time     | Worst      | *O*(*n* log *n*) | *O*(*n*^2)                 |
//! | Space    | Worst      | *O*(*n*)         | *O*(log *n*) (stack only)  |
//!
//! Neither sort is guaranteed to be stable.
//!
//! # Features
//!
//!   * `alloc` for [`merge_sort`], which needs a scratch buffer. Enabled by `std`.
//!   * `std` for the [`random`](pivot::random) pivot strategy. Enabled by `default`.
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade.
//!
//! [merge sort]: https://en.wikipedia.org/wiki/Merge_sort
//! [quicksort]: https://en.wikipedia.org/wiki/Quicksort

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod merge_sort;
pub mod pivot;
mod quick_sort;

use crate::quick_sort::quick_sort;
use log::trace;
use ndarray::{ArrayBase, ArrayView1, ArrayViewMut1, Data, DataMut, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view of
/// `i64` with arbitrary memory layout (e.g., non-contiguous) providing the sorts of this crate.
pub trait Sort1Ext<S>
where
	S: Data<Elem = i64>,
{
	/// Sorts the array using top-down merge sort.
	///
	/// This sort is *O*(*n* log *n*) worst-case and allocates a scratch buffer of the same length
	/// as the array once per call. Equal elements keep their order, which is invisible for
	/// integers and therefore not promised.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_isort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5i64, 4, 1, -3, 2]);
	///
	/// v.merge_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort(&mut self)
	where
		S: DataMut;
	/// Sorts the array using top-down merge sort with `buf` as scratch memory.
	///
	/// Reusing one buffer amortizes the allocation of [`merge_sort`](Sort1Ext::merge_sort) over
	/// repeated calls. Only the first `self.len()` elements of `buf` are overwritten.
	///
	/// # Panics
	///
	/// Panics if `buf` is shorter than the array.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_isort::{ndarray::{arr1, ArrayViewMut1}, Sort1Ext};
	///
	/// let mut buf = vec![0; 8];
	/// for mut v in [arr1(&[3i64, 2, 1]), arr1(&[8, -8, 0, 1, 1, 9, 2, 5])] {
	/// 	v.merge_sort_with_buffer(ArrayViewMut1::from(&mut buf[..]));
	/// 	assert!(v.is_sorted());
	/// }
	/// ```
	fn merge_sort_with_buffer(&mut self, buf: ArrayViewMut1<'_, i64>)
	where
		S: DataMut;
	/// Sorts the array using quicksort with pivots chosen by `pivot`.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n* log *n*) on average but *O*(*n*^2) worst-case. How often the worst
	/// case is hit depends on the strategy, see [`pivot`].
	///
	/// # Panics
	///
	/// Panics if `pivot` returns an index out of bounds of the view it was given.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_isort::{ndarray::arr1, pivot, Sort1Ext};
	///
	/// let mut v = arr1(&[2i64, 2, 1, 2]);
	///
	/// v.partition_sort(pivot::middle);
	/// assert!(v == arr1(&[1, 2, 2, 2]));
	/// ```
	fn partition_sort<F>(&mut self, pivot: F)
	where
		F: FnMut(ArrayView1<'_, i64>) -> (usize, i64),
		S: DataMut;
	/// Sorts the array using quicksort with [median-of-three](pivot::median3) pivots.
	///
	/// This is the recommended general-purpose call of this crate.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_isort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5i64, 4, 1, -3, 2]);
	///
	/// v.sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn sort(&mut self)
	where
		S: DataMut;
	/// Checks if the elements of this array are sorted in non-descending order.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_isort::{ndarray::arr1, Sort1Ext};
	///
	/// assert!(arr1(&[1i64, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1i64, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0i64; 0]).is_sorted());
	/// ```
	fn is_sorted(&self) -> bool;
}

impl<S> Sort1Ext<S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = i64>,
{
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort(&mut self)
	where
		S: DataMut,
	{
		trace!("merge sort of {} elements", self.len());
		merge_sort::merge_sort(self.view_mut());
	}
	#[inline]
	fn merge_sort_with_buffer(&mut self, buf: ArrayViewMut1<'_, i64>)
	where
		S: DataMut,
	{
		trace!(
			"merge sort of {} elements with buffer of {}",
			self.len(),
			buf.len()
		);
		merge_sort::merge_sort_with_buffer(self.view_mut(), buf);
	}
	#[inline]
	fn partition_sort<F>(&mut self, pivot: F)
	where
		F: FnMut(ArrayView1<'_, i64>) -> (usize, i64),
		S: DataMut,
	{
		trace!("partition sort of {} elements", self.len());
		quick_sort(self.view_mut(), pivot);
	}
	#[inline]
	fn sort(&mut self)
	where
		S: DataMut,
	{
		self.partition_sort(pivot::median3);
	}
	fn is_sorted(&self) -> bool {
		self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b)
	}
}

/// Sorts `v` using top-down merge sort.
///
/// See [`Sort1Ext::merge_sort`].
#[cfg(feature = "alloc")]
#[inline]
pub fn merge_sort(v: &mut [i64]) {
	ArrayViewMut1::from(v).merge_sort();
}

/// Sorts `v` using top-down merge sort with `buf` as scratch memory.
///
/// See [`Sort1Ext::merge_sort_with_buffer`].
///
/// # Panics
///
/// Panics if `buf` is shorter than `v`.
#[inline]
pub fn merge_sort_with_buffer(v: &mut [i64], buf: &mut [i64]) {
	ArrayViewMut1::from(v).merge_sort_with_buffer(ArrayViewMut1::from(buf));
}

/// Sorts `v` using quicksort with pivots chosen by `pivot`.
///
/// See [`Sort1Ext::partition_sort`].
///
/// # Examples
///
/// ```
/// use ndarray_isort::{partition_sort, pivot};
///
/// let mut v = [1, 2, 3, 4, 5];
/// partition_sort(&mut v, pivot::middle);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn partition_sort<F>(v: &mut [i64], pivot: F)
where
	F: FnMut(ArrayView1<'_, i64>) -> (usize, i64),
{
	ArrayViewMut1::from(v).partition_sort(pivot);
}

/// Sorts `v` using quicksort with [median-of-three](pivot::median3) pivots.
///
/// See [`Sort1Ext::sort`].
#[inline]
pub fn sort(v: &mut [i64]) {
	ArrayViewMut1::from(v).sort();
}

/// Checks if `v` is sorted in non-descending order.
#[inline]
pub fn is_sorted(v: &[i64]) -> bool {
	ArrayView1::from(v).is_sorted()
}
