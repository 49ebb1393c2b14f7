use core::cmp;
use log::debug;
use ndarray::{ArrayView1, ArrayViewMut1, Axis};

/// Sorts `v` using quicksort with Lomuto partitioning around pivots chosen by `pivot`.
///
/// Expected *O*(*n* \* log(*n*)), but *O*(*n*^2) worst-case whenever `pivot` keeps choosing
/// extreme elements.
pub fn quick_sort<F>(v: ArrayViewMut1<'_, i64>, mut pivot: F)
where
	F: FnMut(ArrayView1<'_, i64>) -> (usize, i64),
{
	let len = v.len();
	let mut imbalanced = 0;

	recurse(v, &mut pivot, &mut imbalanced);

	if imbalanced > 0 {
		debug!("quick sort of {len} elements made {imbalanced} imbalanced partitions");
	}
}

/// Sorts `v` recursively.
///
/// `imbalanced` counts partitions whose shorter side holds less than an eighth of the elements.
fn recurse<F>(mut v: ArrayViewMut1<'_, i64>, pivot: &mut F, imbalanced: &mut usize)
where
	F: FnMut(ArrayView1<'_, i64>) -> (usize, i64),
{
	loop {
		let len = v.len();

		// Empty and single-element slices are sorted.
		if len < 2 {
			return;
		}

		let (index, value) = pivot(v.view());
		debug_assert!(index < len, "pivot index {index} out of bounds of length {len}");
		debug_assert_eq!(v[index], value, "pivot value differs from element at {index}");

		let mid = partition(v.view_mut(), index);
		if cmp::min(mid, len - mid - 1) < len / 8 {
			*imbalanced += 1;
		}

		// Split the slice into `left`, `pivot`, and `right`.
		let (left, right) = v.split_at(Axis(0), mid);
		let (_, right) = right.split_at(Axis(0), 1);

		// Recurse into the shorter side only in order to bound the stack depth by log2(len). Then
		// just continue with the longer side (this is akin to tail recursion).
		if left.len() < right.len() {
			recurse(left, pivot, imbalanced);
			v = right;
		} else {
			recurse(right, pivot, imbalanced);
			v = left;
		}
	}
}

/// Partitions `v` around the element at `pivot` and returns its final index.
///
/// Afterwards, every element left of the returned index is less than or equal to the pivot and
/// every element right of it is greater.
fn partition(mut v: ArrayViewMut1<'_, i64>, pivot: usize) -> usize {
	let last = v.len() - 1;
	v.swap(pivot, last);
	let p = v[last];

	let mut i = 0;
	for j in 0..last {
		if v[j] <= p {
			v.swap(i, j);
			i += 1;
		}
	}

	v.swap(i, last);
	i
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{partition, quick_sort};
	use crate::pivot::{Pivoter, median3, middle, ninther, random};
	use ndarray::{Array1, ArrayView1, arr1};
	use quickcheck_macros::quickcheck;

	const PIVOTERS: [Pivoter; 4] = [random, middle, median3, ninther];

	fn first(v: ArrayView1<'_, i64>) -> (usize, i64) {
		(0, v[0])
	}

	#[quickcheck]
	fn sorted(xs: Vec<i64>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		for pivot in PIVOTERS {
			let mut array = Array1::from_vec(xs.clone());
			quick_sort(array.view_mut(), pivot);
			assert_eq!(array, sorted);
		}
	}

	#[quickcheck]
	fn partitioned(xs: Vec<i64>, pivot: usize) {
		if xs.is_empty() {
			return;
		}
		let pivot = pivot % xs.len();
		let p = xs[pivot];
		let mut array = Array1::from_vec(xs);
		let mid = partition(array.view_mut(), pivot);
		assert_eq!(array[mid], p);
		assert!(array.iter().take(mid).all(|&x| x <= p));
		assert!(array.iter().skip(mid + 1).all(|&x| x > p));
	}

	#[test]
	fn sorted_input_with_weak_pivot() {
		// Quadratic, but recursion into the shorter side keeps the stack shallow.
		let mut array = Array1::from_iter(0..10_000);
		quick_sort(array.view_mut(), first);
		assert!(array.iter().copied().eq(0..10_000));

		let mut array = Array1::from_iter((0..10_000).rev());
		quick_sort(array.view_mut(), first);
		assert!(array.iter().copied().eq(0..10_000));
	}

	#[test]
	fn all_equal() {
		for pivot in PIVOTERS {
			let mut array = Array1::from_elem(1_000, 42);
			quick_sort(array.view_mut(), pivot);
			assert!(array.iter().all(|&x| x == 42));
		}
	}

	#[test]
	fn closure_pivot() {
		let mut calls = 0;
		let mut array = arr1(&[4, 3, 2, 1, 0]);
		quick_sort(array.view_mut(), |v: ArrayView1<'_, i64>| {
			calls += 1;
			(v.len() - 1, v[v.len() - 1])
		});
		assert_eq!(array, arr1(&[0, 1, 2, 3, 4]));
		assert!(calls > 0);
	}
}
