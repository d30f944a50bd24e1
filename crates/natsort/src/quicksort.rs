//! Three-way partition sort over any ordered element type.
//!
//! The first element of each partition is the pivot. Elements are split into
//! less / equal / greater, keeping their relative order inside each part, so
//! the sort is stable. Pending partitions live on an explicit heap stack, not
//! the call stack.

use std::cmp::Ordering;
use std::convert::Infallible;

use crate::error::{Result, SortError};

enum Work<T> {
    Sort(Vec<T>),
    Emit(Vec<T>),
}

pub fn quicksort<T: Ord>(elements: Vec<T>) -> Vec<T> {
    quicksort_by(elements, T::cmp)
}

pub fn quicksort_by<T, F>(elements: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match partition_sort(elements, |a, b| Ok::<_, Infallible>(cmp(a, b))) {
        Ok(sorted) => sorted,
        Err(never) => match never {},
    }
}

/// Like [`quicksort`] for partially ordered elements. Fails on the first pair
/// that has no ordering (for example a NaN).
pub fn try_quicksort<T: PartialOrd>(elements: Vec<T>) -> Result<Vec<T>> {
    partition_sort(elements, |a, b| {
        a.partial_cmp(b).ok_or(SortError::UnorderedElementType)
    })
    .inspect_err(|_| tracing::error!("partition sort given incomparable elements"))
}

fn partition_sort<T, E, F>(elements: Vec<T>, mut cmp: F) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
{
    let mut out = Vec::with_capacity(elements.len());
    let mut stack = vec![Work::Sort(elements)];

    while let Some(work) = stack.pop() {
        let part = match work {
            Work::Emit(part) => {
                out.extend(part);
                continue;
            }
            Work::Sort(part) if part.len() < 2 => {
                out.extend(part);
                continue;
            }
            Work::Sort(part) => part,
        };

        let mut rest = part.into_iter();
        let Some(pivot) = rest.next() else {
            continue;
        };

        let mut less = Vec::new();
        let mut equal = vec![pivot];
        let mut greater = Vec::new();
        for x in rest {
            match cmp(&x, &equal[0])? {
                Ordering::Less => less.push(x),
                Ordering::Equal => equal.push(x),
                Ordering::Greater => greater.push(x),
            }
        }

        stack.push(Work::Sort(greater));
        stack.push(Work::Emit(equal));
        stack.push(Work::Sort(less));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn known_cases() {
        assert_eq!(quicksort(vec![3, 1, 2, 3, 1]), vec![1, 1, 2, 3, 3]);
        assert_eq!(quicksort(Vec::<u32>::new()), Vec::<u32>::new());
        assert_eq!(quicksort(vec![42]), vec![42]);
        assert_eq!(
            quicksort(vec!["pear", "apple", "fig"]),
            vec!["apple", "fig", "pear"]
        );
    }

    #[test]
    fn matches_std_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 64, 511, 2048] {
            let data: Vec<i64> = (0..size).map(|_| rng.random_range(-50..50)).collect();
            let mut expected = data.clone();
            expected.sort();
            assert_eq!(quicksort(data), expected, "size={size}");
        }
    }

    #[test]
    fn presorted_and_reversed() {
        let ascending: Vec<u32> = (0..3000).collect();
        let descending: Vec<u32> = (0..3000).rev().collect();
        assert_eq!(quicksort(ascending.clone()), ascending);
        assert_eq!(quicksort(descending), ascending);
    }

    #[test]
    fn equal_elements_keep_input_order() {
        let data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];
        let sorted = quicksort_by(data, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            sorted,
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
    }

    #[test]
    fn partial_order() {
        assert_eq!(
            try_quicksort(vec![2.5, -1.0, 0.0, 2.5]),
            Ok(vec![-1.0, 0.0, 2.5, 2.5])
        );
        assert_eq!(
            try_quicksort(vec![1.0, f64::NAN, 0.5]),
            Err(SortError::UnorderedElementType)
        );
    }
}
