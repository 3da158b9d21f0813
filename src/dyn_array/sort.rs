use core::cmp::Ordering;
use core::mem;

/// Quicksort using the first element of every partition as its pivot.
///
/// Not stable. Only the smaller side of a partition is sorted recursively,
/// the larger one is handled by the loop, so already sorted input costs
/// O(n²) comparisons but never more than O(log n) stack frames.
pub(crate) fn quick_sort<T, F>(mut slots: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slots.len() > 1 {
        let pivot = partition(slots, compare);
        let (low, rest) = mem::take(&mut slots).split_at_mut(pivot);
        let high = &mut rest[1..];

        if low.len() < high.len() {
            quick_sort(low, compare);
            slots = high;
        } else {
            quick_sort(high, compare);
            slots = low;
        }
    }
}

/// Moves everything that compares `<=` to `slots[0]` in front of it and
/// everything greater behind it. Returns where the pivot ends up.
///
/// `slots` must hold at least two elements.
fn partition<T, F>(slots: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut low = 1;
    let mut high = slots.len() - 1;

    while low <= high {
        while low <= high && compare(&slots[low], &slots[0]) != Ordering::Greater {
            low += 1;
        }
        while low <= high && compare(&slots[high], &slots[0]) == Ordering::Greater {
            high -= 1;
        }
        if low < high {
            slots.swap(low, high);
        }
    }

    // `high` is the last slot not greater than the pivot.
    slots.swap(0, high);
    return high;
}

#[cfg(test)]
mod tests {
    use std::vec;
    use std::vec::Vec;

    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut v = [5, 9, 1, 5, 7, 2];
        let pivot = partition(&mut v, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(v[pivot], 5);
        assert!(v[..pivot].iter().all(|x| *x <= 5));
        assert!(v[pivot + 1..].iter().all(|x| *x > 5));
    }

    #[test]
    fn partition_pivot_is_largest() {
        let mut v = [9, 3, 4, 1];
        let pivot = partition(&mut v, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(pivot, 3);
        assert_eq!(v[3], 9);
    }

    #[test]
    fn partition_pivot_is_smallest() {
        let mut v = [0, 3, 4, 1];
        let pivot = partition(&mut v, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(pivot, 0);
        assert_eq!(v, [0, 3, 4, 1]);
    }

    #[test]
    fn sorts_sorted_and_reversed_input() {
        let mut asc: Vec<u32> = (0..2000).collect();
        quick_sort(&mut asc, &mut |a: &u32, b: &u32| a.cmp(b));
        assert!(asc.windows(2).all(|w| w[0] <= w[1]));

        let mut desc: Vec<u32> = (0..2000).rev().collect();
        quick_sort(&mut desc, &mut |a: &u32, b: &u32| a.cmp(b));
        assert_eq!(desc, asc);
    }

    #[test]
    fn sorts_with_duplicates_and_custom_order() {
        let mut v = vec![3, 1, 3, 3, 0, 2, 1];
        quick_sort(&mut v, &mut |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(v, vec![3, 3, 3, 2, 1, 1, 0]);
    }

    #[test]
    fn trivial_inputs() {
        let mut empty: [u8; 0] = [];
        quick_sort(&mut empty, &mut |a: &u8, b: &u8| a.cmp(b));

        let mut one = [7u8];
        quick_sort(&mut one, &mut |a: &u8, b: &u8| a.cmp(b));
        assert_eq!(one, [7]);

        let mut two = [7u8, 2];
        quick_sort(&mut two, &mut |a: &u8, b: &u8| a.cmp(b));
        assert_eq!(two, [2, 7]);
    }
}
