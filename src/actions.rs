//! In-place algorithms over views of cells.
//!
//! Views hand out shared borrows, so mutation goes through [`Cell`]s. Use
//! [`cells`](crate::cells) to view a `&mut [T]` as `&[Cell<T>]`.

use core::cell::Cell;

use duality_core::{MultipassStepper, Range, SentinelFor, Stepper, View};

/// Reverses the elements of `view` in place, swapping from both ends until
/// the cursors meet, and returns a range over the reordered elements.
///
/// ```
/// use duality::{View, actions, cells};
///
/// let mut data = [1, 2, 3, 4, 5];
/// let range = actions::reverse(cells(&mut data));
/// assert_eq!(range.traverse().map(|c| c.get()).collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
/// assert_eq!(data, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse<'c, V, T>(view: V) -> Range<V::Forward, V::Backward>
where
    T: 'c,
    V: View,
    V::Forward: MultipassStepper<Item = &'c Cell<T>> + SentinelFor<V::Backward>,
    V::Backward: MultipassStepper<Item = &'c Cell<T>> + SentinelFor<V::Forward>,
{
    let front = view.forward_iter();
    let back = view.backward_iter();
    let mut i = front.clone();
    let mut j = back.clone();
    let mut swaps = 0usize;
    while let Some(a) = i.next_until(&j) {
        let Some(b) = j.next_until(&i) else {
            break;
        };
        a.swap(b);
        swaps += 1;
    }
    tracing::debug!(swaps, "reversed in place");
    Range::new(front, back)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{cells, eager_take, filter, test_utils};

    fn values<T: Copy>(data: &[Cell<T>]) -> Vec<T> {
        data.iter().map(Cell::get).collect()
    }

    #[test]
    fn test_reverses_odd_and_even_lengths() {
        test_utils::init_test_logging();

        let mut odd = [1, 2, 3, 4, 5];
        reverse(cells(&mut odd));
        assert_eq!(odd, [5, 4, 3, 2, 1]);

        let mut even = ['a', 'b', 'c', 'd'];
        reverse(cells(&mut even));
        assert_eq!(even, ['d', 'c', 'b', 'a']);

        let mut one = [7];
        reverse(cells(&mut one));
        assert_eq!(one, [7]);

        let mut none: [u8; 0] = [];
        reverse(cells(&mut none));
    }

    #[test]
    fn test_result_views_the_same_storage() {
        let mut data = [1, 2, 3];
        let shared = cells(&mut data);
        let range = reverse(shared);
        let first = range.traverse().next();
        assert!(first.is_some_and(|c| core::ptr::eq(c, &shared[0])));
        assert_eq!(values(shared), [3, 2, 1]);
    }

    #[test]
    fn test_reverses_through_adaptors() {
        let mut data = [1, 10, 2, 20, 3, 30, 4];
        let shared = cells(&mut data);

        reverse(&filter(shared, |c: &&Cell<i32>| c.get() >= 10));
        assert_eq!(values(shared), [1, 30, 2, 20, 3, 10, 4]);

        reverse(&eager_take(shared, 3));
        assert_eq!(values(shared), [2, 30, 1, 20, 3, 10, 4]);
    }
}
