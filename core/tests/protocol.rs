//! Protocol properties checked on the built-in slice views.

use duality_core::{
    EmptinessView, MultipassStepper, RandomAccessStepper, Range, SizedView, Stepper, Traversal,
    View,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Sentinel symmetry
// ============================================================================

#[test]
fn forward_and_backward_cover_the_same_elements() {
    let data = [3, 1, 4, 1, 5, 9, 2, 6];
    let view: &[i32] = &data;

    let mut forward = Vec::new();
    let mut it = view.forward_iter();
    let end = view.backward_iter();
    while let Some(x) = it.next_until(&end) {
        forward.push(*x);
    }

    let mut backward = Vec::new();
    let mut it = view.backward_iter();
    let end = view.forward_iter();
    while let Some(x) = it.next_until(&end) {
        backward.push(*x);
    }

    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(forward, data);
}

#[test]
fn interleaved_ends_meet_once() {
    let data = [1, 2, 3, 4, 5, 6];
    let view: &[i32] = &data;
    let mut seen: Vec<i32> = Traversal::new(view.forward_iter(), view.backward_iter())
        .zip(view.traverse().rev())
        .flat_map(|(a, b)| [*a, *b])
        .collect();
    seen.truncate(data.len());
    assert_eq!(seen, [1, 6, 2, 5, 3, 4]);

    let mut both = view.traverse();
    let mut taken = Vec::new();
    loop {
        match both.next() {
            Some(x) => taken.push(*x),
            None => break,
        }
        match both.next_back() {
            Some(x) => taken.push(*x),
            None => break,
        }
    }
    assert_eq!(taken, [1, 6, 2, 5, 3, 4]);
    assert_eq!(both.next(), None);
    assert_eq!(both.next_back(), None);
}

// ============================================================================
// Inversion
// ============================================================================

#[test]
fn double_inversion_replays_the_same_sequence() {
    let data = ['a', 'b', 'c', 'd'];
    let view: &[char] = &data;
    let end = view.backward_iter();

    for start in 0..=data.len() {
        let mut it = view.forward_iter();
        it.skip_n(start);
        let mut twice = it.invert().invert();
        let expected: Vec<char> = Traversal::new(it, end).copied().collect();
        let replayed: Vec<char> = core::iter::from_fn(|| twice.next_until(&end))
            .copied()
            .collect();
        assert_eq!(expected, replayed);
    }
}

#[test]
fn inverted_cursor_walks_back_over_consumed_elements() {
    let data = [10, 20, 30];
    let view: &[i32] = &data;
    let mut it = view.forward_iter();
    it.skip();
    it.skip();
    let mut back = it.invert();
    let begin = view.forward_iter();
    assert_eq!(back.next_until(&begin), Some(&20));
    assert_eq!(back.next_until(&begin), Some(&10));
    assert_eq!(back.next_until(&begin), None);
}

// ============================================================================
// Bulk skip equivalence
// ============================================================================

#[test]
fn bulk_skip_matches_single_steps() {
    let data: Vec<u32> = (0..20).collect();
    let view: &[u32] = &data;
    let end = view.backward_iter();

    for k in 0..=data.len() {
        let mut stepped = view.forward_iter();
        for _ in 0..k {
            assert!(stepped.skip_until(&end));
        }
        let mut jumped = view.forward_iter();
        assert_eq!(jumped.skip_n_until(k, &end), k);
        assert_eq!(stepped.next_until(&end), jumped.next_until(&end));
    }
}

#[test]
fn advance_lands_on_the_sentinel() {
    let data = [1, 2, 3];
    let view: &[i32] = &data;
    let end = view.backward_iter();
    let mut it = view.forward_iter();
    assert_eq!(it.advance_until(10, &end), 3);
    assert_eq!(it.position(), 3);
    assert_eq!(it.next_until(&end), None);
}

// ============================================================================
// Range
// ============================================================================

#[test]
fn range_replays_and_measures() {
    let data = [5, 6, 7, 8];
    let view: &[i32] = &data;
    let mut front = view.forward_iter();
    front.skip();
    let mut back = view.backward_iter();
    back.skip();
    let range = Range::new(front, back);

    let once: Vec<i32> = (&range).traverse().copied().collect();
    let twice: Vec<i32> = (&range).traverse().copied().collect();
    assert_eq!(once, [6, 7]);
    assert_eq!(once, twice);
    assert!(!(&range).is_empty());
    assert_eq!((&range).size(), 2);

    let empty = Range::new(view.backward_iter().invert(), view.backward_iter());
    assert!((&empty).is_empty());
    assert_eq!((&empty).size(), 0);
}

#[test]
fn sized_traversal_reports_its_length() {
    let data = [1, 2, 3];
    let view: &[i32] = &data;
    let mut it = Traversal::with_len(view.forward_iter(), view.backward_iter(), view.size());
    assert_eq!(it.size_hint(), (3, Some(3)));
    it.next();
    assert_eq!(it.size_hint(), (2, Some(2)));
}
