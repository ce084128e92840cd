//! The dual-iterator protocol and the iterator half of the capability lattice.
//!
//! A view hands out two cursors that face each other: a forward cursor at the
//! front and a backward cursor at the back. Each cursor is a [`Stepper`]; the
//! opposite cursor (or a lighter stand-in for it) is a sentinel that tells the
//! stepper when the two have met.
//!
//! ```text
//!   forward ──▶ e0 e1 e2 e3 e4 ◀── backward
//! ```
//!
//! Capabilities layer on top of each other:
//!
//! | trait | adds |
//! |-------|------|
//! | [`Stepper`] | `next`, `skip` |
//! | [`SentinelFor`] | bounded `next_until`, `skip_until`, `advance_until` |
//! | [`MultipassStepper`] | `Clone` and `invert` into an opposite-facing sentinel |
//! | [`ReversibleStepper`] | `invert` yields a full stepper that inverts back |
//! | [`RandomAccessStepper`] / [`CountedSentinel`] | O(1) bulk skips with an [`Index`] |
//! | [`RandomAccess`] | all of the above, in both directions |
//!
//! # Contract
//!
//! Nothing here reports errors. Calling [`Stepper::next`] past the end, pairing
//! a stepper with a sentinel from another traversal, or skipping more than
//! remains without a sentinel are caller bugs. They trip `debug_assert!`s
//! where the check is cheap and are otherwise unspecified (never unsound).
//!
//! A bounded call that returns `None` / `false` leaves a multipass cursor at
//! the meeting position, so it may still be inverted or cloned.

use crate::{Index, Size};

/// A cursor that yields elements one at a time.
pub trait Stepper {
    type Item;

    /// Yields the element under the cursor and moves past it.
    ///
    /// The caller must know an element remains.
    fn next(&mut self) -> Self::Item;

    /// Moves past the element under the cursor without producing it.
    #[inline]
    fn skip(&mut self) {
        let _ = self.next();
    }

    /// Yields the next element unless the cursor has reached `end`.
    #[inline]
    fn next_until<S>(&mut self, end: &S) -> Option<Self::Item>
    where
        Self: Sized,
        S: SentinelFor<Self> + ?Sized,
    {
        end.next_from(self)
    }

    /// Skips the next element unless the cursor has reached `end`.
    #[inline]
    fn skip_until<S>(&mut self, end: &S) -> bool
    where
        Self: Sized,
        S: SentinelFor<Self> + ?Sized,
    {
        end.skip_from(self)
    }

    /// Moves forward by up to `n` elements, stopping at `end`. Returns how many
    /// elements were passed.
    #[inline]
    fn advance_until<S>(&mut self, n: usize, end: &S) -> usize
    where
        Self: Sized,
        S: SentinelFor<Self> + ?Sized,
    {
        end.advance_from(self, n)
    }
}

/// Something that can tell a stepper of type `I` that it has reached the end.
///
/// Implemented on the sentinel so generic code holding only `I` and an
/// associated sentinel type can still call `it.next_until(&end)`.
pub trait SentinelFor<I: Stepper> {
    fn next_from(&self, it: &mut I) -> Option<I::Item>;

    #[inline]
    fn skip_from(&self, it: &mut I) -> bool {
        self.next_from(it).is_some()
    }

    /// Moves `it` forward by up to `n` elements, stopping at this sentinel.
    ///
    /// Walks one element at a time. Pairs that can measure the distance
    /// override this with a constant-time jump.
    #[inline]
    fn advance_from(&self, it: &mut I, n: usize) -> usize {
        advance_by_walking(self, it, n)
    }
}

/// The one-step-at-a-time body of [`SentinelFor::advance_from`], for overrides
/// that only sometimes have a faster path.
#[inline]
pub fn advance_by_walking<I, S>(end: &S, it: &mut I, n: usize) -> usize
where
    I: Stepper,
    S: SentinelFor<I> + ?Sized,
{
    let mut done = 0;
    while done < n && end.skip_from(it) {
        done += 1;
    }
    done
}

/// A stepper that can be copied and turned around.
pub trait MultipassStepper: Stepper + Clone {
    /// What this cursor becomes when it faces the other way.
    type Inverse: SentinelFor<Self>;

    /// The same position, facing the opposite direction.
    fn invert(&self) -> Self::Inverse;
}

/// A multipass stepper whose inverse is a full multipass stepper that inverts
/// back to `Self`.
///
/// Blanket-implemented; generic code that steps the inverse still names
/// `I::Inverse: Stepper` in its own bounds.
pub trait ReversibleStepper: MultipassStepper {}

impl<I> ReversibleStepper for I
where
    I: MultipassStepper,
    I::Inverse: MultipassStepper<Item = I::Item, Inverse = I>,
{
}

/// A multipass stepper that can jump over many elements at once.
pub trait RandomAccessStepper: MultipassStepper {
    type Index: Index;

    /// Moves past exactly `n` elements. The caller must know they exist.
    fn skip_n(&mut self, n: Self::Index);

    /// Moves past `min(n, distance to end)` elements and returns that count.
    /// When fewer than `n` were available the cursor lands exactly on `end`.
    #[inline]
    fn skip_n_until<S>(&mut self, n: Self::Index, end: &S) -> Self::Index
    where
        Self: Sized,
        S: CountedSentinel<Self> + ?Sized,
    {
        end.skip_n_from(self, n)
    }

    /// Moves all the way to `end` and reports how far that was, or
    /// [`Infinite`](crate::Infinite) when `end` can never be reached.
    #[inline]
    fn skip_all_until<S>(&mut self, end: &S) -> S::Distance
    where
        Self: Sized,
        S: CountedSentinel<Self> + ?Sized,
    {
        end.skip_all_from(self)
    }
}

/// A sentinel whose distance from a random-access stepper is known in O(1).
pub trait CountedSentinel<I: RandomAccessStepper>: SentinelFor<I> {
    /// `I::Index`, or [`Infinite`](crate::Infinite) for an unreachable end.
    type Distance: Size;

    fn skip_n_from(&self, it: &mut I, n: I::Index) -> I::Index;

    fn skip_all_from(&self, it: &mut I) -> Self::Distance;
}

/// Random access in both directions with a shared index type.
pub trait RandomAccess: RandomAccessStepper + ReversibleStepper {}

impl<I> RandomAccess for I
where
    I: RandomAccessStepper + ReversibleStepper + CountedSentinel<I::Inverse>,
    I::Inverse: RandomAccessStepper<Index = I::Index> + CountedSentinel<I>,
{
}
