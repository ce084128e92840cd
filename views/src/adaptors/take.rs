//! Lazy truncation.
//!
//! The forward cursor carries a countdown of the elements it may still yield.
//! The view's backward entry is [`TakeEnd`], which wraps the inner view's
//! backward entry and is only a sentinel: the true back of the truncated view
//! is never computed. Use [`eager_take`](crate::eager_take) when a steppable
//! backward cursor is needed.
//!
//! Inverting a forward cursor does give a steppable [`TakeBackward`]; walking
//! it back returns elements to the countdown.

use duality_core::{
    BackwardOf, CountedSentinel, EmptinessView, Finite, ForwardOf, Index, MultipassStepper,
    RandomAccessStepper, SentinelFor, Size, SizedView, Stepper, View,
};

/// The first `count` elements of a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Take<V> {
    view: V,
    count: usize,
}

/// Truncates `view` to at most `count` elements.
pub fn take<V>(view: V, count: usize) -> Take<V> {
    Take { view, count }
}

/// Same as [`take`].
pub fn lazy_take<V>(view: V, count: usize) -> Take<V> {
    take(view, count)
}

/// Forward cursor of [`Take`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeForward<I> {
    inner: I,
    remaining: usize,
}

/// The backward entry of [`Take`]: the inner end, nothing more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeEnd<S> {
    inner: S,
}

/// An inverted [`TakeForward`]. `remaining` still counts what the forward
/// direction may yield from here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeBackward<J> {
    inner: J,
    remaining: usize,
}

impl<I> TakeForward<I> {
    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// Elements this cursor may still yield.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<J> TakeBackward<J> {
    pub fn inner(&self) -> &J {
        &self.inner
    }
}

impl<I: Stepper> Stepper for TakeForward<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> I::Item {
        debug_assert!(self.remaining > 0, "next() past the end of a take");
        self.remaining -= 1;
        self.inner.next()
    }

    #[inline]
    fn skip(&mut self) {
        debug_assert!(self.remaining > 0, "skip() past the end of a take");
        self.remaining -= 1;
        self.inner.skip();
    }
}

impl<J: Stepper> Stepper for TakeBackward<J> {
    type Item = J::Item;

    #[inline]
    fn next(&mut self) -> J::Item {
        self.remaining += 1;
        self.inner.next()
    }

    #[inline]
    fn skip(&mut self) {
        self.remaining += 1;
        self.inner.skip();
    }
}

/// Shared body of the two sentinels a forward cursor can meet: the countdown
/// runs out or the inner cursor reaches the inner end.
#[inline]
fn next_forward<I, S>(end: &S, it: &mut TakeForward<I>) -> Option<I::Item>
where
    I: Stepper,
    S: SentinelFor<I>,
{
    if it.remaining == 0 {
        return None;
    }
    let item = end.next_from(&mut it.inner)?;
    it.remaining -= 1;
    Some(item)
}

#[inline]
fn advance_forward<I, S>(end: &S, it: &mut TakeForward<I>, n: usize) -> usize
where
    I: Stepper,
    S: SentinelFor<I>,
{
    let step = end.advance_from(&mut it.inner, n.min(it.remaining));
    it.remaining -= step;
    step
}

#[inline]
fn skip_n_forward<I, S>(end: &S, it: &mut TakeForward<I>, n: I::Index) -> I::Index
where
    I: RandomAccessStepper,
    S: CountedSentinel<I>,
{
    let limit = I::Index::from_usize(n.to_usize().min(it.remaining));
    let step = end.skip_n_from(&mut it.inner, limit);
    it.remaining -= step.to_usize();
    step
}

impl<I, S> SentinelFor<TakeForward<I>> for TakeEnd<S>
where
    I: Stepper,
    S: SentinelFor<I>,
{
    #[inline]
    fn next_from(&self, it: &mut TakeForward<I>) -> Option<I::Item> {
        next_forward(&self.inner, it)
    }

    #[inline]
    fn advance_from(&self, it: &mut TakeForward<I>, n: usize) -> usize {
        advance_forward(&self.inner, it, n)
    }
}

impl<I, J> SentinelFor<TakeForward<I>> for TakeBackward<J>
where
    I: Stepper,
    J: SentinelFor<I>,
{
    #[inline]
    fn next_from(&self, it: &mut TakeForward<I>) -> Option<I::Item> {
        next_forward(&self.inner, it)
    }

    #[inline]
    fn advance_from(&self, it: &mut TakeForward<I>, n: usize) -> usize {
        advance_forward(&self.inner, it, n)
    }
}

impl<I, J> SentinelFor<TakeBackward<J>> for TakeForward<I>
where
    J: Stepper,
    I: SentinelFor<J>,
{
    #[inline]
    fn next_from(&self, it: &mut TakeBackward<J>) -> Option<J::Item> {
        let item = self.inner.next_from(&mut it.inner)?;
        it.remaining += 1;
        Some(item)
    }

    #[inline]
    fn advance_from(&self, it: &mut TakeBackward<J>, n: usize) -> usize {
        let step = self.inner.advance_from(&mut it.inner, n);
        it.remaining += step;
        step
    }
}

impl<I: MultipassStepper> MultipassStepper for TakeForward<I> {
    type Inverse = TakeBackward<I::Inverse>;

    #[inline]
    fn invert(&self) -> Self::Inverse {
        TakeBackward {
            inner: self.inner.invert(),
            remaining: self.remaining,
        }
    }
}

impl<J: MultipassStepper> MultipassStepper for TakeBackward<J> {
    type Inverse = TakeForward<J::Inverse>;

    #[inline]
    fn invert(&self) -> Self::Inverse {
        TakeForward {
            inner: self.inner.invert(),
            remaining: self.remaining,
        }
    }
}

impl<I: RandomAccessStepper> RandomAccessStepper for TakeForward<I> {
    type Index = I::Index;

    #[inline]
    fn skip_n(&mut self, n: I::Index) {
        debug_assert!(n.to_usize() <= self.remaining);
        self.remaining -= n.to_usize();
        self.inner.skip_n(n);
    }
}

impl<J: RandomAccessStepper> RandomAccessStepper for TakeBackward<J> {
    type Index = J::Index;

    #[inline]
    fn skip_n(&mut self, n: J::Index) {
        self.remaining += n.to_usize();
        self.inner.skip_n(n);
    }
}

impl<I, S> CountedSentinel<TakeForward<I>> for TakeEnd<S>
where
    I: RandomAccessStepper,
    S: CountedSentinel<I>,
{
    // Finite even when the inner view is not.
    type Distance = I::Index;

    #[inline]
    fn skip_n_from(&self, it: &mut TakeForward<I>, n: I::Index) -> I::Index {
        skip_n_forward(&self.inner, it, n)
    }

    #[inline]
    fn skip_all_from(&self, it: &mut TakeForward<I>) -> I::Index {
        I::Index::from_usize(advance_forward(&self.inner, it, usize::MAX))
    }
}

impl<I, J> CountedSentinel<TakeForward<I>> for TakeBackward<J>
where
    I: RandomAccessStepper,
    J: CountedSentinel<I>,
{
    type Distance = I::Index;

    #[inline]
    fn skip_n_from(&self, it: &mut TakeForward<I>, n: I::Index) -> I::Index {
        skip_n_forward(&self.inner, it, n)
    }

    #[inline]
    fn skip_all_from(&self, it: &mut TakeForward<I>) -> I::Index {
        I::Index::from_usize(advance_forward(&self.inner, it, usize::MAX))
    }
}

impl<I, J> CountedSentinel<TakeBackward<J>> for TakeForward<I>
where
    J: RandomAccessStepper,
    I: CountedSentinel<J>,
{
    type Distance = I::Distance;

    #[inline]
    fn skip_n_from(&self, it: &mut TakeBackward<J>, n: J::Index) -> J::Index {
        let step = self.inner.skip_n_from(&mut it.inner, n);
        it.remaining += step.to_usize();
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut TakeBackward<J>) -> I::Distance {
        let step = self.inner.skip_all_from(&mut it.inner);
        it.remaining += step.min_count(usize::MAX);
        step
    }
}

impl<'a, V> View for &'a Take<V>
where
    &'a V: View,
{
    type Forward = TakeForward<ForwardOf<'a, V>>;
    type Backward = TakeEnd<BackwardOf<'a, V>>;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> Self::Forward {
        TakeForward {
            inner: (&self.view).forward_iter(),
            remaining: self.count,
        }
    }

    #[inline]
    fn backward_iter(self) -> Self::Backward {
        TakeEnd {
            inner: (&self.view).backward_iter(),
        }
    }
}

impl<'a, V> EmptinessView for &'a Take<V>
where
    &'a V: EmptinessView,
{
    #[inline]
    fn is_empty(self) -> bool {
        self.count == 0 || (&self.view).is_empty()
    }
}

impl<'a, V> SizedView for &'a Take<V>
where
    &'a V: SizedView,
{
    type Size = usize;

    #[inline]
    fn size(self) -> usize {
        (&self.view).size().min_count(self.count)
    }
}
