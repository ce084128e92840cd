//! Concatenation.
//!
//! [`Concat`] joins two views; longer chains nest to the right, which is what
//! [`concat_all!`](crate::concat_all) builds. A cursor is in one of two
//! [`Part`]s. A forward cursor in the head also carries the head's backward
//! entry so it can tell when the head runs out without consulting the global
//! end; a backward cursor in the tail carries the tail's forward entry for the
//! same reason. Crossing the boundary mints a fresh cursor for the other part
//! from the stored views.
//!
//! Which view comes first decides the result type: when the head is infinite
//! no traversal ever reaches the tail, and [`concat`] returns the head alone.
//!
//! Comparing a cursor against a sentinel goes by the parts they are in:
//!
//! | cursor | sentinel | outcome |
//! |---|---|---|
//! | same part | same part | compare inside that part |
//! | behind | ahead | exhaust the local part, cross, compare |
//! | ahead | behind | already met |

use core::fmt;

use duality_core::{
    BackwardOf, CountedSentinel, EmptinessView, Extent, Finite, ForwardOf, Index, Infinite,
    MultipassStepper, RandomAccessStepper, SentinelFor, Size, SizedView, Stepper, View,
};

/// Two views walked one after the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Concat<A, B> {
    head: A,
    tail: B,
}

impl<A, B> Concat<A, B> {
    pub fn head(&self) -> &A {
        &self.head
    }

    pub fn tail(&self) -> &B {
        &self.tail
    }
}

/// Which of the two concatenated views a cursor is walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part<H, T> {
    Head(H),
    Tail(T),
}

/// Picks the result of concatenating after a head of this extent.
pub trait Join: Extent {
    type Output<A, B>;

    fn join<A, B>(head: A, tail: B) -> Self::Output<A, B>;
}

impl Join for Finite {
    type Output<A, B> = Concat<A, B>;

    #[inline]
    fn join<A, B>(head: A, tail: B) -> Concat<A, B> {
        Concat { head, tail }
    }
}

impl Join for Infinite {
    type Output<A, B> = A;

    #[inline]
    fn join<A, B>(head: A, _tail: B) -> A {
        head
    }
}

/// Walks `head` and then `tail`.
///
/// For a finite head the result is a [`Concat`] with the capabilities both
/// inputs share: multipass, reversible, random access, sized. For an
/// infinite head the tail is unreachable and the head comes back unchanged.
///
/// ```
/// use duality_core::{SizedView, View};
/// use duality_views::{concat, iota, iota_from, IotaFrom};
///
/// let both = concat(iota(0u32, 2), iota(10u32, 12));
/// assert_eq!(both.size(), 4);
/// assert_eq!(both.traverse().collect::<Vec<_>>(), [0, 1, 10, 11]);
///
/// let endless: IotaFrom<u32> = concat(iota_from(0u32), iota(0u32, 5));
/// assert_eq!(endless.traverse().nth(100), Some(100));
/// ```
pub fn concat<'x, A, B>(head: A, tail: B) -> <A as ConcatHead<'x, B>>::Output
where
    A: ConcatHead<'x, B>,
{
    head.concat_tail(tail)
}

/// A view that can be followed by `B`, with the result picked by the
/// [`Extent`] of `&'x Self` through [`Join`].
///
/// Implemented for every view. Bounds written against the view type itself
/// resolve once the head's type is known, which is what lets [`concat`] infer
/// its arguments.
pub trait ConcatHead<'x, B>: Sized {
    type Output;

    fn concat_tail(self, tail: B) -> Self::Output;
}

impl<'x, A, B> ConcatHead<'x, B> for A
where
    A: 'x,
    &'x A: View,
    <&'x A as View>::Extent: Join,
{
    type Output = <<&'x A as View>::Extent as Join>::Output<A, B>;

    #[inline]
    fn concat_tail(self, tail: B) -> Self::Output {
        <<&'x A as View>::Extent as Join>::join(self, tail)
    }
}

/// Concatenates any number of views, nesting to the right.
///
/// ```
/// use duality_core::View;
/// use duality_views::{concat_all, single};
///
/// let data = [5u8, 6];
/// let view = concat_all!(&data[..], single(7u8), &data[..]);
/// let got: Vec<u8> = view.traverse().copied().collect();
/// assert_eq!(got, [5, 6, 7, 5, 6]);
/// ```
#[macro_export]
macro_rules! concat_all {
    ($view:expr $(,)?) => {
        $view
    };
    ($head:expr, $($rest:expr),+ $(,)?) => {
        $crate::concat($head, $crate::concat_all!($($rest),+))
    };
}

/// Forward cursor of [`Concat`].
///
/// `HA` and `HB` are the forward-moving cursor types of the two parts. For
/// the view's own cursor they are the views' forward cursors; an inverted
/// backward cursor has the inverses of the backward cursors.
pub struct ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View,
{
    views: &'a Concat<A, B>,
    part: Part<(HA, BackwardOf<'a, A>), HB>,
}

/// Backward cursor of [`Concat`]; `XA` and `XB` move backward.
pub struct ConcatBackward<'a, A, B, XA, XB>
where
    &'a B: View,
{
    views: &'a Concat<A, B>,
    part: Part<XA, (XB, ForwardOf<'a, B>)>,
}

impl<'a, A, B, HA, HB> ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View,
{
    /// Whether the cursor is still walking the head.
    pub fn in_head(&self) -> bool {
        matches!(self.part, Part::Head(_))
    }
}

impl<'a, A, B, HA, HB> ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View,
    &'a B: View<Forward = HB>,
{
    #[inline]
    fn tail_begin(&self) -> HB {
        tracing::trace!("concat: crossing into the tail");
        let views = self.views;
        (&views.tail).forward_iter()
    }
}

impl<'a, A, B, XA, XB> ConcatBackward<'a, A, B, XA, XB>
where
    &'a B: View,
{
    /// Whether the cursor is still walking the tail.
    pub fn in_tail(&self) -> bool {
        matches!(self.part, Part::Tail(_))
    }
}

impl<'a, A, B, XA, XB> ConcatBackward<'a, A, B, XA, XB>
where
    &'a A: View<Backward = XA>,
    &'a B: View,
{
    #[inline]
    fn head_end(&self) -> XA {
        tracing::trace!("concat: crossing into the head");
        let views = self.views;
        (&views.head).backward_iter()
    }
}

impl<'a, A, B, HA, HB> Clone for ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View,
    HA: Clone,
    HB: Clone,
    BackwardOf<'a, A>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            views: self.views,
            part: self.part.clone(),
        }
    }
}

impl<'a, A, B, XA, XB> Clone for ConcatBackward<'a, A, B, XA, XB>
where
    &'a B: View,
    XA: Clone,
    XB: Clone,
    ForwardOf<'a, B>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            views: self.views,
            part: self.part.clone(),
        }
    }
}

impl<'a, A, B, HA, HB> fmt::Debug for ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = if self.in_head() { "head" } else { "tail" };
        f.debug_tuple("ConcatForward").field(&part).finish()
    }
}

impl<'a, A, B, XA, XB> fmt::Debug for ConcatBackward<'a, A, B, XA, XB>
where
    &'a B: View,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = if self.in_tail() { "tail" } else { "head" };
        f.debug_tuple("ConcatBackward").field(&part).finish()
    }
}

// ============================================================================
// Stepping
// ============================================================================

impl<'a, A, B, HA, HB> Stepper for ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View,
    &'a B: View<Forward = HB>,
    HA: Stepper,
    HB: Stepper<Item = HA::Item>,
    BackwardOf<'a, A>: SentinelFor<HA>,
{
    type Item = HA::Item;

    fn next(&mut self) -> HA::Item {
        match &mut self.part {
            Part::Head((cur, local)) => match cur.next_until(&*local) {
                Some(item) => item,
                None => {
                    let mut tail = self.tail_begin();
                    let item = tail.next();
                    self.part = Part::Tail(tail);
                    item
                }
            },
            Part::Tail(cur) => cur.next(),
        }
    }

    fn skip(&mut self) {
        match &mut self.part {
            Part::Head((cur, local)) => {
                if !cur.skip_until(&*local) {
                    let mut tail = self.tail_begin();
                    tail.skip();
                    self.part = Part::Tail(tail);
                }
            }
            Part::Tail(cur) => cur.skip(),
        }
    }
}

impl<'a, A, B, XA, XB> Stepper for ConcatBackward<'a, A, B, XA, XB>
where
    &'a A: View<Backward = XA>,
    &'a B: View,
    XB: Stepper,
    XA: Stepper<Item = XB::Item>,
    ForwardOf<'a, B>: SentinelFor<XB>,
{
    type Item = XB::Item;

    fn next(&mut self) -> XB::Item {
        match &mut self.part {
            Part::Tail((cur, local)) => match cur.next_until(&*local) {
                Some(item) => item,
                None => {
                    let mut head = self.head_end();
                    let item = head.next();
                    self.part = Part::Head(head);
                    item
                }
            },
            Part::Head(cur) => cur.next(),
        }
    }

    fn skip(&mut self) {
        match &mut self.part {
            Part::Tail((cur, local)) => {
                if !cur.skip_until(&*local) {
                    let mut head = self.head_end();
                    head.skip();
                    self.part = Part::Head(head);
                }
            }
            Part::Head(cur) => cur.skip(),
        }
    }
}

// ============================================================================
// Meeting
// ============================================================================

impl<'a, A, B, HA, HB, XA, XB> SentinelFor<ConcatForward<'a, A, B, HA, HB>>
    for ConcatBackward<'a, A, B, XA, XB>
where
    &'a A: View,
    &'a B: View<Forward = HB>,
    HA: Stepper,
    HB: Stepper<Item = HA::Item>,
    BackwardOf<'a, A>: SentinelFor<HA>,
    XA: SentinelFor<HA>,
    XB: SentinelFor<HB>,
{
    fn next_from(&self, it: &mut ConcatForward<'a, A, B, HA, HB>) -> Option<HA::Item> {
        match (&mut it.part, &self.part) {
            (Part::Head((cur, _)), Part::Head(end)) => end.next_from(cur),
            (Part::Head((cur, local)), Part::Tail((end, _))) => {
                if let Some(item) = local.next_from(cur) {
                    return Some(item);
                }
                let mut tail = it.tail_begin();
                let item = end.next_from(&mut tail);
                it.part = Part::Tail(tail);
                item
            }
            (Part::Tail(cur), Part::Tail((end, _))) => end.next_from(cur),
            (Part::Tail(_), Part::Head(_)) => None,
        }
    }

    fn advance_from(&self, it: &mut ConcatForward<'a, A, B, HA, HB>, n: usize) -> usize {
        match (&mut it.part, &self.part) {
            (Part::Head((cur, _)), Part::Head(end)) => end.advance_from(cur, n),
            (Part::Head((cur, local)), Part::Tail((end, _))) => {
                let done = local.advance_from(cur, n);
                if done == n {
                    return done;
                }
                let mut tail = it.tail_begin();
                let more = end.advance_from(&mut tail, n - done);
                it.part = Part::Tail(tail);
                done + more
            }
            (Part::Tail(cur), Part::Tail((end, _))) => end.advance_from(cur, n),
            (Part::Tail(_), Part::Head(_)) => 0,
        }
    }
}

impl<'a, A, B, HA, HB, XA, XB> SentinelFor<ConcatBackward<'a, A, B, XA, XB>>
    for ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View<Backward = XA>,
    &'a B: View,
    XB: Stepper,
    XA: Stepper<Item = XB::Item>,
    ForwardOf<'a, B>: SentinelFor<XB>,
    HA: SentinelFor<XA>,
    HB: SentinelFor<XB>,
{
    fn next_from(&self, it: &mut ConcatBackward<'a, A, B, XA, XB>) -> Option<XB::Item> {
        match (&mut it.part, &self.part) {
            (Part::Tail((cur, _)), Part::Tail(end)) => end.next_from(cur),
            (Part::Tail((cur, local)), Part::Head((end, _))) => {
                if let Some(item) = local.next_from(cur) {
                    return Some(item);
                }
                let mut head = it.head_end();
                let item = end.next_from(&mut head);
                it.part = Part::Head(head);
                item
            }
            (Part::Head(cur), Part::Head((end, _))) => end.next_from(cur),
            (Part::Head(_), Part::Tail(_)) => None,
        }
    }

    fn advance_from(&self, it: &mut ConcatBackward<'a, A, B, XA, XB>, n: usize) -> usize {
        match (&mut it.part, &self.part) {
            (Part::Tail((cur, _)), Part::Tail(end)) => end.advance_from(cur, n),
            (Part::Tail((cur, local)), Part::Head((end, _))) => {
                let done = local.advance_from(cur, n);
                if done == n {
                    return done;
                }
                let mut head = it.head_end();
                let more = end.advance_from(&mut head, n - done);
                it.part = Part::Head(head);
                done + more
            }
            (Part::Head(cur), Part::Head((end, _))) => end.advance_from(cur, n),
            (Part::Head(_), Part::Tail(_)) => 0,
        }
    }
}

// ============================================================================
// Inversion
// ============================================================================

impl<'a, A, B, HA, HB> MultipassStepper for ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View,
    &'a B: View<Forward = HB>,
    HA: MultipassStepper,
    HB: MultipassStepper<Item = HA::Item>,
    BackwardOf<'a, A>: SentinelFor<HA> + Clone,
{
    type Inverse = ConcatBackward<'a, A, B, HA::Inverse, HB::Inverse>;

    fn invert(&self) -> Self::Inverse {
        let part = match &self.part {
            Part::Head((cur, _)) => Part::Head(cur.invert()),
            Part::Tail(cur) => Part::Tail((cur.invert(), self.tail_begin())),
        };
        ConcatBackward::<'a, A, B, HA::Inverse, HB::Inverse> {
            views: self.views,
            part,
        }
    }
}

impl<'a, A, B, XA, XB> MultipassStepper for ConcatBackward<'a, A, B, XA, XB>
where
    &'a A: View<Backward = XA>,
    &'a B: View,
    XB: MultipassStepper,
    XA: MultipassStepper<Item = XB::Item>,
    ForwardOf<'a, B>: SentinelFor<XB> + Clone,
{
    type Inverse = ConcatForward<'a, A, B, XA::Inverse, XB::Inverse>;

    fn invert(&self) -> Self::Inverse {
        let part = match &self.part {
            Part::Tail((cur, _)) => Part::Tail(cur.invert()),
            Part::Head(cur) => Part::Head((cur.invert(), self.head_end())),
        };
        ConcatForward::<'a, A, B, XA::Inverse, XB::Inverse> {
            views: self.views,
            part,
        }
    }
}

// ============================================================================
// Random access
// ============================================================================

impl<'a, A, B, HA, HB> RandomAccessStepper for ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View,
    &'a B: View<Forward = HB>,
    HA: RandomAccessStepper,
    HB: RandomAccessStepper<Item = HA::Item, Index = HA::Index>,
    BackwardOf<'a, A>: CountedSentinel<HA> + Clone,
{
    type Index = HA::Index;

    fn skip_n(&mut self, n: HA::Index) {
        match &mut self.part {
            Part::Head((cur, local)) => {
                let done = local.skip_n_from(cur, n);
                if done != n {
                    let mut tail = self.tail_begin();
                    tail.skip_n(n - done);
                    self.part = Part::Tail(tail);
                }
            }
            Part::Tail(cur) => cur.skip_n(n),
        }
    }
}

impl<'a, A, B, XA, XB> RandomAccessStepper for ConcatBackward<'a, A, B, XA, XB>
where
    &'a A: View<Backward = XA>,
    &'a B: View,
    XB: RandomAccessStepper,
    XA: RandomAccessStepper<Item = XB::Item, Index = XB::Index>,
    ForwardOf<'a, B>: CountedSentinel<XB> + Clone,
{
    type Index = XB::Index;

    fn skip_n(&mut self, n: XB::Index) {
        match &mut self.part {
            Part::Tail((cur, local)) => {
                let done = local.skip_n_from(cur, n);
                if done != n {
                    let mut head = self.head_end();
                    head.skip_n(n - done);
                    self.part = Part::Head(head);
                }
            }
            Part::Head(cur) => cur.skip_n(n),
        }
    }
}

impl<'a, A, B, HA, HB, XA, XB> CountedSentinel<ConcatForward<'a, A, B, HA, HB>>
    for ConcatBackward<'a, A, B, XA, XB>
where
    &'a A: View,
    &'a B: View<Forward = HB>,
    HA: RandomAccessStepper,
    HB: RandomAccessStepper<Item = HA::Item, Index = HA::Index>,
    BackwardOf<'a, A>: CountedSentinel<HA> + Clone,
    XA: CountedSentinel<HA>,
    XB: CountedSentinel<HB>,
{
    /// Counted in `usize` whatever the parts' index types, or [`Infinite`]
    /// when the tail never ends.
    type Distance = <<XB as CountedSentinel<HB>>::Distance as Size>::Count;

    fn skip_n_from(&self, it: &mut ConcatForward<'a, A, B, HA, HB>, n: HA::Index) -> HA::Index {
        match (&mut it.part, &self.part) {
            (Part::Head((cur, _)), Part::Head(end)) => end.skip_n_from(cur, n),
            (Part::Head((cur, local)), Part::Tail((end, _))) => {
                let done = local.skip_n_from(cur, n);
                if done == n {
                    return done;
                }
                let mut tail = it.tail_begin();
                let more = end.skip_n_from(&mut tail, n - done);
                it.part = Part::Tail(tail);
                done + more
            }
            (Part::Tail(cur), Part::Tail((end, _))) => end.skip_n_from(cur, n),
            (Part::Tail(_), Part::Head(_)) => <HA::Index as Index>::ZERO,
        }
    }

    fn skip_all_from(&self, it: &mut ConcatForward<'a, A, B, HA, HB>) -> Self::Distance {
        match (&mut it.part, &self.part) {
            (Part::Head((cur, _)), Part::Head(end)) => {
                let done = end.skip_all_from(cur).min_count(usize::MAX);
                Size::from_count(done)
            }
            (Part::Head((cur, local)), Part::Tail((end, _))) => {
                let done = local.skip_all_from(cur).min_count(usize::MAX);
                let mut tail = it.tail_begin();
                let rest = end.skip_all_from(&mut tail);
                it.part = Part::Tail(tail);
                rest.to_count().grow(done)
            }
            (Part::Tail(cur), Part::Tail((end, _))) => end.skip_all_from(cur).to_count(),
            (Part::Tail(_), Part::Head(_)) => Size::from_count(0),
        }
    }
}

impl<'a, A, B, HA, HB, XA, XB> CountedSentinel<ConcatBackward<'a, A, B, XA, XB>>
    for ConcatForward<'a, A, B, HA, HB>
where
    &'a A: View<Backward = XA>,
    &'a B: View,
    XB: RandomAccessStepper,
    XA: RandomAccessStepper<Item = XB::Item, Index = XB::Index>,
    ForwardOf<'a, B>: CountedSentinel<XB> + Clone,
    HA: CountedSentinel<XA>,
    HB: CountedSentinel<XB>,
{
    type Distance = <<HA as CountedSentinel<XA>>::Distance as Size>::Count;

    fn skip_n_from(&self, it: &mut ConcatBackward<'a, A, B, XA, XB>, n: XB::Index) -> XB::Index {
        match (&mut it.part, &self.part) {
            (Part::Tail((cur, _)), Part::Tail(end)) => end.skip_n_from(cur, n),
            (Part::Tail((cur, local)), Part::Head((end, _))) => {
                let done = local.skip_n_from(cur, n);
                if done == n {
                    return done;
                }
                let mut head = it.head_end();
                let more = end.skip_n_from(&mut head, n - done);
                it.part = Part::Head(head);
                done + more
            }
            (Part::Head(cur), Part::Head((end, _))) => end.skip_n_from(cur, n),
            (Part::Head(_), Part::Tail(_)) => <XB::Index as Index>::ZERO,
        }
    }

    fn skip_all_from(&self, it: &mut ConcatBackward<'a, A, B, XA, XB>) -> Self::Distance {
        match (&mut it.part, &self.part) {
            (Part::Tail((cur, _)), Part::Tail(end)) => {
                let done = end.skip_all_from(cur).min_count(usize::MAX);
                Size::from_count(done)
            }
            (Part::Tail((cur, local)), Part::Head((end, _))) => {
                let done = local.skip_all_from(cur).min_count(usize::MAX);
                let mut head = it.head_end();
                let rest = end.skip_all_from(&mut head);
                it.part = Part::Head(head);
                rest.to_count().grow(done)
            }
            (Part::Head(cur), Part::Head((end, _))) => end.skip_all_from(cur).to_count(),
            (Part::Head(_), Part::Tail(_)) => Size::from_count(0),
        }
    }
}

// ============================================================================
// View
// ============================================================================

impl<'a, A, B> View for &'a Concat<A, B>
where
    &'a A: View<Extent = Finite>,
    &'a B: View,
{
    type Forward = ConcatForward<'a, A, B, ForwardOf<'a, A>, ForwardOf<'a, B>>;
    type Backward = ConcatBackward<'a, A, B, BackwardOf<'a, A>, BackwardOf<'a, B>>;
    type Extent = <&'a B as View>::Extent;

    #[inline]
    fn forward_iter(self) -> Self::Forward {
        ConcatForward::<'a, A, B, ForwardOf<'a, A>, ForwardOf<'a, B>> {
            views: self,
            part: Part::Head(((&self.head).forward_iter(), (&self.head).backward_iter())),
        }
    }

    #[inline]
    fn backward_iter(self) -> Self::Backward {
        ConcatBackward::<'a, A, B, BackwardOf<'a, A>, BackwardOf<'a, B>> {
            views: self,
            part: Part::Tail(((&self.tail).backward_iter(), (&self.tail).forward_iter())),
        }
    }
}

impl<'a, A, B> EmptinessView for &'a Concat<A, B>
where
    &'a A: EmptinessView + View<Extent = Finite>,
    &'a B: EmptinessView,
{
    #[inline]
    fn is_empty(self) -> bool {
        (&self.head).is_empty() && (&self.tail).is_empty()
    }
}

impl<'a, A, B> SizedView for &'a Concat<A, B>
where
    &'a A: SizedView + View<Extent = Finite>,
    &'a B: SizedView,
{
    /// A `usize` count, so parts with narrow index types do not overflow.
    type Size = <<&'a B as SizedView>::Size as Size>::Count;

    #[inline]
    fn size(self) -> Self::Size {
        let head = (&self.head).size().min_count(usize::MAX);
        (&self.tail).size().to_count().grow(head)
    }
}

#[cfg(test)]
mod tests {
    use duality_core::{
        BackwardView, InfiniteView, RandomAccess, RandomAccessView, ReversibleStepper,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        IotaFrom, eager_take, empty, filter, iota, iota_from, repeat_n, reverse, single, take,
        test_utils,
    };

    type Pair = Concat<&'static [u8], &'static [u8]>;
    type PairForward = ForwardOf<'static, Pair>;

    static_assertions::assert_impl_all!(PairForward: RandomAccess, ReversibleStepper);
    static_assertions::assert_impl_all!(&'static Pair: RandomAccessView, SizedView);
    static_assertions::assert_impl_all!(&'static Concat<crate::Iota<u8>, IotaFrom<u8>>: InfiniteView);
    static_assertions::assert_not_impl_any!(&'static Concat<crate::Iota<u8>, IotaFrom<u8>>: BackwardView);

    #[test]
    fn test_both_directions() {
        test_utils::init_test_logging();

        let a = [1, 2, 3];
        let b = [4, 5];
        let view = concat(&a[..], &b[..]);
        let forward: Vec<i32> = view.traverse().copied().collect();
        let backward: Vec<i32> = view.traverse().rev().copied().collect();
        assert_eq!(forward, [1, 2, 3, 4, 5]);
        assert_eq!(backward, [5, 4, 3, 2, 1]);
        assert_eq!(view.size(), 5);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_empty_parts() {
        let a = [1u8, 2];
        let none: &[u8] = &[];

        let head_empty = concat(none, &a[..]);
        let tail_empty = concat(&a[..], none);
        let both = concat(none, none);
        assert_eq!(head_empty.traverse().copied().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(tail_empty.traverse().rev().copied().collect::<Vec<_>>(), [2, 1]);
        assert_eq!(both.traverse().next(), None);
        assert_eq!(both.traverse().next_back(), None);
        assert!(both.is_empty());

        let nothing = concat(empty::<&u8>(), &a[..]);
        assert_eq!(nothing.size(), 2);
    }

    #[test]
    fn test_ends_meet_across_the_boundary() {
        let a = [1, 2];
        let b = [3, 4, 5];
        let view = concat(&a[..], &b[..]);
        let mut both = view.traverse();
        assert_eq!(both.next_back(), Some(&5));
        assert_eq!(both.next_back(), Some(&4));
        assert_eq!(both.next_back(), Some(&3));
        assert_eq!(both.next(), Some(&1));
        assert_eq!(both.next(), Some(&2));
        assert_eq!(both.next(), None);
        assert_eq!(both.next_back(), None);
    }

    #[test]
    fn test_meeting_exactly_at_the_boundary() {
        let view = concat(iota(0u32, 2), iota(2u32, 4));
        let mut front = view.forward_iter();
        let mut back = view.backward_iter();
        assert_eq!(back.skip_n_until(2, &front), 2);
        assert!(back.in_tail());
        assert_eq!(front.advance_until(5, &back), 2);
        assert_eq!(front.next_until(&back), None);
        assert_eq!(back.next_until(&front), None);
    }

    #[test]
    fn test_inversion_in_either_part() {
        let view = concat(iota(0u32, 3), iota(10u32, 13));
        let begin = view.forward_iter();
        let end = view.backward_iter();

        let mut it = view.forward_iter();
        assert_eq!(it.advance_until(4, &end), 4);
        assert!(!it.in_head());
        let mut back = it.invert();
        assert_eq!(back.next_until(&begin), Some(10));
        assert_eq!(back.next_until(&begin), Some(2));

        let mut again = back.invert();
        let rest: Vec<u32> = core::iter::from_fn(|| again.next_until(&end)).collect();
        assert_eq!(rest, [2, 10, 11, 12]);
    }

    #[test]
    fn test_random_access_across_parts() {
        let a = [10u8, 20, 30];
        let b = [40u8, 50];
        let view = concat(&a[..], &b[..]);
        assert_eq!(*view.at(0), 10);
        assert_eq!(*view.at(3), 40);
        assert_eq!(view.at_checked(5), None);

        let mut it = view.forward_iter();
        assert_eq!(it.skip_n_until(4, &view.backward_iter()), 4);
        assert_eq!(it.next_until(&view.backward_iter()), Some(&50));

        let mut back = view.backward_iter();
        assert_eq!(back.skip_all_until(&view.forward_iter()), 5);
        let mut front = view.forward_iter();
        front.skip_n(4);
        assert_eq!(front.skip_all_until(&view.backward_iter()), 1);
    }

    #[test]
    fn test_non_random_access_parts() {
        let odd = filter(iota(0u32, 6), |x: &u32| x % 2 == 1);
        let view = concat(&odd, iota(7u32, 9));
        let got: Vec<u32> = view.traverse().collect();
        assert_eq!(got, [1, 3, 5, 7, 8]);
        let mut it = view.forward_iter();
        assert_eq!(it.advance_until(4, &view.backward_iter()), 4);
        assert_eq!(it.next_until(&view.backward_iter()), Some(8));
    }

    #[test]
    fn test_inferred_arguments() {
        let view = concat(iota(0u8, 200), iota(0u8, 200));
        let nested = concat(view, concat(iota(7u8, 8), empty::<u8>()));
        assert_eq!(nested.traverse().count(), 401);
        assert_eq!(nested.traverse().next_back(), Some(7));

        let data = [1u8, 2];
        let refs = crate::concat_all!(&data[..], single(3u8), &data[..]);
        assert_eq!(refs.traverse().copied().collect::<Vec<_>>(), [1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_sizes_count_past_narrow_indices() {
        let view = concat(iota(0u8, 200), iota(0u8, 200));
        assert_eq!(view.size(), 400usize);

        let mut it = view.forward_iter();
        assert_eq!(it.skip_all_until(&view.backward_iter()), 400);
        let mut back = view.backward_iter();
        assert_eq!(back.skip_all_until(&view.forward_iter()), 400);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_sizes_count_past_u32() {
        let view = concat(iota(0u32, u32::MAX), iota(0u32, 10));
        assert_eq!(view.size(), u32::MAX as usize + 10);

        let mut it = view.forward_iter();
        it.skip_n(u32::MAX - 1);
        assert_eq!(it.skip_all_until(&view.backward_iter()), 11);
        let mut it = view.forward_iter();
        assert_eq!(it.skip_all_until(&view.backward_iter()), u32::MAX as usize + 10);
    }

    #[test]
    fn test_infinite_tail() {
        let view = concat(iota(0u64, 2), iota_from(100u64));
        assert_eq!(view.size(), Infinite);
        let got: Vec<u64> = view.traverse().take(4).collect();
        assert_eq!(got, [0, 1, 100, 101]);

        let mut it = view.forward_iter();
        assert_eq!(it.skip_all_until(&view.backward_iter()), Infinite);
    }

    #[test]
    fn test_infinite_head_drops_the_tail() {
        let view: IotaFrom<u8> = concat(iota_from(0u8), iota(0u8, 3));
        assert_eq!(view.traverse().nth(200), Some(200));
    }

    #[test]
    fn test_flattening_is_associative() {
        let a = [1, 2];
        let b = [3];
        let c = [4, 5, 6];
        let left = concat(concat(&a[..], &b[..]), &c[..]);
        let right = concat(&a[..], concat(&b[..], &c[..]));
        let flat = crate::concat_all!(&a[..], &b[..], &c[..]);

        let left: Vec<i32> = left.traverse().copied().collect();
        let right: Vec<i32> = right.traverse().copied().collect();
        let flat: Vec<i32> = flat.traverse().copied().collect();
        assert_eq!(left, [1, 2, 3, 4, 5, 6]);
        assert_eq!(left, right);
        assert_eq!(right, flat);
    }

    #[test]
    fn test_composes_with_other_adaptors() {
        let view = reverse(eager_take(concat(iota(0u8, 3), iota(3u8, 6)), 5));
        let got: Vec<u8> = view.traverse().collect();
        assert_eq!(got, [4, 3, 2, 1, 0]);

        let counted = concat(repeat_n(1u8, 2), repeat_n(2u8, 2));
        let lazy: Vec<u8> = take(&counted, 3).traverse().copied().collect();
        assert_eq!(lazy, [1, 1, 2]);
    }
}
