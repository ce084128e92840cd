//! Views and the view half of the capability lattice.
//!
//! A view is a cheap `Copy` handle that mints the two facing cursors of one
//! logical sequence. View structs that own or borrow data implement [`View`]
//! on a shared reference to themselves, the same way collections implement
//! `IntoIterator` for `&Collection`:
//!
//! ```text
//! impl<'a, V> View for &'a Take<V> where &'a V: View { ... }
//! ```
//!
//! so an adaptor may hold its input by value (owning it) or by reference
//! (borrowing it), and `&&X` forwards to `&X`.
//!
//! The capability traits below ([`ForwardView`], [`BidirectionalView`],
//! [`RandomAccessView`], ...) are blanket-implemented from the cursor types.
//! They name capabilities for assertions and for callers; generic code spells
//! out the cursor bounds it relies on.

use crate::{
    CountedSentinel, Extent, Index, Infinite, MultipassStepper, RandomAccess, RandomAccessStepper,
    SentinelFor, Size, Stepper, Traversal,
};

/// A handle that mints a forward cursor and a backward cursor over the same
/// sequence.
///
/// Either entry point may be a plain sentinel rather than a stepper; the
/// lattice traits say which directions actually step.
pub trait View: Copy {
    type Forward;
    type Backward;
    /// [`Finite`](crate::Finite) unless the sequence never ends.
    type Extent: Extent;

    fn forward_iter(self) -> Self::Forward;

    fn backward_iter(self) -> Self::Backward;

    /// Both cursors packaged as a std iterator.
    #[inline]
    fn traverse(self) -> Traversal<Self::Forward, Self::Backward> {
        Traversal::new(self.forward_iter(), self.backward_iter())
    }
}

impl<'a, 'b, V: ?Sized> View for &'a &'b V
where
    &'b V: View,
{
    type Forward = <&'b V as View>::Forward;
    type Backward = <&'b V as View>::Backward;
    type Extent = <&'b V as View>::Extent;

    #[inline]
    fn forward_iter(self) -> Self::Forward {
        (*self).forward_iter()
    }

    #[inline]
    fn backward_iter(self) -> Self::Backward {
        (*self).backward_iter()
    }
}

/// The forward cursor of `&'a V`.
pub type ForwardOf<'a, V> = <&'a V as View>::Forward;

/// The backward entry point of `&'a V`.
pub type BackwardOf<'a, V> = <&'a V as View>::Backward;

/// What the forward cursor of a view yields.
pub type ItemOf<V> = <<V as View>::Forward as Stepper>::Item;

/// O(1) emptiness check.
pub trait EmptinessView: View {
    fn is_empty(self) -> bool;
}

/// O(1) element count, or [`Infinite`].
pub trait SizedView: EmptinessView {
    type Size: Size;

    fn size(self) -> Self::Size;
}

impl<'a, 'b, V: ?Sized> EmptinessView for &'a &'b V
where
    &'b V: EmptinessView,
{
    #[inline]
    fn is_empty(self) -> bool {
        (*self).is_empty()
    }
}

impl<'a, 'b, V: ?Sized> SizedView for &'a &'b V
where
    &'b V: SizedView,
{
    type Size = <&'b V as SizedView>::Size;

    #[inline]
    fn size(self) -> Self::Size {
        (*self).size()
    }
}

/// A view that never runs out. Never empty, with size [`Infinite`].
pub trait InfiniteView: SizedView<Size = Infinite> + View<Extent = Infinite> {}

impl<V> InfiniteView for V where V: SizedView<Size = Infinite> + View<Extent = Infinite> {}

/// The forward cursor steps and the backward entry point stops it.
pub trait ForwardView: View {}

impl<V> ForwardView for V
where
    V: View,
    V::Forward: Stepper,
    V::Backward: SentinelFor<V::Forward>,
{
}

/// The backward cursor steps and the forward entry point stops it.
pub trait BackwardView: View {}

impl<V> BackwardView for V
where
    V: View,
    V::Backward: Stepper,
    V::Forward: SentinelFor<V::Backward>,
{
}

/// Both directions step and yield the same item type.
pub trait BidirectionalView: ForwardView + BackwardView {}

impl<V> BidirectionalView for V
where
    V: View,
    V::Forward: Stepper + SentinelFor<V::Backward>,
    V::Backward: Stepper<Item = <V::Forward as Stepper>::Item> + SentinelFor<V::Forward>,
{
}

pub trait MultipassForwardView: ForwardView {}

impl<V> MultipassForwardView for V
where
    V: View,
    V::Forward: MultipassStepper,
    V::Backward: SentinelFor<V::Forward>,
{
}

pub trait MultipassBackwardView: BackwardView {}

impl<V> MultipassBackwardView for V
where
    V: View,
    V::Backward: MultipassStepper,
    V::Forward: SentinelFor<V::Backward>,
{
}

pub trait MultipassBidirectionalView:
    BidirectionalView + MultipassForwardView + MultipassBackwardView
{
}

impl<V> MultipassBidirectionalView for V
where
    V: View,
    V::Forward: MultipassStepper + SentinelFor<V::Backward>,
    V::Backward: MultipassStepper<Item = <V::Forward as Stepper>::Item> + SentinelFor<V::Forward>,
{
}

/// Constant-time indexed access through the view's random-access cursors.
pub trait RandomAccessView: MultipassBidirectionalView {
    type Index: Index;
    type Element;

    /// The element at `index`. The index must be in bounds.
    fn at(self, index: Self::Index) -> Self::Element;

    /// The element at `index`, or `None` past the end.
    fn at_checked(self, index: Self::Index) -> Option<Self::Element>;
}

impl<V> RandomAccessView for V
where
    V: View,
    V::Forward: RandomAccess + CountedSentinel<V::Backward>,
    V::Backward: RandomAccessStepper<Index = <V::Forward as RandomAccessStepper>::Index>
        + CountedSentinel<V::Forward>
        + Stepper<Item = <V::Forward as Stepper>::Item>,
{
    type Index = <V::Forward as RandomAccessStepper>::Index;
    type Element = <V::Forward as Stepper>::Item;

    #[inline]
    fn at(self, index: Self::Index) -> Self::Element {
        let mut it = self.forward_iter();
        it.skip_n(index);
        it.next()
    }

    #[inline]
    fn at_checked(self, index: Self::Index) -> Option<Self::Element> {
        let mut it = self.forward_iter();
        let end = self.backward_iter();
        if it.skip_n_until(index, &end) != index {
            return None;
        }
        it.next_until(&end)
    }
}
