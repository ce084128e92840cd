use duality_core::{BidirectionalView, EmptinessView, SizedView, View};

/// A view with its two ends swapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reverse<V> {
    view: V,
}

/// Walks `view` back to front. Both directions of `view` must step.
///
/// The forward cursor of the result is the backward cursor of `view` and the
/// other way around, so every capability carries over with its direction
/// flipped. Reversing twice gives back the original cursor types.
pub fn reverse<V: Reversible>(view: V) -> Reverse<V> {
    Reverse { view }
}

/// View types whose every borrow is a [`BidirectionalView`].
///
/// Stated on the view type rather than on `&V`, so a call such as
/// `reverse(eager_take(..))` resolves the bound after the argument's type.
pub trait Reversible {}

impl<V> Reversible for V where for<'a> &'a V: BidirectionalView {}

impl<V> Reverse<V> {
    pub fn into_inner(self) -> V {
        self.view
    }
}

impl<'a, V> View for &'a Reverse<V>
where
    &'a V: BidirectionalView,
{
    type Forward = <&'a V as View>::Backward;
    type Backward = <&'a V as View>::Forward;
    type Extent = <&'a V as View>::Extent;

    #[inline]
    fn forward_iter(self) -> Self::Forward {
        (&self.view).backward_iter()
    }

    #[inline]
    fn backward_iter(self) -> Self::Backward {
        (&self.view).forward_iter()
    }
}

impl<'a, V> EmptinessView for &'a Reverse<V>
where
    &'a V: EmptinessView + BidirectionalView,
{
    #[inline]
    fn is_empty(self) -> bool {
        (&self.view).is_empty()
    }
}

impl<'a, V> SizedView for &'a Reverse<V>
where
    &'a V: SizedView + BidirectionalView,
{
    type Size = <&'a V as SizedView>::Size;

    #[inline]
    fn size(self) -> Self::Size {
        (&self.view).size()
    }
}
