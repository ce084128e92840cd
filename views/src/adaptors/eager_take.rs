use duality_core::{
    BackwardOf, EmptinessView, Finite, ForwardOf, MultipassStepper, SentinelFor, Size, SizedView,
    Stepper, View,
};

/// The first `count` elements of a view, with a real backward cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EagerTake<V> {
    view: V,
    count: usize,
}

/// Truncates `view` to at most `count` elements, locating the new back when
/// the backward cursor is requested.
///
/// The forward cursor is the inner one, untouched. `backward_iter` walks a
/// copy of it forward by `count` (one jump for random-access views, `count`
/// steps otherwise) and inverts it, so the result is reversible whenever the
/// inner view is. Each call to `backward_iter` repeats the walk.
pub fn eager_take<V>(view: V, count: usize) -> EagerTake<V> {
    EagerTake { view, count }
}

impl<'a, V> View for &'a EagerTake<V>
where
    &'a V: View,
    ForwardOf<'a, V>: MultipassStepper,
    BackwardOf<'a, V>: SentinelFor<ForwardOf<'a, V>>,
{
    type Forward = ForwardOf<'a, V>;
    type Backward = <ForwardOf<'a, V> as MultipassStepper>::Inverse;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> Self::Forward {
        (&self.view).forward_iter()
    }

    fn backward_iter(self) -> Self::Backward {
        let mut it = (&self.view).forward_iter();
        let end = (&self.view).backward_iter();
        let walked = it.advance_until(self.count, &end);
        tracing::trace!(count = self.count, walked, "eager take boundary");
        it.invert()
    }
}

impl<'a, V> EmptinessView for &'a EagerTake<V>
where
    &'a V: EmptinessView,
    ForwardOf<'a, V>: MultipassStepper,
    BackwardOf<'a, V>: SentinelFor<ForwardOf<'a, V>>,
{
    #[inline]
    fn is_empty(self) -> bool {
        self.count == 0 || (&self.view).is_empty()
    }
}

impl<'a, V> SizedView for &'a EagerTake<V>
where
    &'a V: SizedView,
    ForwardOf<'a, V>: MultipassStepper,
    BackwardOf<'a, V>: SentinelFor<ForwardOf<'a, V>>,
{
    type Size = usize;

    #[inline]
    fn size(self) -> usize {
        (&self.view).size().min_count(self.count)
    }
}
