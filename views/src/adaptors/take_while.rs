use duality_core::{BackwardOf, Finite, ForwardOf, ItemOf, MultipassStepper, SentinelFor, Stepper, View};

/// The longest prefix of a view whose elements all satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct TakeWhile<V, P> {
    view: V,
    pred: P,
}

/// Keeps elements of `view` up to, not including, the first one `pred`
/// rejects.
///
/// Like [`eager_take`](crate::eager_take), the back is found when the
/// backward cursor is requested, by scanning from the front. The scan never
/// ends on an infinite view whose elements all pass `pred`.
pub fn eager_take_while<V, P>(view: V, pred: P) -> TakeWhile<V, P> {
    TakeWhile { view, pred }
}

impl<'a, V, P> View for &'a TakeWhile<V, P>
where
    &'a V: View,
    ForwardOf<'a, V>: MultipassStepper,
    BackwardOf<'a, V>: SentinelFor<ForwardOf<'a, V>>,
    P: Fn(&ItemOf<&'a V>) -> bool,
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
        let mut kept = 0usize;
        loop {
            let prev = it.clone();
            match it.next_until(&end) {
                Some(item) if (self.pred)(&item) => kept += 1,
                _ => {
                    tracing::trace!(kept, "take-while boundary");
                    return prev.invert();
                }
            }
        }
    }
}
