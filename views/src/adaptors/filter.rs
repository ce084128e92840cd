use core::fmt;

use duality_core::{
    BackwardOf, EmptinessView, ForwardOf, Infinite, MultipassStepper, SentinelFor, SizedView,
    Stepper, View,
};

/// A view that drops the elements a predicate rejects.
#[derive(Clone, Copy, Debug)]
pub struct Filter<V, P> {
    view: V,
    pred: P,
}

/// Keeps the elements of `view` for which `pred` returns `true`.
///
/// Stepping becomes a scan, so random access and bulk skips are lost. Sizes
/// are lost too, except that a filtered infinite view is still infinite.
pub fn filter<V, P>(view: V, pred: P) -> Filter<V, P> {
    Filter { view, pred }
}

/// A cursor of [`Filter`].
pub struct Filtered<'a, I, P> {
    inner: I,
    pred: &'a P,
}

impl<'a, I, P> Filtered<'a, I, P> {
    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<I: Clone, P> Clone for Filtered<'_, I, P> {
    fn clone(&self) -> Self {
        Filtered {
            inner: self.inner.clone(),
            pred: self.pred,
        }
    }
}

impl<I: Copy, P> Copy for Filtered<'_, I, P> {}

impl<I: fmt::Debug, P> fmt::Debug for Filtered<'_, I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filtered").field(&self.inner).finish()
    }
}

impl<'a, I, P> Stepper for Filtered<'a, I, P>
where
    I: Stepper,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    /// Scans for the next accepted element. One must exist.
    #[inline]
    fn next(&mut self) -> I::Item {
        loop {
            let item = self.inner.next();
            if (self.pred)(&item) {
                return item;
            }
        }
    }
}

impl<'a, I, S, P> SentinelFor<Filtered<'a, I, P>> for Filtered<'a, S, P>
where
    I: Stepper,
    S: SentinelFor<I>,
    P: Fn(&I::Item) -> bool,
{
    #[inline]
    fn next_from(&self, it: &mut Filtered<'a, I, P>) -> Option<I::Item> {
        loop {
            let item = self.inner.next_from(&mut it.inner)?;
            if (it.pred)(&item) {
                return Some(item);
            }
        }
    }
}

impl<'a, I, P> MultipassStepper for Filtered<'a, I, P>
where
    I: MultipassStepper,
    P: Fn(&I::Item) -> bool,
{
    type Inverse = Filtered<'a, I::Inverse, P>;

    #[inline]
    fn invert(&self) -> Self::Inverse {
        Filtered {
            inner: self.inner.invert(),
            pred: self.pred,
        }
    }
}

impl<'a, V, P> View for &'a Filter<V, P>
where
    &'a V: View,
{
    type Forward = Filtered<'a, ForwardOf<'a, V>, P>;
    type Backward = Filtered<'a, BackwardOf<'a, V>, P>;
    type Extent = <&'a V as View>::Extent;

    #[inline]
    fn forward_iter(self) -> Self::Forward {
        Filtered {
            inner: (&self.view).forward_iter(),
            pred: &self.pred,
        }
    }

    #[inline]
    fn backward_iter(self) -> Self::Backward {
        Filtered {
            inner: (&self.view).backward_iter(),
            pred: &self.pred,
        }
    }
}

impl<'a, V, P> EmptinessView for &'a Filter<V, P>
where
    &'a V: View<Extent = Infinite>,
{
    #[inline]
    fn is_empty(self) -> bool {
        false
    }
}

impl<'a, V, P> SizedView for &'a Filter<V, P>
where
    &'a V: View<Extent = Infinite>,
{
    type Size = Infinite;

    #[inline]
    fn size(self) -> Infinite {
        Infinite
    }
}

#[cfg(test)]
mod tests {
    use duality_core::{
        InfiniteView, MultipassBidirectionalView, RandomAccessView, ReversibleStepper, SliceForward,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{iota, iota_from};

    type Odd = fn(&&'static u8) -> bool;
    static_assertions::assert_impl_all!(Filtered<'static, SliceForward<'static, u8>, Odd>: ReversibleStepper);
    static_assertions::assert_impl_all!(&'static Filter<&'static [u8], Odd>: MultipassBidirectionalView);
    static_assertions::assert_not_impl_any!(&'static Filter<&'static [u8], Odd>: RandomAccessView, EmptinessView);

    #[test]
    fn test_keeps_matching_elements() {
        let data = [1, 2, 3, 4, 5, 6, 7];
        let view = filter(&data[..], |x: &&i32| **x % 3 != 0);
        let forward: Vec<i32> = view.traverse().copied().collect();
        let backward: Vec<i32> = view.traverse().rev().copied().collect();
        assert_eq!(forward, [1, 2, 4, 5, 7]);
        assert_eq!(backward, [7, 5, 4, 2, 1]);
    }

    #[test]
    fn test_nothing_matches() {
        let view = filter(iota(0u32, 50), |x: &u32| *x > 100);
        assert_eq!(view.traverse().next(), None);
        assert_eq!(view.traverse().next_back(), None);
    }

    #[test]
    fn test_inverted_cursor_filters_too() {
        let view = filter(iota(0u32, 10), |x: &u32| x % 2 == 0);
        let mut it = view.forward_iter();
        let end = view.backward_iter();
        assert_eq!(it.next_until(&end), Some(0));
        assert_eq!(it.next_until(&end), Some(2));
        assert_eq!(it.next_until(&end), Some(4));
        let mut back = it.invert();
        assert_eq!(back.next_until(&view.forward_iter()), Some(4));
        assert_eq!(back.next_until(&view.forward_iter()), Some(2));
    }

    #[test]
    fn test_infinite_stays_infinite() {
        fn assert_infinite<V: InfiniteView>(_: V) {}

        let view = filter(iota_from(1u64), |x: &u64| x % 7 == 0);
        assert_infinite(&view);
        let got: Vec<u64> = view.traverse().take(3).collect();
        assert_eq!(got, [7, 14, 21]);
    }
}
