use duality_core::{
    BackwardOf, Finite, ForwardOf, ItemOf, SentinelFor, SizedView, Stepper, View,
};
use duality_views::{
    ConcatHead, EagerTake, Filter, Reverse, Reversible, SplitBy, Take, TakeWhile, Transform,
    concat, eager_take, eager_take_while, filter, reverse, split_by, take, transform,
};

/// Adaptor methods for every view, so pipelines read left to right.
///
/// Each method is the free function of the same name from `duality-views`
/// with the view as its first argument.
pub trait ViewExt: Sized {
    fn reverse(self) -> Reverse<Self>
    where
        Self: Reversible,
    {
        reverse(self)
    }

    fn transform<F>(self, f: F) -> Transform<Self, F> {
        transform(self, f)
    }

    fn filter<P>(self, pred: P) -> Filter<Self, P> {
        filter(self, pred)
    }

    fn take(self, count: usize) -> Take<Self> {
        take(self, count)
    }

    fn eager_take(self, count: usize) -> EagerTake<Self> {
        eager_take(self, count)
    }

    fn eager_take_while<P>(self, pred: P) -> TakeWhile<Self, P> {
        eager_take_while(self, pred)
    }

    fn concat<'x, B>(self, tail: B) -> <Self as ConcatHead<'x, B>>::Output
    where
        Self: ConcatHead<'x, B>,
    {
        concat(self, tail)
    }

    fn split_by<P>(self, pred: P) -> SplitBy<Self, P> {
        split_by(self, pred)
    }

    /// Collects the view front to back. See [`to`](crate::to).
    fn to<'a, C>(&'a self) -> C
    where
        &'a Self: View,
        ForwardOf<'a, Self>: Stepper,
        BackwardOf<'a, Self>: SentinelFor<ForwardOf<'a, Self>>,
        C: FromIterator<ItemOf<&'a Self>>,
    {
        crate::to(self)
    }

    /// Collects a sized view. See [`to_sized`](crate::to_sized).
    fn to_sized<'a, C>(&'a self) -> C
    where
        &'a Self: SizedView + View<Extent = Finite>,
        ForwardOf<'a, Self>: Stepper,
        BackwardOf<'a, Self>: SentinelFor<ForwardOf<'a, Self>>,
        C: FromIterator<ItemOf<&'a Self>>,
    {
        crate::to_sized(self)
    }
}

impl<V> ViewExt for V where for<'a> &'a V: View {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{iota, iota_from};

    #[test]
    fn test_chains_match_nested_calls() {
        let chained: Vec<u32> = iota(0u32, 20)
            .filter(|x: &u32| x % 3 != 0)
            .transform(|x: u32| x + 100)
            .eager_take(5)
            .reverse()
            .to();
        let nested: Vec<u32> = crate::to(&reverse(eager_take(
            transform(filter(iota(0u32, 20), |x: &u32| x % 3 != 0), |x: u32| x + 100),
            5,
        )));
        assert_eq!(chained, [107, 105, 104, 102, 101]);
        assert_eq!(chained, nested);
    }

    #[test]
    fn test_concat_and_split() {
        let data = [4u8, 0, 4];
        let head: &[u8] = &data;
        let joined = head
            .transform(|x: &u8| *x)
            .concat(iota(0u8, 1))
            .concat(iota(9u8, 11));
        let runs: Vec<usize> = joined
            .split_by(|x: &u8| *x == 0)
            .to::<Vec<_>>()
            .iter()
            .map(|run| run.traverse().count())
            .collect();
        assert_eq!(runs, [1, 1, 2]);

        let endless = iota_from(1u16).concat(iota(0u16, 3));
        assert_eq!(endless.take(3).to::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_take_while_then_take() {
        let data = [2, 4, 6, 7, 8];
        let view: &[i32] = &data;
        let got: Vec<&i32> = view.eager_take_while(|x: &&i32| **x % 2 == 0).take(2).to();
        assert_eq!(got, [&2, &4]);
    }
}
