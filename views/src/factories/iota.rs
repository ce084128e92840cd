//! Arithmetic progressions.
//!
//! How much of the lattice an iota view reaches depends on its element type:
//!
//! | element implements | view is |
//! |---|---|
//! | [`Incrementable`] | multipass forward |
//! | [`Decrementable`] | reversible, bidirectional |
//! | [`Advanceable`] | random access and sized |
//!
//! [`iota_from`] has no upper bound: it is infinite and its backward entry is
//! the positionless [`IotaEnd`].

use duality_core::{
    CountedSentinel, EmptinessView, Finite, Index, Infinite, MultipassStepper,
    RandomAccessStepper, SentinelFor, SizedView, Stepper, View, advance_by_walking,
};

/// A value with a successor.
pub trait Incrementable: Clone + PartialEq {
    fn increment(&mut self);

    /// How many increments lead from `self` to `end`, if that is cheap to
    /// compute. Bounded skips use it to jump instead of walking.
    #[inline]
    fn steps_to(&self, _end: &Self) -> Option<usize> {
        None
    }

    #[inline]
    fn increment_by(&mut self, n: usize) {
        for _ in 0..n {
            self.increment();
        }
    }
}

/// A value with a predecessor.
pub trait Decrementable: Incrementable {
    fn decrement(&mut self);

    #[inline]
    fn decrement_by(&mut self, n: usize) {
        for _ in 0..n {
            self.decrement();
        }
    }
}

/// A value that moves by arbitrary amounts in O(1).
pub trait Advanceable: Decrementable {
    type Distance: Index;

    /// Increments needed to reach `end`, which must not lie before `self`.
    fn distance(&self, end: &Self) -> Self::Distance;

    fn advance(&mut self, n: Self::Distance);

    fn retreat(&mut self, n: Self::Distance);
}

macro_rules! impl_stepping {
    ($($t:ty => $u:ty => $d:ty),* $(,)?) => {
        $(
            impl Incrementable for $t {
                #[inline]
                fn increment(&mut self) {
                    *self += 1;
                }

                #[inline]
                fn steps_to(&self, end: &Self) -> Option<usize> {
                    Some(self.distance(end).to_usize())
                }

                #[inline]
                fn increment_by(&mut self, n: usize) {
                    self.advance(<$d as Index>::from_usize(n));
                }
            }

            impl Decrementable for $t {
                #[inline]
                fn decrement(&mut self) {
                    *self -= 1;
                }

                #[inline]
                fn decrement_by(&mut self, n: usize) {
                    self.retreat(<$d as Index>::from_usize(n));
                }
            }

            impl Advanceable for $t {
                // Unsigned and at least 32 bits wide, so a signed range spanning
                // the whole type fits, and so do sums of a few such ranges.
                type Distance = $d;

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn distance(&self, end: &Self) -> $d {
                    debug_assert!(self <= end, "iota end {} lies before {}", end, self);
                    <$d>::from(end.wrapping_sub(*self) as $u)
                }

                #[inline]
                fn advance(&mut self, n: $d) {
                    *self = self.wrapping_add(n as $t);
                }

                #[inline]
                fn retreat(&mut self, n: $d) {
                    *self = self.wrapping_sub(n as $t);
                }
            }
        )*
    };
}

impl_stepping!(
    u8 => u8 => u32, u16 => u16 => u32, u32 => u32 => u32,
    u64 => u64 => u64, u128 => u128 => u128, usize => usize => usize,
    i8 => u8 => u32, i16 => u16 => u32, i32 => u32 => u32,
    i64 => u64 => u64, i128 => u128 => u128, isize => usize => usize,
);

/// The values `begin, begin + 1, ...` up to but excluding `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Iota<T> {
    begin: T,
    end: T,
}

/// Counts from `begin` up to, not including, `end`. `end` must be reachable
/// from `begin` by incrementing.
pub fn iota<T: Incrementable>(begin: T, end: T) -> Iota<T> {
    Iota { begin, end }
}

/// The values `begin, begin + 1, ...` without end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IotaFrom<T> {
    begin: T,
}

/// Counts up from `begin` forever.
pub fn iota_from<T: Incrementable>(begin: T) -> IotaFrom<T> {
    IotaFrom { begin }
}

/// Forward cursor of an iota view: the next value to yield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IotaForward<T> {
    value: T,
}

/// Backward cursor of an iota view: one past the next value to yield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IotaBackward<T> {
    value: T,
}

/// The unreachable end of [`IotaFrom`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IotaEnd;

impl<T> IotaForward<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> IotaBackward<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Incrementable> Stepper for IotaForward<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> T {
        let out = self.value.clone();
        self.value.increment();
        out
    }

    #[inline]
    fn skip(&mut self) {
        self.value.increment();
    }
}

impl<T: Decrementable> Stepper for IotaBackward<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> T {
        self.value.decrement();
        self.value.clone()
    }

    #[inline]
    fn skip(&mut self) {
        self.value.decrement();
    }
}

impl<T: Incrementable> SentinelFor<IotaForward<T>> for IotaBackward<T> {
    #[inline]
    fn next_from(&self, it: &mut IotaForward<T>) -> Option<T> {
        (it.value != self.value).then(|| it.next())
    }

    #[inline]
    fn skip_from(&self, it: &mut IotaForward<T>) -> bool {
        if it.value == self.value {
            return false;
        }
        it.value.increment();
        true
    }

    #[inline]
    fn advance_from(&self, it: &mut IotaForward<T>, n: usize) -> usize {
        match it.value.steps_to(&self.value) {
            Some(left) => {
                let step = n.min(left);
                it.value.increment_by(step);
                step
            }
            None => advance_by_walking(self, it, n),
        }
    }
}

impl<T: Decrementable> SentinelFor<IotaBackward<T>> for IotaForward<T> {
    #[inline]
    fn next_from(&self, it: &mut IotaBackward<T>) -> Option<T> {
        (it.value != self.value).then(|| it.next())
    }

    #[inline]
    fn skip_from(&self, it: &mut IotaBackward<T>) -> bool {
        if it.value == self.value {
            return false;
        }
        it.value.decrement();
        true
    }

    #[inline]
    fn advance_from(&self, it: &mut IotaBackward<T>, n: usize) -> usize {
        match self.value.steps_to(&it.value) {
            Some(left) => {
                let step = n.min(left);
                it.value.decrement_by(step);
                step
            }
            None => advance_by_walking(self, it, n),
        }
    }
}

impl<T: Incrementable> SentinelFor<IotaForward<T>> for IotaEnd {
    #[inline]
    fn next_from(&self, it: &mut IotaForward<T>) -> Option<T> {
        Some(it.next())
    }

    #[inline]
    fn skip_from(&self, it: &mut IotaForward<T>) -> bool {
        it.value.increment();
        true
    }

    #[inline]
    fn advance_from(&self, it: &mut IotaForward<T>, n: usize) -> usize {
        it.value.increment_by(n);
        n
    }
}

impl<T: Incrementable> MultipassStepper for IotaForward<T> {
    type Inverse = IotaBackward<T>;

    #[inline]
    fn invert(&self) -> IotaBackward<T> {
        IotaBackward {
            value: self.value.clone(),
        }
    }
}

impl<T: Decrementable> MultipassStepper for IotaBackward<T> {
    type Inverse = IotaForward<T>;

    #[inline]
    fn invert(&self) -> IotaForward<T> {
        IotaForward {
            value: self.value.clone(),
        }
    }
}

impl<T: Advanceable> RandomAccessStepper for IotaForward<T> {
    type Index = T::Distance;

    #[inline]
    fn skip_n(&mut self, n: T::Distance) {
        self.value.advance(n);
    }
}

impl<T: Advanceable> RandomAccessStepper for IotaBackward<T> {
    type Index = T::Distance;

    #[inline]
    fn skip_n(&mut self, n: T::Distance) {
        self.value.retreat(n);
    }
}

impl<T: Advanceable> CountedSentinel<IotaForward<T>> for IotaBackward<T> {
    type Distance = T::Distance;

    #[inline]
    fn skip_n_from(&self, it: &mut IotaForward<T>, n: T::Distance) -> T::Distance {
        let step = n.min(it.value.distance(&self.value));
        it.value.advance(step);
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut IotaForward<T>) -> T::Distance {
        let step = it.value.distance(&self.value);
        it.value = self.value.clone();
        step
    }
}

impl<T: Advanceable> CountedSentinel<IotaBackward<T>> for IotaForward<T> {
    type Distance = T::Distance;

    #[inline]
    fn skip_n_from(&self, it: &mut IotaBackward<T>, n: T::Distance) -> T::Distance {
        let step = n.min(self.value.distance(&it.value));
        it.value.retreat(step);
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut IotaBackward<T>) -> T::Distance {
        let step = self.value.distance(&it.value);
        it.value = self.value.clone();
        step
    }
}

impl<T: Advanceable> CountedSentinel<IotaForward<T>> for IotaEnd {
    type Distance = Infinite;

    #[inline]
    fn skip_n_from(&self, it: &mut IotaForward<T>, n: T::Distance) -> T::Distance {
        it.value.advance(n);
        n
    }

    #[inline]
    fn skip_all_from(&self, _it: &mut IotaForward<T>) -> Infinite {
        Infinite
    }
}

impl<'a, T: Incrementable> View for &'a Iota<T> {
    type Forward = IotaForward<T>;
    type Backward = IotaBackward<T>;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> IotaForward<T> {
        IotaForward {
            value: self.begin.clone(),
        }
    }

    #[inline]
    fn backward_iter(self) -> IotaBackward<T> {
        IotaBackward {
            value: self.end.clone(),
        }
    }
}

impl<'a, T: Incrementable> EmptinessView for &'a Iota<T> {
    #[inline]
    fn is_empty(self) -> bool {
        self.begin == self.end
    }
}

impl<'a, T: Advanceable> SizedView for &'a Iota<T> {
    type Size = T::Distance;

    #[inline]
    fn size(self) -> T::Distance {
        self.begin.distance(&self.end)
    }
}

impl<'a, T: Incrementable> View for &'a IotaFrom<T> {
    type Forward = IotaForward<T>;
    type Backward = IotaEnd;
    type Extent = Infinite;

    #[inline]
    fn forward_iter(self) -> IotaForward<T> {
        IotaForward {
            value: self.begin.clone(),
        }
    }

    #[inline]
    fn backward_iter(self) -> IotaEnd {
        IotaEnd
    }
}

impl<'a, T: Incrementable> EmptinessView for &'a IotaFrom<T> {
    #[inline]
    fn is_empty(self) -> bool {
        false
    }
}

impl<'a, T: Incrementable> SizedView for &'a IotaFrom<T> {
    type Size = Infinite;

    #[inline]
    fn size(self) -> Infinite {
        Infinite
    }
}

#[cfg(test)]
mod tests {
    use duality_core::{
        BackwardView, InfiniteView, MultipassForwardView, RandomAccess, RandomAccessView,
        ReversibleStepper,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    /// Only knows its successor.
    #[derive(Clone, Debug, PartialEq)]
    struct Tally(u32);

    impl Incrementable for Tally {
        fn increment(&mut self) {
            self.0 += 1;
        }
    }

    static_assertions::assert_impl_all!(IotaForward<u32>: RandomAccess);
    static_assertions::assert_impl_all!(IotaForward<i64>: RandomAccess);
    static_assertions::assert_impl_all!(&'static Iota<u16>: RandomAccessView, SizedView);
    static_assertions::assert_impl_all!(&'static IotaFrom<u32>: InfiniteView, MultipassForwardView);
    static_assertions::assert_not_impl_any!(&'static IotaFrom<u32>: BackwardView);
    static_assertions::assert_impl_all!(IotaForward<Tally>: MultipassStepper);
    static_assertions::assert_not_impl_any!(IotaForward<Tally>: ReversibleStepper);

    #[test]
    fn test_five_to_eight() {
        let view = iota(5, 8);
        assert_eq!(view.size(), 3);
        let forward: Vec<i32> = view.traverse().collect();
        let backward: Vec<i32> = view.traverse().rev().collect();
        assert_eq!(forward, [5, 6, 7]);
        assert_eq!(backward, [7, 6, 5]);

        let mut it = view.forward_iter();
        assert_eq!(it.skip_n_until(2, &view.backward_iter()), 2);
        assert_eq!(it.next_until(&view.backward_iter()), Some(7));
        assert_eq!(it.next_until(&view.backward_iter()), None);
    }

    #[test]
    fn test_bulk_skip_clamps_to_end() {
        let view = iota(10u8, 14);
        let end = view.backward_iter();
        let mut it = view.forward_iter();
        assert_eq!(it.skip_n_until(9, &end), 4);
        assert_eq!(it.next_until(&end), None);

        let mut back = view.backward_iter();
        assert_eq!(back.skip_n_until(1, &view.forward_iter()), 1);
        assert_eq!(back.skip_all_until(&view.forward_iter()), 3);
        assert_eq!(view.at(2), 12);
        assert_eq!(view.at_checked(4), None);
    }

    #[test]
    fn test_signed_full_range() {
        let view = iota(i8::MIN, i8::MAX);
        assert_eq!(view.size(), 255u32);
        assert_eq!(view.traverse().next(), Some(-128));
        assert_eq!(view.traverse().next_back(), Some(126));
    }

    #[test]
    fn test_narrow_elements_count_in_u32() {
        let view = iota(0u8, 200);
        let size: u32 = view.size();
        assert_eq!(size, 200);
        assert_eq!(view.at(199), 199);

        let mut back = view.backward_iter();
        assert_eq!(back.skip_n_until(300, &view.forward_iter()), 200);
    }

    #[test]
    fn test_empty_when_bounds_meet() {
        let view = iota(3u64, 3);
        assert!(view.is_empty());
        assert_eq!(view.traverse().count(), 0);
    }

    #[test]
    fn test_successor_only_walks() {
        let view = iota(Tally(0), Tally(4));
        let end = view.backward_iter();
        let mut it = view.forward_iter();
        assert_eq!(it.advance_until(10, &end), 4);
        assert_eq!(it.value(), &Tally(4));
        let got: Vec<u32> = view.traverse().map(|t| t.0).collect();
        assert_eq!(got, [0, 1, 2, 3]);
    }

    #[test]
    fn test_unbounded() {
        let view = iota_from(100u64);
        let mut it = view.forward_iter();
        assert_eq!(it.next_until(&IotaEnd), Some(100));
        assert_eq!(it.skip_n_until(1000, &IotaEnd), 1000);
        assert_eq!(it.next_until(&IotaEnd), Some(1101));
        assert_eq!(it.skip_all_until(&IotaEnd), Infinite);
        assert_eq!(view.size(), Infinite);
        assert!(!view.is_empty());
        let first: Vec<u64> = view.traverse().take(3).collect();
        assert_eq!(first, [100, 101, 102]);
    }
}
