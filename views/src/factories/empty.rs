use core::{fmt, marker::PhantomData};

use duality_core::{
    CountedSentinel, EmptinessView, Finite, MultipassStepper, RandomAccessStepper, SentinelFor,
    SizedView, Stepper, View,
};

/// A view with no elements.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// A view with no elements of type `T`.
pub const fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

/// The only cursor of an empty view. It serves both directions and is its
/// own sentinel.
pub struct EmptyCursor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> EmptyCursor<T> {
    const NEW: Self = Self {
        _marker: PhantomData,
    };
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Clone for EmptyCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyCursor<T> {}

impl<T> fmt::Debug for EmptyCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyCursor")
    }
}

impl<T> Stepper for EmptyCursor<T> {
    type Item = T;

    fn next(&mut self) -> T {
        unreachable!("next() on an empty view")
    }

    fn skip(&mut self) {
        debug_assert!(false, "skip() on an empty view");
    }
}

impl<T> SentinelFor<EmptyCursor<T>> for EmptyCursor<T> {
    #[inline]
    fn next_from(&self, _it: &mut EmptyCursor<T>) -> Option<T> {
        None
    }

    #[inline]
    fn skip_from(&self, _it: &mut EmptyCursor<T>) -> bool {
        false
    }

    #[inline]
    fn advance_from(&self, _it: &mut EmptyCursor<T>, _n: usize) -> usize {
        0
    }
}

impl<T> MultipassStepper for EmptyCursor<T> {
    type Inverse = Self;

    #[inline]
    fn invert(&self) -> Self {
        *self
    }
}

impl<T> RandomAccessStepper for EmptyCursor<T> {
    type Index = usize;

    #[inline]
    fn skip_n(&mut self, n: usize) {
        debug_assert_eq!(n, 0, "skipping {n} elements of an empty view");
    }
}

impl<T> CountedSentinel<EmptyCursor<T>> for EmptyCursor<T> {
    type Distance = usize;

    #[inline]
    fn skip_n_from(&self, _it: &mut EmptyCursor<T>, _n: usize) -> usize {
        0
    }

    #[inline]
    fn skip_all_from(&self, _it: &mut EmptyCursor<T>) -> usize {
        0
    }
}

impl<'a, T> View for &'a Empty<T> {
    type Forward = EmptyCursor<T>;
    type Backward = EmptyCursor<T>;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> EmptyCursor<T> {
        EmptyCursor::NEW
    }

    #[inline]
    fn backward_iter(self) -> EmptyCursor<T> {
        EmptyCursor::NEW
    }
}

impl<'a, T> EmptinessView for &'a Empty<T> {
    #[inline]
    fn is_empty(self) -> bool {
        true
    }
}

impl<'a, T> SizedView for &'a Empty<T> {
    type Size = usize;

    #[inline]
    fn size(self) -> usize {
        0
    }
}
