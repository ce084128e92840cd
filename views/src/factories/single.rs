use core::fmt;

use duality_core::{
    CountedSentinel, EmptinessView, Finite, MultipassStepper, RandomAccessStepper, SentinelFor,
    SizedView, Stepper, View,
};

/// A view over exactly one stored value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Single<T> {
    value: T,
}

/// A view that yields a reference to `value` once.
pub fn single<T>(value: T) -> Single<T> {
    Single { value }
}

impl<T> Single<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Forward cursor of [`Single`]: before the value (`0`) or past it (`1`).
pub struct SingleForward<'a, T> {
    value: &'a T,
    pos: usize,
}

/// Backward cursor of [`Single`], positioned like [`SingleForward`].
pub struct SingleBackward<'a, T> {
    value: &'a T,
    pos: usize,
}

macro_rules! cursor_basics {
    ($name:ident) => {
        impl<T> Clone for $name<'_, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<'_, T> {}

        impl<T> fmt::Debug for $name<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("pos", &self.pos)
                    .finish_non_exhaustive()
            }
        }
    };
}

cursor_basics!(SingleForward);
cursor_basics!(SingleBackward);

impl<'a, T> Stepper for SingleForward<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> &'a T {
        debug_assert_eq!(self.pos, 0, "next() past the single element");
        self.pos = 1;
        self.value
    }

    #[inline]
    fn skip(&mut self) {
        debug_assert_eq!(self.pos, 0, "skip() past the single element");
        self.pos = 1;
    }
}

impl<'a, T> Stepper for SingleBackward<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> &'a T {
        debug_assert_eq!(self.pos, 1, "next() before the single element");
        self.pos = 0;
        self.value
    }

    #[inline]
    fn skip(&mut self) {
        debug_assert_eq!(self.pos, 1, "skip() before the single element");
        self.pos = 0;
    }
}

impl<'a, T> SentinelFor<SingleForward<'a, T>> for SingleBackward<'a, T> {
    #[inline]
    fn next_from(&self, it: &mut SingleForward<'a, T>) -> Option<&'a T> {
        (it.pos != self.pos).then(|| it.next())
    }

    #[inline]
    fn advance_from(&self, it: &mut SingleForward<'a, T>, n: usize) -> usize {
        self.skip_n_from(it, n)
    }
}

impl<'a, T> SentinelFor<SingleBackward<'a, T>> for SingleForward<'a, T> {
    #[inline]
    fn next_from(&self, it: &mut SingleBackward<'a, T>) -> Option<&'a T> {
        (it.pos != self.pos).then(|| it.next())
    }

    #[inline]
    fn advance_from(&self, it: &mut SingleBackward<'a, T>, n: usize) -> usize {
        self.skip_n_from(it, n)
    }
}

impl<'a, T> MultipassStepper for SingleForward<'a, T> {
    type Inverse = SingleBackward<'a, T>;

    #[inline]
    fn invert(&self) -> SingleBackward<'a, T> {
        SingleBackward {
            value: self.value,
            pos: self.pos,
        }
    }
}

impl<'a, T> MultipassStepper for SingleBackward<'a, T> {
    type Inverse = SingleForward<'a, T>;

    #[inline]
    fn invert(&self) -> SingleForward<'a, T> {
        SingleForward {
            value: self.value,
            pos: self.pos,
        }
    }
}

impl<'a, T> RandomAccessStepper for SingleForward<'a, T> {
    type Index = usize;

    #[inline]
    fn skip_n(&mut self, n: usize) {
        debug_assert!(self.pos + n <= 1);
        self.pos += n;
    }
}

impl<'a, T> RandomAccessStepper for SingleBackward<'a, T> {
    type Index = usize;

    #[inline]
    fn skip_n(&mut self, n: usize) {
        debug_assert!(n <= self.pos);
        self.pos -= n;
    }
}

impl<'a, T> CountedSentinel<SingleForward<'a, T>> for SingleBackward<'a, T> {
    type Distance = usize;

    #[inline]
    fn skip_n_from(&self, it: &mut SingleForward<'a, T>, n: usize) -> usize {
        let step = n.min(self.pos - it.pos);
        it.pos += step;
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut SingleForward<'a, T>) -> usize {
        let step = self.pos - it.pos;
        it.pos = self.pos;
        step
    }
}

impl<'a, T> CountedSentinel<SingleBackward<'a, T>> for SingleForward<'a, T> {
    type Distance = usize;

    #[inline]
    fn skip_n_from(&self, it: &mut SingleBackward<'a, T>, n: usize) -> usize {
        let step = n.min(it.pos - self.pos);
        it.pos -= step;
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut SingleBackward<'a, T>) -> usize {
        let step = it.pos - self.pos;
        it.pos = self.pos;
        step
    }
}

impl<'a, T> View for &'a Single<T> {
    type Forward = SingleForward<'a, T>;
    type Backward = SingleBackward<'a, T>;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> SingleForward<'a, T> {
        SingleForward {
            value: &self.value,
            pos: 0,
        }
    }

    #[inline]
    fn backward_iter(self) -> SingleBackward<'a, T> {
        SingleBackward {
            value: &self.value,
            pos: 1,
        }
    }
}

impl<'a, T> EmptinessView for &'a Single<T> {
    #[inline]
    fn is_empty(self) -> bool {
        false
    }
}

impl<'a, T> SizedView for &'a Single<T> {
    type Size = usize;

    #[inline]
    fn size(self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use duality_core::RandomAccessView;

    use super::*;

    static_assertions::assert_impl_all!(SingleForward<'static, String>: duality_core::RandomAccess);
    static_assertions::assert_impl_all!(&'static Single<String>: RandomAccessView, SizedView);

    #[test]
    fn test_one_element_each_way() {
        let view = single(String::from("only"));
        let forward: Vec<&String> = view.traverse().collect();
        let backward: Vec<&String> = view.traverse().rev().collect();
        assert_eq!(forward, ["only"]);
        assert_eq!(backward, ["only"]);
        assert_eq!(view.size(), 1);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_yields_the_stored_instance() {
        let view = single(7u64);
        let mut it = view.forward_iter();
        let got = it.next_until(&view.backward_iter()).unwrap();
        assert!(core::ptr::eq(got, &view.value));
        assert_eq!(it.next_until(&view.backward_iter()), None);
    }

    #[test]
    fn test_skip_clamps_at_one() {
        let view = single('x');
        let mut it = view.forward_iter();
        assert_eq!(it.skip_n_until(4, &view.backward_iter()), 1);
        let mut back = it.invert();
        assert_eq!(back.next_until(&view.forward_iter()), Some(&'x'));
        assert_eq!(view.at(0), &'x');
        assert_eq!(view.at_checked(1), None);
    }
}
