use core::fmt;

use duality_core::{
    CountedSentinel, EmptinessView, Finite, Infinite, MultipassStepper, RandomAccessStepper,
    SentinelFor, SizedView, Stepper, View,
};

/// One value yielded forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Repeat<T> {
    value: T,
}

/// One value yielded a fixed number of times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RepeatN<T> {
    value: T,
    count: usize,
}

/// Yields a reference to `value` without end.
pub fn repeat<T>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// Yields a reference to `value` exactly `count` times.
pub fn repeat_n<T>(value: T, count: usize) -> RepeatN<T> {
    RepeatN { value, count }
}

/// Forward cursor over a repeated value. Only the position moves; every step
/// yields the same reference.
pub struct RepeatForward<'a, T> {
    value: &'a T,
    pos: usize,
}

/// Backward cursor over a repeated value; `pos` counts yields still ahead of
/// the front.
pub struct RepeatBackward<'a, T> {
    value: &'a T,
    pos: usize,
}

/// The unreachable end of [`Repeat`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RepeatEnd;

impl<T> Clone for RepeatForward<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RepeatForward<'_, T> {}

impl<T> Clone for RepeatBackward<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RepeatBackward<'_, T> {}

impl<T> fmt::Debug for RepeatForward<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RepeatForward").field(&self.pos).finish()
    }
}

impl<T> fmt::Debug for RepeatBackward<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RepeatBackward").field(&self.pos).finish()
    }
}

impl<T> RepeatForward<'_, T> {
    /// How many elements this cursor has passed.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a, T> Stepper for RepeatForward<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> &'a T {
        self.pos += 1;
        self.value
    }

    #[inline]
    fn skip(&mut self) {
        self.pos += 1;
    }
}

impl<'a, T> Stepper for RepeatBackward<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> &'a T {
        debug_assert!(self.pos > 0, "next() before the first repetition");
        self.pos -= 1;
        self.value
    }

    #[inline]
    fn skip(&mut self) {
        debug_assert!(self.pos > 0, "skip() before the first repetition");
        self.pos -= 1;
    }
}

impl<'a, T> SentinelFor<RepeatForward<'a, T>> for RepeatBackward<'a, T> {
    #[inline]
    fn next_from(&self, it: &mut RepeatForward<'a, T>) -> Option<&'a T> {
        debug_assert!(core::ptr::eq(it.value, self.value));
        (it.pos != self.pos).then(|| it.next())
    }

    #[inline]
    fn advance_from(&self, it: &mut RepeatForward<'a, T>, n: usize) -> usize {
        self.skip_n_from(it, n)
    }
}

impl<'a, T> SentinelFor<RepeatBackward<'a, T>> for RepeatForward<'a, T> {
    #[inline]
    fn next_from(&self, it: &mut RepeatBackward<'a, T>) -> Option<&'a T> {
        debug_assert!(core::ptr::eq(it.value, self.value));
        (it.pos != self.pos).then(|| it.next())
    }

    #[inline]
    fn advance_from(&self, it: &mut RepeatBackward<'a, T>, n: usize) -> usize {
        self.skip_n_from(it, n)
    }
}

impl<'a, T> SentinelFor<RepeatForward<'a, T>> for RepeatEnd {
    #[inline]
    fn next_from(&self, it: &mut RepeatForward<'a, T>) -> Option<&'a T> {
        Some(it.next())
    }

    #[inline]
    fn advance_from(&self, it: &mut RepeatForward<'a, T>, n: usize) -> usize {
        it.pos += n;
        n
    }
}

impl<'a, T> MultipassStepper for RepeatForward<'a, T> {
    type Inverse = RepeatBackward<'a, T>;

    #[inline]
    fn invert(&self) -> RepeatBackward<'a, T> {
        RepeatBackward {
            value: self.value,
            pos: self.pos,
        }
    }
}

impl<'a, T> MultipassStepper for RepeatBackward<'a, T> {
    type Inverse = RepeatForward<'a, T>;

    #[inline]
    fn invert(&self) -> RepeatForward<'a, T> {
        RepeatForward {
            value: self.value,
            pos: self.pos,
        }
    }
}

impl<'a, T> RandomAccessStepper for RepeatForward<'a, T> {
    type Index = usize;

    #[inline]
    fn skip_n(&mut self, n: usize) {
        self.pos += n;
    }
}

impl<'a, T> RandomAccessStepper for RepeatBackward<'a, T> {
    type Index = usize;

    #[inline]
    fn skip_n(&mut self, n: usize) {
        debug_assert!(n <= self.pos);
        self.pos -= n;
    }
}

impl<'a, T> CountedSentinel<RepeatForward<'a, T>> for RepeatBackward<'a, T> {
    type Distance = usize;

    #[inline]
    fn skip_n_from(&self, it: &mut RepeatForward<'a, T>, n: usize) -> usize {
        let step = n.min(self.pos - it.pos);
        it.pos += step;
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut RepeatForward<'a, T>) -> usize {
        let step = self.pos - it.pos;
        it.pos = self.pos;
        step
    }
}

impl<'a, T> CountedSentinel<RepeatBackward<'a, T>> for RepeatForward<'a, T> {
    type Distance = usize;

    #[inline]
    fn skip_n_from(&self, it: &mut RepeatBackward<'a, T>, n: usize) -> usize {
        let step = n.min(it.pos - self.pos);
        it.pos -= step;
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut RepeatBackward<'a, T>) -> usize {
        let step = it.pos - self.pos;
        it.pos = self.pos;
        step
    }
}

impl<'a, T> CountedSentinel<RepeatForward<'a, T>> for RepeatEnd {
    type Distance = Infinite;

    #[inline]
    fn skip_n_from(&self, it: &mut RepeatForward<'a, T>, n: usize) -> usize {
        it.pos += n;
        n
    }

    #[inline]
    fn skip_all_from(&self, _it: &mut RepeatForward<'a, T>) -> Infinite {
        Infinite
    }
}

impl<'a, T> View for &'a RepeatN<T> {
    type Forward = RepeatForward<'a, T>;
    type Backward = RepeatBackward<'a, T>;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> RepeatForward<'a, T> {
        RepeatForward {
            value: &self.value,
            pos: 0,
        }
    }

    #[inline]
    fn backward_iter(self) -> RepeatBackward<'a, T> {
        RepeatBackward {
            value: &self.value,
            pos: self.count,
        }
    }
}

impl<'a, T> EmptinessView for &'a RepeatN<T> {
    #[inline]
    fn is_empty(self) -> bool {
        self.count == 0
    }
}

impl<'a, T> SizedView for &'a RepeatN<T> {
    type Size = usize;

    #[inline]
    fn size(self) -> usize {
        self.count
    }
}

impl<'a, T> View for &'a Repeat<T> {
    type Forward = RepeatForward<'a, T>;
    type Backward = RepeatEnd;
    type Extent = Infinite;

    #[inline]
    fn forward_iter(self) -> RepeatForward<'a, T> {
        RepeatForward {
            value: &self.value,
            pos: 0,
        }
    }

    #[inline]
    fn backward_iter(self) -> RepeatEnd {
        RepeatEnd
    }
}

impl<'a, T> EmptinessView for &'a Repeat<T> {
    #[inline]
    fn is_empty(self) -> bool {
        false
    }
}

impl<'a, T> SizedView for &'a Repeat<T> {
    type Size = Infinite;

    #[inline]
    fn size(self) -> Infinite {
        Infinite
    }
}

#[cfg(test)]
mod tests {
    use duality_core::{BackwardView, InfiniteView, RandomAccess, RandomAccessView};

    use super::*;

    static_assertions::assert_impl_all!(RepeatForward<'static, String>: RandomAccess);
    static_assertions::assert_impl_all!(&'static RepeatN<String>: RandomAccessView, SizedView);
    static_assertions::assert_impl_all!(&'static Repeat<String>: InfiniteView);
    static_assertions::assert_not_impl_any!(&'static Repeat<String>: BackwardView);

    #[test]
    fn test_counted_repeat() {
        let view = repeat_n(String::from("ab"), 3);
        let all: Vec<&String> = view.traverse().collect();
        assert_eq!(all, ["ab", "ab", "ab"]);
        assert!(all.iter().all(|s| core::ptr::eq(*s, &view.value)));
        assert_eq!(view.size(), 3);
        assert_eq!(view.traverse().rev().count(), 3);
    }

    #[test]
    fn test_zero_repeats() {
        let view = repeat_n(1u8, 0);
        assert!(view.is_empty());
        assert_eq!(view.at_checked(0), None);
        assert_eq!(view.traverse().next(), None);
    }

    #[test]
    fn test_ends_meet_in_the_middle() {
        let view = repeat_n('z', 5);
        let mut front = view.forward_iter();
        let mut back = view.backward_iter();
        assert_eq!(front.skip_n_until(2, &back), 2);
        assert_eq!(back.skip_n_until(2, &front), 2);
        assert_eq!(front.next_until(&back), Some(&'z'));
        assert_eq!(front.next_until(&back), None);
        assert_eq!(back.next_until(&front), None);
    }

    #[test]
    fn test_endless_repeat() {
        let view = repeat(9i32);
        let mut it = view.forward_iter();
        assert_eq!(it.skip_n_until(1_000_000, &RepeatEnd), 1_000_000);
        assert_eq!(it.next_until(&RepeatEnd), Some(&9));
        assert_eq!(it.position(), 1_000_001);
        assert_eq!(it.skip_all_until(&RepeatEnd), Infinite);
        assert_eq!(view.size(), Infinite);

        let mut back = it.invert();
        assert_eq!(back.next_until(&view.forward_iter()), Some(&9));
    }
}
