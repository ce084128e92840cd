//! Slices as views.
//!
//! Any `&[T]` is a random-access view yielding `&T`. To rewrite elements while
//! cursors are alive, view the slice as cells with [`cells`].

use core::{cell::Cell, ptr};

use crate::{
    CountedSentinel, EmptinessView, Finite, MultipassStepper, RandomAccessStepper, SentinelFor,
    SizedView, Stepper, View,
};

/// Reborrows a mutable slice as shared cells, so elements can be swapped or
/// replaced through the shared cursors of a view.
#[inline]
pub fn cells<T>(slice: &mut [T]) -> &[Cell<T>] {
    Cell::from_mut(slice).as_slice_of_cells()
}

/// Forward cursor over a slice.
#[derive(Debug)]
pub struct SliceForward<'s, T> {
    slice: &'s [T],
    pos: usize,
}

/// Backward cursor over a slice. `pos` is one past the next element it yields.
#[derive(Debug)]
pub struct SliceBackward<'s, T> {
    slice: &'s [T],
    pos: usize,
}

// Derives would require `T: Clone`.
impl<T> Clone for SliceForward<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceForward<'_, T> {}

impl<T> Clone for SliceBackward<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceBackward<'_, T> {}

impl<'s, T> SliceForward<'s, T> {
    /// Offset from the start of the slice.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'s, T> SliceBackward<'s, T> {
    /// Offset from the start of the slice.
    pub fn position(&self) -> usize {
        self.pos
    }
}

#[inline]
fn debug_check_pair<T>(a: &[T], b: &[T]) {
    debug_assert!(
        ptr::eq(a, b),
        "slice cursor compared against a sentinel from another slice"
    );
}

impl<'s, T> Stepper for SliceForward<'s, T> {
    type Item = &'s T;

    #[inline]
    fn next(&mut self) -> &'s T {
        let slice = self.slice;
        let item = &slice[self.pos];
        self.pos += 1;
        item
    }

    #[inline]
    fn skip(&mut self) {
        debug_assert!(self.pos < self.slice.len());
        self.pos += 1;
    }
}

impl<'s, T> Stepper for SliceBackward<'s, T> {
    type Item = &'s T;

    #[inline]
    fn next(&mut self) -> &'s T {
        self.pos -= 1;
        let slice = self.slice;
        &slice[self.pos]
    }

    #[inline]
    fn skip(&mut self) {
        debug_assert!(self.pos > 0);
        self.pos -= 1;
    }
}

impl<'s, T> SentinelFor<SliceForward<'s, T>> for SliceBackward<'s, T> {
    #[inline]
    fn next_from(&self, it: &mut SliceForward<'s, T>) -> Option<&'s T> {
        debug_check_pair(it.slice, self.slice);
        debug_assert!(it.pos <= self.pos, "slice cursors crossed");
        (it.pos != self.pos).then(|| it.next())
    }

    #[inline]
    fn advance_from(&self, it: &mut SliceForward<'s, T>, n: usize) -> usize {
        self.skip_n_from(it, n)
    }
}

impl<'s, T> SentinelFor<SliceBackward<'s, T>> for SliceForward<'s, T> {
    #[inline]
    fn next_from(&self, it: &mut SliceBackward<'s, T>) -> Option<&'s T> {
        debug_check_pair(it.slice, self.slice);
        debug_assert!(it.pos >= self.pos, "slice cursors crossed");
        (it.pos != self.pos).then(|| it.next())
    }

    #[inline]
    fn advance_from(&self, it: &mut SliceBackward<'s, T>, n: usize) -> usize {
        self.skip_n_from(it, n)
    }
}

impl<'s, T> MultipassStepper for SliceForward<'s, T> {
    type Inverse = SliceBackward<'s, T>;

    #[inline]
    fn invert(&self) -> SliceBackward<'s, T> {
        SliceBackward {
            slice: self.slice,
            pos: self.pos,
        }
    }
}

impl<'s, T> MultipassStepper for SliceBackward<'s, T> {
    type Inverse = SliceForward<'s, T>;

    #[inline]
    fn invert(&self) -> SliceForward<'s, T> {
        SliceForward {
            slice: self.slice,
            pos: self.pos,
        }
    }
}

impl<'s, T> RandomAccessStepper for SliceForward<'s, T> {
    type Index = usize;

    #[inline]
    fn skip_n(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.slice.len());
        self.pos += n;
    }
}

impl<'s, T> RandomAccessStepper for SliceBackward<'s, T> {
    type Index = usize;

    #[inline]
    fn skip_n(&mut self, n: usize) {
        debug_assert!(n <= self.pos);
        self.pos -= n;
    }
}

impl<'s, T> CountedSentinel<SliceForward<'s, T>> for SliceBackward<'s, T> {
    type Distance = usize;

    #[inline]
    fn skip_n_from(&self, it: &mut SliceForward<'s, T>, n: usize) -> usize {
        let step = n.min(self.pos - it.pos);
        it.pos += step;
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut SliceForward<'s, T>) -> usize {
        let step = self.pos - it.pos;
        it.pos = self.pos;
        step
    }
}

impl<'s, T> CountedSentinel<SliceBackward<'s, T>> for SliceForward<'s, T> {
    type Distance = usize;

    #[inline]
    fn skip_n_from(&self, it: &mut SliceBackward<'s, T>, n: usize) -> usize {
        let step = n.min(it.pos - self.pos);
        it.pos -= step;
        step
    }

    #[inline]
    fn skip_all_from(&self, it: &mut SliceBackward<'s, T>) -> usize {
        let step = it.pos - self.pos;
        it.pos = self.pos;
        step
    }
}

impl<'s, T> View for &'s [T] {
    type Forward = SliceForward<'s, T>;
    type Backward = SliceBackward<'s, T>;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> SliceForward<'s, T> {
        SliceForward {
            slice: self,
            pos: 0,
        }
    }

    #[inline]
    fn backward_iter(self) -> SliceBackward<'s, T> {
        SliceBackward {
            slice: self,
            pos: self.len(),
        }
    }
}

impl<'s, T> EmptinessView for &'s [T] {
    #[inline]
    fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl<'s, T> SizedView for &'s [T] {
    type Size = usize;

    #[inline]
    fn size(self) -> usize {
        self.len()
    }
}
