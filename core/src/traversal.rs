//! Bridge from a cursor pair to `core::iter`.

use core::iter::FusedIterator;

use crate::{SentinelFor, Stepper};

/// A forward cursor and its end, driven as an [`Iterator`].
///
/// When both cursors step, this is also a [`DoubleEndedIterator`]: `next` and
/// `next_back` meet in the middle. Once either side reports that the two have
/// met, both sides stay exhausted.
#[derive(Clone, Debug)]
pub struct Traversal<I, J> {
    front: I,
    back: J,
    remaining: Option<usize>,
    met: bool,
}

impl<I, J> Traversal<I, J> {
    pub fn new(front: I, back: J) -> Self {
        Self {
            front,
            back,
            remaining: None,
            met: false,
        }
    }

    /// Like [`new`](Self::new), for a pair known to enclose exactly `len`
    /// elements. The length is reported through `size_hint`.
    pub fn with_len(front: I, back: J, len: usize) -> Self {
        Self {
            front,
            back,
            remaining: Some(len),
            met: false,
        }
    }

    pub fn into_parts(self) -> (I, J) {
        (self.front, self.back)
    }

    fn took_one(&mut self) {
        if let Some(n) = &mut self.remaining {
            debug_assert!(*n > 0, "traversal yielded more than its stated length");
            *n = n.saturating_sub(1);
        }
    }
}

impl<I, J> Iterator for Traversal<I, J>
where
    I: Stepper,
    J: SentinelFor<I>,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.met {
            return None;
        }
        match self.front.next_until(&self.back) {
            Some(item) => {
                self.took_one();
                Some(item)
            }
            None => {
                self.met = true;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None if self.met => (0, Some(0)),
            None => (0, None),
        }
    }
}

impl<I, J> DoubleEndedIterator for Traversal<I, J>
where
    I: Stepper + SentinelFor<J>,
    J: Stepper<Item = I::Item> + SentinelFor<I>,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        if self.met {
            return None;
        }
        match self.back.next_until(&self.front) {
            Some(item) => {
                self.took_one();
                Some(item)
            }
            None => {
                self.met = true;
                None
            }
        }
    }
}

impl<I, J> FusedIterator for Traversal<I, J>
where
    I: Stepper,
    J: SentinelFor<I>,
{
}
