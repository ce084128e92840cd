use duality_core::{EmptinessView, Finite, MultipassStepper, SentinelFor, SizedView, Stepper, View};

/// A forward-only view over a cloneable iterator, such as the one a linked
/// list hands out.
///
/// Each traversal starts from a fresh clone of the stored iterator, so the
/// view can be walked any number of times. Cursors are multipass, but their
/// inverse is only a position mark: nothing can step backward.
#[derive(Clone, Copy, Debug)]
pub struct IterView<I> {
    iter: I,
}

/// Wraps anything whose iterator is `Clone` as an [`IterView`].
///
/// ```
/// use std::collections::LinkedList;
///
/// use duality::{View, viewify_iter};
///
/// let list: LinkedList<u8> = [1, 2, 3].into_iter().collect();
/// let view = viewify_iter(&list);
/// assert_eq!(view.traverse().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn viewify_iter<T>(iterable: T) -> IterView<T::IntoIter>
where
    T: IntoIterator,
    T::IntoIter: Clone,
{
    IterView {
        iter: iterable.into_iter(),
    }
}

/// Forward cursor of [`IterView`]. Counts the items it has yielded.
#[derive(Clone, Debug)]
pub struct IterForward<I> {
    iter: I,
    taken: usize,
}

impl<I> IterForward<I> {
    /// How many items this cursor has yielded.
    pub fn position(&self) -> usize {
        self.taken
    }
}

impl<I: Iterator> Stepper for IterForward<I> {
    type Item = I::Item;

    /// Panics if the iterator is exhausted.
    #[inline]
    fn next(&mut self) -> I::Item {
        match self.iter.next() {
            Some(item) => {
                self.taken += 1;
                item
            }
            None => panic!("stepped past the end of an iterator view"),
        }
    }
}

/// The end of an [`IterView`]: wherever the iterator runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IterEnd;

impl<I: Iterator> SentinelFor<IterForward<I>> for IterEnd {
    #[inline]
    fn next_from(&self, it: &mut IterForward<I>) -> Option<I::Item> {
        let item = it.iter.next()?;
        it.taken += 1;
        Some(item)
    }
}

/// A position in an [`IterView`] traversal, made by inverting a cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IterMark {
    at: usize,
}

impl<I: Iterator> SentinelFor<IterForward<I>> for IterMark {
    #[inline]
    fn next_from(&self, it: &mut IterForward<I>) -> Option<I::Item> {
        debug_assert!(it.taken <= self.at, "cursor went past its mark");
        if it.taken == self.at {
            return None;
        }
        Some(it.next())
    }

    fn advance_from(&self, it: &mut IterForward<I>, n: usize) -> usize {
        let n = n.min(self.at.saturating_sub(it.taken));
        for _ in 0..n {
            it.next();
        }
        n
    }
}

impl<I: Iterator + Clone> MultipassStepper for IterForward<I> {
    type Inverse = IterMark;

    #[inline]
    fn invert(&self) -> IterMark {
        IterMark { at: self.taken }
    }
}

impl<'a, I: Iterator + Clone> View for &'a IterView<I> {
    type Forward = IterForward<I>;
    type Backward = IterEnd;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> IterForward<I> {
        IterForward {
            iter: self.iter.clone(),
            taken: 0,
        }
    }

    #[inline]
    fn backward_iter(self) -> IterEnd {
        IterEnd
    }
}

impl<'a, I: ExactSizeIterator + Clone> EmptinessView for &'a IterView<I> {
    #[inline]
    fn is_empty(self) -> bool {
        self.iter.len() == 0
    }
}

impl<'a, I: ExactSizeIterator + Clone> SizedView for &'a IterView<I> {
    type Size = usize;

    #[inline]
    fn size(self) -> usize {
        self.iter.len()
    }
}
