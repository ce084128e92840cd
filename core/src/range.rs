use crate::{
    CountedSentinel, EmptinessView, Finite, RandomAccessStepper, SentinelFor, SizedView, Stepper,
    View,
};

/// A view made of a forward cursor and the end it runs to.
///
/// Every call to [`View::forward_iter`] hands out a copy of the stored cursor,
/// so the range can be traversed any number of times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range<I, J> {
    front: I,
    back: J,
}

impl<I, J> Range<I, J> {
    pub fn new(front: I, back: J) -> Self {
        Self { front, back }
    }

    pub fn front(&self) -> &I {
        &self.front
    }

    pub fn back(&self) -> &J {
        &self.back
    }

    pub fn into_parts(self) -> (I, J) {
        (self.front, self.back)
    }
}

impl<'a, I: Clone, J: Clone> View for &'a Range<I, J> {
    type Forward = I;
    type Backward = J;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> I {
        self.front.clone()
    }

    #[inline]
    fn backward_iter(self) -> J {
        self.back.clone()
    }
}

impl<'a, I, J> EmptinessView for &'a Range<I, J>
where
    I: Stepper + Clone,
    J: SentinelFor<I> + Clone,
{
    #[inline]
    fn is_empty(self) -> bool {
        !self.front.clone().skip_until(&self.back)
    }
}

impl<'a, I, J> SizedView for &'a Range<I, J>
where
    I: RandomAccessStepper,
    J: CountedSentinel<I> + Clone,
{
    type Size = J::Distance;

    #[inline]
    fn size(self) -> J::Distance {
        self.front.clone().skip_all_until(&self.back)
    }
}
