use core::fmt;

use duality_core::{
    BackwardOf, CountedSentinel, EmptinessView, ForwardOf, MultipassStepper, RandomAccessStepper,
    SentinelFor, SizedView, Stepper, View,
};

/// A view whose elements are passed through a function on the way out.
#[derive(Clone, Copy, Debug)]
pub struct Transform<V, F> {
    view: V,
    f: F,
}

/// Applies `f` to every element of `view`, lazily, in whichever direction the
/// view is walked. `f` may run more than once per element.
pub fn transform<V, F>(view: V, f: F) -> Transform<V, F> {
    Transform { view, f }
}

/// A cursor of [`Transform`]: the inner cursor plus a borrow of the function.
///
/// Both ends of a transformed view share the one function stored in the
/// adaptor.
pub struct Mapped<'a, I, F> {
    inner: I,
    f: &'a F,
}

impl<'a, I, F> Mapped<'a, I, F> {
    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Clone, F> Clone for Mapped<'_, I, F> {
    fn clone(&self) -> Self {
        Mapped {
            inner: self.inner.clone(),
            f: self.f,
        }
    }
}

impl<I: Copy, F> Copy for Mapped<'_, I, F> {}

impl<I: fmt::Debug, F> fmt::Debug for Mapped<'_, I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mapped").field(&self.inner).finish()
    }
}

impl<'a, I, F, R> Stepper for Mapped<'a, I, F>
where
    I: Stepper,
    F: Fn(I::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> R {
        (self.f)(self.inner.next())
    }

    #[inline]
    fn skip(&mut self) {
        self.inner.skip();
    }
}

impl<'a, I, S, F, R> SentinelFor<Mapped<'a, I, F>> for Mapped<'a, S, F>
where
    I: Stepper,
    S: SentinelFor<I>,
    F: Fn(I::Item) -> R,
{
    #[inline]
    fn next_from(&self, it: &mut Mapped<'a, I, F>) -> Option<R> {
        let f = it.f;
        self.inner.next_from(&mut it.inner).map(f)
    }

    #[inline]
    fn skip_from(&self, it: &mut Mapped<'a, I, F>) -> bool {
        self.inner.skip_from(&mut it.inner)
    }

    #[inline]
    fn advance_from(&self, it: &mut Mapped<'a, I, F>, n: usize) -> usize {
        self.inner.advance_from(&mut it.inner, n)
    }
}

impl<'a, I, F, R> MultipassStepper for Mapped<'a, I, F>
where
    I: MultipassStepper,
    F: Fn(I::Item) -> R,
{
    type Inverse = Mapped<'a, I::Inverse, F>;

    #[inline]
    fn invert(&self) -> Self::Inverse {
        Mapped {
            inner: self.inner.invert(),
            f: self.f,
        }
    }
}

impl<'a, I, F, R> RandomAccessStepper for Mapped<'a, I, F>
where
    I: RandomAccessStepper,
    F: Fn(I::Item) -> R,
{
    type Index = I::Index;

    #[inline]
    fn skip_n(&mut self, n: I::Index) {
        self.inner.skip_n(n);
    }
}

impl<'a, I, S, F, R> CountedSentinel<Mapped<'a, I, F>> for Mapped<'a, S, F>
where
    I: RandomAccessStepper,
    S: CountedSentinel<I>,
    F: Fn(I::Item) -> R,
{
    type Distance = S::Distance;

    #[inline]
    fn skip_n_from(&self, it: &mut Mapped<'a, I, F>, n: I::Index) -> I::Index {
        self.inner.skip_n_from(&mut it.inner, n)
    }

    #[inline]
    fn skip_all_from(&self, it: &mut Mapped<'a, I, F>) -> S::Distance {
        self.inner.skip_all_from(&mut it.inner)
    }
}

impl<'a, V, F> View for &'a Transform<V, F>
where
    &'a V: View,
{
    type Forward = Mapped<'a, ForwardOf<'a, V>, F>;
    type Backward = Mapped<'a, BackwardOf<'a, V>, F>;
    type Extent = <&'a V as View>::Extent;

    #[inline]
    fn forward_iter(self) -> Self::Forward {
        Mapped {
            inner: (&self.view).forward_iter(),
            f: &self.f,
        }
    }

    #[inline]
    fn backward_iter(self) -> Self::Backward {
        Mapped {
            inner: (&self.view).backward_iter(),
            f: &self.f,
        }
    }
}

impl<'a, V, F> EmptinessView for &'a Transform<V, F>
where
    &'a V: EmptinessView,
{
    #[inline]
    fn is_empty(self) -> bool {
        (&self.view).is_empty()
    }
}

impl<'a, V, F> SizedView for &'a Transform<V, F>
where
    &'a V: SizedView,
{
    type Size = <&'a V as SizedView>::Size;

    #[inline]
    fn size(self) -> Self::Size {
        (&self.view).size()
    }
}
