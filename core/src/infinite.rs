//! The infinite marker and the types that measure how long a view is.

use core::fmt;

use crate::Index;

/// Marker meaning "unbounded".
///
/// Returned as the size of endless views and as the distance reported by
/// [`skip_all_until`](crate::RandomAccessStepper::skip_all_until) when the
/// cursor can never reach its sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Infinite;

/// Marker for views that eventually run out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Finite;

static_assertions::assert_eq_size!(Infinite, ());
static_assertions::assert_eq_size!(Finite, ());

impl fmt::Display for Infinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("∞")
    }
}

mod private {
    pub trait Sealed {}
}

impl private::Sealed for Finite {}
impl private::Sealed for Infinite {}

/// Whether a view can run out. Implemented only by [`Finite`] and [`Infinite`].
///
/// Adaptors dispatch on this type to drop views that no traversal can reach.
pub trait Extent: private::Sealed + Copy + fmt::Debug + 'static {
    const IS_INFINITE: bool;
}

impl Extent for Finite {
    const IS_INFINITE: bool = false;
}

impl Extent for Infinite {
    const IS_INFINITE: bool = true;
}

/// A size or distance: either a concrete [`Index`] or [`Infinite`].
pub trait Size: Copy + fmt::Debug + PartialEq {
    /// The same measure as a plain `usize` count, or [`Infinite`]. Sums of
    /// sizes taken from different views are computed in this type.
    type Count: Size;

    fn is_zero(self) -> bool;

    fn to_count(self) -> Self::Count;

    /// Adds a finite count. [`Infinite`] absorbs it.
    fn grow(self, by: usize) -> Self;

    /// The smaller of this size and `limit`, as a plain count.
    fn min_count(self, limit: usize) -> usize;

    /// Converts a finite count. [`Infinite`] ignores the count.
    fn from_count(count: usize) -> Self;
}

impl Size for Infinite {
    type Count = Infinite;

    #[inline]
    fn is_zero(self) -> bool {
        false
    }

    #[inline]
    fn to_count(self) -> Infinite {
        Infinite
    }

    #[inline]
    fn grow(self, _by: usize) -> Self {
        Infinite
    }

    #[inline]
    fn min_count(self, limit: usize) -> usize {
        limit
    }

    #[inline]
    fn from_count(_count: usize) -> Self {
        Infinite
    }
}

impl<T: Index> Size for T {
    type Count = usize;

    #[inline]
    fn is_zero(self) -> bool {
        self == T::ZERO
    }

    #[inline]
    fn to_count(self) -> usize {
        self.to_usize()
    }

    #[inline]
    fn grow(self, by: usize) -> Self {
        self + T::from_usize(by)
    }

    #[inline]
    fn min_count(self, limit: usize) -> usize {
        self.to_usize().min(limit)
    }

    #[inline]
    fn from_count(count: usize) -> Self {
        T::from_usize(count)
    }
}
