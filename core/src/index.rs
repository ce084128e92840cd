//! Integer types usable as bulk-skip counts.

use core::{
    fmt,
    hash::Hash,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// The integer type a random-access cursor counts positions in.
///
/// Both directions of a random-access view share one index type. Counts are
/// never negative, even for signed index types.
pub trait Index:
    Copy
    + Ord
    + Hash
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn from_usize(n: usize) -> Self;
    fn to_usize(self) -> usize;
}

macro_rules! impl_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl Index for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn from_usize(n: usize) -> Self {
                    debug_assert!(<$t>::try_from(n).is_ok(), "count {n} overflows {}", stringify!($t));
                    n as $t
                }

                #[inline]
                #[allow(unused_comparisons)]
                fn to_usize(self) -> usize {
                    debug_assert!(self >= 0 as $t, "negative count {self:?}");
                    self as usize
                }
            }
        )*
    };
}

impl_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
