//! Materializing views into containers.
//!
//! Any container that implements [`FromIterator`] can be a target. For a
//! sized view, [`to_sized`] passes the exact length through `size_hint`, so
//! `Vec`, `String`, `SmallVec` and friends reserve once up front.

use duality_core::{Finite, ItemOf, SentinelFor, Size, SizedView, Stepper, Traversal, View};

/// Collects `view` front to back into a new `C`.
///
/// ```
/// use duality::{iota, to};
///
/// let digits: String = to(&duality::transform(iota(0u8, 5), |d: u8| char::from(b'0' + d)));
/// assert_eq!(digits, "01234");
/// ```
pub fn to<C, V>(view: V) -> C
where
    V: View,
    V::Forward: Stepper,
    V::Backward: SentinelFor<V::Forward>,
    C: FromIterator<ItemOf<V>>,
{
    view.traverse().collect()
}

/// Like [`to`], for views whose size is known up front.
pub fn to_sized<C, V>(view: V) -> C
where
    V: SizedView + View<Extent = Finite>,
    V::Forward: Stepper,
    V::Backward: SentinelFor<V::Forward>,
    C: FromIterator<ItemOf<V>>,
{
    let len = view.size().min_count(usize::MAX);
    Traversal::with_len(view.forward_iter(), view.backward_iter(), len).collect()
}
