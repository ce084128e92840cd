//! Dual iteration: views that can be walked from the front, from the back, or
//! from both ends at once until the two cursors meet.
//!
//! This crate holds the protocol and the capability lattice. Concrete views
//! and adaptors live in `duality-views`.
//!
//! # Example
//!
//! ```
//! use duality_core::{SizedView, Stepper, View};
//!
//! let data = [1, 2, 3, 4, 5];
//! let view: &[i32] = &data;
//!
//! let mut front = view.forward_iter();
//! let mut back = view.backward_iter();
//! assert_eq!(front.next_until(&back), Some(&1));
//! assert_eq!(back.next_until(&front), Some(&5));
//! assert_eq!(view.size(), 5);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod contiguous;
mod index;
mod infinite;
mod range;
mod stepper;
mod traversal;
mod view;

pub use contiguous::{SliceBackward, SliceForward, cells};
pub use index::Index;
pub use infinite::{Extent, Finite, Infinite, Size};
pub use range::Range;
pub use stepper::{
    CountedSentinel, MultipassStepper, RandomAccess, RandomAccessStepper, ReversibleStepper,
    SentinelFor, Stepper, advance_by_walking,
};
pub use traversal::Traversal;
pub use view::{
    BackwardOf, BackwardView, BidirectionalView, EmptinessView, ForwardOf, ForwardView,
    InfiniteView, ItemOf, MultipassBackwardView, MultipassBidirectionalView, MultipassForwardView,
    RandomAccessView, SizedView, View,
};
