//! Views built out of other views.
//!
//! Each adaptor re-exposes the dual-iterator protocol and keeps every
//! capability its inputs allow: a reversed random-access view is still random
//! access, a transformed sized view is still sized, and so on. Capabilities
//! that cannot survive the adaptor (random access through `filter`, size
//! through `split_by`) are dropped at the type level.

mod concat;
mod eager_take;
mod filter;
mod reverse;
mod split_by;
mod take;
mod take_while;
mod transform;

pub use concat::{Concat, ConcatBackward, ConcatForward, ConcatHead, Join, Part, concat};
pub use eager_take::{EagerTake, eager_take};
pub use filter::{Filter, Filtered, filter};
pub use reverse::{Reverse, Reversible, reverse};
pub use split_by::{SplitBackward, SplitBy, SplitForward, split_by};
pub use take::{Take, TakeBackward, TakeEnd, TakeForward, lazy_take, take};
pub use take_while::{TakeWhile, eager_take_while};
pub use transform::{Mapped, Transform, transform};
