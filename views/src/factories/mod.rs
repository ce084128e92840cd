//! Views that produce elements from nothing but a few stored values.

mod empty;
mod iota;
mod repeat;
mod single;

pub use empty::{Empty, EmptyCursor, empty};
pub use iota::{
    Advanceable, Decrementable, Incrementable, Iota, IotaBackward, IotaEnd, IotaForward, IotaFrom,
    iota, iota_from,
};
pub use repeat::{Repeat, RepeatBackward, RepeatEnd, RepeatForward, RepeatN, repeat, repeat_n};
pub use single::{Single, SingleBackward, SingleForward, single};
