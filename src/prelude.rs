//! Everything a pipeline usually needs, in one import.
//!
//! ```
//! use duality::prelude::*;
//!
//! let v: Vec<u32> = iota(1u32, 4).reverse().to();
//! assert_eq!(v, [3, 2, 1]);
//! ```

pub use crate::ViewExt;
pub use crate::sink::{to, to_sized};
pub use duality_core::{
    EmptinessView, MultipassStepper, RandomAccessStepper, RandomAccessView, SentinelFor,
    SizedView, Stepper, View, cells,
};
pub use duality_views::{concat_all, empty, iota, iota_from, repeat, repeat_n, single};
