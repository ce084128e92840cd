//! Primitive views and composition adaptors for the dual-iterator protocol in
//! `duality-core`.
//!
//! Every adaptor stores its input views by value. Pass a reference to borrow
//! instead; `&&X` is a view whenever `&X` is.
//!
//! ```
//! use duality_core::{SizedView, View};
//! use duality_views::{eager_take, iota, reverse};
//!
//! let first = eager_take(iota(0u32, 100), 4);
//! assert_eq!(first.size(), 4);
//!
//! let backwards = reverse(&first);
//! let got: Vec<u32> = backwards.traverse().collect();
//! assert_eq!(got, [3, 2, 1, 0]);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub mod adaptors;
pub mod factories;

pub use adaptors::{
    Concat, ConcatHead, EagerTake, Filter, Join, Reverse, Reversible, SplitBy, Take, TakeWhile,
    Transform, concat, eager_take, eager_take_while, filter, lazy_take, reverse, split_by, take,
    transform,
};
pub use factories::{
    Empty, Iota, IotaFrom, Repeat, RepeatN, Single, empty, iota, iota_from, repeat, repeat_n,
    single,
};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level.
    /// Call this at the start of tests where you want to see adaptor logging.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
