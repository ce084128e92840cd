//! Duality - views you can walk from either end
//!
//! # Overview
//!
//! A view hands out two cursors over one sequence, one at each end. Either
//! cursor can step toward the other, and a step reports when the two have
//! met, so a traversal can consume from the front, from the back, or from both
//! ends at once without ever overlapping.
//!
//! Which of those moves a view supports is tracked in its types: a filtered
//! view can no longer jump ahead, a lazily truncated view has no backward
//! cursor, and so on. Adaptors keep every capability their inputs allow.
//!
//! # Quick Start
//!
//! ```
//! use duality::prelude::*;
//!
//! let data = [1, 2, 3, 5, 6, 8, 9, 10];
//! let data: &[i32] = &data;
//!
//! // Runs between even numbers, each of them a view of its own.
//! let runs: Vec<Vec<i32>> = data
//!     .split_by(|x: &&i32| **x % 2 == 0)
//!     .to::<Vec<_>>()
//!     .into_iter()
//!     .map(|run| run.to::<Vec<_>>().into_iter().copied().collect())
//!     .collect();
//! assert_eq!(runs, [vec![1], vec![3, 5], vec![], vec![9], vec![]]);
//!
//! // The first four odd squares, last one first.
//! let squares = iota_from(1u64)
//!     .filter(|x: &u64| x % 2 == 1)
//!     .transform(|x: u64| x * x)
//!     .eager_take(4);
//! assert_eq!(squares.traverse().rev().collect::<Vec<_>>(), [49, 25, 9, 1]);
//! ```
//!
//! # Crates
//!
//! - `duality-core`: the cursor protocol and the capability traits.
//! - `duality-views`: primitive views and adaptors.
//!
//! This crate re-exports both and adds sources, sinks, in-place actions and
//! the [`ViewExt`] chaining methods.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub mod actions;
mod ext;
pub mod prelude;
pub mod sink;
pub mod sources;

pub use ext::ViewExt;
pub use sink::{to, to_sized};
pub use sources::{IterEnd, IterForward, IterMark, IterView, viewify_iter};
#[cfg(feature = "std")]
pub use sources::{ReadError, TokenCursor, Tokens, TokensEnd, tokens};

// Re-export the protocol and the views
pub use duality_core::*;
pub use duality_views::*;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
