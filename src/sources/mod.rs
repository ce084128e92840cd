//! Views over data that does not come from this crate.
//!
//! Slices are views already (see `duality-core`). This module adds
//! [`IterView`] for anything that can hand out a cloneable [`Iterator`], and,
//! with the `std` feature, [`Tokens`] for whitespace-separated values read
//! from a [`BufRead`](std::io::BufRead).

mod iter;
#[cfg(feature = "std")]
mod reader;

pub use iter::{IterEnd, IterForward, IterMark, IterView, viewify_iter};
#[cfg(feature = "std")]
pub use reader::{ReadError, TokenCursor, Tokens, TokensEnd, tokens};
