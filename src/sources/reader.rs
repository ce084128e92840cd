use std::{
    cell::{Cell, RefCell},
    fmt, io,
    io::BufRead,
    marker::PhantomData,
    str::FromStr,
};

use duality_core::{Finite, SentinelFor, Stepper, View};
use thiserror::Error;

/// Why a token could not be produced.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("failed to read input")]
    Io(#[from] io::Error),

    #[error("cannot parse {token:?}: {message}")]
    Parse { token: String, message: String },

    #[error("unexpected end of input")]
    UnexpectedEof,
}

/// A single-pass view of the whitespace-separated values in a reader.
///
/// Every item is a `Result`: a token that does not parse is reported and
/// skipped, and reading goes on. An I/O error is reported once and ends the
/// input for good. Cursors share the reader, so two traversals split the
/// tokens between them rather than each seeing all of them.
///
/// ```
/// use duality::{View, tokens};
///
/// let input = "3 1 oops 4".as_bytes();
/// let view = tokens::<u32, _>(input);
/// let parsed: Vec<u32> = view.traverse().filter_map(Result::ok).collect();
/// assert_eq!(parsed, [3, 1, 4]);
/// ```
pub struct Tokens<R, T> {
    reader: RefCell<R>,
    failed: Cell<bool>,
    _marker: PhantomData<fn() -> T>,
}

/// Reads values of type `T` from `reader`.
pub fn tokens<T, R>(reader: R) -> Tokens<R, T>
where
    T: FromStr,
    R: BufRead,
{
    Tokens {
        reader: RefCell::new(reader),
        failed: Cell::new(false),
        _marker: PhantomData,
    }
}

impl<R, T> Tokens<R, T> {
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: fmt::Debug, T> fmt::Debug for Tokens<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokens")
            .field("reader", &self.reader)
            .field("failed", &self.failed.get())
            .finish()
    }
}

/// Forward cursor of [`Tokens`]. Not cloneable: reading consumes input.
pub struct TokenCursor<'a, R, T> {
    source: &'a Tokens<R, T>,
}

impl<R, T> fmt::Debug for TokenCursor<'_, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCursor")
            .field("failed", &self.source.failed.get())
            .finish_non_exhaustive()
    }
}

impl<'a, R, T> TokenCursor<'a, R, T>
where
    R: BufRead,
    T: FromStr,
    T::Err: fmt::Display,
{
    fn read(&mut self) -> Option<Result<T, ReadError>> {
        if self.source.failed.get() {
            return None;
        }
        let read = read_token(&mut *self.source.reader.borrow_mut());
        let bytes = match read {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "token input failed");
                self.source.failed.set(true);
                return Some(Err(ReadError::Io(err)));
            }
        };
        let token = match String::from_utf8(bytes) {
            Ok(token) => token,
            Err(err) => {
                let message = err.utf8_error().to_string();
                let token = String::from_utf8_lossy(err.as_bytes()).into_owned();
                tracing::debug!(%token, %message, "token is not UTF-8");
                return Some(Err(ReadError::Parse { token, message }));
            }
        };
        match token.parse::<T>() {
            Ok(value) => Some(Ok(value)),
            Err(err) => {
                let message = err.to_string();
                tracing::debug!(%token, %message, "token does not parse");
                Some(Err(ReadError::Parse { token, message }))
            }
        }
    }
}

impl<'a, R, T> Stepper for TokenCursor<'a, R, T>
where
    R: BufRead,
    T: FromStr,
    T::Err: fmt::Display,
{
    type Item = Result<T, ReadError>;

    /// Reads the next token. Running out of input is reported as
    /// [`ReadError::UnexpectedEof`].
    fn next(&mut self) -> Result<T, ReadError> {
        self.read().unwrap_or(Err(ReadError::UnexpectedEof))
    }
}

/// The end of a [`Tokens`] view: end of input, or the first I/O error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokensEnd;

impl<'a, R, T> SentinelFor<TokenCursor<'a, R, T>> for TokensEnd
where
    R: BufRead,
    T: FromStr,
    T::Err: fmt::Display,
{
    #[inline]
    fn next_from(&self, it: &mut TokenCursor<'a, R, T>) -> Option<Result<T, ReadError>> {
        it.read()
    }
}

impl<'a, R, T> View for &'a Tokens<R, T> {
    type Forward = TokenCursor<'a, R, T>;
    type Backward = TokensEnd;
    type Extent = Finite;

    #[inline]
    fn forward_iter(self) -> TokenCursor<'a, R, T> {
        TokenCursor { source: self }
    }

    #[inline]
    fn backward_iter(self) -> TokensEnd {
        TokensEnd
    }
}

/// Reads the next run of non-whitespace bytes, or `None` at end of input.
fn read_token<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut complete = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if complete {
            break;
        }
    }
    Ok((!token.is_empty()).then_some(token))
}
