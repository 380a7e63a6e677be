//! Results a thunk may hand to [`Maybe::of_fn`](super::Maybe::of_fn).
//!
//! A thunk signals failure the way Rust code does: by returning `None` or an
//! `Err`. [`Outcome`] turns either shape into a `Maybe`, absorbing the
//! failure instead of propagating it.

use std::fmt;

use super::nullable::Nullable;
use super::Maybe;

/// The return value of a risky computation, convertible into a `Maybe`.
///
/// # Examples
///
/// ```rust
/// use maybe_baby::Outcome;
///
/// assert!(Some(1).into_maybe().is_just());
/// assert!(None::<i32>.into_maybe().is_nothing());
///
/// let failed: Result<i32, String> = Err("boom".to_string());
/// assert!(failed.into_maybe().is_nothing());
/// ```
pub trait Outcome {
    /// The value carried on success.
    type Value;

    /// Converts the outcome into a `Maybe`, turning failure into Nothing.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T: Nullable> Outcome for Option<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        self.map_or_else(Maybe::nothing, Maybe::of)
    }
}

impl<T: Nullable, E: fmt::Display> Outcome for Result<T, E> {
    type Value = T;

    fn into_maybe(self) -> Maybe<T> {
        match self {
            Ok(value) => Maybe::of(value),
            Err(error) => {
                tracing::trace!(%error, "absorbed failed computation as nothing");
                Maybe::nothing()
            }
        }
    }
}

impl<T> Outcome for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}
