//! Error types for `Maybe` operations.
//!
//! Almost every operation on [`Maybe`](crate::Maybe) is total: missing keys,
//! malformed paths and failed thunks all degrade to Nothing. The only
//! caller-visible failure is a transform that was never supplied to
//! [`try_map`](crate::Maybe::try_map) or [`try_chain`](crate::Maybe::try_chain).

use thiserror::Error;

/// Message carried by [`MaybeError::InvalidArgument`] from `try_map`.
pub const TRANSFORM_NOT_CALLABLE: &str = "transform must be a function";

/// Message carried by [`MaybeError::InvalidArgument`] from `try_chain`.
pub const CHAIN_NOT_CALLABLE: &str = "chain must be a function";

/// Represents errors that can occur when driving a `Maybe` with
/// dynamically supplied transforms.
///
/// # Examples
///
/// ```rust
/// use maybe_baby::{Maybe, MaybeError};
///
/// let transform: Option<fn(i32) -> i32> = None;
/// let error = Maybe::of(1).try_map(transform).unwrap_err();
///
/// assert_eq!(error, MaybeError::InvalidArgument("transform must be a function"));
/// assert_eq!(error.to_string(), "transform must be a function");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaybeError {
    /// The supplied transform is not callable.
    #[error("{0}")]
    InvalidArgument(&'static str),
}
