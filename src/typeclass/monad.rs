//! Monad - sequencing steps that depend on earlier results.
//!
//! [`flat_map`](Monad::flat_map) is [`Maybe::chain`](crate::Maybe::chain):
//! each step sees the previous value and returns a new `Maybe`. A Nothing
//! at any step skips the rest.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                        // left identity
//! m.flat_map(Maybe::of) == m                                         // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))      // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_baby::Maybe;
//! use maybe_baby::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::of_fn(|| text.parse::<i32>().ok().filter(|&n| n > 0))
//! }
//!
//! assert_eq!(Maybe::of("42").flat_map(parse_positive).join(), Some(42));
//! assert!(Maybe::of("-1").flat_map(parse_positive).is_nothing());
//! ```

use super::applicative::Applicative;

/// Containers that can sequence dependent steps.
pub trait Monad: Applicative {
    /// Feeds the contents to `function` and returns its container.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Same as [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Continues with `next` when `self` is present, ignoring its contents.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
