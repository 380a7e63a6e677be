//! Applicative - lifting values and combining independent containers.
//!
//! [`pure`](Applicative::pure) puts a plain value into the container and
//! [`map2`](Applicative::map2) combines two containers that do not depend on
//! each other. For `Maybe` the combination is Just only when every input is
//! Just and the combined value is not null-like.
//!
//! # Examples
//!
//! ```rust
//! use maybe_baby::Maybe;
//! use maybe_baby::typeclass::Applicative;
//!
//! let first = Maybe::of("John");
//! let last = Maybe::of("Smith");
//! let full = first.map2(last, |first, last| format!("{first} {last}"));
//! assert_eq!(full.join(), Some("John Smith".to_string()));
//!
//! let missing = Maybe::of("John").map2(Maybe::<&str>::nothing(), |a, b| (a, b));
//! assert!(missing.is_nothing());
//! ```

use super::functor::Functor;
use crate::Nullable;

/// Containers that can lift plain values and merge independent contents.
pub trait Applicative: Functor {
    /// Lifts `value` into the container.
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    /// use maybe_baby::typeclass::Applicative;
    ///
    /// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(lifted.join(), Some(42));
    /// assert!(<Maybe<()>>::pure(None::<i32>).is_nothing());
    /// ```
    fn pure<B: Nullable>(value: B) -> Self::WithType<B>;

    /// Merges two contents with `function`.
    fn map2<B, C: Nullable, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Merges three contents with `function`.
    fn map3<B, C, D: Nullable, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two contents.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the first content once the second is known to be present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: Nullable,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the second content once the first is known to be present.
    #[inline]
    fn product_right<B: Nullable>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}
