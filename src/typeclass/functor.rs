//! Functor - transforming the contents of a container.
//!
//! For `Maybe`, [`fmap`](Functor::fmap) is [`Maybe::map`](crate::Maybe::map)
//! seen through a trait: Nothing stays Nothing and a null-like result
//! collapses to Nothing, so no instance can build a Just holding a null.
//!
//! # Laws
//!
//! For transforms whose results are never null-like:
//!
//! ```text
//! m.fmap(|x| x) == m                              // identity
//! m.fmap(f).fmap(g) == m.fmap(|x| g(f(x)))        // composition
//! ```
//!
//! A transform that yields a null-like value ends the pipeline early, which
//! is the point of `Maybe`; composition then holds only up to that cut.
//!
//! # Examples
//!
//! ```rust
//! use maybe_baby::Maybe;
//! use maybe_baby::typeclass::Functor;
//!
//! let length = Maybe::of("hello".to_string()).fmap(|s| s.len());
//! assert_eq!(length.join(), Some(5));
//!
//! let collapsed = Maybe::of(1).fmap(|_| None::<i32>);
//! assert!(collapsed.is_nothing());
//! ```

use super::higher::TypeConstructor;
use crate::Nullable;

/// Containers whose contents can be transformed in place.
pub trait Functor: TypeConstructor {
    /// Transforms the contained value, if any.
    fn fmap<B: Nullable, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Transforms a borrowed view of the contained value, keeping `self`.
    fn fmap_ref<B: Nullable, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Swaps the contained value for `value`.
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    /// use maybe_baby::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::of(5).replace("replaced").join(), Some("replaced"));
    /// assert!(Maybe::<i32>::nothing().replace("replaced").is_nothing());
    /// ```
    #[inline]
    fn replace<B: Nullable>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Forgets the contained value, keeping only presence.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
