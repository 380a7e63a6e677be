//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//!
//! `Maybe` implements all three. Every instance goes through the same
//! null normalization as [`Maybe::of`](crate::Maybe::of), which is why the
//! lifted and mapped types carry a [`Nullable`](crate::Nullable) bound.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them.
//!
//! # Examples
//!
//! ```rust
//! use maybe_baby::Maybe;
//! use maybe_baby::typeclass::{Functor, Monad};
//!
//! fn increment_all<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     value.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment_all(Maybe::of(1)).join(), Some(2));
//!
//! let halved = Maybe::of(10).flat_map(|n| Maybe::of_fn(|| (n % 2 == 0).then_some(n / 2)));
//! assert_eq!(halved.join(), Some(5));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
