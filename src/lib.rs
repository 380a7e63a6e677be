//! # maybe-baby
//!
//! A `Maybe` container for walking optional, nested properties of
//! arbitrarily shaped data without failing on missing intermediate values.
//!
//! ## Overview
//!
//! - **[`Maybe`]**: an immutable optional value with `map`, `chain` and
//!   `or_else`
//! - **Navigation**: [`Maybe::prop`], [`Maybe::props`] and [`Maybe::path`]
//!   walk objects and arrays, yielding Nothing on the first missing step
//! - **Thunks**: [`Maybe::of_fn`] evaluates a risky access chain and absorbs
//!   its failure into Nothing
//! - **Type Classes**: `Functor`, `Applicative` and `Monad` for `Maybe` and
//!   the standard optional types
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `json`: Navigation over `serde_json::Value`
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "json")]
//! # {
//! use maybe_baby::prelude::*;
//! use serde_json::json;
//!
//! let person = json!({ "firstName": "John", "lastName": null });
//!
//! let first_name = Maybe::of(&person).prop("firstName");
//! assert!(first_name.is_just());
//! assert_eq!(first_name.join(), Some(&json!("John")));
//!
//! assert!(Maybe::of(&person).prop("lastName").is_nothing());
//! assert!(Maybe::of(&person).path("address.city").is_nothing());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybe_baby::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::MaybeError;
    pub use crate::keys;
    pub use crate::maybe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use error::MaybeError;
pub use maybe::{IntoKey, Key, Maybe, Nullable, Outcome, Present, Property};
