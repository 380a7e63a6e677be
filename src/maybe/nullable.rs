//! Absence detection for values entering a `Maybe`.
//!
//! Some types carry their own notion of "no value": `serde_json::Value::Null`
//! or a nested `Option::None`. [`Nullable`] lets [`Maybe::of`](super::Maybe::of)
//! collapse those into Nothing, so that null-like and missing-like inputs are
//! indistinguishable once wrapped.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::Maybe;

/// A type whose values may represent absence.
///
/// The check is strict identity with the type's null marker, never
/// falsiness: `0`, `""`, `false` and empty collections are present values.
///
/// Types with no null marker implement the trait with an empty body:
///
/// ```rust
/// use maybe_baby::{Maybe, Nullable};
///
/// #[derive(Debug, PartialEq)]
/// struct Person {
///     name: String,
/// }
///
/// impl Nullable for Person {}
///
/// let person = Maybe::of(Person { name: "John".to_string() });
/// assert!(person.is_just());
/// ```
///
/// Types from other crates that lack an impl can be wrapped in [`Present`].
pub trait Nullable {
    /// Returns `true` if this value stands for "no value".
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

macro_rules! impl_never_null {
    ($($type:ty),* $(,)?) => {
        $(impl Nullable for $type {})*
    };
}

impl_never_null!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

macro_rules! impl_never_null_tuple {
    ($(($($element:ident),+)),* $(,)?) => {
        $(impl<$($element),+> Nullable for ($($element,)+) {})*
    };
}

impl_never_null_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
);

impl<T> Nullable for Vec<T> {}
impl<T> Nullable for VecDeque<T> {}
impl<T> Nullable for [T] {}
impl<T, const N: usize> Nullable for [T; N] {}
impl<K, V, S> Nullable for HashMap<K, V, S> {}
impl<K, V> Nullable for BTreeMap<K, V> {}
impl<T, S> Nullable for HashSet<T, S> {}
impl<T> Nullable for BTreeSet<T> {}

// A nested Maybe is a value in its own right, even when it is Nothing.
impl<T> Nullable for Maybe<T> {}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Rc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Arc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ToOwned + ?Sized> Nullable for Cow<'_, T> {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// Marks any value as present.
///
/// Wrap values whose type has no [`Nullable`] impl, typically types from
/// other crates, to pass them through [`Maybe::of`] and
/// [`Maybe::map`](super::Maybe::map).
///
/// # Examples
///
/// ```rust
/// use maybe_baby::{Maybe, Present};
/// use std::time::Duration;
///
/// let timeout = Maybe::of(Present(Duration::from_secs(5)));
/// let seconds = timeout.map(|Present(duration)| duration.as_secs());
/// assert_eq!(seconds.join(), Some(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Present<T>(pub T);

impl<T> Present<T> {
    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Nullable for Present<T> {}

#[cfg(feature = "json")]
impl Nullable for serde_json::Value {
    #[inline]
    fn is_null(&self) -> bool {
        serde_json::Value::is_null(self)
    }
}
