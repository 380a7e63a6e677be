//! Maybe type - an optional value that is safe to walk.
//!
//! This module provides [`Maybe<T>`], a value that is either *Just* a present
//! value or *Nothing*. Beyond the usual `map`/`chain`, it navigates nested
//! data with [`prop`](Maybe::prop), [`props`](Maybe::props) and
//! [`path`](Maybe::path): every missing step collapses into Nothing instead
//! of failing.
//!
//! - [`Nullable`]: which values count as absence when they enter a `Maybe`;
//!   [`Present`] wraps types that have no impl
//! - [`Key`], [`IntoKey`], [`keys!`](crate::keys): navigation steps
//! - [`Property`]: keyed access per data shape
//! - [`Outcome`]: what a thunk passed to [`Maybe::of_fn`] may return
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "json")]
//! # {
//! use maybe_baby::{Maybe, keys};
//! use serde_json::json;
//!
//! let document = json!({ "a": { "b": { "c": [10, 20] } } });
//!
//! let by_prop = Maybe::of(&document).prop("a").prop("b").prop("c").prop(1);
//! let by_props = Maybe::of(&document).props(keys!["a", "b", "c", 1]);
//! let by_path = Maybe::of(&document).path("a.b.c.1");
//!
//! assert_eq!(by_prop.join(), Some(&json!(20)));
//! assert_eq!(by_props.join(), Some(&json!(20)));
//! assert_eq!(by_path.join(), Some(&json!(20)));
//!
//! let missing = Maybe::of(&document).path("a.x.y");
//! assert!(missing.is_nothing());
//! assert_eq!(missing.or_else(&json!("none")).join(), Some(&json!("none")));
//! # }
//! ```

mod key;
mod nullable;
mod outcome;
mod property;

pub use key::{IntoKey, Key};
pub use nullable::{Nullable, Present};
pub use outcome::Outcome;
pub use property::Property;

use std::fmt;

use crate::error::{CHAIN_NOT_CALLABLE, MaybeError, TRANSFORM_NOT_CALLABLE};

/// Separator between the segments of a [`Maybe::path`].
pub const PATH_DELIMITER: char = '.';

/// An immutable optional value.
///
/// A `Maybe<T>` is either *Just* a value of type `T` or *Nothing*. Every
/// operation consumes the receiver and returns a new `Maybe`; the wrapped
/// value itself is never modified.
///
/// Absence has one representation, `None`, which [`join`](Self::join)
/// returns as is. Every way of putting a value in ([`of`](Self::of),
/// [`of_fn`](Self::of_fn), [`map`](Self::map), [`prop`](Self::prop),
/// `From<Option<T>>` and the type class instances) turns null-like values
/// such as `serde_json::Value::Null` into Nothing, so a Just never holds a
/// null-like value.
///
/// # Examples
///
/// ```rust
/// use maybe_baby::Maybe;
///
/// let three = Maybe::of(1)
///     .chain(|n| Maybe::of(n + 1))
///     .map(|n| n + 1);
/// assert_eq!(three.join(), Some(3));
///
/// let nothing = Maybe::<i32>::nothing().chain(|n| Maybe::of(n + 1));
/// assert!(nothing.is_nothing());
/// assert_eq!(nothing.or_else(0).join(), Some(0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Maybe<T> {
    value: Option<T>,
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    #[inline]
    const fn present(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Returns the absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// assert!(Maybe::<String>::nothing().is_nothing());
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self { value: None }
    }

    /// Wraps a value, yielding Nothing when the value is null-like.
    ///
    /// The value is moved in as is; nothing is copied. `T` must implement
    /// [`Nullable`]; wrap types without an impl in [`Present`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// assert_eq!(Maybe::of(123).join(), Some(123));
    /// assert!(Maybe::of(0).is_just());
    /// assert!(Maybe::of("").is_just());
    /// assert!(Maybe::of(false).is_just());
    /// assert!(Maybe::of(None::<i32>).is_nothing());
    /// ```
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Nullable,
    {
        if value.is_null() {
            Self::nothing()
        } else {
            Self::present(value)
        }
    }

    /// Evaluates a risky computation, absorbing its failure into Nothing.
    ///
    /// The thunk may walk data directly with `?`, returning `Option` or
    /// `Result`. `None`, any `Err`, or a null-like success value all yield
    /// Nothing; the error is never propagated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "json")]
    /// # {
    /// use maybe_baby::Maybe;
    /// use serde_json::json;
    ///
    /// let foo = json!({ "bar": { "baz": [1, 2, 3] } });
    /// let first = Maybe::of_fn(|| foo.get("bar")?.get("baz")?.get(0));
    /// assert_eq!(first.join(), Some(&json!(1)));
    ///
    /// let empty = json!({});
    /// let missing = Maybe::of_fn(|| empty.get("bar")?.get("baz")?.get(0));
    /// assert!(missing.is_nothing());
    ///
    /// let parsed = Maybe::of_fn(|| "42".parse::<i32>());
    /// assert_eq!(parsed.join(), Some(42));
    /// # }
    /// ```
    #[inline]
    pub fn of_fn<F, R>(thunk: F) -> Self
    where
        F: FnOnce() -> R,
        R: Outcome<Value = T>,
    {
        thunk().into_maybe()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this holds no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// assert!(Maybe::of(None::<i32>).is_nothing());
    /// assert!(!Maybe::of(123).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.value.is_none()
    }

    /// Returns `true` if this holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// assert!(Maybe::of(123).is_just());
    /// assert!(!Maybe::<i32>::nothing().is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        !self.is_nothing()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Leaves the `Maybe` context, returning the wrapped value unchanged.
    ///
    /// Nothing comes out as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// assert_eq!(Maybe::of(123).join(), Some(123));
    /// assert_eq!(Maybe::<i32>::nothing().join(), None);
    /// ```
    #[inline]
    pub fn join(self) -> Option<T> {
        self.value
    }

    /// Returns a reference to the wrapped value, if any.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Borrows the wrapped value as a `Maybe<&T>`.
    ///
    /// Handy for navigating a document held in a `Maybe` without giving it up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// let names = Maybe::of(vec!["foo".to_string(), "bar".to_string()]);
    /// assert_eq!(names.as_ref().prop(1).join(), Some(&"bar".to_string()));
    /// assert!(names.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    /// Supplies a default for Nothing.
    ///
    /// A present value, however falsy, is kept. The default goes through
    /// [`of`](Self::of), so a null-like default leaves the result Nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// assert_eq!(Maybe::<&str>::nothing().or_else("N/A").join(), Some("N/A"));
    /// assert_eq!(Maybe::of("").or_else("N/A").join(), Some(""));
    /// ```
    #[inline]
    pub fn or_else(self, default: T) -> Self
    where
        T: Nullable,
    {
        if self.is_nothing() {
            Self::of(default)
        } else {
            self
        }
    }

    /// Supplies a lazily computed default for Nothing.
    ///
    /// `function` runs only when this is Nothing.
    #[inline]
    pub fn or_else_with<F>(self, function: F) -> Self
    where
        T: Nullable,
        F: FnOnce() -> T,
    {
        if self.is_nothing() {
            Self::of(function())
        } else {
            self
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `transform` to a present value.
    ///
    /// Nothing short-circuits: `transform` is not called. A present value is
    /// passed to `transform` and the result is wrapped with
    /// [`of`](Self::of), so a null-like result becomes Nothing. Returning a
    /// `Maybe` from `transform` nests it; see [`chain`](Self::chain) to
    /// flatten. A panic in `transform` propagates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// assert_eq!(Maybe::of(1).map(|n| n + 1).join(), Some(2));
    /// assert_eq!(Maybe::of("foo").map(|s| format!("{s}bar")).join(), Some("foobar".to_string()));
    ///
    /// let nothing = Maybe::<i32>::nothing().map(|_| -> i32 { unreachable!() });
    /// assert!(nothing.is_nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
        U: Nullable,
    {
        match self.value {
            Some(value) => Maybe::of(transform(value)),
            None => Maybe::nothing(),
        }
    }

    /// Applies a dynamically supplied transform.
    ///
    /// Behaves like [`map`](Self::map) when `transform` is present.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::InvalidArgument`] with the message
    /// `"transform must be a function"` when `transform` is `None`, whether or
    /// not this holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::{Maybe, MaybeError};
    ///
    /// let double: Option<fn(i32) -> i32> = Some(|n| n * 2);
    /// assert_eq!(Maybe::of(2).try_map(double).map(Maybe::join), Ok(Some(4)));
    ///
    /// let missing: Option<fn(i32) -> i32> = None;
    /// assert_eq!(
    ///     Maybe::of(2).try_map(missing).map(Maybe::join),
    ///     Err(MaybeError::InvalidArgument("transform must be a function"))
    /// );
    /// ```
    pub fn try_map<U, F>(self, transform: Option<F>) -> Result<Maybe<U>, MaybeError>
    where
        F: FnOnce(T) -> U,
        U: Nullable,
    {
        let transform = transform.ok_or(MaybeError::InvalidArgument(TRANSFORM_NOT_CALLABLE))?;
        Ok(self.map(transform))
    }

    /// Applies a `Maybe`-returning `transform` and flattens the result.
    ///
    /// This is `map` followed by `join`, one level deep. Nothing
    /// short-circuits without calling `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_baby::Maybe;
    ///
    /// fn add_one(value: i32) -> Maybe<i32> {
    ///     Maybe::of(value + 1)
    /// }
    ///
    /// assert_eq!(Maybe::of(1).chain(add_one).chain(add_one).join(), Some(3));
    /// ```
    #[inline]
    pub fn chain<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.value {
            Some(value) => transform(value),
            None => Maybe::nothing(),
        }
    }

    /// Applies a dynamically supplied `Maybe`-returning transform.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::InvalidArgument`] with the message
    /// `"chain must be a function"` when `transform` is `None`.
    pub fn try_chain<U, F>(self, transform: Option<F>) -> Result<Maybe<U>, MaybeError>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        let transform = transform.ok_or(MaybeError::InvalidArgument(CHAIN_NOT_CALLABLE))?;
        Ok(self.chain(transform))
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Looks up one property or index of the wrapped value.
    ///
    /// Yields Nothing when this is Nothing, when `key` is absent, when the
    /// value has no such property, or when the property is null-like.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "json")]
    /// # {
    /// use maybe_baby::Maybe;
    /// use serde_json::json;
    ///
    /// let person = json!({ "firstName": "John", "lastName": null, "tags": ["a", "b"] });
    /// let person = Maybe::of(&person);
    ///
    /// assert_eq!(person.prop("firstName").join(), Some(&json!("John")));
    /// assert!(person.prop("lastName").is_nothing());
    /// assert!(person.prop("address").is_nothing());
    /// assert_eq!(person.prop("tags").prop(1).join(), Some(&json!("b")));
    /// assert!(person.prop(None::<&str>).is_nothing());
    /// # }
    /// ```
    pub fn prop<K>(self, key: K) -> Maybe<T::Output>
    where
        K: IntoKey,
        T: Property,
        T::Output: Nullable,
    {
        let Some(key) = key.into_key() else {
            return Maybe::nothing();
        };
        self.chain(|value| Outcome::into_maybe(value.property(&key)))
    }

    /// Looks up a sequence of properties, left to right.
    ///
    /// Each key is applied with [`prop`](Self::prop). Once a step yields
    /// Nothing, every later step stays Nothing. An empty key list yields
    /// Nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "json")]
    /// # {
    /// use maybe_baby::{Key, Maybe, keys};
    /// use serde_json::json;
    ///
    /// let document = json!({ "layer1": { "layer2": ["foo", "bar"] } });
    /// let document = Maybe::of(&document);
    ///
    /// assert_eq!(document.props(keys!["layer1", "layer2", 0]).join(), Some(&json!("foo")));
    /// assert_eq!(document.props(["layer1", "layer2", "1"]).join(), Some(&json!("bar")));
    /// assert!(document.props(keys!["layer1", None::<&str>]).is_nothing());
    /// assert!(document.props(Vec::<Key>::new()).is_nothing());
    /// # }
    /// ```
    pub fn props<I>(self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoKey,
        T: Property<Output = T> + Nullable,
    {
        let mut keys = keys.into_iter().peekable();
        if keys.peek().is_none() {
            return Self::nothing();
        }
        keys.fold(self, Self::prop)
    }

    /// Looks up a dot-separated path such as `"a.b.0"`.
    ///
    /// Each segment is used verbatim as a property name; numeric segments
    /// index sequences. An absent or empty path yields Nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "json")]
    /// # {
    /// use maybe_baby::Maybe;
    /// use serde_json::json;
    ///
    /// let document = json!({ "a": 1, "list": ["foo", "bar"] });
    /// let document = Maybe::of(&document);
    ///
    /// assert_eq!(document.path("list.1").join(), Some(&json!("bar")));
    /// assert!(document.path("a.b.c").is_nothing());
    /// assert!(document.path("").is_nothing());
    /// assert!(document.path(None).is_nothing());
    /// # }
    /// ```
    pub fn path<'p, P>(self, path: P) -> Self
    where
        P: Into<Option<&'p str>>,
        T: Property<Output = T> + Nullable,
    {
        match path.into() {
            Some(path) if !path.is_empty() => {
                tracing::trace!(path, "navigating path");
                self.props(path.split(PATH_DELIMITER))
            }
            _ => {
                tracing::trace!("empty or absent path yields nothing");
                Self::nothing()
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::nothing()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Just").field(value).finish(),
            None => formatter.write_str("Nothing"),
        }
    }
}

impl<T: Nullable> From<Option<T>> for Maybe<T> {
    /// Converts an `Option`; `Some` of a null-like value becomes Nothing.
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::nothing, Self::of)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
mod instances {
    use super::{Maybe, Nullable};
    use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

    impl<A> TypeConstructor for Maybe<A> {
        type Inner = A;
        type WithType<B> = Maybe<B>;
    }

    impl<A> Functor for Maybe<A> {
        #[inline]
        fn fmap<B: Nullable, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(A) -> B,
        {
            self.map(function)
        }

        #[inline]
        fn fmap_ref<B: Nullable, F>(&self, function: F) -> Maybe<B>
        where
            F: FnOnce(&A) -> B,
        {
            self.as_ref().map(function)
        }
    }

    impl<A> Applicative for Maybe<A> {
        #[inline]
        fn pure<B: Nullable>(value: B) -> Maybe<B> {
            Maybe::of(value)
        }

        #[inline]
        fn map2<B, C: Nullable, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
        where
            F: FnOnce(A, B) -> C,
        {
            self.chain(|a| other.map(|b| function(a, b)))
        }

        #[inline]
        fn map3<B, C, D: Nullable, F>(
            self,
            second: Maybe<B>,
            third: Maybe<C>,
            function: F,
        ) -> Maybe<D>
        where
            F: FnOnce(A, B, C) -> D,
        {
            match (self.value, second.value, third.value) {
                (Some(a), Some(b), Some(c)) => Maybe::of(function(a, b, c)),
                _ => Maybe::nothing(),
            }
        }
    }

    impl<A> Monad for Maybe<A> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Maybe<B>
        where
            F: FnOnce(A) -> Maybe<B>,
        {
            self.chain(function)
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de> + Nullable> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_from_option_normalizes_null_like_values() {
        assert!(Maybe::from(Some(None::<i32>)).is_nothing());
        assert_eq!(Maybe::from(Some(Some(1))).join(), Some(Some(1)));
    }

    #[cfg(feature = "json")]
    #[rstest]
    fn test_from_option_json_null_is_nothing() {
        let null = Maybe::from(Some(serde_json::Value::Null));
        assert!(null.is_nothing());
        assert_eq!(null.or_else(serde_json::json!("none")).join(), Some(serde_json::json!("none")));
    }

    #[rstest]
    fn test_map_does_not_call_transform_on_nothing() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::nothing().map(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert!(result.is_nothing());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_null_like_result_is_nothing() {
        assert!(Maybe::of(1).map(|_| None::<i32>).is_nothing());
    }

    #[rstest]
    fn test_map_to_nested_nothing_is_just() {
        let nested = Maybe::of(1).map(|_| Maybe::<i32>::nothing());
        assert!(nested.is_just());
        assert_eq!(nested.join().map(|inner| inner.is_nothing()), Some(true));
    }

    #[rstest]
    fn test_map_does_not_flatten() {
        let nested = Maybe::of(1).map(|n| Maybe::of(n + 1));
        assert_eq!(nested.join().and_then(Maybe::join), Some(2));
    }

    #[rstest]
    fn test_chain_does_not_call_transform_on_nothing() {
        let calls = Cell::new(0);
        let result: Maybe<i32> = Maybe::<i32>::nothing().chain(|n| {
            calls.set(calls.get() + 1);
            Maybe::of(n)
        });
        assert!(result.is_nothing());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_try_map_checks_argument_before_nothing() {
        let transform: Option<fn(i32) -> i32> = None;
        assert_eq!(
            Maybe::<i32>::nothing().try_map(transform),
            Err(MaybeError::InvalidArgument(TRANSFORM_NOT_CALLABLE))
        );
    }

    #[rstest]
    fn test_try_chain_reports_chain_message() {
        let transform: Option<fn(i32) -> Maybe<i32>> = None;
        assert_eq!(
            Maybe::of(1).try_chain(transform),
            Err(MaybeError::InvalidArgument(CHAIN_NOT_CALLABLE))
        );
    }

    #[rstest]
    fn test_or_else_with_is_lazy_for_present_values() {
        let calls = Cell::new(0);
        let result = Maybe::of(5).or_else_with(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(result.join(), Some(5));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_or_else_with_null_like_default_stays_nothing() {
        let result = Maybe::<Option<i32>>::nothing().or_else_with(|| None);
        assert!(result.is_nothing());
    }

    #[rstest]
    fn test_prop_on_vec() {
        let items = Maybe::of(vec![10, 20]);
        assert_eq!(items.clone().prop(1).join(), Some(20));
        assert!(items.clone().prop(2).is_nothing());
        assert!(items.prop("x").is_nothing());
    }

    #[rstest]
    fn test_as_ref_prop_leaves_original_intact() {
        let nested = Maybe::of(vec![vec![1, 2], vec![3]]);
        assert_eq!(nested.as_ref().prop(0).prop(1).join(), Some(&2));
        assert!(nested.as_ref().prop(1).prop(1).is_nothing());
        assert_eq!(nested.join().map(|outer| outer.len()), Some(2));
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Maybe::of(1)), "Just(1)");
        assert_eq!(format!("{:?}", Maybe::<i32>::nothing()), "Nothing");
    }

    #[rstest]
    fn test_default_is_nothing() {
        assert!(Maybe::<String>::default().is_nothing());
    }

    #[rstest]
    fn test_option_conversions() {
        let maybe: Maybe<i32> = Some(1).into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(1));
        assert!(Maybe::<i32>::from(None).is_nothing());
    }

    #[rstest]
    fn test_into_iterator() {
        assert_eq!(Maybe::of(3).into_iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(Maybe::<i32>::nothing().into_iter().count(), 0);
    }
}
