//! Higher-kinded type emulation.
//!
//! A trait cannot name `Maybe<_>` on its own, only `Maybe<T>` for some `T`.
//! [`TypeConstructor`] closes that gap with a generic associated type:
//! `Inner` is the current argument and `WithType<B>` re-applies the same
//! constructor to `B`. That is all `Functor` and `Monad` need to describe
//! "the same container, different contents".

/// A type constructor applied to one argument.
///
/// `<M as TypeConstructor>::WithType<M::Inner>` is `M` again.
///
/// # Example
///
/// ```rust
/// use maybe_baby::Maybe;
/// use maybe_baby::typeclass::TypeConstructor;
///
/// fn cleared<M: TypeConstructor>(_value: M) -> M::WithType<String>
/// where
///     M::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let cleared: Maybe<String> = cleared(Maybe::of(42));
/// assert!(cleared.is_nothing());
/// ```
pub trait TypeConstructor {
    /// The argument the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
