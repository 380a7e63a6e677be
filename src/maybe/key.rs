//! Property keys for [`Maybe::prop`](super::Maybe::prop) and friends.
//!
//! A [`Key`] is either a property name or a positional index. Lookups are
//! duck-typed: an index on a keyed map is looked up by its decimal name, and
//! a name on a sequence is used as an index when it is the canonical decimal
//! form of a `usize`. This lets a single path such as `"items.0.name"` walk
//! objects and arrays alike.

use std::borrow::Cow;
use std::fmt;

/// A single navigation step: a property name or a sequence index.
///
/// # Examples
///
/// ```rust
/// use maybe_baby::Key;
///
/// assert_eq!(Key::from("name").as_name(), "name");
/// assert_eq!(Key::from(3_usize).as_name(), "3");
///
/// assert_eq!(Key::from("3").as_index(), Some(3));
/// assert_eq!(Key::from("03").as_index(), None);
/// assert_eq!(Key::from("name").as_index(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A property name.
    Name(String),
    /// A position in a sequence.
    Index(usize),
}

impl Key {
    /// Returns the key as a property name.
    ///
    /// Indices are rendered in decimal, so `Key::Index(1)` reads the property
    /// `"1"` of a keyed map.
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Self::Name(name) => Cow::Borrowed(name),
            Self::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// Returns the key as a sequence index, if it denotes one.
    ///
    /// Names qualify only in canonical decimal form: `"0"` and `"12"` do,
    /// `"012"`, `"+1"`, `"-1"` and `""` do not.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(name) => parse_canonical_index(name),
        }
    }
}

fn parse_canonical_index(name: &str) -> Option<usize> {
    let canonical = match name.as_bytes() {
        [b'0'] => true,
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
        [] => false,
    };
    if canonical { name.parse().ok() } else { None }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => formatter.write_str(name),
            Self::Index(index) => write!(formatter, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Conversion into an optional [`Key`].
///
/// `None` stands for a key that was never supplied; navigating with it
/// always yields Nothing.
///
/// # Examples
///
/// ```rust
/// use maybe_baby::{IntoKey, Key};
///
/// assert_eq!("a".into_key(), Some(Key::Name("a".to_string())));
/// assert_eq!(2_u8.into_key(), Some(Key::Index(2)));
/// assert_eq!((-1_i32).into_key(), Some(Key::Name("-1".to_string())));
/// assert_eq!(None::<&str>.into_key(), None);
/// ```
pub trait IntoKey {
    /// Converts `self` into a key, or `None` for an absent key.
    fn into_key(self) -> Option<Key>;
}

impl IntoKey for Key {
    #[inline]
    fn into_key(self) -> Option<Key> {
        Some(self)
    }
}

impl IntoKey for &Key {
    #[inline]
    fn into_key(self) -> Option<Key> {
        Some(self.clone())
    }
}

impl IntoKey for &str {
    #[inline]
    fn into_key(self) -> Option<Key> {
        Some(Key::from(self))
    }
}

impl IntoKey for String {
    #[inline]
    fn into_key(self) -> Option<Key> {
        Some(Key::from(self))
    }
}

impl IntoKey for &String {
    #[inline]
    fn into_key(self) -> Option<Key> {
        Some(Key::from(self))
    }
}

impl<K: IntoKey> IntoKey for Option<K> {
    #[inline]
    fn into_key(self) -> Option<Key> {
        self.and_then(IntoKey::into_key)
    }
}

macro_rules! impl_into_key_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl IntoKey for $type {
                #[inline]
                fn into_key(self) -> Option<Key> {
                    // Negative integers address map entries such as "-1", never sequence slots.
                    Some(usize::try_from(self).map_or_else(|_| Key::Name(self.to_string()), Key::Index))
                }
            }
        )*
    };
}

impl_into_key_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Builds an array of optional keys from mixed names and indices.
///
/// Each element goes through [`IntoKey`], so names, indices and `None`
/// (an absent key) can be combined in one list for
/// [`Maybe::props`](crate::Maybe::props).
///
/// # Examples
///
/// ```rust
/// use maybe_baby::{keys, Key};
///
/// let list = keys!["a", "b", 1];
/// assert_eq!(
///     list,
///     [
///         Some(Key::Name("a".to_string())),
///         Some(Key::Name("b".to_string())),
///         Some(Key::Index(1)),
///     ]
/// );
///
/// let with_gap = keys!["a", None::<&str>];
/// assert_eq!(with_gap[1], None);
/// ```
#[macro_export]
macro_rules! keys {
    ($($key:expr),* $(,)?) => {
        [$($crate::IntoKey::into_key($key)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Some(0))]
    #[case("7", Some(7))]
    #[case("42", Some(42))]
    #[case("007", None)]
    #[case("-1", None)]
    #[case("+1", None)]
    #[case("1.5", None)]
    #[case(" 1", None)]
    #[case("", None)]
    #[case("foo", None)]
    fn test_name_as_index(#[case] name: &str, #[case] expected: Option<usize>) {
        assert_eq!(Key::from(name).as_index(), expected);
    }

    #[rstest]
    fn test_index_overflowing_usize_is_not_an_index() {
        let name = format!("{}0", usize::MAX);
        assert_eq!(Key::from(name).as_index(), None);
    }

    #[rstest]
    #[case(Key::Index(0), "0")]
    #[case(Key::Index(12), "12")]
    #[case(Key::Name("layer1".to_string()), "layer1")]
    fn test_as_name(#[case] key: Key, #[case] expected: &str) {
        assert_eq!(key.as_name(), expected);
        assert_eq!(key.to_string(), expected);
    }

    #[rstest]
    fn test_signed_integers_become_indices_or_names() {
        assert_eq!(5_i64.into_key(), Some(Key::Index(5)));
        assert_eq!((-3_i64).into_key(), Some(Key::Name("-3".to_string())));
    }

    #[rstest]
    fn test_absent_keys() {
        assert_eq!(None::<usize>.into_key(), None);
        assert_eq!(Some("a").into_key(), Some(Key::from("a")));
        assert_eq!(Some(None::<&str>).into_key(), None);
    }

    #[rstest]
    fn test_keys_macro_preserves_order() {
        let list = keys![2, "x", String::from("y"), None::<usize>];
        assert_eq!(
            list,
            [
                Some(Key::Index(2)),
                Some(Key::from("x")),
                Some(Key::from("y")),
                None,
            ]
        );
    }

    #[rstest]
    fn test_keys_macro_empty() {
        let list: [Option<Key>; 0] = keys![];
        assert!(list.is_empty());
    }
}
