//! Keyed access into arbitrarily shaped data.
//!
//! [`Property`] is the seam between [`Maybe`](super::Maybe) and the data it
//! walks. Each implementation answers one question: given a [`Key`], what is
//! the value one level down, if any? A lookup that does not apply to a shape
//! (an index on a scalar, a name on a sequence) answers `None` instead of
//! failing.
//!
//! Owned implementations move the child out of the parent. Borrowed
//! implementations (`&Value`, `&[T]`, `&HashMap`) hand out references, so a
//! `Maybe<&Value>` walks a document without copying it.
//!
//! # Examples
//!
//! ```rust
//! use maybe_baby::{Key, Property};
//!
//! let table = vec![vec![1, 2], vec![3, 4]];
//!
//! let row = table.as_slice().property(&Key::Index(1));
//! assert_eq!(row, Some(&vec![3, 4]));
//!
//! let cell = row.and_then(|row| row.property(&Key::from("0")));
//! assert_eq!(cell, Some(&3));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use super::key::Key;

/// A value that supports duck-typed keyed access.
///
/// # Laws
///
/// Lookups are pure: the same value and key always produce the same result,
/// and a lookup never panics, whatever the key.
pub trait Property: Sized {
    /// The type found one level down.
    type Output;

    /// Returns the child addressed by `key`, or `None` if there is none.
    fn property(self, key: &Key) -> Option<Self::Output>;
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> Property for Vec<T> {
    type Output = T;

    #[inline]
    fn property(self, key: &Key) -> Option<T> {
        key.as_index().and_then(|index| self.into_iter().nth(index))
    }
}

impl<'a, T> Property for &'a Vec<T> {
    type Output = &'a T;

    #[inline]
    fn property(self, key: &Key) -> Option<&'a T> {
        self.as_slice().property(key)
    }
}

impl<'a, T> Property for &'a [T] {
    type Output = &'a T;

    #[inline]
    fn property(self, key: &Key) -> Option<&'a T> {
        key.as_index().and_then(|index| self.get(index))
    }
}

impl<T, const N: usize> Property for [T; N] {
    type Output = T;

    #[inline]
    fn property(self, key: &Key) -> Option<T> {
        key.as_index().and_then(|index| self.into_iter().nth(index))
    }
}

impl<T> Property for VecDeque<T> {
    type Output = T;

    #[inline]
    fn property(mut self, key: &Key) -> Option<T> {
        key.as_index().and_then(|index| self.remove(index))
    }
}

impl<'a, T> Property for &'a VecDeque<T> {
    type Output = &'a T;

    #[inline]
    fn property(self, key: &Key) -> Option<&'a T> {
        key.as_index().and_then(|index| self.get(index))
    }
}

// =============================================================================
// Keyed maps
// =============================================================================

impl<K, V, S> Property for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    #[inline]
    fn property(mut self, key: &Key) -> Option<V> {
        self.remove(&*key.as_name())
    }
}

impl<'a, K, V, S> Property for &'a HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Output = &'a V;

    #[inline]
    fn property(self, key: &Key) -> Option<&'a V> {
        self.get(&*key.as_name())
    }
}

impl<K, V> Property for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Output = V;

    #[inline]
    fn property(mut self, key: &Key) -> Option<V> {
        self.remove(&*key.as_name())
    }
}

impl<'a, K, V> Property for &'a BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Output = &'a V;

    #[inline]
    fn property(self, key: &Key) -> Option<&'a V> {
        self.get(&*key.as_name())
    }
}

// =============================================================================
// JSON documents
// =============================================================================

#[cfg(feature = "json")]
impl Property for serde_json::Value {
    type Output = Self;

    fn property(self, key: &Key) -> Option<Self> {
        match self {
            Self::Object(mut map) => map.remove(&*key.as_name()),
            Self::Array(items) => key
                .as_index()
                .and_then(|index| items.into_iter().nth(index)),
            _ => None,
        }
    }
}

#[cfg(feature = "json")]
impl<'a> Property for &'a serde_json::Value {
    type Output = Self;

    fn property(self, key: &Key) -> Option<Self> {
        match self {
            serde_json::Value::Object(map) => map.get(&*key.as_name()),
            serde_json::Value::Array(items) => key.as_index().and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Key::Index(0), Some("foo"))]
    #[case(Key::Index(1), Some("bar"))]
    #[case(Key::Index(2), None)]
    #[case(Key::from("1"), Some("bar"))]
    #[case(Key::from("01"), None)]
    #[case(Key::from("length"), None)]
    fn test_vec_property(#[case] key: Key, #[case] expected: Option<&str>) {
        let items = vec!["foo", "bar"];
        assert_eq!((&items).property(&key).copied(), expected);
        assert_eq!(items.property(&key), expected);
    }

    #[rstest]
    fn test_array_property() {
        assert_eq!([10, 20, 30].property(&Key::Index(2)), Some(30));
        assert_eq!([10, 20, 30].property(&Key::Index(3)), None);
    }

    #[rstest]
    fn test_vec_deque_property() {
        let items: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
        assert_eq!((&items).property(&Key::Index(1)), Some(&2));
        assert_eq!(items.property(&Key::from("2")), Some(3));
    }

    #[rstest]
    fn test_hash_map_property_by_name_and_index() {
        let map: HashMap<String, i32> =
            [("foo".to_string(), 1), ("0".to_string(), 2)].into_iter().collect();

        assert_eq!((&map).property(&Key::from("foo")), Some(&1));
        assert_eq!((&map).property(&Key::Index(0)), Some(&2));
        assert_eq!((&map).property(&Key::from("bar")), None);
        assert_eq!(map.property(&Key::from("foo")), Some(1));
    }

    #[rstest]
    fn test_btree_map_property() {
        let map: BTreeMap<&str, &str> = [("foo", "bar")].into_iter().collect();

        assert_eq!((&map).property(&Key::from("foo")), Some(&"bar"));
        assert_eq!(map.property(&Key::Index(0)), None);
    }

    #[cfg(feature = "json")]
    mod json {
        use super::*;
        use serde_json::{Value, json};

        #[rstest]
        #[case(json!({ "foo": "bar" }), Key::from("foo"), Some(json!("bar")))]
        #[case(json!({ "foo": "bar" }), Key::from("baz"), None)]
        #[case(json!({ "1": "one" }), Key::Index(1), Some(json!("one")))]
        #[case(json!(["foo", "bar"]), Key::Index(1), Some(json!("bar")))]
        #[case(json!(["foo", "bar"]), Key::from("0"), Some(json!("foo")))]
        #[case(json!(["foo", "bar"]), Key::from("foo"), None)]
        #[case(json!("foo"), Key::Index(0), None)]
        #[case(json!(42), Key::from("foo"), None)]
        #[case(json!(true), Key::from("foo"), None)]
        #[case(json!(null), Key::from("foo"), None)]
        fn test_json_property(
            #[case] value: Value,
            #[case] key: Key,
            #[case] expected: Option<Value>,
        ) {
            assert_eq!((&value).property(&key), expected.as_ref());
            assert_eq!(value.property(&key), expected);
        }

        #[rstest]
        fn test_json_property_keeps_explicit_null() {
            let value = json!({ "lastName": null });
            assert_eq!((&value).property(&Key::from("lastName")), Some(&Value::Null));
        }
    }
}
