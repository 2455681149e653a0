//! OSM Tags
//!
//! Provides `Tags` and `TagKey` structures to represent and help manipulate OpenStreetMap tags

#![warn(explicit_outlives_requirements)]
#![warn(missing_abi)]
#![deny(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(unreachable_pub)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
// Clippy
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cargo_common_metadata)]
#![warn(
    clippy::as_conversions,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::deref_by_slicing,
    clippy::empty_structs_with_brackets,
    clippy::if_then_some_else_none,
    clippy::indexing_slicing,
    clippy::let_underscore_must_use,
    clippy::map_err_ignore,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::todo,
    clippy::try_err,
    clippy::use_debug
)]

use std::collections::BTreeMap;
use std::str::FromStr;

mod key;
pub use key::TagKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError(TagKey);

impl DuplicateKeyError {
    /// The key that was inserted twice
    #[must_use]
    pub fn key(&self) -> &TagKey {
        &self.0
    }
}

impl From<TagKey> for DuplicateKeyError {
    fn from(key: TagKey) -> Self {
        DuplicateKeyError(key)
    }
}

impl std::fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "duplicate tag key {}", self.0)
    }
}

impl std::error::Error for DuplicateKeyError {}

/// A map from string keys to string values. This makes copies of strings for
/// convenience; don't use in performance sensitive contexts.
//
// BTreeMap chosen for deterministic serialization.
// We often need to compare output directly, so cannot tolerate reordering
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tags(BTreeMap<TagKey, String>);

impl Tags {
    /// Construct from an iterator of key value pairs
    ///
    /// # Errors
    ///
    /// If a duplicate key is provided.
    ///
    pub fn from_pairs<I, K, V>(tags: I) -> Result<Self, DuplicateKeyError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<TagKey>,
        V: Into<String>,
    {
        let mut map = Self::default();
        for (key, val) in tags {
            map.checked_insert(key, val)?;
        }
        Ok(map)
    }

    /// Construct from slice of pairs
    ///
    /// ```
    /// use osm_tags::Tags;
    /// let tags = Tags::from_str_pairs(&[["highway", "road"], ["lanes", "2"]]).unwrap();
    /// assert_eq!(tags.get("lanes"), Some("2"));
    /// assert!(Tags::from_str_pairs(&[["lanes", "1"], ["lanes", "2"]]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// If a duplicate key is provided.
    ///
    pub fn from_str_pairs(tags: &[[&str; 2]]) -> Result<Self, DuplicateKeyError> {
        Self::from_pairs(tags.iter().map(|[key, val]| (TagKey::from_ref(key), *val)))
    }

    /// Construct from a single pair
    #[must_use]
    pub fn from_str_pair(tag: [&str; 2]) -> Self {
        let [key, val] = tag;
        let mut map = BTreeMap::new();
        map.insert(TagKey::from_ref(key), val.to_owned());
        Self(map)
    }

    /// Expose data as vector of pairs
    #[must_use]
    pub fn to_str_pairs(&self) -> Vec<[&str; 2]> {
        self.0
            .iter()
            .map(|(k, v)| [k.as_str(), v.as_str()])
            .collect()
    }

    /// Vector of `=` separated strings
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", k.as_str(), v.as_str()))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get value from tags given a key
    pub fn get<K: AsRef<str>>(&self, k: K) -> Option<&str> {
        self.0
            .get(&TagKey::from_ref(k.as_ref()))
            .map(String::as_str)
    }

    /// Return if tags key has value,
    /// return false if key does not exist.
    #[must_use]
    pub fn is<K: AsRef<str>>(&self, k: K, v: &str) -> bool {
        self.get(k) == Some(v)
    }

    /// Return if tags key has any of the values,
    /// return false if the key does not exist.
    #[must_use]
    pub fn is_any<K: AsRef<str>>(&self, k: K, values: &[&str]) -> bool {
        self.get(k).map_or(false, |v| values.contains(&v))
    }

    /// Get a subset of the tags
    #[must_use]
    pub fn subset<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for key in keys {
            if let Some(val) = self.get(&key) {
                map.insert(TagKey::from_ref(key.as_ref()), val.to_owned());
            }
        }
        Self(map)
    }

    /// Insert a tag, refusing to overwrite an existing key.
    ///
    /// # Errors
    ///
    /// If duplicate key is inserted.
    ///
    pub fn checked_insert<K: Into<TagKey>, V: Into<String>>(
        &mut self,
        k: K,
        v: V,
    ) -> Result<(), DuplicateKeyError> {
        let key = k.into();
        if self.0.contains_key(&key) {
            return Err(key.into());
        }
        self.0.insert(key, v.into());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTagsError {
    MissingEquals(String),
    DuplicateKey(DuplicateKeyError),
}

impl std::fmt::Display for ParseTagsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingEquals(line) => write!(f, "tag must be = separated: '{line}'"),
            Self::DuplicateKey(duplicate_key_err) => duplicate_key_err.fmt(f),
        }
    }
}

impl std::error::Error for ParseTagsError {}

impl From<DuplicateKeyError> for ParseTagsError {
    fn from(e: DuplicateKeyError) -> Self {
        Self::DuplicateKey(e)
    }
}

impl FromStr for Tags {
    type Err = ParseTagsError;

    /// Parse '=' separated tag pairs from a newline separated list.
    /// Only the first '=' splits, so values may contain '='.
    ///
    /// ```
    /// use std::str::FromStr;
    /// use osm_tags::Tags;
    /// let tags = Tags::from_str("foo=bar\nabra=cadabra").unwrap();
    /// assert_eq!(tags.get("foo"), Some("bar"));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tags = Self::default();
        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let (key, val) = line
                .split_once('=')
                .ok_or_else(|| ParseTagsError::MissingEquals(line.to_owned()))?;
            tags.checked_insert(TagKey::from_ref(key), val)?;
        }
        Ok(tags)
    }
}

impl std::fmt::Display for Tags {
    /// Return tags as an '=' separated list
    ///
    /// ```
    /// use std::str::FromStr;
    /// use osm_tags::Tags;
    /// let tags = Tags::from_str("foo=bar\nabra=cadabra").unwrap();
    /// assert_eq!(tags.to_string(), "abra=cadabra\nfoo=bar");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_vec().join("\n"))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::SerializeMap;

    use crate::Tags;

    /// A Visitor holds methods that a Deserializer can drive
    struct TagsVisitor;

    impl<'de> serde::de::Visitor<'de> for TagsVisitor {
        type Value = Tags;
        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("OSM Tags")
        }
        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: serde::de::MapAccess<'de>,
        {
            let mut tags = Tags::default();
            while let Some((key, value)) = access.next_entry::<String, String>()? {
                tags.checked_insert(key, value)
                    .map_err(serde::de::Error::custom)?;
            }
            Ok(tags)
        }
    }

    /// Informs Serde how to deserialize Tags.
    impl<'de> serde::Deserialize<'de> for Tags {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::de::Deserializer<'de>,
        {
            deserializer.deserialize_map(TagsVisitor)
        }
    }

    impl serde::Serialize for Tags {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.0.len()))?;
            for (k, v) in &self.0 {
                map.serialize_entry(k.as_str(), v)?;
            }
            map.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{ParseTagsError, TagKey, Tags};

    #[test]
    fn test_tags() {
        let tags = Tags::from_str_pairs(&[
            ["foo", "bar"],
            ["abra", "cadabra"],
            ["foo:multi:key", "value"],
            ["multivalue", "apple;banana;chocolate covered capybara"],
        ])
        .unwrap();
        assert_eq!(
            tags.to_vec(),
            vec![
                "abra=cadabra",
                "foo=bar",
                "foo:multi:key=value",
                "multivalue=apple;banana;chocolate covered capybara"
            ]
        );

        // String interfaces
        assert_eq!(tags.get("foo"), Some("bar"));
        assert_eq!(tags.get("bar"), None);
        assert!(tags.is("foo", "bar"));
        assert!(!tags.is("foo", "foo"));
        assert!(!tags.is("bar", "foo"));
        assert!(tags.is_any("foo", &["bar"]));
        assert!(tags.is_any("foo", &["foo", "bar"]));
        assert!(!tags.is_any("foo", &["foo"]));
        assert!(!tags.is_any("bar", &["foo", "bar"]));
        assert_eq!(tags.subset(["foo"]).to_vec(), vec!["foo=bar"]);
        assert_eq!(
            tags.subset(["foo", "abra"]).to_vec(),
            vec!["abra=cadabra", "foo=bar"]
        );
        assert_eq!(tags.subset(["foo", "bar"]).to_vec(), vec!["foo=bar"]);
        assert!(tags.subset(["bar"]).is_empty());

        // Key interfaces
        const FOO_KEY: TagKey = TagKey::from_static("foo");
        assert!(tags.is(&FOO_KEY, "bar"));
        assert!(!tags.is(&FOO_KEY, "foo"));
        assert_eq!(tags.subset([&FOO_KEY]).to_vec(), vec!["foo=bar"]);
        assert!(tags.is(FOO_KEY + "multi" + "key", "value"));
    }

    #[test]
    fn test_parse() {
        let tags = Tags::from_str("highway=road\n\ncycleway:right=lane\nnote=a=b\n").unwrap();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags.get("cycleway:right"), Some("lane"));
        assert_eq!(tags.get("note"), Some("a=b"));

        assert_eq!(
            Tags::from_str("highway"),
            Err(ParseTagsError::MissingEquals("highway".to_owned()))
        );
        assert!(matches!(
            Tags::from_str("lanes=1\nlanes=2"),
            Err(ParseTagsError::DuplicateKey(e)) if e.key().as_str() == "lanes"
        ));
    }

    #[test]
    fn test_checked_insert() {
        let mut tags = Tags::default();
        assert!(tags.checked_insert("oneway", "yes").is_ok());
        let err = tags.checked_insert("oneway", "no").unwrap_err();
        assert_eq!(err.to_string(), "duplicate tag key oneway");
        assert!(tags.is("oneway", "yes"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let tags: Tags = serde_json::from_str(r#"{"highway":"road","lanes":"3"}"#).unwrap();
        assert_eq!(tags.get("lanes"), Some("3"));
        assert_eq!(
            serde_json::to_string(&tags).unwrap(),
            r#"{"highway":"road","lanes":"3"}"#
        );
    }
}
