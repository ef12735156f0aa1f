use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Splits `input` on `delimiter`, dropping empty segments.
///
/// `"a,,b"` and `"a,b,"` both give `{a, b}`; `""` gives the empty set.
#[must_use]
pub fn split(input: &str, delimiter: char) -> BTreeSet<String> {
    input.split(delimiter).filter(|s| !s.is_empty()).map(ToOwned::to_owned).collect()
}

/// Joins `items` with `delimiter`, in iteration order.
#[must_use]
pub fn join<'a>(items: impl IntoIterator<Item = &'a String>, delimiter: char) -> String {
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(item);
    }
    out
}

/// Set of strings with a delimiter-joined text form, for hosts without a set type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSet(BTreeSet<String>);

impl StringSet {
    pub const DELIMITER: char = ophub_kernel::domain::constants::SET_DELIMITER;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_delimited(input: &str) -> Self {
        Self(split(input, Self::DELIMITER))
    }

    /// Returns `false` if the item was already present.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        self.0.insert(item.into())
    }

    /// Returns `false` if the item was absent.
    pub fn delete(&mut self, item: &str) -> bool {
        self.0.remove(item)
    }

    #[must_use]
    pub fn has(&self, item: &str) -> bool {
        self.0.contains(item)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeSet<String> {
        self.0
    }
}

impl fmt::Display for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.0, Self::DELIMITER))
    }
}

impl FromStr for StringSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_delimited(s))
    }
}

impl From<BTreeSet<String>> for StringSet {
    fn from(set: BTreeSet<String>) -> Self {
        Self(set)
    }
}

impl From<&BTreeSet<String>> for StringSet {
    fn from(set: &BTreeSet<String>) -> Self {
        Self(set.clone())
    }
}

impl Serialize for StringSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StringSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_delimited(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(split("a,,b", ','), set(&["a", "b"]));
        assert_eq!(split("a,b,", ','), set(&["a", "b"]));
        assert_eq!(split(",a", ','), set(&["a"]));
        assert!(split("", ',').is_empty());
        assert!(split(",,,", ',').is_empty());
    }

    #[test]
    fn split_keeps_trailing_tail() {
        assert_eq!(split("br,img", ','), set(&["br", "img"]));
    }

    #[test]
    fn join_has_no_dangling_delimiter() {
        assert_eq!(join(&set(&["b", "a"]), ','), "a,b");
        assert_eq!(join(&set(&[]), ','), "");
    }

    #[test]
    fn string_set_mirrors_host_api() {
        let mut tags: StringSet = "br,hr".parse().unwrap();
        assert!(tags.has("br"));
        assert!(tags.add("img"));
        assert!(!tags.add("img"));
        assert!(tags.delete("hr"));
        assert!(!tags.delete("hr"));
        assert_eq!(tags.to_string(), "br,img");

        tags.clear();
        assert!(tags.is_empty());
        assert_eq!(tags.to_string(), "");
    }

    #[test]
    fn string_set_serializes_as_joined_string() {
        let tags = StringSet::from_delimited("em,b");
        assert_eq!(serde_json::to_string(&tags).unwrap(), "\"b,em\"");
        let back: StringSet = serde_json::from_str("\"x,,y,\"").unwrap();
        assert_eq!(back.len(), 2);
    }
}
