//! Query Keys
//!
//! Hierarchical keys. A key is a prefix of another when all of its parts
//! match the leading parts of the other, which is what bulk invalidation
//! and eviction operate on.

use std::fmt;

/// One segment of a query key
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Str(String),
    Int(i64),
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        KeyPart::Str(value.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        KeyPart::Str(value)
    }
}

impl From<&String> for KeyPart {
    fn from(value: &String) -> Self {
        KeyPart::Str(value.clone())
    }
}

impl From<i64> for KeyPart {
    fn from(value: i64) -> Self {
        KeyPart::Int(value)
    }
}

impl From<u32> for KeyPart {
    fn from(value: u32) -> Self {
        KeyPart::Int(i64::from(value))
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Str(s) => write!(f, "{}", s),
            KeyPart::Int(n) => write!(f, "{}", n),
        }
    }
}

/// Hierarchical cache key, e.g. `[items, demo, detail, 7]`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<KeyPart>);

impl QueryKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(parts: Vec<KeyPart>) -> Self {
        Self(parts)
    }

    /// Extend the key by one segment (builder style)
    pub fn with(mut self, part: impl Into<KeyPart>) -> Self {
        self.0.push(part.into());
        self
    }

    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `prefix` matches the leading segments of this key.
    /// Every key starts with itself and with the empty key.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, "]")
    }
}

/// Build a [`QueryKey`] from a list of segments.
///
/// ```ignore
/// let key = query_key!["items", tenant, "detail", 7i64];
/// ```
#[macro_export]
macro_rules! query_key {
    ($($part:expr),* $(,)?) => {
        $crate::QueryKey::from_parts(vec![$($crate::KeyPart::from($part)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matching() {
        let root = query_key!["items", "demo"];
        let detail = query_key!["items", "demo", "detail", 3i64];
        let other_tenant = query_key!["items", "other", "detail", 3i64];

        assert!(detail.starts_with(&root));
        assert!(detail.starts_with(&detail));
        assert!(!root.starts_with(&detail));
        assert!(!other_tenant.starts_with(&root));
        assert!(detail.starts_with(&QueryKey::new()));
    }

    #[test]
    fn test_int_and_str_parts_differ() {
        let by_int = query_key!["items", "demo", "detail", 3i64];
        let by_str = query_key!["items", "demo", "detail", "3"];
        assert_ne!(by_int, by_str);
    }

    #[test]
    fn test_builder_matches_macro() {
        let built = QueryKey::new().with("items").with("demo").with("list").with(1u32).with(100u32);
        assert_eq!(built, query_key!["items", "demo", "list", 1u32, 100u32]);
        assert_eq!(built.to_string(), "[items, demo, list, 1, 100]");
        assert_eq!(built.len(), 5);
    }
}
