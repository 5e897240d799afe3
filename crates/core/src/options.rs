//! Selected option values.
//!
//! A [`SelectedOptions`] maps option names (e.g. "Size") to the one value the
//! customer picked. It remembers insertion order for display, but two
//! selections holding the same name/value pairs are equal regardless of the
//! order they were built in.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Option name to chosen value, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SelectedOptions {
    pairs: Vec<(String, String)>,
}

impl SelectedOptions {
    /// An empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set `name` to `value`. An existing entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.pairs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.pairs.push((name, value));
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// The value chosen for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of selected options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate `(name, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Order-independent form used for identity.
    #[must_use]
    pub fn canonical(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable();
        pairs
    }

    /// Reorder to follow `declared` option names.
    ///
    /// Names found in `declared` come first, in that order; any others keep
    /// their relative insertion order after them.
    #[must_use]
    pub fn ordered_by(&self, declared: &[String]) -> Self {
        let mut pairs = self.pairs.clone();
        pairs.sort_by_key(|(name, _)| {
            declared
                .iter()
                .position(|d| d == name)
                .unwrap_or(declared.len())
        });
        Self { pairs }
    }

    /// The bracketed `[name: value, ...]` label, or `None` when empty.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("[{self}]"))
        }
    }
}

impl fmt::Display for SelectedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

impl PartialEq for SelectedOptions {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for SelectedOptions {}

impl Hash for SelectedOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl<N, V> FromIterator<(N, V)> for SelectedOptions
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (name, value) in iter {
            options.insert(name, value);
        }
        options
    }
}

impl Serialize for SelectedOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (name, value) in &self.pairs {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SelectedOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = SelectedOptions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of option names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut options = SelectedOptions::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    options.insert(name, value);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_insertion_order() {
        let a = SelectedOptions::new().with("Size", "M").with("Color", "Red");
        let b = SelectedOptions::new().with("Color", "Red").with("Size", "M");
        assert_eq!(a, b);
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_different_values_differ() {
        let m = SelectedOptions::new().with("Size", "M");
        let l = SelectedOptions::new().with("Size", "L");
        assert_ne!(m, l);
        assert_ne!(m, SelectedOptions::new());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let options = SelectedOptions::new()
            .with("Size", "M")
            .with("Color", "Red")
            .with("Size", "L");
        assert_eq!(options.len(), 2);
        assert_eq!(options.get("Size"), Some("L"));
        assert_eq!(options.to_string(), "Size: L, Color: Red");
    }

    #[test]
    fn test_ordered_by_declaration() {
        let options = SelectedOptions::new()
            .with("Extra", "Gift wrap")
            .with("Color", "Red")
            .with("Size", "M");
        let declared = vec!["Size".to_string(), "Color".to_string()];
        assert_eq!(
            options.ordered_by(&declared).to_string(),
            "Size: M, Color: Red, Extra: Gift wrap"
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(SelectedOptions::new().label(), None);
        let options = SelectedOptions::new().with("Size", "M");
        assert_eq!(options.label().as_deref(), Some("[Size: M]"));
    }

    #[test]
    fn test_serde_keeps_order() {
        let json = r#"{"Size":"M","Color":"Red"}"#;
        let options: SelectedOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.to_string(), "Size: M, Color: Red");
        assert_eq!(serde_json::to_string(&options).unwrap(), json);
    }

    #[test]
    fn test_serde_rejects_non_string_values() {
        assert!(serde_json::from_str::<SelectedOptions>(r#"{"Size":1}"#).is_err());
        assert!(serde_json::from_str::<SelectedOptions>("[]").is_err());
    }
}
