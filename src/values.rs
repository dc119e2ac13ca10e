//! Form value snapshots.
//!
//! This module provides [`FormValues`], a point-in-time read of every field
//! of a form. Validation only ever borrows a snapshot, so one pass always
//! sees a consistent set of values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A snapshot of form field values keyed by field name.
///
/// Field order follows insertion order, which keeps debug output and
/// serialized bodies stable.
///
/// # Example
///
/// ```rust
/// use gobarber_forms::FormValues;
///
/// let values = FormValues::new()
///     .with("email", "ana@gobarber.com")
///     .with("password", "123456");
///
/// assert_eq!(values.get("email"), Some("ana@gobarber.com"));
/// assert_eq!(values.get("name"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    fields: IndexMap<String, String>,
}

impl FormValues {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot with `field` set to `value`.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets `field` to `value`, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns the current value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns the value of `field`, or the empty string when absent.
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// Returns true if the snapshot holds a value for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of fields in the snapshot.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the snapshot holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over `(field, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds a snapshot from JSON form data.
    ///
    /// Strings are taken as-is, `null` fields are treated as absent, and any
    /// other scalar is stored in its JSON text form. Non-object input yields
    /// an empty snapshot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gobarber_forms::FormValues;
    /// use serde_json::json;
    ///
    /// let values = FormValues::from_json(&json!({"email": "a@b.com", "password": null}));
    /// assert_eq!(values.get("email"), Some("a@b.com"));
    /// assert!(!values.contains("password"));
    /// ```
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::new();
        };

        obj.iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key.clone(), s.clone())),
                other => Some((key.clone(), other.to_string())),
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
