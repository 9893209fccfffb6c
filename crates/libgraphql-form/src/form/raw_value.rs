use crate::form::FieldPath;
use indexmap::IndexMap;

/// A value exactly as a user entered it into a form field, before it has
/// been coerced to the field's declared type.
///
/// Text inputs produce [`RawValue::Text`]; inputs that natively hold a
/// boolean (checkboxes, toggles) may supply [`RawValue::Boolean`] directly.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Boolean(bool),
    Text(String),
}
impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(text) = self {
            Some(text.as_str())
        } else {
            None
        }
    }

    /// Indicates if this value counts as "not filled in" for required-field
    /// validation. Only an empty string does; a boolean is always a value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}
impl std::convert::From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
impl std::convert::From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// The values entered into a form, keyed by the path of the field they were
/// entered into. Fields that were never edited have no entry.
pub type FieldValues = IndexMap<FieldPath, RawValue>;
