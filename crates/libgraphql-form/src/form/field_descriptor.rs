use crate::form::coerce;
use crate::form::ArgumentValue;
use crate::form::CoercionError;
use crate::form::FieldPath;
use crate::form::RawValue;
use crate::types::TypeRef;

/// Whether a leaf form field holds a scalar or an enum value. Enum values
/// are rendered as bare tokens, scalars according to their type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafKind {
    Enum,
    Scalar,
}

/// One leaf field of a form generated for an operation's arguments.
///
/// Produced by [`SchemaFieldCompiler`](crate::form::SchemaFieldCompiler);
/// immutable once created.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FieldDescriptor {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) enum_values: Vec<String>,
    pub(crate) is_required: bool,
    pub(crate) leaf_kind: LeafKind,
    pub(crate) leaf_type_name: String,
    pub(crate) path: FieldPath,
    pub(crate) type_ref: TypeRef,
}
impl FieldDescriptor {
    /// Coerce a raw value entered for this field. Unlike the free-standing
    /// [`coerce()`], values of enum-typed fields come back as
    /// [`ArgumentValue::Enum`] so they print without quotes.
    ///
    /// An enum value is printed bare, so it must be one of the enum's
    /// declared values (or, when those are unknown, at least a GraphQL
    /// name). Anything else is a [`CoercionError::InvalidEnum`].
    pub fn coerce(&self, raw: &RawValue) -> Result<ArgumentValue, CoercionError> {
        if self.leaf_kind == LeafKind::Enum {
            return self.coerce_enum(raw);
        }
        coerce(raw, self.leaf_type_name.as_str())
    }

    fn coerce_enum(&self, raw: &RawValue) -> Result<ArgumentValue, CoercionError> {
        let invalid = || CoercionError::InvalidEnum {
            enum_name: self.leaf_type_name.to_owned(),
            raw: raw.to_string(),
        };
        let RawValue::Text(text) = raw else {
            return Err(invalid());
        };
        let is_allowed = if self.enum_values.is_empty() {
            is_graphql_name(text)
        } else {
            self.enum_values.iter().any(|value| value == text)
        };
        if is_allowed {
            Ok(ArgumentValue::Enum(text.to_owned()))
        } else {
            Err(invalid())
        }
    }

    /// The values allowed for an enum-typed field, in declaration order.
    /// Empty for scalar fields.
    pub fn enum_values(&self) -> &[String] {
        &self.enum_values
    }

    /// Indicates if this field's own declared type is non-null.
    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn leaf_kind(&self) -> LeafKind {
        self.leaf_kind
    }

    /// Name of the unwrapped scalar or enum type (e.g. `"Int"`, `"Status"`).
    pub fn leaf_type_name(&self) -> &str {
        self.leaf_type_name.as_str()
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// The field's declared type, wrappers included (e.g. `[Int!]`).
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}

/// Matches the GraphQL `Name` grammar: `/[_A-Za-z][_0-9A-Za-z]*/`.
fn is_graphql_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
