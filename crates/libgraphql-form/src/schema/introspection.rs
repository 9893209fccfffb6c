//! Serde mirror of the parts of a GraphQL
//! [introspection](https://spec.graphql.org/October2021/#sec-Schema-Introspection)
//! result that matter for building input forms.
//!
//! Everything not declared here (field return types, directives,
//! deprecation reasons, ...) is ignored while decoding.

use crate::ast;
use crate::types::TypeKind;

/// Accepts either a full GraphQL response (`{"data": {"__schema": ...}}`) or
/// just its `data` payload (`{"__schema": ...}`).
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub(super) enum IntrospectionDocument {
    Response { data: IntrospectionData },
    Data(IntrospectionData),
}
impl IntrospectionDocument {
    pub fn into_schema(self) -> IntrospectionSchema {
        match self {
            Self::Response { data } | Self::Data(data) => data.schema,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionSchema {
    #[serde(default)]
    pub mutation_type: Option<IntrospectionNamedRef>,
    #[serde(default)]
    pub query_type: Option<IntrospectionNamedRef>,
    pub types: Vec<IntrospectionType>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionNamedRef {
    pub name: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionType {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
    #[serde(default)]
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    pub kind: TypeKind,
    pub name: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionEnumValue {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionField {
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionInputValue {
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
}

/// A (possibly wrapped) type reference: `{"kind": "NON_NULL", "ofType":
/// {"kind": "SCALAR", "name": "Int"}}`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionTypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}
impl IntrospectionTypeRef {
    /// Re-express this reference in SDL AST form so that introspection and
    /// SDL sources resolve through the same path. Returns `None` if a wrapper
    /// is missing its `ofType` or a named reference is missing its `name`.
    pub fn to_ast_type(&self) -> Option<ast::schema::Type> {
        match self.kind {
            TypeKind::List => Some(ast::schema::Type::ListType(Box::new(
                self.of_type.as_deref()?.to_ast_type()?,
            ))),

            TypeKind::NonNull => Some(ast::schema::Type::NonNullType(Box::new(
                self.of_type.as_deref()?.to_ast_type()?,
            ))),

            _ => self.name
                .as_ref()
                .map(|name| ast::schema::Type::NamedType(name.to_owned())),
        }
    }
}
