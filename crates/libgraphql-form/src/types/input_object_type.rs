use crate::loc;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The fields of this [`InputObjectType`], keyed by name.
    ///
    /// Iteration order is the order the fields were declared in the schema,
    /// which is also the order form fields are compiled in.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`].
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_ref: TypeRef,
}
impl InputField {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The default value of this field rendered as a GraphQL literal (if the
    /// schema declares one).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared type of this field, including wrappers.
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
