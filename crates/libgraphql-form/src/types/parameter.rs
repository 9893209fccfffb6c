use crate::loc;
use crate::types::TypeRef;

/// An argument declared on an [`OperationField`](crate::types::OperationField).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_ref: TypeRef,
}
impl Parameter {
    /// Construct a [`Parameter`] outside of a schema, e.g. to compile an
    /// ad-hoc argument list with
    /// [`SchemaFieldCompiler::compile()`](crate::form::SchemaFieldCompiler::compile).
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            default_value: None,
            description: None,
            name: name.into(),
            type_ref,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
