use crate::loc;

/// The names of the scalar types every GraphQL schema defines implicitly.
pub(crate) const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars), either
/// built-in (`Int`, `Float`, `String`, `Boolean`, `ID`) or custom.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SourceLocation::GraphQLBuiltIn
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
