/// The kind of a type as reported by GraphQL introspection
/// ([`__TypeKind`](https://spec.graphql.org/October2021/#sec-The-__Type-Type)).
///
/// Wrapper kinds (`LIST`, `NON_NULL`) only ever appear on type references,
/// never on named type definitions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }

    /// Indicates if a named type of this kind may be used as the type of an
    /// argument or input field.
    pub fn is_input_kind(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
