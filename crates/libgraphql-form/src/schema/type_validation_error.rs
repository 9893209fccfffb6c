use crate::loc;
use crate::types::TypeKind;
use thiserror::Error;

/// A problem with a type reference discovered while resolving a schema into
/// a [`TypeGraph`](crate::schema::TypeGraph).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Arguments and input fields can only be declared with input-compatible \
        types: `{referencing}` is declared with the `{type_name}` type, which \
        is of kind {kind}."
    )]
    InvalidInputTypeReference {
        kind: TypeKind,
        ref_location: loc::SourceLocation,
        referencing: String,
        type_name: String,
    },

    #[error(
        "There is no type defined with the name `{undefined_type_name}` \
        (referenced by `{referencing}` at {ref_location})"
    )]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        referencing: String,
        undefined_type_name: String,
    },
}
