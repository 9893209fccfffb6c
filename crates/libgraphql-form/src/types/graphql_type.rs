use crate::loc;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;

/// A named, input-compatible type held by a
/// [`TypeGraph`](crate::schema::TypeGraph).
///
/// Output-only types (objects, interfaces, unions) are not kept: nothing in a
/// form can be typed with them.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Scalar(ScalarType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Enum(type_) => type_.def_location(),
            Self::InputObject(type_) => type_.def_location(),
            Self::Scalar(type_) => type_.def_location(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Scalar(_) => TypeKind::Scalar,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(type_) => type_.name(),
            Self::InputObject(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
        }
    }
}
