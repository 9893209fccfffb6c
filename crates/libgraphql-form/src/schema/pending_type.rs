use crate::ast;
use crate::loc;
use crate::types::EnumType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use indexmap::IndexMap;

/// A type definition that has been loaded but whose type references have
/// not yet been resolved. References can only be resolved once every source
/// has been loaded, since a type may refer to one defined in a later file.
#[derive(Debug)]
pub(super) enum PendingType {
    Enum(EnumType),
    InputObject(PendingFieldsType<PendingInputValue>),
    Object(PendingFieldsType<PendingField>),
    OutputOnly {
        def_location: loc::SourceLocation,
        kind: TypeKind,
        name: String,
    },
    Scalar(ScalarType),
}
impl PendingType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Enum(type_) => type_.def_location(),
            Self::InputObject(type_) => &type_.def_location,
            Self::Object(type_) => &type_.def_location,
            Self::OutputOnly { def_location, .. } => def_location,
            Self::Scalar(type_) => type_.def_location(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Object(_) => TypeKind::Object,
            Self::OutputOnly { kind, .. } => *kind,
            Self::Scalar(_) => TypeKind::Scalar,
        }
    }
}

/// An input object or object type with its fields in declaration order.
#[derive(Debug)]
pub(super) struct PendingFieldsType<TField> {
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub fields: IndexMap<String, TField>,
    pub name: String,
}

/// An output field; only its arguments are of interest.
#[derive(Debug)]
pub(super) struct PendingField {
    pub arguments: IndexMap<String, PendingInputValue>,
    pub def_location: loc::SourceLocation,
    pub description: Option<String>,
    pub name: String,
}

/// An argument or input field whose type is still expressed by name.
#[derive(Debug)]
pub(super) struct PendingInputValue {
    pub def_location: loc::SourceLocation,
    pub default_value: Option<String>,
    pub description: Option<String>,
    pub name: String,
    pub value_type: ast::schema::Type,
}
