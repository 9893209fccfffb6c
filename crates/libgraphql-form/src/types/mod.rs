mod enum_type;
mod graphql_type;
mod input_object_type;
mod operation_field;
mod operation_kind;
mod parameter;
pub(crate) mod scalar_type;
mod type_kind;
mod type_ref;

pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use graphql_type::GraphQLType;
pub use input_object_type::InputField;
pub use input_object_type::InputObjectType;
pub use operation_field::OperationField;
pub use operation_kind::OperationKind;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_kind::TypeKind;
pub use type_ref::NamedTypeRef;
pub use type_ref::TypeRef;
pub use type_ref::Unwrapped;

#[cfg(test)]
mod tests;
