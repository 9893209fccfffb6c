mod argument_serializer;
mod argument_value;
mod coerce;
mod field_compiler;
mod field_descriptor;
mod field_path;
mod form_session;
mod operation;
mod raw_value;
mod unflatten;
mod validate;

pub use argument_serializer::ArgumentSerializer;
pub use argument_serializer::CoercionPolicy;
pub use argument_serializer::SerializeError;
pub use argument_serializer::SerializeOptions;
pub use argument_value::ArgumentTree;
pub use argument_value::ArgumentValue;
pub use argument_value::render_argument_list;
pub use coerce::coerce;
pub use coerce::CoercionError;
pub use field_compiler::FieldCompileError;
pub use field_compiler::SchemaFieldCompiler;
pub use field_descriptor::FieldDescriptor;
pub use field_descriptor::LeafKind;
pub use field_path::FieldPath;
pub use field_path::FieldPathError;
pub use form_session::FormSession;
pub use form_session::OperationRequest;
pub use form_session::SelectedOperation;
pub use form_session::SessionError;
pub use form_session::SubmitError;
pub use operation::Operation;
pub use operation::SelectionSet;
pub use raw_value::FieldValues;
pub use raw_value::RawValue;
pub use unflatten::flatten;
pub use unflatten::unflatten;
pub use unflatten::UnflattenError;
pub use validate::validate;
pub use validate::ValidationError;
pub use validate::ValidationErrors;

#[cfg(test)]
mod tests;
