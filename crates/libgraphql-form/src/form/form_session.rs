use crate::form::validate;
use crate::form::ArgumentSerializer;
use crate::form::FieldCompileError;
use crate::form::FieldDescriptor;
use crate::form::FieldPath;
use crate::form::FieldValues;
use crate::form::Operation;
use crate::form::RawValue;
use crate::form::SchemaFieldCompiler;
use crate::form::SerializeError;
use crate::form::SerializeOptions;
use crate::form::ValidationErrors;
use crate::schema::TypeGraph;
use crate::types::OperationKind;
use thiserror::Error;

/// The state of one generated form: which operation is selected, the form
/// fields compiled for it, and the values entered so far.
///
/// Descriptors and values always belong to the same operation. Selecting an
/// operation replaces both together, so a value entered for one operation
/// can never be serialized into another.
#[derive(Clone, Debug, Default)]
pub struct FormSession {
    descriptors: Vec<FieldDescriptor>,
    operation: Option<SelectedOperation>,
    options: SerializeOptions,
    values: FieldValues,
}
impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SerializeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Select the operation to build a form for, discarding the previous
    /// operation's fields and values.
    ///
    /// If the operation cannot be compiled the session is left with no
    /// operation selected.
    pub fn select_operation(
        &mut self,
        graph: &TypeGraph,
        kind: OperationKind,
        name: &str,
    ) -> Result<&[FieldDescriptor], FieldCompileError> {
        self.clear();
        let descriptors =
            SchemaFieldCompiler::new(graph).compile_operation(kind, name)?;
        self.descriptors = descriptors;
        self.operation = Some(SelectedOperation {
            kind,
            name: name.to_string(),
        });
        Ok(&self.descriptors)
    }

    /// Deselect the current operation along with its fields and values.
    pub fn clear(&mut self) {
        self.descriptors.clear();
        self.operation = None;
        self.values.clear();
    }

    pub fn descriptor(&self, path: &FieldPath) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.path() == path)
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    pub fn options(&self) -> &SerializeOptions {
        &self.options
    }

    pub fn selected_operation(&self) -> Option<&SelectedOperation> {
        self.operation.as_ref()
    }

    /// Record the value entered for the field at `path`, replacing any
    /// earlier value for it.
    pub fn set_value(
        &mut self,
        path: &FieldPath,
        value: impl Into<RawValue>,
    ) -> Result<(), SessionError> {
        if self.operation.is_none() {
            return Err(SessionError::NoOperationSelected);
        }
        if self.descriptor(path).is_none() {
            return Err(SessionError::UnknownField {
                path: path.to_owned(),
            });
        }
        self.values.insert(path.to_owned(), value.into());
        Ok(())
    }

    /// Forget the value entered for `path`, returning it.
    pub fn clear_value(&mut self, path: &FieldPath) -> Option<RawValue> {
        self.values.shift_remove(path)
    }

    pub fn value(&self, path: &FieldPath) -> Option<&RawValue> {
        self.values.get(path)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.descriptors, &self.values)
    }

    /// Validate the entered values and, if every required field is filled
    /// in, build the operation.
    pub fn submit(&self) -> Result<Operation, SubmitError> {
        let selected = self.operation.as_ref().ok_or(SubmitError::NoOperationSelected)?;
        let errors = self.validate();
        if errors.has_errors() {
            return Err(SubmitError::Validation(errors));
        }

        let serializer = ArgumentSerializer::with_options(
            &self.descriptors,
            self.options.to_owned(),
        );
        Ok(serializer.operation(selected.kind, selected.name.as_str(), &self.values)?)
    }

    /// [`Self::submit()`], packaged as the body of a GraphQL-over-HTTP
    /// request.
    pub fn request(&self) -> Result<OperationRequest, SubmitError> {
        Ok(OperationRequest::from(&self.submit()?))
    }
}

/// The operation a [`FormSession`] was compiled for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectedOperation {
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
}
impl SelectedOperation {
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// The JSON body an execution collaborator posts to a GraphQL endpoint.
///
/// Arguments are always inlined into `query`, so `variables` is only set by
/// callers that attach their own.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationRequest {
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
}
impl std::convert::From<&Operation> for OperationRequest {
    fn from(operation: &Operation) -> Self {
        Self {
            query: operation.to_string(),
            variables: None,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("No operation is selected")]
    NoOperationSelected,

    #[error("`{path}` is not a field of the selected operation")]
    UnknownField {
        path: FieldPath,
    },
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("No operation is selected")]
    NoOperationSelected,

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error("The form has missing required fields:\n{0}")]
    Validation(ValidationErrors),
}
