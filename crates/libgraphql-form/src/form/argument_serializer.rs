use crate::form::unflatten;
use crate::form::ArgumentTree;
use crate::form::ArgumentValue;
use crate::form::CoercionError;
use crate::form::FieldDescriptor;
use crate::form::FieldPath;
use crate::form::FieldValues;
use crate::form::Operation;
use crate::form::SelectionSet;
use crate::form::UnflattenError;
use crate::types::OperationKind;
use thiserror::Error;

type Result<T> = std::result::Result<T, SerializeError>;

/// What to do with a value that cannot be coerced to its field's type: text
/// that is not an `Int` or `Float`, or that is not one of an enum's values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CoercionPolicy {
    /// Render the value as `null` and log a warning, leaving it to the
    /// server to reject the operation if the field does not allow `null`.
    #[default]
    Lenient,

    /// Fail serialization with [`SerializeError::Coercion`].
    Strict,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SerializeOptions {
    pub coercion: CoercionPolicy,
    pub selection_set: SelectionSet,
}

/// Turns the values entered into a compiled form back into the nested
/// arguments of an [`Operation`].
///
/// Values are visited in descriptor order (not the order they were entered
/// in) so the keys of every rendered input object follow schema declaration
/// order. Fields without a value are left out of the arguments entirely,
/// and values keyed by a path that no descriptor has are ignored.
#[derive(Clone, Debug)]
pub struct ArgumentSerializer<'a> {
    descriptors: &'a [FieldDescriptor],
    options: SerializeOptions,
}
impl<'a> ArgumentSerializer<'a> {
    pub fn new(descriptors: &'a [FieldDescriptor]) -> Self {
        Self::with_options(descriptors, SerializeOptions::default())
    }

    pub fn with_options(
        descriptors: &'a [FieldDescriptor],
        options: SerializeOptions,
    ) -> Self {
        Self {
            descriptors,
            options,
        }
    }

    /// Coerce each entered value and unflatten the results into the nested
    /// argument structure.
    pub fn argument_tree(&self, values: &FieldValues) -> Result<ArgumentTree> {
        for path in values.keys() {
            if !self.descriptors.iter().any(|descriptor| descriptor.path() == path) {
                log::warn!("Ignoring value for unknown form field `{path}`.");
            }
        }

        let mut coerced = Vec::with_capacity(values.len());
        for descriptor in self.descriptors {
            let Some(raw) = values.get(descriptor.path()) else {
                continue;
            };
            let value = match descriptor.coerce(raw) {
                Ok(value) => value,
                Err(err) => match self.options.coercion {
                    CoercionPolicy::Lenient => {
                        log::warn!(
                            "{err} for `{}`; serializing it as null.",
                            descriptor.path(),
                        );
                        ArgumentValue::Null
                    },
                    CoercionPolicy::Strict => return Err(SerializeError::Coercion {
                        err,
                        path: descriptor.path().to_owned(),
                    }),
                },
            };
            coerced.push((descriptor.path().to_owned(), value));
        }

        Ok(unflatten(coerced)?)
    }

    /// Build the operation named `name` with the arguments the entered
    /// values describe.
    pub fn operation(
        &self,
        kind: OperationKind,
        name: &str,
        values: &FieldValues,
    ) -> Result<Operation> {
        Ok(Operation::new(
            kind,
            name,
            self.argument_tree(values)?,
            self.options.selection_set.to_owned(),
        ))
    }

    /// Shorthand for rendering [`Self::operation()`] to a string.
    pub fn serialize(
        &self,
        kind: OperationKind,
        name: &str,
        values: &FieldValues,
    ) -> Result<String> {
        let operation = self.operation(kind, name, values)?;
        log::debug!("Serialized `{kind} {name}` with {} values.", values.len());
        Ok(operation.to_string())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SerializeError {
    #[error("Unable to serialize `{path}`: {err}")]
    Coercion {
        err: CoercionError,
        path: FieldPath,
    },

    #[error(transparent)]
    Unflatten(#[from] UnflattenError),
}
