use crate::form::FieldDescriptor;
use crate::form::FieldPath;
use crate::form::FieldValues;
use indexmap::IndexMap;
use thiserror::Error;

/// Check that every required field has a non-empty value.
///
/// A field counts as missing when `values` has no entry for its path or the
/// entry is an empty string. Errors are keyed by path and ordered the same
/// way as `descriptors`.
pub fn validate(
    descriptors: &[FieldDescriptor],
    values: &FieldValues,
) -> ValidationErrors {
    let errors = descriptors.iter()
        .filter(|descriptor| descriptor.is_required())
        .filter(|descriptor| {
            values.get(descriptor.path())
                .is_none_or(|value| value.is_empty())
        })
        .map(|descriptor| (
            descriptor.path().to_owned(),
            ValidationError::MissingRequiredField {
                path: descriptor.path().to_owned(),
            },
        ))
        .collect();

    ValidationErrors { errors }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("`{path}` is required")]
    MissingRequiredField {
        path: FieldPath,
    },
}

/// The result of [`validate()`]: at most one [`ValidationError`] per field
/// path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    errors: IndexMap<FieldPath, ValidationError>,
}
impl ValidationErrors {
    pub fn get(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &ValidationError)> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.errors.keys()
    }
}
impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, error) in self.errors.values().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}
