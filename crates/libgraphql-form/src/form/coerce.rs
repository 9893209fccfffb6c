use crate::form::ArgumentValue;
use crate::form::RawValue;
use thiserror::Error;

type Result<T> = std::result::Result<T, CoercionError>;

/// Convert a raw form value into the representation expected by a leaf field
/// whose named type is `leaf_type_name`.
///
/// * `Int` and `Float` values are parsed as base-10 numbers.
/// * `Boolean` values are `true` only for the exact text `"true"`; any other
///   text (including `""` and `"false"`) is `false`. A value that is already
///   a boolean passes through unchanged.
/// * Every other type (`String`, `ID`, custom scalars, enums) passes the raw
///   value through unchanged.
pub fn coerce(raw: &RawValue, leaf_type_name: &str) -> Result<ArgumentValue> {
    match (leaf_type_name, raw) {
        ("Int", RawValue::Text(text)) =>
            text.trim()
                .parse::<i64>()
                .map(ArgumentValue::Int)
                .map_err(|_| CoercionError::InvalidInt {
                    raw: text.to_owned(),
                }),

        ("Int", RawValue::Boolean(value)) =>
            Err(CoercionError::InvalidInt {
                raw: value.to_string(),
            }),

        ("Float", RawValue::Text(text)) =>
            match text.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(ArgumentValue::Float(value)),
                _ => Err(CoercionError::InvalidFloat {
                    raw: text.to_owned(),
                }),
            },

        ("Float", RawValue::Boolean(value)) =>
            Err(CoercionError::InvalidFloat {
                raw: value.to_string(),
            }),

        ("Boolean", RawValue::Boolean(value)) =>
            Ok(ArgumentValue::Boolean(*value)),

        ("Boolean", RawValue::Text(text)) =>
            Ok(ArgumentValue::Boolean(text == "true")),

        (_, RawValue::Boolean(value)) =>
            Ok(ArgumentValue::Boolean(*value)),

        (_, RawValue::Text(text)) =>
            Ok(ArgumentValue::String(text.to_owned())),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error("`{raw}` is not a value of enum `{enum_name}`")]
    InvalidEnum {
        enum_name: String,
        raw: String,
    },

    #[error("`{raw}` is not a valid Float")]
    InvalidFloat {
        raw: String,
    },

    #[error("`{raw}` is not a valid Int")]
    InvalidInt {
        raw: String,
    },
}
