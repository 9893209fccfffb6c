//! Relays the outcome of executing an operation back to the caller as data
//! or as a list of human-readable error messages.

use thiserror::Error;

/// A GraphQL response as returned by an execution collaborator.
///
/// https://spec.graphql.org/October2021/#sec-Response-Format
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExecutionResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}
impl ExecutionResponse {
    pub fn from_json_str(json: &str) -> Result<Self, ResponseDecodeError> {
        serde_json::from_str(json).map_err(|err| ResponseDecodeError {
            message: err.to_string(),
        })
    }

    /// One message per entry in `errors`, prefixed by the response path the
    /// error applies to (if any).
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ResponseError::to_string).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The response data, or the error messages if the service reported any
    /// errors or returned no data.
    pub fn into_result(self) -> Result<serde_json::Value, Vec<String>> {
        if self.has_errors() {
            return Err(self.error_messages());
        }
        match self.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(vec!["The response contained no data".to_string()]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ResponseError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<ResponsePathSegment>,
}
impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.path.is_empty() {
            let path: Vec<String> =
                self.path.iter().map(ResponsePathSegment::to_string).collect();
            write!(f, "{}: ", path.join("."))?;
        }
        f.write_str(self.message.as_str())
    }
}

/// A response path segment is a field name or a list index.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum ResponsePathSegment {
    Index(u64),
    Field(String),
}
impl std::fmt::Display for ResponsePathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Unable to decode GraphQL response: {message}")]
pub struct ResponseDecodeError {
    message: String,
}
