use thiserror::Error;

type Result<T> = std::result::Result<T, FieldPathError>;

const SEGMENT_DELIMITER: char = '.';

/// Identifies one leaf form field within a (possibly nested) argument, e.g.
/// `input.author.name` for the `name` field of the `author` input object
/// passed as the `input` argument.
///
/// A [`FieldPath`] always has at least one segment, and no segment is empty
/// or contains the `.` delimiter, so the dotted [`Display`](std::fmt::Display)
/// form round-trips through [`FromStr`](std::str::FromStr).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldPath {
    segments: Vec<String>,
}
impl FieldPath {
    /// Build a path from individual segments, validating each one.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(FieldPathError::Empty);
        }
        for segment in &segments {
            validate_segment(segment)?;
        }
        Ok(Self { segments })
    }

    /// A single-segment path naming a top-level argument.
    pub fn root(name: impl Into<String>) -> Result<Self> {
        Self::from_segments([name.into()])
    }

    /// A path one level deeper than this one.
    pub fn child(&self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_segment(&name)?;
        Ok(self.schema_child(name))
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The last segment: the name of the leaf field itself.
    pub fn leaf_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The path of the input object containing this field, or `None` for a
    /// top-level argument.
    pub fn parent(&self) -> Option<FieldPath> {
        if self.is_root() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// The name of the top-level argument this path lives under.
    pub fn root_name(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Schema-provided names are GraphQL `Name`s (`/[_A-Za-z][_0-9A-Za-z]*/`)
    /// and need no validation.
    pub(crate) fn schema_root(name: &str) -> Self {
        Self {
            segments: vec![name.to_string()],
        }
    }

    pub(crate) fn schema_child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// The first `len` segments of this path. `len` must be in `1..=self.len()`.
    pub(crate) fn truncated(&self, len: usize) -> Self {
        Self {
            segments: self.segments[..len].to_vec(),
        }
    }
}
impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                write!(f, "{SEGMENT_DELIMITER}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
impl std::str::FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(FieldPathError::Empty);
        }
        Self::from_segments(s.split(SEGMENT_DELIMITER))
            .map_err(|_| FieldPathError::EmptySegment {
                path: s.to_string(),
            })
    }
}
impl serde::Serialize for FieldPath {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for FieldPath {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        path.parse().map_err(serde::de::Error::custom)
    }
}

fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        Err(FieldPathError::EmptySegment {
            path: segment.to_string(),
        })
    } else if segment.contains(SEGMENT_DELIMITER) {
        Err(FieldPathError::DelimiterInSegment {
            segment: segment.to_string(),
        })
    } else {
        Ok(())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldPathError {
    #[error("Field path segment `{segment}` must not contain `.`")]
    DelimiterInSegment {
        segment: String,
    },

    #[error("Field paths must have at least one segment")]
    Empty,

    #[error("Field path `{path}` contains an empty segment")]
    EmptySegment {
        path: String,
    },
}
