use crate::form::render_argument_list;
use crate::form::ArgumentTree;
use crate::types::OperationKind;

/// A single-field GraphQL operation with inline argument literals, e.g.
/// `mutation { createPost(input: {title: "Hello"}) { id } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(crate) arguments: ArgumentTree,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet,
}
impl Operation {
    pub fn new(
        kind: OperationKind,
        name: impl Into<String>,
        arguments: ArgumentTree,
        selection_set: SelectionSet,
    ) -> Self {
        Self {
            arguments,
            kind,
            name: name.into(),
            selection_set,
        }
    }

    pub fn arguments(&self) -> &ArgumentTree {
        &self.arguments
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The operation as a GraphQL document string.
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {{ {}", self.kind, self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "({})", render_argument_list(&self.arguments))?;
        }
        if !self.selection_set.is_empty() {
            write!(f, " {}", self.selection_set)?;
        }
        f.write_str(" }")
    }
}

/// The fields selected on an operation's result.
///
/// Only a flat list of field names is supported. An empty selection set is
/// omitted entirely, which is what operations returning a scalar need.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    fields: Vec<String>,
}
impl SelectionSet {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty selection set.
    pub fn none() -> Self {
        Self { fields: vec![] }
    }

    /// Parse a list of field names separated by commas and/or whitespace
    /// (`"id, title"` or `"id title"`).
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.split(|ch: char| ch == ',' || ch.is_whitespace())
                .filter(|field| !field.is_empty()),
        )
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
impl std::default::Default for SelectionSet {
    fn default() -> Self {
        Self::new(["id"])
    }
}
impl std::fmt::Display for SelectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ {} }}", self.fields.join(" "))
    }
}
