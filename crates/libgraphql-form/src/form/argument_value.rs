use indexmap::IndexMap;

/// The nested argument structure of an operation: top-level argument names
/// mapped to coerced values, with input objects as nested
/// [`ArgumentValue::Object`]s.
pub type ArgumentTree = IndexMap<String, ArgumentValue>;

/// A coerced argument value, ready to be printed as a GraphQL
/// [input value literal](https://spec.graphql.org/October2021/#sec-Input-Values).
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue {
    Boolean(bool),
    /// An enum value; printed bare (`PUBLISHED`), unlike a string.
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<ArgumentValue>),
    Null,
    Object(ArgumentTree),
    String(String),
}
impl ArgumentValue {
    pub fn as_object(&self) -> Option<&ArgumentTree> {
        if let Self::Object(tree) = self {
            Some(tree)
        } else {
            None
        }
    }

    /// Print this value as a GraphQL literal.
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),

            Self::Enum(value) => f.write_str(value),

            // Non-finite floats have no GraphQL literal form.
            Self::Float(value) => match serde_json::Number::from_f64(*value) {
                Some(number) => write!(f, "{number}"),
                None => f.write_str("null"),
            },

            Self::Int(value) => write!(f, "{value}"),

            Self::List(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },

            Self::Null => f.write_str("null"),

            Self::Object(tree) => write!(f, "{{{}}}", render_argument_list(tree)),

            // GraphQL string escapes are a superset of the ones JSON emits.
            Self::String(value) => write!(
                f,
                "{}",
                serde_json::Value::String(value.to_owned()),
            ),
        }
    }
}

/// Print the entries of an [`ArgumentTree`] as a comma-separated GraphQL
/// argument list (`id: 42, input: {title: "Hello"}`), without surrounding
/// parentheses or braces.
pub fn render_argument_list(tree: &ArgumentTree) -> String {
    tree.iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
