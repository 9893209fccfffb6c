use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: P,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.as_ref().to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a type, field, or argument of a
/// [`TypeGraph`](crate::schema::TypeGraph) was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// Implicitly defined by GraphQL itself (e.g. the `Int` scalar).
    GraphQLBuiltIn,

    /// Loaded from an introspection result. Introspection JSON carries no
    /// positions, so only the originating file is known.
    Introspection(PathBuf),

    /// Defined in a GraphQL SDL document.
    Schema(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_schema_ast_position<P: AsRef<Path>>(
        file: P,
        pos: &graphql_parser::Pos,
    ) -> Self {
        Self::Schema(FilePosition::from_pos(file, *pos))
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::Introspection(file) => write!(f, "{}", file.display()),
            Self::Schema(pos) => write!(f, "{pos}"),
        }
    }
}
