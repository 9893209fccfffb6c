use crate::schema::TypeGraphBuilder;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::OperationField;
use crate::types::OperationKind;
use indexmap::IndexMap;

/// The input-relevant portion of a GraphQL schema: every named type that can
/// appear in an argument, plus the operation fields of the query and mutation
/// root types.
///
/// A [`TypeGraph`] is immutable once built. Use [`TypeGraph::builder()`] to
/// construct one.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeGraph {
    pub(crate) mutation_fields: IndexMap<String, OperationField>,
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_fields: IndexMap<String, OperationField>,
    pub(crate) query_type_name: String,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl TypeGraph {
    /// Returns all input-compatible types in this [`TypeGraph`], including
    /// the built-in scalars.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`TypeGraphBuilder::new()`].
    pub fn builder() -> TypeGraphBuilder {
        TypeGraphBuilder::new()
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.types.get(name).and_then(GraphQLType::as_enum)
    }

    /// Maps the name of every enum type to the names of its allowed values.
    ///
    /// This is a property of the whole schema rather than of any one
    /// operation, so a presentation layer can compute it once per
    /// [`TypeGraph`].
    pub fn enum_values(&self) -> IndexMap<&str, Vec<&str>> {
        self.types
            .values()
            .filter_map(GraphQLType::as_enum)
            .map(|enum_type| (enum_type.name(), enum_type.value_names()))
            .collect()
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn input_object(&self, name: &str) -> Option<&InputObjectType> {
        self.types.get(name).and_then(GraphQLType::as_input_object)
    }

    /// Name of the mutation root type (if the schema defines one).
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    /// Look up a single operation field on the root type for `kind`.
    pub fn operation(
        &self,
        kind: OperationKind,
        name: &str,
    ) -> Option<&OperationField> {
        self.operations(kind).get(name)
    }

    /// All operation fields on the root type for `kind`, in declaration order.
    pub fn operations(
        &self,
        kind: OperationKind,
    ) -> &IndexMap<String, OperationField> {
        match kind {
            OperationKind::Mutation => &self.mutation_fields,
            OperationKind::Query => &self.query_fields,
        }
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type_name.as_str()
    }
}
