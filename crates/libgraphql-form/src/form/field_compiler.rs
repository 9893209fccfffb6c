use crate::form::FieldDescriptor;
use crate::form::FieldPath;
use crate::form::LeafKind;
use crate::schema::TypeGraph;
use crate::types::NamedTypeRef;
use crate::types::OperationKind;
use crate::types::TypeRef;
use thiserror::Error;

type Result<T> = std::result::Result<T, FieldCompileError>;

/// Flattens an operation's arguments into an ordered list of leaf
/// [`FieldDescriptor`]s.
///
/// Arguments typed as input objects are expanded recursively: each field of
/// the input object gets a path one segment deeper than its parent
/// (`input.title`). Wrapper types are unwrapped along the way, so list
/// arguments are flattened the same way as their item type.
///
/// Descriptors are emitted in pre-order: all leaves under one argument are
/// contiguous and appear before the next argument's leaves, and leaves within
/// an input object follow the object's field declaration order.
#[derive(Clone, Copy, Debug)]
pub struct SchemaFieldCompiler<'graph> {
    graph: &'graph TypeGraph,
}
impl<'graph> SchemaFieldCompiler<'graph> {
    pub fn new(graph: &'graph TypeGraph) -> Self {
        Self { graph }
    }

    /// Compile an argument list given as `(name, declared type)` pairs in
    /// declaration order.
    pub fn compile<'a>(
        &self,
        arguments: impl IntoIterator<Item = (&'a str, &'a TypeRef)>,
    ) -> Result<Vec<FieldDescriptor>> {
        let mut descriptors = vec![];
        let mut input_object_chain = vec![];
        for (arg_name, type_ref) in arguments {
            self.compile_type_ref(
                FieldPath::schema_root(arg_name),
                type_ref,
                &mut input_object_chain,
                &mut descriptors,
            )?;
        }
        Ok(descriptors)
    }

    /// Compile the arguments of the `name` field on the root type for `kind`.
    pub fn compile_operation(
        &self,
        kind: OperationKind,
        name: &str,
    ) -> Result<Vec<FieldDescriptor>> {
        let operation = self.graph.operation(kind, name).ok_or_else(|| {
            FieldCompileError::OperationNotFound {
                kind,
                name: name.to_string(),
            }
        })?;

        let descriptors = self.compile(
            operation.parameters()
                .values()
                .map(|param| (param.name(), param.type_ref())),
        )?;
        log::debug!(
            "Compiled {} form fields for `{kind} {name}`.",
            descriptors.len(),
        );
        Ok(descriptors)
    }

    fn compile_type_ref<'t>(
        &self,
        path: FieldPath,
        type_ref: &'t TypeRef,
        input_object_chain: &mut Vec<&'t str>,
        descriptors: &mut Vec<FieldDescriptor>,
    ) -> Result<()>
    where
        'graph: 't,
    {
        let unwrapped = type_ref.unwrapped();
        let leaf_kind = match unwrapped.leaf {
            NamedTypeRef::Enum(_) => LeafKind::Enum,
            NamedTypeRef::Scalar(_) => LeafKind::Scalar,
            NamedTypeRef::InputObject(type_name) => {
                // Expanding an input object that is already being expanded
                // further up would never terminate.
                if input_object_chain.contains(&type_name) {
                    let mut circular_type_chain: Vec<String> =
                        input_object_chain.iter()
                            .map(|name| name.to_string())
                            .collect();
                    circular_type_chain.push(type_name.to_string());
                    return Err(FieldCompileError::CircularInputObjectChain {
                        circular_type_chain,
                        path,
                    });
                }

                let input_object = self.graph.input_object(type_name).ok_or_else(|| {
                    FieldCompileError::UndefinedInputObject {
                        path: path.to_owned(),
                        type_name: type_name.to_string(),
                    }
                })?;

                log::trace!("Expanding `{type_name}` at `{path}`.");
                input_object_chain.push(type_name);
                for (field_name, field) in input_object.fields() {
                    self.compile_type_ref(
                        path.schema_child(field_name.as_str()),
                        field.type_ref(),
                        input_object_chain,
                        descriptors,
                    )?;
                }
                input_object_chain.pop();
                return Ok(());
            },
        };

        let enum_values = match leaf_kind {
            LeafKind::Enum => self.graph
                .enum_type(unwrapped.leaf.name())
                .map(|enum_type| {
                    enum_type.value_names()
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            LeafKind::Scalar => vec![],
        };

        descriptors.push(FieldDescriptor {
            enum_values,
            is_required: unwrapped.required,
            leaf_kind,
            leaf_type_name: unwrapped.leaf.name().to_string(),
            path,
            type_ref: type_ref.to_owned(),
        });
        Ok(())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldCompileError {
    #[error(
        "Unable to flatten `{path}`: the input object chain {} is circular",
        circular_type_chain.join(" -> "),
    )]
    CircularInputObjectChain {
        circular_type_chain: Vec<String>,
        path: FieldPath,
    },

    #[error("No {kind} operation named `{name}` is defined")]
    OperationNotFound {
        kind: OperationKind,
        name: String,
    },

    #[error("`{path}` references the undefined input object type `{type_name}`")]
    UndefinedInputObject {
        path: FieldPath,
        type_name: String,
    },
}
