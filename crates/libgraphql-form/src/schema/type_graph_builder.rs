use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::introspection::IntrospectionDocument;
use crate::schema::introspection::IntrospectionInputValue;
use crate::schema::introspection::IntrospectionType;
use crate::schema::pending_type::PendingField;
use crate::schema::pending_type::PendingFieldsType;
use crate::schema::pending_type::PendingInputValue;
use crate::schema::pending_type::PendingType;
use crate::schema::TypeGraph;
use crate::schema::TypeValidationError;
use crate::types::scalar_type::BUILTIN_SCALAR_NAMES;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::OperationField;
use crate::types::OperationKind;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::ReadContentError;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeGraphBuildError>;

/// Utility for building a [`TypeGraph`] from one or more GraphQL SDL
/// documents and/or introspection results.
///
/// Sources may be loaded in any order; type references are only resolved
/// when [`TypeGraphBuilder::build()`] is called.
#[derive(Debug)]
pub struct TypeGraphBuilder {
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedRootType>,
    query_type: Option<NamedRootType>,
    str_load_counter: u16,
    types: IndexMap<String, PendingType>,
}
impl TypeGraphBuilder {
    pub fn build(mut self) -> Result<TypeGraph> {
        let extensions = std::mem::take(&mut self.extensions);
        for (file_path, ext) in extensions {
            self.merge_type_extension(file_path.as_path(), ext)?;
        }

        let query_type_name = self.root_type_name(OperationKind::Query)?
            .ok_or(TypeGraphBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type_name = self.root_type_name(OperationKind::Mutation)?;

        let kinds: IndexMap<&str, TypeKind> =
            BUILTIN_SCALAR_NAMES.iter()
                .map(|name| (*name, TypeKind::Scalar))
                .chain(self.types.iter().map(|(name, pending)| {
                    (name.as_str(), pending.kind())
                }))
                .collect();
        let resolver = TypeRefResolver { kinds };
        let mut errors = vec![];

        let mut types: IndexMap<String, GraphQLType> =
            BUILTIN_SCALAR_NAMES.iter()
                .map(|name| (
                    name.to_string(),
                    GraphQLType::Scalar(ScalarType::builtin(name)),
                ))
                .collect();
        for (type_name, pending) in self.types.iter() {
            let type_ = match pending {
                PendingType::Enum(enum_type) =>
                    GraphQLType::Enum(enum_type.to_owned()),

                PendingType::InputObject(inputobj_type) =>
                    GraphQLType::InputObject(InputObjectType {
                        def_location: inputobj_type.def_location.to_owned(),
                        description: inputobj_type.description.to_owned(),
                        fields: inputobj_type.fields.values()
                            .filter_map(|field| {
                                let type_ref = resolver.resolve(
                                    format!("{type_name}.{}", field.name),
                                    field,
                                    &mut errors,
                                )?;
                                Some((field.name.to_owned(), InputField {
                                    def_location: field.def_location.to_owned(),
                                    default_value: field.default_value.to_owned(),
                                    description: field.description.to_owned(),
                                    name: field.name.to_owned(),
                                    type_ref,
                                }))
                            })
                            .collect(),
                        name: type_name.to_owned(),
                    }),

                PendingType::Scalar(scalar_type) =>
                    GraphQLType::Scalar(scalar_type.to_owned()),

                PendingType::Object(_) | PendingType::OutputOnly { .. } =>
                    continue,
            };
            types.insert(type_name.to_owned(), type_);
        }

        let query_fields = self.operation_fields(
            query_type_name.as_str(),
            &resolver,
            &mut errors,
        );
        let mutation_fields = match &mutation_type_name {
            Some(type_name) => self.operation_fields(
                type_name.as_str(),
                &resolver,
                &mut errors,
            ),
            None => IndexMap::new(),
        };

        if !errors.is_empty() {
            return Err(TypeGraphBuildError::TypeValidationErrors { errors });
        }

        log::debug!(
            "Built type graph with {} types, {} query operations, and {} \
            mutation operations.",
            types.len(),
            query_fields.len(),
            mutation_fields.len(),
        );

        Ok(TypeGraph {
            mutation_fields,
            mutation_type_name,
            query_fields,
            query_type_name,
            types,
        })
    }

    /// Load a schema source from a file. Files with a `.json` extension are
    /// loaded as introspection results, everything else as GraphQL SDL.
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| TypeGraphBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;

            let is_introspection =
                file_path.extension().is_some_and(|ext| ext == "json");
            self =
                if is_introspection {
                    self.load_introspection_str(
                        Some(file_path.to_path_buf()),
                        file_content.as_str(),
                    )?
                } else {
                    self.load_str(
                        Some(file_path.to_path_buf()),
                        file_content.as_str(),
                    )?
                };
        }
        Ok(self)
    }

    /// Load a JSON-encoded introspection result. Both a full GraphQL response
    /// (`{"data": {"__schema": ...}}`) and a bare `{"__schema": ...}` object
    /// are accepted.
    pub fn load_introspection_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path = self.source_path(file_path);
        let document: IntrospectionDocument = serde_json::from_str(content)
            .map_err(|err| TypeGraphBuildError::IntrospectionDecodeError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;
        let schema = document.into_schema();
        let location = loc::SourceLocation::Introspection(file_path.to_owned());

        if let Some(query_type) = schema.query_type {
            self.set_root_type(OperationKind::Query, NamedRootType {
                def_location: location.to_owned(),
                type_name: query_type.name,
            })?;
        }
        if let Some(mutation_type) = schema.mutation_type {
            self.set_root_type(OperationKind::Mutation, NamedRootType {
                def_location: location.to_owned(),
                type_name: mutation_type.name,
            })?;
        }

        for type_ in schema.types {
            // Introspection always reports the built-in scalars and the
            // `__`-prefixed meta-types; neither are user definitions.
            if type_.name.starts_with("__")
                || BUILTIN_SCALAR_NAMES.contains(&type_.name.as_str()) {
                continue;
            }
            let pending = introspected_pending_type(&location, type_)?;
            self.add_pending_type(pending)?;
        }

        Ok(self)
    }

    pub fn load_introspection_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let file_path = file_path.as_ref();
        let file_content = file_reader::read_content(file_path)
            .map_err(|err| TypeGraphBuildError::SchemaFileReadError(
                Box::new(err),
            ))?;
        self.load_introspection_str(
            Some(file_path.to_path_buf()),
            file_content.as_str(),
        )
    }

    /// Load a GraphQL SDL document.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path = self.source_path(file_path);
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| TypeGraphBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            match def {
                ast::schema::Definition::SchemaDefinition(schema_def) =>
                    self.visit_schema_def(file_path.as_path(), schema_def)?,

                ast::schema::Definition::TypeDefinition(type_def) =>
                    self.visit_type_def(file_path.as_path(), type_def)?,

                ast::schema::Definition::TypeExtension(ext) =>
                    self.extensions.push((file_path.to_owned(), ext)),

                ast::schema::Definition::DirectiveDefinition(directive_def) =>
                    log::trace!(
                        "Ignoring the `@{}` directive definition in {file_path:?}.",
                        directive_def.name,
                    ),
            }
        }

        Ok(self)
    }

    pub fn new() -> Self {
        Self {
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            types: IndexMap::new(),
        }
    }

    fn add_pending_type(&mut self, pending: PendingType) -> Result<()> {
        let type_name = match &pending {
            PendingType::Enum(type_) => type_.name().to_string(),
            PendingType::InputObject(type_) => type_.name.to_owned(),
            PendingType::Object(type_) => type_.name.to_owned(),
            PendingType::OutputOnly { name, .. } => name.to_owned(),
            PendingType::Scalar(type_) => type_.name().to_string(),
        };

        if type_name.starts_with("__") {
            return Err(TypeGraphBuildError::InvalidDunderPrefixedTypeName {
                def_location: pending.def_location().to_owned(),
                type_name,
            });
        }

        if BUILTIN_SCALAR_NAMES.contains(&type_name.as_str()) {
            return Err(TypeGraphBuildError::DuplicateTypeDefinition {
                type_name,
                def1: loc::SourceLocation::GraphQLBuiltIn,
                def2: pending.def_location().to_owned(),
            });
        }

        if let Some(conflicting_type) = self.types.get(&type_name) {
            return Err(TypeGraphBuildError::DuplicateTypeDefinition {
                def1: conflicting_type.def_location().to_owned(),
                def2: pending.def_location().to_owned(),
                type_name,
            });
        }

        self.types.insert(type_name, pending);
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        let (type_name, ext_kind, ext_position) = match &ext {
            ast::schema::TypeExtension::Enum(ext) =>
                (ext.name.to_owned(), TypeKind::Enum, ext.position),
            ast::schema::TypeExtension::InputObject(ext) =>
                (ext.name.to_owned(), TypeKind::InputObject, ext.position),
            ast::schema::TypeExtension::Interface(ext) =>
                (ext.name.to_owned(), TypeKind::Interface, ext.position),
            ast::schema::TypeExtension::Object(ext) =>
                (ext.name.to_owned(), TypeKind::Object, ext.position),
            ast::schema::TypeExtension::Scalar(ext) =>
                (ext.name.to_owned(), TypeKind::Scalar, ext.position),
            ast::schema::TypeExtension::Union(ext) =>
                (ext.name.to_owned(), TypeKind::Union, ext.position),
        };
        let extension_location =
            loc::SourceLocation::from_schema_ast_position(file_path, &ext_position);

        let pending = match self.types.get_mut(&type_name) {
            Some(pending) if pending.kind() == ext_kind => pending,

            Some(pending) => return Err(TypeGraphBuildError::InvalidExtensionType {
                extension_kind: ext_kind,
                extension_location,
                kind: pending.kind(),
                type_name,
            }),

            None => return Err(TypeGraphBuildError::ExtensionOfUndefinedType {
                extension_location,
                type_name,
            }),
        };

        match (pending, ext) {
            (PendingType::Enum(enum_type),
             ast::schema::TypeExtension::Enum(ext)) => {
                for ext_val in ext.values {
                    let value_location = loc::SourceLocation::from_schema_ast_position(
                        file_path,
                        &ext_val.position,
                    );
                    if enum_type.values.iter().any(|val| val.name == ext_val.name) {
                        return Err(TypeGraphBuildError::DuplicateEnumValueDefinition {
                            enum_name: type_name,
                            value_def_location: value_location,
                            value_name: ext_val.name,
                        });
                    }
                    enum_type.values.push(enum_value_from_ast(ext_val));
                }
            },

            (PendingType::InputObject(inputobj_type),
             ast::schema::TypeExtension::InputObject(ext)) => {
                for ext_field in ext.fields {
                    let field = input_value_from_ast(file_path, ext_field);
                    insert_unique_field(inputobj_type, field)?;
                }
            },

            (PendingType::Object(obj_type),
             ast::schema::TypeExtension::Object(ext)) => {
                for ext_field in ext.fields {
                    let field = field_from_ast(file_path, ext_field);
                    insert_unique_field(obj_type, field)?;
                }
            },

            // Scalar, interface, and union extensions carry nothing a form
            // needs beyond confirming the extended type exists.
            _ => (),
        }

        Ok(())
    }

    fn operation_fields(
        &self,
        root_type_name: &str,
        resolver: &TypeRefResolver<'_>,
        errors: &mut Vec<TypeValidationError>,
    ) -> IndexMap<String, OperationField> {
        let Some(PendingType::Object(root_type)) = self.types.get(root_type_name) else {
            return IndexMap::new();
        };

        root_type.fields.values()
            .map(|field| {
                let parameters =
                    field.arguments.values()
                        .filter_map(|arg| {
                            let type_ref = resolver.resolve(
                                format!("{root_type_name}.{}({}:)", field.name, arg.name),
                                arg,
                                errors,
                            )?;
                            Some((arg.name.to_owned(), Parameter {
                                def_location: arg.def_location.to_owned(),
                                default_value: arg.default_value.to_owned(),
                                description: arg.description.to_owned(),
                                name: arg.name.to_owned(),
                                type_ref,
                            }))
                        })
                        .collect();

                (field.name.to_owned(), OperationField {
                    def_location: field.def_location.to_owned(),
                    description: field.description.to_owned(),
                    name: field.name.to_owned(),
                    parameters,
                })
            })
            .collect()
    }

    /// Determine the root operation type name for `kind`, falling back to the
    /// default name (`Query`/`Mutation`) when no schema definition overrides
    /// it.
    fn root_type_name(&self, kind: OperationKind) -> Result<Option<String>> {
        let explicit_root = match kind {
            OperationKind::Mutation => self.mutation_type.as_ref(),
            OperationKind::Query => self.query_type.as_ref(),
        };

        match explicit_root {
            Some(root) => match self.types.get(&root.type_name) {
                Some(PendingType::Object(_)) => Ok(Some(root.type_name.to_owned())),
                _ => Err(TypeGraphBuildError::InvalidRootOperationType {
                    def_location: root.def_location.to_owned(),
                    operation: kind,
                    type_name: root.type_name.to_owned(),
                }),
            },

            None => {
                let default_name = kind.default_root_type_name();
                match self.types.get(default_name) {
                    Some(PendingType::Object(_)) => Ok(Some(default_name.to_string())),
                    _ => Ok(None),
                }
            },
        }
    }

    fn set_root_type(
        &mut self,
        kind: OperationKind,
        root: NamedRootType,
    ) -> Result<()> {
        let slot = match kind {
            OperationKind::Mutation => &mut self.mutation_type,
            OperationKind::Query => &mut self.query_type,
        };

        if let Some(existing) = slot {
            return Err(TypeGraphBuildError::DuplicateRootOperationTypeDefinition {
                def1: existing.def_location.to_owned(),
                def2: root.def_location,
                operation: kind,
            });
        }

        *slot = Some(root);
        Ok(())
    }

    fn source_path(&mut self, file_path: Option<PathBuf>) -> PathBuf {
        if let Some(file_path) = file_path {
            file_path
        } else {
            let ctr = self.str_load_counter;
            self.str_load_counter += 1;
            PathBuf::from(format!("str://{ctr}"))
        }
    }

    fn visit_schema_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &schema_def.position,
        );

        if let Some(type_name) = schema_def.query {
            self.set_root_type(OperationKind::Query, NamedRootType {
                def_location: def_location.to_owned(),
                type_name,
            })?;
        }
        if let Some(type_name) = schema_def.mutation {
            self.set_root_type(OperationKind::Mutation, NamedRootType {
                def_location,
                type_name,
            })?;
        }

        Ok(())
    }

    fn visit_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        let pending = match type_def {
            ast::schema::TypeDefinition::Enum(def) => {
                let def_location = loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                );
                if def.values.is_empty() {
                    return Err(TypeGraphBuildError::EnumWithNoValues {
                        def_location,
                        type_name: def.name,
                    });
                }
                PendingType::Enum(EnumType {
                    def_location,
                    description: def.description,
                    name: def.name,
                    values: def.values.into_iter().map(enum_value_from_ast).collect(),
                })
            },

            ast::schema::TypeDefinition::InputObject(def) => {
                let mut inputobj_type = PendingFieldsType {
                    def_location: loc::SourceLocation::from_schema_ast_position(
                        file_path,
                        &def.position,
                    ),
                    description: def.description,
                    fields: IndexMap::new(),
                    name: def.name,
                };
                for field in def.fields {
                    let field = input_value_from_ast(file_path, field);
                    insert_unique_field(&mut inputobj_type, field)?;
                }
                PendingType::InputObject(inputobj_type)
            },

            ast::schema::TypeDefinition::Interface(def) => PendingType::OutputOnly {
                def_location: loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                ),
                kind: TypeKind::Interface,
                name: def.name,
            },

            ast::schema::TypeDefinition::Object(def) => {
                let mut obj_type = PendingFieldsType {
                    def_location: loc::SourceLocation::from_schema_ast_position(
                        file_path,
                        &def.position,
                    ),
                    description: def.description,
                    fields: IndexMap::new(),
                    name: def.name,
                };
                for field in def.fields {
                    let field = field_from_ast(file_path, field);
                    insert_unique_field(&mut obj_type, field)?;
                }
                PendingType::Object(obj_type)
            },

            ast::schema::TypeDefinition::Scalar(def) => PendingType::Scalar(ScalarType {
                def_location: loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                ),
                description: def.description,
                name: def.name,
            }),

            ast::schema::TypeDefinition::Union(def) => PendingType::OutputOnly {
                def_location: loc::SourceLocation::from_schema_ast_position(
                    file_path,
                    &def.position,
                ),
                kind: TypeKind::Union,
                name: def.name,
            },
        };

        self.add_pending_type(pending)
    }
}
impl Default for TypeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum TypeGraphBuildError {
    #[error(
        "The `{enum_name}` enum defines the `{value_name}` value more than \
        once ({value_def_location})"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_def_location: loc::SourceLocation,
        value_name: String,
    },

    #[error(
        "The `{type_name}.{field_name}` field is defined more than once: \
        {def1} and {def2}"
    )]
    DuplicateFieldNameDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("The {operation} root operation type is defined twice: {def1} and {def2}")]
    DuplicateRootOperationTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        operation: OperationKind,
    },

    #[error("Multiple definitions of the `{type_name}` type: {def1} and {def2}")]
    DuplicateTypeDefinition {
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
        type_name: String,
    },

    #[error("The `{type_name}` enum must define at least one value ({def_location})")]
    EnumWithNoValues {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type, but no such type is \
        defined ({extension_location})"
    )]
    ExtensionOfUndefinedType {
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Failed to decode the introspection result in {file:?}: {err}")]
    IntrospectionDecodeError {
        err: String,
        file: PathBuf,
    },

    #[error(
        "Type names starting with `__` are reserved for introspection: \
        `{type_name}` ({def_location})"
    )]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type is of kind {kind}, but is extended as a type \
        of kind {extension_kind} ({extension_location})"
    )]
    InvalidExtensionType {
        extension_kind: TypeKind,
        extension_location: loc::SourceLocation,
        kind: TypeKind,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type is declared as `{type_name}`, but \
        no object type with that name is defined ({def_location})"
    )]
    InvalidRootOperationType {
        def_location: loc::SourceLocation,
        operation: OperationKind,
        type_name: String,
    },

    #[error(
        "The introspection result in {file:?} contains a malformed type \
        reference on `{referencing}`"
    )]
    MalformedIntrospectionTypeRef {
        file: PathBuf,
        referencing: String,
    },

    #[error("No query root operation type is defined")]
    NoQueryOperationTypeDefined,

    #[error("Failed to parse {file:?}: {err}")]
    ParseError {
        err: String,
        file: PathBuf,
    },

    #[error(transparent)]
    SchemaFileReadError(Box<ReadContentError>),

    #[error(
        "Found {} invalid type references:\n{}",
        errors.len(),
        errors.iter()
            .map(|err| format!("  * {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

#[derive(Debug)]
struct NamedRootType {
    def_location: loc::SourceLocation,
    type_name: String,
}

/// Resolves name-based (AST) type references into [`TypeRef`]s once every
/// named type's kind is known.
struct TypeRefResolver<'a> {
    kinds: IndexMap<&'a str, TypeKind>,
}
impl TypeRefResolver<'_> {
    fn resolve(
        &self,
        referencing: String,
        input_value: &PendingInputValue,
        errors: &mut Vec<TypeValidationError>,
    ) -> Option<TypeRef> {
        self.resolve_impl(
            &referencing,
            &input_value.def_location,
            &input_value.value_type,
            errors,
        )
    }

    fn resolve_impl(
        &self,
        referencing: &str,
        ref_location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
        errors: &mut Vec<TypeValidationError>,
    ) -> Option<TypeRef> {
        match ast_type {
            ast::schema::Type::ListType(inner) => Some(TypeRef::list(
                self.resolve_impl(referencing, ref_location, inner, errors)?,
            )),

            ast::schema::Type::NonNullType(inner) => Some(TypeRef::non_null(
                self.resolve_impl(referencing, ref_location, inner, errors)?,
            )),

            ast::schema::Type::NamedType(name) => match self.kinds.get(name.as_str()) {
                Some(TypeKind::Enum) => Some(TypeRef::Enum(name.to_owned())),
                Some(TypeKind::InputObject) => Some(TypeRef::InputObject(name.to_owned())),
                Some(TypeKind::Scalar) => Some(TypeRef::Scalar(name.to_owned())),

                Some(kind) => {
                    errors.push(TypeValidationError::InvalidInputTypeReference {
                        kind: *kind,
                        ref_location: ref_location.to_owned(),
                        referencing: referencing.to_string(),
                        type_name: name.to_owned(),
                    });
                    None
                },

                None => {
                    errors.push(TypeValidationError::UndefinedTypeName {
                        ref_location: ref_location.to_owned(),
                        referencing: referencing.to_string(),
                        undefined_type_name: name.to_owned(),
                    });
                    None
                },
            },
        }
    }
}

fn enum_value_from_ast(value: ast::schema::EnumValue) -> EnumValue {
    EnumValue {
        deprecated: value.directives.iter().any(|d| d.name == "deprecated"),
        description: value.description,
        name: value.name,
    }
}

fn field_from_ast(file_path: &Path, field: ast::schema::Field) -> PendingField {
    PendingField {
        arguments: field.arguments
            .into_iter()
            .map(|arg| {
                let arg = input_value_from_ast(file_path, arg);
                (arg.name.to_owned(), arg)
            })
            .collect(),
        def_location: loc::SourceLocation::from_schema_ast_position(
            file_path,
            &field.position,
        ),
        description: field.description,
        name: field.name,
    }
}

fn input_value_from_ast(
    file_path: &Path,
    input_value: ast::schema::InputValue,
) -> PendingInputValue {
    PendingInputValue {
        def_location: loc::SourceLocation::from_schema_ast_position(
            file_path,
            &input_value.position,
        ),
        default_value: input_value.default_value.map(|value| value.to_string()),
        description: input_value.description,
        name: input_value.name,
        value_type: input_value.value_type,
    }
}

/// A field held by a [`PendingFieldsType`].
trait PendingFieldDef {
    fn def_location(&self) -> &loc::SourceLocation;
    fn field_name(&self) -> &str;
}
impl PendingFieldDef for PendingField {
    fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    fn field_name(&self) -> &str {
        self.name.as_str()
    }
}
impl PendingFieldDef for PendingInputValue {
    fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    fn field_name(&self) -> &str {
        self.name.as_str()
    }
}

fn insert_unique_field<TField: PendingFieldDef>(
    type_: &mut PendingFieldsType<TField>,
    field: TField,
) -> Result<()> {
    if let Some(existing_field) = type_.fields.get(field.field_name()) {
        return Err(TypeGraphBuildError::DuplicateFieldNameDefinition {
            def1: existing_field.def_location().to_owned(),
            def2: field.def_location().to_owned(),
            field_name: field.field_name().to_string(),
            type_name: type_.name.to_owned(),
        });
    }
    type_.fields.insert(field.field_name().to_string(), field);
    Ok(())
}

fn introspected_input_value(
    file_path: &Path,
    location: &loc::SourceLocation,
    referencing: String,
    input_value: IntrospectionInputValue,
) -> Result<PendingInputValue> {
    let value_type = input_value.type_ref.to_ast_type().ok_or_else(|| {
        TypeGraphBuildError::MalformedIntrospectionTypeRef {
            file: file_path.to_path_buf(),
            referencing,
        }
    })?;

    Ok(PendingInputValue {
        def_location: location.to_owned(),
        default_value: input_value.default_value,
        description: input_value.description,
        name: input_value.name,
        value_type,
    })
}

fn introspected_pending_type(
    location: &loc::SourceLocation,
    type_: IntrospectionType,
) -> Result<PendingType> {
    let file_path = match location {
        loc::SourceLocation::Introspection(file_path) => file_path.as_path(),
        _ => Path::new(""),
    };

    Ok(match type_.kind {
        TypeKind::Enum => PendingType::Enum(EnumType {
            def_location: location.to_owned(),
            description: type_.description,
            name: type_.name,
            values: type_.enum_values
                .unwrap_or_default()
                .into_iter()
                .map(|value| EnumValue {
                    deprecated: value.is_deprecated,
                    description: value.description,
                    name: value.name,
                })
                .collect(),
        }),

        TypeKind::InputObject => {
            let mut inputobj_type = PendingFieldsType {
                def_location: location.to_owned(),
                description: type_.description,
                fields: IndexMap::new(),
                name: type_.name,
            };
            for field in type_.input_fields.unwrap_or_default() {
                let referencing = format!("{}.{}", inputobj_type.name, field.name);
                let field = introspected_input_value(
                    file_path,
                    location,
                    referencing,
                    field,
                )?;
                insert_unique_field(&mut inputobj_type, field)?;
            }
            PendingType::InputObject(inputobj_type)
        },

        TypeKind::Object => {
            let mut obj_type = PendingFieldsType {
                def_location: location.to_owned(),
                description: type_.description,
                fields: IndexMap::new(),
                name: type_.name,
            };
            for field in type_.fields.unwrap_or_default() {
                let mut arguments = IndexMap::new();
                for arg in field.args {
                    let referencing =
                        format!("{}.{}({}:)", obj_type.name, field.name, arg.name);
                    let arg = introspected_input_value(
                        file_path,
                        location,
                        referencing,
                        arg,
                    )?;
                    arguments.insert(arg.name.to_owned(), arg);
                }
                let field = PendingField {
                    arguments,
                    def_location: location.to_owned(),
                    description: field.description,
                    name: field.name,
                };
                insert_unique_field(&mut obj_type, field)?;
            }
            PendingType::Object(obj_type)
        },

        TypeKind::Scalar => PendingType::Scalar(ScalarType {
            def_location: location.to_owned(),
            description: type_.description,
            name: type_.name,
        }),

        kind @ (TypeKind::Interface | TypeKind::Union) => PendingType::OutputOnly {
            def_location: location.to_owned(),
            kind,
            name: type_.name,
        },

        kind @ (TypeKind::List | TypeKind::NonNull) =>
            return Err(TypeGraphBuildError::MalformedIntrospectionTypeRef {
                file: file_path.to_path_buf(),
                referencing: format!("{} (a named type of kind {kind})", type_.name),
            }),
    })
}
