use crate::loc;
use crate::schema::TypeGraph;
use crate::schema::TypeGraphBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::OperationKind;
use crate::types::TypeKind;
use crate::types::TypeRef;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, TypeGraphBuildError>;

const BLOG_SCHEMA: &str = concat!(
    "type Query {\n",
    "  post(id: ID!): Post\n",
    "}\n",
    "type Post {\n",
    "  id: ID!\n",
    "  title: String\n",
    "}\n",
    "type Mutation {\n",
    "  createPost(input: CreatePostInput!): Post\n",
    "  updatePost(id: Int!, status: Status): Post\n",
    "}\n",
    "input CreatePostInput {\n",
    "  title: String!\n",
    "  published: Boolean\n",
    "}\n",
    "enum Status {\n",
    "  DRAFT\n",
    "  PUBLISHED\n",
    "}\n",
);

fn build_from_str(sdl: &str) -> Result<TypeGraph> {
    TypeGraph::builder()
        .load_str(None, sdl)?
        .build()
}

mod build_operations {
    use super::*;

    #[test]
    fn root_operations_keep_declaration_order() -> Result<()> {
        let graph = build_from_str(BLOG_SCHEMA)?;

        assert_eq!(graph.query_type_name(), "Query");
        assert_eq!(graph.mutation_type_name(), Some("Mutation"));

        let mutation_names: Vec<&str> = graph.operations(OperationKind::Mutation)
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(mutation_names, vec!["createPost", "updatePost"]);

        let query_names: Vec<&str> = graph.operations(OperationKind::Query)
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(query_names, vec!["post"]);

        Ok(())
    }

    #[test]
    fn operation_parameters_resolve_to_type_refs() -> Result<()> {
        let graph = build_from_str(BLOG_SCHEMA)?;

        let update_post = graph.operation(OperationKind::Mutation, "updatePost")
            .expect("updatePost is defined");
        let params: Vec<(&str, String)> = update_post.parameters()
            .values()
            .map(|param| (param.name(), param.type_ref().to_string()))
            .collect();
        assert_eq!(params, vec![
            ("id", "Int!".to_string()),
            ("status", "Status".to_string()),
        ]);
        assert_eq!(
            update_post.parameters()["status"].type_ref(),
            &TypeRef::Enum("Status".to_string()),
        );

        let create_post = graph.operation(OperationKind::Mutation, "createPost")
            .expect("createPost is defined");
        assert_eq!(
            create_post.parameters()["input"].type_ref(),
            &TypeRef::non_null(TypeRef::InputObject("CreatePostInput".to_string())),
        );

        Ok(())
    }

    #[test]
    fn unknown_operation_is_absent() -> Result<()> {
        let graph = build_from_str(BLOG_SCHEMA)?;

        assert!(graph.operation(OperationKind::Mutation, "deletePost").is_none());
        // Query fields are not mutation fields.
        assert!(graph.operation(OperationKind::Mutation, "post").is_none());

        Ok(())
    }

    #[test]
    fn schema_definition_overrides_root_type_names() -> Result<()> {
        let graph = build_from_str(concat!(
            "schema {\n",
            "  query: RootQuery\n",
            "  mutation: RootMutation\n",
            "}\n",
            "type RootQuery { ping: Boolean }\n",
            "type RootMutation { reset(force: Boolean): Boolean }\n",
        ))?;

        assert_eq!(graph.query_type_name(), "RootQuery");
        assert_eq!(graph.mutation_type_name(), Some("RootMutation"));
        assert!(graph.operation(OperationKind::Mutation, "reset").is_some());

        Ok(())
    }

    #[test]
    fn schema_without_mutation_type_has_no_mutations() -> Result<()> {
        let graph = build_from_str("type Query { ping: Boolean }")?;

        assert_eq!(graph.mutation_type_name(), None);
        assert!(graph.operations(OperationKind::Mutation).is_empty());

        Ok(())
    }

    #[test]
    fn missing_query_type_is_an_error() {
        let result = build_from_str("type Mutation { reset: Boolean }");

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::NoQueryOperationTypeDefined),
        ));
    }

    #[test]
    fn root_type_must_be_an_object_type() {
        let result = build_from_str(concat!(
            "schema { query: Query mutation: Payload }\n",
            "type Query { ping: Boolean }\n",
            "input Payload { value: Int }\n",
        ));

        let Err(TypeGraphBuildError::InvalidRootOperationType {
            operation,
            type_name,
            ..
        }) = result else {
            panic!("Expected InvalidRootOperationType");
        };
        assert_eq!(operation, OperationKind::Mutation);
        assert_eq!(type_name, "Payload");
    }
}

mod build_types {
    use super::*;

    #[test]
    fn builtin_scalars_are_always_defined() -> Result<()> {
        let graph = build_from_str("type Query { ping: Boolean }")?;

        for name in ["Boolean", "Float", "ID", "Int", "String"] {
            let scalar = graph.get_type(name)
                .and_then(GraphQLType::as_scalar)
                .expect("built-in scalar");
            assert!(scalar.is_builtin());
            assert_eq!(scalar.def_location(), &loc::SourceLocation::GraphQLBuiltIn);
        }

        Ok(())
    }

    #[test]
    fn output_only_types_are_not_kept() -> Result<()> {
        let graph = build_from_str(BLOG_SCHEMA)?;

        assert!(graph.get_type("Post").is_none());
        assert!(graph.get_type("Query").is_none());
        assert_eq!(
            graph.get_type("CreatePostInput").map(GraphQLType::kind),
            Some(TypeKind::InputObject),
        );

        Ok(())
    }

    #[test]
    fn input_object_fields_keep_declaration_order() -> Result<()> {
        let graph = build_from_str(BLOG_SCHEMA)?;

        let input = graph.input_object("CreatePostInput")
            .expect("CreatePostInput is defined");
        let fields: Vec<(&str, String)> = input.fields()
            .values()
            .map(|field| (field.name(), field.type_ref().to_string()))
            .collect();
        assert_eq!(fields, vec![
            ("title", "String!".to_string()),
            ("published", "Boolean".to_string()),
        ]);
        assert_eq!(input.def_location(), &loc::SourceLocation::Schema(
            loc::FilePosition {
                col: 1,
                file: PathBuf::from("str://0"),
                line: 12,
            },
        ));

        Ok(())
    }

    #[test]
    fn input_field_default_values_are_kept_as_literals() -> Result<()> {
        let graph = build_from_str(concat!(
            "type Query { posts(filter: PostFilter): Boolean }\n",
            "input PostFilter {\n",
            "  limit: Int = 10\n",
            "  status: Status = DRAFT\n",
            "  tag: String\n",
            "}\n",
            "enum Status { DRAFT PUBLISHED }\n",
        ))?;

        let filter = graph.input_object("PostFilter").expect("PostFilter is defined");
        assert_eq!(filter.fields()["limit"].default_value(), Some("10"));
        assert_eq!(filter.fields()["status"].default_value(), Some("DRAFT"));
        assert_eq!(filter.fields()["tag"].default_value(), None);

        Ok(())
    }

    #[test]
    fn enum_values_are_mapped_per_schema() -> Result<()> {
        let graph = build_from_str(concat!(
            "type Query { ping: Boolean }\n",
            "enum Status { DRAFT PUBLISHED }\n",
            "enum Visibility {\n",
            "  PUBLIC\n",
            "  PRIVATE @deprecated(reason: \"use UNLISTED\")\n",
            "  UNLISTED\n",
            "}\n",
        ))?;

        let enum_values = graph.enum_values();
        assert_eq!(enum_values.len(), 2);
        assert_eq!(enum_values["Status"], vec!["DRAFT", "PUBLISHED"]);
        assert_eq!(enum_values["Visibility"], vec!["PUBLIC", "PRIVATE", "UNLISTED"]);

        let visibility = graph.enum_type("Visibility").expect("Visibility is defined");
        let deprecated: Vec<bool> = visibility.values()
            .iter()
            .map(|value| value.is_deprecated())
            .collect();
        assert_eq!(deprecated, vec![false, true, false]);

        Ok(())
    }

    #[test]
    fn custom_scalars_are_kept() -> Result<()> {
        let graph = build_from_str(concat!(
            "type Query { at(time: DateTime!): Boolean }\n",
            "\"An ISO-8601 timestamp\"\n",
            "scalar DateTime\n",
        ))?;

        let scalar = graph.get_type("DateTime")
            .and_then(GraphQLType::as_scalar)
            .expect("DateTime is defined");
        assert!(!scalar.is_builtin());
        assert_eq!(scalar.description(), Some("An ISO-8601 timestamp"));

        Ok(())
    }

    #[test]
    fn enum_without_values_is_an_error() {
        let result = TypeGraph::builder().load_str(None, "enum Empty");

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::EnumWithNoValues { type_name, .. })
                if type_name == "Empty",
        ));
    }
}

mod type_extensions {
    use super::*;

    #[test]
    fn extensions_merge_into_extended_types() -> Result<()> {
        let graph = TypeGraph::builder()
            // Extensions may be loaded before the types they extend.
            .load_str(None, concat!(
                "extend input CreatePostInput { status: Status }\n",
                "extend enum Status { ARCHIVED }\n",
                "extend type Mutation { deletePost(id: ID!): Boolean }\n",
            ))?
            .load_str(None, BLOG_SCHEMA)?
            .build()?;

        let input_fields: Vec<&str> = graph.input_object("CreatePostInput")
            .expect("CreatePostInput is defined")
            .fields()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(input_fields, vec!["title", "published", "status"]);

        assert_eq!(
            graph.enum_values()["Status"],
            vec!["DRAFT", "PUBLISHED", "ARCHIVED"],
        );

        let mutation_names: Vec<&str> = graph.operations(OperationKind::Mutation)
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(mutation_names, vec!["createPost", "updatePost", "deletePost"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type_is_an_error() -> Result<()> {
        let result = TypeGraph::builder()
            .load_str(None, "type Query { ping: Boolean }\nextend input Missing { a: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_of_wrong_kind_is_an_error() -> Result<()> {
        let result = TypeGraph::builder()
            .load_str(None, BLOG_SCHEMA)?
            .load_str(None, "extend enum CreatePostInput { EXTRA }")?
            .build();

        let Err(TypeGraphBuildError::InvalidExtensionType {
            extension_kind,
            kind,
            type_name,
            ..
        }) = result else {
            panic!("Expected InvalidExtensionType");
        };
        assert_eq!(extension_kind, TypeKind::Enum);
        assert_eq!(kind, TypeKind::InputObject);
        assert_eq!(type_name, "CreatePostInput");

        Ok(())
    }

    #[test]
    fn extension_redefining_enum_value_is_an_error() -> Result<()> {
        let result = TypeGraph::builder()
            .load_str(None, BLOG_SCHEMA)?
            .load_str(None, "extend enum Status { DRAFT }")?
            .build();

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::DuplicateEnumValueDefinition { value_name, .. })
                if value_name == "DRAFT",
        ));

        Ok(())
    }
}

mod build_errors {
    use super::*;

    #[test]
    fn duplicate_type_across_sources() -> Result<()> {
        let result = TypeGraph::builder()
            .load_str(None, "input Point { x: Int }")?
            .load_str(None, "input Point { y: Int }");

        let Err(TypeGraphBuildError::DuplicateTypeDefinition {
            def1,
            def2,
            type_name,
        }) = result else {
            panic!("Expected DuplicateTypeDefinition");
        };
        assert_eq!(type_name, "Point");
        assert_eq!(def1, loc::SourceLocation::Schema(loc::FilePosition {
            col: 1,
            file: PathBuf::from("str://0"),
            line: 1,
        }));
        assert_eq!(def2, loc::SourceLocation::Schema(loc::FilePosition {
            col: 1,
            file: PathBuf::from("str://1"),
            line: 1,
        }));

        Ok(())
    }

    #[test]
    fn redefining_builtin_scalar_is_an_error() {
        let result = TypeGraph::builder().load_str(None, "scalar Int");

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::DuplicateTypeDefinition {
                def1: loc::SourceLocation::GraphQLBuiltIn,
                ..
            }),
        ));
    }

    #[test]
    fn dunder_prefixed_type_name_is_an_error() {
        let result = TypeGraph::builder().load_str(None, "input __Secret { a: Int }");

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::InvalidDunderPrefixedTypeName { .. }),
        ));
    }

    #[test]
    fn duplicate_input_field_is_an_error() {
        let result = TypeGraph::builder()
            .load_str(None, "input Point { x: Int x: Float }");

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::DuplicateFieldNameDefinition {
                field_name,
                type_name,
                ..
            }) if field_name == "x" && type_name == "Point",
        ));
    }

    #[test]
    fn parse_error_reports_source() {
        let result = TypeGraph::builder().load_str(None, "input Point {");

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::ParseError { file, .. })
                if file == PathBuf::from("str://0"),
        ));
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let result = TypeGraph::builder()
            .load_file("/this/path/does/not/exist.graphql");

        assert!(matches!(
            result,
            Err(TypeGraphBuildError::SchemaFileReadError(_)),
        ));
    }

    #[test]
    fn invalid_type_references_are_aggregated() {
        let result = build_from_str(concat!(
            "type Query {\n",
            "  search(filter: Missing, post: Post): Boolean\n",
            "}\n",
            "type Post { id: ID! }\n",
            "input Nested { other: AlsoMissing }\n",
        ));

        let Err(TypeGraphBuildError::TypeValidationErrors { errors }) = result else {
            panic!("Expected TypeValidationErrors");
        };
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            &errors[0],
            TypeValidationError::UndefinedTypeName {
                referencing,
                undefined_type_name,
                ..
            } if referencing == "Nested.other" && undefined_type_name == "AlsoMissing",
        ));
        assert!(matches!(
            &errors[1],
            TypeValidationError::UndefinedTypeName {
                referencing,
                undefined_type_name,
                ..
            } if referencing == "Query.search(filter:)" && undefined_type_name == "Missing",
        ));
        assert!(matches!(
            &errors[2],
            TypeValidationError::InvalidInputTypeReference {
                kind: TypeKind::Object,
                referencing,
                type_name,
                ..
            } if referencing == "Query.search(post:)" && type_name == "Post",
        ));
    }
}
