use crate::form::tests::test_utils;
use crate::form::tests::test_utils::path;
use crate::form::tests::test_utils::values;
use crate::form::validate;
use crate::form::FieldCompileError;
use crate::form::FieldValues;
use crate::form::SchemaFieldCompiler;
use crate::form::ValidationError;
use crate::types::OperationKind;

type Result<T> = std::result::Result<T, FieldCompileError>;

#[test]
fn missing_required_fields_are_reported_in_descriptor_order() -> Result<()> {
    let graph = test_utils::blog_graph();
    let descriptors = SchemaFieldCompiler::new(&graph)
        .compile_operation(OperationKind::Mutation, "publishPost")?;

    let errors = validate(&descriptors, &FieldValues::new());

    assert!(errors.has_errors());
    let paths: Vec<String> = errors.paths().map(ToString::to_string).collect();
    assert_eq!(paths, vec!["id", "input.when.date", "input.author.name"]);
    assert_eq!(
        errors.get(&path("id")),
        Some(&ValidationError::MissingRequiredField { path: path("id") }),
    );
    assert_eq!(errors.get(&path("notify")), None);

    Ok(())
}

#[test]
fn empty_text_counts_as_missing() -> Result<()> {
    let graph = test_utils::blog_graph();
    let descriptors = SchemaFieldCompiler::new(&graph)
        .compile_operation(OperationKind::Mutation, "createPost")?;

    let errors = validate(&descriptors, &values([("input.title", "".into())]));

    assert_eq!(errors.len(), 1);
    assert!(errors.get(&path("input.title")).is_some());
    assert_eq!(errors.to_string(), "`input.title` is required");

    Ok(())
}

#[test]
fn filled_required_fields_pass() -> Result<()> {
    let graph = test_utils::blog_graph();
    let descriptors = SchemaFieldCompiler::new(&graph)
        .compile_operation(OperationKind::Mutation, "createPost")?;

    let errors = validate(&descriptors, &values([
        ("input.title", "Hello".into()),
        ("input.published", "".into()),
    ]));

    assert!(!errors.has_errors());
    assert!(errors.is_empty());

    Ok(())
}

#[test]
fn boolean_false_is_a_value() -> Result<()> {
    let graph = test_utils::graph_from_str(concat!(
        "type Query { ping: Boolean }\n",
        "type Mutation { toggle(on: Boolean!): Boolean }\n",
    ));
    let descriptors = SchemaFieldCompiler::new(&graph)
        .compile_operation(OperationKind::Mutation, "toggle")?;

    let errors = validate(&descriptors, &values([("on", false.into())]));

    assert!(errors.is_empty());

    Ok(())
}

#[test]
fn omitting_one_required_field_reports_exactly_that_field() -> Result<()> {
    let graph = test_utils::blog_graph();
    let descriptors = SchemaFieldCompiler::new(&graph)
        .compile_operation(OperationKind::Mutation, "publishPost")?;
    let complete = values([
        ("id", "p1".into()),
        ("input.when.date", "2024-01-01".into()),
        ("input.author.name", "Ada".into()),
    ]);

    for descriptor in descriptors.iter().filter(|descriptor| descriptor.is_required()) {
        let mut partial = complete.clone();
        partial.shift_remove(descriptor.path());

        let errors = validate(&descriptors, &partial);
        let paths: Vec<_> = errors.paths().collect();
        assert_eq!(paths, vec![descriptor.path()]);
    }

    Ok(())
}
