use crate::form::flatten;
use crate::form::tests::test_utils::path;
use crate::form::unflatten;
use crate::form::ArgumentValue;
use crate::form::FieldPath;
use crate::form::UnflattenError;

type Result<T> = std::result::Result<T, UnflattenError>;

fn string(value: &str) -> ArgumentValue {
    ArgumentValue::String(value.to_string())
}

#[test]
fn shared_prefixes_share_one_intermediate_object() -> Result<()> {
    let tree = unflatten([
        (path("input.author.name"), string("Ada")),
        (path("input.title"), string("Hello")),
        (path("input.author.email"), string("ada@example.com")),
        (path("id"), ArgumentValue::Int(1)),
    ])?;

    assert_eq!(tree.len(), 2);
    let input = tree["input"].as_object().expect("input is an object");
    assert_eq!(input.keys().collect::<Vec<_>>(), vec!["author", "title"]);
    let author = input["author"].as_object().expect("author is an object");
    assert_eq!(author.keys().collect::<Vec<_>>(), vec!["name", "email"]);
    assert_eq!(tree["id"], ArgumentValue::Int(1));

    Ok(())
}

#[test]
fn empty_input_yields_empty_tree() -> Result<()> {
    let tree = unflatten(Vec::<(FieldPath, ArgumentValue)>::new())?;
    assert!(tree.is_empty());

    Ok(())
}

#[test]
fn descending_through_a_scalar_is_a_conflict() {
    let result = unflatten([
        (path("input"), string("flat")),
        (path("input.title"), string("Hello")),
    ]);

    assert_eq!(result, Err(UnflattenError::PathConflict {
        conflicting_path: path("input"),
        path: path("input.title"),
    }));
}

#[test]
fn replacing_an_object_with_a_scalar_is_a_conflict() {
    let result = unflatten([
        (path("input.author.name"), string("Ada")),
        (path("input.author"), string("Ada")),
    ]);

    assert_eq!(result, Err(UnflattenError::PathConflict {
        conflicting_path: path("input.author"),
        path: path("input.author"),
    }));
}

#[test]
fn flatten_walks_leaves_in_pre_order() -> Result<()> {
    let pairs = vec![
        (path("id"), ArgumentValue::Int(7)),
        (path("input.when.date"), string("2024-01-01")),
        (path("input.author.name"), string("Ada")),
        (path("input.status"), ArgumentValue::Enum("DRAFT".to_string())),
        (path("notify"), ArgumentValue::Boolean(false)),
    ];

    let tree = unflatten(pairs.clone())?;
    assert_eq!(flatten(&tree), pairs);

    Ok(())
}
