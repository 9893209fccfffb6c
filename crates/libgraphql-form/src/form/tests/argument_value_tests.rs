use crate::form::render_argument_list;
use crate::form::ArgumentTree;
use crate::form::ArgumentValue;

fn object<const N: usize>(entries: [(&str, ArgumentValue); N]) -> ArgumentTree {
    entries.into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

#[test]
fn scalars_render_as_graphql_literals() {
    assert_eq!(ArgumentValue::Int(42).to_string(), "42");
    assert_eq!(ArgumentValue::Int(-3).to_string(), "-3");
    assert_eq!(ArgumentValue::Float(2.5).to_string(), "2.5");
    assert_eq!(ArgumentValue::Boolean(true).to_string(), "true");
    assert_eq!(ArgumentValue::Null.to_string(), "null");
    assert_eq!(ArgumentValue::Enum("PUBLISHED".to_string()).to_string(), "PUBLISHED");
    assert_eq!(ArgumentValue::String("Hello".to_string()).to_string(), "\"Hello\"");
}

#[test]
fn non_finite_float_renders_as_null() {
    assert_eq!(ArgumentValue::Float(f64::NAN).to_string(), "null");
    assert_eq!(ArgumentValue::Float(f64::INFINITY).to_string(), "null");
}

#[test]
fn strings_are_escaped() {
    let value = ArgumentValue::String("say \"hi\"\\\n\ttab".to_string());
    assert_eq!(value.to_string(), r#""say \"hi\"\\\n\ttab""#);
}

#[test]
fn string_values_that_look_like_keys_are_left_quoted() {
    let tree = object([
        ("title", ArgumentValue::String("\"note\": read me".to_string())),
        ("body", ArgumentValue::String("{\"a\":1}".to_string())),
    ]);

    assert_eq!(
        render_argument_list(&tree),
        r#"title: "\"note\": read me", body: "{\"a\":1}""#,
    );
}

#[test]
fn objects_and_lists_nest() {
    let value = ArgumentValue::Object(object([
        ("title", ArgumentValue::String("Hello".to_string())),
        ("tags", ArgumentValue::List(vec![
            ArgumentValue::String("a".to_string()),
            ArgumentValue::String("b".to_string()),
        ])),
        ("author", ArgumentValue::Object(object([
            ("name", ArgumentValue::String("Ada".to_string())),
        ]))),
        ("empty", ArgumentValue::List(vec![])),
    ]));

    assert_eq!(
        value.to_graphql_string(),
        r#"{title: "Hello", tags: ["a", "b"], author: {name: "Ada"}, empty: []}"#,
    );
}

#[test]
fn argument_list_keeps_insertion_order() {
    let tree = object([
        ("zeta", ArgumentValue::Int(1)),
        ("alpha", ArgumentValue::Int(2)),
    ]);

    assert_eq!(render_argument_list(&tree), "zeta: 1, alpha: 2");
    assert_eq!(render_argument_list(&ArgumentTree::new()), "");
}
