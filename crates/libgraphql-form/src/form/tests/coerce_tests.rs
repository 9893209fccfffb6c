use crate::form::coerce;
use crate::form::ArgumentValue;
use crate::form::CoercionError;
use crate::form::FieldDescriptor;
use crate::form::LeafKind;
use crate::form::RawValue;
use crate::form::tests::test_utils::path;
use crate::types::TypeRef;

type Result<T> = std::result::Result<T, CoercionError>;

mod boolean {
    use super::*;

    #[test]
    fn only_exact_true_text_is_true() -> Result<()> {
        assert_eq!(coerce(&"true".into(), "Boolean")?, ArgumentValue::Boolean(true));
        assert_eq!(coerce(&"false".into(), "Boolean")?, ArgumentValue::Boolean(false));
        assert_eq!(coerce(&"".into(), "Boolean")?, ArgumentValue::Boolean(false));
        assert_eq!(coerce(&"maybe".into(), "Boolean")?, ArgumentValue::Boolean(false));
        assert_eq!(coerce(&"TRUE".into(), "Boolean")?, ArgumentValue::Boolean(false));
        assert_eq!(coerce(&" true".into(), "Boolean")?, ArgumentValue::Boolean(false));

        Ok(())
    }

    #[test]
    fn genuine_booleans_pass_through() -> Result<()> {
        assert_eq!(coerce(&true.into(), "Boolean")?, ArgumentValue::Boolean(true));
        assert_eq!(coerce(&false.into(), "Boolean")?, ArgumentValue::Boolean(false));

        Ok(())
    }
}

mod numbers {
    use super::*;

    #[test]
    fn int_parses_base_10() -> Result<()> {
        assert_eq!(coerce(&"42".into(), "Int")?, ArgumentValue::Int(42));
        assert_eq!(coerce(&"-7".into(), "Int")?, ArgumentValue::Int(-7));
        assert_eq!(coerce(&" 12 ".into(), "Int")?, ArgumentValue::Int(12));

        Ok(())
    }

    #[test]
    fn non_numeric_int_is_an_error() {
        assert_eq!(
            coerce(&"forty-two".into(), "Int"),
            Err(CoercionError::InvalidInt { raw: "forty-two".to_string() }),
        );
        assert_eq!(
            coerce(&"4.5".into(), "Int"),
            Err(CoercionError::InvalidInt { raw: "4.5".to_string() }),
        );
        assert_eq!(
            coerce(&"42abc".into(), "Int"),
            Err(CoercionError::InvalidInt { raw: "42abc".to_string() }),
        );
        assert_eq!(
            coerce(&"3.0".into(), "Int"),
            Err(CoercionError::InvalidInt { raw: "3.0".to_string() }),
        );
        assert_eq!(
            coerce(&"".into(), "Int"),
            Err(CoercionError::InvalidInt { raw: "".to_string() }),
        );
        assert_eq!(
            coerce(&true.into(), "Int"),
            Err(CoercionError::InvalidInt { raw: "true".to_string() }),
        );
    }

    #[test]
    fn float_parses_decimal_and_exponent_forms() -> Result<()> {
        assert_eq!(coerce(&"3.25".into(), "Float")?, ArgumentValue::Float(3.25));
        assert_eq!(coerce(&"1e3".into(), "Float")?, ArgumentValue::Float(1000.0));
        assert_eq!(coerce(&"7".into(), "Float")?, ArgumentValue::Float(7.0));

        Ok(())
    }

    #[test]
    fn non_finite_float_is_an_error() {
        assert_eq!(
            coerce(&"NaN".into(), "Float"),
            Err(CoercionError::InvalidFloat { raw: "NaN".to_string() }),
        );
        assert_eq!(
            coerce(&"inf".into(), "Float"),
            Err(CoercionError::InvalidFloat { raw: "inf".to_string() }),
        );
        assert_eq!(
            coerce(&"abc".into(), "Float"),
            Err(CoercionError::InvalidFloat { raw: "abc".to_string() }),
        );
    }
}

#[test]
fn other_types_pass_through_unchanged() -> Result<()> {
    for type_name in ["String", "ID", "DateTime", "Status"] {
        assert_eq!(
            coerce(&RawValue::from("  42 "), type_name)?,
            ArgumentValue::String("  42 ".to_string()),
        );
    }
    assert_eq!(coerce(&true.into(), "JSON")?, ArgumentValue::Boolean(true));

    Ok(())
}

fn status_descriptor(enum_values: &[&str]) -> FieldDescriptor {
    FieldDescriptor {
        enum_values: enum_values.iter().map(|value| value.to_string()).collect(),
        is_required: true,
        leaf_kind: LeafKind::Enum,
        leaf_type_name: "Status".to_string(),
        path: path("status"),
        type_ref: TypeRef::non_null(TypeRef::Enum("Status".to_string())),
    }
}

mod enums {
    use super::*;

    #[test]
    fn declared_value_coerces_to_enum_value() -> Result<()> {
        let descriptor = status_descriptor(&["DRAFT", "PUBLISHED"]);

        assert_eq!(
            descriptor.coerce(&"PUBLISHED".into())?,
            ArgumentValue::Enum("PUBLISHED".to_string()),
        );

        Ok(())
    }

    #[test]
    fn undeclared_value_is_an_error() {
        let descriptor = status_descriptor(&["DRAFT", "PUBLISHED"]);

        for raw in ["", "ARCHIVED", "draft", " DRAFT", "DRAFT) { id }"] {
            assert_eq!(
                descriptor.coerce(&raw.into()),
                Err(CoercionError::InvalidEnum {
                    enum_name: "Status".to_string(),
                    raw: raw.to_string(),
                }),
            );
        }
    }

    #[test]
    fn boolean_is_not_an_enum_value() {
        let descriptor = status_descriptor(&["DRAFT", "PUBLISHED"]);

        assert_eq!(
            descriptor.coerce(&true.into()),
            Err(CoercionError::InvalidEnum {
                enum_name: "Status".to_string(),
                raw: "true".to_string(),
            }),
        );
    }

    #[test]
    fn without_known_values_any_graphql_name_is_accepted() -> Result<()> {
        let descriptor = status_descriptor(&[]);

        assert_eq!(
            descriptor.coerce(&"_Any_1".into())?,
            ArgumentValue::Enum("_Any_1".to_string()),
        );
        for raw in ["", "1ST", "A B", "A}"] {
            assert!(matches!(
                descriptor.coerce(&raw.into()),
                Err(CoercionError::InvalidEnum { .. }),
            ));
        }

        Ok(())
    }
}
