use crate::types::NamedTypeRef;
use crate::types::TypeKind;
use crate::types::TypeRef;

fn int() -> TypeRef {
    TypeRef::Scalar("Int".to_string())
}

mod unwrapped {
    use super::*;

    #[test]
    fn named_type_is_its_own_leaf() {
        let type_ref = int();
        let unwrapped = type_ref.unwrapped();

        assert_eq!(unwrapped.leaf, NamedTypeRef::Scalar("Int"));
        assert!(!unwrapped.required);
    }

    #[test]
    fn non_null_named_type_is_required() {
        let type_ref = TypeRef::non_null(int());
        let unwrapped = type_ref.unwrapped();

        assert_eq!(unwrapped.leaf, NamedTypeRef::Scalar("Int"));
        assert!(unwrapped.required);
    }

    #[test]
    fn list_of_non_null_items_is_not_required() {
        // [Int!]
        let type_ref = TypeRef::list(TypeRef::non_null(int()));
        let unwrapped = type_ref.unwrapped();

        assert_eq!(unwrapped.leaf, NamedTypeRef::Scalar("Int"));
        assert!(!unwrapped.required);
    }

    #[test]
    fn non_null_list_is_required() {
        // [Int]!
        let type_ref = TypeRef::non_null(TypeRef::list(int()));
        let unwrapped = type_ref.unwrapped();

        assert_eq!(unwrapped.leaf, NamedTypeRef::Scalar("Int"));
        assert!(unwrapped.required);
    }

    #[test]
    fn deeply_nested_wrappers_unwrap_to_leaf() {
        // [[Status!]!]
        let type_ref = TypeRef::list(TypeRef::non_null(TypeRef::list(
            TypeRef::non_null(TypeRef::Enum("Status".to_string())),
        )));
        let unwrapped = type_ref.unwrapped();

        assert_eq!(unwrapped.leaf, NamedTypeRef::Enum("Status"));
        assert_eq!(unwrapped.leaf.kind(), TypeKind::Enum);
        assert!(!unwrapped.required);
        assert_eq!(type_ref.innermost(), &TypeRef::Enum("Status".to_string()));
    }
}

#[test]
fn display_uses_graphql_annotation_syntax() {
    let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(int())));
    assert_eq!(type_ref.to_string(), "[Int!]!");

    let type_ref = TypeRef::list(TypeRef::InputObject("PostInput".to_string()));
    assert_eq!(type_ref.to_string(), "[PostInput]");
}

#[test]
fn wrapper_predicates() {
    let type_ref = TypeRef::non_null(TypeRef::list(int()));
    assert!(type_ref.is_non_null());
    assert!(type_ref.is_list());
    assert_eq!(type_ref.kind(), TypeKind::NonNull);
    assert_eq!(type_ref.named_type_name(), "Int");

    let type_ref = TypeRef::list(TypeRef::non_null(int()));
    assert!(!type_ref.is_non_null());
    assert!(type_ref.is_list());
    assert_eq!(type_ref.kind(), TypeKind::List);
}

#[test]
fn type_kind_deserializes_from_introspection_names() {
    let kind: TypeKind = serde_json::from_str("\"INPUT_OBJECT\"")
        .expect("valid kind");
    assert_eq!(kind, TypeKind::InputObject);

    let kind: TypeKind = serde_json::from_str("\"NON_NULL\"")
        .expect("valid kind");
    assert_eq!(kind, TypeKind::NonNull);
    assert!(kind.is_wrapper());
    assert!(!TypeKind::Object.is_input_kind());
}
