use crate::types::TypeKind;

/// A reference to an input-compatible type as it appears on an argument or
/// input field, including any [non-null](https://spec.graphql.org/October2021/#sec-Non-Null)
/// and [list](https://spec.graphql.org/October2021/#sec-List) wrappers.
///
/// Named leaves carry the name of the referenced type and are resolved
/// against the owning [`TypeGraph`](crate::schema::TypeGraph).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    Enum(String),
    InputObject(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
    Scalar(String),
}
impl TypeRef {
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Follow every [`TypeRef::NonNull`] and [`TypeRef::List`] wrapper and
    /// return the inner-most named reference.
    pub fn innermost(&self) -> &TypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.innermost(),
            Self::Enum(_) | Self::InputObject(_) | Self::Scalar(_) => self,
        }
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            _ => false,
        }
    }

    /// Indicates if this reference itself (not any type it wraps) is
    /// non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The [`TypeKind`] of this reference. Wrappers report their own kind,
    /// not the kind of the type they wrap.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::List(_) => TypeKind::List,
            Self::NonNull(_) => TypeKind::NonNull,
            Self::Scalar(_) => TypeKind::Scalar,
        }
    }

    /// The name of the inner-most named type (e.g. `"Int"` for `[Int!]!`).
    pub fn named_type_name(&self) -> &str {
        self.named().name()
    }

    /// The inner-most named reference, with every wrapper stripped.
    pub fn named(&self) -> NamedTypeRef<'_> {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.named(),
            Self::Enum(name) => NamedTypeRef::Enum(name.as_str()),
            Self::InputObject(name) => NamedTypeRef::InputObject(name.as_str()),
            Self::Scalar(name) => NamedTypeRef::Scalar(name.as_str()),
        }
    }

    /// Strip all wrappers from this reference.
    ///
    /// Required-ness is read from this (outer-most) reference only: both
    /// `Int!` and `[Int!]!` are required, while `[Int!]` is not even though
    /// its items are.
    pub fn unwrapped(&self) -> Unwrapped<'_> {
        Unwrapped {
            leaf: self.named(),
            required: self.is_non_null(),
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enum(name)
            | Self::InputObject(name)
            | Self::Scalar(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// A [`TypeRef`] with all wrappers stripped away.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NamedTypeRef<'a> {
    Enum(&'a str),
    InputObject(&'a str),
    Scalar(&'a str),
}
impl<'a> NamedTypeRef<'a> {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
            Self::Scalar(_) => TypeKind::Scalar,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Self::Enum(name)
            | Self::InputObject(name)
            | Self::Scalar(name) => name,
        }
    }
}

/// The result of [`TypeRef::unwrapped()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Unwrapped<'a> {
    /// The inner-most named type.
    pub leaf: NamedTypeRef<'a>,

    /// Whether the outer-most reference was non-null.
    pub required: bool,
}
