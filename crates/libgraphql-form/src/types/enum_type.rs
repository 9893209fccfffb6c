use crate::loc;

/// Represents an [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: Vec<EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this [`EnumType`], in the order they were declared in the
    /// schema. Values added by a type extension follow the values of the
    /// original definition.
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn value_names(&self) -> Vec<&str> {
        self.values.iter().map(|value| value.name()).collect()
    }
}

/// One value of an [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) deprecated: bool,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
