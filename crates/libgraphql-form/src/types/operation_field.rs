use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// A field defined on the query or mutation root type. Each one is an
/// operation a form can be generated for.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationField {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
}
impl OperationField {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments of this field in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}
