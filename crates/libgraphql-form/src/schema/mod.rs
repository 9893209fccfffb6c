mod introspection;
mod pending_type;
mod type_graph;
mod type_graph_builder;
mod type_validation_error;

pub use type_graph::TypeGraph;
pub use type_graph_builder::TypeGraphBuildError;
pub use type_graph_builder::TypeGraphBuilder;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
