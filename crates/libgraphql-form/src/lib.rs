//! Turns the arguments of a GraphQL query or mutation field into a flat,
//! ordered list of form fields, and turns the values entered into those
//! fields back into a GraphQL operation string.
//!
//! The pipeline has three stages:
//!
//! 1. A [`TypeGraph`](schema::TypeGraph) is built from GraphQL SDL or from an
//!    introspection result using [`TypeGraphBuilder`](schema::TypeGraphBuilder).
//! 2. [`SchemaFieldCompiler`](form::SchemaFieldCompiler) flattens a selected
//!    operation's arguments into [`FieldDescriptor`](form::FieldDescriptor)s
//!    whose dotted [`FieldPath`](form::FieldPath)s mirror nested input
//!    objects.
//! 3. [`ArgumentSerializer`](form::ArgumentSerializer) coerces the entered
//!    values, rebuilds the nested argument tree, and renders the
//!    [`Operation`](form::Operation).
//!
//! [`FormSession`](form::FormSession) threads all three stages together for
//! a single form.

pub mod ast;
mod file_reader;
pub mod loc;
pub mod form;
pub mod response;
pub mod schema;
pub mod types;

pub use file_reader::ReadContentError;
