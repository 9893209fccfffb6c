//! Owned (`'static`) aliases for the `graphql_parser` SDL AST nodes a
//! [`TypeGraphBuilder`](crate::schema::TypeGraphBuilder) visits.

pub mod schema {
    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
}
