mod build;
mod enums;
mod fields;
mod response;

use crate::Cli;
use crate::CommandResult;
use build::BuildCmd;
use enums::EnumsCmd;
use fields::FieldsCmd;
use libgraphql_form::types::OperationKind;
use response::ResponseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-form")]
pub(crate) enum CommandEnum {
    /// Fill in an operation's form fields and print the resulting operation.
    Build(Box<BuildCmd>),

    /// List every enum type in a schema along with its allowed values.
    Enums(Box<EnumsCmd>),

    /// List the form fields generated for an operation's arguments.
    Fields(Box<FieldsCmd>),

    /// Print the data or the error messages of a GraphQL response.
    Response(Box<ResponseCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Build(cmd) => cmd.run(cli).await,
            Self::Enums(cmd) => cmd.run(cli).await,
            Self::Fields(cmd) => cmd.run(cli).await,
            Self::Response(cmd) => cmd.run(cli).await,
        }
    }
}

fn operation_kind(is_query: bool) -> OperationKind {
    if is_query {
        OperationKind::Query
    } else {
        OperationKind::Mutation
    }
}
