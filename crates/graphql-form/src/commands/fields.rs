use crate::commands::operation_kind;
use crate::output_utils;
use crate::schema_loader::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_form::form::FieldDescriptor;
use libgraphql_form::form::LeafKind;
use libgraphql_form::form::SchemaFieldCompiler;
use libgraphql_form::schema::TypeGraph;
use libgraphql_form::types::OperationKind;

#[derive(Debug, clap::Args)]
pub(crate) struct FieldsCmd {
    #[arg(
        help="Name of the operation to list form fields for. When omitted, \
             every operation of the selected kind is listed instead.",
        long,
        short='o',
    )]
    operation: Option<String>,

    #[arg(
        help="Look the operation up on the query root type instead of the \
             mutation root type.",
        long,
    )]
    query: bool,

    #[command(flatten)]
    schema: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for FieldsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graph = match self.schema.load() {
            Ok(graph) => graph,
            Err(err) => return CommandResult::error(err),
        };
        let kind = operation_kind(self.query);

        let Some(operation_name) = self.operation.as_deref() else {
            return CommandResult::stdout(format_args!(
                "{}",
                list_operations(&graph, kind),
            ));
        };

        match SchemaFieldCompiler::new(&graph).compile_operation(kind, operation_name) {
            Ok(descriptors) => CommandResult::stdout(format_args!(
                "{}",
                describe_fields(&descriptors),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),
        }
    }
}

fn list_operations(graph: &TypeGraph, kind: OperationKind) -> String {
    let operations = graph.operations(kind);
    if operations.is_empty() {
        return format!("The schema defines no {kind} operations.");
    }

    operations.values()
        .map(|operation| {
            let params = operation.parameters()
                .values()
                .map(|param| format!("{}: {}", param.name(), param.type_ref()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{kind} {}({params})", operation.name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_fields(descriptors: &[FieldDescriptor]) -> String {
    if descriptors.is_empty() {
        return "This operation takes no arguments.".to_string();
    }

    descriptors.iter()
        .map(|descriptor| {
            let mut line = format!("{}: {}", descriptor.path(), descriptor.type_ref());
            if descriptor.is_required() {
                line.push_str(" (required)");
            }
            if descriptor.leaf_kind() == LeafKind::Enum {
                line.push_str(&format!(" [{}]", descriptor.enum_values().join(", ")));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
