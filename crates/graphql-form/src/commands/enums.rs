use crate::schema_loader::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct EnumsCmd {
    #[command(flatten)]
    schema: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for EnumsCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graph = match self.schema.load() {
            Ok(graph) => graph,
            Err(err) => return CommandResult::error(err),
        };

        let enum_values = graph.enum_values();
        if enum_values.is_empty() {
            return CommandResult::stdout(format_args!("The schema defines no enums."));
        }

        CommandResult::stdout(format_args!(
            "{}",
            enum_values.iter()
                .map(|(name, values)| format!("{name}: {}", values.join(", ")))
                .collect::<Vec<_>>()
                .join("\n"),
        ))
    }
}
