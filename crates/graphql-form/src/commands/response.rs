use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_form::response::ExecutionResponse;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ResponseCmd {
    #[arg(
        help="Path to a JSON-encoded GraphQL response. Reads stdin when \
             omitted or `-`.",
        name="RESPONSE_PATH",
    )]
    response_path: Option<PathBuf>,
}
impl ResponseCmd {
    fn read_response(&self) -> anyhow::Result<ExecutionResponse> {
        let content = match &self.response_path {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("Unable to read response file {path:?}"))?,
            _ => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)
                    .context("Unable to read the response from stdin")?;
                content
            },
        };
        Ok(ExecutionResponse::from_json_str(content.as_str())?)
    }
}

#[inherent::inherent]
impl RunnableCommand for ResponseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let response = match self.read_response() {
            Ok(response) => response,
            Err(err) => return CommandResult::error(err),
        };

        match response.into_result() {
            Ok(data) => match serde_json::to_string_pretty(&data) {
                Ok(data) => CommandResult::stdout(format_args!(
                    "{} {data}",
                    output_utils::GREEN_CHECK,
                )),
                Err(err) => CommandResult::error(err.into()),
            },

            Err(messages) => CommandResult::stderr(format_args!(
                "{} The operation failed:\n{}",
                output_utils::RED_X,
                messages.iter()
                    .map(|message| format!("  * {message}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),
        }
    }
}
