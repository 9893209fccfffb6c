use crate::commands::operation_kind;
use crate::output_utils;
use crate::schema_loader::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_form::form::CoercionPolicy;
use libgraphql_form::form::FieldPath;
use libgraphql_form::form::FormSession;
use libgraphql_form::form::RawValue;
use libgraphql_form::form::SelectionSet;
use libgraphql_form::form::SerializeOptions;
use libgraphql_form::form::SubmitError;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct BuildCmd {
    #[arg(
        help="Print the operation as a JSON request body (`{\"query\": ...}`) \
             instead of as a bare GraphQL string.",
        long,
    )]
    json: bool,

    #[arg(
        help="Name of the operation to build.",
        long,
        short='o',
        required=true,
    )]
    operation: String,

    #[arg(
        help="Look the operation up on the query root type instead of the \
             mutation root type.",
        long,
    )]
    query: bool,

    #[arg(
        help="Fields to select on the operation's result, separated by commas \
             or spaces. Pass an empty string to select nothing.",
        long,
        default_value="id",
    )]
    selection: String,

    #[arg(
        help="Assign a value to a form field, e.g. `--set input.title=Hello`. \
             May be repeated; later assignments win.",
        long="set",
        value_name="PATH=VALUE",
        value_parser=parse_assignment,
    )]
    assignments: Vec<(FieldPath, String)>,

    #[arg(
        help="Fail when an Int or Float field's value is not a valid number \
             instead of sending `null`.",
        long,
    )]
    strict: bool,

    #[arg(
        help="JSON file of form values. Keys are field paths (`input.title`) \
             or nested objects mirroring them; values may be strings, \
             numbers, or booleans. `--set` assignments are applied after it.",
        long,
        value_name="FILE",
    )]
    values: Option<PathBuf>,

    #[command(flatten)]
    schema: SchemaArgs,
}
impl BuildCmd {
    fn build(&self) -> anyhow::Result<Result<String, SubmitError>> {
        let graph = self.schema.load()?;
        let mut session = FormSession::with_options(SerializeOptions {
            coercion: if self.strict {
                CoercionPolicy::Strict
            } else {
                CoercionPolicy::Lenient
            },
            selection_set: SelectionSet::parse(self.selection.as_str()),
        });
        session.select_operation(
            &graph,
            operation_kind(self.query),
            self.operation.as_str(),
        )?;

        if let Some(values_path) = &self.values {
            for (path, value) in read_values_file(values_path)? {
                session.set_value(&path, value)?;
            }
        }
        for (path, value) in &self.assignments {
            session.set_value(path, value.as_str())?;
        }

        if self.json {
            Ok(match session.request() {
                Ok(request) => Ok(serde_json::to_string_pretty(&request)?),
                Err(err) => Err(err),
            })
        } else {
            Ok(session.submit().map(|operation| operation.to_string()))
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for BuildCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.build() {
            Ok(Ok(output)) => CommandResult::stdout(format_args!("{output}")),

            Ok(Err(SubmitError::Validation(errors))) => CommandResult::stderr(format_args!(
                "{} {} required fields are missing:\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|(_, err)| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),

            Ok(Err(err)) => CommandResult::stderr(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),

            Err(err) => CommandResult::error(err),
        }
    }
}

pub(super) fn parse_assignment(arg: &str) -> Result<(FieldPath, String), String> {
    let (path, value) = arg.split_once('=').ok_or_else(|| {
        format!("expected PATH=VALUE, found `{arg}`")
    })?;
    let path = path.trim().parse::<FieldPath>().map_err(|err| err.to_string())?;
    Ok((path, value.to_string()))
}

fn read_values_file(file_path: &Path) -> anyhow::Result<Vec<(FieldPath, RawValue)>> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Unable to read values file {file_path:?}"))?;
    let json: serde_json::Value = serde_json::from_str(content.as_str())
        .with_context(|| format!("Values file {file_path:?} is not valid JSON"))?;
    let serde_json::Value::Object(entries) = json else {
        anyhow::bail!("Values file {file_path:?} must contain a JSON object");
    };

    let mut values = vec![];
    collect_values(None, entries, &mut values)?;
    log::debug!("Read {} form values from {file_path:?}.", values.len());
    Ok(values)
}

pub(super) fn collect_values(
    parent: Option<&FieldPath>,
    entries: serde_json::Map<String, serde_json::Value>,
    values: &mut Vec<(FieldPath, RawValue)>,
) -> anyhow::Result<()> {
    for (key, value) in entries {
        let key_path = key.parse::<FieldPath>()
            .with_context(|| format!("Invalid field path `{key}` in values file"))?;
        let path = match parent {
            Some(parent) => key_path.segments()
                .iter()
                .try_fold(parent.to_owned(), |path, segment| path.child(segment.as_str()))?,
            None => key_path,
        };

        let raw = match value {
            serde_json::Value::Object(entries) => {
                collect_values(Some(&path), entries, values)?;
                continue;
            },
            serde_json::Value::Bool(value) => RawValue::Boolean(value),
            serde_json::Value::Number(number) => RawValue::Text(number_text(&number)),
            serde_json::Value::String(text) => RawValue::Text(text),
            serde_json::Value::Null => {
                log::debug!("Skipping null value for `{path}`.");
                continue;
            },
            serde_json::Value::Array(_) => anyhow::bail!(
                "`{path}` has a list value; form fields take a single value",
            ),
        };
        values.push((path, raw));
    }
    Ok(())
}

/// Integral numbers (including exponent forms such as `1e2`) are written
/// without a fraction so they still coerce to `Int`.
fn number_text(number: &serde_json::Number) -> String {
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER =>
            format!("{}", value as i64),
        _ => number.to_string(),
    }
}
