use crate::commands::connection;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlink::transport::OutgoingRequest;

#[derive(Debug, clap::Args)]
pub(crate) struct SendCmd {
    #[arg(
        help="Name of the catalog operation to run (e.g. `Me`).",
        name="OPERATION_NAME",
    )]
    operation_name: String,

    #[arg(
        help="Bind a variable as `name=<json>`. Values that are not valid JSON \
             are sent as strings.",
        long="var",
        value_parser=parse_var,
    )]
    vars: Vec<(String, serde_json::Value)>,
}

#[inherent::inherent]
impl RunnableCommand for SendCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let session = match connection::connect() {
            Ok(session) => session,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let Some(operation) = session.catalog().get(&self.operation_name) else {
            return CommandResult::stderr(format_args!(
                "{} Unknown operation `{}`.",
                output_utils::RED_X,
                self.operation_name,
            ));
        };

        let request = self.vars.into_iter()
            .fold(
                OutgoingRequest::builder(operation.clone()),
                |builder, (name, value)| builder.bind(name, value),
            )
            .build();
        let request = match request {
            Ok(request) => request,
            Err(errors) => return CommandResult::stderr(format_args!(
                "{} Invalid variables for `{}`:\n{}",
                output_utils::RED_X,
                self.operation_name,
                output_utils::bullet_list(&errors),
            )),
        };

        log::debug!("Sending `{}`:\n{}", self.operation_name, request.query());
        let response = match session.client().execute(&request).await {
            Ok(response) => response,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Sending `{}` failed: {err}",
                output_utils::RED_X,
                self.operation_name,
            )),
        };

        let body = match serde_json::to_string_pretty(&response) {
            Ok(body) => body,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Response could not be printed: {err}",
                output_utils::RED_X,
            )),
        };

        let result = CommandResult::stdout(format_args!("{body}"));
        if response.has_errors() {
            result.with_failure(format_args!(
                "{} `{}` returned errors:\n{}",
                output_utils::RED_X,
                self.operation_name,
                output_utils::bullet_list(&response.errors),
            ))
        } else {
            result
        }
    }
}

/// Parse one `--var name=<json>` argument.
pub(super) fn parse_var(arg: &str) -> Result<(String, serde_json::Value), String> {
    let (name, raw_value) = arg.split_once('=')
        .ok_or_else(|| format!("expected `name=value`, found `{arg}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in `{arg}`"));
    }
    let name = name.strip_prefix('$').unwrap_or(name);

    let value = serde_json::from_str(raw_value)
        .unwrap_or_else(|_| serde_json::Value::String(raw_value.to_string()));
    Ok((name.to_string(), value))
}
