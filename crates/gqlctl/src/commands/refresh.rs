use crate::commands::connection;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct RefreshCmd {}

#[inherent::inherent]
impl RunnableCommand for RefreshCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let session = match connection::connect() {
            Ok(session) => session,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        match session.refresh().await {
            Ok(_) => CommandResult::stdout(format_args!(
                "{} Credentials refreshed.",
                output_utils::GREEN_CHECK,
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Refresh failed: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
