use crate::commands::connection;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct LogoutCmd {}

#[inherent::inherent]
impl RunnableCommand for LogoutCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let session = match connection::connect() {
            Ok(session) => session,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        match session.logout().await {
            Ok(()) => CommandResult::stdout(format_args!(
                "{} Logged out.",
                output_utils::GREEN_CHECK,
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Stored credentials were cleared, but the endpoint reported: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
