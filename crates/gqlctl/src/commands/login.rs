use crate::commands::connection;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlink::config;

const PASSWORD_ENV_VAR: &str = "GQLCTL_PASSWORD";

#[derive(Debug, clap::Args)]
pub(crate) struct LoginCmd {
    #[arg(help="Email address to log in with.", long)]
    email: String,

    #[arg(
        help="Password to log in with. Falls back to the `GQLCTL_PASSWORD` \
             environment variable.",
        long,
    )]
    password: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for LoginCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let password = match self.password.map_or_else(|| config::get_env(PASSWORD_ENV_VAR), Ok) {
            Ok(password) => password,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} No password given: {err}",
                output_utils::RED_X,
            )),
        };

        let session = match connection::connect() {
            Ok(session) => session,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        match session.login(&self.email, &password).await {
            Ok(_) => CommandResult::stdout(format_args!(
                "{} Logged in as {}.",
                output_utils::GREEN_CHECK,
                self.email,
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Login failed: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
