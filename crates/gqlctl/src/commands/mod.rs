mod connection;
mod login;
mod logout;
mod print;
mod refresh;
mod send;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use login::LoginCmd;
use logout::LogoutCmd;
use print::PrintCmd;
use refresh::RefreshCmd;
use send::SendCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlctl")]
pub(crate) enum CommandEnum {
    /// Log in and store the returned credentials.
    Login(Box<LoginCmd>),

    /// End the current session and forget its credentials.
    Logout(Box<LogoutCmd>),

    /// Print catalog operations as GraphQL.
    Print(Box<PrintCmd>),

    /// Exchange the stored refresh token for new credentials.
    Refresh(Box<RefreshCmd>),

    /// Run one catalog operation against the configured endpoint.
    Send(Box<SendCmd>),

    /// Check every catalog operation against a schema.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Login(cmd) => cmd.run(cli).await,
            Self::Logout(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Refresh(cmd) => cmd.run(cli).await,
            Self::Send(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
