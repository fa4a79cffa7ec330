
use crate::Cli;

fn quiet_cli() -> Cli {
    Cli {
        cmd: None,
        verbose: false,
    }
}
