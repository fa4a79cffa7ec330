use crate::commands::connection;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlink::link::is_credential_refresh;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Only list operation names, kinds and variables.",
        long,
    )]
    pub(super) list: bool,

    #[arg(
        help="Operation names to print (e.g. `Login`). Prints every operation \
             when omitted.",
        name="OPERATION_NAMES",
    )]
    pub(super) operation_names: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let catalog = match connection::load_catalog() {
            Ok(catalog) => catalog,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let operations =
            if self.operation_names.is_empty() {
                catalog.all()
            } else {
                let mut operations = vec![];
                let mut unknown = vec![];
                for name in &self.operation_names {
                    match catalog.get(name) {
                        Some(op) => operations.push(op),
                        None => unknown.push(format!("`{name}`")),
                    }
                }
                if !unknown.is_empty() {
                    return CommandResult::stderr(format_args!(
                        "{} Unknown operation(s): {}",
                        output_utils::RED_X,
                        unknown.join(", "),
                    ));
                }
                operations
            };

        let rendered: Vec<String> = operations.iter()
            .map(|op| {
                if self.list {
                    let variables = op.variables()
                        .values()
                        .map(|var| var.to_graphql_string())
                        .collect::<Vec<_>>();
                    format!(
                        "{} {}{}{}",
                        op.kind(),
                        op.name().unwrap_or("<anonymous>"),
                        if variables.is_empty() {
                            String::new()
                        } else {
                            format!("({})", variables.join(", "))
                        },
                        if is_credential_refresh(op) { " [credential refresh]" } else { "" },
                    )
                } else {
                    op.to_graphql_string()
                }
            })
            .collect();

        let separator = if self.list { "\n" } else { "\n\n" };
        CommandResult::stdout(format_args!("{}", rendered.join(separator)))
    }
}
