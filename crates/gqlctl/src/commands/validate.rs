use crate::commands::connection;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlink::catalog;
use gqlink::schema_check::SchemaIndex;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(super) graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files. The bundled schema is used when omitted.",
        name="FILE_OR_DIR_PATHS",
    )]
    pub(super) file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
pub(super) struct FileScan {
    pub errors: Vec<String>,
    pub file_paths: Vec<PathBuf>,
    pub num_non_graphql_files: usize,
}

/// Find all schema files recursively located at or under each of `paths`.
pub(super) fn collect_graphql_files(paths: &[PathBuf], graphql_file_exts: &[String]) -> FileScan {
    // Normalize the set of file extensions to filter with
    let graphql_file_exts: HashSet<String> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut scan = FileScan::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    scan.errors.push(err.to_string());
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue
            }

            log::trace!("Found file at {entry_path:#?}.");
            if let Some(ext) = entry_path.extension().map(|s| s.to_string_lossy())
                && graphql_file_exts.contains(&*ext) {
                scan.file_paths.push(entry_path.to_path_buf());
            } else {
                scan.num_non_graphql_files += 1;
            }
        }
    }

    // A single file passed explicitly is validated whatever its extension.
    if scan.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to validate {first_arg_path:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        scan.num_non_graphql_files = scan.num_non_graphql_files.saturating_sub(1);
        scan.file_paths.push(first_arg_path.to_owned());
    }

    log::debug!("Found {} schema files.", scan.file_paths.len());
    scan
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (sources, scan) =
            if self.file_or_dir_paths.is_empty() {
                log::debug!("No schema paths given; using the bundled schema.");
                (vec![catalog::SCHEMA_SDL.to_string()], FileScan::default())
            } else {
                let mut scan = collect_graphql_files(
                    &self.file_or_dir_paths,
                    &self.graphql_file_exts,
                );
                let mut sources = vec![];
                for path in &scan.file_paths {
                    match tokio::fs::read_to_string(path).await {
                        Ok(content) => sources.push(content),
                        Err(err) => scan.errors.push(format!("{path:?}: {err}")),
                    }
                }
                (sources, scan)
            };

        if !scan.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors reading schema files:\n{}",
                output_utils::RED_X,
                output_utils::bullet_list(&scan.errors),
            ));
        }
        if sources.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No schema files found.",
                output_utils::RED_X,
            ));
        }

        let index = match SchemaIndex::from_sdl_documents(&sources) {
            Ok(index) => index,
            Err(errors) => return CommandResult::stderr(format_args!(
                "{} Errors indexing schema:\n{}",
                output_utils::RED_X,
                output_utils::bullet_list(&errors),
            )),
        };

        let catalog = match connection::load_catalog() {
            Ok(catalog) => catalog,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let operations = catalog.all();
        let mut failures = vec![];
        for op in &operations {
            if let Err(errors) = index.check(op) {
                failures.push(format!(
                    "{}:\n{}",
                    op.name().unwrap_or("<anonymous>"),
                    output_utils::bullet_list(&errors),
                ));
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} of {} operations do not match the schema:\n{}",
                output_utils::RED_X,
                failures.len(),
                operations.len(),
                failures.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All operations validated successfully:\n",
                "  * Analyzed {} schema files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            scan.file_paths.len().max(sources.len()),
            scan.num_non_graphql_files,
            operations.len(),
        ))
    }
}
