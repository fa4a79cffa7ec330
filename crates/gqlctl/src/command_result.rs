use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Keep `stdout` but report failure with `stderr` alongside it.
    pub fn with_failure(mut self, fmt_args: std::fmt::Arguments<'_>) -> Self {
        self.exit_code = ExitCode::FAILURE;
        self.stderr = Some(format!("{fmt_args}"));
        self
    }

    pub fn is_success(&self) -> bool {
        self.stderr.is_none()
    }
}
