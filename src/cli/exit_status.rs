use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// analysis tools.
///
/// - `Success` (0): Command completed, all files processed
/// - `Failure` (1): Command completed but some files could not be processed
/// - `Error` (2): Command failed due to internal error (config error, bad path, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, all files processed.
    Success,
    /// Command completed but some files could not be processed.
    Failure,
    /// Command failed due to internal error (config error, bad path, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
