use super::exit_status::ExitStatus;
use crate::commands::RunResult;

/// Map a command result onto the process exit status.
pub fn exit_status_from_result(result: &RunResult) -> ExitStatus {
    match result {
        RunResult::Scan { report, .. } if !report.failures.is_empty() => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
