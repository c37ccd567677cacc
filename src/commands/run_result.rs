use crate::report::ScanReport;

/// Result of running a deplens command.
pub enum RunResult {
    Scan {
        report: ScanReport,
        /// Emit JSON instead of the human-readable listing.
        json: bool,
    },
    OfflineCount(usize),
    Init {
        /// The config file that was created.
        path: String,
    },
}
