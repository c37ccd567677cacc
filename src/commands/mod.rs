pub(crate) mod offline_count;
pub(crate) mod scan;

mod run_result;

pub use run_result::RunResult;
