pub mod runner;

pub use runner::{print_report, run_batch, BatchReport, ProblemReport};
