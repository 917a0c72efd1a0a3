//! Command implementations

pub mod analyze;
pub mod audit;
pub mod check;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_word};
pub use audit::run_audit;
pub use check::{CheckResult, check_guess};
pub use simple::{run_simple, run_simple_with};
