//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;
pub mod survey;

pub use analyze::analyze_root;
pub use check::{CheckReport, check_words};
pub use simple::run_simple;
pub use survey::{SurveyStatistics, run_survey};
