//! Command implementations

pub mod locate;
pub mod solve;
pub mod survey;

pub use locate::{LocateResult, locate_word};
pub use solve::{SolveResult, solve_board};
pub use survey::{SurveyConfig, SurveyResult, run_survey};
