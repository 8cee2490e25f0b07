//! Command implementations

pub mod analyze;
pub mod play;
pub mod run;

pub use analyze::{AnalysisResult, analyze_guess};
pub use play::run_play;
pub use run::{RoundStep, RunResult, run_script};
