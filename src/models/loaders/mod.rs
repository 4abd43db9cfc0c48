pub mod json_loader;

pub use json_loader::{load_all_analysis_results, load_analysis_result, AnalysisFile, LoadedResults};
