pub mod correction;
pub mod loaders;
pub mod span;

pub use correction::{AnalysisResult, Category, Correction, ErrorEntry};
pub use loaders::{load_all_analysis_results, load_analysis_result, AnalysisFile, LoadedResults};
pub use span::{reconstruct, AnnotatedSpan};
