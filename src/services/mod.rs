pub mod annotator;
pub mod renderer;
pub mod summary;

pub use annotator::annotate;
pub use renderer::{annotation_notes, render_spans, RenderOptions};
pub use summary::{AnnotationStats, ErrorSummary};
