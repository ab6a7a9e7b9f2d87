pub mod color;
pub mod semantic;
pub mod style;

pub use color::{ColorAnalysisService, PixelSource, SemanticSwatches};
pub use semantic::{DetectedFont, SemanticAnalysis};
pub use style::{RawCssData, StyleNormalizer, StyleProfile};
