pub mod color_analysis_service;
pub mod metrics;
pub mod sampling;
pub mod swatch;

pub use color_analysis_service::ColorAnalysisService;
pub use sampling::{ColorHistogram, PixelSource};
pub use swatch::{SemanticSwatches, Swatch, SwatchKind};
