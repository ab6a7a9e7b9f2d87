pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod profile;
pub mod types;

pub use analysis::{ColorAnalysisService, PixelSource, RawCssData, SemanticAnalysis, StyleNormalizer};
pub use config::Configuration;
pub use error::{AppError, ConfigError, PipelineError};
pub use export::{generate_exports, ExportFormats, ExportedProfile};
pub use pipeline::{AnalysisPipeline, AnalysisPipelineBuilder};
pub use profile::{assemble, AssemblerInputs};
pub use types::DesignProfile;
