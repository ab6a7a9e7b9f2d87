mod color;
mod layout;
mod meta;
mod profile;
mod typography;

pub use color::{ColorProfile, ColorRatios, ColorRole, PaletteEntry, WcagLevel, WcagPair};
pub use layout::{
    BorderRadiusMap, Effects, GridConfig, Spacing, SpacingStep, DEFAULT_BASE_UNIT, DEFAULT_GUTTER,
    DEFAULT_MARGIN, DEFAULT_TRANSITION, GRID_COLUMNS,
};
pub use meta::{DesignMeta, QualityScores, VisualWeight, WhitespaceUsage};
pub use profile::{DesignProfile, SourceType};
pub use typography::{FontEntry, FontFallback, FontRole, FontSystem, TypeScaleStep, Typography};
