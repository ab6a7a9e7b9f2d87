pub mod effects;
pub mod fonts;
pub mod raw;
pub mod spacing;
pub mod style_normalizer;

pub use raw::RawCssData;
pub use style_normalizer::{StyleNormalizer, StyleProfile};
