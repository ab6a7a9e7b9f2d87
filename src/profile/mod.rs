pub mod assembler;

pub use assembler::{assemble, AssemblerInputs};
pub use crate::types::DesignProfile;
