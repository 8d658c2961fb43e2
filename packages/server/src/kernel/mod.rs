//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use ai::{LazyGenAI, GEMINI_2_5_FLASH};
pub use deps::ServerDeps;
pub use test_dependencies::TestDependencies;
pub use traits::*;
