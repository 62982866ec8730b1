pub mod engine;
pub mod normalizer;

pub use engine::*;
pub use normalizer::*;
