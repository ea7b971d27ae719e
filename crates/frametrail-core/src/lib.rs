pub mod chunk;
pub mod config;
pub mod errors;
pub mod types;

pub use chunk::ChunkPlan;
pub use config::{CaptureConfig, CaptureOverrides, OcrConfig, ProcessorConfig, ProcessorOverrides, VisionConfig};
pub use errors::{EngineError, PipelineError};
pub use types::*;
