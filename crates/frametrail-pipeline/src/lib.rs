//! frametrail-pipeline — the capture/process pipeline orchestrator.
//!
//! A [`Pipeline`] holds resolved configuration, enforces the
//! capturer/uploader exclusivity rule, and drives one capture session per
//! [`Pipeline::run`] call against an injected
//! [`CaptureEngine`](frametrail_engine::CaptureEngine):
//!
//! ```text
//!  set_capturer ──┐                 ┌─► capture_screen            → []
//!  set_uploader ──┼─► Pipeline::run ┼─► capture_and_process_screen → [ImageData…]
//!  set_processor ─┘                 └─► Uploader::upload           → []
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), frametrail_core::PipelineError> {
//! use std::sync::Arc;
//! use frametrail_core::{CaptureOverrides, ProcessorOverrides};
//! use frametrail_engine::SyntheticEngine;
//! use frametrail_pipeline::Pipeline;
//!
//! let mut pipeline = Pipeline::new(Arc::new(SyntheticEngine::new()));
//! pipeline.set_capturer(CaptureOverrides { fps: Some(2), ..Default::default() })?;
//! pipeline.set_processor(ProcessorOverrides::default());
//!
//! let results = pipeline.run().await?;
//! for data in &results {
//!     println!("[{}] #{} {}", data.timestamp, data.frame_number, data.content);
//! }
//! # Ok(())
//! # }
//! ```

mod pipeline;

pub use pipeline::{Pipeline, Sink};
