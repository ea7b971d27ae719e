//! frametrail-engine — capture-side contracts for the frametrail pipeline.
//!
//! The pipeline never reads pixels or runs OCR itself; it drives collaborators
//! through the traits defined here:
//!
//! ```text
//! Pipeline ──► CaptureEngine::capture_screen ───────────► (files on disk)
//!          ──► CaptureEngine::capture_and_process_screen
//!                     │ per frame
//!                     ▼
//!               FrameProcessor::process_frame ──► ImageData
//!
//! Pipeline ──► Uploader::upload  (alternate sink, mutually exclusive)
//! ```
//!
//! Real engines bind a platform capture stack and an OCR/vision backend. The
//! in-tree [`SyntheticEngine`] implements the same contracts deterministically
//! with no display, model, or filesystem access, so pipeline behavior can be
//! exercised anywhere.

use async_trait::async_trait;
use bytes::Bytes;
use frametrail_core::{CaptureConfig, EngineError, ImageData, ImageDataCollection, ProcessorConfig};

pub mod synthetic;

pub use synthetic::{NullUploader, SyntheticEngine, SyntheticProcessor};

// MARK: - Frame

/// One raw captured frame, as handed to a [`FrameProcessor`].
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data, BGRA (4 bytes per pixel).
    pub data: Bytes,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Sequential frame index within the session, starting at 1.
    pub frame_number: u64,
    /// Capture instant, ISO-8601.
    pub timestamp: String,
}

// MARK: - CaptureEngine

/// A subsystem that captures the display and optionally persists the result.
///
/// Implementations own frame cadence, chunk boundaries, and all file I/O;
/// the pipeline issues one logical request per run and awaits one response.
#[async_trait]
pub trait CaptureEngine: Send + Sync {
    /// Capture for the configured duration, writing screenshots and video
    /// chunks to the configured directories if set.
    async fn capture_screen(&self, config: &CaptureConfig) -> Result<(), EngineError>;

    /// Capture and feed every frame through the processing stage, returning
    /// one [`ImageData`] per frame, ordered by ascending `frame_number`.
    async fn capture_and_process_screen(
        &self,
        config: &CaptureConfig,
        processor: &ProcessorConfig,
    ) -> Result<ImageDataCollection, EngineError>;
}

// MARK: - FrameProcessor

/// Text/vision extraction over a single captured frame.
#[async_trait]
pub trait FrameProcessor: Send + Sync {
    /// Produce the [`ImageData`] record for `frame`, tagged with the
    /// configured processing type.
    async fn process_frame(
        &self,
        frame: &Frame,
        config: &ProcessorConfig,
    ) -> Result<ImageData, EngineError>;
}

// MARK: - Uploader

/// Alternate terminal sink: captured data is delivered remotely instead of
/// being captured and processed locally. Delivery details (what is sent,
/// where, with what retries) live entirely inside the implementation.
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self) -> Result<(), EngineError>;
}
