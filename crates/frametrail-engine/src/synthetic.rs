//! Deterministic engine for tests and demos.
//!
//! [`SyntheticEngine`] honors the full [`CaptureEngine`] contract — frame
//! count, numbering, chunk layout, processing hand-off — without touching the
//! display or the filesystem. Files a real engine would write are traced
//! instead of created. Real-time pacing is off by default so a 10-second
//! session resolves instantly in tests; enable it for demos that should feel
//! like a live capture.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use async_trait::async_trait;
use frametrail_core::{
    CaptureConfig, ChunkPlan, EngineError, ImageData, ImageDataCollection, ProcessingType,
    ProcessorConfig,
};

use crate::{CaptureEngine, Frame, FrameProcessor, Uploader};

// Small fixed geometry keeps per-frame payloads cheap (64×36×4 bytes).
const FRAME_WIDTH: u32 = 64;
const FRAME_HEIGHT: u32 = 36;

// MARK: - SyntheticEngine

/// Capture engine that fabricates flat-color frames on a fixed geometry.
pub struct SyntheticEngine {
    processor: Arc<dyn FrameProcessor>,
    realtime: bool,
}

impl SyntheticEngine {
    pub fn new() -> Self {
        Self {
            processor: Arc::new(SyntheticProcessor),
            realtime: false,
        }
    }

    /// Route processed frames through a custom [`FrameProcessor`].
    pub fn with_processor(processor: Arc<dyn FrameProcessor>) -> Self {
        Self { processor, realtime: false }
    }

    /// Pace frame generation at the configured fps instead of resolving
    /// immediately.
    pub fn realtime(mut self, on: bool) -> Self {
        self.realtime = on;
        self
    }

    fn make_frame(&self, frame_number: u64) -> Frame {
        let fill = (frame_number % 251) as u8;
        let data = Bytes::from(vec![fill; (FRAME_WIDTH * FRAME_HEIGHT * 4) as usize]);
        Frame {
            data,
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            frame_number,
            timestamp: now_iso(),
        }
    }

    /// Trace the files a real engine would write for this session.
    fn trace_outputs(&self, session_id: &str, config: &CaptureConfig) {
        if let Some(dir) = &config.save_screenshot_to {
            for n in 1..=config.total_frames() {
                let path = dir.join(format!("frame_{n:04}.png"));
                debug!(file = %path.display(), "screenshot (synthetic, not written)");
            }
        }
        if let Some(dir) = &config.save_video_to {
            let plan = ChunkPlan::for_capture(config);
            for (index, seconds) in plan.durations().enumerate() {
                let path = dir.join(ChunkPlan::chunk_file_name(session_id, index as u64));
                debug!(file = %path.display(), seconds, "video chunk (synthetic, not written)");
            }
        }
    }

    async fn pace(&self, config: &CaptureConfig) {
        if self.realtime {
            tokio::time::sleep(config.frame_interval()).await;
        }
    }
}

impl Default for SyntheticEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptureEngine for SyntheticEngine {
    async fn capture_screen(&self, config: &CaptureConfig) -> Result<(), EngineError> {
        let session_id = format!("cap-{}", Uuid::new_v4());
        info!(
            session = %session_id,
            fps = config.fps,
            duration_s = config.duration_seconds,
            "synthetic capture session"
        );

        for n in 1..=config.total_frames() {
            self.pace(config).await;
            let _ = self.make_frame(n);
        }

        self.trace_outputs(&session_id, config);
        Ok(())
    }

    async fn capture_and_process_screen(
        &self,
        config: &CaptureConfig,
        processor: &ProcessorConfig,
    ) -> Result<ImageDataCollection, EngineError> {
        let session_id = format!("cap-{}", Uuid::new_v4());
        info!(
            session = %session_id,
            fps = config.fps,
            duration_s = config.duration_seconds,
            processing = %processor.processing_type,
            "synthetic capture-and-process session"
        );

        let mut results = ImageDataCollection::with_capacity(config.total_frames() as usize);
        for n in 1..=config.total_frames() {
            self.pace(config).await;
            let frame = self.make_frame(n);
            let data = self.processor.process_frame(&frame, processor).await?;
            results.push(data);
        }

        self.trace_outputs(&session_id, config);
        Ok(results)
    }
}

// MARK: - SyntheticProcessor

/// Processor that echoes frame geometry instead of running a model.
pub struct SyntheticProcessor;

#[async_trait]
impl FrameProcessor for SyntheticProcessor {
    async fn process_frame(
        &self,
        frame: &Frame,
        config: &ProcessorConfig,
    ) -> Result<ImageData, EngineError> {
        let content = match config.processing_type {
            ProcessingType::Ocr => {
                let model = config
                    .ocr_config
                    .as_ref()
                    .map_or("default", |c| c.ocr_model.as_str());
                format!(
                    "ocr[{model}] {}x{} frame {}",
                    frame.width, frame.height, frame.frame_number
                )
            }
            ProcessingType::Vision => {
                let model = config
                    .vision_config
                    .as_ref()
                    .and_then(|c| c.model.as_deref())
                    .unwrap_or("synthetic");
                format!(
                    "vision[{model}] {}x{} frame {}",
                    frame.width, frame.height, frame.frame_number
                )
            }
        };

        Ok(ImageData::new(
            frame.timestamp.clone(),
            frame.frame_number,
            content,
            config.processing_type,
        ))
    }
}

// MARK: - NullUploader

/// Uploader that accepts every delivery and does nothing with it.
pub struct NullUploader;

#[async_trait]
impl Uploader for NullUploader {
    async fn upload(&self) -> Result<(), EngineError> {
        debug!("synthetic upload accepted");
        Ok(())
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
