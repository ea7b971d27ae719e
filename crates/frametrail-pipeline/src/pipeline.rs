//! `Pipeline` — sink state machine plus the single `run()` entry point.

use std::sync::Arc;

use tracing::{debug, info};

use frametrail_core::{
    CaptureConfig, CaptureOverrides, ChunkPlan, ImageDataCollection, PipelineError,
    ProcessorConfig, ProcessorOverrides,
};
use frametrail_engine::{CaptureEngine, Uploader};

// ── Sink ──────────────────────────────────────────────────────────────────────

/// Terminal sink for captured data. Capturer and uploader are alternative
/// destinations; holding them in one variant makes "both set" unrepresentable.
#[derive(Default)]
pub enum Sink {
    /// No sink configured yet.
    #[default]
    None,
    /// Capture locally (optionally process each frame).
    Capturer(CaptureConfig),
    /// Deliver captured data to a remote collaborator instead.
    Uploader(Arc<dyn Uploader>),
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Capturer(config) => f.debug_tuple("Capturer").field(config).finish(),
            Self::Uploader(_) => write!(f, "Uploader(..)"),
        }
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Capture/process pipeline orchestrator.
///
/// Construction injects the [`CaptureEngine`]; setters resolve and store
/// configuration; [`run`](Self::run) drives exactly one session. Stored
/// configuration is immutable while `run` is in flight (`run` borrows the
/// pipeline shared) and is never mutated by a run, so repeated runs are
/// independent sessions.
pub struct Pipeline {
    engine: Arc<dyn CaptureEngine>,
    sink: Sink,
    processor: Option<ProcessorConfig>,
}

impl Pipeline {
    /// New pipeline with no sink and no processor.
    pub fn new(engine: Arc<dyn CaptureEngine>) -> Self {
        Self {
            engine,
            sink: Sink::None,
            processor: None,
        }
    }

    /// Resolve `overrides` over the capture defaults and store the result as
    /// the sink. Replaces a previously set capturer; fails if an uploader is
    /// already configured.
    pub fn set_capturer(&mut self, overrides: CaptureOverrides) -> Result<(), PipelineError> {
        if matches!(self.sink, Sink::Uploader(_)) {
            return Err(PipelineError::CapturerConflict);
        }
        let config = CaptureConfig::resolve(overrides);
        debug!(?config, "capturer configured");
        self.sink = Sink::Capturer(config);
        Ok(())
    }

    /// Store `uploader` as the sink. Replaces a previously set uploader;
    /// fails if a capturer is already configured.
    pub fn set_uploader(&mut self, uploader: Arc<dyn Uploader>) -> Result<(), PipelineError> {
        if matches!(self.sink, Sink::Capturer(_)) {
            return Err(PipelineError::UploaderConflict);
        }
        debug!("uploader configured");
        self.sink = Sink::Uploader(uploader);
        Ok(())
    }

    /// Resolve `overrides` over the processor defaults and store the result.
    /// Independent of the sink; never fails.
    pub fn set_processor(&mut self, overrides: ProcessorOverrides) {
        let config = ProcessorConfig::resolve(overrides);
        debug!(?config, "processor configured");
        self.processor = Some(config);
    }

    /// Stored capture configuration, if the sink is a capturer.
    pub fn capturer(&self) -> Option<&CaptureConfig> {
        match &self.sink {
            Sink::Capturer(config) => Some(config),
            _ => None,
        }
    }

    /// Stored processor configuration, if set.
    pub fn processor(&self) -> Option<&ProcessorConfig> {
        self.processor.as_ref()
    }

    pub fn has_uploader(&self) -> bool {
        matches!(self.sink, Sink::Uploader(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.sink, Sink::None)
    }

    /// Run one session against the configured sink.
    ///
    /// - Capturer without processor: one `capture_screen` call, empty result.
    /// - Capturer with processor: one `capture_and_process_screen` call; the
    ///   engine's sequence is returned unmodified (ascending `frame_number`).
    /// - Uploader: one `upload` call, empty result.
    ///
    /// A single failed collaborator call fails the whole run; there are no
    /// retries and no partial results.
    pub async fn run(&self) -> Result<ImageDataCollection, PipelineError> {
        match &self.sink {
            Sink::None => Err(PipelineError::NoSink),

            Sink::Uploader(uploader) => {
                info!("pipeline run: uploader sink");
                uploader.upload().await.map_err(PipelineError::Upload)?;
                Ok(ImageDataCollection::new())
            }

            Sink::Capturer(config) => {
                if config.persists_video() {
                    let plan = ChunkPlan::for_capture(config);
                    debug!(
                        chunks = plan.total_chunks(),
                        chunk_s = config.video_chunk_duration_seconds,
                        remainder_s = plan.remainder_seconds(),
                        "expected video chunk layout"
                    );
                }

                match &self.processor {
                    None => {
                        info!(
                            fps = config.fps,
                            duration_s = config.duration_seconds,
                            "pipeline run: capture only"
                        );
                        self.engine
                            .capture_screen(config)
                            .await
                            .map_err(PipelineError::Capture)?;
                        Ok(ImageDataCollection::new())
                    }
                    Some(processor) => {
                        info!(
                            fps = config.fps,
                            duration_s = config.duration_seconds,
                            processing = %processor.processing_type,
                            "pipeline run: capture and process"
                        );
                        self.engine
                            .capture_and_process_screen(config, processor)
                            .await
                            .map_err(PipelineError::Pipeline)
                    }
                }
            }
        }
    }
}
