use thiserror::Error;

/// Failures reported by capture / processing / upload collaborators.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Screen capture not supported on this platform")]
    Unsupported,

    #[error("Screen recording permission not granted")]
    PermissionDenied,

    #[error("Capture failed: {reason}")]
    CaptureFailed { reason: String },

    #[error("Frame processing failed: {reason}")]
    ProcessFailed { reason: String },

    #[error("Upload rejected: {reason}")]
    UploadRejected { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures surfaced by the pipeline to its caller.
///
/// The conflict and no-sink variants are raised by the pipeline itself; the
/// wrapping variants re-label an [`EngineError`] with the phase it failed in
/// and keep the cause reachable through `source()`.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Cannot set Capturer when Uploader is already set")]
    CapturerConflict,

    #[error("Cannot set Uploader when Capturer is already set")]
    UploaderConflict,

    #[error("Either Capturer or Uploader must be set")]
    NoSink,

    #[error("Screen capture failed: {0}")]
    Capture(#[source] EngineError),

    #[error("Capture-and-process failed: {0}")]
    Pipeline(#[source] EngineError),

    #[error("Upload failed: {0}")]
    Upload(#[source] EngineError),
}
