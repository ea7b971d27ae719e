use serde::{Deserialize, Serialize};

// MARK: - ProcessingType

/// How captured frames are turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingType {
    /// Optical character recognition over the raw frame.
    #[default]
    #[serde(rename = "OCR")]
    Ocr,
    /// Vision-model inference (remote API).
    #[serde(rename = "Vision")]
    Vision,
}

impl std::fmt::Display for ProcessingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ocr => write!(f, "OCR"),
            Self::Vision => write!(f, "Vision"),
        }
    }
}

// MARK: - ImageData

/// One processed frame: extraction result plus capture metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// Capture instant, ISO-8601.
    pub timestamp: String,
    /// Sequential frame index within the run, starting at 1.
    #[serde(alias = "frameNumber")]
    pub frame_number: u64,
    /// Extracted text or serialized structured result.
    pub content: String,
    /// Processing mode that produced this record.
    #[serde(alias = "processingType")]
    pub processing_type: ProcessingType,
}

impl ImageData {
    pub fn new(
        timestamp: impl Into<String>,
        frame_number: u64,
        content: impl Into<String>,
        processing_type: ProcessingType,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            frame_number,
            content: content.into(),
            processing_type,
        }
    }
}

/// Result sequence of one pipeline run, ordered by ascending `frame_number`.
pub type ImageDataCollection = Vec<ImageData>;
