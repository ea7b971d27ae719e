//! Capture and processor configuration.
//!
//! Each config comes in two shapes: the resolved record the pipeline stores
//! (every field populated) and an all-`Option` overrides struct for callers
//! that only want to pin a few fields. `resolve()` overlays the overrides
//! onto the default record field by field; it never validates and never
//! fails. Serde aliases keep the camelCase wire shape parseable.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::ProcessingType;

// MARK: - CaptureConfig

/// Fully-resolved configuration for one capture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Frames sampled per second.
    pub fps: u32,
    /// Total wall-clock capture length in seconds.
    #[serde(alias = "duration")]
    pub duration_seconds: u64,
    /// Directory for per-frame `.png` screenshots; `None` disables them.
    #[serde(alias = "saveScreenshotTo", skip_serializing_if = "Option::is_none")]
    pub save_screenshot_to: Option<PathBuf>,
    /// Directory for `.mp4` video chunks; `None` disables video output.
    #[serde(alias = "saveVideoTo", skip_serializing_if = "Option::is_none")]
    pub save_video_to: Option<PathBuf>,
    /// Length of each video chunk in seconds. Never clamped to the total
    /// duration; a chunk longer than the session yields one short file.
    #[serde(alias = "videoChunkDuration")]
    pub video_chunk_duration_seconds: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            fps: 1,
            duration_seconds: 10,
            save_screenshot_to: None,
            save_video_to: None,
            video_chunk_duration_seconds: 60,
        }
    }
}

impl CaptureConfig {
    /// Overlay `overrides` onto the default record, field by field.
    pub fn resolve(overrides: CaptureOverrides) -> Self {
        let base = Self::default();
        Self {
            fps: overrides.fps.unwrap_or(base.fps),
            duration_seconds: overrides.duration_seconds.unwrap_or(base.duration_seconds),
            save_screenshot_to: overrides.save_screenshot_to.or(base.save_screenshot_to),
            save_video_to: overrides.save_video_to.or(base.save_video_to),
            video_chunk_duration_seconds: overrides
                .video_chunk_duration_seconds
                .unwrap_or(base.video_chunk_duration_seconds),
        }
    }

    pub fn persists_screenshots(&self) -> bool {
        self.save_screenshot_to.is_some()
    }

    pub fn persists_video(&self) -> bool {
        self.save_video_to.is_some()
    }

    /// Number of frames a full session produces.
    pub fn total_frames(&self) -> u64 {
        self.fps as u64 * self.duration_seconds
    }

    /// Interval between consecutive frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.fps.max(1) as u64)
    }
}

/// Partial capture configuration. Absent fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureOverrides {
    pub fps: Option<u32>,
    #[serde(alias = "duration")]
    pub duration_seconds: Option<u64>,
    #[serde(alias = "saveScreenshotTo")]
    pub save_screenshot_to: Option<PathBuf>,
    #[serde(alias = "saveVideoTo")]
    pub save_video_to: Option<PathBuf>,
    #[serde(alias = "videoChunkDuration")]
    pub video_chunk_duration_seconds: Option<u64>,
}

// MARK: - OcrConfig

/// Parameters for OCR-based processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// OCR model name ("default", "native", "tesseract", …).
    #[serde(alias = "ocrModel")]
    pub ocr_model: String,
    /// Include text bounding-box coordinates in results.
    #[serde(alias = "boundingBoxes")]
    pub bounding_boxes: bool,
    /// Dots per inch hint; higher values for smaller text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpi: Option<u32>,
    /// Page segmentation mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psm: Option<u32>,
    /// OCR engine mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<u32>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            ocr_model: "default".to_owned(),
            bounding_boxes: true,
            dpi: None,
            psm: None,
            oem: None,
        }
    }
}

// MARK: - VisionConfig

/// Parameters for vision-model processing via an external API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Base URL of the vision API endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Authentication key for the vision API.
    #[serde(alias = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Optional prompt guiding the model's analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

// MARK: - ProcessorConfig

/// Fully-resolved configuration for the post-capture processing stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    #[serde(alias = "processingType")]
    pub processing_type: ProcessingType,
    #[serde(alias = "ocrConfig", skip_serializing_if = "Option::is_none")]
    pub ocr_config: Option<OcrConfig>,
    #[serde(alias = "visionConfig", skip_serializing_if = "Option::is_none")]
    pub vision_config: Option<VisionConfig>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            processing_type: ProcessingType::Ocr,
            ocr_config: Some(OcrConfig::default()),
            vision_config: None,
        }
    }
}

impl ProcessorConfig {
    /// Overlay `overrides` onto the default record.
    ///
    /// The merge is shallow: a supplied `ocr_config` or `vision_config`
    /// replaces the default parameter bag wholesale.
    pub fn resolve(overrides: ProcessorOverrides) -> Self {
        let base = Self::default();
        Self {
            processing_type: overrides.processing_type.unwrap_or(base.processing_type),
            ocr_config: overrides.ocr_config.or(base.ocr_config),
            vision_config: overrides.vision_config.or(base.vision_config),
        }
    }
}

/// Partial processor configuration. Absent fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorOverrides {
    #[serde(alias = "processingType")]
    pub processing_type: Option<ProcessingType>,
    #[serde(alias = "ocrConfig")]
    pub ocr_config: Option<OcrConfig>,
    #[serde(alias = "visionConfig")]
    pub vision_config: Option<VisionConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_defaults() {
        let config = CaptureConfig::default();
        assert_eq!(config.fps, 1);
        assert_eq!(config.duration_seconds, 10);
        assert_eq!(config.video_chunk_duration_seconds, 60);
        assert!(!config.persists_screenshots());
        assert!(!config.persists_video());
    }

    #[test]
    fn resolve_keeps_defaults_for_absent_fields() {
        let resolved = CaptureConfig::resolve(CaptureOverrides {
            fps: Some(5),
            save_video_to: Some(PathBuf::from("/tmp/videos")),
            ..Default::default()
        });

        assert_eq!(resolved.fps, 5);
        assert_eq!(resolved.duration_seconds, 10);
        assert_eq!(resolved.save_video_to, Some(PathBuf::from("/tmp/videos")));
        assert_eq!(resolved.save_screenshot_to, None);
        assert_eq!(resolved.video_chunk_duration_seconds, 60);
    }

    #[test]
    fn empty_overrides_resolve_to_defaults() {
        assert_eq!(CaptureConfig::resolve(CaptureOverrides::default()), CaptureConfig::default());
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "fps": 2,
            "duration": 30,
            "saveVideoTo": "/tmp/videos",
            "videoChunkDuration": 15
        }"#;

        let overrides: CaptureOverrides = serde_json::from_str(json).expect("valid camelCase config");
        let resolved = CaptureConfig::resolve(overrides);
        assert_eq!(resolved.fps, 2);
        assert_eq!(resolved.duration_seconds, 30);
        assert_eq!(resolved.video_chunk_duration_seconds, 15);
        assert_eq!(resolved.save_video_to, Some(PathBuf::from("/tmp/videos")));
    }

    #[test]
    fn deserializes_snake_case_fields() {
        let json = r#"{
            "fps": 4,
            "duration_seconds": 20,
            "save_screenshot_to": "/tmp/shots"
        }"#;

        let overrides: CaptureOverrides = serde_json::from_str(json).expect("valid snake_case config");
        let resolved = CaptureConfig::resolve(overrides);
        assert_eq!(resolved.fps, 4);
        assert_eq!(resolved.duration_seconds, 20);
        assert_eq!(resolved.save_screenshot_to, Some(PathBuf::from("/tmp/shots")));
    }

    #[test]
    fn frame_accounting() {
        let config = CaptureConfig::resolve(CaptureOverrides {
            fps: Some(4),
            duration_seconds: Some(5),
            ..Default::default()
        });
        assert_eq!(config.total_frames(), 20);
        assert_eq!(config.frame_interval(), Duration::from_micros(250_000));
    }

    #[test]
    fn processor_defaults_to_ocr() {
        let config = ProcessorConfig::default();
        assert_eq!(config.processing_type, ProcessingType::Ocr);
        let ocr = config.ocr_config.expect("default OCR bag");
        assert_eq!(ocr.ocr_model, "default");
        assert!(ocr.bounding_boxes);
        assert_eq!(config.vision_config, None);
    }

    #[test]
    fn processor_merge_is_shallow() {
        // A vision override leaves the default OCR bag untouched.
        let resolved = ProcessorConfig::resolve(ProcessorOverrides {
            processing_type: Some(ProcessingType::Vision),
            vision_config: Some(VisionConfig {
                model: Some("gpt-4o".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(resolved.processing_type, ProcessingType::Vision);
        assert_eq!(resolved.ocr_config, Some(OcrConfig::default()));
        assert_eq!(resolved.vision_config.unwrap().model.as_deref(), Some("gpt-4o"));

        // An OCR override replaces the whole default bag.
        let resolved = ProcessorConfig::resolve(ProcessorOverrides {
            ocr_config: Some(OcrConfig {
                ocr_model: "native".to_owned(),
                bounding_boxes: false,
                ..Default::default()
            }),
            ..Default::default()
        });
        let ocr = resolved.ocr_config.unwrap();
        assert_eq!(ocr.ocr_model, "native");
        assert!(!ocr.bounding_boxes);
    }

    #[test]
    fn processor_accepts_camel_case_fields() {
        let json = r#"{
            "processingType": "OCR",
            "ocrConfig": { "ocrModel": "native", "boundingBoxes": true }
        }"#;

        let overrides: ProcessorOverrides = serde_json::from_str(json).expect("valid camelCase config");
        let resolved = ProcessorConfig::resolve(overrides);
        assert_eq!(resolved.processing_type, ProcessingType::Ocr);
        assert_eq!(resolved.ocr_config.unwrap().ocr_model, "native");
    }
}
