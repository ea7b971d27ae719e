//! End-to-end demo: capture-and-process a short synthetic session and print
//! the resulting journal.
//!
//! ```text
//! cargo run --example journal
//! RUST_LOG=debug cargo run --example journal   # include chunk layout traces
//! ```

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frametrail_core::{CaptureOverrides, ProcessorOverrides};
use frametrail_engine::SyntheticEngine;
use frametrail_pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("frametrail journal demo v{}", env!("CARGO_PKG_VERSION"));

    let mut pipeline = Pipeline::new(Arc::new(SyntheticEngine::new().realtime(true)));
    pipeline.set_capturer(CaptureOverrides {
        fps: Some(2),
        duration_seconds: Some(3),
        save_video_to: Some("/tmp/frametrail/videos".into()),
        video_chunk_duration_seconds: Some(2),
        ..Default::default()
    })?;
    pipeline.set_processor(ProcessorOverrides::default());

    let results = pipeline.run().await?;

    info!("session produced {} records", results.len());
    for data in &results {
        println!("[{}] #{:03} {} ({})", data.timestamp, data.frame_number, data.content, data.processing_type);
    }

    Ok(())
}
