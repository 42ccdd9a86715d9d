use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::{DEFAULT_SCAN_DURATION_SECS, PROGRESS_SAMPLE_INTERVAL};
use crate::error::Result;
use crate::pipeline::analyze_accepted;
use crate::pipeline::config::AnalysisConfig;
use crate::series::Sample;

use super::buffer::SampleBuffer;
use super::events::ScanEvent;

/// The acquisition collaborator boundary.
///
/// Implementors deliver one sample per observed frame through the sink
/// handed to [`start`](Self::start). `start` fails fast on unmet
/// preconditions (`PermissionMissing`, `AcquisitionFailed`); `stop` releases
/// the underlying device and is called on every exit path.
pub trait FrameSource: Send {
    fn start(&mut self, sink: SampleSink) -> Result<()>;
    fn stop(&mut self);
}

/// Parameters of one acquisition window.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Wall-clock length of the acquisition window, in seconds.
    pub duration_secs: u64,
    pub analysis: AnalysisConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_SCAN_DURATION_SECS,
            analysis: AnalysisConfig::default(),
        }
    }
}

/// Cloneable producer handle into the current window's buffer.
///
/// Emits a `Progress` event once per [`PROGRESS_SAMPLE_INTERVAL`] appended
/// samples, computed from the span of producer timestamps.
#[derive(Clone)]
pub struct SampleSink {
    buffer: Arc<SampleBuffer>,
    events: mpsc::Sender<ScanEvent>,
    duration_secs: u64,
}

impl SampleSink {
    pub fn push(&self, timestamp_ms: i64, luminance: f64) {
        let status = self.buffer.push(Sample {
            timestamp_ms,
            luminance,
        });

        if status.len % PROGRESS_SAMPLE_INTERVAL == 0 {
            let elapsed = (timestamp_ms - status.first_timestamp_ms) as f64 / 1000.0;
            let percent = (100.0 * elapsed / self.duration_secs as f64).round();
            let _ = self
                .events
                .send(ScanEvent::Progress(percent.clamp(0.0, 100.0) as u8));
        }
    }
}

/// One acquisition window: owns the buffer, the source, and the timer.
///
/// Construction starts the source and a worker thread that waits for either
/// the duration timer or an explicit [`stop`](Self::stop). Whichever comes
/// first, the worker releases the source, snapshots the buffer, runs the
/// analysis once, and emits a single terminal event. A subsequent session
/// starts from an empty buffer.
pub struct ScanSession {
    stop_tx: mpsc::Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl ScanSession {
    pub fn start(
        mut source: Box<dyn FrameSource>,
        config: ScanConfig,
        events: mpsc::Sender<ScanEvent>,
    ) -> Result<ScanSession> {
        let buffer = Arc::new(SampleBuffer::new());
        let sink = SampleSink {
            buffer: Arc::clone(&buffer),
            events: events.clone(),
            duration_secs: config.duration_secs,
        };

        if let Err(err) = source.start(sink) {
            source.stop();
            let _ = events.send(ScanEvent::from_error(&err));
            return Err(err);
        }

        info!(duration_secs = config.duration_secs, "acquisition started");
        let _ = events.send(ScanEvent::Started);

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let worker = thread::Builder::new()
            .name("pulse-scan".into())
            .spawn(move || {
                // Ends on the first of: explicit stop, timer expiry.
                let early = stop_rx
                    .recv_timeout(Duration::from_secs(config.duration_secs))
                    .is_ok();
                debug!(early, "acquisition window closed");

                source.stop();
                finish(&buffer, &config.analysis, &events);
            })
            .expect("failed to spawn scan worker thread");

        Ok(ScanSession {
            stop_tx,
            worker: Some(worker),
        })
    }

    /// End the window early; analysis runs on whatever was collected.
    /// Harmless after the window has already closed.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(());
    }

    /// Block until the terminal event has been emitted.
    pub fn wait(mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Snapshot, analyze, and emit the terminal event. The buffer is left empty
/// regardless of the outcome.
fn finish(buffer: &SampleBuffer, config: &AnalysisConfig, events: &mpsc::Sender<ScanEvent>) {
    let series = buffer.snapshot_and_clear();
    info!(samples = series.len(), "running analysis");

    let event = match analyze_accepted(&series, config) {
        Ok(result) => ScanEvent::Result {
            bpm: result.bpm,
            quality: result.quality,
        },
        Err(err) => ScanEvent::from_error(&err),
    };
    let _ = events.send(event);
}
