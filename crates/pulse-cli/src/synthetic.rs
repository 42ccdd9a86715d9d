use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pulse_core::acquisition::{FrameSource, SampleSink};
use pulse_core::error::{PulseError, Result};
use tracing::debug;

/// Stand-in for the camera collaborator: produces a cardiac-like luminance
/// wave (fundamental plus a small second harmonic) at roughly 30 fps with
/// jittered frame intervals, additive noise, and optional dropped frames.
pub struct SyntheticSource {
    bpm: f64,
    noise: f64,
    drop_every: usize,
    seed: u64,
    stop_tx: Option<mpsc::Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl SyntheticSource {
    pub fn new(bpm: f64, noise: f64, drop_every: usize, seed: u64) -> Self {
        Self {
            bpm,
            noise,
            drop_every,
            seed,
            stop_tx: None,
            worker: None,
        }
    }
}

impl FrameSource for SyntheticSource {
    fn start(&mut self, sink: SampleSink) -> Result<()> {
        if !(20.0..=300.0).contains(&self.bpm) {
            return Err(PulseError::AcquisitionFailed(format!(
                "simulated rate {:.0} BPM is not producible",
                self.bpm
            )));
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let freq_hz = self.bpm / 60.0;
        let noise = self.noise;
        let drop_every = self.drop_every;
        let mut rng = XorShift::new(self.seed);

        let worker = thread::Builder::new()
            .name("pulse-synthetic".into())
            .spawn(move || {
                let epoch_ms = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_millis() as i64;
                let mut elapsed_ms: i64 = 0;
                let mut frame: usize = 0;

                loop {
                    // ~30 fps with a few milliseconds of delivery jitter.
                    let interval_ms = (33.0 + rng.next_signed() * 5.0).round().max(1.0) as u64;
                    if stop_rx
                        .recv_timeout(Duration::from_millis(interval_ms))
                        .is_ok()
                    {
                        break;
                    }
                    elapsed_ms += interval_ms as i64;
                    frame += 1;

                    if drop_every > 0 && frame % drop_every == 0 {
                        continue;
                    }

                    let phase = 2.0 * std::f64::consts::PI * freq_hz * elapsed_ms as f64 / 1000.0;
                    let luminance = 512.0
                        + 40.0 * phase.sin()
                        + 9.0 * (2.0 * phase).sin()
                        + noise * rng.next_signed();
                    sink.push(epoch_ms + elapsed_ms, luminance);
                }
                debug!(frames = frame, "synthetic source stopped");
            })
            .expect("failed to spawn synthetic source thread");

        self.stop_tx = Some(stop_tx);
        self.worker = Some(worker);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// xorshift64* generator; deterministic per seed so scans are reproducible.
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Uniform in `[-1, 1)`.
    fn next_signed(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}
