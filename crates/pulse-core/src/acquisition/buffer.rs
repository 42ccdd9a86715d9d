use std::sync::{Mutex, PoisonError};

use crate::series::{Sample, SampleSeries};

/// Buffer state after a push, used for coarse progress reporting.
#[derive(Clone, Copy, Debug)]
pub struct BufferStatus {
    /// Samples accumulated so far in the current window.
    pub len: usize,
    /// Capture time of the first sample in the window.
    pub first_timestamp_ms: i64,
}

/// Mutex-guarded accumulator for one acquisition window.
///
/// The producer appends through [`push`](Self::push) while the session side
/// ends the window with [`snapshot_and_clear`](Self::snapshot_and_clear);
/// the lock guarantees a snapshot never observes a partially-appended sample
/// and no sample is dropped at the boundary.
#[derive(Debug, Default)]
pub struct SampleBuffer {
    inner: Mutex<Vec<Sample>>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample and report the resulting buffer state.
    pub fn push(&self, sample: Sample) -> BufferStatus {
        let mut samples = self.lock();
        samples.push(sample);
        BufferStatus {
            len: samples.len(),
            first_timestamp_ms: samples[0].timestamp_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Atomically take the accumulated window and reset to empty.
    pub fn snapshot_and_clear(&self) -> SampleSeries {
        SampleSeries::new(std::mem::take(&mut *self.lock()))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Sample>> {
        // A producer panicking mid-push leaves the Vec intact, so a
        // poisoned lock is still safe to use.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
