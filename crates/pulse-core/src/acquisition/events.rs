use crate::error::PulseError;

/// Events emitted by a [`ScanSession`](super::ScanSession) to the
/// presentation layer. `Result` and `Error` are terminal; exactly one of
/// them is emitted per acquisition window.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanEvent {
    /// Acquisition started; the source is producing samples.
    Started,
    /// Coarse progress through the acquisition window, `0..=100`.
    Progress(u8),
    /// Analysis accepted.
    Result { bpm: f64, quality: f64 },
    /// Terminal failure, with the stable code and a human-readable message.
    Error { code: &'static str, message: String },
}

impl ScanEvent {
    pub fn from_error(err: &PulseError) -> Self {
        Self::Error {
            code: err.code(),
            message: err.to_string(),
        }
    }

    /// Whether this event ends the window.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Result { .. } | Self::Error { .. })
    }
}
