use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("camera permission missing")]
    PermissionMissing,

    #[error("acquisition failed: {0}")]
    AcquisitionFailed(String),

    #[error("not enough samples: collected {count}, need {required}")]
    LowSamples { count: usize, required: usize },

    #[error("signal too weak: bpm {bpm:.1}, quality {quality:.2}")]
    LowSignal { bpm: f64, quality: f64 },

    #[error("invalid frequency band: {low_hz}..{high_hz} Hz")]
    InvalidBand { low_hz: f64, high_hz: f64 },
}

impl PulseError {
    /// Stable code string for transporting the error to a presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PermissionMissing => "PERMISSION_MISSING",
            Self::AcquisitionFailed(_) => "ACQUISITION_FAILED",
            Self::LowSamples { .. } => "LOW_SAMPLES",
            Self::LowSignal { .. } => "LOW_SIGNAL",
            Self::InvalidBand { .. } => "INVALID_BAND",
        }
    }
}

pub type Result<T> = std::result::Result<T, PulseError>;
