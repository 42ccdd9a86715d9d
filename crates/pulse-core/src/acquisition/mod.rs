mod buffer;
mod events;
mod session;

pub use buffer::{BufferStatus, SampleBuffer};
pub use events::ScanEvent;
pub use session::{FrameSource, SampleSink, ScanConfig, ScanSession};
