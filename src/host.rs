use crate::{
    input::InputQuery,
    metadata::{InputDescriptor, PixelFormat},
};

/// Forwards a formatted log line to the host's own logging facility.
pub type LogHook = Box<dyn Fn(log::Level, &str) + Send + Sync>;

/// Callbacks the host provides for the duration of one frame.
pub trait Host: InputQuery {
    /// Refresh the host's input snapshot. Input queries made afterwards in the
    /// same frame read from that snapshot.
    fn poll_input(&mut self);

    /// Submit one stereo audio frame.
    fn audio_sample(&mut self, left: i16, right: i16);

    /// Present a finished frame. `pitch` is the row stride in bytes.
    fn video_refresh(&mut self, pixels: &[u16], width: usize, height: usize, pitch: usize);
}

/// Registration-time negotiation with the host.
///
/// Each setter returns whether the host accepted the request.
pub trait Environment {
    fn set_support_no_game(&mut self, supported: bool) -> bool;
    fn set_performance_level(&mut self, level: u32) -> bool;
    fn set_pixel_format(&mut self, format: PixelFormat) -> bool;
    fn set_input_descriptors(&mut self, descriptors: &[InputDescriptor]) -> bool;

    /// Hosts without a log interface fall back to `env_logger`.
    fn log_hook(&mut self) -> Option<LogHook> {
        None
    }
}
