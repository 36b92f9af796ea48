//! Frame-paced adapter that drives a vector console core from a host runtime.
//!
//! The host calls [`Session::run_frame`] once per video frame. Each call polls
//! input, runs the machine for one frame's worth of cycles and hands back one
//! audio block and one video frame.

pub mod config;
pub mod consts;
pub mod error;
pub mod frame;
pub mod host;
pub mod input;
pub mod logging;
pub mod machine;
pub mod metadata;
pub mod session;

#[cfg(test)]
mod test_support;

pub use config::CoreConfig;
pub use error::CoreError;
pub use frame::{AudioBlock, Rgb565, StereoSample, VideoFrame};
pub use host::{Environment, Host, LogHook};
pub use input::{InputQuery, Port, PortInputState};
pub use machine::Machine;
pub use session::Session;
