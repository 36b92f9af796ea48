// 6809 clocked at 1.5 MHz, PAL-style 50 Hz refresh
pub const CLOCK_SPEED: u32 = 1_500_000;
pub const FPS: u32 = 50;
pub const FRAME_TIME: f64 = 1.0 / FPS as f64;

/// Machine cycles that make up one video frame.
pub const CYCLES_PER_FRAME: u32 = CLOCK_SPEED / FPS;

pub const AUDIO_SAMPLE_RATE: u32 = 44_100;
/// Stereo frames handed to the host per video frame, rounded to nearest.
pub const SAMPLES_PER_FRAME: usize = ((AUDIO_SAMPLE_RATE + FPS / 2) / FPS) as usize;

pub const SCREEN_WIDTH: usize = 330;
pub const SCREEN_HEIGHT: usize = 410;
pub const BYTES_PER_PIXEL: usize = std::mem::size_of::<u16>();
pub const SCREEN_PITCH: usize = SCREEN_WIDTH * BYTES_PER_PIXEL;
pub const ASPECT_RATIO: f32 = SCREEN_WIDTH as f32 / SCREEN_HEIGHT as f32;

pub const VALID_EXTENSIONS: &str = "bin|vec";
pub const API_VERSION: u32 = 1;
pub const PERFORMANCE_LEVEL: u32 = 4;
