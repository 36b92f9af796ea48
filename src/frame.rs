use crate::consts::{SAMPLES_PER_FRAME, SCREEN_HEIGHT, SCREEN_PITCH, SCREEN_WIDTH};

/// A 16-bit RGB565 pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Rgb565(0x0000);
    pub const WHITE: Self = Rgb565(0xFFFF);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = u16::from(r >> 3);
        let g = u16::from(g >> 2);
        let b = u16::from(b >> 3);
        Rgb565((r << 11) | (g << 5) | b)
    }
}

/// The display buffer handed to the host once per frame.
///
/// Allocated once per session and overwritten in place by the machine.
pub struct VideoFrame {
    pixels: Box<[u16]>,
}

impl VideoFrame {
    pub const WIDTH: usize = SCREEN_WIDTH;
    pub const HEIGHT: usize = SCREEN_HEIGHT;
    /// Row stride in bytes.
    pub const PITCH: usize = SCREEN_PITCH;

    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK.0; SCREEN_WIDTH * SCREEN_HEIGHT].into_boxed_slice(),
        }
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u16] {
        &mut self.pixels
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color.0);
    }

    /// Returns `None` outside the visible area.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb565> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        Some(Rgb565(self.pixels[y * SCREEN_WIDTH + x]))
    }

    /// Writes outside the visible area are dropped.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb565) {
        if x < SCREEN_WIDTH && y < SCREEN_HEIGHT {
            self.pixels[y * SCREEN_WIDTH + x] = color.0;
        }
    }
}

impl Default for VideoFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StereoSample {
    pub left: i16,
    pub right: i16,
}

impl StereoSample {
    pub const SILENCE: Self = StereoSample { left: 0, right: 0 };

    pub fn mono(value: i16) -> Self {
        StereoSample {
            left: value,
            right: value,
        }
    }
}

/// One video frame's worth of audio. The length never changes.
pub struct AudioBlock {
    samples: Box<[StereoSample; SAMPLES_PER_FRAME]>,
}

impl AudioBlock {
    pub const LEN: usize = SAMPLES_PER_FRAME;

    pub fn new() -> Self {
        Self {
            samples: Box::new([StereoSample::SILENCE; SAMPLES_PER_FRAME]),
        }
    }

    pub fn samples(&self) -> &[StereoSample] {
        self.samples.as_slice()
    }

    pub fn samples_mut(&mut self) -> &mut [StereoSample] {
        self.samples.as_mut_slice()
    }

    pub fn fill(&mut self, sample: StereoSample) {
        self.samples.fill(sample);
    }
}

impl Default for AudioBlock {
    fn default() -> Self {
        Self::new()
    }
}
