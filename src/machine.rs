use anyhow::Result;

use crate::{
    frame::{AudioBlock, StereoSample, VideoFrame},
    input::{Port, PortInputState},
};

/// The emulated console, as seen by the frame driver.
///
/// Implementations own all CPU, vector display and sound state. The session
/// owns exactly one machine and drives it one frame at a time.
pub trait Machine {
    fn name(&self) -> &'static str;
    fn version(&self) -> &'static str;

    /// Back to power-on state. Must work before any cartridge is loaded and
    /// must be safe to call repeatedly.
    fn reset(&mut self);

    /// Install a cartridge image. `rom` is never empty.
    fn load_cartridge(&mut self, rom: &[u8]) -> Result<()>;

    /// Remove the installed cartridge, if any.
    fn unload_cartridge(&mut self);

    /// Advance emulation by exactly `cycles` machine cycles.
    fn run(&mut self, cycles: u32);

    /// Latch the joystick state seen by the next `run`.
    fn set_player_input(&mut self, port: Port, input: PortInputState);

    /// Draw the current display into the session's frame buffer.
    fn render_frame(&mut self, frame: &mut VideoFrame);

    /// Fill the frame's audio block. Machines without a sound hook emit silence.
    fn mix_audio(&mut self, block: &mut AudioBlock) {
        block.fill(StereoSample::SILENCE);
    }
}

impl<M: Machine + ?Sized> Machine for Box<M> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn version(&self) -> &'static str {
        (**self).version()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn load_cartridge(&mut self, rom: &[u8]) -> Result<()> {
        (**self).load_cartridge(rom)
    }

    fn unload_cartridge(&mut self) {
        (**self).unload_cartridge()
    }

    fn run(&mut self, cycles: u32) {
        (**self).run(cycles)
    }

    fn set_player_input(&mut self, port: Port, input: PortInputState) {
        (**self).set_player_input(port, input)
    }

    fn render_frame(&mut self, frame: &mut VideoFrame) {
        (**self).render_frame(frame)
    }

    fn mix_audio(&mut self, block: &mut AudioBlock) {
        (**self).mix_audio(block)
    }
}
