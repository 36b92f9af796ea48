//! Recording doubles for the machine and the host, sharing one event log so
//! tests can check the order calls happen in.

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use anyhow::{bail, Result};

use crate::{
    frame::{AudioBlock, Rgb565, StereoSample, VideoFrame},
    host::{Environment, Host},
    input::{AnalogAxis, InputQuery, JoypadButton, Port, PortInputState},
    machine::Machine,
    metadata::{InputDescriptor, PixelFormat},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Poll,
    Joypad(Port, JoypadButton),
    Analog(Port, AnalogAxis),
    Audio(i16, i16),
    Video {
        width: usize,
        height: usize,
        pitch: usize,
        len: usize,
    },
    Reset,
    Load(usize),
    Unload,
    SetInput(Port, PortInputState),
    Run(u32),
    Render,
}

#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|e| pred(e)).count()
    }
}

const ROM_MAGIC: &[u8] = b"g GCE";

pub struct StubMachine {
    log: EventLog,
    cartridge: Option<Vec<u8>>,
    inputs: [PortInputState; 2],
    cycles_run: u64,
}

impl StubMachine {
    pub const NAME: &'static str = "Stub Vector Console";
    pub const VERSION: &'static str = "0.0.1";
    pub const CARTRIDGE_COLOR: Rgb565 = Rgb565::WHITE;

    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            cartridge: None,
            inputs: [PortInputState::default(); 2],
            cycles_run: 0,
        }
    }

    /// An image the stub accepts: a copyright header padded with zeroes.
    pub fn valid_rom(len: usize) -> Vec<u8> {
        let mut rom = ROM_MAGIC.to_vec();
        rom.resize(len.max(ROM_MAGIC.len()), 0);
        rom
    }

    pub fn cartridge(&self) -> Option<&[u8]> {
        self.cartridge.as_deref()
    }

    pub fn input(&self, port: Port) -> PortInputState {
        self.inputs[port.index()]
    }

    pub fn cycles_run(&self) -> u64 {
        self.cycles_run
    }
}

impl Machine for StubMachine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn version(&self) -> &'static str {
        Self::VERSION
    }

    // Keeps the cartridge installed, like a power cycle with the cart still in
    fn reset(&mut self) {
        self.log.push(Event::Reset);
        self.inputs = [PortInputState::default(); 2];
    }

    fn load_cartridge(&mut self, rom: &[u8]) -> Result<()> {
        self.log.push(Event::Load(rom.len()));
        if !rom.starts_with(ROM_MAGIC) {
            bail!("Missing copyright header");
        }
        self.cartridge = Some(rom.to_vec());
        Ok(())
    }

    fn unload_cartridge(&mut self) {
        self.log.push(Event::Unload);
        self.cartridge = None;
    }

    fn run(&mut self, cycles: u32) {
        self.log.push(Event::Run(cycles));
        self.cycles_run += u64::from(cycles);
    }

    fn set_player_input(&mut self, port: Port, input: PortInputState) {
        self.log.push(Event::SetInput(port, input));
        self.inputs[port.index()] = input;
    }

    fn render_frame(&mut self, frame: &mut VideoFrame) {
        self.log.push(Event::Render);
        match self.cartridge {
            Some(_) => frame.fill(Self::CARTRIDGE_COLOR),
            None => frame.fill(Rgb565::BLACK),
        }
    }
}

pub struct RecordingHost {
    log: EventLog,
    pressed: HashSet<(Port, JoypadButton)>,
    analog: HashMap<(Port, AnalogAxis), i16>,
    last_frame: Option<Vec<u16>>,

    accept_pixel_format: bool,
    support_no_game: Option<bool>,
    performance_level: Option<u32>,
    pixel_format: Option<PixelFormat>,
    descriptors: Vec<InputDescriptor>,
}

impl RecordingHost {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            pressed: HashSet::new(),
            analog: HashMap::new(),
            last_frame: None,

            accept_pixel_format: true,
            support_no_game: None,
            performance_level: None,
            pixel_format: None,
            descriptors: Vec::new(),
        }
    }

    pub fn press(&mut self, port: Port, button: JoypadButton) {
        self.pressed.insert((port, button));
    }

    pub fn set_analog(&mut self, port: Port, axis: AnalogAxis, value: i16) {
        self.analog.insert((port, axis), value);
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.analog.clear();
    }

    pub fn refuse_pixel_format(&mut self) {
        self.accept_pixel_format = false;
    }

    pub fn last_frame(&self) -> Option<&[u16]> {
        self.last_frame.as_deref()
    }

    pub fn support_no_game(&self) -> Option<bool> {
        self.support_no_game
    }

    pub fn performance_level(&self) -> Option<u32> {
        self.performance_level
    }

    pub fn pixel_format(&self) -> Option<PixelFormat> {
        self.pixel_format
    }

    pub fn descriptors(&self) -> &[InputDescriptor] {
        &self.descriptors
    }
}

impl InputQuery for RecordingHost {
    fn joypad(&mut self, port: Port, button: JoypadButton) -> bool {
        self.log.push(Event::Joypad(port, button));
        self.pressed.contains(&(port, button))
    }

    fn analog(&mut self, port: Port, axis: AnalogAxis) -> i16 {
        self.log.push(Event::Analog(port, axis));
        self.analog.get(&(port, axis)).copied().unwrap_or(0)
    }
}

impl Host for RecordingHost {
    fn poll_input(&mut self) {
        self.log.push(Event::Poll);
    }

    fn audio_sample(&mut self, left: i16, right: i16) {
        self.log.push(Event::Audio(left, right));
    }

    fn video_refresh(&mut self, pixels: &[u16], width: usize, height: usize, pitch: usize) {
        self.log.push(Event::Video {
            width,
            height,
            pitch,
            len: pixels.len(),
        });
        self.last_frame = Some(pixels.to_vec());
    }
}

impl Environment for RecordingHost {
    fn set_support_no_game(&mut self, supported: bool) -> bool {
        self.support_no_game = Some(supported);
        true
    }

    fn set_performance_level(&mut self, level: u32) -> bool {
        self.performance_level = Some(level);
        true
    }

    fn set_pixel_format(&mut self, format: PixelFormat) -> bool {
        if self.accept_pixel_format {
            self.pixel_format = Some(format);
        }
        self.accept_pixel_format
    }

    fn set_input_descriptors(&mut self, descriptors: &[InputDescriptor]) -> bool {
        self.descriptors = descriptors.to_vec();
        true
    }
}

/// A `StubMachine` whose sound output is a ramp: sample `i` is `(i, -i)`.
pub struct RampMachine(StubMachine);

impl RampMachine {
    pub fn new(log: EventLog) -> Self {
        RampMachine(StubMachine::new(log))
    }
}

impl Machine for RampMachine {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn version(&self) -> &'static str {
        self.0.version()
    }

    fn reset(&mut self) {
        self.0.reset()
    }

    fn load_cartridge(&mut self, rom: &[u8]) -> Result<()> {
        self.0.load_cartridge(rom)
    }

    fn unload_cartridge(&mut self) {
        self.0.unload_cartridge()
    }

    fn run(&mut self, cycles: u32) {
        self.0.run(cycles)
    }

    fn set_player_input(&mut self, port: Port, input: PortInputState) {
        self.0.set_player_input(port, input)
    }

    fn render_frame(&mut self, frame: &mut VideoFrame) {
        self.0.render_frame(frame)
    }

    fn mix_audio(&mut self, block: &mut AudioBlock) {
        for (i, sample) in block.samples_mut().iter_mut().enumerate() {
            let i = i as i16;
            *sample = StereoSample { left: i, right: -i };
        }
    }
}
