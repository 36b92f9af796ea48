use anyhow::Context;

use crate::{
    config::CoreConfig,
    consts::{API_VERSION, CYCLES_PER_FRAME},
    error::{CoreError, Result},
    frame::{AudioBlock, VideoFrame},
    host::{Environment, Host},
    input::{self, Port},
    logging,
    machine::Machine,
    metadata::{self, AvInfo, Capabilities, Feature, PixelFormat, Region, SystemInfo},
};

/// One emulation session: the machine plus the buffers the host reads each frame.
///
/// The host drives it single-threaded, one call at a time. Nothing here is
/// global, so independent sessions can live side by side.
pub struct Session<M: Machine> {
    machine: M,
    config: CoreConfig,

    video: VideoFrame,
    audio: AudioBlock,

    cartridge_loaded: bool,
    frame_count: u64,
}

impl<M: Machine> Session<M> {
    pub fn new(machine: M) -> Self {
        Self::with_config(machine, CoreConfig::default())
    }

    /// The machine is reset before the session hands it out.
    pub fn with_config(mut machine: M, config: CoreConfig) -> Self {
        machine.reset();
        Session {
            machine,
            config,

            video: VideoFrame::new(),
            audio: AudioBlock::new(),

            cartridge_loaded: false,
            frame_count: 0,
        }
    }

    pub fn api_version(&self) -> u32 {
        API_VERSION
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    pub fn video(&self) -> &VideoFrame {
        &self.video
    }

    pub fn cartridge_loaded(&self) -> bool {
        self.cartridge_loaded
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::NO_GAME
    }

    /// First negotiation with the host: the core can start without a cartridge.
    pub fn set_environment(&mut self, env: &mut impl Environment) {
        if !env.set_support_no_game(true) {
            log::warn!("Host refused to start without a cartridge");
        }
    }

    pub fn init(&mut self, env: &mut impl Environment) {
        if logging::install(env.log_hook(), self.config.log_level) {
            log::debug!("Logging through host log interface");
        }

        if !env.set_performance_level(self.config.performance_level) {
            log::debug!("Host ignored performance level {}", self.config.performance_level);
        }

        self.machine.reset();
        log::info!(
            "{} {} initialised",
            self.machine.name(),
            self.machine.version()
        );
    }

    pub fn system_info(&self) -> SystemInfo {
        SystemInfo::new(self.machine.name(), self.machine.version())
    }

    pub fn av_info(&self, env: &mut impl Environment) -> AvInfo {
        if !env.set_pixel_format(PixelFormat::Rgb565) {
            log::warn!("Host rejected {} pixel format", PixelFormat::Rgb565);
        }
        AvInfo::default()
    }

    pub fn region(&self) -> Region {
        Region::Pal
    }

    /// Reset the machine and install `rom` if there is one.
    ///
    /// A missing or empty image is not an error: the machine runs its
    /// resident system program instead.
    pub fn load_game(&mut self, env: &mut impl Environment, rom: Option<&[u8]>) -> Result<()> {
        if !env.set_input_descriptors(&metadata::input_descriptors()) {
            log::debug!("Host ignored input descriptors");
        }

        self.machine.reset();
        self.cartridge_loaded = false;

        let rom = match rom {
            Some(rom) if !rom.is_empty() => rom,
            _ => {
                log::info!("No cartridge, running resident program");
                return Ok(());
            }
        };

        log::info!("Loading cartridge ({} bytes)", rom.len());
        if let Err(e) = self
            .machine
            .load_cartridge(rom)
            .with_context(|| format!("Loading {} byte cartridge", rom.len()))
        {
            log::warn!("{:#}", e);
            self.machine.reset();
            return Err(CoreError::CartridgeRejected(e));
        }

        self.cartridge_loaded = true;
        Ok(())
    }

    pub fn load_game_special(&mut self, game_type: u32, _roms: &[&[u8]]) -> Result<()> {
        log::info!("Special game type {} requested", game_type);
        Err(CoreError::Unsupported(Feature::SpecialGame))
    }

    pub fn unload_game(&mut self) {
        self.machine.unload_cartridge();
        self.cartridge_loaded = false;
    }

    pub fn reset(&mut self) {
        self.machine.reset();
    }

    /// Both ports are fixed joysticks, so device changes are ignored.
    pub fn set_controller_port_device(&mut self, port: u32, device: u32) {
        log::debug!("Ignoring device {} on port {}", device, port);
    }

    /// Emulate one video frame.
    pub fn run_frame(&mut self, host: &mut impl Host) {
        host.poll_input();

        let inputs = Port::ALL.map(|port| input::normalize(port, &mut *host));
        for (port, state) in Port::ALL.into_iter().zip(inputs) {
            self.machine.set_player_input(port, state);
        }

        self.machine.run(CYCLES_PER_FRAME);

        self.machine.mix_audio(&mut self.audio);
        for sample in self.audio.samples() {
            host.audio_sample(sample.left, sample.right);
        }

        self.machine.render_frame(&mut self.video);
        host.video_refresh(
            self.video.pixels(),
            VideoFrame::WIDTH,
            VideoFrame::HEIGHT,
            VideoFrame::PITCH,
        );

        self.frame_count += 1;
        log::trace!("Frame {} done", self.frame_count);
    }

    pub fn serialize_size(&self) -> usize {
        0
    }

    pub fn serialize(&self, _data: &mut [u8]) -> Result<()> {
        Err(CoreError::Unsupported(Feature::SaveState))
    }

    pub fn unserialize(&mut self, _data: &[u8]) -> Result<()> {
        Err(CoreError::Unsupported(Feature::SaveState))
    }

    pub fn memory_data(&mut self, _id: u32) -> Option<&mut [u8]> {
        None
    }

    pub fn memory_size(&self, _id: u32) -> usize {
        0
    }

    pub fn cheat_reset(&mut self) {}

    pub fn cheat_set(&mut self, index: u32, _enabled: bool, _code: &str) -> Result<()> {
        log::debug!("Cheat {} ignored", index);
        Err(CoreError::Unsupported(Feature::Cheats))
    }
}
