//! Static description of the core that the host reads during registration.

use bitflags::bitflags;
use strum_macros::Display;

use crate::{
    consts::{
        ASPECT_RATIO, AUDIO_SAMPLE_RATE, FPS, SCREEN_HEIGHT, SCREEN_WIDTH, VALID_EXTENSIONS,
    },
    input::{ActionButtons, AnalogAxis, JoypadButton, Port, BUTTON_MAP},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum PixelFormat {
    #[strum(serialize = "0RGB1555")]
    Rgb1555,
    #[strum(serialize = "XRGB8888")]
    Xrgb8888,
    #[strum(serialize = "RGB565")]
    Rgb565,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Region {
    #[strum(serialize = "NTSC")]
    Ntsc,
    #[strum(serialize = "PAL")]
    Pal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Device {
    #[strum(serialize = "joypad")]
    Joypad,
    #[strum(serialize = "analog")]
    Analog,
}

/// Optional features a host may ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Feature {
    #[strum(serialize = "save states")]
    SaveState,
    #[strum(serialize = "memory export")]
    MemoryExport,
    #[strum(serialize = "special game types")]
    SpecialGame,
    #[strum(serialize = "cheats")]
    Cheats,
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Runs the resident system program when started without a cartridge
        const NO_GAME = 1 << 0;
        const SAVE_STATE = 1 << 1;
        const MEMORY_EXPORT = 1 << 2;
        const SPECIAL_GAME = 1 << 3;
        const CHEATS = 1 << 4;
    }
}

impl Capabilities {
    pub fn supports(self, feature: Feature) -> bool {
        let flag = match feature {
            Feature::SaveState => Capabilities::SAVE_STATE,
            Feature::MemoryExport => Capabilities::MEMORY_EXPORT,
            Feature::SpecialGame => Capabilities::SPECIAL_GAME,
            Feature::Cheats => Capabilities::CHEATS,
        };
        self.contains(flag)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputDescriptor {
    pub port: Port,
    pub device: Device,
    pub index: u32,
    pub id: u32,
    pub description: &'static str,
}

impl InputDescriptor {
    fn joypad(port: Port, button: JoypadButton, description: &'static str) -> Self {
        Self {
            port,
            device: Device::Joypad,
            index: 0,
            id: button.id(),
            description,
        }
    }

    fn analog(port: Port, axis: AnalogAxis, description: &'static str) -> Self {
        Self {
            port,
            device: Device::Analog,
            index: AnalogAxis::STICK_INDEX,
            id: axis.id(),
            description,
        }
    }
}

fn action_label(action: ActionButtons) -> &'static str {
    if action == ActionButtons::B1 {
        "1"
    } else if action == ActionButtons::B2 {
        "2"
    } else if action == ActionButtons::B3 {
        "3"
    } else {
        "4"
    }
}

/// Every control the core reads, for both ports. Button labels follow
/// `BUTTON_MAP` so the host shows the console button a key really drives.
pub fn input_descriptors() -> Vec<InputDescriptor> {
    let mut descriptors = Vec::with_capacity(Port::ALL.len() * 10);

    for port in Port::ALL {
        descriptors.push(InputDescriptor::joypad(port, JoypadButton::Left, "Left"));
        descriptors.push(InputDescriptor::joypad(port, JoypadButton::Up, "Up"));
        descriptors.push(InputDescriptor::joypad(port, JoypadButton::Down, "Down"));
        descriptors.push(InputDescriptor::joypad(port, JoypadButton::Right, "Right"));

        for (action, host_button) in BUTTON_MAP {
            descriptors.push(InputDescriptor::joypad(
                port,
                host_button,
                action_label(action),
            ));
        }

        descriptors.push(InputDescriptor::analog(port, AnalogAxis::X, "Analog X"));
        descriptors.push(InputDescriptor::analog(port, AnalogAxis::Y, "Analog Y"));
    }

    descriptors
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemInfo {
    pub library_name: &'static str,
    pub library_version: &'static str,
    pub valid_extensions: &'static str,
    /// The core takes cartridge bytes, never a path.
    pub need_fullpath: bool,
}

impl SystemInfo {
    pub fn new(library_name: &'static str, library_version: &'static str) -> Self {
        Self {
            library_name,
            library_version,
            valid_extensions: VALID_EXTENSIONS,
            need_fullpath: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemTiming {
    pub fps: f64,
    pub sample_rate: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameGeometry {
    pub base_width: u32,
    pub base_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub aspect_ratio: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvInfo {
    pub timing: SystemTiming,
    pub geometry: GameGeometry,
}

impl Default for AvInfo {
    fn default() -> Self {
        Self {
            timing: SystemTiming {
                fps: f64::from(FPS),
                sample_rate: f64::from(AUDIO_SAMPLE_RATE),
            },
            geometry: GameGeometry {
                base_width: SCREEN_WIDTH as u32,
                base_height: SCREEN_HEIGHT as u32,
                max_width: SCREEN_WIDTH as u32,
                max_height: SCREEN_HEIGHT as u32,
                aspect_ratio: ASPECT_RATIO,
            },
        }
    }
}
