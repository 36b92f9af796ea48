use bitflags::bitflags;
use strum_macros::Display;

pub const AXIS_LOW: u8 = 0x00;
pub const AXIS_CENTER: u8 = 0x80;
pub const AXIS_HIGH: u8 = 0xFF;

/// A controller slot on the console. There are always exactly two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Port {
    #[strum(serialize = "player one")]
    One,
    #[strum(serialize = "player two")]
    Two,
}

impl Port {
    pub const ALL: [Port; 2] = [Port::One, Port::Two];

    pub fn index(self) -> usize {
        match self {
            Port::One => 0,
            Port::Two => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Host joypad buttons the adapter reads, numbered the way the host numbers them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JoypadButton {
    B,
    Y,
    Up,
    Down,
    Left,
    Right,
    A,
    X,
}

impl JoypadButton {
    pub fn id(self) -> u32 {
        match self {
            JoypadButton::B => 0,
            JoypadButton::Y => 1,
            JoypadButton::Up => 4,
            JoypadButton::Down => 5,
            JoypadButton::Left => 6,
            JoypadButton::Right => 7,
            JoypadButton::A => 8,
            JoypadButton::X => 9,
        }
    }
}

/// Axes of the host's left analog stick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnalogAxis {
    X,
    Y,
}

impl AnalogAxis {
    /// Index of the stick the axis belongs to (always the left stick).
    pub const STICK_INDEX: u32 = 0;

    pub fn id(self) -> u32 {
        match self {
            AnalogAxis::X => 0,
            AnalogAxis::Y => 1,
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ActionButtons: u8 {
        const B1 = 1 << 0;
        const B2 = 1 << 1;
        const B3 = 1 << 2;
        const B4 = 1 << 3;
    }
}

/// Joystick position and action buttons of one port, as the console sees them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PortInputState {
    pub x: u8,
    pub y: u8,
    pub buttons: ActionButtons,
}

impl Default for PortInputState {
    fn default() -> Self {
        Self {
            x: AXIS_CENTER,
            y: AXIS_CENTER,
            buttons: ActionButtons::empty(),
        }
    }
}

impl PortInputState {
    pub fn b1(&self) -> bool {
        self.buttons.contains(ActionButtons::B1)
    }

    pub fn b2(&self) -> bool {
        self.buttons.contains(ActionButtons::B2)
    }

    pub fn b3(&self) -> bool {
        self.buttons.contains(ActionButtons::B3)
    }

    pub fn b4(&self) -> bool {
        self.buttons.contains(ActionButtons::B4)
    }
}

/// Read access to the host's polled input for the current frame.
pub trait InputQuery {
    fn joypad(&mut self, port: Port, button: JoypadButton) -> bool;
    fn analog(&mut self, port: Port, axis: AnalogAxis) -> i16;
}

/// One row of an axis decision table. Rows are tried in order and the first
/// one that yields a value wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRule {
    Digital(JoypadButton, u8),
    Analog(AnalogAxis),
}

pub const X_AXIS_RULES: [AxisRule; 3] = [
    AxisRule::Digital(JoypadButton::Left, AXIS_LOW),
    AxisRule::Digital(JoypadButton::Right, AXIS_HIGH),
    AxisRule::Analog(AnalogAxis::X),
];

pub const Y_AXIS_RULES: [AxisRule; 3] = [
    AxisRule::Digital(JoypadButton::Down, AXIS_LOW),
    AxisRule::Digital(JoypadButton::Up, AXIS_HIGH),
    AxisRule::Analog(AnalogAxis::Y),
];

/// Which host button drives each console action button.
pub const BUTTON_MAP: [(ActionButtons, JoypadButton); 4] = [
    (ActionButtons::B1, JoypadButton::Y),
    (ActionButtons::B2, JoypadButton::X),
    (ActionButtons::B3, JoypadButton::B),
    (ActionButtons::B4, JoypadButton::A),
];

/// Rescale a signed host stick reading to the console's unsigned range.
pub fn scale_analog(raw: i16) -> u8 {
    num_traits::clamp(i32::from(raw) / 256 + i32::from(AXIS_CENTER), 0, 255) as u8
}

pub fn resolve_axis(rules: &[AxisRule], port: Port, input: &mut impl InputQuery) -> u8 {
    rules
        .iter()
        .find_map(|rule| match *rule {
            AxisRule::Digital(button, value) => input.joypad(port, button).then_some(value),
            AxisRule::Analog(axis) => Some(scale_analog(input.analog(port, axis))),
        })
        .unwrap_or(AXIS_CENTER)
}

pub fn normalize(port: Port, input: &mut impl InputQuery) -> PortInputState {
    let x = resolve_axis(&X_AXIS_RULES, port, input);
    let y = resolve_axis(&Y_AXIS_RULES, port, input);

    let mut buttons = ActionButtons::empty();
    for (action, host_button) in BUTTON_MAP {
        buttons.set(action, input.joypad(port, host_button));
    }

    PortInputState { x, y, buttons }
}
