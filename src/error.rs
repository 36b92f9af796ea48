use std::fmt;

use crate::metadata::Feature;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug)]
pub enum CoreError {
    /// The machine refused the cartridge image. The session stays usable and
    /// keeps running the resident program.
    CartridgeRejected(anyhow::Error),
    /// The host asked for something this core never provides.
    Unsupported(Feature),
}

impl CoreError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, CoreError::Unsupported(_))
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::CartridgeRejected(e) => write!(f, "cartridge rejected: {:#}", e),
            CoreError::Unsupported(feature) => write!(f, "{} not supported", feature),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreError::CartridgeRejected(e) => Some(&**e),
            CoreError::Unsupported(_) => None,
        }
    }
}
