use log::LevelFilter;

use crate::consts::PERFORMANCE_LEVEL;

/// Session settings that are not fixed by the hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    /// Hint to the host about how demanding the core is to run.
    pub performance_level: u32,
    /// Most verbose level forwarded to the host log hook.
    pub log_level: LevelFilter,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            performance_level: PERFORMANCE_LEVEL,
            log_level: LevelFilter::Info,
        }
    }
}
