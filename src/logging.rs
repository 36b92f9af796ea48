use env_logger::{Builder, Env};
use log::{LevelFilter, Log, Metadata, Record};

use crate::host::LogHook;

/// Routes `log` records to the host's log interface.
pub struct HostLogger {
    hook: LogHook,
    level: LevelFilter,
}

impl HostLogger {
    pub fn new(hook: LogHook, level: LevelFilter) -> Self {
        Self { hook, level }
    }
}

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Host log interfaces expect newline-terminated lines
        let line = format!("[{}] {}\n", record.target(), record.args());
        (self.hook)(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the process logger. Returns true if the host hook is now in use.
///
/// Without a hook `env_logger` takes over at the same level, unless `RUST_LOG`
/// says otherwise. Only the first logger installed in a process sticks; later
/// calls leave it in place.
pub fn install(hook: Option<LogHook>, level: LevelFilter) -> bool {
    match hook {
        Some(hook) => match log::set_boxed_logger(Box::new(HostLogger::new(hook, level))) {
            Ok(()) => {
                log::set_max_level(level);
                true
            }
            Err(_) => false,
        },
        None => {
            let _ = fallback_builder(level, Env::default()).try_init();
            false
        }
    }
}

/// `env_logger` set to `level`, with directives from `env` layered on top.
pub fn fallback_builder(level: LevelFilter, env: Env) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level).parse_env(env);
    builder
}
