use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Console logger tagged by component.
///
/// Also installed as the `log` backend so messages from the `shared` crate
/// end up in the browser console.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::write(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::write(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::write(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::write(Level::Error, component, message);
    }

    fn write(level: Level, component: &str, message: &str) {
        if level > log::max_level() {
            return;
        }
        let line = format!("[{}] {}", component, message);
        match level {
            Level::Error => console::error!(line),
            Level::Warn => console::warn!(line),
            Level::Info => console::info!(line),
            Level::Debug | Level::Trace => console::debug!(line),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            Self::write(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}
