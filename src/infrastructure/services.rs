//! Browser-backed implementations of the domain logging traits.

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use js_sys::Date;
use wasm_bindgen::JsValue;

/// Writes entries to the devtools console, dropping those below `min_level`.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Warn)
    }

    fn format(entry: &LogEntry) -> String {
        let time = BrowserTimeProvider.format_timestamp(entry.timestamp);
        match &entry.metadata {
            Some(meta) => format!("[{}] {} {}: {} | {}", time, entry.level, entry.component, entry.message, meta),
            None => format!("[{}] {} {}: {}", time, entry.level, entry.component, entry.message),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let line = JsValue::from_str(&Self::format(&entry));
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }
}

pub struct BrowserTimeProvider;

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        Date::now() as u64
    }

    /// `HH:MM:SS.mmm` in UTC.
    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_utc_hours(),
            date.get_utc_minutes(),
            date.get_utc_seconds(),
            date.get_utc_milliseconds()
        )
    }
}
