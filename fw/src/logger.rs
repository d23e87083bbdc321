use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records from the driver crate to defmt.
struct DefmtLog;

impl Log for DefmtLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        let target = record.target();
        let args = defmt::Display2Format(record.args());
        match record.level() {
            Level::Error => defmt::error!("[{=str}] {}", target, args),
            Level::Warn => defmt::warn!("[{=str}] {}", target, args),
            Level::Info => defmt::info!("[{=str}] {}", target, args),
            Level::Debug => defmt::debug!("[{=str}] {}", target, args),
            Level::Trace => defmt::trace!("[{=str}] {}", target, args),
        }
    }

    fn flush(&self) {}
}

static LOGGER: DefmtLog = DefmtLog;

/// Must run first in `main`, before interrupts or other tasks exist.
pub fn init() {
    // thumbv6m has no atomic CAS, so only the racy setters are available.
    unsafe {
        let _ = log::set_logger_racy(&LOGGER);
        log::set_max_level_racy(LevelFilter::Debug);
    }
}
