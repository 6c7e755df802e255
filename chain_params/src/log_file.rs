use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record};

use std::{fs::OpenOptions, io::Write};

use crate::chain_params_error::ChainParamsError;

/// Appends timestamped records to a file. The file is truncated when the
/// logger is created.
#[derive(Debug)]
pub struct Logger {
    filepath: String,
    level: LevelFilter,
}

impl Logger {
    pub fn new(filepath: String, level: LevelFilter) -> Result<Logger, ChainParamsError> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&filepath)?;

        Ok(Logger { filepath, level })
    }

    /// Installs the logger as the global `log` backend. Fails without
    /// installing anything when the file cannot be opened.
    pub fn init(filepath: String, level: LevelFilter) -> Result<(), ChainParamsError> {
        let logger = Logger::new(filepath, level)?;
        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| ChainParamsError::LoggerError(e.to_string()))
    }

    fn format(record: &Record) -> String {
        let timestamp = Utc::now().format("%y-%m-%d %H:%M:%S");
        match record.level() {
            Level::Error => format!("{}: ERROR: {}", timestamp, record.args()),
            level => format!(
                "{}: {} {}: {}",
                timestamp,
                level,
                record.target(),
                record.args()
            ),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let res = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.filepath);

        let mut file = match res {
            Ok(f) => f,
            Err(e) => {
                eprintln!("LOGGING ERROR: Couldn't open the log file: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(file, "{}", Logger::format(record)) {
            eprintln!("LOGGING ERROR: Couldn't write to file: {}", e);
        }
    }

    fn flush(&self) {}
}
