use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("An error occurred while opening the configuration file: {0}")]
    ConfigFileError(#[from] std::io::Error),
    #[error("Error ocurred while parsing: {0}")]
    ParsingError(String),
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    testnet: Option<bool>,
    network: Option<String>,
    log_file: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn testnet(mut self, testnet: bool) -> ConfigBuilder {
        self.testnet = Some(testnet);
        self
    }

    pub fn network(mut self, network: String) -> ConfigBuilder {
        self.network = Some(network);
        self
    }

    pub fn log_file(mut self, log_file: String) -> ConfigBuilder {
        self.log_file = Some(log_file);
        self
    }

    pub fn build(self) -> Config {
        Config {
            testnet: self.testnet.unwrap_or(false),
            network: self.network,
            log_file: self.log_file,
        }
    }
}

/// Startup settings that decide which network's parameters are loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// The `-testnet` switch.
    pub testnet: bool,
    /// Explicit network name, takes precedence over `testnet`.
    pub network: Option<String>,
    pub log_file: Option<String>,
}

const SEPARATOR: char = '=';

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::ParsingError(field.to_string())),
    }
}

impl Config {
    pub fn new<P: AsRef<Path>>(config_file_path: P) -> Result<Config, ConfigError> {
        let file = File::open(config_file_path)?;
        Config::read_from(BufReader::new(file))
    }

    pub fn read_from<R: BufRead>(reader: R) -> Result<Config, ConfigError> {
        let mut builder = ConfigBuilder::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.splitn(2, SEPARATOR).collect();
            if parts.len() < 2 {
                continue;
            }

            let value = match parts[1].split_whitespace().next() {
                None => continue,
                Some(i) => i,
            };

            builder = match parts[0].trim().to_lowercase().as_str() {
                "testnet" => builder.testnet(parse_bool("testnet", &value.to_lowercase())?),
                "network" => builder.network(value.to_string()),
                "log_file" => builder.log_file(value.to_string()),
                _ => {
                    continue;
                }
            }
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_to_main() {
        let config = Config::read_from("".as_bytes()).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.testnet);
    }

    #[test]
    fn test_reads_known_keys() {
        let text = "# node settings\ntestnet = 1\nNETWORK=testnet\nlog_file=params.log\nunknown=3\n";
        let config = Config::read_from(text.as_bytes()).unwrap();

        assert!(config.testnet);
        assert_eq!(config.network.as_deref(), Some("testnet"));
        assert_eq!(config.log_file.as_deref(), Some("params.log"));
    }

    #[test]
    fn test_rejects_bad_bool() {
        let result = Config::read_from("testnet=maybe".as_bytes());
        assert!(matches!(result, Err(ConfigError::ParsingError(field)) if field == "testnet"));
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "testnet=true").unwrap();

        let config = Config::new(file.path()).unwrap();
        assert!(config.testnet);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::new("/nonexistent/node.conf"),
            Err(ConfigError::ConfigFileError(_))
        ));
    }
}
