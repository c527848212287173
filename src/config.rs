use serde::{Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;

use crate::coordinates::CoordinateFormat;
use crate::image::ImageConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("port must be between 1 and 65535")]
    InvalidPort,
    #[error("no MQTT broker provided")]
    NoBroker,
    #[error("MQTT topic prefix must not be empty")]
    EmptyPrefix,
    #[error("MQTT keep alive must be zero or at least one second")]
    KeepAliveTooShort,
    #[error("FOV must be greater than 0")]
    FovTooSmall,
    #[error("image width must be greater than 0")]
    InvalidWidth,
    #[error("image height must be greater than 0")]
    InvalidHeight,
    #[error("min cut must be between 0 and 100 (exclusive)")]
    MinCutOutOfRange,
    #[error("max cut must be between 0 and 100 (exclusive)")]
    MaxCutOutOfRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub web: WebConfig,
    pub mqtt: MqttConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl WebConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct MqttConfig {
    #[serde(default)]
    pub broker: String,
    #[serde(default = "default_client_id")]
    pub client_id: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_keep_alive", deserialize_with = "deserialize_duration")]
    pub keep_alive: Duration,
    #[serde(
        default = "default_connect_timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub connect_timeout: Duration,
}

fn default_client_id() -> String {
    "wheresmyscope".to_string()
}

fn default_prefix() -> String {
    "wheresmyscope".to_string()
}

fn default_keep_alive() -> Duration {
    Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub coordinate_format: CoordinateFormat,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.web.port == 0 {
            return Err(ValidationError::InvalidPort);
        }

        if self.mqtt.broker.trim().is_empty() {
            return Err(ValidationError::NoBroker);
        }

        if self.mqtt.prefix.is_empty() {
            return Err(ValidationError::EmptyPrefix);
        }

        let keep_alive = self.mqtt.keep_alive;
        if !keep_alive.is_zero() && keep_alive < Duration::from_secs(1) {
            return Err(ValidationError::KeepAliveTooShort);
        }

        let image = &self.image;
        if image.fov <= 0.0 {
            return Err(ValidationError::FovTooSmall);
        }

        if image.width == 0 {
            return Err(ValidationError::InvalidWidth);
        }

        if image.height == 0 {
            return Err(ValidationError::InvalidHeight);
        }

        if image.min_cut <= 0.0 || image.min_cut >= 100.0 {
            return Err(ValidationError::MinCutOutOfRange);
        }

        if image.max_cut <= 0.0 || image.max_cut >= 100.0 {
            return Err(ValidationError::MaxCutOutOfRange);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageFormat, Projection, Stretch};

    const MINIMAL: &str = "mqtt:\n  broker: mqtt://localhost:1883\n";

    fn minimal() -> Config {
        Config::from_yaml_str(MINIMAL).unwrap()
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = minimal();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.web.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.mqtt.client_id, "wheresmyscope");
        assert_eq!(config.mqtt.prefix, "wheresmyscope");
        assert_eq!(config.mqtt.username, None);
        assert_eq!(config.mqtt.keep_alive, Duration::from_secs(30));
        assert_eq!(config.mqtt.connect_timeout, Duration::from_secs(10));
        assert_eq!(
            config.telemetry.coordinate_format,
            CoordinateFormat::Sexagesimal
        );
        assert_eq!(config.image, ImageConfig::default());
    }

    #[test]
    fn full_config_parses() {
        let yaml = r#"
log_level: debug
web:
  host: 127.0.0.1
  port: 9090
mqtt:
  broker: mqtts://broker.example.org
  client_id: observatory
  prefix: obs/scope1
  username: scope
  password: hunter2
  keep_alive: 1m
  connect_timeout: 2s
telemetry:
  coordinate_format: decimal
image:
  projection: AIT
  hips: CDS/P/2MASS/color
  fov: 0.5
  format: jpeg
  width: 800
  height: 600
  stretch: asinh
  min_cut: 1
  max_cut: 99
"#;
        let config = Config::from_yaml_str(yaml).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.web.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.mqtt.prefix, "obs/scope1");
        assert_eq!(config.mqtt.password.as_deref(), Some("hunter2"));
        assert_eq!(config.mqtt.keep_alive, Duration::from_secs(60));
        assert_eq!(config.mqtt.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.telemetry.coordinate_format, CoordinateFormat::Decimal);
        assert_eq!(config.image.projection, Projection::HammerAitoff);
        assert_eq!(config.image.format, ImageFormat::Jpeg);
        assert_eq!(config.image.stretch, Stretch::Asinh);
        assert_eq!(config.image.width, 800);
        assert_eq!(config.image.min_cut, 1.0);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let yaml = format!("log_level: verbose\n{MINIMAL}");
        assert!(matches!(
            Config::from_yaml_str(&yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn unknown_projection_is_rejected() {
        let yaml = format!("{MINIMAL}image:\n  projection: XYZ\n");
        assert!(matches!(
            Config::from_yaml_str(&yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn bad_duration_is_rejected() {
        let yaml = "mqtt:\n  broker: mqtt://localhost\n  keep_alive: soon\n";
        assert!(matches!(
            Config::from_yaml_str(yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn missing_broker_is_rejected() {
        let result = Config::from_yaml_str("mqtt:\n  prefix: scope\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(ValidationError::NoBroker))
        ));
    }

    #[test]
    fn sub_second_keep_alive_is_rejected() {
        let yaml = "mqtt:\n  broker: mqtt://localhost\n  keep_alive: 500ms\n";
        assert!(matches!(
            Config::from_yaml_str(yaml),
            Err(ConfigError::Invalid(ValidationError::KeepAliveTooShort))
        ));
    }

    #[test]
    fn port_validation() {
        let cases = [(8080, None), (1, None), (0, Some(ValidationError::InvalidPort))];
        for (port, expected) in cases {
            let mut config = minimal();
            config.web.port = port;
            assert_eq!(config.validate().err(), expected, "port {port}");
        }
    }

    #[test]
    fn image_validation() {
        let cases: [(fn(&mut ImageConfig), ValidationError); 7] = [
            (|i| i.fov = 0.0, ValidationError::FovTooSmall),
            (|i| i.width = 0, ValidationError::InvalidWidth),
            (|i| i.height = 0, ValidationError::InvalidHeight),
            (|i| i.min_cut = 0.0, ValidationError::MinCutOutOfRange),
            (|i| i.min_cut = 100.0, ValidationError::MinCutOutOfRange),
            (|i| i.max_cut = -1.0, ValidationError::MaxCutOutOfRange),
            (|i| i.max_cut = 100.0, ValidationError::MaxCutOutOfRange),
        ];
        for (mutate, expected) in cases {
            let mut config = minimal();
            mutate(&mut config.image);
            assert_eq!(config.validate(), Err(expected));
        }
    }
}
