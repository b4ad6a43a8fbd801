//! Checks applied to `page.toml` entries. Shared with `build.rs`.

use std::fmt;

pub const EVASION_THRESHOLD_MAX: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyField { field: String },
    MissingPlaceholder { field: String },
    ThresholdOutOfRange { value: u32, max: u32 },
    RemoteAudio { field: String },
    DataUrlAudio { field: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyField { field } => write!(f, "field '{field}' cannot be empty"),
            ConfigError::MissingPlaceholder { field } => {
                write!(f, "field '{field}' must contain {{name}}")
            }
            ConfigError::ThresholdOutOfRange { value, max } => {
                write!(f, "evasion_threshold {value} must be within 1..={max}")
            }
            ConfigError::RemoteAudio { field } => {
                write!(f, "audio '{field}' src cannot be a URL")
            }
            ConfigError::DataUrlAudio { field } => {
                write!(f, "audio '{field}' src cannot be a data URL")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn check_text(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub fn check_named_question(field: &str, value: &str) -> Result<(), ConfigError> {
    check_text(field, value)?;
    if !value.contains("{name}") {
        return Err(ConfigError::MissingPlaceholder {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub fn check_threshold(value: u32) -> Result<(), ConfigError> {
    if value == 0 || value > EVASION_THRESHOLD_MAX {
        return Err(ConfigError::ThresholdOutOfRange {
            value,
            max: EVASION_THRESHOLD_MAX,
        });
    }
    Ok(())
}

pub fn check_audio_src(field: &str, src: &str) -> Result<(), ConfigError> {
    let src = src.trim();
    if src.is_empty() {
        return Err(ConfigError::EmptyField {
            field: format!("audio.{field}"),
        });
    }
    if src.starts_with("http://") || src.starts_with("https://") {
        return Err(ConfigError::RemoteAudio {
            field: field.to_string(),
        });
    }
    if src.starts_with("data:") {
        return Err(ConfigError::DataUrlAudio {
            field: field.to_string(),
        });
    }
    Ok(())
}
