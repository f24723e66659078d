//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record severity, ordered from least to most severe.
///
/// Discriminants are the RFC 5424 derived codes used by the line and JSON
/// formatters (`%level%`, `"level"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 100,
    #[default]
    Info = 200,
    Notice = 250,
    Warning = 300,
    Error = 400,
    Critical = 500,
    Alert = 550,
    Emergency = 600,
}

impl LogLevel {
    /// All levels in ascending severity
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Notice,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::Alert,
        LogLevel::Emergency,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Notice => "NOTICE",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Alert => "ALERT",
            LogLevel::Emergency => "EMERGENCY",
        }
    }

    /// Numeric severity code
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Look up a level by its numeric code
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|level| level.code() == code)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Notice => Cyan,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical | LogLevel::Alert | LogLevel::Emergency => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "NOTICE" => Ok(LogLevel::Notice),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            "ALERT" => Ok(LogLevel::Alert),
            "EMERGENCY" => Ok(LogLevel::Emergency),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl TryFrom<u16> for LogLevel {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, String> {
        Self::from_code(code).ok_or_else(|| format!("Invalid log level code: {}", code))
    }
}
