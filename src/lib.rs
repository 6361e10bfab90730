//! MEDLEY - Terminal Media Shelf
//!
//! A single-screen TUI application shell: slide-out navigation drawer,
//! top app bar, bottom tab bar, and a set of content screens wired
//! together through a back-stack navigation controller.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod nav;
pub mod routes;

// Common error types
#[derive(Debug)]
pub enum MedleyError {
    /// Navigation target not present in the route registry
    UnknownRoute(String),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// I/O operation failed
    IoError(std::io::Error),
}

impl fmt::Display for MedleyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedleyError::UnknownRoute(id) => write!(f, "Unknown route: {}", id),
            MedleyError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MedleyError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            MedleyError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for MedleyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MedleyError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MedleyError {
    fn from(err: std::io::Error) -> Self {
        MedleyError::IoError(err)
    }
}

impl From<toml::de::Error> for MedleyError {
    fn from(err: toml::de::Error) -> Self {
        MedleyError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MedleyError {
    fn from(err: toml::ser::Error) -> Self {
        MedleyError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for MEDLEY operations
pub type Result<T> = std::result::Result<T, MedleyError>;

// Common constants
pub const APP_NAME: &str = "medley";
pub const APP_TITLE: &str = "Medley";
pub const CONFIG_FILE: &str = "medley.toml";
