//! Error types for the Confer layout engine.
//!
//! Region calculators are total and never fail. Errors only arise at the
//! edges: loading configuration and talking to the session store.

use thiserror::Error;

/// Top-level error type for the layout engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors in user-supplied layout constants.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Layout constant '{name}' must be a finite non-negative number, got {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("Layout constant '{name}' must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Sidebar breakpoints must be strictly increasing, got {breakpoints:?}")]
    UnorderedBreakpoints { breakpoints: [f64; 3] },

    #[error("Invalid range for '{name}': min {min} exceeds max {max}")]
    InvertedRange { name: &'static str, min: f64, max: f64 },
}

/// Errors reading or writing the session store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Malformed value stored under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session storage unavailable: {reason}")]
    Unavailable { reason: String },
}
