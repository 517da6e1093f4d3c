//! Error handling for the DSVis-RS application
//!
//! This module defines the error taxonomy and a Result alias for use
//! throughout the application. None of these errors is fatal: the session
//! turns every one of them into a no-op plus a status message.

use thiserror::Error;

use crate::types::{Mode, StructureKind};

/// Severity used when an error is surfaced as a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Main error type for DSVis-RS operations
#[derive(Error, Debug)]
pub enum VisError {
    /// Array append past capacity
    #[error("Array full: cannot add more than {capacity} elements")]
    CapacityExceeded { capacity: usize },

    /// Remove or step on an empty structure
    #[error("The {0} is empty: nothing to do")]
    EmptyStructure(StructureKind),

    /// Traversal handles were taken before the structure last changed
    #[error("Traversal snapshot is stale (built at revision {built}, structure at {current})")]
    StaleTraversalSnapshot { built: u64, current: u64 },

    /// A structure command was sent while another structure is on screen
    #[error("{requested} command ignored while in {active} mode")]
    ModeMismatch { requested: Mode, active: Mode },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<VisError>,
    },
}

impl VisError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        VisError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// How the error should be shown to the user
    pub fn level(&self) -> StatusLevel {
        match self {
            VisError::EmptyStructure(_) => StatusLevel::Info,
            VisError::WithContext { source, .. } => source.level(),
            _ => StatusLevel::Warning,
        }
    }
}

/// Result type alias for DSVis-RS operations
pub type Result<T> = std::result::Result<T, VisError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
