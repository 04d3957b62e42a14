//! Common error infrastructure for gamestate-core.
//!
//! Domain-specific errors (e.g. [`crate::MemoryError`], [`crate::DecodeError`])
//! live next to the components that raise them. This module only carries the
//! shared severity classification.
//!
//! # Severity mapping
//!
//! - **Fatal**: the memory interface is gone; the decode cycle aborts.
//! - **Validation**: a caller asked for something outside the screen grid.
//! - **Recoverable**: unknown tileset ids and auxiliary detector failures. The
//!   snapshot is still produced, with a warning or an unset flag.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Decoding continues with a degraded value.
    ///
    /// Examples: unknown tileset id, unresolvable warp destination
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: screen coordinate outside the 20×18 grid
    Validation,

    /// Unexpected inconsistency between decoded values.
    ///
    /// Examples: a deserialized tile record that breaks its invariants
    Internal,

    /// Cannot continue the decode cycle.
    ///
    /// Examples: memory interface unavailable
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error must abort the current decode cycle.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all gamestate-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait DecoderError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
