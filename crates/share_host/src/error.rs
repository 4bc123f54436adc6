//! Errors raised by share adapter plumbing.
//!
//! Capability absence and missing metadata are not errors; only failures of the host's DOM or
//! global-object plumbing surface here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures while configuring or wiring the share adapter into its host.
pub enum ShareError {
    /// Serialized configuration could not be parsed.
    #[error("invalid share config: {0}")]
    Config(String),
    /// The marker class could not be added to the document body.
    #[error("failed to add marker class `{class}`: {reason}")]
    Marker {
        /// Class that was being added.
        class: String,
        /// Host-reported failure.
        reason: String,
    },
    /// The share handle could not be published into the global namespace.
    #[error("failed to register `{namespace}.{member}`: {reason}")]
    Namespace {
        /// Namespace object name.
        namespace: String,
        /// Member name inside the namespace.
        member: String,
        /// Host-reported failure.
        reason: String,
    },
}
