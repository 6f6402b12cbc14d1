use thiserror::Error;

/// Errors raised by the controller and the session.
///
/// Neither is surfaced to the user; the web layer logs and drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// A hover selection id outside `0..=2`.
    #[error("invalid region selection id {0}")]
    InvalidSelection(u32),
    /// An event arrived before the scene host was attached (or after it was detached).
    #[error("scene host unavailable")]
    HostUnavailable,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed globe config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid globe config: {0}")]
    Invalid(String),
}
