//! Error types for the roster-source seam.

use thiserror::Error;

use crate::catalog::TeamKey;

/// Errors a roster backend can surface.
///
/// These never escape the context builder: a failed roster fetch is
/// logged and degraded to an empty player list. Auto-linking is a
/// cosmetic enhancement, never a hard dependency of a page render.
#[derive(Debug, Error)]
pub enum RosterError {
    /// No roster backend is configured for the requested team.
    #[error("no roster source configured for `{0}`")]
    Unconfigured(TeamKey),

    /// The backend query failed. Implementations wrap their own error
    /// types (database driver, HTTP client) through `anyhow`.
    #[error("roster query failed")]
    Query(#[from] anyhow::Error),
}
