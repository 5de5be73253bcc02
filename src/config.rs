//! Auto-link policy configuration.
//!
//! Feature flags for the auto-link pass. Flags are resolved from the
//! process environment once at startup and passed explicitly into the
//! context builder and rewriter; nothing in this crate re-reads the
//! environment per call.
//!
//! | Variable                   | Field            | Disabled by       |
//! |----------------------------|------------------|-------------------|
//! | `AUTO_LINK_TEAMS`          | `team_links`     | literal `"false"` |
//! | `AUTO_LINK_PLAYERS`        | `player_links`   | literal `"false"` |
//! | `AUTO_LINK_CASE_SENSITIVE` | `case_sensitive` | literal `"false"` |
//!
//! Absence or any other value keeps the enabled default.

use serde::{Deserialize, Serialize};

/// Environment variable gating team-name linking.
pub const ENV_TEAM_LINKS: &str = "AUTO_LINK_TEAMS";
/// Environment variable gating player-name linking.
pub const ENV_PLAYER_LINKS: &str = "AUTO_LINK_PLAYERS";
/// Environment variable gating exact-case matching.
pub const ENV_CASE_SENSITIVE: &str = "AUTO_LINK_CASE_SENSITIVE";

/// Feature flags for one auto-link pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoLinkConfig {
    /// Link team names.
    pub team_links: bool,
    /// Link player names.
    pub player_links: bool,
    /// Match entity names with their exact case. When false, matching is
    /// case-insensitive; either way the original casing of the matched
    /// text is preserved in the output.
    pub case_sensitive: bool,
}

impl Default for AutoLinkConfig {
    fn default() -> Self {
        Self {
            team_links: true,
            player_links: true,
            case_sensitive: true,
        }
    }
}

impl AutoLinkConfig {
    /// Resolve flags from the process environment.
    ///
    /// A feature is disabled only by the literal string `"false"`.
    pub fn from_env() -> Self {
        Self {
            team_links: env_flag(ENV_TEAM_LINKS),
            player_links: env_flag(ENV_PLAYER_LINKS),
            case_sensitive: env_flag(ENV_CASE_SENSITIVE),
        }
    }
}

/// True unless the variable is set to exactly `"false"`.
fn env_flag(var: &str) -> bool {
    std::env::var(var).map_or(true, |value| value != "false")
}
