//! Roster data access and player-link mapping.
//!
//! The roster store is external (a managed database owned by the wider
//! platform); this module defines the seam and the row-to-link mapping.
//! A fetch failure is logged and degrades to an empty player list — an
//! article simply renders with fewer auto-links.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::TeamKey;
use crate::error::RosterError;
use crate::utils::slug::slugify;

/// One roster row as returned by the external player store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

/// A linkable player: display name plus URL-routable identifier.
///
/// The id is derived from the name via [`slugify`] — deterministic, so
/// the same player always resolves to the same player-page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLink {
    pub name: String,
    pub id: String,
}

/// Async access to one team's active roster.
///
/// A source serves exactly one team, mirroring the platform's current
/// data availability. Covering more teams means resolving the article's
/// category to a team and dispatching to that team's source.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// The team this source serves.
    fn team(&self) -> TeamKey;

    /// Active players for the served team, ordered by name.
    ///
    /// Implementations filter to active players server-side where they
    /// can; the mapping layer re-filters regardless.
    async fn active_players(&self) -> Result<Vec<PlayerRow>, RosterError>;
}

/// Fetch the served team's roster and map it to player links.
///
/// Inactive rows are dropped, the display name falls back to
/// `first_name last_name` when `name` is blank, and the result is sorted
/// by name so repeated builds see the same order. On failure this logs a
/// warning and returns an empty list.
pub async fn player_links_for_team<S: RosterSource + ?Sized>(source: &S) -> Vec<PlayerLink> {
    let rows = match source.active_players().await {
        Ok(rows) => rows,
        Err(err) => {
            log::warn!("roster fetch failed for {}: {err:#}", source.team());
            return Vec::new();
        }
    };

    let mut players: Vec<PlayerLink> = rows
        .into_iter()
        .filter(|row| row.is_active)
        .filter_map(|row| {
            let name = display_name(&row);
            if name.is_empty() {
                return None;
            }
            Some(PlayerLink {
                id: slugify(&name),
                name,
            })
        })
        .collect();
    players.sort_by(|a, b| a.name.cmp(&b.name));
    players
}

/// Display name for a roster row, preferring the canonical `name` field.
fn display_name(row: &PlayerRow) -> String {
    let name = row.name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    format!("{} {}", row.first_name.trim(), row.last_name.trim())
        .trim()
        .to_string()
}
