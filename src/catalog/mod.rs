//! Static team catalog.
//!
//! The platform covers the five Chicago franchises. The table below is
//! the full universe of linkable teams; declaration order is catalog
//! order and is the tie-break wherever a lookup could match more than
//! one team.

pub mod roster;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Team identity
// =============================================================================

/// Typed identity for a covered franchise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamKey {
    Bears,
    Bulls,
    Cubs,
    WhiteSox,
    Blackhawks,
}

impl TeamKey {
    /// Stable lowercase identifier, matching the team's short name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bears => "bears",
            Self::Bulls => "bulls",
            Self::Cubs => "cubs",
            Self::WhiteSox => "white-sox",
            Self::Blackhawks => "blackhawks",
        }
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One franchise in the static configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub key: TeamKey,
    /// Display name as it appears in article text.
    pub name: &'static str,
    /// URL path segment under the site origin.
    pub slug: &'static str,
    /// Loose identifier used in category names ("bears-film-room").
    pub short_name: &'static str,
}

/// Full universe of linkable teams, in declaration order.
pub const TEAMS: &[Team] = &[
    Team {
        key: TeamKey::Bears,
        name: "Chicago Bears",
        slug: "chicago-bears",
        short_name: "bears",
    },
    Team {
        key: TeamKey::Bulls,
        name: "Chicago Bulls",
        slug: "chicago-bulls",
        short_name: "bulls",
    },
    Team {
        key: TeamKey::Cubs,
        name: "Chicago Cubs",
        slug: "chicago-cubs",
        short_name: "cubs",
    },
    Team {
        key: TeamKey::WhiteSox,
        name: "Chicago White Sox",
        slug: "chicago-white-sox",
        short_name: "white-sox",
    },
    Team {
        key: TeamKey::Blackhawks,
        name: "Chicago Blackhawks",
        slug: "chicago-blackhawks",
        short_name: "blackhawks",
    },
];

// =============================================================================
// Link records
// =============================================================================

/// A linkable team: display name plus URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLink {
    pub name: String,
    pub slug: String,
}

impl From<&Team> for TeamLink {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.to_string(),
            slug: team.slug.to_string(),
        }
    }
}

/// Every configured team, in catalog declaration order. Infallible.
pub fn all_team_links() -> Vec<TeamLink> {
    TEAMS.iter().map(TeamLink::from).collect()
}

// =============================================================================
// Category resolution
// =============================================================================

/// Resolve a loosely-formatted category identifier to a team.
///
/// Case-insensitive. Accepts an exact slug, substring containment in
/// either direction, or the team's short name appearing in the category.
/// First match in declaration order wins; `None` when nothing matches.
///
/// # Examples
/// ```
/// use autolink::catalog::{team_for_category_slug, TeamKey};
///
/// let team = team_for_category_slug("bears-film-room").unwrap();
/// assert_eq!(team.key, TeamKey::Bears);
/// assert!(team_for_category_slug("ufc").is_none());
/// ```
pub fn team_for_category_slug(category_slug: &str) -> Option<&'static Team> {
    let query = category_slug.trim().to_ascii_lowercase();
    if query.is_empty() {
        return None;
    }
    TEAMS.iter().find(|team| {
        query == team.slug
            || team.slug.contains(&query)
            || query.contains(team.slug)
            || query.contains(team.short_name)
    })
}
