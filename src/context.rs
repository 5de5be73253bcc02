//! Per-article link-context assembly.
//!
//! The context is the set of entities eligible for linking in one
//! article after policy flags and the per-article opt-out are applied.
//! It is built fresh per call and never persisted; concurrent builds for
//! the same article issue independent roster reads (read-only and
//! idempotent, so no coordination is needed).

use crate::catalog::roster::{PlayerLink, RosterSource, player_links_for_team};
use crate::catalog::{self, TeamLink};
use crate::config::AutoLinkConfig;

/// Entities eligible for linking in one article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoLinkContext {
    pub teams: Vec<TeamLink>,
    pub players: Vec<PlayerLink>,
}

impl AutoLinkContext {
    /// True when nothing is eligible for linking.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.players.is_empty()
    }
}

/// Per-article build options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextOptions {
    /// Per-article opt-out: short-circuits to an empty context without
    /// touching the catalog or the roster store.
    pub disable_auto_links: bool,
    /// The full team catalog is already returned whenever team links are
    /// enabled — an article mentioning any covered team gets the link,
    /// not only its own team. Call sites may set this to state that
    /// intent explicitly; it does not change the result.
    pub include_all_teams: bool,
}

/// Builds [`AutoLinkContext`]s from policy flags and a roster source.
pub struct AutoLinker<S> {
    config: AutoLinkConfig,
    roster: S,
}

impl<S: RosterSource> AutoLinker<S> {
    pub fn new(config: AutoLinkConfig, roster: S) -> Self {
        Self { config, roster }
    }

    /// The policy this linker was built with.
    pub fn config(&self) -> &AutoLinkConfig {
        &self.config
    }

    /// Assemble the link context for one article.
    ///
    /// Never fails: a roster fetch error degrades to an empty player
    /// list. Teams are the full catalog whenever team links are enabled;
    /// players are fetched when player links are enabled and the article
    /// either has no category or its category resolves to the team the
    /// roster source serves.
    pub async fn context_for_post(
        &self,
        post_id: &str,
        category_slug: Option<&str>,
        options: ContextOptions,
    ) -> AutoLinkContext {
        if options.disable_auto_links {
            log::debug!("auto-links disabled for post {post_id}");
            return AutoLinkContext::default();
        }

        let teams = self.catalog_teams();
        let players = if self.config.player_links && self.roster_covers(category_slug) {
            player_links_for_team(&self.roster).await
        } else {
            Vec::new()
        };

        log::debug!(
            "post {post_id}: {} teams, {} players eligible",
            teams.len(),
            players.len()
        );
        AutoLinkContext { teams, players }
    }

    /// Teams-only fast path: synchronous, no roster I/O.
    pub fn team_only_context(&self) -> AutoLinkContext {
        AutoLinkContext {
            teams: self.catalog_teams(),
            players: Vec::new(),
        }
    }

    fn catalog_teams(&self) -> Vec<TeamLink> {
        if self.config.team_links {
            catalog::all_team_links()
        } else {
            Vec::new()
        }
    }

    /// Whether the article's category falls under the roster source's
    /// team. No category means a site-wide article; the served roster
    /// applies. An unrecognized category resolves to no team and gets no
    /// players.
    fn roster_covers(&self, category_slug: Option<&str>) -> bool {
        match category_slug {
            None => true,
            Some(slug) => catalog::team_for_category_slug(slug)
                .is_some_and(|team| team.key == self.roster.team()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TeamKey;
    use crate::catalog::roster::PlayerRow;
    use crate::error::RosterError;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct BearsRoster {
        fail: bool,
    }

    #[async_trait]
    impl RosterSource for BearsRoster {
        fn team(&self) -> TeamKey {
            TeamKey::Bears
        }

        async fn active_players(&self) -> Result<Vec<PlayerRow>, RosterError> {
            if self.fail {
                return Err(RosterError::Query(anyhow!("timeout")));
            }
            Ok(vec![PlayerRow {
                id: "p1".into(),
                name: "Caleb Williams".into(),
                first_name: "Caleb".into(),
                last_name: "Williams".into(),
                is_active: true,
            }])
        }
    }

    fn linker(config: AutoLinkConfig) -> AutoLinker<BearsRoster> {
        AutoLinker::new(config, BearsRoster { fail: false })
    }

    #[tokio::test]
    async fn test_full_context() {
        let ctx = linker(AutoLinkConfig::default())
            .context_for_post("41", None, ContextOptions::default())
            .await;
        assert_eq!(ctx.teams.len(), 5);
        assert_eq!(ctx.players.len(), 1);
        assert_eq!(ctx.players[0].id, "caleb-williams");
    }

    #[tokio::test]
    async fn test_opt_out_short_circuits() {
        // A failing roster proves the opt-out path never reaches I/O.
        let linker = AutoLinker::new(AutoLinkConfig::default(), BearsRoster { fail: true });
        let ctx = linker
            .context_for_post(
                "41",
                Some("bears"),
                ContextOptions {
                    disable_auto_links: true,
                    include_all_teams: false,
                },
            )
            .await;
        assert!(ctx.is_empty());
    }

    #[tokio::test]
    async fn test_matching_category_fetches_players() {
        let ctx = linker(AutoLinkConfig::default())
            .context_for_post("41", Some("bears-film-room"), ContextOptions::default())
            .await;
        assert_eq!(ctx.players.len(), 1);
    }

    #[tokio::test]
    async fn test_other_team_category_skips_players() {
        let ctx = linker(AutoLinkConfig::default())
            .context_for_post("41", Some("chicago-bulls"), ContextOptions::default())
            .await;
        // Teams are still the full catalog — deliberate behavior.
        assert_eq!(ctx.teams.len(), 5);
        assert!(ctx.players.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_category_skips_players() {
        let ctx = linker(AutoLinkConfig::default())
            .context_for_post("41", Some("site-news"), ContextOptions::default())
            .await;
        assert!(ctx.players.is_empty());
    }

    #[tokio::test]
    async fn test_flags_empty_their_half() {
        let ctx = linker(AutoLinkConfig {
            team_links: false,
            ..AutoLinkConfig::default()
        })
        .context_for_post("41", None, ContextOptions::default())
        .await;
        assert!(ctx.teams.is_empty());
        assert_eq!(ctx.players.len(), 1);

        let ctx = linker(AutoLinkConfig {
            player_links: false,
            ..AutoLinkConfig::default()
        })
        .context_for_post("41", None, ContextOptions::default())
        .await;
        assert_eq!(ctx.teams.len(), 5);
        assert!(ctx.players.is_empty());
    }

    #[tokio::test]
    async fn test_roster_failure_degrades() {
        let linker = AutoLinker::new(AutoLinkConfig::default(), BearsRoster { fail: true });
        let ctx = linker
            .context_for_post("41", None, ContextOptions::default())
            .await;
        assert_eq!(ctx.teams.len(), 5);
        assert!(ctx.players.is_empty());
    }

    #[test]
    fn test_team_only_context_is_sync() {
        let ctx = linker(AutoLinkConfig::default()).team_only_context();
        assert_eq!(ctx.teams.len(), 5);
        assert!(ctx.players.is_empty());
    }
}
