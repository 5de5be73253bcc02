//! First-mention HTML rewriting.
//!
//! Rewrites article HTML so the first mention of each eligible team or
//! player name becomes a hyperlink, and nothing else changes:
//!
//! - at most one link per entity per document, repeats stay bare
//! - the earliest tag-external, anchor-external occurrence wins
//! - teams are processed before players; on a display-name collision
//!   the team claims the mention
//! - the original casing of the matched text is preserved
//! - malformed markup degrades toward under-linking, never corruption
//!
//! Pure string transformation: no I/O, no shared state beyond the
//! per-call linked-names set, safe to run concurrently per request.

mod scan;

use regex::RegexBuilder;
use rustc_hash::FxHashSet;

use crate::config::AutoLinkConfig;
use crate::context::AutoLinkContext;
use crate::urls::{player_url_from_id, team_url_from_slug};
use scan::first_eligible_span;

/// Rewrite `html` so the first mention of each eligible entity is a link.
///
/// Total: empty input or an empty context returns the input unchanged,
/// and no input can make this fail — worst case is a no-op rewrite.
pub fn apply_auto_links(html: &str, context: &AutoLinkContext, config: &AutoLinkConfig) -> String {
    if html.is_empty() || context.is_empty() {
        return html.to_string();
    }

    let mut result = html.to_string();
    // At most one link per entity per document, keyed by exact display
    // name — "Bears" claiming a mention does not block "Bearsson".
    let mut linked_names: FxHashSet<String> = FxHashSet::default();

    if config.team_links {
        for team in &context.teams {
            link_first_mention(
                &mut result,
                &mut linked_names,
                &team.name,
                &team_url_from_slug(&team.slug),
                config.case_sensitive,
            );
        }
    }

    // Players see the already-linked state of the team pass.
    if config.player_links {
        for player in &context.players {
            link_first_mention(
                &mut result,
                &mut linked_names,
                &player.name,
                &player_url_from_id(&player.id),
                config.case_sensitive,
            );
        }
    }

    result
}

/// Opt-out wrapper: returns `html` verbatim when `disable_auto_links` is
/// set, otherwise delegates to [`apply_auto_links`].
pub fn apply_auto_links_with_opt_out(
    html: &str,
    context: &AutoLinkContext,
    config: &AutoLinkConfig,
    disable_auto_links: bool,
) -> String {
    if disable_auto_links {
        html.to_string()
    } else {
        apply_auto_links(html, context, config)
    }
}

/// Wrap the earliest eligible mention of `name` in an anchor to `href`.
///
/// No-op when the name was already linked in this pass, or when every
/// occurrence sits inside a tag or an existing link.
fn link_first_mention(
    html: &mut String,
    linked_names: &mut FxHashSet<String>,
    name: &str,
    href: &str,
    case_sensitive: bool,
) {
    if name.is_empty() || linked_names.contains(name) {
        return;
    }

    let pattern = format!(r"\b{}\b", regex::escape(name));
    let Ok(re) = RegexBuilder::new(&pattern)
        .case_insensitive(!case_sensitive)
        .build()
    else {
        // A name that cannot form a pattern is left unlinked.
        return;
    };

    let Some((start, end)) = first_eligible_span(html, &re) else {
        return;
    };

    let anchor = format!(r#"<a href="{href}">{}</a>"#, &html[start..end]);
    html.replace_range(start..end, &anchor);
    linked_names.insert(name.to_string());
}
