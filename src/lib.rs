//! First-mention auto-linking for article HTML.
//!
//! Rewrites published article HTML so that the first mention of any
//! known team or player name becomes a hyperlink, leaving all other
//! markup, whitespace, and repeated mentions untouched. Linking is a
//! cosmetic enhancement: every failure path degrades to fewer links,
//! never to a failed render or corrupted markup.
//!
//! # Pipeline
//!
//! ```text
//! config     policy flags (env-resolved once at startup)
//!   ↓
//! catalog    static teams + roster source → eligible entities
//!   ↓
//! context    per-article AutoLinkContext (honors opt-out)
//!   ↓
//! rewrite    pure HTML pass: first eligible mention → anchor
//! ```
//!
//! # Example
//!
//! ```
//! use autolink::{AutoLinkConfig, AutoLinkContext, TeamLink, apply_auto_links};
//!
//! let context = AutoLinkContext {
//!     teams: vec![TeamLink {
//!         name: "Chicago Bears".into(),
//!         slug: "chicago-bears".into(),
//!     }],
//!     players: Vec::new(),
//! };
//! let html = apply_auto_links(
//!     "<p>The Chicago Bears won. The Chicago Bears celebrated.</p>",
//!     &context,
//!     &AutoLinkConfig::default(),
//! );
//! // Only the first mention is linked
//! assert_eq!(html.matches("<a href").count(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod rewrite;
pub mod urls;
pub mod utils;

pub use catalog::roster::{PlayerLink, PlayerRow, RosterSource, player_links_for_team};
pub use catalog::{Team, TeamKey, TeamLink, all_team_links, team_for_category_slug};
pub use config::AutoLinkConfig;
pub use context::{AutoLinkContext, AutoLinker, ContextOptions};
pub use error::RosterError;
pub use rewrite::{apply_auto_links, apply_auto_links_with_opt_out};
pub use urls::{player_url_from_id, team_url_from_slug};
