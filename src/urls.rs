//! Canonical URL builders for linked entities.
//!
//! Team pages live under the canonical site origin as absolute URLs;
//! player pages are site-relative so the rendering layer can serve them
//! from any deployment host.

use std::sync::LazyLock;

use url::Url;

/// Canonical site origin for absolute team URLs.
pub const SITE_ORIGIN: &str = "https://www.chicagosportshq.com";

static ORIGIN: LazyLock<Option<Url>> = LazyLock::new(|| Url::parse(SITE_ORIGIN).ok());

/// Absolute URL for a team page under the canonical site origin.
///
/// # Examples
/// ```
/// use autolink::urls::team_url_from_slug;
/// assert_eq!(
///     team_url_from_slug("chicago-bears"),
///     "https://www.chicagosportshq.com/chicago-bears"
/// );
/// ```
pub fn team_url_from_slug(slug: &str) -> String {
    let path = slug.trim_start_matches('/');
    match ORIGIN.as_ref().and_then(|origin| origin.join(path).ok()) {
        Some(url) => url.to_string(),
        // Unreachable with the static origin; a join failure must not panic.
        None => format!("{}/{path}", SITE_ORIGIN.trim_end_matches('/')),
    }
}

/// Site-relative URL for a player page.
///
/// # Examples
/// ```
/// use autolink::urls::player_url_from_id;
/// assert_eq!(player_url_from_id("walter-payton"), "/players/walter-payton");
/// ```
#[inline]
pub fn player_url_from_id(id: &str) -> String {
    format!("/players/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_url_is_absolute() {
        let url = team_url_from_slug("chicago-bears");
        assert!(url.starts_with("https://"));
        assert!(url.ends_with("/chicago-bears"));
    }

    #[test]
    fn test_team_url_leading_slash_normalized() {
        assert_eq!(
            team_url_from_slug("/chicago-bulls"),
            team_url_from_slug("chicago-bulls")
        );
    }

    #[test]
    fn test_player_url_is_site_relative() {
        assert_eq!(player_url_from_id("dj-moore"), "/players/dj-moore");
        assert!(!player_url_from_id("dj-moore").starts_with("http"));
    }
}
