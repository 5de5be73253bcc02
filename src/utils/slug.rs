//! URL slug derivation for player identifiers.

/// Derive a deterministic, URL-safe slug from a display name.
///
/// Lowercase, strip everything outside `[a-z0-9 -]`, collapse whitespace
/// runs to a single hyphen, collapse repeated hyphens, trim hyphens at
/// both ends. Total and deterministic: the same name always yields the
/// same slug.
///
/// # Examples
/// ```
/// use autolink::utils::slug::slugify;
/// assert_eq!(slugify("Walter Payton"), "walter-payton");
/// assert_eq!(slugify("D'Andre  Swift"), "dandre-swift");
/// assert_eq!(slugify(" -- Odd  Name-- "), "odd-name");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;
    for c in lowered.chars() {
        let mapped = match c {
            'a'..='z' | '0'..='9' => c,
            '-' => '-',
            c if c.is_whitespace() => '-',
            _ => continue,
        };
        if mapped == '-' {
            // Collapses both whitespace runs and repeated hyphens
            if prev_hyphen {
                continue;
            }
            prev_hyphen = true;
        } else {
            prev_hyphen = false;
        }
        slug.push(mapped);
    }
    slug.trim_matches('-').to_string()
}
