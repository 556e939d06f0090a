use rand::{Rng, distr::Alphanumeric};

/// Random nonce for the OAuth `state` parameter. Echoed back by the provider
/// on the redirect and checked by the callback handler.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Strips a parenthetical suffix from a track title before searching.
///
/// Recognized titles often carry annotations like "(Live Version)" or
/// "(Remastered 2011)" that defeat an exact-field track query. The span from
/// the first `(` to the last `)` is removed and the remainder trimmed. Titles
/// without a matching pair of parentheses pass through unchanged.
pub fn clean_title(title: &str) -> String {
    let cleaned = match (title.find('('), title.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            let mut s = String::with_capacity(title.len());
            s.push_str(&title[..open]);
            s.push_str(&title[close + 1..]);
            s
        }
        _ => title.to_string(),
    };
    cleaned.trim().to_string()
}

/// Builds the exact-field search query for a recognized (artist, title) pair,
/// e.g. `track:Song artist:Band`.
pub fn build_search_query(artist: &str, title: &str) -> String {
    format!(
        "track:{title} artist:{artist}",
        title = clean_title(title),
        artist = artist
    )
}
