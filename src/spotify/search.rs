use reqwest::Client;

use crate::{
    config,
    management::TokenManager,
    spotify::request::{self, ApiError},
    types::SearchResponse,
    utils,
};

/// Resolves a recognized (artist, title) pair to a Spotify track URI.
///
/// Strips any parenthetical suffix from the title, builds an exact-field
/// `track:<title> artist:<artist>` query, and asks the search endpoint for a
/// single candidate through the refresh-and-retry wrapper. The first returned
/// track wins; an empty result set is a soft "no match", not an error.
///
/// This is a single-shot heuristic. There is no fuzzy scoring and no fallback
/// query relaxation beyond the one title-cleaning step, so a parenthetical
/// that was actually meaningful (a specific remaster, a different take) can
/// miss or mismatch.
///
/// # Arguments
///
/// * `artist` - Artist name as recognized
/// * `title` - Track title as recognized, possibly carrying a parenthetical
///   version annotation
/// * `tokens` - Credential state used for bearer auth and refresh-and-retry
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(uri))` - URI of the first matching track
/// - `Ok(None)` - The result set was empty
/// - `Err(ApiError)` - Authorization, upstream, or transport failure
pub async fn search_track(
    artist: &str,
    title: &str,
    tokens: &mut TokenManager,
) -> Result<Option<String>, ApiError> {
    let query = utils::build_search_query(artist, title);

    tokens
        .authorized(|token| {
            let query = query.clone();
            async move {
                let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

                let client = Client::new();
                let response = client
                    .get(&api_url)
                    .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
                    .bearer_auth(&token)
                    .send()
                    .await?;
                let response = request::check(response).await?;

                let res = response.json::<SearchResponse>().await?;
                Ok(res.tracks.items.first().map(|track| track.uri.clone()))
            }
        })
        .await
}
