use reqwest::Client;

use crate::{
    config,
    management::TokenManager,
    spotify::{
        request::{self, ApiError},
        search,
    },
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, GetUserPlaylistsResponse, Playlist,
        SongGuess,
    },
};

/// Lists the authenticated user's playlists.
///
/// Issues `GET /me/playlists` through the refresh-and-retry wrapper and maps
/// the response down to `{id, name}` references. Playlists are read-only for
/// this application; there is no creation or deletion.
pub async fn get_user_playlists(tokens: &mut TokenManager) -> Result<Vec<Playlist>, ApiError> {
    tokens
        .authorized(|token| async move {
            let api_url = format!("{uri}/me/playlists", uri = &config::spotify_apiurl());

            let client = Client::new();
            let response = client.get(&api_url).bearer_auth(&token).send().await?;
            let response = request::check(response).await?;

            let res = response.json::<GetUserPlaylistsResponse>().await?;
            Ok(res.items)
        })
        .await
}

/// Appends a single track URI to the target playlist.
///
/// Issues a POST of a one-element URI list through the refresh-and-retry
/// wrapper. Server-side ordering applies; the track lands at the end of the
/// playlist.
pub async fn add_track(
    playlist_id: &str,
    uri: &str,
    tokens: &mut TokenManager,
) -> Result<AddTrackToPlaylistResponse, ApiError> {
    let body = AddTrackToPlaylistRequest {
        uris: vec![uri.to_string()],
    };
    let api_url = format!(
        "{base}/playlists/{id}/tracks",
        base = &config::spotify_apiurl(),
        id = playlist_id
    );

    tokens
        .authorized(|token| {
            let api_url = api_url.clone();
            let body = body.clone();
            async move {
                let client = Client::new();
                let response = client
                    .post(&api_url)
                    .bearer_auth(&token)
                    .json(&body)
                    .send()
                    .await?;
                let response = request::check(response).await?;

                let res = response.json::<AddTrackToPlaylistResponse>().await?;
                Ok(res)
            }
        })
        .await
}

/// Resolves a recognized song and appends it to the target playlist.
///
/// Resolution failure is the [`ApiError::TrackNotFound`] condition and no
/// append request is issued. Re-adding a track that is already present is not
/// prevented at this layer; the playlist simply gains the entry again.
pub async fn add_recognized_track(
    song: &SongGuess,
    playlist_id: &str,
    tokens: &mut TokenManager,
) -> Result<AddTrackToPlaylistResponse, ApiError> {
    let uri = match search::search_track(&song.artist, &song.title, tokens).await? {
        Some(uri) => uri,
        None => return Err(ApiError::TrackNotFound),
    };

    add_track(playlist_id, &uri, tokens).await
}
