use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub obtained_at: u64,
}

impl Token {
    /// Builds the stored credential pair from a code-exchange response,
    /// stamped with the current time.
    pub fn from_exchange(response: TokenResponse) -> Self {
        Token {
            access_token: response.access_token,
            refresh_token: response.refresh_token.unwrap_or_default(),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Wire shape of the provider token endpoint, for both the authorization-code
/// exchange and the refresh grant. Refresh responses may omit `refresh_token`;
/// the stored one stays authoritative in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AuthAttempt {
    pub state: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchangeRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default, rename = "redirectUri")]
    pub redirect_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongGuess {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizeResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<SongGuess>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracksContainer {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct StatusTableRow {
    pub item: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// Per-user profile record. Mirrors the credential pair held in the token cache
/// and carries the user-supplied recognition API key and the selected playlist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub audd_api_key: Option<String>,
    #[serde(default)]
    pub playlist: Option<Playlist>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}
