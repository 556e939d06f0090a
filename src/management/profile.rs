use std::path::PathBuf;

use crate::{
    Res,
    types::{Playlist, Profile, Token},
};

/// Persisted per-user profile record.
///
/// Holds the recognition API key, the selected playlist, and a mirror of the
/// Spotify credential pair for cross-session continuity. Lives next to the
/// token cache in the local data directory. The record existing at all is what
/// the setup wizard treats as "signed in".
pub struct ProfileManager {
    profile: Profile,
}

impl ProfileManager {
    pub fn new() -> Self {
        Self {
            profile: Profile::default(),
        }
    }

    pub async fn load() -> Res<Self> {
        let path = Self::profile_path();
        let content = async_fs::read_to_string(&path).await?;
        let profile: Profile = serde_json::from_str(&content)?;
        Ok(Self { profile })
    }

    pub async fn exists() -> bool {
        async_fs::metadata(Self::profile_path()).await.is_ok()
    }

    pub async fn persist(&self) -> Res<()> {
        let path = Self::profile_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.profile)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_api_key(&mut self, key: String) {
        self.profile.audd_api_key = Some(key);
    }

    pub fn set_playlist(&mut self, playlist: Playlist) {
        self.profile.playlist = Some(playlist);
    }

    pub fn store_credentials(&mut self, token: &Token) {
        self.profile.access_token = Some(token.access_token.clone());
        self.profile.refresh_token = Some(token.refresh_token.clone());
    }

    pub fn clear_credentials(&mut self) {
        self.profile.access_token = None;
        self.profile.refresh_token = None;
    }

    fn profile_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tunedrop/profile.json");
        path
    }
}
