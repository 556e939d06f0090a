use std::{future::Future, path::PathBuf};

use chrono::Utc;

use crate::{
    management::ProfileManager,
    spotify::{
        auth,
        request::{self, ApiError},
    },
    types::{Token, TokenResponse},
};

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    /// Writes the credential pair to the token cache and mirrors it into the
    /// profile record.
    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&path, json)
            .await
            .map_err(|e| e.to_string())?;

        if let Ok(mut profile) = ProfileManager::load().await {
            profile.store_credentials(&self.token);
            let _ = profile.persist().await;
        }

        Ok(())
    }

    /// Applies a refresh response to the stored credential pair.
    ///
    /// The access token is always replaced. The refresh token is replaced only
    /// when the response carries a new one; refresh responses may omit it, and
    /// the previously stored value then remains authoritative.
    pub fn apply_refresh(&mut self, renewed: TokenResponse) {
        self.token.access_token = renewed.access_token;
        if let Some(refresh_token) = renewed.refresh_token {
            self.token.refresh_token = refresh_token;
        }
        self.token.obtained_at = Utc::now().timestamp() as u64;
    }

    /// Runs a bearer-authenticated operation under the one-shot
    /// refresh-and-retry policy.
    ///
    /// Binds [`request::with_refresh_retry`] to the real token refresher.
    /// Renewed credentials are applied and persisted before the result is
    /// returned. A rejected refresh credential clears all stored credentials
    /// and surfaces [`ApiError::ReauthRequired`]; the caller must send the
    /// user back through the authorization flow.
    pub async fn authorized<T, Op, Fut>(&mut self, op: Op) -> Result<T, ApiError>
    where
        Op: Fn(String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let access_token = self.token.access_token.clone();
        let refresh = self.token.refresh_token.clone();

        let result = request::with_refresh_retry(&access_token, op, move || async move {
            auth::refresh_token(&refresh).await
        })
        .await;

        match result {
            Ok((value, Some(renewed))) => {
                self.apply_refresh(renewed);
                let _ = self.persist().await;
                Ok(value)
            }
            Ok((value, None)) => Ok(value),
            Err(ApiError::ReauthRequired) => {
                let _ = Self::clear_storage().await;
                Err(ApiError::ReauthRequired)
            }
            Err(e) => Err(e),
        }
    }

    /// Removes the cached credential pair and its mirror in the profile
    /// record. The recognition API key and playlist selection survive; only
    /// re-authorization is required afterwards.
    pub async fn clear_storage() -> Result<(), String> {
        let path = Self::token_path();
        if let Err(e) = async_fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                return Err(e.to_string());
            }
        }

        if let Ok(mut profile) = ProfileManager::load().await {
            profile.clear_credentials();
            profile.persist().await.map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tunedrop/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
