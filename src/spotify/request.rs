use std::{fmt, future::Future};

use reqwest::{Response, StatusCode};

use crate::types::TokenResponse;

/// Failure modes of Spotify Web API operations.
///
/// The variants map onto distinct handling strategies: `Unauthorized` is the
/// only condition the retry policy acts on, `ReauthRequired` forces the user
/// back through the authorization flow, `TrackNotFound` is a soft condition
/// presented as "try again", and everything else fails the operation as-is.
#[derive(Debug)]
pub enum ApiError {
    /// Required input missing; rejected before any network call.
    Invalid(&'static str),
    /// The provider answered 401 for the attempted operation.
    Unauthorized,
    /// The refresh credential is missing or was rejected. Stored credentials
    /// are cleared and the user must authorize again.
    ReauthRequired,
    /// Track search produced no candidate; nothing was appended.
    TrackNotFound,
    /// Any other upstream status, with the response body for diagnostics.
    Status(u16, String),
    /// Network or decoding failure.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Invalid(what) => write!(f, "invalid request: {}", what),
            ApiError::Unauthorized => write!(f, "access token was rejected (401)"),
            ApiError::ReauthRequired => {
                write!(f, "authorization expired; run the auth command again")
            }
            ApiError::TrackNotFound => write!(f, "no matching track found"),
            ApiError::Status(code, body) => write!(f, "API error (status {}): {}", code, body),
            ApiError::Transport(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Maps a raw HTTP response onto the error taxonomy.
///
/// 2xx responses pass through untouched. A 401 becomes [`ApiError::Unauthorized`]
/// so the retry policy can act on it; every other status is terminal and carries
/// the response body.
pub async fn check(response: Response) -> Result<Response, ApiError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status(status.as_u16(), body))
        }
    }
}

/// Runs a bearer-authenticated operation with one-shot refresh-and-retry.
///
/// The contract, applied identically to every authenticated call against the
/// Spotify Web API (track search, playlist append, playlist listing):
///
/// 1. Attempt `op` with the current access token.
/// 2. If the attempt fails with [`ApiError::Unauthorized`], invoke `refresh`
///    exactly once and retry `op` exactly once with the renewed access token.
/// 3. If the retried attempt fails, or the refresh itself fails, the overall
///    operation fails. No further retries, no backoff.
/// 4. Any other first-attempt failure is returned immediately without
///    refreshing.
///
/// # Arguments
///
/// * `access_token` - Current access token for the first attempt
/// * `op` - The operation to run, parameterized by the token to use
/// * `refresh` - Produces a renewed token response; called at most once
///
/// # Returns
///
/// On success, the operation's value together with the renewed
/// [`TokenResponse`] if a refresh happened. The caller is responsible for
/// storing the renewed credentials (see `TokenManager::authorized`), including
/// retaining the previous refresh token when the response omits a new one.
///
/// # Example
///
/// ```
/// let (value, renewed) = with_refresh_retry(
///     "AT1",
///     |token| async move { fetch_playlists(&token).await },
///     || async { auth::refresh_token("RT1").await },
/// )
/// .await?;
/// ```
pub async fn with_refresh_retry<T, Op, OpFut, Refresh, RefreshFut>(
    access_token: &str,
    op: Op,
    refresh: Refresh,
) -> Result<(T, Option<TokenResponse>), ApiError>
where
    Op: Fn(String) -> OpFut,
    OpFut: Future<Output = Result<T, ApiError>>,
    Refresh: FnOnce() -> RefreshFut,
    RefreshFut: Future<Output = Result<TokenResponse, ApiError>>,
{
    match op(access_token.to_string()).await {
        Ok(value) => Ok((value, None)),
        Err(ApiError::Unauthorized) => {
            let renewed = refresh().await?;
            let value = op(renewed.access_token.clone()).await?;
            Ok((value, Some(renewed)))
        }
        Err(e) => Err(e),
    }
}
