use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    spotify::request::{self, ApiError},
    success,
    types::{AuthAttempt, Token, TokenResponse, UserProfile},
    utils, warning,
};

/// Initiates the complete OAuth 2.0 authorization-code flow with Spotify.
///
/// This function orchestrates the entire authentication process including:
/// 1. Generating a random `state` nonce for the authorization request
/// 2. Starting the local callback/relay server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the OAuth callback to deliver a token
/// 5. Verifying the authorized account and persisting the token
///
/// The client secret stays inside this process: the browser only ever sees the
/// authorization redirect, and the code-for-token exchange happens in the local
/// server, which is the trusted intermediary holding the confidential
/// credentials.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying the expected `state`
///   nonce and the resulting token between the auth flow and callback handler
///
/// # Authentication Flow
///
/// 1. **State Setup**: Generates a random nonce echoed back on the redirect
/// 2. **Server Start**: Launches a local HTTP server to handle the OAuth callback
/// 3. **Browser Launch**: Opens the Spotify authorization URL in the default browser
/// 4. **User Authorization**: User grants permissions in their browser
///    (`show_dialog=true` forces the consent screen on every run)
/// 5. **Callback Handling**: Local server receives the authorization code
/// 6. **Token Exchange**: Authorization code is exchanged for an access token
/// 7. **Verification**: The access token is checked against the profile endpoint
/// 8. **Token Persistence**: Token is saved to the cache and mirrored into the
///    profile record
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - A failed account verification clears stored credentials and terminates
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tokio::sync::Mutex;
///
/// let shared_state = Arc::new(Mutex::new(None));
/// authorize(shared_state).await;
/// ```
pub async fn authorize(shared_state: Arc<Mutex<Option<AuthAttempt>>>) {
    let state = utils::generate_state();

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}&show_dialog=true",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        scope = &config::spotify_scope().replace(' ', "%20"),
        state = state
    );

    // Store expected state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthAttempt { state, token: None });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            if let Err(e) = verify_user(&t.access_token).await {
                let _ = TokenManager::clear_storage().await;
                error!("Could not verify the authorized account: {}", e);
            }

            let token_manager = TokenManager::new(t.clone());
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a completed authentication token with a 60-second
/// timeout. This function runs concurrently with the callback handler that
/// populates the token after successful OAuth exchange.
///
/// # Arguments
///
/// * `shared_state` - Shared state containing the pending authorization attempt
///
/// # Returns
///
/// Returns `Some(Token)` if authentication completes successfully within the
/// timeout period, or `None` if the timeout is reached without a token.
///
/// # Timeout Behavior
///
/// - Maximum wait time: 60 seconds
/// - Polling interval: 1 second
/// - Non-blocking: Uses async sleep to avoid CPU spinning
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthAttempt>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(attempt) = lock.as_ref() {
            if let Some(token) = &attempt.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Performs the form-encoded `grant_type=authorization_code` POST against the
/// provider token endpoint with the confidential client credentials in a Basic
/// authorization header. The redirect URI must exactly match the one used in
/// the original authorization request.
///
/// # Arguments
///
/// * `code` - Authorization code received from the OAuth callback; single-use
///   and short-lived
/// * `redirect_uri` - The redirect URI registered for the client
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - Access token, refresh token, and metadata
/// - `Err(ApiError::Invalid)` - Missing code or redirect URI; no network call
///   is made
/// - `Err(ApiError::Status)` - The provider rejected the code (expired,
///   already used, mismatched redirect)
/// - `Err(ApiError::Transport)` - Network or decoding failure
pub async fn exchange_code(code: &str, redirect_uri: &str) -> Result<TokenResponse, ApiError> {
    if code.is_empty() {
        return Err(ApiError::Invalid("code is required"));
    }
    if redirect_uri.is_empty() {
        return Err(ApiError::Invalid("redirectUri is required"));
    }

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header(AUTHORIZATION, basic_authorization())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        let status = res.status().as_u16();
        let details = res.text().await.unwrap_or_default();
        return Err(ApiError::Status(status, details));
    }

    res.json::<TokenResponse>().await.map_err(ApiError::from)
}

/// Refreshes an expired access token using a refresh token.
///
/// Performs the form-encoded `grant_type=refresh_token` POST against the
/// provider token endpoint with the same confidential credentials as the
/// exchange. The response carries a fresh access token and may or may not
/// carry a new refresh token; when it is absent the stored refresh token
/// remains authoritative and must be retained by the caller.
///
/// # Arguments
///
/// * `refresh_token` - Refresh token obtained from a previous exchange
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - Fresh access token, optionally a rotated refresh
///   token
/// - `Err(ApiError::ReauthRequired)` - The refresh token is empty (fails
///   immediately, no network call) or the provider rejected it as revoked or
///   invalid; the caller must clear stored credentials and send the user back
///   through the authorization flow
/// - `Err(ApiError::Transport)` - Network or decoding failure; stored
///   credentials stay untouched
pub async fn refresh_token(refresh_token: &str) -> Result<TokenResponse, ApiError> {
    if refresh_token.is_empty() {
        return Err(ApiError::ReauthRequired);
    }

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header(AUTHORIZATION, basic_authorization())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        // the provider rejected the refresh credential itself
        return Err(ApiError::ReauthRequired);
    }

    res.json::<TokenResponse>().await.map_err(ApiError::from)
}

/// Checks an access token against the profile endpoint.
///
/// Used right after an exchange to confirm the credential pair actually works
/// for the authorized account. Failures here are irrecoverable for the session;
/// the caller clears stored credentials and restarts the authorization flow.
pub async fn verify_user(access_token: &str) -> Result<UserProfile, ApiError> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(access_token).send().await?;
    let response = request::check(response).await?;

    response.json::<UserProfile>().await.map_err(ApiError::from)
}

fn basic_authorization() -> String {
    let credentials = format!(
        "{id}:{secret}",
        id = config::spotify_client_id(),
        secret = config::spotify_client_secret()
    );
    format!("Basic {}", STANDARD.encode(credentials))
}
