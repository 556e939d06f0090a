use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{
    config,
    spotify::auth::exchange_code,
    types::{AuthAttempt, Token},
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<AuthAttempt>>>>,
) -> Html<&'static str> {
    if let Some(denied) = params.get("error") {
        warning!("Authorization was denied: {}", denied);
        return Html("<h4>Authorization denied.</h4>");
    }

    if let Some(code) = params.get("code") {
        let mut state = shared_state.lock().await;
        // Take the pending attempt from state
        let Some(ref mut attempt) = state.as_mut() else {
            return Html("<h4>No authorization attempt in progress.</h4>");
        };

        if params.get("state") != Some(&attempt.state) {
            return Html("<h4>State mismatch. Please restart the authorization flow.</h4>");
        }

        match exchange_code(code, &config::spotify_redirect_uri()).await {
            Ok(response) => {
                attempt.token = Some(Token::from_exchange(response));
                Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
            }
            Err(e) => {
                warning!("Token exchange failed: {}", e);
                Html("<h4>Login failed.</h4>")
            }
        }
    } else {
        Html("<h4>Missing authorization code.</h4>")
    }
}
