use tunedrop::management::TokenManager;
use tunedrop::types::{Token, TokenResponse};

fn stored_token(access_token: &str, refresh_token: &str) -> Token {
    Token {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
        obtained_at: 0,
    }
}

fn refresh_response(access_token: &str, refresh_token: Option<&str>) -> TokenResponse {
    TokenResponse {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.map(|t| t.to_string()),
        token_type: Some("Bearer".to_string()),
        scope: None,
        expires_in: Some(3600),
    }
}

#[test]
fn refresh_without_new_refresh_token_keeps_existing() {
    let mut manager = TokenManager::new(stored_token("AT1", "RT1"));

    manager.apply_refresh(refresh_response("AT2", None));

    let token = manager.current_token();
    assert_eq!(token.access_token, "AT2");
    // The omitted refresh token means the stored one stays authoritative
    assert_eq!(token.refresh_token, "RT1");
}

#[test]
fn refresh_with_new_refresh_token_replaces_existing() {
    let mut manager = TokenManager::new(stored_token("AT1", "RT1"));

    manager.apply_refresh(refresh_response("AT2", Some("RT2")));

    let token = manager.current_token();
    assert_eq!(token.access_token, "AT2");
    assert_eq!(token.refresh_token, "RT2");
}

#[test]
fn refresh_restamps_obtained_at() {
    let mut manager = TokenManager::new(stored_token("AT1", "RT1"));
    assert_eq!(manager.current_token().obtained_at, 0);

    manager.apply_refresh(refresh_response("AT2", None));

    assert!(manager.current_token().obtained_at > 0);
}

#[test]
fn token_from_exchange_carries_both_credentials() {
    let token = Token::from_exchange(refresh_response("AT1", Some("RT1")));

    assert_eq!(token.access_token, "AT1");
    assert_eq!(token.refresh_token, "RT1");
    assert!(token.obtained_at > 0);
}

#[test]
fn token_from_exchange_without_refresh_token() {
    let token = Token::from_exchange(refresh_response("AT1", None));

    assert_eq!(token.access_token, "AT1");
    assert!(token.refresh_token.is_empty());
}
