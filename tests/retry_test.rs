use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tunedrop::spotify::request::{ApiError, with_refresh_retry};
use tunedrop::types::TokenResponse;

fn renewed_token(access_token: &str, refresh_token: Option<&str>) -> TokenResponse {
    TokenResponse {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.map(|t| t.to_string()),
        token_type: Some("Bearer".to_string()),
        scope: None,
        expires_in: Some(3600),
    }
}

#[tokio::test]
async fn first_attempt_success_skips_refresh() {
    let op_calls = Arc::new(AtomicUsize::new(0));
    let refresh_calls = Arc::new(AtomicUsize::new(0));

    let op = {
        let op_calls = Arc::clone(&op_calls);
        move |token: String| {
            let op_calls = Arc::clone(&op_calls);
            async move {
                op_calls.fetch_add(1, Ordering::SeqCst);
                Ok(token)
            }
        }
    };
    let refresh = {
        let refresh_calls = Arc::clone(&refresh_calls);
        move || {
            let refresh_calls = Arc::clone(&refresh_calls);
            async move {
                refresh_calls.fetch_add(1, Ordering::SeqCst);
                Ok(renewed_token("AT2", None))
            }
        }
    };

    let (value, renewed) = with_refresh_retry("AT1", op, refresh).await.unwrap();

    assert_eq!(value, "AT1");
    assert!(renewed.is_none());
    assert_eq!(op_calls.load(Ordering::SeqCst), 1);
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unauthorized_triggers_single_refresh_and_retry() {
    let op_calls = Arc::new(AtomicUsize::new(0));
    let refresh_calls = Arc::new(AtomicUsize::new(0));

    let op = {
        let op_calls = Arc::clone(&op_calls);
        move |token: String| {
            let op_calls = Arc::clone(&op_calls);
            async move {
                if op_calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(ApiError::Unauthorized)
                } else {
                    Ok(token)
                }
            }
        }
    };
    let refresh = {
        let refresh_calls = Arc::clone(&refresh_calls);
        move || {
            let refresh_calls = Arc::clone(&refresh_calls);
            async move {
                refresh_calls.fetch_add(1, Ordering::SeqCst);
                Ok(renewed_token("AT2", None))
            }
        }
    };

    let (value, renewed) = with_refresh_retry("AT1", op, refresh).await.unwrap();

    // The retried attempt ran with the renewed access token
    assert_eq!(value, "AT2");
    assert_eq!(renewed.unwrap().access_token, "AT2");
    assert_eq!(op_calls.load(Ordering::SeqCst), 2);
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn retried_attempt_failure_is_terminal() {
    let op_calls = Arc::new(AtomicUsize::new(0));
    let refresh_calls = Arc::new(AtomicUsize::new(0));

    let op = {
        let op_calls = Arc::clone(&op_calls);
        move |_token: String| {
            let op_calls = Arc::clone(&op_calls);
            async move {
                op_calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), ApiError>(ApiError::Unauthorized)
            }
        }
    };
    let refresh = {
        let refresh_calls = Arc::clone(&refresh_calls);
        move || {
            let refresh_calls = Arc::clone(&refresh_calls);
            async move {
                refresh_calls.fetch_add(1, Ordering::SeqCst);
                Ok(renewed_token("AT2", None))
            }
        }
    };

    let result = with_refresh_retry("AT1", op, refresh).await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    // Exactly one refresh, exactly one retry, no further attempts
    assert_eq!(op_calls.load(Ordering::SeqCst), 2);
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn non_unauthorized_failure_skips_refresh() {
    let op_calls = Arc::new(AtomicUsize::new(0));
    let refresh_calls = Arc::new(AtomicUsize::new(0));

    let op = {
        let op_calls = Arc::clone(&op_calls);
        move |_token: String| {
            let op_calls = Arc::clone(&op_calls);
            async move {
                op_calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), ApiError>(ApiError::Status(404, "not found".to_string()))
            }
        }
    };
    let refresh = {
        let refresh_calls = Arc::clone(&refresh_calls);
        move || {
            let refresh_calls = Arc::clone(&refresh_calls);
            async move {
                refresh_calls.fetch_add(1, Ordering::SeqCst);
                Ok(renewed_token("AT2", None))
            }
        }
    };

    let result = with_refresh_retry("AT1", op, refresh).await;

    assert!(matches!(result, Err(ApiError::Status(404, _))));
    assert_eq!(op_calls.load(Ordering::SeqCst), 1);
    assert_eq!(refresh_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn refresh_failure_propagates_without_retry() {
    let op_calls = Arc::new(AtomicUsize::new(0));

    let op = {
        let op_calls = Arc::clone(&op_calls);
        move |_token: String| {
            let op_calls = Arc::clone(&op_calls);
            async move {
                op_calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), ApiError>(ApiError::Unauthorized)
            }
        }
    };
    let refresh = || async { Err::<TokenResponse, ApiError>(ApiError::ReauthRequired) };

    let result = with_refresh_retry("AT1", op, refresh).await;

    assert!(matches!(result, Err(ApiError::ReauthRequired)));
    // The failed refresh means the operation is never retried
    assert_eq!(op_calls.load(Ordering::SeqCst), 1);
}
