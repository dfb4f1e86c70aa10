//! Live API integration tests.
//!
//! Run with: cargo test --test session_live_test -- --ignored
//!
//! Note: Requires a reachable parking service and a provisioned account.
//! Set PATIO_TEST_URL, PATIO_TEST_EMAIL, and PATIO_TEST_PASSWORD.

use std::sync::Arc;

use patio_client::{ApiClient, MemoryTokenStore, SessionManager, SessionStatus, VehicleApi, TOKEN_KEY};
use patio_client::TokenStore;

fn base_url() -> String {
    std::env::var("PATIO_TEST_URL")
        .unwrap_or_else(|_| "https://parkingapisenai.azurewebsites.net".to_string())
}

fn account() -> (String, String) {
    (
        std::env::var("PATIO_TEST_EMAIL").expect("PATIO_TEST_EMAIL not set"),
        std::env::var("PATIO_TEST_PASSWORD").expect("PATIO_TEST_PASSWORD not set"),
    )
}

#[tokio::test]
#[ignore] // Run only against a live service
async fn test_login_restore_logout_roundtrip() {
    let (email, password) = account();
    let api = Arc::new(ApiClient::new(base_url()));
    let store = Arc::new(MemoryTokenStore::new());
    let session = SessionManager::new(api.clone(), store.clone());

    let snapshot = session.login(&email, &password).await.expect("login failed");
    assert_eq!(snapshot.status, SessionStatus::Authenticated);
    let token = snapshot.token.expect("no token after login");
    assert_eq!(store.get(TOKEN_KEY).await.unwrap().as_deref(), Some(token.as_str()));

    // A second manager sharing the store picks the session up from disk.
    let restored = SessionManager::new(api.clone(), store.clone());
    assert!(restored.restore().await);
    assert_eq!(restored.status(), SessionStatus::Authenticated);

    session.logout().await;
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn test_active_vehicles_list() {
    let (email, password) = account();
    let api = Arc::new(ApiClient::new(base_url()));
    let store = Arc::new(MemoryTokenStore::new());
    let session = SessionManager::new(api.clone(), store);

    let snapshot = session.login(&email, &password).await.expect("login failed");
    api.set_auth_token(snapshot.token);

    let vehicles = api.active().await.expect("failed to list vehicles");
    for vehicle in &vehicles {
        assert!(patio_core::is_valid(&vehicle.plate), "server sent {:?}", vehicle.plate);
    }
}

#[tokio::test]
#[ignore]
async fn test_restore_with_garbage_token_degrades_to_logged_out() {
    let api = Arc::new(ApiClient::new(base_url()));
    let store = Arc::new(MemoryTokenStore::new());
    store.set(TOKEN_KEY, "not-a-real-token").await.unwrap();

    let session = SessionManager::new(api, store.clone());
    assert!(!session.restore().await);
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
}
