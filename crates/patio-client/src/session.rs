//! Session and token lifecycle.

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use patio_core::models::{Credentials, UserProfile};

use crate::auth::AuthApi;
use crate::error::ApiError;
use crate::store::{TokenStore, TOKEN_KEY};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token held.
    #[default]
    Unauthenticated,
    /// A persisted token was found and is being confirmed with the server.
    Restoring,
    /// Token confirmed. The profile may still be missing.
    Authenticated,
}

/// Snapshot of the current session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub status: SessionStatus,
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Owns the single bearer token of the client process.
///
/// Session-mutating operations (`login`, `logout`, `restore`) are serialized
/// behind one mutex: at most one runs at a time. Snapshot reads go through a
/// separate lock and never wait on an in-flight operation.
pub struct SessionManager {
    auth: Arc<dyn AuthApi>,
    store: Arc<dyn TokenStore>,
    op: Mutex<()>,
    state: RwLock<Session>,
}

impl SessionManager {
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            auth,
            store,
            op: Mutex::new(()),
            state: RwLock::new(Session::default()),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.state.read().expect("session lock poisoned").clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.session().status
    }

    /// Bearer token, if one is held.
    pub fn token(&self) -> Option<String> {
        self.session().token
    }

    fn set_state(&self, session: Session) {
        *self.state.write().expect("session lock poisoned") = session;
    }

    /// Try to resume a previous session from the token store.
    ///
    /// Returns true when a stored token was confirmed by the server. Every
    /// failure path (no token, unreadable store, rejected token, unreachable
    /// service) degrades to a logged-out session without surfacing an error;
    /// a rejected token is also removed from the store.
    pub async fn restore(&self) -> bool {
        let _guard = self.op.lock().await;

        let token = match self.store.get(TOKEN_KEY).await {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.set_state(Session::default());
                return false;
            }
            Err(err) => {
                warn!("Failed to read token store: {:#}", err);
                self.set_state(Session::default());
                return false;
            }
        };

        self.set_state(Session {
            status: SessionStatus::Restoring,
            token: Some(token.clone()),
            user: None,
        });

        match self.auth.who_am_i(&token).await {
            Ok(user) => {
                debug!("Session restored for {}", user.email);
                self.set_state(Session {
                    status: SessionStatus::Authenticated,
                    token: Some(token),
                    user: Some(user),
                });
                true
            }
            Err(err) => {
                info!("Stored token rejected, clearing session: {}", err);
                if let Err(err) = self.store.remove(TOKEN_KEY).await {
                    warn!("Failed to clear token store: {:#}", err);
                }
                self.set_state(Session::default());
                false
            }
        }
    }

    /// Authenticate with the parking service.
    ///
    /// On success the token is persisted and the profile fetched best-effort;
    /// a failed profile fetch does not fail the login. On failure the session
    /// is left untouched and the error returned for display.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let _guard = self.op.lock().await;

        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.auth.login(&credentials).await?;

        let token = match response.token {
            Some(token) if !token.is_empty() => token,
            _ => {
                return Err(ApiError::Auth(
                    response
                        .message
                        .unwrap_or_else(|| "invalid credentials".to_string()),
                ))
            }
        };

        if let Err(err) = self.store.set(TOKEN_KEY, &token).await {
            warn!("Failed to persist token: {:#}", err);
        }

        let user = match self.auth.who_am_i(&token).await {
            Ok(user) => Some(user),
            Err(err) => {
                debug!("Profile fetch after login failed: {}", err);
                None
            }
        };

        let session = Session {
            status: SessionStatus::Authenticated,
            token: Some(token),
            user,
        };
        self.set_state(session.clone());
        info!("Logged in as {}", email);
        Ok(session)
    }

    /// Drop the session: clears durable storage and in-memory state.
    ///
    /// Always ends unauthenticated; a storage failure is logged but never
    /// leaves the in-memory token behind.
    pub async fn logout(&self) {
        let _guard = self.op.lock().await;

        if let Err(err) = self.store.remove(TOKEN_KEY).await {
            warn!("Failed to clear token store: {:#}", err);
        }
        self.set_state(Session::default());
        info!("Logged out");
    }
}
