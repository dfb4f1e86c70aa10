//! Patio client - parking service integration library.
//!
//! Provides the HTTP client, the session/token lifecycle, and the
//! collaborator traits the front-end talks through.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod store;
pub mod vehicles;

pub use auth::AuthApi;
pub use config::Config;
pub use error::ApiError;
pub use http::ApiClient;
pub use session::{Session, SessionManager, SessionStatus};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use vehicles::VehicleApi;
