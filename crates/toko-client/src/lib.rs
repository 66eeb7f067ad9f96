//! # toko-client: REST API Client for Toko
//!
//! Everything between the UI and the Toko REST API: the configured HTTP
//! transport, the session store, and one thin typed service per API
//! surface.
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          toko-client                                    │
//! │                                                                         │
//! │  services/         one typed async fn per endpoint                      │
//! │    auth, products, cart, orders, users, vouchers, dashboard            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  transport         ApiClient: bearer attach, request ids,              │
//! │        │           401-outside-allowlist → clear session + redirect    │
//! │        ▼                                                                │
//! │  session           SessionStore over an injectable backend             │
//! │                    (MemoryBackend for tests, FileBackend in prod)      │
//! │                                                                         │
//! │  config, error     env-driven configuration, typed failure union       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wiring It Up
//! ```rust,no_run
//! use std::sync::Arc;
//! use toko_client::config::ClientConfig;
//! use toko_client::services::auth::AUTH_EXEMPT_PATHS;
//! use toko_client::services::{AuthService, CartService, ProductService};
//! use toko_client::session::{FileBackend, MemoryBackend, SessionBackend, SessionStore};
//! use toko_client::transport::ApiClient;
//!
//! # fn main() -> Result<(), toko_client::error::ClientError> {
//! let config = ClientConfig::load()?;
//!
//! let backend: Box<dyn SessionBackend> = match &config.session_file {
//!     Some(path) => Box::new(FileBackend::new(path.clone())),
//!     None => Box::new(MemoryBackend::new()),
//! };
//! let session = Arc::new(SessionStore::new(backend));
//! session.init()?; // restore a persisted session, if any
//!
//! let client = Arc::new(ApiClient::new(&config, session, &AUTH_EXEMPT_PATHS)?);
//!
//! let auth = AuthService::new(client.clone());
//! let products = ProductService::new(client.clone());
//! let cart = CartService::new(client);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency Model
//! Single logical user flow: service calls are sequential and awaited; no
//! fire-and-forget mutation overlaps a dependent read. The session token
//! and the cart are last-writer-wins; there is no optimistic concurrency
//! control here.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod services;
pub mod session;
pub mod transport;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{Session, SessionStore};
pub use transport::ApiClient;
