//! Browser-based OAuth 2.0 Authorization Code flow against Microsoft Entra ID
//!
//! This module implements the two halves of the flow, reconciled only through
//! an ephemeral state store:
//!
//! - **Initiation**: generate a CSRF state token, persist it, build the
//!   authorization URL, and hand control to the identity provider.
//! - **Callback**: classify the redirect the provider sends back (success,
//!   provider error, state mismatch, or still pending) and consume the stored
//!   state exactly once on success.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  LoginFlow   │  High-level orchestrator
//! └──────┬───────┘
//!        │
//!        ├──► AuthInitiator      (state generation + authorization URL)
//!        ├──► handle_callback    (outcome classification)
//!        │
//!        └──► StateStore         (ephemeral, per-attempt CSRF state)
//! ```
//!
//! # Usage Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use entracode_common::auth::{
//!     CallbackOutcome, CallbackParams, EntraConfig, LoginFlow, MemoryStateStore,
//! };
//!
//! let config = EntraConfig::new(
//!     "your_client_id".to_string(),
//!     "your_tenant_id".to_string(),
//!     "http://localhost:3000/callback/microsoft".to_string(),
//!     EntraConfig::default_scopes(),
//! );
//!
//! let flow = LoginFlow::new(config, Arc::new(MemoryStateStore::new()));
//!
//! // Start login flow: open this URL in a browser.
//! let auth_url = flow.start_login();
//!
//! // ... user authorizes in browser, the provider redirects back ...
//!
//! let params = CallbackParams::from_redirect_url(
//!     "http://localhost:3000/callback/microsoft?code=abc123&state=forged",
//! )
//! .unwrap();
//!
//! // A state the flow never issued is rejected without exposing the code.
//! assert_eq!(flow.complete_login(&params), CallbackOutcome::StateMismatch);
//! ```
//!
//! # Security Notes
//!
//! - **State Validation**: CSRF protection with cryptographically secure
//!   randomness; comparison is byte-exact with no normalization.
//! - **No Code Leakage**: a mismatched callback never surfaces the
//!   authorization code it arrived with.
//! - **Single Consumption**: the stored state is deleted on the success path
//!   only; error and mismatch outcomes leave it in place for inspection, and
//!   the next login attempt overwrites it.
//! - **No PKCE**: this flow does not send `code_challenge`. The downstream
//!   code-for-token exchange happens in an external backend, outside this
//!   crate.
//!
//! # Module Organization
//!
//! - **[`types`]**: configuration, callback query parameters, and the
//!   [`CallbackOutcome`] classification
//! - **[`state`]**: CSRF state token generation and validation
//! - **[`store`]**: the ephemeral key-value seam ([`StateStore`]) plus the
//!   in-memory implementation
//! - **[`initiator`]**: authorization-URL construction and login initiation
//! - **[`callback`]**: redirect classification
//! - **[`service`]**: the [`LoginFlow`] orchestrator

pub mod callback;
pub mod initiator;
pub mod service;
pub mod state;
pub mod store;
pub mod types;

// Re-export commonly used types and functions
pub use callback::handle_callback;
pub use initiator::AuthInitiator;
pub use service::LoginFlow;
pub use state::{generate_state, validate_state, STATE_KEY, STATE_LENGTH};
pub use store::{MemoryStateStore, StateStore};
pub use types::{AuthError, CallbackOutcome, CallbackParams, EntraConfig};
