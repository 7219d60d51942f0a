//! Authorization request construction and login initiation
//!
//! Builds the browser-facing authorization URL and persists the CSRF state
//! that the callback half of the flow will check against. Navigation itself
//! is the caller's concern; only the returned URL is produced here.

use super::state::{generate_state, STATE_KEY, STATE_LENGTH};
use super::store::StateStore;
use super::types::EntraConfig;

/// Builds authorization URLs and starts login attempts
///
/// The URL construction is a pure function of the configuration and the
/// state token: identical inputs always produce the identical string, with
/// the query parameters in a stable order.
#[derive(Debug, Clone)]
pub struct AuthInitiator {
    config: EntraConfig,
}

impl AuthInitiator {
    /// Create a new initiator with the given configuration
    #[must_use]
    pub fn new(config: EntraConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the flow configuration
    #[must_use]
    pub fn config(&self) -> &EntraConfig {
        &self.config
    }

    /// Build the authorization URL for a browser-based login
    ///
    /// Query parameter order is `client_id`, `response_type`,
    /// `redirect_uri`, `scope`, `state`, `response_mode`, `prompt`. The
    /// provider does not require this order; tests do.
    #[must_use]
    pub fn authorization_url(&self, state: &str) -> String {
        let scope_string = self.config.scope_string();

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("response_type", self.config.response_type()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", scope_string.as_str()),
            ("state", state),
            ("response_mode", self.config.response_mode()),
            ("prompt", self.config.prompt.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.authorization_endpoint(), query_string)
    }

    /// Start a login attempt
    ///
    /// Generates a fresh state token, persists it under the fixed store key
    /// (overwriting any abandoned previous attempt), and returns the
    /// authorization URL for the caller to navigate to.
    pub fn initiate_login<S: StateStore + ?Sized>(&self, store: &S) -> String {
        let state = generate_state(STATE_LENGTH);
        store.set(STATE_KEY, &state);

        self.authorization_url(&state)
    }
}
