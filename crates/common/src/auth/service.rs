//! High-level login flow orchestrator
//!
//! Combines the initiator, the callback classifier, and the shared state
//! store into a single handle the hosting layer drives.

use std::sync::Arc;

use tracing::info;

use super::callback::handle_callback;
use super::initiator::AuthInitiator;
use super::store::{MemoryStateStore, StateStore};
use super::types::{CallbackOutcome, CallbackParams, EntraConfig};

/// Login flow for browser-based Entra ID authentication
///
/// Orchestrates:
/// - CSRF state generation and persistence
/// - Authorization URL construction
/// - Callback classification with single-consumption state validation
///
/// At most one attempt is in flight at a time; starting a new attempt
/// overwrites the state of an abandoned one.
#[derive(Clone)]
pub struct LoginFlow<S = MemoryStateStore>
where
    S: StateStore + 'static,
{
    initiator: AuthInitiator,
    store: Arc<S>,
}

impl<S> LoginFlow<S>
where
    S: StateStore + 'static,
{
    /// Create a new login flow
    ///
    /// # Arguments
    /// * `config` - Authorization request configuration (client, tenant,
    ///   redirect URI, scopes)
    /// * `store` - Ephemeral store carrying the CSRF state across the
    ///   redirect round trip
    #[must_use]
    pub fn new(config: EntraConfig, store: Arc<S>) -> Self {
        Self { initiator: AuthInitiator::new(config), store }
    }

    /// Get a reference to the flow configuration
    #[must_use]
    pub fn config(&self) -> &EntraConfig {
        self.initiator.config()
    }

    /// Start a login attempt
    ///
    /// Generates and persists a fresh state token and returns the
    /// authorization URL for the caller to open in a browser.
    pub fn start_login(&self) -> String {
        let url = self.initiator.initiate_login(self.store.as_ref());
        info!(
            endpoint = %self.config().authorization_endpoint(),
            "login attempt started"
        );

        url
    }

    /// Classify the provider's redirect
    ///
    /// See [`handle_callback`] for the decision order. The outcome is final;
    /// a [`CallbackOutcome::Pending`] caller should re-invoke once the query
    /// parameters are available.
    pub fn complete_login(&self, params: &CallbackParams) -> CallbackOutcome {
        handle_callback(params, self.store.as_ref())
    }
}
