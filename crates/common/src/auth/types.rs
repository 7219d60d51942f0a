//! Flow configuration, callback parameters, and outcome classification
//!
//! Defines the data the two halves of the flow exchange: the immutable
//! request configuration, the query parameters the provider delivers on the
//! redirect, and the [`CallbackOutcome`] every callback evaluation produces.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Error type for flow configuration and callback input handling
///
/// The callback classification itself is a value ([`CallbackOutcome`]), not an
/// error; this type covers the input-side failures around it.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required configuration field is empty
    #[error("missing required configuration field: {0}")]
    MissingField(&'static str),

    /// The pasted redirect URL could not be parsed
    #[error("invalid redirect URL: {0}")]
    InvalidRedirectUrl(#[from] url::ParseError),
}

/// Configuration for the Entra ID authorization request
///
/// All fields are treated as opaque, already-validated strings by the flow
/// core; [`EntraConfig::validate`] is offered to hosting code that assembles
/// the config from an untrusted source such as the environment.
#[derive(Debug, Clone)]
pub struct EntraConfig {
    /// Application (client) ID of the app registration
    pub client_id: String,

    /// Directory (tenant) ID the authorize endpoint is scoped to
    pub tenant_id: String,

    /// Redirect URI registered for the app (the callback target)
    pub redirect_uri: String,

    /// Scopes to request (joined with spaces on the wire)
    pub scopes: Vec<String>,

    /// Account-picker behavior forwarded as the `prompt` parameter
    pub prompt: String,
}

impl EntraConfig {
    /// Create a new configuration with the default `select_account` prompt
    #[must_use]
    pub fn new(
        client_id: String,
        tenant_id: String,
        redirect_uri: String,
        scopes: Vec<String>,
    ) -> Self {
        Self { client_id, tenant_id, redirect_uri, scopes, prompt: "select_account".to_string() }
    }

    /// Default scope set requested from Entra ID
    #[must_use]
    pub fn default_scopes() -> Vec<String> {
        ["openid", "profile", "email", "User.Read"].map(String::from).into()
    }

    /// Get the tenant-scoped v2.0 authorize endpoint
    #[must_use]
    pub fn authorization_endpoint(&self) -> String {
        format!("https://login.microsoftonline.com/{}/oauth2/v2.0/authorize", self.tenant_id)
    }

    /// Get scopes as a space-separated string
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }

    /// Grant type requested from the provider (always the code grant)
    #[must_use]
    pub fn response_type(&self) -> &'static str {
        "code"
    }

    /// How the provider delivers the response (always query parameters)
    #[must_use]
    pub fn response_mode(&self) -> &'static str {
        "query"
    }

    /// Check that every field a valid authorization request needs is non-empty
    ///
    /// # Errors
    /// Returns [`AuthError::MissingField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.client_id.is_empty() {
            return Err(AuthError::MissingField("client_id"));
        }
        if self.tenant_id.is_empty() {
            return Err(AuthError::MissingField("tenant_id"));
        }
        if self.redirect_uri.is_empty() {
            return Err(AuthError::MissingField("redirect_uri"));
        }
        if self.scopes.is_empty() || self.scopes.iter().any(String::is_empty) {
            return Err(AuthError::MissingField("scopes"));
        }
        if self.prompt.is_empty() {
            return Err(AuthError::MissingField("prompt"));
        }
        Ok(())
    }
}

/// Query parameters delivered by the provider's redirect
///
/// Either `{code, state}` on the success path or
/// `{error, error_description}` when the provider declined the request.
/// An instance with none of these set means the hosting layer has not made
/// the query available yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    /// Authorization code to hand to an external backend for token exchange
    pub code: Option<String>,

    /// CSRF state echoed back by the provider
    pub state: Option<String>,

    /// Provider-supplied error code (e.g. `access_denied`)
    pub error: Option<String>,

    /// Human-readable description accompanying `error`
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Parse callback parameters out of a full redirect URL
    ///
    /// Unknown query parameters are ignored; repeated parameters keep the
    /// last value.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidRedirectUrl`] if `raw` is not a parseable
    /// absolute URL.
    pub fn from_redirect_url(raw: &str) -> Result<Self, AuthError> {
        let url = Url::parse(raw.trim())?;

        let mut params = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "code" => params.code = Some(value.into_owned()),
                "state" => params.state = Some(value.into_owned()),
                "error" => params.error = Some(value.into_owned()),
                "error_description" => params.error_description = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(params)
    }
}

/// Classification of a single callback evaluation
///
/// Produced fresh on every evaluation and never persisted. `Success` is only
/// reachable when the inbound `state` byte-exactly equals the stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallbackOutcome {
    /// The provider issued an authorization code and the state matched
    Success {
        /// The raw authorization code, for hand-off to an external backend
        code: String,
    },

    /// The provider declined or failed the request; surfaced verbatim
    ProviderError {
        /// Provider error code
        error: String,
        /// Provider description (empty when the provider sent none)
        description: String,
    },

    /// The inbound state did not match the stored one (CSRF defense);
    /// deliberately carries no authorization code
    StateMismatch,

    /// Query parameters are not available yet; re-evaluate once they are
    Pending,
}
