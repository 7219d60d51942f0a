//! CSRF state token generation and validation
//!
//! The state parameter is an opaque alphanumeric token round-tripped through
//! the identity provider to confirm the callback corresponds to a request
//! this client actually initiated. Tokens are drawn from a cryptographically
//! secure generator; collisions within a session are accepted, not mitigated.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Default state token length, in characters
pub const STATE_LENGTH: usize = 32;

/// Fixed key the state is stored under between the two halves of the flow
pub const STATE_KEY: &str = "oauth_state";

/// Generate a random state token for CSRF protection
///
/// Returns a string of `length` characters drawn uniformly from the
/// 62-character alphanumeric alphabet `[A-Za-z0-9]`. Call once per login
/// attempt.
#[must_use]
pub fn generate_state(length: usize) -> String {
    rand::thread_rng().sample_iter(&Alphanumeric).take(length).map(char::from).collect()
}

/// Validate that the state token matches
///
/// Byte-exact, case-sensitive comparison with no normalization.
///
/// # Arguments
/// * `expected` - The state that was persisted when the flow started
/// * `received` - The state delivered by the provider's redirect
#[must_use]
pub fn validate_state(expected: &str, received: &str) -> bool {
    expected == received
}
