//! Callback classification
//!
//! Consumes the query parameters delivered by the provider's redirect plus
//! the previously persisted CSRF state, and classifies the outcome. The
//! decision order is the flow's tie-break policy and must not be reordered:
//! provider errors win over everything, then code+state comparison, then
//! pending.

use tracing::{debug, warn};

use super::state::{validate_state, STATE_KEY};
use super::store::StateStore;
use super::types::{CallbackOutcome, CallbackParams};

/// Classify a callback against the stored CSRF state
///
/// 1. A provider `error` is surfaced verbatim, regardless of any `state` or
///    `code` delivered alongside it.
/// 2. A `code` is only surfaced when the inbound `state` byte-exactly equals
///    the stored one; the stored state is removed at that moment and never
///    before. Any mismatch, including nothing stored or no inbound state,
///    yields [`CallbackOutcome::StateMismatch`] without the code.
/// 3. Neither `error` nor `code` means the hosting layer has not made the
///    query available yet: [`CallbackOutcome::Pending`], store untouched.
///
/// Every outcome is final once computed; no retries happen here.
pub fn handle_callback<S: StateStore + ?Sized>(
    params: &CallbackParams,
    store: &S,
) -> CallbackOutcome {
    // Provider errors take precedence over all state validation.
    if let Some(error) = &params.error {
        warn!(error = %error, "provider declined the authorization request");
        return CallbackOutcome::ProviderError {
            error: error.clone(),
            description: params.error_description.clone().unwrap_or_default(),
        };
    }

    let Some(code) = &params.code else {
        return CallbackOutcome::Pending;
    };

    let matched = match (&params.state, store.get(STATE_KEY)) {
        (Some(received), Some(expected)) => validate_state(&expected, received),
        // Nothing persisted, already consumed, or no inbound state: non-match.
        _ => false,
    };

    if !matched {
        warn!("state parameter mismatch on OAuth callback, discarding authorization code");
        return CallbackOutcome::StateMismatch;
    }

    store.remove(STATE_KEY);
    debug!("stored state matched and was consumed");

    CallbackOutcome::Success { code: code.clone() }
}
