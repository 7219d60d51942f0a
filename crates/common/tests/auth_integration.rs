//! Integration tests for the auth module
//!
//! Exercises the full authorization-code flow: state generation, URL
//! construction, and callback classification against an isolated store per
//! test.

use std::sync::Arc;

use entracode_common::auth::{
    generate_state, validate_state, CallbackOutcome, CallbackParams, EntraConfig, LoginFlow,
    MemoryStateStore, StateStore, STATE_KEY, STATE_LENGTH,
};

fn test_config() -> EntraConfig {
    EntraConfig::new(
        "11111111-2222-3333-4444-555555555555".to_string(),
        "common".to_string(),
        "http://localhost:3000/callback/microsoft".to_string(),
        EntraConfig::default_scopes(),
    )
}

fn test_flow() -> (LoginFlow, Arc<MemoryStateStore>) {
    let store = Arc::new(MemoryStateStore::new());
    (LoginFlow::new(test_config(), store.clone()), store)
}

/// Validates CSRF state generation for the uniqueness and format scenario.
///
/// Each state must be unique per attempt and drawn from the alphanumeric
/// alphabet; validation must be exact match only.
///
/// # Test Steps
/// 1. Generate two default-length states
/// 2. Verify both have the default length and alphanumeric characters only
/// 3. Verify the two differ
/// 4. Verify matching states pass validation and mismatched ones fail
#[test]
fn test_state_generation_and_validation() {
    let state1 = generate_state(STATE_LENGTH);
    let state2 = generate_state(STATE_LENGTH);

    assert_eq!(state1.len(), STATE_LENGTH);
    assert!(state1.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state1, state2);

    assert!(validate_state(&state1, &state1));
    assert!(!validate_state(&state1, &state2));
    assert!(!validate_state(&state1, "invalid"));
}

/// Validates the happy path: initiate, redirect back, classify, consume.
///
/// # Test Steps
/// 1. Start a login attempt and capture the issued state from the store
/// 2. Verify the authorization URL carries all seven query parameters
/// 3. Simulate the provider redirect by parsing a redirect URL echoing the
///    state
/// 4. Verify the outcome is `Success` with the code, and the store is empty
///    afterwards
#[test]
fn test_full_flow_success() {
    let (flow, store) = test_flow();

    let auth_url = flow.start_login();
    let state = store.get(STATE_KEY).expect("state not persisted");

    assert!(auth_url.starts_with(
        "https://login.microsoftonline.com/common/oauth2/v2.0/authorize?"
    ));
    assert!(auth_url.contains("client_id=11111111-2222-3333-4444-555555555555"));
    assert!(auth_url.contains("response_type=code"));
    assert!(auth_url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback%2Fmicrosoft"));
    assert!(auth_url.contains("scope=openid%20profile%20email%20User.Read"));
    assert!(auth_url.contains(&format!("state={state}")));
    assert!(auth_url.contains("response_mode=query"));
    assert!(auth_url.contains("prompt=select_account"));

    let redirect = format!(
        "http://localhost:3000/callback/microsoft?code=0.AXwAabc-def&state={state}&session_state=junk"
    );
    let params = CallbackParams::from_redirect_url(&redirect).expect("Failed to parse redirect");

    let outcome = flow.complete_login(&params);
    assert_eq!(outcome, CallbackOutcome::Success { code: "0.AXwAabc-def".to_string() });
    assert!(store.get(STATE_KEY).is_none(), "state must be consumed on success");
}

/// Validates the CSRF defense: a forged state is rejected without the code.
///
/// # Test Steps
/// 1. Start a login attempt
/// 2. Deliver a callback whose state the flow never issued
/// 3. Verify the outcome is `StateMismatch`, carries no code, and the stored
///    state survives for inspection
#[test]
fn test_forged_state_rejected() {
    let (flow, store) = test_flow();

    let _ = flow.start_login();
    let params = CallbackParams::from_redirect_url(
        "http://localhost:3000/callback/microsoft?code=stolen_code&state=attacker_chosen",
    )
    .expect("Failed to parse redirect");

    let outcome = flow.complete_login(&params);

    assert_eq!(outcome, CallbackOutcome::StateMismatch);
    assert!(
        !serde_json::to_string(&outcome).expect("Failed to serialize").contains("stolen_code"),
        "authorization code leaked through a mismatch outcome"
    );
    assert!(store.get(STATE_KEY).is_some());
}

/// Validates that a provider error outranks simultaneous success parameters.
///
/// # Test Steps
/// 1. Start a login attempt and echo the genuine state together with a code
///    AND an error in one query
/// 2. Verify the outcome is the verbatim `ProviderError`
/// 3. Verify the stored state was not consumed
#[test]
fn test_provider_error_precedence() {
    let (flow, store) = test_flow();

    let _ = flow.start_login();
    let state = store.get(STATE_KEY).expect("state not persisted");

    let redirect = format!(
        "http://localhost:3000/callback/microsoft?code=abc123&state={state}\
         &error=access_denied&error_description=user%20cancelled"
    );
    let params = CallbackParams::from_redirect_url(&redirect).expect("Failed to parse redirect");

    assert_eq!(
        flow.complete_login(&params),
        CallbackOutcome::ProviderError {
            error: "access_denied".to_string(),
            description: "user cancelled".to_string(),
        }
    );
    assert_eq!(store.get(STATE_KEY), Some(state));
}

/// Validates the pending gate: no parameters means wait, not fail.
///
/// # Test Steps
/// 1. Start a login attempt
/// 2. Classify an empty query (routing layer not ready yet)
/// 3. Verify the outcome is `Pending` and the store is untouched
/// 4. Re-invoke with the real parameters and verify it now succeeds
#[test]
fn test_pending_then_success() {
    let (flow, store) = test_flow();

    let _ = flow.start_login();
    let state = store.get(STATE_KEY).expect("state not persisted");

    assert_eq!(flow.complete_login(&CallbackParams::default()), CallbackOutcome::Pending);
    assert_eq!(store.get(STATE_KEY), Some(state.clone()));

    let params = CallbackParams {
        code: Some("abc123".to_string()),
        state: Some(state),
        ..CallbackParams::default()
    };
    assert_eq!(
        flow.complete_login(&params),
        CallbackOutcome::Success { code: "abc123".to_string() }
    );
}

/// Validates that a callback with nothing ever initiated is a mismatch.
///
/// # Test Steps
/// 1. Build a flow whose store never held a state
/// 2. Deliver a plausible-looking success callback
/// 3. Verify the outcome is `StateMismatch`, not `Success`
#[test]
fn test_uninitiated_callback_is_mismatch() {
    let (flow, _store) = test_flow();

    let params = CallbackParams::from_redirect_url(
        "http://localhost:3000/callback/microsoft?code=abc123&state=S",
    )
    .expect("Failed to parse redirect");

    assert_eq!(flow.complete_login(&params), CallbackOutcome::StateMismatch);
}
