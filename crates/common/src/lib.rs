//! Flow core shared across entracode crates.
//!
//! The only module with real invariants is [`auth`]: CSRF state generation,
//! authorization-URL construction, and callback classification for the
//! Microsoft Entra ID authorization-code flow. Hosting concerns (config
//! loading, terminal I/O) live in the `entracode-cli` crate.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;

// Re-export commonly used types for convenience
// ------------------------------
pub use auth::{
    AuthError, AuthInitiator, CallbackOutcome, CallbackParams, EntraConfig, LoginFlow,
    MemoryStateStore, StateStore,
};
