//! entracode - Entra ID authorization-code fetcher
//!
//! Terminal host for the browser-based authorization-code flow: prints the
//! authorization URL, waits for the redirect URL to be pasted back, and
//! prints the classified outcome. The raw code is handed to the user for a
//! manual exchange against an external backend; no token request is made
//! here.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use entracode_common::auth::{
    CallbackOutcome, CallbackParams, EntraConfig, LoginFlow, MemoryStateStore,
};
use tracing::{info, warn};

fn env_var(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} is not set (populate it in .env)"))
}

/// Assemble the flow configuration from the environment.
///
/// `CLIENT_ID`, `TENANT_ID`, and `REDIRECT_URI` are required; `SCOPES` is an
/// optional space-separated override of the default scope set.
fn config_from_env() -> Result<EntraConfig> {
    let scopes = match std::env::var("SCOPES") {
        Ok(raw) => raw.split_whitespace().map(String::from).collect(),
        Err(_) => EntraConfig::default_scopes(),
    };

    let config = EntraConfig::new(
        env_var("CLIENT_ID")?,
        env_var("TENANT_ID")?,
        env_var("REDIRECT_URI")?,
        scopes,
    );
    config.validate().context("incomplete OAuth configuration")?;

    Ok(config)
}

fn print_outcome(outcome: &CallbackOutcome) {
    match outcome {
        CallbackOutcome::Success { code } => {
            println!();
            println!("Authorization code received:");
            println!();
            println!("{code}");
            println!();
            println!(
                "The code expires within minutes; exchange it against your backend promptly."
            );
        }
        CallbackOutcome::ProviderError { error, description } => {
            println!();
            println!("Authentication failed: {error} - {description}");
        }
        CallbackOutcome::StateMismatch => {
            warn!("state mismatch on pasted redirect");
            println!();
            println!(
                "Invalid state parameter. Possible cross-site request forgery; \
                 the authorization code was discarded. Run the flow again."
            );
        }
        CallbackOutcome::Pending => {
            println!();
            println!("That URL carried no code and no error; paste the full redirect URL.");
        }
    }
}

fn run() -> Result<()> {
    // Load .env before reading any configuration.
    match dotenvy::dotenv() {
        Ok(path) => info!("loaded .env from {}", path.display()),
        Err(e) => info!("no .env file loaded: {e}"),
    }

    let config = config_from_env()?;
    info!(tenant = %config.tenant_id, "configuration loaded");

    let flow = LoginFlow::new(config, Arc::new(MemoryStateStore::new()));

    let auth_url = flow.start_login();
    println!("Open this URL in your browser and sign in:");
    println!();
    println!("{auth_url}");
    println!();
    println!("After signing in you will land on the redirect URI.");
    println!("Paste the full redirect URL here (Ctrl-D to abort):");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("failed to read stdin")?;
        if read == 0 {
            println!();
            println!("Aborted.");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let params = match CallbackParams::from_redirect_url(&line) {
            Ok(params) => params,
            Err(e) => {
                println!("{e}; paste the complete redirect URL.");
                continue;
            }
        };

        let outcome = flow.complete_login(&params);
        print_outcome(&outcome);

        // Pending means the pasted URL was incomplete; everything else is
        // final for this attempt.
        if outcome != CallbackOutcome::Pending {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging FIRST so .env loading is visible.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    run()
}
