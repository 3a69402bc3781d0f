//! User-Agent helper
//!
//! Every request carries the same User-Agent.
//! Format: `petfriends/{version} ({os}; {arch})`

use std::sync::OnceLock;

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string, computed once per process.
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "petfriends/{} ({}; {})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    })
}
