//! Config check command
//!
//! Loads settings the same way `dispatch` does and prints a redacted summary.

use crate::error::CliResult;
use colored::Colorize;
use hookseal_jwt::RECOMMENDED_SECRET_LEN;
use hookseal_webhooks::{EventKind, endpoint_for};
use std::path::Path;

pub fn check(config: Option<&Path>) -> CliResult<()> {
    let settings = super::load_settings(config)?;
    let secret = settings.signing_secret()?;

    println!("{}", "hookseal configuration".bright_cyan().bold());
    println!();

    let weak = format!("weak, fewer than {} chars", RECOMMENDED_SECRET_LEN);
    let strength = if secret.is_weak() {
        weak.as_str().yellow()
    } else {
        "ok".green()
    };
    println!("  secret:     {} ({} chars, {})", "***".dimmed(), secret.len(), strength);
    println!("  timeout:    {}s", settings.timeout_secs);
    println!("  user agent: {}", settings.user_agent);
    println!("  verify tls: {}", settings.verify_tls);
    println!();

    for kind in EventKind::ALL {
        match endpoint_for(&settings, kind) {
            Some(url) => println!("  {} {:<13} {}", "✓".green().bold(), kind, url),
            None => println!("  {} {:<13} {}", "-".dimmed(), kind, "not configured".dimmed()),
        }
    }

    Ok(())
}
