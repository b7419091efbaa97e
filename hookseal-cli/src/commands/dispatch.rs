//! Dispatch one client event through the configured webhook stack.

use crate::error::{CliError, CliResult};
use colored::Colorize;
use hookseal_webhooks::{
    ActivityLog, DispatchOutcome, EventKind, EventRouter, MemoryActivityLog, TracingActivityLog,
};
use std::path::Path;
use std::sync::Arc;

pub async fn execute(event: &str, record: &str, config: Option<&Path>, json: bool) -> CliResult<()> {
    let kind = event
        .parse::<EventKind>()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

    let record = match super::read_json(record)? {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "record must be a JSON object, got {}",
                other
            )));
        }
    };

    let settings = super::load_settings(config)?;
    let log = Arc::new(MemoryActivityLog::new());
    let router = EventRouter::from_settings(&settings, log.clone())?;

    let outcome = router.dispatch(kind, &record).await;

    let Some(entry) = log.last() else {
        return Err(CliError::Dispatch("no activity entry was written".to_string()));
    };
    TracingActivityLog.log(&entry.message, &entry.subject);

    if json {
        println!("{}", serde_json::to_string(&entry)?);
        return Ok(());
    }

    let marker = match &outcome {
        DispatchOutcome::Completed(result) if result.is_2xx() => "✓".green().bold(),
        DispatchOutcome::Completed(result) if result.is_success() => "!".yellow().bold(),
        DispatchOutcome::Unhandled => "-".dimmed(),
        _ => "✗".red().bold(),
    };
    println!("{} [{}] {}", marker, entry.subject, entry.message);

    Ok(())
}
