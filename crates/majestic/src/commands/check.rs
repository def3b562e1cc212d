//! Check command implementation.
//!
//! Validates a site's settings against the schema and reports every
//! problem with its dotted path. Generation is refused (nonzero exit)
//! only for missing required settings; unknown-key warnings are
//! printed and ignored.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use majestic_config::{
    SchemaError, default_settings, merge_layers, settings_schema, validate_with_warnings,
};

pub fn execute(settings_path: &Path, no_defaults: bool) -> Result<()> {
    let text = std::fs::read_to_string(settings_path)
        .with_context(|| format!("cannot read settings file {}", settings_path.display()))?;
    let local: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", settings_path.display()))?;

    let raw = if no_defaults {
        local
    } else {
        merge_layers(vec![default_settings(), local])
    };
    debug!("validating settings from {}", settings_path.display());

    let (settings, problems) = validate_with_warnings(&raw, settings_schema());

    let (fatal, warnings): (Vec<&SchemaError>, Vec<&SchemaError>) =
        problems.iter().partition(|p| p.is_fatal());

    for warning in &warnings {
        println!("warning: {warning}");
    }
    for error in &fatal {
        println!("error: {error}");
    }

    match settings {
        Some(_) => {
            info!(
                warnings = warnings.len(),
                "settings are valid, generation may proceed"
            );
            Ok(())
        }
        None => bail!(
            "{} missing required setting(s), generation must not proceed",
            fatal.len()
        ),
    }
}
