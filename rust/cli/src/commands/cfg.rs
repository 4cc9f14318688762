//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, config file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "format": {
//!     "value": "text",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "format": {
            "value": config.format,
            "source": sources.format,
        },
        "list_better": {
            "value": config.list_better,
            "source": sources.list_better,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
