//! UI helper functions for terminal output.

use std::io::Write;

use crate::cli::COMMANDS;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Short usage listing printed after an argument error.
pub fn write_usage(err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err)?;
    writeln!(err, "Omaha hand calculator")?;
    writeln!(err, "Usage: omaha <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: omaha --help")
}
