//! Command handler modules for the Omaha CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: all errors propagated via `CliError`
//!
//! `calc` and `deal` share the analysis renderer in `calc`.

mod calc;
mod cfg;
mod deal;
mod score;

pub use calc::handle_calc_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use score::handle_score_command;
