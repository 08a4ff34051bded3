//! An interactive cutting-effect canvas built with Rust and the Bevy game engine.
//!
//! Drag across the window to slash it; the cut bleeds and drips.

use anyhow::Result;
use kerf::core;

/// Run the application with the given CLI arguments.
fn run_app(cli_args: core::cli::CliArgs) -> Result<()> {
    core::runner::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
