//! Plays a scripted chat session through the mediator.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin yoriai -- --script session.txt --banned-word idiot
//! ```

use clap::Parser;
use yoriai_chat::ui::{Cli, run};
use yoriai_shared::logger::setup_logger;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    if let Err(e) = run(&cli) {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
