//! Simple TV discovery that outputs JSON for scripting
//!
//! Usage: cargo run -p viera-discovery --example discover_json [timeout-secs]

use std::process::ExitCode;
use std::time::Duration;

use viera_discovery::discover_with_timeout;

fn main() -> ExitCode {
    let timeout = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);

    let tvs = match discover_with_timeout(Duration::from_secs(timeout)) {
        Ok(tvs) => tvs,
        Err(e) => {
            eprintln!("Discovery failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&tvs) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}
