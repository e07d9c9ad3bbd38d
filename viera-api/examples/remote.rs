//! Minimal remote control
//!
//! Usage:
//!   cargo run -p viera-api --example remote -- discover
//!   cargo run -p viera-api --example remote -- <host> key <name-or-code>
//!   cargo run -p viera-api --example remote -- <host> volume [0-100]
//!   cargo run -p viera-api --example remote -- <host> mute [on|off]
//!
//! Set `VIERA_LOG_MODE=debug` to see the SOAP exchanges.

use std::process::ExitCode;

use viera_api::logging::init_logging_from_env;
use viera_api::{discover, ApiError, Key, RemoteControl};

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    match args {
        [command] if command == "discover" => {
            for tv in discover()? {
                println!("{}\t{}", tv.address(), tv.location().unwrap_or("-"));
            }
        }
        [host, command, rest @ ..] => {
            let tv = RemoteControl::with_host(host.as_str());
            match (command.as_str(), rest) {
                ("key", [key]) => tv.send_key(key.parse::<Key>()?)?,
                ("volume", []) => println!("{}", tv.get_volume()?),
                ("volume", [value]) => {
                    let volume = value
                        .parse::<u8>()
                        .map_err(|_| ApiError::Usage(format!("Invalid volume '{}'", value)))?;
                    tv.set_volume(volume)?;
                }
                ("mute", []) => println!("{}", if tv.get_mute()? { "on" } else { "off" }),
                ("mute", [state]) => tv.set_mute(state == "on")?,
                _ => return Err(ApiError::Usage(format!("Unknown command '{}'", command)).into()),
            }
        }
        _ => return Err(ApiError::Usage("Expected 'discover' or '<host> <command> [arg]'".to_string()).into()),
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = init_logging_from_env() {
        eprintln!("{}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
