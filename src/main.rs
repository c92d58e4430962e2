mod config;
mod encoder;
mod error;

use std::io::BufRead;

use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use crate::config::EncoderConfig;
use crate::encoder::PasswordEncoder;
use crate::error::HasherError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = EncoderConfig::default();
    tracing::debug!(version = config.version_tag(), cost = config.cost, "fixed hashing parameters");

    let encoder = PasswordEncoder::new(config);

    let password = Zeroizing::new(
        read_password(std::io::stdin().lock()).unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(-1);
        }),
    );

    tracing::debug!(bytes = password.len(), "collected password from stdin");

    match encoder.encode(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(-1);
        }
    }
}

/// Collect all of stdin as the password, joining lines with `\n`.
/// EOF before the first line means there is no password to hash.
fn read_password<R: BufRead>(reader: R) -> Result<String, HasherError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(|e| HasherError::StdinRead(e.to_string()))?);
    }
    if lines.is_empty() {
        return Err(HasherError::NoInput);
    }
    Ok(lines.join("\n"))
}
