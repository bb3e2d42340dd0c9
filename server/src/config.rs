//! Host configuration parsed from environment variables.
//!
//! Only the listen port lives here; Leptos reads its own `LEPTOS_*` options
//! and the image API location is baked into the client bundle.

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum HostConfigError {
    /// `PORT` was set but is not a valid TCP port.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
}

/// Read `PORT`, defaulting to 3000.
pub fn port_from_env() -> Result<u16, HostConfigError> {
    parse_port(std::env::var("PORT").ok().as_deref())
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>()
        .map_err(|_| HostConfigError::InvalidPort(raw.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
