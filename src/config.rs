use std::env;

use anyhow::Context;

use crate::error::ServerError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const DEFAULT_DEVICE_PRIORITIES: &str = "4";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: String,
    pub http_port: u16,
    /// Upper bound on a single log submission body
    pub max_body_bytes: usize,
    /// Priorities handed to every device polling its settings
    pub device_priorities: Vec<String>,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_host(&self.bind_address)?;
        validate_port(self.http_port)?;
        if self.max_body_bytes == 0 {
            return Err(ServerError::Config("Max body size cannot be 0".into()));
        }
        validate_priorities(&self.device_priorities)?;
        Ok(())
    }

    /// Build settings from a variable lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let http_port = match lookup("HTTP_PORT") {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("Invalid HTTP_PORT: {v}"))?,
            None => DEFAULT_HTTP_PORT,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .with_context(|| format!("Invalid MAX_BODY_BYTES: {v}"))?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let device_priorities = parse_priorities(
            &lookup("DEVICE_PRIORITIES").unwrap_or_else(|| DEFAULT_DEVICE_PRIORITIES.to_string()),
        );

        let settings = Settings {
            bind_address,
            http_port,
            max_body_bytes,
            device_priorities,
        };

        // Validate settings before returning
        settings.validate()?;

        Ok(settings)
    }
}

/// Validates that the host is not empty or whitespace-only.
fn validate_host(host: &str) -> Result<(), ServerError> {
    if host.trim().is_empty() {
        return Err(ServerError::Config("Host cannot be empty".into()));
    }
    Ok(())
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ServerError> {
    if port == 0 {
        return Err(ServerError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

/// Journal priorities are the syslog levels 0 (emerg) through 7 (debug).
fn validate_priorities(priorities: &[String]) -> Result<(), ServerError> {
    if priorities.is_empty() {
        return Err(ServerError::Config(
            "At least one device priority is required".into(),
        ));
    }
    for p in priorities {
        if !matches!(p.as_str(), "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7") {
            return Err(ServerError::Config(format!(
                "Invalid device priority: {p:?} (expected 0-7)"
            )));
        }
    }
    Ok(())
}

fn parse_priorities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn get_configuration() -> anyhow::Result<Settings> {
    Settings::from_lookup(|name| env::var(name).ok())
        .context("Failed to read settings from environment")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    fn valid_settings() -> Settings {
        Settings {
            bind_address: "0.0.0.0".into(),
            http_port: 8080,
            max_body_bytes: 1024,
            device_priorities: vec!["4".into()],
        }
    }

    #[test]
    fn test_validate_port_valid() {
        assert!(validate_port(80).is_ok());
        assert!(validate_port(8080).is_ok());
        assert!(validate_port(65535).is_ok());
        assert!(validate_port(1).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let result = validate_port(0);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Port cannot be 0"));
    }

    #[test]
    fn test_validate_host_whitespace_fails() {
        let result = validate_host("   ");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Host cannot be empty"));
    }

    #[test]
    fn test_validate_priorities() {
        assert!(validate_priorities(&["0".into(), "7".into()]).is_ok());
        assert!(validate_priorities(&[]).is_err());
        assert!(validate_priorities(&["8".into()]).is_err());
        assert!(validate_priorities(&["warning".into()]).is_err());
    }

    #[test]
    fn test_parse_priorities_trims_and_skips_empty() {
        assert_eq!(parse_priorities(" 3, 4,,6 "), vec!["3", "4", "6"]);
    }

    #[test]
    fn test_settings_validate_success() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_settings_validate_zero_body_limit_fails() {
        let settings = Settings {
            max_body_bytes: 0,
            ..valid_settings()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_lookup_uses_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.bind_address, "0.0.0.0");
        assert_eq!(settings.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(settings.max_body_bytes, 2 * 1024 * 1024);
        assert_eq!(settings.device_priorities, vec!["4"]);
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("BIND_ADDRESS", "127.0.0.1"),
            ("HTTP_PORT", "9000"),
            ("MAX_BODY_BYTES", "4096"),
            ("DEVICE_PRIORITIES", "3,4"),
        ]))
        .unwrap();
        assert_eq!(settings.bind_address, "127.0.0.1");
        assert_eq!(settings.http_port, 9000);
        assert_eq!(settings.max_body_bytes, 4096);
        assert_eq!(settings.device_priorities, vec!["3", "4"]);
    }

    #[test]
    fn test_from_lookup_rejects_bad_port() {
        let err = Settings::from_lookup(lookup_from(&[("HTTP_PORT", "eighty")])).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid HTTP_PORT"));
    }

    #[test]
    fn test_from_lookup_rejects_bad_priority() {
        let result = Settings::from_lookup(lookup_from(&[("DEVICE_PRIORITIES", "4,9")]));
        assert!(result.is_err());
    }
}
