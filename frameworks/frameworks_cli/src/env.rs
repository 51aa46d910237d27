//! Environment Configuration Module
//!
//! Reads driver settings from environment variables:
//! - `RADIX_BASE`: radix used when `--base` is not given
//! - `RADIX_FACTORIAL_LIMIT`: largest `n` accepted by `factorial`
//!
//! Debug output (`RADIX_DEBUG`) is handled by `DebugUtils::init_from_env`.

use std::env;

use api_facades::Radix;

/// Radix override
pub const BASE_ENV_VAR: &str = "RADIX_BASE";

/// Factorial input cap
pub const FACTORIAL_LIMIT_ENV_VAR: &str = "RADIX_FACTORIAL_LIMIT";

/// Driver settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Radix for encode/decode when `--base` is absent
    pub base: Option<u64>,
    /// Largest accepted factorial input
    pub factorial_limit: Option<u64>,
}

impl Settings {
    /// Base for a command: explicit flag, then environment, then default
    pub fn resolve_base(&self, flag: Option<u64>) -> Option<u64> {
        flag.or(self.base)
    }
}

/// Load settings from the process environment
pub fn load_settings() -> Result<Settings, String> {
    settings_from(|key| env::var(key).ok())
}

/// Build settings from a variable lookup
///
/// Empty values count as unset. Malformed values are errors.
pub fn settings_from<F>(lookup: F) -> Result<Settings, String>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let base = match read(BASE_ENV_VAR) {
        Some(value) => {
            let radix: Radix = value
                .parse()
                .map_err(|e| format!("{}: {}", BASE_ENV_VAR, e))?;
            Some(radix.get())
        }
        None => None,
    };

    let factorial_limit = match read(FACTORIAL_LIMIT_ENV_VAR) {
        Some(value) => Some(value.trim().parse::<u64>().map_err(|e| {
            format!("{}: invalid value {:?}: {}", FACTORIAL_LIMIT_ENV_VAR, value, e)
        })?),
        None => None,
    };

    Ok(Settings {
        base,
        factorial_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        settings_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment() {
        assert_eq!(settings(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn test_values() {
        let s = settings(&[(BASE_ENV_VAR, "16"), (FACTORIAL_LIMIT_ENV_VAR, " 1000 ")]).unwrap();
        assert_eq!(s.base, Some(16));
        assert_eq!(s.factorial_limit, Some(1000));
    }

    #[test]
    fn test_blank_is_unset() {
        let s = settings(&[(BASE_ENV_VAR, "  ")]).unwrap();
        assert_eq!(s.base, None);
    }

    #[test]
    fn test_invalid_values() {
        let err = settings(&[(BASE_ENV_VAR, "0")]).unwrap_err();
        assert!(err.starts_with(BASE_ENV_VAR));
        assert!(settings(&[(BASE_ENV_VAR, "two")]).is_err());
        assert!(settings(&[(FACTORIAL_LIMIT_ENV_VAR, "-4")]).is_err());
    }

    #[test]
    fn test_resolve_base() {
        let s = Settings {
            base: Some(16),
            factorial_limit: None,
        };
        assert_eq!(s.resolve_base(Some(10)), Some(10));
        assert_eq!(s.resolve_base(None), Some(16));
        assert_eq!(Settings::default().resolve_base(None), None);
    }
}
