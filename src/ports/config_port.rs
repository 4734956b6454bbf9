//! Configuration access port trait.
//!
//! Implementors only supply raw strings; typed reads are shared so every
//! source rejects malformed values the same way.

use crate::domain::error::Magnificent7Error;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// Like [`ConfigPort::get_string`], but blank values count as missing.
    fn get_string_or(&self, section: &str, key: &str, default: &str) -> String {
        self.get_trimmed(section, key)
            .unwrap_or_else(|| default.to_string())
    }

    /// `Ok(None)` when absent or blank; text that is not an integer is an error.
    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, Magnificent7Error> {
        self.get_trimmed(section, key)
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| invalid(section, key, format!("'{raw}' is not an integer")))
            })
            .transpose()
    }

    /// Accepts `true/false`, `yes/no`, `on/off` and `1/0`, in any case.
    fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, Magnificent7Error> {
        self.get_trimmed(section, key)
            .map(|raw| match raw.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" => Ok(false),
                _ => Err(invalid(section, key, format!("'{raw}' is not a boolean"))),
            })
            .transpose()
    }

    /// Present, non-blank value with surrounding whitespace removed.
    fn get_trimmed(&self, section: &str, key: &str) -> Option<String> {
        self.get_string(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

fn invalid(section: &str, key: &str, reason: String) -> Magnificent7Error {
    Magnificent7Error::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason,
    }
}
