//! Domain error types.

use std::collections::BTreeMap;
use std::fmt;

/// Field-level validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Why a roster was refused for delivery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterViolation {
    /// One slot per roster entry; entries that passed have no messages.
    #[error("invalid entries: {}", describe_entries(.0))]
    Entries(Vec<FieldErrors>),

    #[error("roster must contain exactly {expected} players, got {actual}")]
    Size { expected: usize, actual: usize },

    #[error("roster must contain exactly {expected} {code}, got {actual}")]
    PositionCount {
        code: &'static str,
        expected: usize,
        actual: usize,
    },
}

fn describe_entries(entries: &[FieldErrors]) -> String {
    entries
        .iter()
        .enumerate()
        .filter(|(_, errors)| !errors.is_empty())
        .map(|(index, errors)| format!("[{index}] {errors}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Top-level error type for magnificent7.
#[derive(Debug, thiserror::Error)]
pub enum Magnificent7Error {
    #[error("failed to fetch data from {url}: {reason}")]
    UpstreamFetch { url: String, reason: String },

    #[error("invalid snapshot: {0}")]
    InboundShape(FieldErrors),

    #[error("'{team_name}' is not a valid team")]
    InvalidTeamFilter { team_name: String },

    #[error("invalid roster: {0}")]
    OutboundShape(#[from] RosterViolation),

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&Magnificent7Error> for std::process::ExitCode {
    fn from(err: &Magnificent7Error) -> Self {
        let code: u8 = match err {
            Magnificent7Error::Io(_) => 1,
            Magnificent7Error::ConfigParse { .. }
            | Magnificent7Error::ConfigMissing { .. }
            | Magnificent7Error::ConfigInvalid { .. } => 2,
            Magnificent7Error::UpstreamFetch { .. } => 3,
            Magnificent7Error::InboundShape(_) => 4,
            Magnificent7Error::InvalidTeamFilter { .. } => 5,
            Magnificent7Error::OutboundShape(_) => 6,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_group_messages_by_field() {
        let mut errors = FieldErrors::new();
        errors.add("teams", "This field is required.");
        errors.add("elements", "first");
        errors.add("elements", "second");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("elements"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
        assert_eq!(errors.get("phases"), None);
    }

    #[test]
    fn field_errors_display_is_sorted_by_field() {
        let mut errors = FieldErrors::new();
        errors.add("teams", "b");
        errors.add("events", "a");
        assert_eq!(errors.to_string(), "events: a; teams: b");
    }

    #[test]
    fn field_errors_serialize_as_object() {
        let mut errors = FieldErrors::new();
        errors.add("events", "This field is required.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"events": ["This field is required."]}));
    }

    #[test]
    fn entries_display_skips_clean_slots() {
        let mut bad = FieldErrors::new();
        bad.add("name", "This field may not be blank.");
        let violation = RosterViolation::Entries(vec![FieldErrors::new(), bad]);
        assert_eq!(
            violation.to_string(),
            "invalid entries: [1] name: This field may not be blank."
        );
    }

    #[test]
    fn invalid_team_message_quotes_name() {
        let err = Magnificent7Error::InvalidTeamFilter {
            team_name: "FakeTeam".into(),
        };
        assert_eq!(err.to_string(), "'FakeTeam' is not a valid team");
    }

    #[test]
    fn roster_violation_converts_into_outbound_shape() {
        let err: Magnificent7Error = RosterViolation::Size {
            expected: 7,
            actual: 3,
        }
        .into();
        assert!(matches!(err, Magnificent7Error::OutboundShape(_)));
        assert_eq!(
            err.to_string(),
            "invalid roster: roster must contain exactly 7 players, got 3"
        );
    }

    #[test]
    fn exit_codes_distinguish_error_classes() {
        use std::process::ExitCode;

        let cases = [
            (
                Magnificent7Error::UpstreamFetch {
                    url: "http://x".into(),
                    reason: "status 500".into(),
                },
                ExitCode::from(3),
            ),
            (
                Magnificent7Error::InboundShape(FieldErrors::new()),
                ExitCode::from(4),
            ),
            (
                Magnificent7Error::InvalidTeamFilter {
                    team_name: "x".into(),
                },
                ExitCode::from(5),
            ),
            (
                Magnificent7Error::OutboundShape(RosterViolation::Size {
                    expected: 7,
                    actual: 0,
                }),
                ExitCode::from(6),
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ExitCode::from(&err), expected);
        }
    }
}
