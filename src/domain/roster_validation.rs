//! Delivery checks for a selected roster.
//!
//! The selector may return a short or oddly distributed roster when the
//! source data runs out of candidates; callers run [`validate_roster`] before
//! handing the result to anyone.

use crate::domain::error::{FieldErrors, RosterViolation};
use crate::domain::selection::{RankedPlayer, Roster, ROSTER_SIZE};

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_POSITION_LEN: usize = 3;
const BLANK: &str = "This field may not be blank.";

/// Required count per position code, checked in this order.
pub const EXPECTED_POSITIONS: [(&str, usize); 4] = [("GKP", 1), ("DEF", 2), ("MID", 3), ("FWD", 1)];

pub fn validate_roster(roster: &Roster) -> Result<(), RosterViolation> {
    let entries: Vec<FieldErrors> = roster.iter().map(validate_entry).collect();
    if entries.iter().any(|errors| !errors.is_empty()) {
        return Err(RosterViolation::Entries(entries));
    }

    if roster.len() != ROSTER_SIZE {
        return Err(RosterViolation::Size {
            expected: ROSTER_SIZE,
            actual: roster.len(),
        });
    }

    for (code, expected) in EXPECTED_POSITIONS {
        let actual = roster.count_position(code);
        if actual != expected {
            return Err(RosterViolation::PositionCount {
                code,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

fn validate_entry(player: &RankedPlayer) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Some(message) = check_text(&player.name, MAX_NAME_LEN) {
        errors.add("name", message);
    }
    if let Some(message) = check_text(&player.position, MAX_POSITION_LEN) {
        errors.add("position", message);
    }
    errors
}

/// Surrounding whitespace is ignored; blank text is rejected before length.
fn check_text(value: &str, max_len: usize) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        Some(BLANK.to_string())
    } else if value.chars().count() > max_len {
        Some(format!(
            "Ensure this field has no more than {max_len} characters."
        ))
    } else {
        None
    }
}
