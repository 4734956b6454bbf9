//! Position code lookup.

use std::collections::HashMap;

use crate::domain::player::PositionType;

/// Returns the short display code for `position_id`, scanning the reference
/// list in order. `None` when no entry matches.
pub fn resolve_position_code(position_id: u32, position_types: &[PositionType]) -> Option<&str> {
    position_types
        .iter()
        .find(|p| p.id == position_id)
        .map(|p| p.singular_name_short.as_str())
}

/// Prebuilt id → code map with the same first-match semantics as
/// [`resolve_position_code`].
#[derive(Debug, Clone, Default)]
pub struct PositionTable<'a> {
    codes: HashMap<u32, &'a str>,
}

impl<'a> PositionTable<'a> {
    pub fn new(position_types: &'a [PositionType]) -> Self {
        let mut codes = HashMap::with_capacity(position_types.len());
        for p in position_types {
            codes.entry(p.id).or_insert(p.singular_name_short.as_str());
        }
        Self { codes }
    }

    pub fn code(&self, position_id: u32) -> Option<&'a str> {
        self.codes.get(&position_id).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
