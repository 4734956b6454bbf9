//! League snapshot shape validation.
//!
//! An upstream payload is checked field by field before anything is read
//! from it, so every structural problem is reported together instead of
//! failing on the first one.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::error::{FieldErrors, Magnificent7Error};
use crate::domain::player::{PlayerRecord, PositionType, Team};

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const INVALID_INTEGER: &str = "A valid integer is required.";

/// Key used for problems with the payload as a whole.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    List,
    Dict,
    Integer,
}

/// Required top-level fields, in declaration order.
const FIELDS: [(&str, FieldKind); 8] = [
    ("events", FieldKind::List),
    ("game_settings", FieldKind::Dict),
    ("phases", FieldKind::List),
    ("teams", FieldKind::List),
    ("total_players", FieldKind::Integer),
    ("elements", FieldKind::List),
    ("element_stats", FieldKind::List),
    ("element_types", FieldKind::List),
];

/// A structurally valid league snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSnapshot {
    pub events: Vec<Value>,
    pub game_settings: Map<String, Value>,
    pub phases: Vec<Value>,
    pub teams: Vec<Team>,
    pub total_players: i64,
    pub elements: Vec<PlayerRecord>,
    pub element_stats: Vec<Value>,
    pub element_types: Vec<PositionType>,
}

impl LeagueSnapshot {
    /// Validates `payload` and reads it into typed records.
    pub fn from_json(payload: Value) -> Result<Self, Magnificent7Error> {
        let mut root = match payload {
            Value::Object(map) => map,
            other => {
                let mut errors = FieldErrors::new();
                errors.add(
                    NON_FIELD_ERRORS,
                    format!(
                        "Invalid data. Expected a dictionary, but got {}.",
                        type_name(&other)
                    ),
                );
                return Err(Magnificent7Error::InboundShape(errors));
            }
        };

        let errors = validate_fields(&root);
        if !errors.is_empty() {
            return Err(Magnificent7Error::InboundShape(errors));
        }

        let mut errors = FieldErrors::new();
        let teams = read_items::<Team>(&mut root, "teams", &mut errors);
        let elements = read_items::<PlayerRecord>(&mut root, "elements", &mut errors);
        let element_types = read_items::<PositionType>(&mut root, "element_types", &mut errors);
        if !errors.is_empty() {
            return Err(Magnificent7Error::InboundShape(errors));
        }

        Ok(Self {
            events: take_list(&mut root, "events"),
            game_settings: match root.remove("game_settings") {
                Some(Value::Object(map)) => map,
                _ => Map::new(),
            },
            phases: take_list(&mut root, "phases"),
            teams,
            total_players: root.get("total_players").and_then(as_integer).unwrap_or(0),
            elements,
            element_stats: take_list(&mut root, "element_stats"),
            element_types,
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Magnificent7Error> {
        let payload: Value = serde_json::from_slice(bytes).map_err(|e| {
            let mut errors = FieldErrors::new();
            errors.add(NON_FIELD_ERRORS, format!("JSON parse error - {e}"));
            Magnificent7Error::InboundShape(errors)
        })?;
        Self::from_json(payload)
    }
}

/// Checks presence and structural type of every required field.
pub fn validate_fields(root: &Map<String, Value>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (field, kind) in FIELDS {
        if let Some(message) = check_field(root.get(field), kind) {
            errors.add(field, message);
        }
    }
    errors
}

fn check_field(value: Option<&Value>, kind: FieldKind) -> Option<String> {
    let value = match value {
        None => return Some(REQUIRED.to_string()),
        Some(Value::Null) => return Some(NOT_NULL.to_string()),
        Some(v) => v,
    };
    match kind {
        FieldKind::List if value.is_array() => None,
        FieldKind::List => Some(format!(
            "Expected a list of items but got type \"{}\".",
            type_name(value)
        )),
        FieldKind::Dict if value.is_object() => None,
        FieldKind::Dict => Some(format!(
            "Expected a dictionary of items but got type \"{}\".",
            type_name(value)
        )),
        FieldKind::Integer if as_integer(value).is_some() => None,
        FieldKind::Integer => Some(INVALID_INTEGER.to_string()),
    }
}

/// Integers, integral floats and integer strings (with an optional `.0`
/// suffix) are accepted; booleans are not.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            let digits = match trimmed.split_once('.') {
                Some((whole, frac)) if frac.chars().all(|c| c == '0') => whole,
                Some(_) => return None,
                None => trimmed,
            };
            digits.parse().ok()
        }
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn take_list(root: &mut Map<String, Value>, field: &str) -> Vec<Value> {
    match root.remove(field) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn read_items<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Vec<T> {
    let mut out = Vec::new();
    for (index, item) in take_list(root, field).into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(record) => out.push(record),
            Err(e) => errors.add(field, format!("item {index}: {e}")),
        }
    }
    out
}
