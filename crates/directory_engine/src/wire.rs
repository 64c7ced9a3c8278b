//! JSON payloads of the directory API.
//!
//! `/api/candidates` returns `[id, {candidate: {...}, skills: [{name}, ...]}]`
//! pairs; this module maps them onto named [`Candidate`] records. The pair
//! shape does not leave this module.

use std::collections::HashSet;

use directory_core::{Candidate, CandidateId, Profile, Skill};
use engine_logging::engine_warn;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use thiserror::Error;

const FULL_NAME: &str = "fullName";
const PRIMARY_PROFESSION: &str = "primaryProfession";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(Number),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct WireEntry {
    #[serde(default)]
    candidate: Option<Map<String, Value>>,
    #[serde(default)]
    skills: Option<Vec<WireSkill>>,
}

#[derive(Debug, Deserialize)]
struct WireSkill {
    #[serde(default)]
    name: Value,
}

/// Decode the `/api/candidates` body.
///
/// Entries that do not have the pair shape are skipped, as are later
/// duplicates of an id.
pub fn decode_candidates(bytes: &[u8]) -> Result<Vec<Candidate>, DecodeError> {
    let entries: Vec<Value> = serde_json::from_slice(bytes)?;
    let mut seen = HashSet::with_capacity(entries.len());
    let mut candidates = Vec::with_capacity(entries.len());

    for (index, raw) in entries.into_iter().enumerate() {
        let (wire_id, entry) = match serde_json::from_value::<(WireId, WireEntry)>(raw) {
            Ok(pair) => pair,
            Err(err) => {
                engine_warn!("Skipping malformed candidate entry #{}: {}", index, err);
                continue;
            }
        };
        let id = candidate_id(wire_id);
        if !seen.insert(id.clone()) {
            engine_warn!("Dropping duplicate candidate id={}", id);
            continue;
        }
        candidates.push(Candidate {
            id,
            profile: profile_from(entry.candidate.unwrap_or_default()),
            skills: entry
                .skills
                .unwrap_or_default()
                .into_iter()
                .map(|skill| Skill {
                    name: searchable_text(&skill.name).unwrap_or_default(),
                })
                .collect(),
        });
    }

    Ok(candidates)
}

/// Integral ids that fit `i64` stay numeric; any other number keeps its text form.
fn candidate_id(wire_id: WireId) -> CandidateId {
    match wire_id {
        WireId::Number(n) => {
            let text = number_text(&n);
            match text.parse::<i64>() {
                Ok(value) => CandidateId::Number(value),
                Err(_) => CandidateId::Text(text),
            }
        }
        WireId::Text(s) => CandidateId::Text(s),
    }
}

/// Decode the `/api/jobs` body.
pub fn decode_jobs(bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn profile_from(fields: Map<String, Value>) -> Profile {
    let mut profile = Profile::default();
    for (key, value) in fields {
        let text = searchable_text(&value);
        match key.as_str() {
            FULL_NAME => profile.full_name = text,
            PRIMARY_PROFESSION => profile.primary_profession = text,
            _ => {
                if let Some(text) = text {
                    profile.attributes.push((key, text));
                }
            }
        }
    }
    profile
}

/// String form of a profile value; `null` has none.
///
/// Numbers keep their decimal form with integral floats dropping `.0`,
/// arrays join their elements with `,`, objects become compact JSON.
pub fn searchable_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_text(n)),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| searchable_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Decimal text of a number. Integral floats print without a fraction, so
/// `5.0` reads as `5`.
fn number_text(n: &Number) -> String {
    if n.is_f64() {
        if let Some(value) = n.as_f64() {
            if value.fract() == 0.0 && value.abs() < 1e21 {
                return format!("{value:.0}");
            }
            return value.to_string();
        }
    }
    n.to_string()
}
