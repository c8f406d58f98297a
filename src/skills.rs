//! Skill records and normalization of raw payload entries.

use serde_json::Value;

/// One skill listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// Owner/repository slug the skill is published from.
    pub source: String,
    /// Identifier unique within a source in practice, not enforced.
    pub skill_id: String,
    /// Display name.
    pub name: String,
    /// Install count. The site reports non-negative values; nothing here
    /// rejects a negative one.
    pub installs: i64,
}

/// Convert raw payload entries into typed skills, preserving input order.
///
/// A record survives only if `source`, `skillId`, and `name` are all
/// strings; otherwise it is dropped without comment. `installs` never
/// disqualifies a record: absent or uncoercible values fall back to 0.
pub fn parse_skills(items: &[Value]) -> Vec<Skill> {
    let mut skills = Vec::with_capacity(items.len());
    let mut dropped = 0usize;

    for item in items {
        let source = item.get("source").and_then(Value::as_str);
        let skill_id = item.get("skillId").and_then(Value::as_str);
        let name = item.get("name").and_then(Value::as_str);
        let (Some(source), Some(skill_id), Some(name)) = (source, skill_id, name) else {
            dropped += 1;
            continue;
        };
        let installs = item.get("installs").map_or(0, coerce_installs);
        skills.push(Skill {
            source: source.to_string(),
            skill_id: skill_id.to_string(),
            name: name.to_string(),
            installs,
        });
    }

    if dropped > 0 {
        tracing::debug!("dropped {dropped} malformed skill record(s)");
    }
    skills
}

/// Best-effort integer coercion for install counts.
///
/// Integers pass through, floats truncate toward zero, numeric strings
/// parse, booleans count as 0/1. Everything else is 0.
fn coerce_installs(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}
