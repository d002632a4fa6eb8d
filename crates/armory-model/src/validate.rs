// SPDX-License-Identifier: Apache-2.0

//! Raw-JSON validation for entity locale files.
//!
//! Checks run against the decoded `serde_json::Value`, not the typed
//! record, so the offline data tool can report the offending field path
//! for files the typed decoder would reject wholesale. Validation is
//! fail-fast: the first violation wins, in a fixed order, so error
//! messages are deterministic.

use crate::{
    EntityKind, CHARACTER_IMAGE_KEYS, IMAGE_URL_PREFIX, SKILL_SCALING_RANKS, STAT_LEVEL_TAGS,
    WEAPON_IMAGE_KEYS,
};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_entity(kind: EntityKind, value: &Value) -> Result<(), ValidationError> {
    match kind {
        EntityKind::Character => validate_character(value),
        EntityKind::Weapon => validate_weapon(value),
    }
}

pub fn validate_character(value: &Value) -> Result<(), ValidationError> {
    let obj = expect_root_object(value)?;

    expect_string(obj, "id")?;
    expect_string(obj, "name")?;

    if obj.contains_key("rarity") {
        expect_number(obj.get("rarity"), "rarity")?;
    }
    if obj.contains_key("element") {
        expect_string(obj, "element")?;
    }
    if obj.contains_key("weaponType") {
        expect_string(obj, "weaponType")?;
    }

    validate_stats_by_level(obj.get("statsByLevel"), EntityKind::Character)?;
    validate_images(obj.get("images"), &CHARACTER_IMAGE_KEYS)?;
    validate_skills(obj.get("skills"))?;

    Ok(())
}

pub fn validate_weapon(value: &Value) -> Result<(), ValidationError> {
    let obj = expect_root_object(value)?;

    expect_string(obj, "id")?;
    expect_string(obj, "name")?;

    // Weapon metadata tolerates explicit null where character metadata
    // does not; source files use null to mean "not yet scraped".
    if present_non_null(obj, "rarity") {
        expect_number(obj.get("rarity"), "rarity")?;
    }
    if present_non_null(obj, "type") {
        expect_string(obj, "type")?;
    }
    if present_non_null(obj, "secondaryStatType") {
        expect_string(obj, "secondaryStatType")?;
    }

    validate_stats_by_level(obj.get("statsByLevel"), EntityKind::Weapon)?;
    validate_images(obj.get("images"), &WEAPON_IMAGE_KEYS)?;

    if present_non_null(obj, "passive") {
        let passive = expect_object(obj.get("passive"), "passive")?;
        expect_string_at(passive.get("name"), "passive.name")?;
        if !passive
            .get("descriptionMdByRank")
            .is_some_and(Value::is_object)
        {
            return Err(ValidationError::new(
                "passive.descriptionMdByRank",
                "expected object",
            ));
        }
    }

    Ok(())
}

fn validate_stats_by_level(value: Option<&Value>, kind: EntityKind) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };
    let obj = expect_object(Some(value), "statsByLevel")?;
    for level in STAT_LEVEL_TAGS {
        let path = format!("statsByLevel.{level}");
        let entry = match obj.get(level) {
            Some(Value::Object(entry)) => entry,
            _ => return Err(ValidationError::new(path, "missing or invalid level entry")),
        };
        match kind {
            EntityKind::Character => {
                for field in ["hp", "atk", "def"] {
                    expect_number(entry.get(field), &format!("{path}.{field}"))?;
                }
            }
            EntityKind::Weapon => {
                expect_number(entry.get("atk"), &format!("{path}.atk"))?;
            }
        }
    }
    Ok(())
}

fn validate_images(value: Option<&Value>, required_keys: &[&str]) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };
    let obj = expect_object(Some(value), "images")?;
    for key in required_keys {
        let path = format!("images.{key}");
        let ok = obj
            .get(*key)
            .and_then(Value::as_str)
            .is_some_and(|url| url.starts_with(IMAGE_URL_PREFIX));
        if !ok {
            return Err(ValidationError::new(
                path,
                format!("expected a {IMAGE_URL_PREFIX}... URL string"),
            ));
        }
    }
    Ok(())
}

fn validate_skills(value: Option<&Value>) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };
    let skills = value
        .as_array()
        .ok_or_else(|| ValidationError::new("skills", "expected array"))?;
    for (idx, skill) in skills.iter().enumerate() {
        let path = format!("skills[{idx}]");
        let skill = expect_object(Some(skill), &path)?;
        expect_string_at(skill.get("id"), &format!("{path}.id"))?;
        expect_string_at(skill.get("name"), &format!("{path}.name"))?;
        if skill.contains_key("descriptionMd") {
            expect_string_at(skill.get("descriptionMd"), &format!("{path}.descriptionMd"))?;
        }
        if let Some(scaling) = skill.get("scalingMdByRank") {
            let scaling_path = format!("{path}.scalingMdByRank");
            let scaling = expect_object(Some(scaling), &scaling_path)?;
            for rank in SKILL_SCALING_RANKS {
                if !scaling.get(rank).is_some_and(Value::is_string) {
                    return Err(ValidationError::new(
                        format!("{scaling_path}.{rank}"),
                        "expected string",
                    ));
                }
            }
        }
    }
    Ok(())
}

fn expect_root_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new("$", "expected root object"))
}

fn expect_object<'a>(
    value: Option<&'a Value>,
    path: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .and_then(Value::as_object)
        .ok_or_else(|| ValidationError::new(path, "expected object"))
}

fn expect_string(obj: &Map<String, Value>, field: &str) -> Result<(), ValidationError> {
    expect_string_at(obj.get(field), field)
}

fn expect_string_at(value: Option<&Value>, path: &str) -> Result<(), ValidationError> {
    let ok = value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(path, "expected non-empty string"))
    }
}

fn expect_number(value: Option<&Value>, path: &str) -> Result<(), ValidationError> {
    let ok = value
        .and_then(Value::as_f64)
        .is_some_and(f64::is_finite);
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(path, "expected finite number"))
    }
}

fn present_non_null(obj: &Map<String, Value>, field: &str) -> bool {
    obj.get(field).is_some_and(|v| !v.is_null())
}
