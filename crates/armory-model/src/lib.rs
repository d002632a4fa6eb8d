#![forbid(unsafe_code)]
//! Armory model SSOT.
//!
//! Typed records for the two catalog entity kinds plus the raw-JSON
//! validation rules that define what a well-formed entity file is.

mod entity;
pub mod serde_helpers;
mod validate;

pub use entity::{
    Character, CharacterBaseStats, EntityKind, ResonanceNode, Skill, TextOrList, Weapon,
    WeaponBaseStats, WeaponPassive,
};
pub use validate::{validate_character, validate_entity, validate_weapon, ValidationError};

pub const CRATE_NAME: &str = "armory-model";

/// Fixed-locale data file representing one entity.
pub const LOCALE_FILE: &str = "en.json";

/// URL prefix reserved for served image assets.
pub const IMAGE_URL_PREFIX: &str = "/v1/images/";

/// Level tags that must all be present when `statsByLevel` is declared.
pub const STAT_LEVEL_TAGS: [&str; 3] = ["20", "50", "90"];

/// Ranks that must all be present when a skill declares `scalingMdByRank`.
pub const SKILL_SCALING_RANKS: [&str; 3] = ["1", "5", "10"];

pub const CHARACTER_IMAGE_KEYS: [&str; 4] = ["icon", "card", "splash", "attribute"];
pub const WEAPON_IMAGE_KEYS: [&str; 1] = ["icon"];
