// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// The entity category, mapped onto the per-kind directory roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Character,
    Weapon,
}

impl EntityKind {
    /// Directory name under the data root holding this kind.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Weapon => "weapons",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Weapon => "weapon",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive field that source files carry as either a single string
/// or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TextOrList {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResonanceNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_md: Option<String>,
}

/// Character base stats at one level tag. Values are rounded to whole
/// numbers after load; whole values serialize as JSON integers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CharacterBaseStats {
    #[serde(with = "crate::serde_helpers::whole_number")]
    pub hp: f64,
    #[serde(with = "crate::serde_helpers::whole_number")]
    pub atk: f64,
    #[serde(with = "crate::serde_helpers::whole_number")]
    pub def: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_md_by_rank: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combat_roles: Option<TextOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_introduction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_titles: Option<TextOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliations: Option<TextOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resonance_chain: Option<Vec<ResonanceNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_by_level: Option<BTreeMap<String, CharacterBaseStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Weapon base stats at one level tag. `atk` is mandatory; source files
/// carry further stat keys with mixed number/string values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeaponBaseStats {
    #[serde(with = "crate::serde_helpers::whole_number")]
    pub atk: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeaponPassive {
    pub name: String,
    pub description_md_by_rank: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_stat_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_by_level: Option<BTreeMap<String, WeaponBaseStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive: Option<WeaponPassive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}
