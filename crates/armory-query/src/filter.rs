// SPDX-License-Identifier: Apache-2.0

use crate::params::{eq_ci_or_empty, includes_ci, parse_rarity, text_filter};
use armory_model::{Character, Weapon};
use std::collections::HashMap;

/// Character list filters. All predicates AND together; an absent
/// predicate matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterFilter {
    pub search: Option<String>,
    pub element: Option<String>,
    pub weapon_type: Option<String>,
    pub rarity: Option<f64>,
}

impl CharacterFilter {
    #[must_use]
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        Self {
            search: text_filter(query, "search"),
            element: text_filter(query, "element"),
            weapon_type: text_filter(query, "weaponType"),
            rarity: parse_rarity(query),
        }
    }

    #[must_use]
    pub fn matches(&self, character: &Character) -> bool {
        if let Some(search) = &self.search {
            if !includes_ci(&character.name, search) {
                return false;
            }
        }
        if let Some(element) = &self.element {
            if !eq_ci_or_empty(character.element.as_deref(), element) {
                return false;
            }
        }
        if let Some(weapon_type) = &self.weapon_type {
            if !eq_ci_or_empty(character.weapon_type.as_deref(), weapon_type) {
                return false;
            }
        }
        if let Some(rarity) = self.rarity {
            if character.rarity.map(|r| r as f64) != Some(rarity) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeaponFilter {
    pub search: Option<String>,
    pub weapon_type: Option<String>,
    pub rarity: Option<f64>,
}

impl WeaponFilter {
    #[must_use]
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        Self {
            search: text_filter(query, "search"),
            weapon_type: text_filter(query, "type"),
            rarity: parse_rarity(query),
        }
    }

    #[must_use]
    pub fn matches(&self, weapon: &Weapon) -> bool {
        if let Some(search) = &self.search {
            if !includes_ci(&weapon.name, search) {
                return false;
            }
        }
        if let Some(weapon_type) = &self.weapon_type {
            if !eq_ci_or_empty(weapon.weapon_type.as_deref(), weapon_type) {
                return false;
            }
        }
        if let Some(rarity) = self.rarity {
            if weapon.rarity.map(|r| r as f64) != Some(rarity) {
                return false;
            }
        }
        true
    }
}
