// SPDX-License-Identifier: Apache-2.0

use armory_model::{Character, Weapon};
use std::collections::HashMap;

/// In-memory keyed collection of one entity kind.
///
/// `ordered` preserves insertion order (ascending directory name);
/// `by_id` maps decoded ids to positions in `ordered`.
#[derive(Debug)]
pub(crate) struct EntitySet<T> {
    ordered: Vec<T>,
    by_id: HashMap<String, usize>,
}

impl<T> Default for EntitySet<T> {
    fn default() -> Self {
        Self {
            ordered: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T> EntitySet<T> {
    /// Inserts unless the id is already present. Returns false on a
    /// collision, leaving the earlier entry in place.
    pub(crate) fn insert(&mut self, id: String, entity: T) -> bool {
        if self.by_id.contains_key(&id) {
            return false;
        }
        self.by_id.insert(id, self.ordered.len());
        self.ordered.push(entity);
        true
    }

    fn list(&self) -> &[T] {
        &self.ordered
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.by_id.get(id).map(|&idx| &self.ordered[idx])
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.ordered.iter_mut()
    }
}

/// The immutable-after-load dataset index. Entities are exclusively
/// owned here; queries borrow read access.
#[derive(Debug, Default)]
pub struct DatasetIndex {
    pub(crate) characters: EntitySet<Character>,
    pub(crate) weapons: EntitySet<Weapon>,
}

impl DatasetIndex {
    #[must_use]
    pub fn list_characters(&self) -> &[Character] {
        self.characters.list()
    }

    #[must_use]
    pub fn get_character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    #[must_use]
    pub fn list_weapons(&self) -> &[Weapon] {
        self.weapons.list()
    }

    #[must_use]
    pub fn get_weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }
}
