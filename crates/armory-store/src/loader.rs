// SPDX-License-Identifier: Apache-2.0

use crate::index::{DatasetIndex, EntitySet};
use armory_model::{Character, EntityKind, Weapon, LOCALE_FILE};
use serde::de::DeserializeOwned;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use tracing::warn;

/// Per-kind load observability counters.
///
/// `discovered` counts directory entries under the kind root;
/// `loaded` counts entries that made it into the index; `bad` counts
/// unreadable, undecodable, or id-less files; `collisions` counts
/// decoded ids already claimed by an earlier directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub discovered: usize,
    pub loaded: usize,
    pub bad: usize,
    pub collisions: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub characters: LoadStats,
    pub weapons: LoadStats,
}

/// Failure to enumerate a kind root for any reason other than the root
/// not existing. Per-entity problems never surface here; they are
/// absorbed into [`LoadStats`].
#[derive(Debug)]
pub enum LoadError {
    RootUnreadable { path: PathBuf, source: io::Error },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootUnreadable { path, source } => {
                write!(f, "cannot enumerate {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RootUnreadable { source, .. } => Some(source),
        }
    }
}

trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Character {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Weapon {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Builds the dataset index from `{data_root}/{characters|weapons}/{id}/en.json`.
///
/// Both kinds load concurrently, and every per-entity read within a
/// kind runs as its own task; the only synchronization point is the
/// final join that assembles each map.
pub async fn load_dataset(data_root: &Path) -> Result<(DatasetIndex, LoadReport), LoadError> {
    let (characters, weapons) = tokio::join!(
        load_kind::<Character>(data_root, EntityKind::Character),
        load_kind::<Weapon>(data_root, EntityKind::Weapon),
    );
    let (mut characters, character_stats) = characters?;
    let (weapons, weapon_stats) = weapons?;

    // Source data carries floating-point artifacts; displayed base
    // stats are whole numbers in the domain. This is the one mutation
    // performed after insertion, and rounding is idempotent.
    for character in characters.iter_mut() {
        if let Some(stats) = character.stats_by_level.as_mut() {
            for entry in stats.values_mut() {
                entry.hp = entry.hp.round();
                entry.atk = entry.atk.round();
                entry.def = entry.def.round();
            }
        }
    }

    Ok((
        DatasetIndex {
            characters,
            weapons,
        },
        LoadReport {
            characters: character_stats,
            weapons: weapon_stats,
        },
    ))
}

async fn load_kind<T>(data_root: &Path, kind: EntityKind) -> Result<(EntitySet<T>, LoadStats), LoadError>
where
    T: DeserializeOwned + Keyed + Send + 'static,
{
    let root = data_root.join(kind.dir_name());
    let names = match enumerate_entry_names(&root).await {
        Ok(Some(names)) => names,
        Ok(None) => return Ok((EntitySet::default(), LoadStats::default())),
        Err(source) => return Err(LoadError::RootUnreadable { path: root, source }),
    };

    let mut stats = LoadStats {
        discovered: names.len(),
        ..LoadStats::default()
    };

    let mut tasks = JoinSet::new();
    for (slot, name) in names.iter().enumerate() {
        let file = root.join(name).join(LOCALE_FILE);
        tasks.spawn(async move { (slot, read_entity::<T>(&file).await) });
    }
    let mut decoded: Vec<Option<T>> = names.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        if let Ok((slot, entity)) = joined {
            decoded[slot] = entity;
        }
    }

    // Assembly runs in ascending directory-name order so that an id
    // collision always resolves the same way: the entry from the
    // lexicographically smallest directory wins.
    let mut set = EntitySet::default();
    for (entity, dir_name) in decoded.into_iter().zip(names.iter()) {
        let Some(entity) = entity else {
            stats.bad += 1;
            continue;
        };
        let id = entity.key().to_string();
        if set.insert(id.clone(), entity) {
            stats.loaded += 1;
        } else {
            stats.collisions += 1;
            warn!(kind = %kind, dir = %dir_name, id = %id, "duplicate entity id, keeping the earlier entry");
        }
    }
    Ok((set, stats))
}

/// Sorted entry names under `root`; `None` when the root does not exist.
async fn enumerate_entry_names(root: &Path) -> io::Result<Option<Vec<String>>> {
    let mut entries = match tokio::fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(Some(names))
}

/// One entity file: read, decode, and require a non-empty decoded id.
/// Any failure drops the entity from this load.
async fn read_entity<T>(file: &Path) -> Option<T>
where
    T: DeserializeOwned + Keyed,
{
    let bytes = tokio::fs::read(file).await.ok()?;
    let entity: T = serde_json::from_slice(&bytes).ok()?;
    if entity.key().trim().is_empty() {
        return None;
    }
    Some(entity)
}
