// SPDX-License-Identifier: Apache-2.0

use crate::{DatasetIndex, LoadReport};
use armory_model::{EntityKind, LOCALE_FILE};
use serde::Serialize;
use std::path::Path;
use std::time::UNIX_EPOCH;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DatasetCounts {
    pub characters: usize,
    pub weapons: usize,
}

/// Snapshot of dataset provenance served by `/v1/meta`. Computed once
/// at startup alongside the load.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    pub data_root: String,
    pub languages: Vec<String>,
    pub counts: DatasetCounts,
    pub last_updated_max: Option<String>,
    pub file_mtime_max_ms: Option<u64>,
}

pub async fn compute_dataset_info(
    data_root: &Path,
    index: &DatasetIndex,
    report: &LoadReport,
) -> DatasetInfo {
    let last_updated_max = index
        .list_characters()
        .iter()
        .filter_map(|c| c.last_updated.as_deref())
        .chain(
            index
                .list_weapons()
                .iter()
                .filter_map(|w| w.last_updated.as_deref()),
        )
        .max()
        .map(str::to_string);

    let mut file_mtime_max_ms = None;
    for kind in [EntityKind::Character, EntityKind::Weapon] {
        if let Some(max) = kind_mtime_max_ms(&data_root.join(kind.dir_name())).await {
            file_mtime_max_ms = Some(file_mtime_max_ms.map_or(max, |acc: u64| acc.max(max)));
        }
    }

    DatasetInfo {
        data_root: data_root.display().to_string(),
        languages: vec!["en".to_string()],
        counts: DatasetCounts {
            characters: report.characters.discovered,
            weapons: report.weapons.discovered,
        },
        last_updated_max,
        file_mtime_max_ms,
    }
}

async fn kind_mtime_max_ms(root: &Path) -> Option<u64> {
    let mut entries = tokio::fs::read_dir(root).await.ok()?;
    let mut max = None;
    while let Ok(Some(entry)) = entries.next_entry().await {
        let file = entry.path().join(LOCALE_FILE);
        let Ok(meta) = tokio::fs::metadata(&file).await else {
            continue;
        };
        let Some(ms) = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as u64)
        else {
            continue;
        };
        max = Some(max.map_or(ms, |acc: u64| acc.max(ms)));
    }
    max
}
