// SPDX-License-Identifier: Apache-2.0

use crate::filter::{CharacterFilter, WeaponFilter};
use crate::params::PageParams;
use armory_model::{Character, Weapon};
use serde::Serialize;

/// Bounded page over a filtered sequence. `total` is the post-filter
/// count before slicing; an offset past the end yields empty `items`,
/// never an error.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub items: Vec<T>,
}

#[must_use]
pub fn query_characters(
    all: &[Character],
    filter: &CharacterFilter,
    page: PageParams,
) -> Page<Character> {
    run(all, |c| filter.matches(c), page)
}

#[must_use]
pub fn query_weapons(all: &[Weapon], filter: &WeaponFilter, page: PageParams) -> Page<Weapon> {
    run(all, |w| filter.matches(w), page)
}

// O(n) over the full in-memory set; no secondary indexes. The dataset
// is small and static, so a scan per request is the simplest correct
// shape.
fn run<T: Clone>(all: &[T], pred: impl Fn(&T) -> bool, page: PageParams) -> Page<T> {
    let filtered: Vec<&T> = all.iter().filter(|item| pred(item)).collect();
    let total = filtered.len();
    let items = filtered
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .cloned()
        .collect();
    Page {
        total,
        limit: page.limit,
        offset: page.offset,
        items,
    }
}
