use std::collections::{BTreeMap, BTreeSet};

use crate::{dataset::points::PointAttributeSet, foundation::core::PartKey};

/// Group id to ascending, duplicate-free part ids.
///
/// Serializes as a JSON object keyed by group id, e.g. `{"0":[0,1],"1":[0]}`.
/// Deserialized maps are normalized (parts sorted and deduplicated, empty
/// groups dropped) so lookups can rely on the ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "BTreeMap<i32, Vec<i32>>", into = "BTreeMap<i32, Vec<i32>>")]
pub struct Hierarchy {
    groups: BTreeMap<i32, Vec<i32>>,
}

impl From<BTreeMap<i32, Vec<i32>>> for Hierarchy {
    fn from(raw: BTreeMap<i32, Vec<i32>>) -> Self {
        let groups = raw
            .into_iter()
            .filter(|(_, parts)| !parts.is_empty())
            .map(|(g, mut parts)| {
                parts.sort_unstable();
                parts.dedup();
                (g, parts)
            })
            .collect();
        Self { groups }
    }
}

impl From<Hierarchy> for BTreeMap<i32, Vec<i32>> {
    fn from(h: Hierarchy) -> Self {
        h.groups
    }
}

impl Hierarchy {
    /// True when no points were indexed.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct (group, part) pairs.
    pub fn pair_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Group ids in ascending order.
    pub fn groups(&self) -> impl Iterator<Item = i32> + '_ {
        self.groups.keys().copied()
    }

    /// Ascending part ids of `group`, `None` if the group is absent.
    pub fn parts(&self, group: i32) -> Option<&[i32]> {
        self.groups.get(&group).map(Vec::as_slice)
    }

    /// True if some point carries `(group, part)`.
    pub fn contains(&self, group: i32, part: i32) -> bool {
        self.parts(group)
            .is_some_and(|parts| parts.binary_search(&part).is_ok())
    }

    /// All pairs, ordered by group then part.
    pub fn pairs(&self) -> impl Iterator<Item = PartKey> + '_ {
        self.groups
            .iter()
            .flat_map(|(&g, parts)| parts.iter().map(move |&p| PartKey::new(g, p)))
    }

    /// Smallest group paired with its smallest part.
    pub fn first_selection(&self) -> Option<PartKey> {
        self.pairs().next()
    }

    /// The underlying read-only map.
    pub fn as_map(&self) -> &BTreeMap<i32, Vec<i32>> {
        &self.groups
    }
}

/// Index the (group, part) tags of `points`.
///
/// Parts are collected into ordered per-group sets and flattened once at the
/// end, so the result does not depend on point order.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn build_hierarchy(points: &PointAttributeSet) -> Hierarchy {
    let mut sets: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
    for (&g, &p) in points.group_ids().iter().zip(points.part_ids()) {
        sets.entry(g).or_default().insert(p);
    }

    let groups = sets
        .into_iter()
        .map(|(g, parts)| (g, parts.into_iter().collect()))
        .collect();

    let out = Hierarchy { groups };
    tracing::debug!(
        groups = out.len(),
        pairs = out.pair_count(),
        "indexed hierarchy"
    );
    out
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/hierarchy.rs"]
mod tests;
