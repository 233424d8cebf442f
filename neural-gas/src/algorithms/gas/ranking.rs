#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gas/ranking_test.rs"]
mod ranking_test;

use super::*;
use crate::utils::compare_floats;

/// Keeps a distance from a prototype to the current sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankEntry {
    /// Squared euclidean distance to the sample.
    pub distance: Float,
    /// Index of the prototype within the store.
    pub index: usize,
}

/// Ranks all prototypes by their distance to the sample. The entry at position `k` has rank `k`,
/// rank zero is the nearest prototype. Order of prototypes with equal distances is not specified.
pub fn rank_prototypes(sample: &[Float], store: &PrototypeStore) -> TrainingResult<Vec<RankEntry>> {
    let mut ranking = Vec::with_capacity(store.size());
    rank_prototypes_into(sample, store, &mut ranking)?;

    Ok(ranking)
}

/// Ranks all prototypes as `rank_prototypes` does, but reuses the given buffer.
pub fn rank_prototypes_into(
    sample: &[Float],
    store: &PrototypeStore,
    ranking: &mut Vec<RankEntry>,
) -> TrainingResult<()> {
    ensure_dimension(0, store.dimension(), sample.len())?;

    ranking.clear();
    ranking.extend(
        store.iter().enumerate().map(|(index, prototype)| RankEntry { distance: prototype.distance(sample), index }),
    );
    ranking.sort_unstable_by(|a, b| compare_floats(a.distance, b.distance));

    Ok(())
}
