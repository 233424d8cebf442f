#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gas/adaptation_test.rs"]
mod adaptation_test;

use super::*;

/// Returns influence of the sample on a prototype with the given rank: `exp(-rank / width)`.
/// The nearest prototype (rank zero) always gets full influence.
pub fn neighborhood_influence(rank: usize, neighborhood_width: Float) -> Float {
    (-(rank as Float) / neighborhood_width).exp()
}

/// Moves every prototype toward the sample: `w += alpha * h(rank, lambda) * (x - w)`.
pub fn adapt(
    store: &mut PrototypeStore,
    ranking: &[RankEntry],
    sample: &[Float],
    params: ScheduleParams,
) -> TrainingResult<()> {
    ensure_dimension(0, store.dimension(), sample.len())?;

    if ranking.len() != store.size() {
        return Err(TrainingError::invalid_configuration(format!(
            "ranking has {} entries, but store has {} prototypes",
            ranking.len(),
            store.size()
        )));
    }

    if let Some(entry) = ranking.iter().find(|entry| entry.index >= store.size()) {
        let message = format!("ranking refers to unknown prototype {}", entry.index);
        return Err(TrainingError::invalid_configuration(message));
    }

    ranking.iter().enumerate().for_each(|(rank, entry)| {
        let influence = neighborhood_influence(rank, params.neighborhood_width);
        if let Some(prototype) = store.get_mut(entry.index) {
            prototype.adjust(sample, params.learning_rate * influence);
        }
    });

    Ok(())
}
