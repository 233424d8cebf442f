use super::*;
use crate::helpers::algorithms::gas::create_test_store;
use proptest::prelude::*;

#[test]
fn can_give_full_influence_to_nearest_prototype() {
    [0.01, 0.5, 1., 2., 100.].iter().for_each(|&width| {
        assert_eq!(neighborhood_influence(0, width), 1.);
    });
}

#[test]
fn can_calculate_neighborhood_influence() {
    assert!((neighborhood_influence(1, 1.) - (-1_f64).exp()).abs() < 1E-12);
    assert!((neighborhood_influence(2, 0.5) - (-4_f64).exp()).abs() < 1E-12);
    assert!(neighborhood_influence(3, 0.01) < 1E-100);
}

proptest! {
    #[test]
    fn can_decrease_influence_with_rank(rank in 0_usize..50, width in 0.5..50.) {
        prop_assert!(neighborhood_influence(rank, width) > neighborhood_influence(rank + 1, width));
    }
}

#[test]
fn can_adapt_all_prototypes_by_rank() {
    let mut store = create_test_store(&[&[0., 0.], &[1., 1.], &[4., 4.]]);
    let sample = [1., 1.];
    let ranking = rank_prototypes(&sample, &store).unwrap();
    let params = ScheduleParams { learning_rate: 0.5, neighborhood_width: 1. };

    adapt(&mut store, ranking.as_slice(), &sample, params).unwrap();

    // rank 0: prototype 1 already in sample, rank 1: prototype 0, rank 2: prototype 2
    let rate_rank1 = 0.5 * (-1_f64).exp();
    let rate_rank2 = 0.5 * (-2_f64).exp();
    assert_close!(store.get(1).unwrap().weights, [1., 1.], 1E-12);
    assert_close!(store.get(0).unwrap().weights, [rate_rank1, rate_rank1], 1E-12);
    assert_close!(store.get(2).unwrap().weights, [4. - 3. * rate_rank2, 4. - 3. * rate_rank2], 1E-12);
}

#[test]
fn can_move_nearest_prototype_by_learning_rate() {
    let mut store = create_test_store(&[&[0., 0.]]);
    let ranking = rank_prototypes(&[1., 2.], &store).unwrap();

    adapt(&mut store, ranking.as_slice(), &[1., 2.], ScheduleParams { learning_rate: 0.25, neighborhood_width: 0.5 })
        .unwrap();

    assert_eq!(store.get(0).unwrap().weights, vec![0.25, 0.5]);
}

#[test]
fn can_keep_prototypes_for_zero_learning_rate() {
    let mut store = create_test_store(&[&[0., 0.], &[1., 1.]]);
    let original = store.clone();
    let ranking = rank_prototypes(&[0.5, 0.2], &store).unwrap();

    adapt(&mut store, ranking.as_slice(), &[0.5, 0.2], ScheduleParams { learning_rate: 0., neighborhood_width: 1. })
        .unwrap();

    assert_eq!(store, original);
}

#[test]
fn can_reject_invalid_adaptation_input() {
    let mut store = create_test_store(&[&[0., 0.], &[1., 1.]]);
    let params = ScheduleParams { learning_rate: 0.5, neighborhood_width: 1. };
    let ranking = rank_prototypes(&[0., 0.], &store).unwrap();

    assert_eq!(
        adapt(&mut store, ranking.as_slice(), &[0.], params),
        Err(TrainingError::DimensionMismatch { index: 0, expected: 2, actual: 1 })
    );
    assert!(matches!(
        adapt(&mut store, &ranking[..1], &[0., 0.], params),
        Err(TrainingError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        adapt(
            &mut store,
            &[RankEntry { distance: 0., index: 0 }, RankEntry { distance: 0., index: 7 }],
            &[0., 0.],
            params
        ),
        Err(TrainingError::InvalidConfiguration(_))
    ));
}
