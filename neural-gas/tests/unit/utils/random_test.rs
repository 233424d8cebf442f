use super::*;

#[test]
fn can_produce_same_sequence_for_same_seed() {
    let first = DefaultRandom::new_repeatable(7);
    let second = DefaultRandom::new_repeatable(7);

    let first = (0..100).map(|_| first.uniform_real(0., 1.)).collect::<Vec<_>>();
    let second = (0..100).map(|_| second.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn can_keep_values_within_bounds() {
    let random = DefaultRandom::new_repeatable(0);

    (0..10000).for_each(|_| {
        let int = random.uniform_int(0, 9);
        let real = random.uniform_real(0., 1.);

        assert!((0..=9).contains(&int));
        assert!((0. ..1.).contains(&real));
    });
}

#[test]
fn can_sample_all_ints_of_closed_interval() {
    let random = DefaultRandom::new_repeatable(1);
    let mut counter = [0_usize; 4];

    (0..4000).for_each(|_| counter[random.uniform_int(0, 3) as usize] += 1);

    counter.iter().for_each(|&count| {
        let ratio = count as Float / 4000.;
        assert!((ratio - 0.25).abs() < 0.05, "unexpected ratio: {ratio}");
    });
}

#[test]
fn can_return_bound_for_degenerated_interval() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}
