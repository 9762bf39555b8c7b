use super::*;
use crate::helpers::models::*;
use proptest::prelude::*;

fn mixed_demand_input(capacity: Vec<i64>) -> Input {
    test_input(
        vec![
            test_job_with_amounts(1, 1, vec![1], vec![0]),
            test_job_with_amounts(2, 2, vec![0], vec![2]),
            test_job_with_amounts(3, 3, vec![2], vec![1]),
        ],
        vec![test_vehicle(1, capacity)],
        4,
    )
}

fn route_with(input: &Input, job_ranks: &[usize]) -> RawRoute {
    let mut route = RawRoute::new(input, 0);
    for (rank, &job_rank) in job_ranks.iter().enumerate() {
        route.add(input, job_rank, rank);
    }
    route
}

#[test]
fn can_track_loads_incrementally() {
    let input = mixed_demand_input(vec![10]);
    let route = route_with(&input, &[0, 1, 2]);

    // deliveries are on board from the start, pickups accumulate
    let loads: Vec<i64> = route.current_loads().iter().map(|load| load[0]).collect();
    assert_eq!(loads, vec![3, 4, 2, 3]);
}

#[test]
fn can_validate_single_addition() {
    let input = mixed_demand_input(vec![4]);
    let route = route_with(&input, &[0, 1, 2]);

    let pickup = Amount::new(vec![1]);
    let delivery = Amount::new(vec![1]);
    let zero = input.zero_amount();

    // an extra pickup at rank 1 raises the later peak of 4 above capacity
    assert!(!route.is_valid_addition_for_capacity(&input, &pickup, &zero, 1));
    // an extra delivery at rank 3 raises the earlier peak of 4 above capacity
    assert!(!route.is_valid_addition_for_capacity(&input, &zero, &delivery, 3));
    // a job without demand always fits
    assert!(route.is_valid_addition_for_capacity(&input, &zero, &zero, 1));
}

#[test]
fn can_validate_addition_into_empty_route() {
    let input = mixed_demand_input(vec![4]);
    let route = RawRoute::new(&input, 0);

    assert!(route.is_valid_addition_for_capacity(
        &input,
        &Amount::new(vec![4]),
        &input.zero_amount(),
        0
    ));
    assert!(!route.is_valid_addition_for_capacity(
        &input,
        &Amount::new(vec![5]),
        &input.zero_amount(),
        0
    ));
}

#[test]
fn margins_are_necessary_but_not_sufficient() {
    // one pickup job on board, capacity 2
    let input = test_input(
        vec![
            test_job_with_amounts(1, 1, vec![1], vec![0]),
            test_job_with_amounts(2, 2, vec![1], vec![0]),
            test_job_with_amounts(3, 3, vec![0], vec![1]),
        ],
        vec![test_vehicle(1, vec![2])],
        4,
    );
    let route = route_with(&input, &[0]);

    let pickup = Amount::new(vec![1]);
    let delivery = Amount::new(vec![1]);

    // the margin precheck accepts the totals
    assert!(route.is_valid_addition_for_capacity_margins(&input, &pickup, &delivery, 1, 1));

    // yet the exact walk rejects pickup-then-delivery and accepts the
    // reversed direction of the same sequence
    assert!(!route.is_valid_addition_for_capacity_inclusion(
        &input,
        &delivery,
        [1, 2].into_iter(),
        1,
        1
    ));
    assert!(route.is_valid_addition_for_capacity_inclusion(
        &input,
        &delivery,
        [2, 1].into_iter(),
        1,
        1
    ));
}

#[test]
fn can_replace_range() {
    let input = mixed_demand_input(vec![10]);
    let mut route = route_with(&input, &[0, 1]);

    route.replace(&input, &[2, 1], 1, 2);

    let rebuilt = route_with(&input, &[0, 2, 1]);
    assert_eq!(route.job_ranks(), rebuilt.job_ranks());
    assert_eq!(route.current_loads(), rebuilt.current_loads());
}

#[test]
fn update_amounts_is_noop_after_mutations() {
    let input = mixed_demand_input(vec![10]);
    let mut route = route_with(&input, &[2, 0]);
    route.remove(&input, 0, 1);

    let loads = route.current_loads().to_vec();
    route.update_amounts(&input);

    assert_eq!(route.current_loads(), &loads[..]);
}

#[test]
fn can_compute_cost() {
    let input = mixed_demand_input(vec![10]);

    assert_eq!(RawRoute::new(&input, 0).cost(&input), 0);
    assert_eq!(route_with(&input, &[0, 1, 2]).cost(&input), 6);

    let no_depots = test_input(
        vec![test_job(1, 1), test_job(2, 3)],
        vec![test_vehicle_with_depots(1, None, None, vec![10])],
        4,
    );
    assert_eq!(route_with(&no_depots, &[0, 1]).cost(&no_depots), 2);
}

proptest! {
    #[test]
    fn addition_followed_by_removal_restores_route(
        base in prop::sample::subsequence(vec![0usize, 1, 2], 0..=3),
        rank_seed in any::<prop::sample::Index>(),
    ) {
        let input = mixed_demand_input(vec![100]);
        let mut route = route_with(&input, &base);

        let job_ranks = route.job_ranks().to_vec();
        let loads = route.current_loads().to_vec();

        let rank = rank_seed.index(base.len() + 1);
        route.add(&input, 2, rank);
        route.remove(&input, rank, 1);

        prop_assert_eq!(route.job_ranks(), &job_ranks[..]);
        prop_assert_eq!(route.current_loads(), &loads[..]);
    }
}
