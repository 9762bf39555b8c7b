use super::*;
use crate::construction::heuristics::{solve, solve_with_environment};
use crate::construction::routes::{RawRoute, TwRoute};
use crate::helpers::models::*;
use crate::models::common::TimeWindow;
use crate::models::problem::Skills;
use crate::utils::Environment;
use std::sync::{Arc, Mutex};

fn three_pickups_input(capacity: Vec<i64>) -> Input {
    test_input(
        vec![
            test_job_with_amounts(1, 1, vec![1], vec![0]),
            test_job_with_amounts(2, 2, vec![1], vec![0]),
            test_job_with_amounts(3, 3, vec![1], vec![0]),
        ],
        vec![test_vehicle(1, capacity)],
        4,
    )
}

fn total_cost(input: &Input, routes: &[RawRoute]) -> i64 {
    routes.iter().map(|route| route.cost(input)).sum()
}

#[test]
fn can_build_single_vehicle_route_with_nearest_seed() {
    let input = three_pickups_input(vec![10]);

    let routes: Vec<RawRoute> = basic(&input, Init::Nearest, 0.);

    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].job_ranks(), &[2, 1, 0]);
    assert_eq!(total_cost(&input, &routes), 6);
}

#[test]
fn can_build_single_vehicle_route_with_furthest_seed() {
    let input = three_pickups_input(vec![10]);

    let routes: Vec<RawRoute> = basic(&input, Init::Furthest, 0.);

    // the furthest job seeds the route, the rest fills in before it
    assert_eq!(routes[0].job_ranks(), &[0, 1, 2]);
    assert_eq!(total_cost(&input, &routes), 6);
}

#[test]
fn can_leave_oversized_job_unassigned() {
    let input = test_input(
        vec![
            test_job_with_amounts(1, 1, vec![1], vec![0]),
            test_job_with_amounts(2, 2, vec![3], vec![0]),
            test_job_with_amounts(3, 3, vec![1], vec![0]),
        ],
        vec![test_vehicle(1, vec![2])],
        4,
    );

    let routes: Vec<RawRoute> = basic(&input, Init::None, 0.);

    let mut assigned = routes[0].job_ranks().to_vec();
    assigned.sort_unstable();
    assert_eq!(assigned, vec![0, 2]);
}

#[test]
fn can_fill_route_up_to_capacity() {
    let input = three_pickups_input(vec![3]);

    let routes: Vec<RawRoute> = basic(&input, Init::None, 0.);

    assert_eq!(routes[0].job_ranks().len(), 3);
    assert!(routes[0]
        .current_loads()
        .iter()
        .all(|load| input.vehicles[0].capacity.can_fit(load)));
}

#[test]
fn can_leave_unreachable_job_unassigned() {
    let input = test_input(
        vec![test_job_with_tws(1, 5, 0, vec![TimeWindow::new(0, 3)])],
        vec![test_vehicle_with_depots(1, Some(0), None, vec![10])],
        6,
    );

    let routes: Vec<TwRoute> = solve(&input, Strategy::Basic, Init::None, 0.);

    assert!(routes[0].job_ranks().is_empty());
}

#[test]
fn can_return_empty_routes_without_jobs() {
    let input = test_input(vec![], vec![test_vehicle(1, vec![1]), test_vehicle(2, vec![1])], 2);

    let routes: Vec<RawRoute> = solve(&input, Strategy::DynamicVehicleChoice, Init::None, 0.);

    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|route| route.is_empty()));
}

#[test]
fn can_respect_skill_requirements() {
    let mut demanding = test_job(1, 1);
    demanding.skills = Skills::from_iter([7]);
    let mut skilled = test_vehicle(2, vec![10]);
    skilled.skills = Skills::from_iter([7]);

    let input =
        test_input(vec![demanding, test_job(2, 2)], vec![test_vehicle(1, vec![10]), skilled], 3);

    let routes: Vec<RawRoute> = basic(&input, Init::None, 0.);

    assert!(!routes[0].job_ranks().contains(&0));
    assert!(routes[1].job_ranks().contains(&0));
}

#[test]
fn can_prioritize_expensive_jobs_with_lambda() {
    let input = three_pickups_input(vec![10]);

    let greedy: Vec<RawRoute> = basic(&input, Init::None, 0.);
    let tilted: Vec<RawRoute> = basic(&input, Init::None, 2.);

    // with the regret weight the furthest job is fetched first, which flips
    // the construction order
    assert_eq!(greedy[0].job_ranks(), &[2, 1, 0]);
    assert_eq!(tilted[0].job_ranks(), &[0, 1, 2]);
    assert_eq!(total_cost(&input, &greedy), total_cost(&input, &tilted));
}

#[test]
fn can_choose_lower_index_vehicle_on_full_tie() {
    let input = test_input(
        vec![test_job(1, 1), test_job(2, 2)],
        vec![test_vehicle(1, vec![10]), test_vehicle(2, vec![10])],
        3,
    );

    let routes: Vec<RawRoute> = dynamic_vehicle_choice(&input, Init::None, 0.);

    assert_eq!(routes[0].job_ranks().len(), 2);
    assert!(routes[1].is_empty());
}

#[test]
fn can_use_regret_against_remaining_vehicles() {
    let input = test_input(
        vec![test_job(1, 1), test_job(2, 8)],
        vec![test_vehicle(1, vec![10]), test_vehicle_with_depots(2, Some(9), Some(9), vec![10])],
        10,
    );

    let routes: Vec<RawRoute> = dynamic_vehicle_choice(&input, Init::None, 1.);

    // the first vehicle is elected on the tie; regret makes it take the job
    // which would be expensive for the remaining vehicle before the other one
    assert_eq!(routes[0].job_ranks(), &[1, 0]);
    assert!(routes[1].is_empty());
}

#[test]
fn can_report_construction_through_logger() {
    let input = three_pickups_input(vec![10]);
    let messages: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = messages.clone();
    let environment =
        Environment::new(Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string())));

    let _: Vec<RawRoute> =
        solve_with_environment(&input, &environment, Strategy::Basic, Init::Nearest, 0.);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("3 of 3 jobs"));
}
