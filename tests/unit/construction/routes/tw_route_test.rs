use super::*;
use crate::helpers::models::*;
use crate::models::common::TimeWindow;
use crate::models::problem::Vehicle;

fn schedule_input() -> Input {
    let mut vehicle = test_vehicle(1, vec![10]);
    vehicle.tw = TimeWindow::new(0, 100);

    test_input(
        vec![
            test_job_with_tws(1, 2, 3, vec![TimeWindow::new(0, 100)]),
            test_job_with_tws(2, 5, 0, vec![TimeWindow::new(0, 100)]),
            test_job_with_tws(3, 1, 0, vec![TimeWindow::new(0, 100)]),
        ],
        vec![vehicle],
        6,
    )
}

#[test]
fn can_propagate_schedule_on_addition() {
    let input = schedule_input();
    let mut route = TwRoute::new(&input, 0);

    route.add(&input, 0, 0);
    assert_eq!(route.earliest(), &[2]);
    assert_eq!(route.latest(), &[95]);

    route.add(&input, 1, 1);
    assert_eq!(route.earliest(), &[2, 8]);
    assert_eq!(route.latest(), &[89, 95]);
    assert_eq!(route.tw_ranks(), &[0, 0]);
}

#[test]
fn can_reject_unreachable_window() {
    let input = test_input(
        vec![test_job_with_tws(1, 5, 0, vec![TimeWindow::new(0, 3)])],
        vec![test_vehicle(1, vec![10])],
        6,
    );
    let route = TwRoute::new(&input, 0);

    // travel time 5 exceeds the window end
    assert!(!route.is_valid_addition_for_tw(&input, 0, 0));
}

#[test]
fn can_accept_equality_cases() {
    let job = test_job_with_tws(1, 5, 0, vec![TimeWindow::new(0, 5)]);

    let reachable = test_input(
        vec![job.clone()],
        vec![Vehicle::new(1, Some(0), Some(0), Amount::new(vec![10]), TimeWindow::new(0, 10))],
        6,
    );
    assert!(TwRoute::new(&reachable, 0).is_valid_addition_for_tw(&reachable, 0, 0));

    // one unit short of returning to the end depot in time
    let unreachable = test_input(
        vec![job],
        vec![Vehicle::new(1, Some(0), Some(0), Amount::new(vec![10]), TimeWindow::new(0, 9))],
        6,
    );
    assert!(!TwRoute::new(&unreachable, 0).is_valid_addition_for_tw(&unreachable, 0, 0));
}

#[test]
fn can_choose_earliest_reachable_window() {
    let input = test_input(
        vec![test_job_with_tws(1, 5, 0, vec![TimeWindow::new(0, 2), TimeWindow::new(10, 12)])],
        vec![test_vehicle(1, vec![10])],
        6,
    );
    let mut route = TwRoute::new(&input, 0);

    assert!(route.is_valid_addition_for_tw(&input, 0, 0));
    route.add(&input, 0, 0);

    // arrival at 5 rules the first window out
    assert_eq!(route.tw_ranks(), &[1]);
    assert_eq!(route.earliest(), &[10]);
}

#[test]
fn later_window_is_used_only_when_needed() {
    // the second job is reachable in its first window directly, but only in
    // the second one behind a predecessor
    let input = test_input(
        vec![
            test_job_with_tws(1, 4, 0, vec![TimeWindow::new(0, 100)]),
            test_job_with_tws(2, 1, 0, vec![TimeWindow::new(0, 2), TimeWindow::new(6, 20)]),
        ],
        vec![test_vehicle(1, vec![10])],
        6,
    );

    let mut direct = TwRoute::new(&input, 0);
    direct.add(&input, 1, 0);
    assert_eq!(direct.tw_ranks(), &[0]);
    assert_eq!(direct.earliest(), &[1]);

    // inserting the predecessor before the committed first window fails
    assert!(!direct.is_valid_addition_for_tw(&input, 0, 0));

    let mut behind = TwRoute::new(&input, 0);
    behind.add(&input, 0, 0);
    assert!(behind.is_valid_addition_for_tw(&input, 1, 1));
    behind.add(&input, 1, 1);
    assert_eq!(behind.tw_ranks(), &[0, 1]);
    assert_eq!(behind.earliest(), &[4, 7]);
}

#[test]
fn addition_followed_by_removal_restores_schedule() {
    let input = schedule_input();
    let mut route = TwRoute::new(&input, 0);
    route.add(&input, 0, 0);
    route.add(&input, 1, 1);

    let earliest = route.earliest().to_vec();
    let latest = route.latest().to_vec();
    let loads = route.raw().current_loads().to_vec();

    route.add(&input, 2, 1);
    route.remove(&input, 1, 1);

    assert_eq!(route.job_ranks(), &[0, 1]);
    assert_eq!(route.earliest(), &earliest[..]);
    assert_eq!(route.latest(), &latest[..]);
    assert_eq!(route.raw().current_loads(), &loads[..]);
}

#[test]
fn can_rebuild_schedule_on_replace() {
    let input = schedule_input();
    let mut route = TwRoute::new(&input, 0);
    route.add(&input, 0, 0);
    route.add(&input, 1, 1);

    route.replace(&input, &[2, 1], 1, 2);

    let mut rebuilt = TwRoute::new(&input, 0);
    rebuilt.add(&input, 0, 0);
    rebuilt.add(&input, 2, 1);
    rebuilt.add(&input, 1, 2);

    assert_eq!(route.job_ranks(), rebuilt.job_ranks());
    assert_eq!(route.earliest(), rebuilt.earliest());
    assert_eq!(route.latest(), rebuilt.latest());
    assert_eq!(route.tw_ranks(), rebuilt.tw_ranks());
}
