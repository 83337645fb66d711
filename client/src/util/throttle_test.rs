use super::*;

#[test]
fn first_tick_runs_immediately() {
    let mut throttle = Throttle::default();
    assert_eq!(throttle.admit(1000.0), ThrottleDecision::Run);
}

#[test]
fn tick_inside_window_defers_for_remaining_time() {
    let mut throttle = Throttle::new(16.0);
    assert_eq!(throttle.admit(1000.0), ThrottleDecision::Run);
    assert_eq!(throttle.admit(1004.0), ThrottleDecision::Defer(12.0));
}

#[test]
fn ticks_after_deferral_are_skipped_until_trailing_fires() {
    let mut throttle = Throttle::new(16.0);
    throttle.admit(0.0);
    throttle.admit(5.0);
    assert_eq!(throttle.admit(8.0), ThrottleDecision::Skip);
    assert_eq!(throttle.admit(40.0), ThrottleDecision::Skip);

    throttle.trailing_fired(16.0);
    assert_eq!(throttle.admit(20.0), ThrottleDecision::Defer(12.0));
}

#[test]
fn tick_after_window_runs_again() {
    let mut throttle = Throttle::new(16.0);
    throttle.admit(0.0);
    assert_eq!(throttle.admit(16.0), ThrottleDecision::Run);
    assert_eq!(throttle.admit(50.0), ThrottleDecision::Run);
}
