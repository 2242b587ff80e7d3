use game::timing::Timer;

#[test]
fn test_progress_is_monotonic_and_completes_exactly_at_duration() {
    let mut timer = Timer::new(0.0, 10.0);
    let early = timer.advance(3.0).unwrap();
    let later = timer.advance(7.0).unwrap();
    assert!(early <= later);
    assert!(!timer.is_completed());

    assert_eq!(timer.advance(10.0), Some(1.0));
    assert!(timer.is_completed());

    // completion is permanent
    assert_eq!(timer.advance(25.0), Some(1.0));
    assert!(timer.is_completed());
}

#[test]
fn test_pause_preserves_progress_across_any_real_delay() {
    let mut timer = Timer::new(0.0, 10.0);
    let before = timer.advance(4.0).unwrap();
    timer.pause(4.0);
    assert_eq!(timer.advance(8.0), None);

    timer.resume(9.0);
    let after = timer.advance(9.0).unwrap();
    assert!((after - before).abs() < 1e-4);
}

#[test]
fn test_looping_timer_wraps_without_completing() {
    let mut timer = Timer::looping(0.0, 2.0);
    assert_eq!(timer.advance(1.0), Some(0.5));
    assert_eq!(timer.advance(2.5), Some(0.0));
    assert!(!timer.is_completed());
    let progress = timer.advance(3.0).unwrap();
    assert!((progress - 0.25).abs() < 1e-4);
}

#[test]
fn test_shift_moves_the_anchor_forward() {
    let mut timer = Timer::new(0.0, 10.0);
    timer.shift(5.0);
    let progress = timer.advance(10.0).unwrap();
    assert!((progress - 0.5).abs() < 1e-4);
}

#[test]
fn test_reset_restarts_a_completed_timer() {
    let mut timer = Timer::new(0.0, 1.0);
    timer.advance(2.0);
    assert!(timer.is_completed());
    timer.reset(2.0);
    assert!(!timer.is_completed());
    assert_eq!(timer.advance(2.5), Some(0.5));
}
