use hero_core::*;

#[test]
fn easing_is_clamped_exponential() {
    assert!((lenis_easing(0.0) - 0.001).abs() < 1e-12);
    assert!((lenis_easing(0.5) - (1.001 - 2f64.powi(-4))).abs() < 1e-12);
    assert!(lenis_easing(1.0) <= 1.0);
    assert_eq!(lenis_easing(10.0), 1.0);
}

#[test]
fn default_options() {
    let o = ScrollOptions::default();
    assert_eq!(o.duration, 2.0);
    assert_eq!((o.easing)(0.25), lenis_easing(0.25));
}

#[test]
fn wheel_eases_toward_target_and_snaps() {
    let mut s = SmoothScroll::new(ScrollOptions::default(), 0.0, 1000.0);
    s.on_wheel(100.0);
    assert!(s.is_animating());
    assert_eq!(s.target(), 100.0);

    let first = s.raf(0.0).unwrap();
    assert!((first - 0.1).abs() < 1e-9);

    let mid = s.raf(1000.0).unwrap();
    assert!((mid - 100.0 * lenis_easing(0.5)).abs() < 1e-9);

    let last = s.raf(2000.0).unwrap();
    assert_eq!(last, 100.0);
    assert!(!s.is_animating());
    assert_eq!(s.raf(2016.0), None);
}

#[test]
fn new_input_restarts_from_current_position() {
    let mut s = SmoothScroll::new(ScrollOptions::default(), 0.0, 1000.0);
    s.on_wheel(100.0);
    s.raf(0.0);
    s.raf(1000.0);
    let here = s.current();
    s.on_wheel(100.0);
    assert_eq!(s.target(), 200.0);
    let next = s.raf(1000.0).unwrap();
    assert!((next - (here + (200.0 - here) * lenis_easing(0.0))).abs() < 1e-9);
}

#[test]
fn target_is_clamped_to_scroll_range() {
    let mut s = SmoothScroll::new(ScrollOptions::default(), 0.0, 300.0);
    s.on_wheel(-50.0);
    assert_eq!(s.target(), 0.0);
    assert!(!s.is_animating());

    s.on_wheel(1000.0);
    assert_eq!(s.target(), 300.0);
}

#[test]
fn shrinking_the_limit_pulls_the_target_in() {
    let mut s = SmoothScroll::new(ScrollOptions::default(), 0.0, 1000.0);
    s.on_wheel(800.0);
    s.set_limit(400.0);
    assert_eq!(s.target(), 400.0);
    assert_eq!(s.limit(), 400.0);
}

#[test]
fn native_scroll_syncs_only_while_idle() {
    let mut s = SmoothScroll::new(ScrollOptions::default(), 0.0, 1000.0);
    s.sync(250.0);
    assert_eq!(s.current(), 250.0);
    assert_eq!(s.target(), 250.0);

    s.on_wheel(100.0);
    s.sync(10.0);
    assert_eq!(s.target(), 350.0);
}
