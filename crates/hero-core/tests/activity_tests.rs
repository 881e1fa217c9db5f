use hero_core::*;

#[test]
fn mount_default_uses_focus_and_visibility() {
    assert!(SceneActivity::on_mount(true, false).is_active());
    assert!(!SceneActivity::on_mount(false, false).is_active());
    assert!(!SceneActivity::on_mount(true, true).is_active());
}

#[test]
fn first_intersection_report_overrides_mount_default() {
    let mut a = SceneActivity::on_mount(false, false);
    a.on_intersection(true);
    assert!(a.is_active());

    let mut b = SceneActivity::on_mount(true, false);
    b.on_intersection(false);
    assert!(!b.is_active());
    assert_eq!(b.frame_loop(), FrameLoop::Never);
}

#[test]
fn losing_focus_pauses_and_regaining_resumes() {
    let mut a = SceneActivity::on_mount(true, false);
    a.on_intersection(true);
    assert_eq!(a.frame_loop(), FrameLoop::Always);

    a.on_focus_change(false, false);
    assert!(a.paused());
    assert_eq!(a.canvas_opacity(), 0.0);

    a.on_focus_change(true, false);
    assert!(!a.paused());
    assert_eq!(a.canvas_opacity(), 1.0);
}

#[test]
fn hidden_tab_pauses_even_with_focus() {
    let mut a = SceneActivity::on_mount(true, false);
    a.on_intersection(true);
    a.on_focus_change(true, true);
    assert!(a.paused());
}

#[test]
fn scrolled_past_stays_paused_when_focused() {
    let mut a = SceneActivity::on_mount(true, false);
    a.on_intersection(false);
    a.on_focus_change(true, false);
    assert!(a.paused());
    a.on_intersection(true);
    assert!(a.is_active());
}

#[test]
fn focus_events_before_observer_update_the_default() {
    let mut a = SceneActivity::on_mount(true, false);
    a.on_focus_change(false, false);
    assert!(a.paused());
    a.on_focus_change(true, false);
    assert!(a.is_active());
}
