use std::time::{Duration, Instant};

use eframe::egui::Key;

use super::*;
use crate::viewer::Viewer;

fn viewer() -> Viewer {
    Viewer::new(three(), NavigatorConfig::default())
}

#[test]
fn test_keys_bound_only_while_open() {
    let t0 = Instant::now();
    let mut viewer = viewer();
    assert!(!viewer.keys_bound());

    viewer.dispatch(Event::Open(101), t0);
    assert!(viewer.keys_bound());

    viewer.dispatch(Event::RequestClose, t0);
    assert!(!viewer.keys_bound());
}

#[test]
fn test_key_press_ignored_while_closed() {
    let t0 = Instant::now();
    let mut viewer = viewer();
    viewer.press(Key::ArrowRight, t0);
    assert_eq!(viewer.state(), NavigatorState::Closed);
    assert_eq!(viewer.pending_timers(), 0);
}

#[test]
fn test_settle_waits_for_delay() {
    let t0 = Instant::now();
    let mut viewer = viewer();
    viewer.dispatch(Event::Open(101), t0);
    viewer.tick(t0);

    viewer.press(Key::ArrowRight, t0);
    assert!(!viewer.tick(t0 + Duration::from_millis(100)));
    assert_eq!(viewer.state().position(), Some(0));

    // Input inside the settle window is dropped.
    viewer.press(Key::ArrowRight, t0 + Duration::from_millis(120));

    assert!(viewer.tick(t0 + Duration::from_millis(150)));
    assert_eq!(viewer.state().position(), Some(1));
    assert_eq!(viewer.state().transition(), Some(Transition::Idle));
    assert_eq!(viewer.focused().map(|s| s.id()), Some(102));
}

#[test]
fn test_held_arrow_steps_once_per_settle() {
    let t0 = Instant::now();
    let mut viewer = viewer();
    viewer.dispatch(Event::Open(101), t0);
    viewer.tick(t0);

    // Auto-repeat key-downs every 30ms while ArrowRight is held.
    let mut positions = Vec::new();
    for ms in (0..=390).step_by(30) {
        let now = t0 + Duration::from_millis(ms);
        viewer.tick(now);
        positions.push((ms, viewer.state().position()));
        viewer.press(Key::ArrowRight, now);
    }

    let at = |ms: u64| positions.iter().find(|(t, _)| *t == ms).map(|(_, p)| *p);
    assert_eq!(at(120), Some(Some(0)));
    assert_eq!(at(150), Some(Some(1)));
    assert_eq!(at(270), Some(Some(1)));
    assert_eq!(at(300), Some(Some(2)));
    assert_eq!(at(390), Some(Some(2)));
    assert_eq!(viewer.state().transition(), Some(Transition::Idle));
}

#[test]
fn test_close_mid_animation_cancels_timer() {
    let t0 = Instant::now();
    let mut viewer = viewer();
    viewer.dispatch(Event::Open(101), t0);
    viewer.tick(t0);
    viewer.press(Key::ArrowRight, t0);
    assert_eq!(viewer.pending_timers(), 1);

    viewer.press(Key::Escape, t0 + Duration::from_millis(50));
    assert_eq!(viewer.pending_timers(), 0);
    assert_eq!(viewer.state(), NavigatorState::Closed);

    viewer.tick(t0 + Duration::from_secs(1));
    assert_eq!(viewer.state(), NavigatorState::Closed);
}

#[test]
fn test_dismissal_fades_out() {
    let t0 = Instant::now();
    let mut viewer = viewer();
    viewer.dispatch(Event::Open(102), t0);
    viewer.dispatch(Event::RequestClose, t0);

    let dismissal = viewer.dismissal().unwrap();
    assert_eq!(dismissal.position, 1);
    assert_eq!(dismissal.opacity(t0), 1.0);
    assert!((dismissal.opacity(t0 + Duration::from_millis(100)) - 0.5).abs() < 1e-3);
    assert_eq!(
        viewer.next_deadline(),
        Some(t0 + Duration::from_millis(200))
    );

    viewer.tick(t0 + Duration::from_millis(200));
    assert!(viewer.dismissal().is_none());
    assert_eq!(viewer.next_deadline(), None);
}

#[test]
fn test_reopen_clears_dismissal() {
    let t0 = Instant::now();
    let mut viewer = viewer();
    viewer.dispatch(Event::Open(102), t0);
    viewer.dispatch(Event::RequestClose, t0);
    viewer.dispatch(Event::Open(103), t0 + Duration::from_millis(50));
    assert!(viewer.dismissal().is_none());
    assert_eq!(viewer.state().position(), Some(2));
}

#[test]
fn test_replace_slides_dismisses() {
    let t0 = Instant::now();
    let mut viewer = viewer();
    viewer.dispatch(Event::Open(103), t0);
    viewer.replace_slides(slides(&[&[1]]), t0);
    assert_eq!(viewer.state(), NavigatorState::Closed);
    assert!(!viewer.keys_bound());
    assert!(viewer.dismissal().is_none());
    assert_eq!(viewer.slides().len(), 1);
}
