use super::*;

#[test]
fn test_requests_during_animation_are_ignored() {
    let slides = three();
    let mut nav = navigator();
    nav.dispatch(&slides, Event::Open(101));
    nav.dispatch(&slides, Event::RequestNext);
    let animating = nav.state();

    for event in [Event::RequestNext, Event::RequestPrev, Event::Open(103)] {
        assert!(nav.dispatch(&slides, event).is_empty(), "{event:?}");
        assert_eq!(nav.state(), animating);
    }

    settle(&mut nav, &slides);
    assert_open_idle(&nav, 1);
}

#[test]
fn test_settle_applies_exactly_once() {
    let slides = three();
    let mut nav = navigator();
    nav.dispatch(&slides, Event::Open(101));
    nav.dispatch(&slides, Event::RequestNext);
    let token = pending_transition(&nav);

    nav.dispatch(&slides, Event::TimerFired(token));
    assert_open_idle(&nav, 1);

    nav.dispatch(&slides, Event::TimerFired(token));
    assert_open_idle(&nav, 1);
}

#[test]
fn test_close_wins_during_animation() {
    let slides = three();
    let mut nav = navigator();
    nav.dispatch(&slides, Event::Open(101));
    nav.dispatch(&slides, Event::RequestNext);
    let token = pending_transition(&nav);

    let effects = nav.dispatch(&slides, Event::RequestClose);
    assert_eq!(nav.state(), NavigatorState::Closed);
    assert!(effects.contains(&Effect::Cancel(token)));

    // A stale settle arriving after close must not resurrect the viewer.
    assert!(nav.dispatch(&slides, Event::TimerFired(token)).is_empty());
    assert_eq!(nav.state(), NavigatorState::Closed);
}

#[test]
fn test_stale_settle_after_reopen_is_ignored() {
    let slides = three();
    let mut nav = navigator();
    nav.dispatch(&slides, Event::Open(101));
    nav.dispatch(&slides, Event::RequestNext);
    let stale = pending_transition(&nav);
    nav.dispatch(&slides, Event::RequestClose);

    nav.dispatch(&slides, Event::Open(102));
    nav.dispatch(&slides, Event::TimerFired(stale));
    assert_open_idle(&nav, 1);
}

#[test]
fn test_fade_in_timer_makes_view_visible() {
    let slides = three();
    let mut nav = navigator();
    let effects = nav.dispatch(&slides, Event::Open(101));
    let Some(Effect::Schedule { token, .. }) = effects.get(1).copied() else {
        panic!("expected fade-in schedule, got {effects:?}");
    };

    let NavigatorState::Open(view) = nav.state() else {
        panic!("expected open");
    };
    assert!(!view.visible);

    nav.dispatch(&slides, Event::TimerFired(token));
    let NavigatorState::Open(view) = nav.state() else {
        panic!("expected open");
    };
    assert!(view.visible);
    assert_eq!(view.transition, Transition::Idle);
}

#[test]
fn test_fade_in_does_not_settle_transition() {
    let slides = three();
    let mut nav = navigator();
    let effects = nav.dispatch(&slides, Event::Open(101));
    let Some(Effect::Schedule { token: fade_in, .. }) = effects.get(1).copied() else {
        panic!("expected fade-in schedule");
    };
    nav.dispatch(&slides, Event::RequestNext);
    nav.dispatch(&slides, Event::TimerFired(fade_in));
    assert!(matches!(
        nav.state().transition(),
        Some(Transition::TowardNext(_))
    ));
    assert_eq!(nav.state().position(), Some(0));
}
