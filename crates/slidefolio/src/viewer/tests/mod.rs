mod reentrancy;
mod runtime;

use crate::catalog::{Catalog, CatalogInfo, FlatSlide, Section, Slide, SlideId};

use super::navigator::{Effect, Event, Navigator, NavigatorConfig, NavigatorState, Transition};
use super::timer::TimerToken;

/// Flattened slides for one section per id group.
fn slides(groups: &[&[SlideId]]) -> Vec<FlatSlide> {
    let sections = groups
        .iter()
        .enumerate()
        .map(|(i, ids)| {
            let slides = ids
                .iter()
                .map(|&id| Slide::new(id, format!("Slide {id}"), "body"))
                .collect();
            Section::new(i as u32 + 1, format!("Section {}", i + 1), "#7eb8c9", slides)
        })
        .collect();
    Catalog::new(CatalogInfo::default(), sections)
        .unwrap()
        .flatten()
}

/// The three-slide catalog used by most scenarios.
fn three() -> Vec<FlatSlide> {
    slides(&[&[101, 102, 103]])
}

fn navigator() -> Navigator {
    Navigator::new(NavigatorConfig::default())
}

/// The token of the in-flight prev/next transition.
fn pending_transition(nav: &Navigator) -> TimerToken {
    match nav.state().transition() {
        Some(Transition::TowardPrev(t)) | Some(Transition::TowardNext(t)) => t,
        other => panic!("expected an in-flight transition, got {other:?}"),
    }
}

/// Fire the in-flight transition's timer.
fn settle(nav: &mut Navigator, slides: &[FlatSlide]) -> Vec<Effect> {
    let token = pending_transition(nav);
    nav.dispatch(slides, Event::TimerFired(token))
}

fn assert_open_idle(nav: &Navigator, position: usize) {
    match nav.state() {
        NavigatorState::Open(view) => {
            assert_eq!(view.position, position, "position");
            assert_eq!(view.transition, Transition::Idle, "transition");
        }
        NavigatorState::Closed => panic!("expected Open({position}, Idle), got Closed"),
    }
}
