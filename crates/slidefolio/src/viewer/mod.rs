pub mod keys;
pub mod navigator;
pub mod timer;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use eframe::egui::Key;

use crate::catalog::FlatSlide;

use keys::KeyListener;
use navigator::{Effect, Event, Navigator, NavigatorConfig, NavigatorState};
use timer::TimerQueue;

/// A close that is still fading out on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dismissal {
    pub position: usize,
    start: Instant,
    duration: Duration,
}

impl Dismissal {
    /// 1.0 at the moment of closing, 0.0 once the fade is over.
    pub fn opacity(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// The navigator plus the resources its effects act on: the flattened
/// slides, the timer queue, the key listener and any dismiss fade.
pub struct Viewer {
    navigator: Navigator,
    slides: Vec<FlatSlide>,
    timers: TimerQueue,
    keys: KeyListener,
    dismissal: Option<Dismissal>,
}

impl Viewer {
    pub fn new(slides: Vec<FlatSlide>, config: NavigatorConfig) -> Self {
        Self {
            navigator: Navigator::new(config),
            slides,
            timers: TimerQueue::default(),
            keys: KeyListener::default(),
            dismissal: None,
        }
    }

    pub fn state(&self) -> NavigatorState {
        self.navigator.state()
    }

    pub fn slides(&self) -> &[FlatSlide] {
        &self.slides
    }

    pub fn focused(&self) -> Option<&FlatSlide> {
        self.state().position().and_then(|p| self.slides.get(p))
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn keys_bound(&self) -> bool {
        self.keys.is_bound()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn dispatch(&mut self, event: Event, now: Instant) {
        let effects = self.navigator.dispatch(&self.slides, event);
        self.apply(effects, now);
    }

    /// Forward a key press, but only while the listener is bound.
    pub fn press(&mut self, key: Key, now: Instant) {
        if self.keys.is_bound() {
            self.dispatch(Event::Key(key), now);
        }
    }

    /// Fire every timer due at `now`. Returns true if any fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.timers.due(now);
        let fired = !due.is_empty();
        for token in due {
            self.dispatch(Event::TimerFired(token), now);
        }
        if self.dismissal.is_some_and(|d| d.is_expired(now)) {
            self.dismissal = None;
        }
        fired
    }

    /// Earliest moment something needs to happen without user input.
    pub fn next_deadline(&self) -> Option<Instant> {
        let dismiss_end = self.dismissal.map(|d| d.start + d.duration);
        match (self.timers.next_deadline(), dismiss_end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn dismissal(&self) -> Option<Dismissal> {
        self.dismissal
    }

    /// Tear down the viewer and swap in a new flattened sequence.
    pub fn replace_slides(&mut self, slides: Vec<FlatSlide>, now: Instant) {
        self.dispatch(Event::Dismiss, now);
        self.dismissal = None;
        self.slides = slides;
    }

    fn apply(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::BindKeys => {
                    self.keys.bind();
                    // A fresh open supersedes a fade still on screen.
                    self.dismissal = None;
                }
                Effect::UnbindKeys => self.keys.unbind(),
                Effect::Schedule { token, after } => self.timers.schedule(token, now + after),
                Effect::Cancel(token) => {
                    self.timers.cancel(token);
                }
                Effect::FadeOut { position, after } => {
                    self.dismissal = Some(Dismissal {
                        position,
                        start: now,
                        duration: after,
                    });
                }
            }
        }
    }
}
