//! The modal viewer's state machine.
//!
//! [`reduce`] takes the current [`NavigatorState`] and one [`Event`] and
//! returns the next state plus the [`Effect`]s the shell has to carry out
//! (binding keys, scheduling or cancelling timers, fading out). It never
//! touches a clock or a window itself.

use std::time::Duration;

use eframe::egui::Key;

use crate::catalog::{self, FlatSlide, SlideId};

use super::keys::{Action, KeyMap};
use super::timer::{TimerToken, TokenSource};

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(150);
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorConfig {
    /// How long a prev/next animation runs before the new position applies.
    pub settle_delay: Duration,
    /// How long the dismiss fade runs after a close.
    pub close_delay: Duration,
    pub key_map: KeyMap,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            close_delay: DEFAULT_CLOSE_DELAY,
            key_map: KeyMap::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Idle,
    /// Animating toward the previous slide; settles when the token fires.
    TowardPrev(TimerToken),
    /// Animating toward the next slide; settles when the token fires.
    TowardNext(TimerToken),
}

impl Transition {
    pub fn is_idle(&self) -> bool {
        matches!(self, Transition::Idle)
    }

    fn token(&self) -> Option<TimerToken> {
        match *self {
            Transition::Idle => None,
            Transition::TowardPrev(t) | Transition::TowardNext(t) => Some(t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenView {
    /// Index into the flattened slide sequence.
    pub position: usize,
    pub transition: Transition,
    /// False until the open fade-in starts.
    pub visible: bool,
    fade_in: Option<TimerToken>,
}

impl OpenView {
    fn pending_tokens(&self) -> impl Iterator<Item = TimerToken> {
        self.transition.token().into_iter().chain(self.fade_in)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigatorState {
    #[default]
    Closed,
    Open(OpenView),
}

impl NavigatorState {
    pub fn position(&self) -> Option<usize> {
        match self {
            NavigatorState::Closed => None,
            NavigatorState::Open(view) => Some(view.position),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn transition(&self) -> Option<Transition> {
        match self {
            NavigatorState::Closed => None,
            NavigatorState::Open(view) => Some(view.transition),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A card was activated.
    Open(SlideId),
    RequestPrev,
    RequestNext,
    RequestClose,
    /// A key press delivered by the bound listener.
    Key(Key),
    TimerFired(TimerToken),
    /// The viewer is being torn down without a fade (catalog swap, exit).
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    BindKeys,
    UnbindKeys,
    Schedule { token: TimerToken, after: Duration },
    Cancel(TimerToken),
    /// Draw the slide at `position` fading out over `after`.
    FadeOut { position: usize, after: Duration },
}

/// Everything the reducer reads besides the state itself.
pub struct Context<'a> {
    pub slides: &'a [FlatSlide],
    pub config: &'a NavigatorConfig,
    pub tokens: &'a mut TokenSource,
}

pub fn reduce(
    state: NavigatorState,
    event: Event,
    cx: &mut Context<'_>,
) -> (NavigatorState, Vec<Effect>) {
    match state {
        NavigatorState::Closed => reduce_closed(event, cx),
        NavigatorState::Open(view) => reduce_open(view, event, cx),
    }
}

fn reduce_closed(event: Event, cx: &mut Context<'_>) -> (NavigatorState, Vec<Effect>) {
    let Event::Open(id) = event else {
        return (NavigatorState::Closed, Vec::new());
    };

    let Some(position) = catalog::locate(cx.slides, id) else {
        tracing::debug!(slide = id, "open ignored, slide not in catalog");
        return (NavigatorState::Closed, Vec::new());
    };

    tracing::debug!(slide = id, position, "viewer opened");
    let fade_in = cx.tokens.issue();
    let view = OpenView {
        position,
        transition: Transition::Idle,
        visible: false,
        fade_in: Some(fade_in),
    };
    (
        NavigatorState::Open(view),
        vec![
            Effect::BindKeys,
            Effect::Schedule {
                token: fade_in,
                after: Duration::ZERO,
            },
        ],
    )
}

fn reduce_open(
    view: OpenView,
    event: Event,
    cx: &mut Context<'_>,
) -> (NavigatorState, Vec<Effect>) {
    match event {
        Event::Open(id) => {
            tracing::trace!(slide = id, "open ignored, viewer already open");
            (NavigatorState::Open(view), Vec::new())
        }
        Event::RequestPrev => step(view, Action::Prev, cx),
        Event::RequestNext => step(view, Action::Next, cx),
        Event::RequestClose => close(view, true, cx),
        Event::Dismiss => close(view, false, cx),
        Event::Key(key) => match cx.config.key_map.action(key) {
            Some(Action::Close) => close(view, true, cx),
            Some(action) => step(view, action, cx),
            None => (NavigatorState::Open(view), Vec::new()),
        },
        Event::TimerFired(token) => fire(view, token),
    }
}

fn step(view: OpenView, action: Action, cx: &mut Context<'_>) -> (NavigatorState, Vec<Effect>) {
    if !view.transition.is_idle() {
        tracing::trace!(?action, "navigation ignored, transition in flight");
        return (NavigatorState::Open(view), Vec::new());
    }

    let len = cx.slides.len();
    let allowed = match action {
        Action::Prev => view.position > 0,
        Action::Next => view.position + 1 < len,
        Action::Close => false,
    };
    if !allowed {
        tracing::trace!(?action, position = view.position, len, "navigation at boundary");
        return (NavigatorState::Open(view), Vec::new());
    }

    let token = cx.tokens.issue();
    let transition = match action {
        Action::Prev => Transition::TowardPrev(token),
        _ => Transition::TowardNext(token),
    };
    (
        NavigatorState::Open(OpenView { transition, ..view }),
        vec![Effect::Schedule {
            token,
            after: cx.config.settle_delay,
        }],
    )
}

fn fire(view: OpenView, token: TimerToken) -> (NavigatorState, Vec<Effect>) {
    let settled = match view.transition {
        Transition::TowardPrev(t) if t == token => Some(view.position - 1),
        Transition::TowardNext(t) if t == token => Some(view.position + 1),
        _ => None,
    };
    if let Some(position) = settled {
        tracing::debug!(from = view.position, to = position, "transition settled");
        return (
            NavigatorState::Open(OpenView {
                position,
                transition: Transition::Idle,
                ..view
            }),
            Vec::new(),
        );
    }

    if view.fade_in == Some(token) {
        return (
            NavigatorState::Open(OpenView {
                visible: true,
                fade_in: None,
                ..view
            }),
            Vec::new(),
        );
    }

    tracing::trace!(?token, "stale timer ignored");
    (NavigatorState::Open(view), Vec::new())
}

fn close(view: OpenView, fade: bool, cx: &mut Context<'_>) -> (NavigatorState, Vec<Effect>) {
    let mut effects: Vec<Effect> = view.pending_tokens().map(Effect::Cancel).collect();
    effects.push(Effect::UnbindKeys);
    if fade {
        effects.push(Effect::FadeOut {
            position: view.position,
            after: cx.config.close_delay,
        });
    }
    tracing::debug!(position = view.position, "viewer closed");
    (NavigatorState::Closed, effects)
}

/// Owns the navigator state and its token source; the shell's handle onto
/// [`reduce`].
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavigatorState,
    tokens: TokenSource,
    config: NavigatorConfig,
}

impl Navigator {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            state: NavigatorState::Closed,
            tokens: TokenSource::default(),
            config,
        }
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn dispatch(&mut self, slides: &[FlatSlide], event: Event) -> Vec<Effect> {
        let mut cx = Context {
            slides,
            config: &self.config,
            tokens: &mut self.tokens,
        };
        let (state, effects) = reduce(self.state, event, &mut cx);
        self.state = state;
        effects
    }
}
