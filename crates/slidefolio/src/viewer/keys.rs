use eframe::egui::Key;

/// What a viewer key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Close,
    Prev,
    Next,
}

/// One key per viewer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub close: Key,
    pub prev: Key,
    pub next: Key,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            close: Key::Escape,
            prev: Key::ArrowLeft,
            next: Key::ArrowRight,
        }
    }
}

impl KeyMap {
    pub fn action(&self, key: Key) -> Option<Action> {
        if key == self.close {
            Some(Action::Close)
        } else if key == self.prev {
            Some(Action::Prev)
        } else if key == self.next {
            Some(Action::Next)
        } else {
            None
        }
    }
}

/// The process-wide key listener. Bound while the viewer is open; key
/// presses are only forwarded to the navigator while bound.
#[derive(Debug, Default)]
pub struct KeyListener {
    bound: bool,
}

impl KeyListener {
    pub fn bind(&mut self) {
        if self.bound {
            tracing::warn!("key listener already bound");
            return;
        }
        tracing::trace!("key listener bound");
        self.bound = true;
    }

    pub fn unbind(&mut self) {
        if !self.bound {
            tracing::warn!("key listener was not bound");
            return;
        }
        tracing::trace!("key listener unbound");
        self.bound = false;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_map() {
        let map = KeyMap::default();
        assert_eq!(map.action(Key::Escape), Some(Action::Close));
        assert_eq!(map.action(Key::ArrowLeft), Some(Action::Prev));
        assert_eq!(map.action(Key::ArrowRight), Some(Action::Next));
        assert_eq!(map.action(Key::Space), None);
    }

    #[test]
    fn test_custom_key_map() {
        let map = KeyMap {
            close: Key::Q,
            prev: Key::P,
            next: Key::N,
        };
        assert_eq!(map.action(Key::N), Some(Action::Next));
        assert_eq!(map.action(Key::ArrowRight), None);
    }

    #[test]
    fn test_listener_bind_is_not_reentrant() {
        let mut listener = KeyListener::default();
        assert!(!listener.is_bound());
        listener.bind();
        listener.bind();
        assert!(listener.is_bound());
        listener.unbind();
        assert!(!listener.is_bound());
        listener.unbind();
        assert!(!listener.is_bound());
    }
}
