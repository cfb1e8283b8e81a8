use std::time::Instant;

/// Identifies one scheduled, fire-once timer. Tokens are never reused, so a
/// token that no longer matches the navigator's pending work is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

#[derive(Debug, Default)]
pub struct TokenSource {
    issued: u64,
}

impl TokenSource {
    pub fn issue(&mut self) -> TimerToken {
        self.issued += 1;
        TimerToken(self.issued)
    }
}

/// Pending deadlines, polled once per frame.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(Instant, TimerToken)>,
}

impl TimerQueue {
    pub fn schedule(&mut self, token: TimerToken, deadline: Instant) {
        self.pending.retain(|(_, t)| *t != token);
        self.pending.push((deadline, token));
    }

    /// Drop a pending timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, t)| *t != token);
        self.pending.len() != before
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn due(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut fired: Vec<(Instant, TimerToken)> = Vec::new();
        self.pending.retain(|&(deadline, token)| {
            if deadline <= now {
                fired.push((deadline, token));
                false
            } else {
                true
            }
        });
        fired.sort();
        fired.into_iter().map(|(_, token)| token).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
