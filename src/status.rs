use crate::food::Effect;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActiveEffect {
    pub effect: Effect,
    pub started: f64,
    pub duration: f64,
}

impl ActiveEffect {
    pub fn expired(&self, now: f64) -> bool {
        now - self.started >= self.duration
    }

    pub fn remaining(&self, now: f64) -> f64 {
        (self.duration - (now - self.started)).max(0.0)
    }
}

/// Timed effects, each expiring on its own.
#[derive(Clone, Debug, Default)]
pub struct ActiveEffects {
    entries: Vec<ActiveEffect>,
}

impl ActiveEffects {
    pub fn start(&mut self, effect: Effect, now: f64, duration: f64) {
        self.entries.push(ActiveEffect { effect, started: now, duration });
    }

    /// Removes expired entries and returns them in start order.
    pub fn expire(&mut self, now: f64) -> Vec<ActiveEffect> {
        let (gone, kept): (Vec<_>, Vec<_>) = self.entries.drain(..).partition(|e| e.expired(now));
        self.entries = kept;
        gone
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
