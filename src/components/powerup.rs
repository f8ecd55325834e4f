//! Time-gated activation for power-up sprites.
//!
//! A power-up can be picked up a limited number of times. Each pickup keeps
//! it active for [`POWER_UP_DURATION_MS`]; expiry is noticed by polling
//! [`TimedActivation::update`] every frame.

/// How long a pickup lasts, in milliseconds.
pub const POWER_UP_DURATION_MS: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedActivation {
    uses_remaining: u32,
    picked_up_at: Option<f64>,
    active: bool,
}

impl TimedActivation {
    pub fn new(uses: u32) -> Self {
        Self {
            uses_remaining: uses,
            picked_up_at: None,
            active: false,
        }
    }

    /// Spend one use at `now_ms`. Fails when no uses are left.
    pub fn activate(&mut self, now_ms: f64) -> bool {
        if self.uses_remaining == 0 {
            return false;
        }
        self.uses_remaining -= 1;
        self.picked_up_at = Some(now_ms);
        self.active = true;
        true
    }

    /// Expire the pickup once its window has passed.
    pub fn update(&mut self, now_ms: f64) {
        if let Some(picked) = self.picked_up_at {
            if self.active && now_ms - picked >= POWER_UP_DURATION_MS {
                self.active = false;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn uses_remaining(&self) -> u32 {
        self.uses_remaining
    }

    pub fn picked_up_at(&self) -> Option<f64> {
        self.picked_up_at
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
