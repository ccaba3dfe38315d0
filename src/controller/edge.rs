//! Edge-triggered adjust counters
//!
//! A held intensity key must act once, not on every loop iteration. Each
//! counter tracks how many consecutive iterations its command has been the
//! latest one; only the first of them fires.

/// Consecutive-iteration counter for one intensity command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EdgeCounter {
    held: u16,
}

impl EdgeCounter {
    /// Counter at rest
    pub const IDLE: Self = Self { held: 0 };

    /// Register one more iteration with the command held
    ///
    /// Returns the updated counter and whether this iteration is the edge.
    /// Saturates, so a key held indefinitely never fires twice.
    #[must_use]
    pub const fn press(self) -> (Self, bool) {
        let fired = self.held == 0;
        let held = self.held.saturating_add(1);
        (Self { held }, fired)
    }

    /// Forget the held state
    #[must_use]
    pub const fn release(self) -> Self {
        Self::IDLE
    }

    /// Iterations the command has been held
    #[must_use]
    pub const fn held(self) -> u16 {
        self.held
    }

    /// Check whether the next press fires
    #[must_use]
    pub const fn is_armed(self) -> bool {
        self.held == 0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for EdgeCounter {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "held({})", self.held);
    }
}
