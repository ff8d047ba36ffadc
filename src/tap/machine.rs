use crate::tap::{
    macros::{debug, impl_state_field, impl_state_fields},
    state::{ArmState, ClockMode, DeviceState, RunState},
};

/// Double-buffered device state with explicit commit.
///
/// Every edit lands in a pending record. Readers only ever see the current
/// record, which is replaced wholesale by [`commit`](Self::commit), so a reader
/// running between a batch of edits and the commit observes the complete
/// previous state and never a mix of old and new fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateMachine {
    current: DeviceState,
    pending: DeviceState,
    dirty: bool,
}

impl StateMachine {
    /// Creates a machine whose current and pending records both start at `initial`.
    pub const fn new(initial: DeviceState) -> Self {
        Self {
            current: initial,
            pending: initial,
            dirty: false,
        }
    }

    impl_state_fields!();

    /// Stages the opposite of the *committed* arm state.
    ///
    /// Reads the current record, not the pending one: two toggles without a
    /// commit in between stage the same value twice rather than cancelling.
    pub fn toggle_arm(&mut self) {
        self.pending.arm = self.current.arm.toggled();
        self.dirty = true;
    }

    /// Stages the clock mode following the *committed* one in the
    /// Output → HighZ → Input cycle.
    pub fn cycle_clock_mode(&mut self) {
        self.pending.clock_mode = self.current.clock_mode.next();
        self.dirty = true;
    }

    /// Publishes the pending record.
    ///
    /// When the pending record differs from the current one it replaces it and
    /// the dirty flag is cleared. When they are equal nothing changes, including
    /// the dirty flag. Returns true if the current record was replaced.
    pub fn commit(&mut self) -> bool {
        if self.pending == self.current {
            return false;
        }

        debug!(from = ?self.current, to = ?self.pending, "state committed");
        self.current = self.pending;
        self.dirty = false;
        true
    }

    /// Drops all staged edits, resetting pending to current and clearing dirty.
    pub fn discard(&mut self) {
        if self.dirty {
            debug!(staged = ?self.pending, "staged state discarded");
        }
        self.pending = self.current;
        self.dirty = false;
    }

    /// Returns true if an edit was staged since the last successful commit.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The committed record.
    #[inline]
    pub fn state(&self) -> DeviceState {
        self.current
    }

    /// The staged record, for diagnostics.
    #[inline]
    pub fn pending(&self) -> DeviceState {
        self.pending
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new(DeviceState::default())
    }
}

impl core::fmt::Display for StateMachine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "current: {} | pending: {}", self.current, self.pending)
    }
}
