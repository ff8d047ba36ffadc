use core::cell::RefCell;

use critical_section::Mutex;

use crate::tap::{machine::StateMachine, state::DeviceState};

/// A [`StateMachine`] that can live in a `static` and be used from both the
/// main loop and interrupt handlers.
///
/// Each call to [`with`](Self::with) runs inside one critical section, so a
/// batch of edits followed by a commit is published atomically with respect
/// to every other context.
///
/// ```rust,no_run
/// use circuit_tap::prelude::*;
///
/// static STATE: SharedStateMachine = SharedStateMachine::new(DeviceState::new(
///     ArmState::Disarmed,
///     ClockMode::HighZ,
///     RunState::Stopped,
///     false,
/// ));
///
/// // Front-panel button ISR
/// STATE.with(|sm| {
///     sm.toggle_arm();
///     sm.commit();
/// });
/// ```
pub struct SharedStateMachine {
    inner: Mutex<RefCell<StateMachine>>,
}

impl SharedStateMachine {
    pub const fn new(initial: DeviceState) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(StateMachine::new(initial))),
        }
    }

    /// Runs `f` with exclusive access to the machine.
    ///
    /// # Panics
    /// Panics if called re-entrantly from inside `f`.
    pub fn with<R>(&self, f: impl FnOnce(&mut StateMachine) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Committed state.
    pub fn state(&self) -> DeviceState {
        self.with(|sm| sm.state())
    }

    pub fn is_dirty(&self) -> bool {
        self.with(|sm| sm.is_dirty())
    }
}

impl Default for SharedStateMachine {
    fn default() -> Self {
        Self::new(DeviceState::default())
    }
}

impl core::fmt::Debug for SharedStateMachine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedStateMachine").finish_non_exhaustive()
    }
}
