//! A `no_std`, no-alloc control-state and input-sampling core for the Circuit Tap probe.
//!
//! The crate provides a double-buffered device state with explicit commit,
//! and a bit-banged driver for the bank of six parallel-load shift registers
//! (74HC165-class) that surfaces the 48 low-speed inputs.
//!
//! # Features
//!
//! - **Zero heap allocation** - all state lives in the owning values
//! - **Atomic publish** - edits are staged and become visible only on commit
//! - **HAL agnostic** - control lines, data port and delays come from `embedded-hal` 1.0
//! - **Portable timing** - pulse widths are configured in time, not in NOPs
//! - **Interrupt safe** - sampling runs inside a critical section
//!
//! The optional `tracing` feature emits `tracing` events on commits and samples.
//! It pulls in `alloc`; with the feature off the crate allocates nothing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐            ┌──────────────────────────┐
//! │  StateMachine    │            │  ShiftRegisterReader     │
//! │                  │            │                          │
//! │  set_*()         │            │  sample()                │
//! │  (pending)       │            │   CE ─┐  PL ─┐_┌─        │
//! │       │          │            │   CLK __┌┐_┌┐_┌ ...      │
//! │  commit()        │            │   read bit-plane x6      │
//! │       ▼          │            │       │                  │
//! │  arm(), ...      │            │  byte(i) / snapshot()    │
//! │  (current)       │            │                          │
//! └──────────────────┘            └──────────────────────────┘
//! ```
//!
//! The two components are independent; the surrounding firmware composes them.
//!
//! # Example
//!
//! ```rust,no_run
//! use circuit_tap::prelude::*;
//!
//! let mut state = StateMachine::default();
//! state.set_arm(ArmState::Armed);
//! state.set_run_state(RunState::Running);
//!
//! // Nothing is visible until the batch is committed.
//! assert_eq!(state.arm(), ArmState::Disarmed);
//! state.commit();
//! assert_eq!(state.arm(), ArmState::Armed);
//! assert!(!state.is_dirty());
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod tap;

pub mod prelude {
    pub use crate::tap::prelude::*;
}
