pub mod config;
pub mod error;
pub mod machine;
pub(crate) mod macros;
pub mod port;
pub mod reader;
pub mod shared;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_support;

pub use config::{ChipEnableAfter, PulseWidth, ReaderConfig};
pub use error::TapError;
pub use machine::StateMachine;
pub use port::{DATA_MASK, DataPort, PORT_COUNT, Port};
pub use reader::{ControlPins, ShiftRegisterReader};
pub use shared::SharedStateMachine;
pub use snapshot::Snapshot;
pub use state::{ArmState, ClockMode, DeviceState, RunState};

pub mod prelude {
    pub use super::{
        ArmState, ChipEnableAfter, ClockMode, ControlPins, DataPort, DeviceState, Port, PulseWidth,
        ReaderConfig, RunState, SharedStateMachine, ShiftRegisterReader, Snapshot, StateMachine,
        TapError,
    };
}
