use crate::tap::TapError;

/// Whether the probe will react to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ArmState {
    #[default]
    Disarmed = 0,
    Armed = 1,
}

impl ArmState {
    /// The opposite arm state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            ArmState::Armed => ArmState::Disarmed,
            ArmState::Disarmed => ArmState::Armed,
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Direction of the probe's clock pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ClockMode {
    #[default]
    HighZ = 0,
    Input = 1,
    Output = 2,
}

impl ClockMode {
    /// Next mode in the front-panel cycle: Output → HighZ → Input → Output.
    ///
    /// This is not the discriminant order.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            ClockMode::Output => ClockMode::HighZ,
            ClockMode::HighZ => ClockMode::Input,
            ClockMode::Input => ClockMode::Output,
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Capture progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RunState {
    #[default]
    Stopped = 0,
    Running = 1,
    Ended = 2,
}

impl RunState {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ArmState {
    type Error = TapError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ArmState::Disarmed),
            1 => Ok(ArmState::Armed),
            _ => Err(TapError::InvalidDiscriminant),
        }
    }
}

impl TryFrom<u8> for ClockMode {
    type Error = TapError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ClockMode::HighZ),
            1 => Ok(ClockMode::Input),
            2 => Ok(ClockMode::Output),
            _ => Err(TapError::InvalidDiscriminant),
        }
    }
}

impl TryFrom<u8> for RunState {
    type Error = TapError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(RunState::Stopped),
            1 => Ok(RunState::Running),
            2 => Ok(RunState::Ended),
            _ => Err(TapError::InvalidDiscriminant),
        }
    }
}

/// Complete operating state of the probe.
///
/// Plain value type: copied in and out of the [`StateMachine`](crate::tap::StateMachine),
/// never shared by reference. The default is the power-on state
/// `{Disarmed, HighZ, Stopped, no error}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceState {
    pub arm: ArmState,
    pub clock_mode: ClockMode,
    pub run_state: RunState,
    pub error: bool,
}

impl DeviceState {
    pub const fn new(
        arm: ArmState,
        clock_mode: ClockMode,
        run_state: RunState,
        error: bool,
    ) -> Self {
        Self {
            arm,
            clock_mode,
            run_state,
            error,
        }
    }
}

impl core::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "arm={} clock={} run={} error={}",
            self.arm.as_u8(),
            self.clock_mode.as_u8(),
            self.run_state.as_u8(),
            self.error as u8
        )
    }
}
