/// Minimum time a control line is held low during a load or clock pulse.
///
/// The 74HC165 datasheet specifies minimum pulse widths for `PL` and `CP`;
/// the value depends on the supply voltage, so it is configured here rather
/// than baked in as a count of no-op instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PulseWidth {
    nanos: u32,
}

impl PulseWidth {
    /// No explicit hold; the pulse lasts as long as the pin writes take.
    pub const ZERO: Self = Self { nanos: 0 };

    pub const fn from_nanos(nanos: u32) -> Self {
        Self { nanos }
    }

    /// Duration of `cycles` CPU cycles at `cpu_hz`, rounded up to whole nanoseconds.
    ///
    /// A zero `cpu_hz` yields [`PulseWidth::ZERO`].
    pub const fn from_cycles(cycles: u32, cpu_hz: u32) -> Self {
        if cpu_hz == 0 {
            return Self::ZERO;
        }
        let num = cycles as u64 * 1_000_000_000;
        let nanos = num.div_ceil(cpu_hz as u64);
        Self {
            nanos: if nanos > u32::MAX as u64 {
                u32::MAX
            } else {
                nanos as u32
            },
        }
    }

    #[inline]
    pub const fn as_nanos(&self) -> u32 {
        self.nanos
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.nanos == 0
    }
}

impl Default for PulseWidth {
    /// Two cycles of the probe's 20 MHz core clock.
    fn default() -> Self {
        Self::from_cycles(2, 20_000_000)
    }
}

/// What to do with the chip-enable line once a sample completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChipEnableAfter {
    /// Leave the chain enabled, as the sampling loop left it.
    #[default]
    LeaveEnabled,
    /// Drive chip-enable high again so the chain ignores stray clock edges.
    Inhibit,
}

/// Timing and line-handling options for a
/// [`ShiftRegisterReader`](crate::tap::ShiftRegisterReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReaderConfig {
    pub pulse_width: PulseWidth,
    pub chip_enable_after: ChipEnableAfter,
}

impl ReaderConfig {
    pub const fn new() -> Self {
        Self {
            pulse_width: PulseWidth::from_cycles(2, 20_000_000),
            chip_enable_after: ChipEnableAfter::LeaveEnabled,
        }
    }

    pub const fn with_pulse_width(mut self, pulse_width: PulseWidth) -> Self {
        self.pulse_width = pulse_width;
        self
    }

    pub const fn with_chip_enable_after(mut self, chip_enable_after: ChipEnableAfter) -> Self {
        self.chip_enable_after = chip_enable_after;
        self
    }
}
