use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};

use crate::tap::{
    TapError,
    config::{ChipEnableAfter, ReaderConfig},
    macros::trace,
    port::{DATA_MASK, DataPort, PORT_COUNT, Port},
    snapshot::Snapshot,
};

/// The three lines shared by every register in the bank.
///
/// - `chip_enable`: clock inhibit, active low; low lets clock edges shift.
/// - `parallel_load`: active low; a low pulse latches the external inputs.
/// - `clock`: rising edge shifts the next bit to the serial outputs.
#[derive(Debug)]
pub struct ControlPins<CE, PL, CLK> {
    pub chip_enable: CE,
    pub parallel_load: PL,
    pub clock: CLK,
}

/// Bit-banged driver for six parallel 74HC165 shift registers.
///
/// All registers share the control lines and each drives its own data line,
/// so every clock edge presents one bit-plane across the six registers. The
/// reader stores one data port read per logical port A..F in its own buffer.
pub struct ShiftRegisterReader<CE, PL, CLK, D, DL> {
    pins: ControlPins<CE, PL, CLK>,
    data: D,
    delay: DL,
    config: ReaderConfig,
    buffer: [u8; PORT_COUNT],
}

impl<CE, PL, CLK, D, DL> core::fmt::Debug for ShiftRegisterReader<CE, PL, CLK, D, DL> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShiftRegisterReader")
            .field("config", &self.config)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

impl<CE, PL, CLK, D, DL> ShiftRegisterReader<CE, PL, CLK, D, DL>
where
    CE: OutputPin,
    PL: OutputPin,
    CLK: OutputPin,
    D: DataPort,
    DL: DelayNs,
{
    /// Takes ownership of the lines. The buffer starts zeroed; call
    /// [`init`](Self::init) before the first sample.
    pub fn new(pins: ControlPins<CE, PL, CLK>, data: D, delay: DL, config: ReaderConfig) -> Self {
        Self {
            pins,
            data,
            delay,
            config,
            buffer: [0; PORT_COUNT],
        }
    }

    /// Puts the bank in its idle state: chain inhibited, clock low, parallel
    /// load held asserted so the registers follow their inputs.
    pub fn init(&mut self) -> Result<(), TapError> {
        drive(&mut self.pins.chip_enable, PinState::High)?;
        drive(&mut self.pins.clock, PinState::Low)?;
        drive(&mut self.pins.parallel_load, PinState::Low)
    }

    /// Latches all 48 inputs and shifts them into the buffer.
    ///
    /// Runs with interrupts masked: an interrupted pulse sequence corrupts
    /// the latch cycle.
    pub fn sample(&mut self) -> Result<(), TapError> {
        critical_section::with(|_| self.sample_unmasked())
    }

    /// Same as [`sample`](Self::sample) without entering a critical section.
    ///
    /// For callers already running where they cannot be preempted, such as
    /// inside an ISR.
    pub fn sample_unmasked(&mut self) -> Result<(), TapError> {
        let width = self.config.pulse_width.as_nanos();
        self.latch()?;

        for slot in self.buffer.iter_mut() {
            *slot = self.data.read() & DATA_MASK;
            pulse(&mut self.pins.clock, &mut self.delay, width)?;
        }

        self.finish()?;
        trace!(bytes = ?self.buffer, "sampled input ports");
        Ok(())
    }

    /// Latches the inputs and reads only `port`, storing and returning its byte.
    ///
    /// Ports before `port` are clocked past without being read; the other
    /// buffered bytes are left as they were.
    pub fn shift_in_port(&mut self, port: Port) -> Result<u8, TapError> {
        let width = self.config.pulse_width.as_nanos();
        critical_section::with(|_| {
            self.latch()?;

            for _ in 0..port.index() {
                pulse(&mut self.pins.clock, &mut self.delay, width)?;
            }
            let byte = self.data.read() & DATA_MASK;
            self.buffer[port.index()] = byte;

            self.finish()?;
            trace!(%port, byte, "sampled single port");
            Ok(byte)
        })
    }

    /// Steps 1-4 of the sample protocol: enable the chain, pulse the load
    /// line, raise the clock.
    fn latch(&mut self) -> Result<(), TapError> {
        let width = self.config.pulse_width.as_nanos();

        drive(&mut self.pins.clock, PinState::Low)?;
        drive(&mut self.pins.chip_enable, PinState::Low)?;
        pulse(&mut self.pins.parallel_load, &mut self.delay, width)?;
        drive(&mut self.pins.clock, PinState::High)
    }

    fn finish(&mut self) -> Result<(), TapError> {
        match self.config.chip_enable_after {
            ChipEnableAfter::LeaveEnabled => Ok(()),
            ChipEnableAfter::Inhibit => drive(&mut self.pins.chip_enable, PinState::High),
        }
    }
}

impl<CE, PL, CLK, D, DL> ShiftRegisterReader<CE, PL, CLK, D, DL> {
    /// Buffered byte for the port at `index`, as latched by the last sample.
    ///
    /// Returns `PortOutOfRange` for `index >= 6`.
    #[inline]
    pub fn byte(&self, index: usize) -> Result<u8, TapError> {
        self.buffer
            .get(index)
            .copied()
            .ok_or(TapError::PortOutOfRange)
    }

    #[inline]
    pub fn port(&self, port: Port) -> u8 {
        self.buffer[port.index()]
    }

    #[inline]
    pub fn bytes(&self) -> [u8; PORT_COUNT] {
        self.buffer
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.buffer)
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Gives the lines back.
    pub fn release(self) -> (ControlPins<CE, PL, CLK>, D, DL) {
        (self.pins, self.data, self.delay)
    }
}

fn drive<P: OutputPin>(pin: &mut P, state: PinState) -> Result<(), TapError> {
    pin.set_state(state).map_err(|_| TapError::Pin)
}

/// Low for at least `width_ns`, then high.
fn pulse<P, DL>(pin: &mut P, delay: &mut DL, width_ns: u32) -> Result<(), TapError>
where
    P: OutputPin,
    DL: DelayNs,
{
    drive(pin, PinState::Low)?;
    if width_ns > 0 {
        delay.delay_ns(width_ns);
    }
    drive(pin, PinState::High)
}
