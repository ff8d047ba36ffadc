//! Test support utilities - only compiled in test builds.
//!
//! Models a bank of six 74HC165 registers behind shared control lines. Pins,
//! data port and delay all borrow the same [`Bus`], which records every edge
//! so tests can check the exact protocol.

use core::{cell::RefCell, convert::Infallible};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, ErrorKind, ErrorType, OutputPin},
};
use heapless::Vec;

use crate::tap::{
    config::ReaderConfig,
    port::{DataPort, PORT_COUNT},
    reader::{ControlPins, ShiftRegisterReader},
};

pub type SimReader<'a> =
    ShiftRegisterReader<SimPin<'a>, SimPin<'a>, SimPin<'a>, SimData<'a>, SimDelay<'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    ChipEnable,
    ParallelLoad,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High(Line),
    Low(Line),
    Delay(u32),
    Read(u8),
}

/// Simulated register bank and line levels.
pub struct Bus {
    chip_enable: bool,
    parallel_load: bool,
    clock: bool,
    inputs: [u8; PORT_COUNT],
    regs: [u8; PORT_COUNT],
    events: Vec<Event, 256>,
}

impl Bus {
    /// Lines start high, as after reset with pull-ups.
    pub fn new(inputs: [u8; PORT_COUNT]) -> Self {
        Self {
            chip_enable: true,
            parallel_load: true,
            clock: true,
            inputs,
            regs: [0; PORT_COUNT],
            events: Vec::new(),
        }
    }

    pub fn set_inputs(&mut self, inputs: [u8; PORT_COUNT]) {
        self.inputs = inputs;
        if !self.parallel_load {
            self.regs = inputs;
        }
    }

    pub fn level(&self, line: Line) -> bool {
        match line {
            Line::ChipEnable => self.chip_enable,
            Line::ParallelLoad => self.parallel_load,
            Line::Clock => self.clock,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: Event) {
        self.events.push(event).expect("event log full");
    }

    fn drive(&mut self, line: Line, high: bool) {
        // The register clock is CP OR'ed with the inhibit line.
        let clock_before = self.clock || self.chip_enable;

        match line {
            Line::ChipEnable => self.chip_enable = high,
            Line::ParallelLoad => self.parallel_load = high,
            Line::Clock => self.clock = high,
        }
        self.record(if high { Event::High(line) } else { Event::Low(line) });

        if !self.parallel_load {
            self.regs = self.inputs;
            return;
        }

        let clock_after = self.clock || self.chip_enable;
        if !clock_before && clock_after {
            for reg in self.regs.iter_mut() {
                *reg <<= 1;
            }
        }
    }

    /// Serial outputs (QH) of all registers, register `n` on bit `n`.
    fn outputs(&mut self) -> u8 {
        let value = self
            .regs
            .iter()
            .enumerate()
            .fold(0, |acc, (n, reg)| acc | ((reg >> 7) << n));
        self.record(Event::Read(value));
        value
    }
}

/// Bit `bit` of every input byte, register `n` on bit `n`.
pub fn bit_plane(inputs: &[u8; PORT_COUNT], bit: u8) -> u8 {
    inputs
        .iter()
        .enumerate()
        .fold(0, |acc, (n, byte)| acc | (((byte >> bit) & 1) << n))
}

pub struct SimPin<'a> {
    bus: &'a RefCell<Bus>,
    line: Line,
}

impl<'a> SimPin<'a> {
    pub fn new(bus: &'a RefCell<Bus>, line: Line) -> Self {
        Self { bus, line }
    }

    pub fn line(&self) -> Line {
        self.line
    }
}

impl ErrorType for SimPin<'_> {
    type Error = Infallible;
}

impl OutputPin for SimPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.borrow_mut().drive(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.borrow_mut().drive(self.line, true);
        Ok(())
    }
}

pub struct SimData<'a>(&'a RefCell<Bus>);

impl DataPort for SimData<'_> {
    fn read(&mut self) -> u8 {
        self.0.borrow_mut().outputs()
    }
}

pub struct SimDelay<'a>(&'a RefCell<Bus>);

impl<'a> SimDelay<'a> {
    pub fn new(bus: &'a RefCell<Bus>) -> Self {
        Self(bus)
    }
}

impl DelayNs for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().record(Event::Delay(ns));
    }
}

/// Data port returning a fixed sequence of reads, then zeros.
pub struct ScriptedPort {
    reads: [u8; PORT_COUNT],
    next: usize,
}

impl ScriptedPort {
    pub fn new(reads: [u8; PORT_COUNT]) -> Self {
        Self { reads, next: 0 }
    }
}

impl DataPort for ScriptedPort {
    fn read(&mut self) -> u8 {
        let value = self.reads.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        value
    }
}

#[derive(Debug)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin whose every write fails.
pub struct FaultyPin;

impl ErrorType for FaultyPin {
    type Error = PinFault;
}

impl OutputPin for FaultyPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

pub fn sim_pins(bus: &RefCell<Bus>) -> ControlPins<SimPin<'_>, SimPin<'_>, SimPin<'_>> {
    ControlPins {
        chip_enable: SimPin::new(bus, Line::ChipEnable),
        parallel_load: SimPin::new(bus, Line::ParallelLoad),
        clock: SimPin::new(bus, Line::Clock),
    }
}

/// Reader wired entirely to the simulated bank.
pub fn sim_reader(bus: &RefCell<Bus>, config: ReaderConfig) -> SimReader<'_> {
    ShiftRegisterReader::new(sim_pins(bus), SimData(bus), SimDelay::new(bus), config)
}
