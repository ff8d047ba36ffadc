//! Probe loop example: Sampling the input bank and driving state from it
//!
//! This example demonstrates:
//! - Wiring a ShiftRegisterReader to (simulated) HAL pins
//! - Configuring the pulse width for a given core clock
//! - Reading the six port bytes and the 48-input bitmap
//! - Staging state edits and committing them once per loop pass

use std::{cell::Cell, convert::Infallible, rc::Rc};

use circuit_tap::prelude::*;
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};

// ============ Simulated Hardware ============
// On a board these come from the HAL crate. Here the data port just walks
// through a pattern so every pass produces different bytes.

struct Pin {
    name: &'static str,
    level: Rc<Cell<bool>>,
}

impl ErrorType for Pin {
    type Error = Infallible;
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

struct PatternPort {
    counter: u8,
}

impl DataPort for PatternPort {
    fn read(&mut self) -> u8 {
        self.counter = self.counter.wrapping_mul(5).wrapping_add(3);
        self.counter
    }
}

struct SpinDelay;

impl DelayNs for SpinDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

fn pin(name: &'static str) -> Pin {
    Pin {
        name,
        level: Rc::new(Cell::new(false)),
    }
}

fn main() -> Result<(), TapError> {
    println!("=== Probe Loop Example ===\n");

    // ATmega4809 at 20 MHz, hold each pulse for four cycles
    let config = ReaderConfig::new()
        .with_pulse_width(PulseWidth::from_cycles(4, 20_000_000))
        .with_chip_enable_after(ChipEnableAfter::Inhibit);
    println!("Pulse width: {} ns", config.pulse_width.as_nanos());

    let pins = ControlPins {
        chip_enable: pin("CEB"),
        parallel_load: pin("LOADB"),
        clock: pin("CLK"),
    };
    let mut reader = ShiftRegisterReader::new(pins, PatternPort { counter: 0 }, SpinDelay, config);
    reader.init()?;

    let mut state = StateMachine::default();

    for pass in 0..4 {
        reader.sample()?;
        let snapshot = reader.snapshot();

        print!("Pass {pass}:");
        for port in Port::ALL {
            print!(" {port}=0x{:02X}", snapshot.port(port));
        }
        println!("  ({} inputs high)", snapshot.active_count());

        // Policy lives here, not in the core: arm once port A sees line 0 high,
        // run while armed, flag an error if everything reads high.
        if snapshot.input(Port::A, 0) {
            state.set_arm(ArmState::Armed);
        }
        if state.arm() == ArmState::Armed {
            state.set_run_state(RunState::Running);
        }
        state.set_error(snapshot.bytes().iter().all(|b| *b == 0x3F));

        if state.commit() {
            println!("  state -> {}", state.state());
        } else {
            state.discard();
        }
    }

    // Index access is bounds checked
    match reader.byte(6) {
        Ok(byte) => println!("\nUnexpected byte 0x{byte:02X}"),
        Err(err) => println!("\nbyte(6): {err}"),
    }

    let (pins, _, _) = reader.release();
    println!(
        "Lines after release: {}={} {}={} {}={}",
        pins.chip_enable.name,
        pins.chip_enable.level.get(),
        pins.parallel_load.name,
        pins.parallel_load.level.get(),
        pins.clock.name,
        pins.clock.level.get(),
    );

    Ok(())
}
