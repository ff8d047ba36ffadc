//! Shared state example: Main loop and ISR editing one state machine
//!
//! This example demonstrates:
//! - A SharedStateMachine in a static
//! - A simulated button ISR toggling arm state and cycling the clock mode
//! - The main loop observing only committed, consistent states
//! - Non-cancelling toggles when two presses land before a commit

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use circuit_tap::prelude::*;

static STATE: SharedStateMachine = SharedStateMachine::new(DeviceState::new(
    ArmState::Disarmed,
    ClockMode::HighZ,
    RunState::Stopped,
    false,
));

static DONE: AtomicBool = AtomicBool::new(false);

fn main() {
    println!("=== Shared State Example ===\n");

    // Button ISR simulator
    let isr = thread::spawn(|| {
        for press in 0..6 {
            STATE.with(|sm| {
                if press % 2 == 0 {
                    sm.toggle_arm();
                } else {
                    sm.cycle_clock_mode();
                }
                sm.commit();
            });
            thread::sleep(Duration::from_millis(20));
        }
        DONE.store(true, Ordering::Release);
    });

    let mut last = STATE.state();
    println!("Main loop: start {last}");
    while !DONE.load(Ordering::Acquire) {
        let now = STATE.state();
        if now != last {
            println!("Main loop: {now}");
            last = now;
        }
        thread::sleep(Duration::from_millis(5));
    }
    isr.join().unwrap();

    // Two toggles before a commit both target the committed value.
    STATE.with(|sm| {
        let before = sm.arm();
        sm.toggle_arm();
        sm.toggle_arm();
        sm.commit();
        println!("\nDouble toggle: {before:?} -> {:?}", sm.arm());
    });

    println!("Final: {}", STATE.state());
}
