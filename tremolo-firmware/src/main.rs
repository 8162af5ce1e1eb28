//! Tremolo - Vibratory Feed Actuator Firmware
//!
//! Main firmware binary for RP2040-based feed controllers. Cycles a
//! stepper-driven linear actuator through continuous feed, alternating
//! vibration, and full-stop phases, with a three-button operator
//! override (stop outranks vibrate outranks advance).

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::Pio;
use {defmt_rtt as _, panic_probe as _};

use tremolo_hal_rp2040::buttons::ButtonPanel;
use tremolo_hal_rp2040::pio::StepGeneratorConfig;
use tremolo_hal_rp2040::stepper::PioStepper;

mod channels;
mod tasks;

// Board pin assignments (SKR Pico: STEP=GPIO11, DIR=GPIO10, ENABLE=GPIO12;
// operator buttons on the free endstop header GPIOs)
const STEP_PIN: u8 = 11;
const DIR_PIN: u8 = 10;
const ENABLE_PIN: u8 = 12;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tremolo firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Setup PIO0 for step pulse generation
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);

    let stepper_config = StepGeneratorConfig {
        step_pin: STEP_PIN,
        dir_pin: DIR_PIN,
        enable_pin: ENABLE_PIN,
        enable_inverted: true,
    };

    let stepper = PioStepper::new(
        &mut common,
        sm0,
        p.PIN_11,
        AnyPin::from(p.PIN_10),
        AnyPin::from(p.PIN_12),
        stepper_config,
    );
    info!("PIO stepper initialized");

    // Operator buttons, active low with internal pull-ups
    let panel = ButtonPanel::new(
        Input::new(p.PIN_5, Pull::Up), // stop
        Input::new(p.PIN_4, Pull::Up), // vibrate
        Input::new(p.PIN_3, Pull::Up), // advance
    );
    info!("Button inputs initialized");

    // Spawn tasks
    spawner.spawn(tasks::stepper_task(stepper)).unwrap();
    spawner.spawn(tasks::control_task(panel)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
