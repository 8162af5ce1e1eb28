//! Stepper drive task
//!
//! Applies commanded rates from the control loop to the PIO stepper.

use defmt::*;
use embassy_rp::peripherals::PIO0;

use tremolo_hal_rp2040::stepper::PioStepper;

use crate::channels::SPEED_CMD;

/// Stepper control task for the feed actuator
///
/// Waits for rate commands and drives the PIO stepper accordingly.
/// Uses PIO0 state machine 0.
#[embassy_executor::task]
pub async fn stepper_task(mut stepper: PioStepper<'static, PIO0, 0>) {
    info!("Stepper task started");

    // The driver stays enabled for the machine's whole powered life;
    // the controller commands zero when the actuator must hold still.
    stepper.enable();

    // Track last command for logging
    let mut last_rate: i32 = 0;

    loop {
        let rate = SPEED_CMD.wait().await;

        if rate == last_rate {
            continue;
        }

        if rate == 0 {
            debug!("Actuator stop");
            stepper.stop();
        } else {
            if last_rate == 0 {
                debug!("Actuator start: {} steps/s", rate);
            } else {
                debug!("Rate change: {} -> {} steps/s", last_rate, rate);
            }
            stepper.set_rate(rate);
        }
        last_rate = rate;
    }
}
