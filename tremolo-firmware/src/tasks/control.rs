//! Control loop task
//!
//! Runs the arbiter/state-machine cycle at a fixed tick rate and relays
//! speed commands to the stepper task.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use tremolo_core::clock;
use tremolo_core::config::ControllerConfig;
use tremolo_core::controller::CycleController;
use tremolo_core::traits::Actuator;
use tremolo_hal_rp2040::buttons::ButtonPanel;

use crate::channels::SPEED_CMD;

/// Control loop period in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1;

/// Actuator front-end for the controller.
///
/// Pulse timing runs in the PIO block, so there is no per-tick work
/// here; commanded rates are forwarded to the stepper task. The signal
/// is latest-wins and resends of an unchanged rate are skipped, so the
/// stepper task only wakes on real changes.
struct SpeedRelay {
    last_sent: Option<i32>,
}

impl Actuator for SpeedRelay {
    fn set_speed(&mut self, rate: i32) {
        if self.last_sent != Some(rate) {
            self.last_sent = Some(rate);
            SPEED_CMD.signal(rate);
        }
    }
}

/// Control task - owns the cycle controller and the button panel
#[embassy_executor::task]
pub async fn control_task(panel: ButtonPanel<'static>) {
    info!("Control task started");

    let start = Instant::now();
    let mut controller =
        CycleController::new(ControllerConfig::new(), clock::Instant::from_millis(0));
    let mut relay = SpeedRelay { last_sent: None };

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        // Millisecond timestamp; wraps after ~49.7 days, which the
        // core's modular arithmetic tolerates.
        let now = clock::Instant::from_millis(start.elapsed().as_millis() as u32);

        if let Some(change) = controller.service(now, &panel, &mut relay) {
            info!("Phase change: {:?}", change.phase);
        }
    }
}
