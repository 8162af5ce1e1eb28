//! PIO-based stepper motor driver
//!
//! Drives the feed actuator's STEP/DIR/ENABLE interface. Step pulses
//! come from a PIO state machine; direction and enable are plain GPIO.

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::pio::{Common, Config, Direction as PioDirection, Instance, PioPin, StateMachine};
use embassy_rp::Peri;
use fixed::types::U24F8;

use crate::pio::{calc_clock_divider, clamp_step_rate, StepGeneratorConfig};

/// PIO stepper driver
///
/// Controls the actuator's stepper using PIO for precise step pulse
/// timing. The commanded rate is a signed steps-per-second value: sign
/// selects direction, zero halts pulse generation.
pub struct PioStepper<'d, PIO: Instance, const SM: usize> {
    /// PIO state machine for step generation
    sm: StateMachine<'d, PIO, SM>,
    /// Direction GPIO output
    dir_pin: Output<'d>,
    /// Enable GPIO output
    enable_pin: Output<'d>,
    /// Configuration
    config: StepGeneratorConfig,
    /// Current signed rate in steps per second
    current_rate_sps: i32,
    /// Is currently generating pulses
    running: bool,
    /// Current direction (true = forward)
    forward: bool,
}

impl<'d, PIO: Instance, const SM: usize> PioStepper<'d, PIO, SM> {
    /// Create a new PIO stepper driver
    ///
    /// # Arguments
    /// * `common` - PIO common resources (for loading program)
    /// * `sm` - State machine to use
    /// * `step_pin` - GPIO pin for step pulses (must be PIO-capable)
    /// * `dir_pin` - GPIO pin for direction control
    /// * `enable_pin` - GPIO pin for enable control
    /// * `config` - Stepper configuration
    pub fn new<STEP: PioPin, DIR: Pin, EN: Pin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        step_pin: Peri<'d, STEP>,
        dir_pin: Peri<'d, DIR>,
        enable_pin: Peri<'d, EN>,
        config: StepGeneratorConfig,
    ) -> Self {
        // Square wave on the step pin: 32 cycles high, 32 low, so the
        // clock divider range reaches down to the slow feed rate.
        let prg = pio::pio_asm!(
            ".wrap_target",
            "set pins, 1 [31]", // Step pin high
            "set pins, 0 [31]", // Step pin low
            ".wrap"
        );

        let installed = common.load_program(&prg.program);

        // Create the PIO pin for the step output
        let step_pio_pin = common.make_pio_pin(step_pin);

        // Configure state machine
        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&step_pio_pin]);
        cfg.set_set_pins(&[&step_pio_pin]);

        // Start with maximum divider (effectively stopped)
        // FixedU32<U8> has 24 integer bits and 8 fractional bits
        cfg.clock_divider = U24F8::from_bits(0xFFFF_FF00);

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&step_pio_pin]);

        // Setup direction pin - start forward
        let dir_pin = Output::new(dir_pin, Level::Low);

        // Setup enable pin - start disabled
        let enable_level = if config.enable_inverted {
            Level::High // Active low, so high = disabled
        } else {
            Level::Low // Active high, so low = disabled
        };
        let enable_pin = Output::new(enable_pin, enable_level);

        Self {
            sm,
            dir_pin,
            enable_pin,
            config,
            current_rate_sps: 0,
            running: false,
            forward: true,
        }
    }

    /// Enable the stepper driver
    pub fn enable(&mut self) {
        if self.config.enable_inverted {
            self.enable_pin.set_low();
        } else {
            self.enable_pin.set_high();
        }
    }

    /// Disable the stepper driver
    ///
    /// When disabled, the motor is free to rotate and does not hold
    /// position.
    pub fn disable(&mut self) {
        if self.config.enable_inverted {
            self.enable_pin.set_high();
        } else {
            self.enable_pin.set_low();
        }
    }

    /// Command a signed step rate in steps per second
    ///
    /// Sign selects direction (positive = forward), magnitude clamps to
    /// the generator's maximum frequency, zero stops pulse generation.
    pub fn set_rate(&mut self, rate_sps: i32) {
        if rate_sps == 0 {
            self.stop();
            return;
        }

        let forward = rate_sps > 0;
        if forward != self.forward {
            self.set_forward(forward);
        }

        let freq = clamp_step_rate(rate_sps.unsigned_abs());
        let (int_div, frac_div) = calc_clock_divider(freq);

        // Convert to U24F8: integer in upper 24 bits, fractional in lower 8 bits
        let divider_bits = ((int_div as u32) << 8) | (frac_div as u32);
        self.sm.set_clock_divider(U24F8::from_bits(divider_bits));

        if !self.running {
            self.sm.set_enable(true);
            self.running = true;
        }

        self.current_rate_sps = if forward {
            freq as i32
        } else {
            -(freq as i32)
        };
    }

    /// Set direction
    fn set_forward(&mut self, forward: bool) {
        self.forward = forward;
        if forward {
            self.dir_pin.set_low();
        } else {
            self.dir_pin.set_high();
        }
    }

    /// Get current signed rate in steps per second
    pub fn current_rate(&self) -> i32 {
        self.current_rate_sps
    }

    /// Stop pulse generation
    pub fn stop(&mut self) {
        self.sm.set_enable(false);
        self.running = false;
        self.current_rate_sps = 0;
    }

    /// Check if running
    pub fn is_running(&self) -> bool {
        self.running
    }
}
