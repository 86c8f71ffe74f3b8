//! Tally - Two-Digit Counter Firmware
//!
//! Main firmware binary for the STM32F042-based red/green LED counter.
//! Two buttons count up and down between 0 and 99. The display dims, then
//! blanks and stops the MCU when left alone, and wakes on a button press.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::{bind_interrupts, exti};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use tally_core::counter::CounterEvent;
use tally_core::power::PowerState;
use tally_drivers::display::MultiplexedDisplay;
use tally_drivers::panel::Panel;
use tally_hal_stm32f0::StopMode;

mod boards;
mod config;

bind_interrupts!(struct Irqs {
    EXTI2_3 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI2_3>;
    EXTI4_15 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI4_15>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tally firmware starting...");

    let p = embassy_stm32::init(Default::default());
    let core = unwrap!(cortex_m::Peripherals::take());
    info!("Peripherals initialized");

    let tunables = config::load_tunables();
    info!(
        "Tunables: debounce={} dim_after={} off_after={} on={}us dim_off={}us settle={}ms",
        tunables.debounce_samples,
        tunables.dim_threshold,
        tunables.off_threshold,
        tunables.digit_on_us,
        tunables.dim_off_us,
        tunables.wake_settle_ms
    );

    let board = boards::BOARD;
    info!("Board variant: {}", board.name());
    if let Err(e) = board.pin_map().validate() {
        // Pins are wired by boards.rs regardless; this only flags a bad table
        error!("Pin map invalid: {:?}", e);
    }
    debug!("Pin map: {:?}", board.pin_map());

    let pins = boards::take_pins(p);
    let display = MultiplexedDisplay::new(pins.segments, pins.decimal_point, pins.cathodes);

    let mut panel = Panel::new(
        display,
        pins.up,
        pins.down,
        StopMode::new(core.SCB),
        Delay,
        tunables,
    );

    panel.lamp_test();
    info!("Counter running");

    // Single control loop; nothing else is spawned
    let mut last_power = PowerState::Normal;
    loop {
        let report = panel.step().await;

        match report.event {
            Some(CounterEvent::Accepted { step, changed: true }) => {
                info!("Count {} ({:?}, {:?})", report.count.value(), step, report.color);
            }
            Some(CounterEvent::Accepted { step, changed: false }) => {
                debug!("Press {:?} absorbed at {}", step, report.count.value());
            }
            Some(CounterEvent::PowerOffGesture) => {
                info!("Power-off gesture");
            }
            None => {}
        }

        if let Some(source) = report.wake {
            info!("Woke from STOP ({:?})", source);
        }

        if report.power != last_power {
            debug!("Power state {:?} -> {:?}", last_power, report.power);
            last_power = report.power;
        }
    }
}
