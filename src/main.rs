#![no_std]
#![no_main]

use bsp::entry;
use cortex_m::prelude::_embedded_hal_adc_OneShot;
use defmt::*;
use defmt_rtt as _;
use embedded_hal::delay::DelayNs;
use panic_probe as _;

// Provide an alias for our BSP so we can switch targets quickly.
use rp_pico as bsp;

use bsp::hal::{
    self,
    clocks::init_clocks_and_plls,
    fugit::RateExtU32,
    gpio::{FunctionI2C, Pin, PullUp},
    pac,
    watchdog::Watchdog,
    Timer,
};
use indoor_rs::lcd::I2cLcd;
use indoor_rs::sensors::SoilProbe;
use indoor_rs::{
    ButtonReader, Clock, Context, DebouncedButtons, HardwareFault, Instant, Relay, Settings,
    Station,
};

/// The Pico timer counts microseconds; the controller wants milliseconds
struct PicoClock(Timer);

impl Clock for PicoClock {
    fn now(&mut self) -> Instant {
        Instant::from_ticks((self.0.get_counter().ticks() / 1_000) as u32)
    }
}

#[entry]
fn main() -> ! {
    info!("Indoor-rs Starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut delay = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let settings = Settings::default();

    // Set up LCD1602 on its I2C backpack
    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio4.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio5.reconfigure();
    let i2c = hal::I2C::i2c0(
        pac.I2C0,
        sda,
        scl,
        100.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );
    let mut lcd = I2cLcd::new(i2c, delay, settings.lcd_address);
    if let Err(fault) = lcd.init() {
        error!("LCD init failed: {}", fault);
    }

    // Buttons pull to ground: 1 = up, 2 = down, 3 = select
    let reader = ButtonReader::new(
        pins.gpio10.into_pull_up_input(),
        pins.gpio11.into_pull_up_input(),
        pins.gpio12.into_pull_up_input(),
    );
    let buttons = DebouncedButtons::new(reader, settings.settle);

    // Set up relay (pump)
    let relay = Relay::new(pins.gpio13.into_push_pull_output(), settings.relay_polarity);

    // Set up soil probe on ADC0
    let mut adc = hal::Adc::new(pac.ADC, &mut pac.RESETS);
    let mut probe_pin = hal::adc::AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    let probe = SoilProbe::new(
        move || -> Result<u16, HardwareFault> {
            adc.read(&mut probe_pin).map_err(|_| HardwareFault::SensorRead)
        },
        settings.calibration,
    );

    let mut clock = PicoClock(delay);
    let mut ctx = Context::new(settings.thresholds);
    let mut station = Station::new(&settings, probe, relay, lcd, buttons);
    station.start(&mut ctx);

    info!("Indoor-rs Ready");

    loop {
        station.tick(&mut ctx, clock.now());
        delay.delay_ms(settings.loop_delay_ms);
    }
}
