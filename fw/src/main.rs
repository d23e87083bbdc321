#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::USB;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::usb;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::{Delay, Duration, Timer};
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use gc2145::{
    Config, Control, FormatRequest, Gc2145, MbusCode, Parts, SensorSubdev, Which,
};
use panic_probe as _;
use static_cell::{ConstStaticCell, StaticCell};

mod logger;
mod mclk;

use crate::mclk::PwmClock;

use gc2145_bsp::Board;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => usb::InterruptHandler<USB>;
});

static USB_CDC_ACM_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC_BUF: ConstStaticCell<[u8; 256]> = ConstStaticCell::new([0u8; 256]);
static USB_BOS_DESC_BUF: ConstStaticCell<[u8; 256]> = ConstStaticCell::new([0u8; 256]);
static USB_CONTROL_BUF_BUF: ConstStaticCell<[u8; 64]> = ConstStaticCell::new([0u8; 64]);
static USB_MSOS_DESC_BUF: ConstStaticCell<[u8; 256]> = ConstStaticCell::new([0u8; 256]);

#[embassy_executor::task]
async fn usb_defmt_logger(
    mut driver: embassy_usb::UsbDevice<'static, embassy_rp::usb::Driver<'static, USB>>,
    tx: embassy_usb::class::cdc_acm::Sender<'static, embassy_rp::usb::Driver<'static, USB>>,
) {
    join(driver.run(), defmt_embassy_usbserial::logger(tx)).await;
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    logger::init();
    let p = embassy_rp::init(Default::default());
    let board = Board::new(p);

    // --- USB Setup ---
    let driver = embassy_rp::usb::Driver::new(board.usb, Irqs);
    let mut config = embassy_usb::Config::new(0xc0de, 0xcafe);
    config.manufacturer = Some("GC2145");
    config.product = Some("Bring-up");
    config.serial_number = Some("12345678");
    config.max_power = 100;
    config.max_packet_size_0 = 64;

    let state = USB_CDC_ACM_STATE.init(State::new());

    let mut builder = embassy_usb::Builder::new(
        driver,
        config,
        USB_CONFIG_DESC_BUF.take(),
        USB_BOS_DESC_BUF.take(),
        USB_MSOS_DESC_BUF.take(),
        USB_CONTROL_BUF_BUF.take(),
    );

    let class = CdcAcmClass::new(&mut builder, state, 64);
    let (tx, _rx) = class.split();

    let usb = builder.build();
    spawner.must_spawn(usb_defmt_logger(usb, tx));

    defmt::info!("USB Logging initialized");

    let mut led = Output::new(board.status_led, Level::Low);

    // 1. MCLK (PWM slice 4 A), gated until power up
    let pwm = Pwm::new_output_a(board.mclk_pwm, board.cam_pins.mclk, PwmConfig::default());
    let clock = PwmClock::new(pwm);

    // 2. I2C0 for SCCB
    let mut i2c_config = embassy_rp::i2c::Config::default();
    i2c_config.frequency = 100_000;
    let i2c = embassy_rp::i2c::I2c::new_blocking(
        board.i2c0,
        board.i2c_scl,
        board.i2c_sda,
        i2c_config,
    );

    // 3. Control lines idle in power-down, held in reset
    let pwdn = Output::new(board.cam_pins.pwdn, Level::High);
    let reset = Output::new(board.cam_pins.reset, Level::Low);

    // Give the host time to open the log port.
    Timer::after(Duration::from_millis(3000)).await;

    let mut parts = Parts {
        i2c,
        pwdn,
        reset,
        clock,
        delay: Delay,
    };
    let sensor = loop {
        match Gc2145::<NoopRawMutex, _, _, _, _, _>::attach(Config::default(), parts) {
            Ok(sensor) => break sensor,
            Err((e, returned)) => {
                defmt::error!("GC2145 attach failed: {}, retrying", e);
                parts = returned;
                led.toggle();
                Timer::after(Duration::from_millis(1000)).await;
            }
        }
    };

    let request = FormatRequest::new(640, 480, MbusCode::YUYV8_2X8);
    let bring_up = sensor
        .set_power(true)
        .and_then(|_| sensor.set_format(0, Which::Active, &request))
        .and_then(|format| {
            defmt::info!("negotiated {}", format);
            sensor.set_control(Control::VFlip, 1)
        })
        .and_then(|_| sensor.set_stream(true));
    if let Err(e) = bring_up {
        defmt::error!("GC2145 bring-up failed: {}", e);
    }

    loop {
        defmt::info!("{}", sensor.status());
        led.toggle();
        Timer::after(Duration::from_millis(5000)).await;
    }
}
