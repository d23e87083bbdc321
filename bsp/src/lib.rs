#![no_std]

pub use embassy_rp;
use embassy_rp::i2c;
use embassy_rp::peripherals;
use embassy_rp::Peri;

pub type StatusLed = Peri<'static, peripherals::PIN_25>;

// I2C (SCCB)
pub type I2cData = peripherals::PIN_12;
pub type I2cClock = peripherals::PIN_13;
pub type I2c = i2c::I2c<'static, peripherals::I2C0, i2c::Blocking>;

// Camera control
pub type CamMclk = peripherals::PIN_8;
pub type CamPwdn = peripherals::PIN_14;
pub type CamReset = peripherals::PIN_15;

pub struct CamPins {
    pub mclk: Peri<'static, CamMclk>,
    pub pwdn: Peri<'static, CamPwdn>,
    pub reset: Peri<'static, CamReset>,
}

pub struct Board {
    pub status_led: StatusLed,

    pub i2c0: Peri<'static, peripherals::I2C0>,
    pub i2c_sda: Peri<'static, I2cData>,
    pub i2c_scl: Peri<'static, I2cClock>,

    /// Drives MCLK on GPIO8 (PWM4 A).
    pub mclk_pwm: Peri<'static, peripherals::PWM_SLICE4>,
    pub cam_pins: CamPins,

    pub usb: Peri<'static, peripherals::USB>,
}

impl Board {
    pub fn new(p: embassy_rp::Peripherals) -> Self {
        Self {
            status_led: p.PIN_25,

            i2c0: p.I2C0,
            i2c_sda: p.PIN_12,
            i2c_scl: p.PIN_13,

            mclk_pwm: p.PWM_SLICE4,
            cam_pins: CamPins {
                mclk: p.PIN_8,
                pwdn: p.PIN_14,
                reset: p.PIN_15,
            },

            usb: p.USB,
        }
    }
}
