use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;

use crate::config::{Config, PIXEL_RATE, XCLK_MAX_HZ, XCLK_MIN_HZ};
use crate::error::{Error, Lookup, Result};
use crate::format::{find_pixel_format, FrameFormat, MbusCode, PixelFormat, DEFAULT_FORMAT, FORMATS};
use crate::mode::{find_mode, Mode, ModeId, DEFAULT_MODE, MODES};
use crate::power::{PowerSequencer, PowerState, ReferenceClock};
use crate::regs::{CHIP_ID_H, CHIP_ID_L, FLIP_CONTROL, FLIP_HORIZONTAL, FLIP_VERTICAL, PAGE_SELECT};
use crate::sccb::Sccb;
use crate::subdev::{check_pad, Control, FormatRequest, FrameSizeRange, SensorSubdev, Which};
use crate::tables;

/// The hardware a sensor is attached to. Handed back by [`Gc2145::detach`].
pub struct Parts<I2C, PWDN, RST, CLK, D> {
    pub i2c: I2C,
    pub pwdn: PWDN,
    pub reset: RST,
    pub clock: CLK,
    pub delay: D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    pub format: FrameFormat,
    pub mode: ModeId,
    pub power: PowerState,
    pub power_count: u32,
    pub streaming: bool,
}

fn flip_bit(control: Control) -> Option<u8> {
    match control {
        Control::HFlip => Some(FLIP_HORIZONTAL),
        Control::VFlip => Some(FLIP_VERTICAL),
        Control::PixelRate => None,
    }
}

struct Inner<I2C, PWDN, RST, CLK, D> {
    sccb: Sccb<I2C>,
    power: PowerSequencer<PWDN, RST, CLK>,
    delay: D,
    mode: &'static Mode,
    pixel: &'static PixelFormat,
    format: FrameFormat,
    streaming: bool,
}

impl<I2C, PWDN, RST, CLK, D> Inner<I2C, PWDN, RST, CLK, D>
where
    I2C: I2c,
    PWDN: OutputPin,
    RST: OutputPin,
    CLK: ReferenceClock,
    D: DelayNs,
{
    fn read_chip_id(&mut self) -> Result<u16> {
        let hi = self.sccb.read_reg(CHIP_ID_H)?;
        let lo = self.sccb.read_reg(CHIP_ID_L)?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    fn identify(&mut self, config: &Config) -> Result<u16> {
        let was_off = self.power.count() == 0;
        if was_off {
            self.power.acquire(&mut self.delay)?;
        }

        match self.read_chip_id() {
            Ok(id) if id == config.chip_id => {
                log::info!("found GC2145, id {:#06x}", id);
                if was_off {
                    self.power.release()?;
                }
                Ok(id)
            }
            Ok(id) => {
                log::error!("chip id {:#06x} does not match {:#06x}", id, config.chip_id);
                self.power_off_after_error();
                self.streaming = false;
                Err(Error::DeviceNotFound { found: id })
            }
            Err(e) => {
                log::error!("chip id read failed: {}", e);
                self.power_off_after_error();
                self.streaming = false;
                Err(e)
            }
        }
    }

    fn into_parts(self) -> Parts<I2C, PWDN, RST, CLK, D> {
        let (pwdn, reset, clock) = self.power.release_parts();
        Parts {
            i2c: self.sccb.release(),
            pwdn,
            reset,
            clock,
            delay: self.delay,
        }
    }

    fn power_off_after_error(&mut self) {
        if let Err(e) = self.power.force_off() {
            log::warn!("power off after error failed: {}", e);
        }
    }

    /// Init, page 0, format patch and optionally the mode crop. Any failure
    /// leaves the register state unknown.
    fn program(&mut self, mode: &Mode, pixel: &PixelFormat, config: &Config) -> Result<()> {
        self.sccb.apply(&tables::INIT, &mut self.delay)?;
        self.sccb.write_reg(PAGE_SELECT, 0x00)?;
        self.sccb.apply(pixel.patch, &mut self.delay)?;
        if config.apply_mode_program {
            self.sccb.apply(mode.program, &mut self.delay)?;
        }
        Ok(())
    }

    fn power_on(&mut self, config: &Config) -> Result<()> {
        if !self.power.acquire(&mut self.delay)? {
            return Ok(());
        }
        let (mode, pixel) = (self.mode, self.pixel);
        if let Err(e) = self.program(mode, pixel, config) {
            log::error!("programming {} on power up failed", self.format.code);
            self.power_off_after_error();
            return Err(e);
        }
        Ok(())
    }

    fn power_off(&mut self) -> Result<()> {
        if self.power.release()? {
            self.streaming = false;
        }
        Ok(())
    }

    fn commit(
        &mut self,
        mode: &'static Mode,
        pixel: &'static PixelFormat,
        format: FrameFormat,
        config: &Config,
    ) -> Result<FrameFormat> {
        // Off: hold a reference only for the programming.
        let temporary = self.power.count() == 0;
        if temporary {
            self.power.acquire(&mut self.delay)?;
        }
        if let Err(e) = self.program(mode, pixel, config) {
            log::error!("{}x{} {} not applied: {}", format.width, format.height, pixel.code, e);
            if temporary {
                self.power_off_after_error();
            }
            return Err(e);
        }

        self.mode = mode;
        self.pixel = pixel;
        self.format = format;
        if temporary {
            self.power.release()?;
        }
        Ok(format)
    }

    fn set_flip(&mut self, bit: u8, on: bool, config: &Config) -> Result<()> {
        self.sccb.write_reg(PAGE_SELECT, 0x00)?;
        let current = self.sccb.read_reg(FLIP_CONTROL)?;
        let next = if on { current | bit } else { current & !bit };
        self.sccb.write_reg(FLIP_CONTROL, next)?;
        self.delay.delay_ms(config.flip_settle_ms);
        Ok(())
    }

    fn get_flip(&mut self, bit: u8) -> Result<bool> {
        self.sccb.write_reg(PAGE_SELECT, 0x00)?;
        Ok(self.sccb.read_reg(FLIP_CONTROL)? & bit != 0)
    }

    fn status(&self) -> Status {
        Status {
            format: self.format,
            mode: self.mode.id,
            power: self.power.state(),
            power_count: self.power.count(),
            streaming: self.streaming,
        }
    }
}

/// GC2145 configuration engine.
///
/// All state and every register sequence sit behind one lock. The lock is
/// not reentrant: nothing in here may call back into a public method while
/// holding it.
pub struct Gc2145<M: RawMutex, I2C, PWDN, RST, CLK, D> {
    config: Config,
    inner: Mutex<M, RefCell<Inner<I2C, PWDN, RST, CLK, D>>>,
}

impl<M, I2C, PWDN, RST, CLK, D> Gc2145<M, I2C, PWDN, RST, CLK, D>
where
    M: RawMutex,
    I2C: I2c,
    PWDN: OutputPin,
    RST: OutputPin,
    CLK: ReferenceClock,
    D: DelayNs,
{
    /// Check the reference clock, identify the chip and leave it powered off
    /// with the default format (SVGA, UYVY) committed.
    ///
    /// On failure the hardware comes back with the error, powered off.
    #[allow(clippy::type_complexity)]
    pub fn attach(
        config: Config,
        parts: Parts<I2C, PWDN, RST, CLK, D>,
    ) -> core::result::Result<Self, (Error, Parts<I2C, PWDN, RST, CLK, D>)> {
        let rate = parts.clock.rate_hz();
        if !(XCLK_MIN_HZ..=XCLK_MAX_HZ).contains(&rate) {
            log::error!(
                "reference clock {} Hz outside {}..={} Hz",
                rate,
                XCLK_MIN_HZ,
                XCLK_MAX_HZ
            );
            return Err((
                Error::InvalidArgument("reference clock rate out of range"),
                parts,
            ));
        }

        let mut inner = Inner {
            sccb: Sccb::new(parts.i2c, config.address),
            power: PowerSequencer::new(parts.pwdn, parts.reset, parts.clock, &config),
            delay: parts.delay,
            mode: DEFAULT_MODE,
            pixel: DEFAULT_FORMAT,
            format: FrameFormat::default_for(DEFAULT_MODE),
            streaming: false,
        };
        if let Err(e) = inner.identify(&config) {
            return Err((e, inner.into_parts()));
        }
        log::info!("attached at {:#04x}, xclk {} Hz", config.address, rate);

        Ok(Self {
            config,
            inner: Mutex::new(RefCell::new(inner)),
        })
    }

    /// Power off if still referenced and hand the hardware back.
    pub fn detach(self) -> Parts<I2C, PWDN, RST, CLK, D> {
        let mut inner = self.inner.into_inner().into_inner();
        if inner.power.count() > 0 {
            log::warn!("detaching with {} power references held", inner.power.count());
            inner.power_off_after_error();
        }
        inner.into_parts()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the chip id, powering the sensor for the read if it is off.
    /// Any failure leaves the sensor powered off with no references held.
    pub fn identify(&self) -> Result<u16> {
        self.with_inner(|inner| inner.identify(&self.config))
    }

    pub fn status(&self) -> Status {
        self.with_inner(|inner| inner.status())
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut Inner<I2C, PWDN, RST, CLK, D>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

impl<M, I2C, PWDN, RST, CLK, D> SensorSubdev for Gc2145<M, I2C, PWDN, RST, CLK, D>
where
    M: RawMutex,
    I2C: I2c,
    PWDN: OutputPin,
    RST: OutputPin,
    CLK: ReferenceClock,
    D: DelayNs,
{
    fn enumerate_formats(&self, pad: u32, index: u32) -> Result<MbusCode> {
        check_pad(pad)?;
        FORMATS
            .get(index as usize)
            .map(|f| f.code)
            .ok_or(Error::NotFound(Lookup::FormatIndex(index)))
    }

    fn enumerate_frame_sizes(
        &self,
        pad: u32,
        index: u32,
        code: MbusCode,
    ) -> Result<FrameSizeRange> {
        check_pad(pad)?;
        if find_pixel_format(code).code != code {
            return Err(Error::InvalidArgument("unsupported media bus code"));
        }
        let mode = MODES
            .get(index as usize)
            .ok_or(Error::NotFound(Lookup::FrameSizeIndex(index)))?;
        Ok(FrameSizeRange {
            min_width: mode.active_width,
            max_width: mode.active_width,
            min_height: mode.active_height,
            max_height: mode.active_height,
        })
    }

    fn get_format(&self, pad: u32, which: Which<'_>) -> Result<FrameFormat> {
        check_pad(pad)?;
        match which {
            Which::Active => Ok(self.with_inner(|inner| inner.format)),
            Which::Trial(slot) => Ok(slot.format),
        }
    }

    fn set_format(
        &self,
        pad: u32,
        which: Which<'_>,
        request: &FormatRequest,
    ) -> Result<FrameFormat> {
        check_pad(pad)?;
        let mode = find_mode(request.width, request.height, request.policy)?;
        let pixel = find_pixel_format(request.code);
        let format = FrameFormat::new(mode.active_width, mode.active_height, pixel);

        match which {
            Which::Trial(slot) => {
                slot.format = format;
                Ok(format)
            }
            Which::Active => {
                self.with_inner(|inner| inner.commit(mode, pixel, format, &self.config))
            }
        }
    }

    fn set_power(&self, on: bool) -> Result<()> {
        self.with_inner(|inner| {
            if on {
                inner.power_on(&self.config)
            } else {
                inner.power_off()
            }
        })
    }

    fn set_control(&self, control: Control, value: i32) -> Result<()> {
        let Some(bit) = flip_bit(control) else {
            return Err(Error::InvalidArgument("control is read-only"));
        };
        let on = match value {
            0 => false,
            1 => true,
            _ => return Err(Error::InvalidArgument("flip value must be 0 or 1")),
        };
        self.with_inner(|inner| inner.set_flip(bit, on, &self.config))
    }

    fn get_control(&self, control: Control) -> Result<i32> {
        match flip_bit(control) {
            Some(bit) => self.with_inner(|inner| inner.get_flip(bit)).map(i32::from),
            None => Ok(PIXEL_RATE as i32),
        }
    }

    fn set_stream(&self, enable: bool) -> Result<()> {
        self.with_inner(|inner| {
            inner.streaming = enable;
            log::info!("stream {}", if enable { "on" } else { "off" });
        });
        Ok(())
    }

    fn log_status(&self) {
        let status = self.status();
        log::info!(
            "{}x{} {} ({:?}), power {:?} x{}, streaming {}",
            status.format.width,
            status.format.height,
            status.format.code,
            status.mode,
            status.power,
            status.power_count,
            status.streaming
        );
    }
}
