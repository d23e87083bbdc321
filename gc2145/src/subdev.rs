//! The capability set a capture framework drives a sensor through.

use crate::error::{Error, Result};
use crate::format::{FrameFormat, MbusCode};
use crate::mode::ModeMatch;

/// The sensor has a single source pad.
pub const SOURCE_PAD: u32 = 0;

pub(crate) fn check_pad(pad: u32) -> Result<()> {
    if pad != SOURCE_PAD {
        return Err(Error::InvalidArgument("pad index out of range"));
    }
    Ok(())
}

/// Scratch format owned by one negotiating caller. Never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrialFormat {
    pub(crate) format: FrameFormat,
}

impl TrialFormat {
    pub fn format(&self) -> &FrameFormat {
        &self.format
    }
}

/// Which format a get/set request targets.
#[derive(Debug)]
pub enum Which<'a> {
    /// The committed format, programmed into the sensor.
    Active,
    /// The caller's own trial slot. No hardware access, no commit.
    Trial(&'a mut TrialFormat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormatRequest {
    pub width: u32,
    pub height: u32,
    pub code: MbusCode,
    pub policy: ModeMatch,
}

impl FormatRequest {
    pub const fn new(width: u32, height: u32, code: MbusCode) -> Self {
        Self {
            width,
            height,
            code,
            policy: ModeMatch::Nearest,
        }
    }

    pub const fn exact(self) -> Self {
        Self {
            policy: ModeMatch::Exact,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Control {
    HFlip,
    VFlip,
    /// Read-only.
    PixelRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameSizeRange {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

pub trait SensorSubdev {
    /// Media-bus code at `index` in the format catalog.
    fn enumerate_formats(&self, pad: u32, index: u32) -> Result<MbusCode>;

    /// Discrete frame size at `index` for a supported `code`.
    fn enumerate_frame_sizes(&self, pad: u32, index: u32, code: MbusCode)
        -> Result<FrameSizeRange>;

    fn get_format(&self, pad: u32, which: Which<'_>) -> Result<FrameFormat>;

    /// Resolve `request` to a supported format. Active requests program the
    /// sensor and commit; trial requests only fill the caller's slot.
    fn set_format(&self, pad: u32, which: Which<'_>, request: &FormatRequest)
        -> Result<FrameFormat>;

    fn set_power(&self, on: bool) -> Result<()>;

    fn set_control(&self, control: Control, value: i32) -> Result<()>;

    fn get_control(&self, control: Control) -> Result<i32>;

    fn set_stream(&self, enable: bool) -> Result<()>;

    fn log_status(&self);
}
