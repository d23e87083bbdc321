use crate::regs::{CHIP_ID, GC2145_ADDR};

/// Reference clock limits accepted at attach.
pub const XCLK_MIN_HZ: u32 = 6_000_000;
pub const XCLK_MAX_HZ: u32 = 48_000_000;

/// Output pixel rate advertised through [`crate::Control::PixelRate`].
pub const PIXEL_RATE: u32 = 120_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: u8,
    pub chip_id: u16,
    pub pwdn_polarity: Polarity,
    pub reset_polarity: Polarity,
    /// Wait after each power-down edge.
    pub power_settle_us: u32,
    /// Width of each reset edge.
    pub reset_pulse_us: u32,
    /// Wait after a flip register update.
    pub flip_settle_ms: u32,
    /// Also write the per-mode crop/subsample program on an active format
    /// change. Off by default: init plus format patch leaves the sensor in
    /// its SVGA window regardless of the resolved mode.
    pub apply_mode_program: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: GC2145_ADDR,
            chip_id: CHIP_ID,
            pwdn_polarity: Polarity::ActiveHigh,
            reset_polarity: Polarity::ActiveLow,
            power_settle_us: 100,
            reset_pulse_us: 100,
            flip_settle_ms: 20,
            apply_mode_program: false,
        }
    }
}
