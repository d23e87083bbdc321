//! Configuration engine for the GalaxyCore GC2145 2MP CMOS sensor.
//!
//! Brings the sensor from power-off to a streaming-ready state at a
//! negotiated resolution and pixel format over any `embedded-hal` I2C bus.
//! Frame capture is not handled here.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod format;
pub mod mode;
pub mod power;
pub mod regs;
pub mod sccb;
pub mod sensor;
pub mod sim;
pub mod subdev;
pub mod tables;

pub use config::{Config, Polarity};
pub use error::{Error, Fault, Lookup, Result};
pub use format::{FrameFormat, MbusCode, PixelFormat};
pub use mode::{Mode, ModeId, ModeMatch};
pub use power::{ExternalOscillator, PowerState, ReferenceClock};
pub use sensor::{Gc2145, Parts, Status};
pub use subdev::{Control, FormatRequest, FrameSizeRange, SensorSubdev, TrialFormat, Which};
