use embedded_hal::{digital, i2c};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("{0} not found")]
    NotFound(Lookup),
    #[error("bus transfer for register {addr:#04x} failed: {kind:?}")]
    Transport { addr: u8, kind: i2c::ErrorKind },
    #[error("control signal failed: {0:?}")]
    Signal(digital::ErrorKind),
    #[error("wrong chip identifier {found:#06x}")]
    DeviceNotFound { found: u16 },
    #[error("logic fault: {0}")]
    LogicFault(Fault),
}

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lookup {
    Mode { width: u32, height: u32 },
    FormatIndex(u32),
    FrameSizeIndex(u32),
}

impl core::fmt::Display for Lookup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Lookup::Mode { width, height } => write!(f, "mode {}x{}", width, height),
            Lookup::FormatIndex(i) => write!(f, "format index {}", i),
            Lookup::FrameSizeIndex(i) => write!(f, "frame size index {}", i),
        }
    }
}

/// Caller contract violations. These are bugs in the caller, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// More power-off calls than power-on calls.
    PowerUnderflow,
}

impl core::fmt::Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Fault::PowerUnderflow => f.write_str("power reference count underflow"),
        }
    }
}

impl Error {
    pub(crate) fn transport<E: i2c::Error>(addr: u8, err: E) -> Self {
        Error::Transport {
            addr,
            kind: err.kind(),
        }
    }

    pub(crate) fn signal<E: digital::Error>(err: E) -> Self {
        Error::Signal(err.kind())
    }
}
