//! An in-memory GC2145 for host testing.
//!
//! [`SimulatedSensor`] answers on the control bus like the real part: four
//! register pages behind the page select register, a shared block of system
//! registers, and a read-only chip id. It can be told to NAK a particular
//! write or read to exercise error paths.
//!
//! A sensor and a [`SimPin`] wired to the same [`PowerLine`] model the
//! power-down net: while the line is high the sensor does not answer.

use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::regs::{CHIP_ID, CHIP_ID_H, CHIP_ID_L, GC2145_ADDR, PAGE_SELECT};

const PAGES: usize = 4;
const SYSTEM_BASE: u8 = 0xF0;

/// A power-down net. Starts high: powered down.
#[derive(Debug)]
pub struct PowerLine(AtomicBool);

impl PowerLine {
    pub const fn new() -> Self {
        Self(AtomicBool::new(true))
    }

    pub fn is_high(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn drive(&self, high: bool) {
        self.0.store(high, Ordering::SeqCst);
    }
}

impl Default for PowerLine {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SimulatedSensor {
    address: u8,
    chip_id: u16,
    pages: [[u8; 256]; PAGES],
    system: [u8; 16],
    page: usize,
    pointer: u8,
    writes_attempted: u32,
    writes_completed: u32,
    reads: u32,
    fail_at: Option<u32>,
    fail_read_at: Option<u32>,
    pwdn: Option<&'static PowerLine>,
}

impl Default for SimulatedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSensor {
    pub fn new() -> Self {
        Self::with_chip_id(CHIP_ID)
    }

    pub fn with_chip_id(chip_id: u16) -> Self {
        Self {
            address: GC2145_ADDR,
            chip_id,
            pages: [[0; 256]; PAGES],
            system: [0; 16],
            page: 0,
            pointer: 0,
            writes_attempted: 0,
            writes_completed: 0,
            reads: 0,
            fail_at: None,
            fail_read_at: None,
            pwdn: None,
        }
    }

    /// Stop answering the bus while `line` is high.
    pub fn wired(mut self, line: &'static PowerLine) -> Self {
        self.pwdn = Some(line);
        self
    }

    pub fn is_powered_down(&self) -> bool {
        self.pwdn.is_some_and(|line| line.is_high())
    }

    /// NAK the `k`th register write from now (1-based). One-shot.
    pub fn fail_at_write(&mut self, k: u32) {
        self.fail_at = Some(self.writes_attempted + k);
    }

    /// Fail the `k`th register read from now (1-based). One-shot.
    pub fn fail_at_read(&mut self, k: u32) {
        self.fail_read_at = Some(self.reads + k);
    }

    pub fn writes_attempted(&self) -> u32 {
        self.writes_attempted
    }

    pub fn writes_completed(&self) -> u32 {
        self.writes_completed
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }

    /// Currently selected register page.
    pub fn page(&self) -> u8 {
        self.page as u8
    }

    /// Inspect a register without going through the bus.
    pub fn register(&self, page: u8, addr: u8) -> u8 {
        if addr >= SYSTEM_BASE {
            return self.system_read(addr);
        }
        self.pages[page as usize % PAGES][addr as usize]
    }

    /// Seed a register without going through the bus or the counters.
    pub fn set_register(&mut self, page: u8, addr: u8, val: u8) {
        if addr >= SYSTEM_BASE {
            self.system[(addr - SYSTEM_BASE) as usize] = val;
        } else {
            self.pages[page as usize % PAGES][addr as usize] = val;
        }
    }

    fn system_read(&self, addr: u8) -> u8 {
        match addr {
            CHIP_ID_H => (self.chip_id >> 8) as u8,
            CHIP_ID_L => self.chip_id as u8,
            _ => self.system[(addr - SYSTEM_BASE) as usize],
        }
    }

    fn load(&mut self) -> Result<u8, ErrorKind> {
        self.reads += 1;
        if self.fail_read_at == Some(self.reads) {
            self.fail_read_at = None;
            return Err(ErrorKind::Bus);
        }
        let addr = self.pointer;
        self.pointer = self.pointer.wrapping_add(1);
        Ok(self.register(self.page as u8, addr))
    }

    fn store(&mut self, val: u8) -> Result<(), ErrorKind> {
        self.writes_attempted += 1;
        if self.fail_at == Some(self.writes_attempted) {
            self.fail_at = None;
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
        }

        let addr = self.pointer;
        self.pointer = self.pointer.wrapping_add(1);
        match addr {
            CHIP_ID_H | CHIP_ID_L => {}
            PAGE_SELECT => {
                if val & 0x80 != 0 {
                    self.pages = [[0; 256]; PAGES];
                }
                self.page = (val & 0x03) as usize;
                self.system[(addr - SYSTEM_BASE) as usize] = val & 0x7F;
            }
            a if a >= SYSTEM_BASE => self.system[(a - SYSTEM_BASE) as usize] = val,
            a => self.pages[self.page][a as usize] = val,
        }
        self.writes_completed += 1;
        Ok(())
    }
}

impl ErrorType for SimulatedSensor {
    type Error = ErrorKind;
}

impl I2c for SimulatedSensor {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address || self.is_powered_down() {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let Some((&reg, vals)) = bytes.split_first() else {
                        continue;
                    };
                    self.pointer = reg;
                    for &val in vals {
                        self.store(val)?;
                    }
                }
                Operation::Read(buf) => {
                    for byte in buf.iter_mut() {
                        *byte = self.load()?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// A control line that remembers its level.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimPin {
    high: bool,
    edges: u32,
    line: Option<&'static PowerLine>,
}

impl SimPin {
    /// A pin that also drives `line`.
    pub fn wired(line: &'static PowerLine) -> Self {
        Self {
            high: line.is_high(),
            edges: 0,
            line: Some(line),
        }
    }

    fn set(&mut self, high: bool) {
        self.high = high;
        self.edges += 1;
        if let Some(line) = self.line {
            line.drive(high);
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn edges(&self) -> u32 {
        self.edges
    }
}

impl PinErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.set(true);
        Ok(())
    }
}

/// A delay that only keeps count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimDelay {
    elapsed_ns: u64,
}

impl SimDelay {
    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}
