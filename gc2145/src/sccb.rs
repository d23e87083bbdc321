use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::{Error, Result};
use crate::regs::RegisterProgram;

/// Register access over the sensor's control bus.
pub struct Sccb<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Sccb<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn read_reg(&mut self, reg: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(|e| {
                log::error!("read of reg {:#04x} failed: {:?}", reg, e);
                Error::transport(reg, e)
            })?;
        log::trace!("rd {:#04x} -> {:#04x}", reg, buf[0]);
        Ok(buf[0])
    }

    pub fn write_reg(&mut self, reg: u8, val: u8) -> Result<()> {
        self.i2c.write(self.address, &[reg, val]).map_err(|e| {
            log::error!("write of reg {:#04x}={:#04x} failed: {:?}", reg, val, e);
            Error::transport(reg, e)
        })?;
        log::trace!("wr {:#04x} <- {:#04x}", reg, val);
        Ok(())
    }

    /// Write `program` front to back, stopping at the first bus error.
    ///
    /// Delay rows block for their encoded duration and never reach the bus.
    /// Nothing is rolled back on failure: the sensor is left part-way through
    /// the program and must be reprogrammed from a known power state.
    ///
    /// Returns the number of register writes issued.
    pub fn apply<D: DelayNs>(&mut self, program: &RegisterProgram, delay: &mut D) -> Result<usize> {
        if program.is_empty() {
            return Err(Error::InvalidArgument("empty register program"));
        }

        let mut written = 0;
        for op in program.ops() {
            if op.is_delay() {
                delay.delay_ms(op.val as u32);
                continue;
            }
            if let Err(e) = self.write_reg(op.addr, op.val) {
                log::error!(
                    "program {} aborted after {} of {} writes",
                    program.name(),
                    written,
                    program.write_count()
                );
                return Err(e);
            }
            written += 1;
        }
        log::debug!("program {}: {} writes", program.name(), written);
        Ok(written)
    }
}
