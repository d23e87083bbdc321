//! Register map and the register program representation.

/// 7-bit bus address (0x78 write / 0x79 read).
pub const GC2145_ADDR: u8 = 0x3C;

/// Expected value of `CHIP_ID_H:CHIP_ID_L`.
pub const CHIP_ID: u16 = 0x2145;

// Page 0
pub const FLIP_CONTROL: u8 = 0x17;
pub const OUTPUT_FORMAT: u8 = 0x84;

// System registers, visible from every page
pub const CHIP_ID_H: u8 = 0xF0;
pub const CHIP_ID_L: u8 = 0xF1;
pub const PAD_MODE: u8 = 0xF2;
pub const PAGE_SELECT: u8 = 0xFE;

/// Reserved address marking a delay row in a [`RegisterProgram`].
pub const DELAY_MARKER: u8 = 0xFF;

/// Written to [`PAGE_SELECT`]: bit 7 resets every page to defaults.
pub const PAGE_SOFT_RESET: u8 = 0xF0;

pub const FLIP_HORIZONTAL: u8 = 1 << 0;
pub const FLIP_VERTICAL: u8 = 1 << 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterOp {
    pub addr: u8,
    pub val: u8,
}

impl RegisterOp {
    pub const fn write(addr: u8, val: u8) -> Self {
        Self { addr, val }
    }

    /// Switch the register page later rows refer to.
    pub const fn page(page: u8) -> Self {
        Self::write(PAGE_SELECT, page)
    }

    pub const fn delay_ms(ms: u8) -> Self {
        Self {
            addr: DELAY_MARKER,
            val: ms,
        }
    }

    pub const fn is_delay(&self) -> bool {
        self.addr == DELAY_MARKER
    }
}

/// An ordered list of register writes and delay rows, applied front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterProgram {
    name: &'static str,
    ops: &'static [RegisterOp],
}

impl RegisterProgram {
    pub const fn new(name: &'static str, ops: &'static [RegisterOp]) -> Self {
        Self { name, ops }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn ops(&self) -> &'static [RegisterOp] {
        self.ops
    }

    pub const fn len(&self) -> usize {
        self.ops.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of rows that reach the bus.
    pub fn write_count(&self) -> usize {
        self.ops.iter().filter(|op| !op.is_delay()).count()
    }

    /// Sum of all delay rows in milliseconds.
    pub fn total_delay_ms(&self) -> u32 {
        self.ops
            .iter()
            .filter(|op| op.is_delay())
            .map(|op| op.val as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &[RegisterOp] = &[
        RegisterOp::page(1),
        RegisterOp::write(0x10, 0x20),
        RegisterOp::delay_ms(5),
        RegisterOp::page(0),
        RegisterOp::delay_ms(7),
    ];

    #[test]
    fn delay_rows_are_not_writes() {
        let program = RegisterProgram::new("mixed", MIXED);
        assert_eq!(program.len(), 5);
        assert_eq!(program.write_count(), 3);
        assert_eq!(program.total_delay_ms(), 12);
    }

    #[test]
    fn page_select_is_an_ordinary_write() {
        let op = RegisterOp::page(2);
        assert_eq!(op, RegisterOp::write(PAGE_SELECT, 2));
        assert!(!op.is_delay());
        assert!(RegisterOp::delay_ms(0).is_delay());
    }

    #[test]
    fn tables_contain_no_delay_rows() {
        for program in [
            &crate::tables::INIT,
            &crate::tables::MODE_QVGA,
            &crate::tables::MODE_VGA,
            &crate::tables::MODE_SVGA,
            &crate::tables::MODE_UXGA,
        ] {
            assert_eq!(program.total_delay_ms(), 0, "{}", program.name());
            assert_eq!(program.ops().last(), Some(&RegisterOp::page(0)));
        }
    }
}
