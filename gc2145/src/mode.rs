use crate::error::{Error, Lookup, Result};
use crate::regs::RegisterProgram;
use crate::tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeId {
    Qvga320x240,
    Vga640x480,
    Svga800x600,
    Uxga1600x1200,
}

/// A fixed sensor resolution and the program that crops the array to it.
#[derive(Debug, PartialEq, Eq)]
pub struct Mode {
    pub id: ModeId,
    pub active_width: u32,
    pub active_height: u32,
    pub total_width: u32,
    pub total_height: u32,
    pub program: &'static RegisterProgram,
}

pub static MODES: [Mode; 4] = [
    Mode {
        id: ModeId::Qvga320x240,
        active_width: 320,
        active_height: 240,
        total_width: 320,
        total_height: 240,
        program: &tables::MODE_QVGA,
    },
    Mode {
        id: ModeId::Vga640x480,
        active_width: 640,
        active_height: 480,
        total_width: 640,
        total_height: 480,
        program: &tables::MODE_VGA,
    },
    Mode {
        id: ModeId::Svga800x600,
        active_width: 800,
        active_height: 600,
        total_width: 800,
        total_height: 600,
        program: &tables::MODE_SVGA,
    },
    Mode {
        id: ModeId::Uxga1600x1200,
        active_width: 1600,
        active_height: 1200,
        total_width: 1600,
        total_height: 1200,
        program: &tables::MODE_UXGA,
    },
];

pub static DEFAULT_MODE: &Mode = &MODES[2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeMatch {
    #[default]
    Nearest,
    Exact,
}

impl Mode {
    fn distance(&self, width: u32, height: u32) -> u32 {
        self.active_width.abs_diff(width) + self.active_height.abs_diff(height)
    }
}

/// Look up the catalog entry for a requested size.
///
/// Nearest picks the smallest sum of width and height differences; on a tie
/// the entry listed first wins.
pub fn find_mode(width: u32, height: u32, policy: ModeMatch) -> Result<&'static Mode> {
    let mut best: Option<(&'static Mode, u32)> = None;
    for mode in MODES.iter() {
        let distance = mode.distance(width, height);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((mode, distance));
        }
        if distance == 0 {
            break;
        }
    }

    match best {
        Some((mode, 0)) => Ok(mode),
        Some((mode, _)) if policy == ModeMatch::Nearest => {
            log::debug!(
                "{}x{} -> nearest {}x{}",
                width,
                height,
                mode.active_width,
                mode.active_height
            );
            Ok(mode)
        }
        _ => Err(Error::NotFound(Lookup::Mode { width, height })),
    }
}
