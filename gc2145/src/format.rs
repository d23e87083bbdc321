use crate::mode::{Mode, DEFAULT_MODE};
use crate::regs::RegisterProgram;
use crate::tables;

/// Media-bus pixel code as exchanged with the capture framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MbusCode(pub u32);

impl MbusCode {
    pub const RGB565_2X8_BE: MbusCode = MbusCode(0x1007);
    pub const UYVY8_2X8: MbusCode = MbusCode(0x2006);
    pub const VYUY8_2X8: MbusCode = MbusCode(0x2007);
    pub const YUYV8_2X8: MbusCode = MbusCode(0x2008);
    pub const YVYU8_2X8: MbusCode = MbusCode(0x2009);
    pub const SBGGR8_1X8: MbusCode = MbusCode(0x3001);

    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::RGB565_2X8_BE => "RGB565_2X8_BE",
            Self::UYVY8_2X8 => "UYVY8_2X8",
            Self::VYUY8_2X8 => "VYUY8_2X8",
            Self::YUYV8_2X8 => "YUYV8_2X8",
            Self::YVYU8_2X8 => "YVYU8_2X8",
            Self::SBGGR8_1X8 => "SBGGR8_1X8",
            _ => return None,
        })
    }
}

impl core::fmt::Display for MbusCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#06x}", self.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Colorspace {
    Srgb,
    Jpeg,
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum YcbcrEncoding {
    Bt601,
    Bt709,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantization {
    FullRange,
    LimitedRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferFunction {
    Srgb,
    Bt709,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Progressive,
}

impl Colorspace {
    /// Default encoding, quantization and transfer function for this
    /// colorspace. The sensor always drives full-range samples.
    pub const fn defaults(self) -> (YcbcrEncoding, Quantization, TransferFunction) {
        match self {
            Colorspace::Srgb | Colorspace::Jpeg => (
                YcbcrEncoding::Bt601,
                Quantization::FullRange,
                TransferFunction::Srgb,
            ),
            Colorspace::Raw => (
                YcbcrEncoding::Bt601,
                Quantization::FullRange,
                TransferFunction::None,
            ),
        }
    }
}

/// An output encoding and the register patch that selects it.
#[derive(Debug, PartialEq, Eq)]
pub struct PixelFormat {
    pub code: MbusCode,
    pub colorspace: Colorspace,
    /// Value the patch writes into the output format register.
    pub selector: u8,
    pub patch: &'static RegisterProgram,
}

pub static FORMATS: [PixelFormat; 6] = [
    PixelFormat {
        code: MbusCode::UYVY8_2X8,
        colorspace: Colorspace::Srgb,
        selector: 0x00,
        patch: &tables::FMT_UYVY,
    },
    PixelFormat {
        code: MbusCode::VYUY8_2X8,
        colorspace: Colorspace::Jpeg,
        selector: 0x01,
        patch: &tables::FMT_VYUY,
    },
    PixelFormat {
        code: MbusCode::YUYV8_2X8,
        colorspace: Colorspace::Srgb,
        selector: 0x02,
        patch: &tables::FMT_YUYV,
    },
    PixelFormat {
        code: MbusCode::YVYU8_2X8,
        colorspace: Colorspace::Jpeg,
        selector: 0x03,
        patch: &tables::FMT_YVYU,
    },
    PixelFormat {
        code: MbusCode::RGB565_2X8_BE,
        colorspace: Colorspace::Srgb,
        selector: 0x06,
        patch: &tables::FMT_RAW,
    },
    PixelFormat {
        code: MbusCode::SBGGR8_1X8,
        colorspace: Colorspace::Raw,
        selector: 0x19,
        patch: &tables::FMT_RAW,
    },
];

pub static DEFAULT_FORMAT: &PixelFormat = &FORMATS[0];

/// Exact code match, or the default entry for codes the sensor cannot emit.
pub fn find_pixel_format(code: MbusCode) -> &'static PixelFormat {
    match FORMATS.iter().find(|f| f.code == code) {
        Some(format) => format,
        None => {
            log::debug!("code {} unsupported, using {}", code, DEFAULT_FORMAT.code);
            DEFAULT_FORMAT
        }
    }
}

/// A fully resolved frame format as reported to the capture framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameFormat {
    pub width: u32,
    pub height: u32,
    pub code: MbusCode,
    pub colorspace: Colorspace,
    pub ycbcr_enc: YcbcrEncoding,
    pub quantization: Quantization,
    pub xfer_func: TransferFunction,
    pub field: Field,
}

impl FrameFormat {
    pub fn new(width: u32, height: u32, format: &PixelFormat) -> Self {
        let (ycbcr_enc, quantization, xfer_func) = format.colorspace.defaults();
        Self {
            width,
            height,
            code: format.code,
            colorspace: format.colorspace,
            ycbcr_enc,
            quantization,
            xfer_func,
            field: Field::Progressive,
        }
    }

    /// The format reported before any negotiation.
    pub fn default_for(mode: &Mode) -> Self {
        Self::new(mode.active_width, mode.active_height, DEFAULT_FORMAT)
    }
}

impl Default for FrameFormat {
    fn default() -> Self {
        Self::default_for(DEFAULT_MODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::OUTPUT_FORMAT;

    #[test]
    fn known_codes_resolve_exactly() {
        for format in FORMATS.iter() {
            assert_eq!(find_pixel_format(format.code).code, format.code);
        }
    }

    #[test]
    fn unknown_code_falls_back_to_first_entry() {
        assert_eq!(find_pixel_format(MbusCode(0)).code, MbusCode::UYVY8_2X8);
        assert_eq!(find_pixel_format(MbusCode(0x300f)).code, MbusCode::UYVY8_2X8);
    }

    #[test]
    fn yuv_patches_write_their_selector() {
        for format in FORMATS.iter().take(4) {
            let ops = format.patch.ops();
            assert_eq!(ops.len(), 1);
            assert_eq!(ops[0].addr, OUTPUT_FORMAT);
            assert_eq!(ops[0].val, format.selector);
        }
    }

    #[test]
    fn derived_fields_follow_colorspace() {
        let raw = FrameFormat::new(320, 240, find_pixel_format(MbusCode::SBGGR8_1X8));
        assert_eq!(raw.colorspace, Colorspace::Raw);
        assert_eq!(raw.xfer_func, TransferFunction::None);
        assert_eq!(raw.field, Field::Progressive);

        let jpeg = FrameFormat::new(320, 240, find_pixel_format(MbusCode::VYUY8_2X8));
        assert_eq!(jpeg.ycbcr_enc, YcbcrEncoding::Bt601);
        assert_eq!(jpeg.quantization, Quantization::FullRange);
        assert_eq!(jpeg.xfer_func, TransferFunction::Srgb);
    }

    #[test]
    fn default_is_svga_uyvy() {
        let format = FrameFormat::default();
        assert_eq!((format.width, format.height), (800, 600));
        assert_eq!(format.code, MbusCode::UYVY8_2X8);
    }
}
