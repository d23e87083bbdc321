//! Register programs for the GC2145.
//!
//! The values below are calibration data from the vendor bring-up sequence.
//! Only the page selects and the output format register carry meaning the
//! driver relies on; everything else is written verbatim.

use crate::regs::{RegisterOp, RegisterProgram, OUTPUT_FORMAT, PAGE_SELECT, PAGE_SOFT_RESET};

pub static INIT: RegisterProgram = RegisterProgram::new("init", INIT_OPS);
pub static MODE_QVGA: RegisterProgram = RegisterProgram::new("qvga", QVGA_OPS);
pub static MODE_VGA: RegisterProgram = RegisterProgram::new("vga", VGA_OPS);
pub static MODE_SVGA: RegisterProgram = RegisterProgram::new("svga", SVGA_OPS);
pub static MODE_UXGA: RegisterProgram = RegisterProgram::new("uxga", UXGA_OPS);

pub static FMT_UYVY: RegisterProgram = RegisterProgram::new("uyvy", UYVY_OPS);
pub static FMT_VYUY: RegisterProgram = RegisterProgram::new("vyuy", VYUY_OPS);
pub static FMT_YUYV: RegisterProgram = RegisterProgram::new("yuyv", YUYV_OPS);
pub static FMT_YVYU: RegisterProgram = RegisterProgram::new("yvyu", YVYU_OPS);
// RGB565 and raw Bayer share this patch; the selector byte on the format
// entry is what tells them apart.
pub static FMT_RAW: RegisterProgram = RegisterProgram::new("raw", RAW_OPS);

const UYVY_OPS: &[RegisterOp] = &[RegisterOp::write(OUTPUT_FORMAT, 0x00)];
const VYUY_OPS: &[RegisterOp] = &[RegisterOp::write(OUTPUT_FORMAT, 0x01)];
const YUYV_OPS: &[RegisterOp] = &[RegisterOp::write(OUTPUT_FORMAT, 0x02)];
const YVYU_OPS: &[RegisterOp] = &[RegisterOp::write(OUTPUT_FORMAT, 0x03)];
const RAW_OPS: &[RegisterOp] = &[RegisterOp::write(OUTPUT_FORMAT, 0x18)];

// Full power-on initialisation. Leaves the sensor on page 0 in SVGA YUV422.
const INIT_OPS: &[RegisterOp] = &[
    // Soft reset
    RegisterOp::write(PAGE_SELECT, PAGE_SOFT_RESET),
    RegisterOp::write(PAGE_SELECT, PAGE_SOFT_RESET),
    RegisterOp::write(PAGE_SELECT, PAGE_SOFT_RESET),
    // Clocking and pad drive
    RegisterOp::write(0xfc, 0x06),
    RegisterOp::write(0xf6, 0x00),
    RegisterOp::write(0xf7, 0x1d),
    RegisterOp::write(0xf8, 0x83),
    RegisterOp::write(0xfa, 0x00),
    RegisterOp::write(0xf9, 0xfe),
    RegisterOp::write(0xf2, 0x00),
    RegisterOp::page(0),
    RegisterOp::write(0x03, 0x04),
    RegisterOp::write(0x04, 0xe2),
    RegisterOp::write(0x09, 0x00),
    RegisterOp::write(0x0a, 0x00),
    RegisterOp::write(0x0b, 0x00),
    RegisterOp::write(0x0c, 0x00),
    RegisterOp::write(0x0d, 0x04),
    RegisterOp::write(0x0e, 0xc0),
    RegisterOp::write(0x0f, 0x06),
    RegisterOp::write(0x10, 0x52),
    RegisterOp::write(0x12, 0x2e),
    RegisterOp::write(0x17, 0x17),
    RegisterOp::write(0x18, 0x22),
    RegisterOp::write(0x19, 0x0e),
    RegisterOp::write(0x1a, 0x01),
    RegisterOp::write(0x1b, 0x4b),
    RegisterOp::write(0x1c, 0x07),
    RegisterOp::write(0x1d, 0x10),
    RegisterOp::write(0x1e, 0x88),
    RegisterOp::write(0x1f, 0x78),
    RegisterOp::write(0x20, 0x03),
    RegisterOp::write(0x21, 0x40),
    RegisterOp::write(0x22, 0xa0),
    RegisterOp::write(0x24, 0x16),
    RegisterOp::write(0x25, 0x01),
    RegisterOp::write(0x26, 0x10),
    RegisterOp::write(0x2d, 0x60),
    RegisterOp::write(0x30, 0x01),
    RegisterOp::write(0x31, 0x90),
    RegisterOp::write(0x33, 0x06),
    RegisterOp::write(0x34, 0x01),
    // ISP
    RegisterOp::page(0),
    RegisterOp::write(0x80, 0x7f),
    RegisterOp::write(0x81, 0x26),
    RegisterOp::write(0x82, 0xfa),
    RegisterOp::write(0x83, 0x00),
    RegisterOp::write(0x84, 0x02),
    RegisterOp::write(0x86, 0x03),
    RegisterOp::write(0x88, 0x03),
    RegisterOp::write(0x89, 0x03),
    RegisterOp::write(0x85, 0x08),
    RegisterOp::write(0x8a, 0x00),
    RegisterOp::write(0x8b, 0x00),
    RegisterOp::write(0xb0, 0x55),
    RegisterOp::write(0xc3, 0x00),
    RegisterOp::write(0xc4, 0x80),
    RegisterOp::write(0xc5, 0x90),
    RegisterOp::write(0xc6, 0x3b),
    RegisterOp::write(0xc7, 0x46),
    RegisterOp::write(0xec, 0x06),
    RegisterOp::write(0xed, 0x04),
    RegisterOp::write(0xee, 0x60),
    RegisterOp::write(0xef, 0x90),
    RegisterOp::write(0xb6, 0x01),
    RegisterOp::write(0x90, 0x01),
    RegisterOp::write(0x91, 0x00),
    RegisterOp::write(0x92, 0x00),
    RegisterOp::write(0x93, 0x00),
    RegisterOp::write(0x94, 0x00),
    RegisterOp::write(0x95, 0x04),
    RegisterOp::write(0x96, 0xb0),
    RegisterOp::write(0x97, 0x06),
    RegisterOp::write(0x98, 0x40),
    // Black level
    RegisterOp::page(0),
    RegisterOp::write(0x40, 0x42),
    RegisterOp::write(0x41, 0x00),
    RegisterOp::write(0x43, 0x5b),
    RegisterOp::write(0x5e, 0x00),
    RegisterOp::write(0x5f, 0x00),
    RegisterOp::write(0x60, 0x00),
    RegisterOp::write(0x61, 0x00),
    RegisterOp::write(0x62, 0x00),
    RegisterOp::write(0x63, 0x00),
    RegisterOp::write(0x64, 0x00),
    RegisterOp::write(0x65, 0x00),
    RegisterOp::write(0x66, 0x20),
    RegisterOp::write(0x67, 0x20),
    RegisterOp::write(0x68, 0x20),
    RegisterOp::write(0x69, 0x20),
    RegisterOp::write(0x76, 0x00),
    RegisterOp::write(0x6a, 0x08),
    RegisterOp::write(0x6b, 0x08),
    RegisterOp::write(0x6c, 0x08),
    RegisterOp::write(0x6d, 0x08),
    RegisterOp::write(0x6e, 0x08),
    RegisterOp::write(0x6f, 0x08),
    RegisterOp::write(0x70, 0x08),
    RegisterOp::write(0x71, 0x08),
    RegisterOp::write(0x76, 0x00),
    RegisterOp::write(0x72, 0xf0),
    RegisterOp::write(0x7e, 0x3c),
    RegisterOp::write(0x7f, 0x00),
    RegisterOp::page(2),
    RegisterOp::write(0x48, 0x15),
    RegisterOp::write(0x49, 0x00),
    RegisterOp::write(0x4b, 0x0b),
    RegisterOp::page(0),
    // Exposure
    RegisterOp::page(1),
    RegisterOp::write(0x01, 0x04),
    RegisterOp::write(0x02, 0xc0),
    RegisterOp::write(0x03, 0x04),
    RegisterOp::write(0x04, 0x90),
    RegisterOp::write(0x05, 0x30),
    RegisterOp::write(0x06, 0x90),
    RegisterOp::write(0x07, 0x30),
    RegisterOp::write(0x08, 0x80),
    RegisterOp::write(0x09, 0x00),
    RegisterOp::write(0x0a, 0x82),
    RegisterOp::write(0x0b, 0x11),
    RegisterOp::write(0x0c, 0x10),
    RegisterOp::write(0x11, 0x10),
    RegisterOp::write(0x13, 0x7b),
    RegisterOp::write(0x17, 0x00),
    RegisterOp::write(0x1c, 0x11),
    RegisterOp::write(0x1e, 0x61),
    RegisterOp::write(0x1f, 0x35),
    RegisterOp::write(0x20, 0x40),
    RegisterOp::write(0x22, 0x40),
    RegisterOp::write(0x23, 0x20),
    RegisterOp::page(2),
    RegisterOp::write(0x0f, 0x04),
    RegisterOp::page(1),
    RegisterOp::write(0x12, 0x35),
    RegisterOp::write(0x15, 0xb0),
    RegisterOp::write(0x10, 0x31),
    RegisterOp::write(0x3e, 0x28),
    RegisterOp::write(0x3f, 0xb0),
    RegisterOp::write(0x40, 0x90),
    RegisterOp::write(0x41, 0x0f),
    // Edge enhancement
    RegisterOp::page(2),
    RegisterOp::write(0x90, 0x6c),
    RegisterOp::write(0x91, 0x03),
    RegisterOp::write(0x92, 0xcb),
    RegisterOp::write(0x94, 0x33),
    RegisterOp::write(0x95, 0x84),
    RegisterOp::write(0x97, 0x65),
    RegisterOp::write(0xa2, 0x11),
    RegisterOp::page(0),
    // Denoise
    RegisterOp::page(2),
    RegisterOp::write(0x80, 0xc1),
    RegisterOp::write(0x81, 0x08),
    RegisterOp::write(0x82, 0x05),
    RegisterOp::write(0x83, 0x08),
    RegisterOp::write(0x84, 0x0a),
    RegisterOp::write(0x86, 0xf0),
    RegisterOp::write(0x87, 0x50),
    RegisterOp::write(0x88, 0x15),
    RegisterOp::write(0x89, 0xb0),
    RegisterOp::write(0x8a, 0x30),
    RegisterOp::write(0x8b, 0x10),
    // Auto saturation and denoise
    RegisterOp::page(1),
    RegisterOp::write(0x21, 0x04),
    RegisterOp::page(2),
    RegisterOp::write(0xa3, 0x50),
    RegisterOp::write(0xa4, 0x20),
    RegisterOp::write(0xa5, 0x40),
    RegisterOp::write(0xa6, 0x80),
    RegisterOp::write(0xab, 0x40),
    RegisterOp::write(0xae, 0x0c),
    RegisterOp::write(0xb3, 0x46),
    RegisterOp::write(0xb4, 0x64),
    RegisterOp::write(0xb6, 0x38),
    RegisterOp::write(0xb7, 0x01),
    RegisterOp::write(0xb9, 0x2b),
    RegisterOp::write(0x3c, 0x04),
    RegisterOp::write(0x3d, 0x15),
    RegisterOp::write(0x4b, 0x06),
    RegisterOp::write(0x4c, 0x20),
    RegisterOp::page(0),
    // Gamma
    RegisterOp::page(2),
    RegisterOp::write(0x10, 0x09),
    RegisterOp::write(0x11, 0x0d),
    RegisterOp::write(0x12, 0x13),
    RegisterOp::write(0x13, 0x19),
    RegisterOp::write(0x14, 0x27),
    RegisterOp::write(0x15, 0x37),
    RegisterOp::write(0x16, 0x45),
    RegisterOp::write(0x17, 0x53),
    RegisterOp::write(0x18, 0x69),
    RegisterOp::write(0x19, 0x7d),
    RegisterOp::write(0x1a, 0x8f),
    RegisterOp::write(0x1b, 0x9d),
    RegisterOp::write(0x1c, 0xa9),
    RegisterOp::write(0x1d, 0xbd),
    RegisterOp::write(0x1e, 0xcd),
    RegisterOp::write(0x1f, 0xd9),
    RegisterOp::write(0x20, 0xe3),
    RegisterOp::write(0x21, 0xea),
    RegisterOp::write(0x22, 0xef),
    RegisterOp::write(0x23, 0xf5),
    RegisterOp::write(0x24, 0xf9),
    RegisterOp::write(0x25, 0xff),
    RegisterOp::page(0),
    RegisterOp::write(0xc6, 0x20),
    RegisterOp::write(0xc7, 0x2b),
    // Gamma, second curve
    RegisterOp::page(2),
    RegisterOp::write(0x26, 0x0f),
    RegisterOp::write(0x27, 0x14),
    RegisterOp::write(0x28, 0x19),
    RegisterOp::write(0x29, 0x1e),
    RegisterOp::write(0x2a, 0x27),
    RegisterOp::write(0x2b, 0x33),
    RegisterOp::write(0x2c, 0x3b),
    RegisterOp::write(0x2d, 0x45),
    RegisterOp::write(0x2e, 0x59),
    RegisterOp::write(0x2f, 0x69),
    RegisterOp::write(0x30, 0x7c),
    RegisterOp::write(0x31, 0x89),
    RegisterOp::write(0x32, 0x98),
    RegisterOp::write(0x33, 0xae),
    RegisterOp::write(0x34, 0xc0),
    RegisterOp::write(0x35, 0xcf),
    RegisterOp::write(0x36, 0xda),
    RegisterOp::write(0x37, 0xe2),
    RegisterOp::write(0x38, 0xe9),
    RegisterOp::write(0x39, 0xf3),
    RegisterOp::write(0x3a, 0xf9),
    RegisterOp::write(0x3b, 0xff),
    // YCbCr processing
    RegisterOp::page(2),
    RegisterOp::write(0xd1, 0x32),
    RegisterOp::write(0xd2, 0x32),
    RegisterOp::write(0xd3, 0x40),
    RegisterOp::write(0xd6, 0xf0),
    RegisterOp::write(0xd7, 0x10),
    RegisterOp::write(0xd8, 0xda),
    RegisterOp::write(0xdd, 0x14),
    RegisterOp::write(0xde, 0x86),
    RegisterOp::write(0xed, 0x80),
    RegisterOp::write(0xee, 0x00),
    RegisterOp::write(0xef, 0x3f),
    RegisterOp::write(0xd8, 0xd8),
    // Auto black stretch
    RegisterOp::page(1),
    RegisterOp::write(0x9f, 0x40),
    // Lens shading
    RegisterOp::page(1),
    RegisterOp::write(0xc2, 0x14),
    RegisterOp::write(0xc3, 0x0d),
    RegisterOp::write(0xc4, 0x0c),
    RegisterOp::write(0xc8, 0x15),
    RegisterOp::write(0xc9, 0x0d),
    RegisterOp::write(0xca, 0x0a),
    RegisterOp::write(0xbc, 0x24),
    RegisterOp::write(0xbd, 0x10),
    RegisterOp::write(0xbe, 0x0b),
    RegisterOp::write(0xb6, 0x25),
    RegisterOp::write(0xb7, 0x16),
    RegisterOp::write(0xb8, 0x15),
    RegisterOp::write(0xc5, 0x00),
    RegisterOp::write(0xc6, 0x00),
    RegisterOp::write(0xc7, 0x00),
    RegisterOp::write(0xcb, 0x00),
    RegisterOp::write(0xcc, 0x00),
    RegisterOp::write(0xcd, 0x00),
    RegisterOp::write(0xbf, 0x07),
    RegisterOp::write(0xc0, 0x00),
    RegisterOp::write(0xc1, 0x00),
    RegisterOp::write(0xb9, 0x00),
    RegisterOp::write(0xba, 0x00),
    RegisterOp::write(0xbb, 0x00),
    RegisterOp::write(0xaa, 0x01),
    RegisterOp::write(0xab, 0x01),
    RegisterOp::write(0xac, 0x00),
    RegisterOp::write(0xad, 0x05),
    RegisterOp::write(0xae, 0x06),
    RegisterOp::write(0xaf, 0x0e),
    RegisterOp::write(0xb0, 0x0b),
    RegisterOp::write(0xb1, 0x07),
    RegisterOp::write(0xb2, 0x06),
    RegisterOp::write(0xb3, 0x17),
    RegisterOp::write(0xb4, 0x0e),
    RegisterOp::write(0xb5, 0x0e),
    RegisterOp::write(0xd0, 0x09),
    RegisterOp::write(0xd1, 0x00),
    RegisterOp::write(0xd2, 0x00),
    RegisterOp::write(0xd6, 0x08),
    RegisterOp::write(0xd7, 0x00),
    RegisterOp::write(0xd8, 0x00),
    RegisterOp::write(0xd9, 0x00),
    RegisterOp::write(0xda, 0x00),
    RegisterOp::write(0xdb, 0x00),
    RegisterOp::write(0xd3, 0x0a),
    RegisterOp::write(0xd4, 0x00),
    RegisterOp::write(0xd5, 0x00),
    RegisterOp::write(0xa4, 0x00),
    RegisterOp::write(0xa5, 0x00),
    RegisterOp::write(0xa6, 0x77),
    RegisterOp::write(0xa7, 0x77),
    RegisterOp::write(0xa8, 0x77),
    RegisterOp::write(0xa9, 0x77),
    RegisterOp::write(0xa1, 0x80),
    RegisterOp::write(0xa2, 0x80),
    RegisterOp::page(1),
    RegisterOp::write(0xdf, 0x0d),
    RegisterOp::write(0xdc, 0x25),
    RegisterOp::write(0xdd, 0x30),
    RegisterOp::write(0xe0, 0x77),
    RegisterOp::write(0xe1, 0x80),
    RegisterOp::write(0xe2, 0x77),
    RegisterOp::write(0xe3, 0x90),
    RegisterOp::write(0xe6, 0x90),
    RegisterOp::write(0xe7, 0xa0),
    RegisterOp::write(0xe8, 0x90),
    RegisterOp::write(0xe9, 0xa0),
    RegisterOp::page(0),
    // White balance
    RegisterOp::page(1),
    RegisterOp::write(0x4f, 0x00),
    RegisterOp::write(0x4f, 0x00),
    RegisterOp::write(0x4b, 0x01),
    RegisterOp::write(0x4f, 0x00),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x71),
    RegisterOp::write(0x4e, 0x01),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x91),
    RegisterOp::write(0x4e, 0x01),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x70),
    RegisterOp::write(0x4e, 0x01),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x90),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xb0),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x8f),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x6f),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xaf),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xd0),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xf0),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xcf),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xef),
    RegisterOp::write(0x4e, 0x02),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x6e),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x8e),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xae),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xce),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x4d),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x6d),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x8d),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xad),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xcd),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x4c),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x6c),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x8c),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xac),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xcc),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xcb),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x4b),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x6b),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x8b),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xab),
    RegisterOp::write(0x4e, 0x03),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x8a),
    RegisterOp::write(0x4e, 0x04),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xaa),
    RegisterOp::write(0x4e, 0x04),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xca),
    RegisterOp::write(0x4e, 0x04),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xca),
    RegisterOp::write(0x4e, 0x04),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xc9),
    RegisterOp::write(0x4e, 0x04),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x8a),
    RegisterOp::write(0x4e, 0x04),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0x89),
    RegisterOp::write(0x4e, 0x04),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xa9),
    RegisterOp::write(0x4e, 0x04),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x0b),
    RegisterOp::write(0x4e, 0x05),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x0a),
    RegisterOp::write(0x4e, 0x05),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xeb),
    RegisterOp::write(0x4e, 0x05),
    RegisterOp::write(0x4c, 0x01),
    RegisterOp::write(0x4d, 0xea),
    RegisterOp::write(0x4e, 0x05),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x09),
    RegisterOp::write(0x4e, 0x05),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x29),
    RegisterOp::write(0x4e, 0x05),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x2a),
    RegisterOp::write(0x4e, 0x05),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x4a),
    RegisterOp::write(0x4e, 0x05),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x8a),
    RegisterOp::write(0x4e, 0x06),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x49),
    RegisterOp::write(0x4e, 0x06),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x69),
    RegisterOp::write(0x4e, 0x06),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x89),
    RegisterOp::write(0x4e, 0x06),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xa9),
    RegisterOp::write(0x4e, 0x06),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x48),
    RegisterOp::write(0x4e, 0x06),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x68),
    RegisterOp::write(0x4e, 0x06),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0x69),
    RegisterOp::write(0x4e, 0x06),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xca),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xc9),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xe9),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x03),
    RegisterOp::write(0x4d, 0x09),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xc8),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xe8),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xa7),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xc7),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x02),
    RegisterOp::write(0x4d, 0xe7),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4c, 0x03),
    RegisterOp::write(0x4d, 0x07),
    RegisterOp::write(0x4e, 0x07),
    RegisterOp::write(0x4f, 0x01),
    RegisterOp::write(0x50, 0x80),
    RegisterOp::write(0x51, 0xa8),
    RegisterOp::write(0x52, 0x47),
    RegisterOp::write(0x53, 0x38),
    RegisterOp::write(0x54, 0xc7),
    RegisterOp::write(0x56, 0x0e),
    RegisterOp::write(0x58, 0x08),
    RegisterOp::write(0x5b, 0x00),
    RegisterOp::write(0x5c, 0x74),
    RegisterOp::write(0x5d, 0x8b),
    RegisterOp::write(0x61, 0xdb),
    RegisterOp::write(0x62, 0xb8),
    RegisterOp::write(0x63, 0x86),
    RegisterOp::write(0x64, 0xc0),
    RegisterOp::write(0x65, 0x04),
    RegisterOp::write(0x67, 0xa8),
    RegisterOp::write(0x68, 0xb0),
    RegisterOp::write(0x69, 0x00),
    RegisterOp::write(0x6a, 0xa8),
    RegisterOp::write(0x6b, 0xb0),
    RegisterOp::write(0x6c, 0xaf),
    RegisterOp::write(0x6d, 0x8b),
    RegisterOp::write(0x6e, 0x50),
    RegisterOp::write(0x6f, 0x18),
    RegisterOp::write(0x73, 0xf0),
    RegisterOp::write(0x70, 0x0d),
    RegisterOp::write(0x71, 0x60),
    RegisterOp::write(0x72, 0x80),
    RegisterOp::write(0x74, 0x01),
    RegisterOp::write(0x75, 0x01),
    RegisterOp::write(0x7f, 0x0c),
    RegisterOp::write(0x76, 0x70),
    RegisterOp::write(0x77, 0x58),
    RegisterOp::write(0x78, 0xa0),
    RegisterOp::write(0x79, 0x5e),
    RegisterOp::write(0x7a, 0x54),
    RegisterOp::write(0x7b, 0x58),
    RegisterOp::page(0),
    // Colour correction
    RegisterOp::page(2),
    RegisterOp::write(0xc0, 0x01),
    RegisterOp::write(0xc1, 0x44),
    RegisterOp::write(0xc2, 0xfd),
    RegisterOp::write(0xc3, 0x04),
    RegisterOp::write(0xc4, 0xf0),
    RegisterOp::write(0xc5, 0x48),
    RegisterOp::write(0xc6, 0xfd),
    RegisterOp::write(0xc7, 0x46),
    RegisterOp::write(0xc8, 0xfd),
    RegisterOp::write(0xc9, 0x02),
    RegisterOp::write(0xca, 0xe0),
    RegisterOp::write(0xcb, 0x45),
    RegisterOp::write(0xcc, 0xec),
    RegisterOp::write(0xcd, 0x48),
    RegisterOp::write(0xce, 0xf0),
    RegisterOp::write(0xcf, 0xf0),
    RegisterOp::write(0xe3, 0x0c),
    RegisterOp::write(0xe4, 0x4b),
    RegisterOp::write(0xe5, 0xe0),
    // Auto black stretch
    RegisterOp::page(1),
    RegisterOp::write(0x9f, 0x40),
    RegisterOp::page(0),
    // Output pads
    RegisterOp::page(0),
    RegisterOp::write(0xf2, 0x0f),
    // Dark sun
    RegisterOp::page(2),
    RegisterOp::write(0x40, 0xbf),
    RegisterOp::write(0x46, 0xcf),
    RegisterOp::page(0),
    // 50 Hz banding / frame rate
    RegisterOp::page(0),
    RegisterOp::write(0x05, 0x01),
    RegisterOp::write(0x06, 0x56),
    RegisterOp::write(0x07, 0x00),
    RegisterOp::write(0x08, 0x32),
    RegisterOp::page(1),
    RegisterOp::write(0x25, 0x00),
    RegisterOp::write(0x26, 0xfa),
    RegisterOp::write(0x27, 0x04),
    RegisterOp::write(0x28, 0xe2),
    RegisterOp::write(0x29, 0x06),
    RegisterOp::write(0x2a, 0xd6),
    RegisterOp::write(0x2b, 0x07),
    RegisterOp::write(0x2c, 0xd0),
    RegisterOp::write(0x2d, 0x0b),
    RegisterOp::write(0x2e, 0xb8),
    RegisterOp::page(0),
    RegisterOp::page(0),
    RegisterOp::write(0xfd, 0x01),
    RegisterOp::write(0xfa, 0x00),
    // Crop window
    RegisterOp::page(0),
    RegisterOp::write(0x90, 0x01),
    RegisterOp::write(0x91, 0x00),
    RegisterOp::write(0x92, 0x00),
    RegisterOp::write(0x93, 0x00),
    RegisterOp::write(0x94, 0x00),
    RegisterOp::write(0x95, 0x02),
    RegisterOp::write(0x96, 0x58),
    RegisterOp::write(0x97, 0x03),
    RegisterOp::write(0x98, 0x20),
    RegisterOp::write(0x99, 0x11),
    RegisterOp::write(0x9a, 0x06),
    // White balance
    RegisterOp::page(0),
    RegisterOp::write(0xec, 0x02),
    RegisterOp::write(0xed, 0x02),
    RegisterOp::write(0xee, 0x30),
    RegisterOp::write(0xef, 0x48),
    RegisterOp::page(2),
    RegisterOp::write(0x9d, 0x08),
    RegisterOp::page(1),
    RegisterOp::write(0x74, 0x00),
    // Exposure
    RegisterOp::page(1),
    RegisterOp::write(0x01, 0x04),
    RegisterOp::write(0x02, 0x60),
    RegisterOp::write(0x03, 0x02),
    RegisterOp::write(0x04, 0x48),
    RegisterOp::write(0x05, 0x18),
    RegisterOp::write(0x06, 0x50),
    RegisterOp::write(0x07, 0x10),
    RegisterOp::write(0x08, 0x38),
    RegisterOp::write(0x0a, 0x80),
    RegisterOp::write(0x21, 0x04),
    RegisterOp::page(0),
    RegisterOp::write(0x20, 0x03),
    RegisterOp::page(0),
];

// 320x240, 2x2 subsampled.
const QVGA_OPS: &[RegisterOp] = &[
    RegisterOp::page(0),
    RegisterOp::write(0xb6, 0x01),
    RegisterOp::write(0xfd, 0x01),
    RegisterOp::write(0xfa, 0x00),
    // Crop window
    RegisterOp::page(0),
    RegisterOp::write(0x90, 0x01),
    RegisterOp::write(0x91, 0x00),
    RegisterOp::write(0x92, 0x00),
    RegisterOp::write(0x93, 0x00),
    RegisterOp::write(0x94, 0x00),
    RegisterOp::write(0x95, 0x00),
    RegisterOp::write(0x96, 0xf0),
    RegisterOp::write(0x97, 0x01),
    RegisterOp::write(0x98, 0x40),
    RegisterOp::write(0x99, 0x55),
    RegisterOp::write(0x9a, 0x06),
    RegisterOp::write(0x9b, 0x01),
    RegisterOp::write(0x9c, 0x00),
    RegisterOp::write(0x9d, 0x00),
    RegisterOp::write(0x9e, 0x00),
    RegisterOp::write(0x9f, 0x01),
    RegisterOp::write(0xa0, 0x00),
    RegisterOp::write(0xa1, 0x00),
    RegisterOp::write(0xa2, 0x00),
    // White balance
    RegisterOp::page(0),
    RegisterOp::write(0xec, 0x02),
    RegisterOp::write(0xed, 0x02),
    RegisterOp::write(0xee, 0x30),
    RegisterOp::write(0xef, 0x48),
    RegisterOp::page(2),
    RegisterOp::write(0x9d, 0x08),
    RegisterOp::page(1),
    RegisterOp::write(0x74, 0x00),
    // Exposure
    RegisterOp::page(1),
    RegisterOp::write(0x01, 0x04),
    RegisterOp::write(0x02, 0x60),
    RegisterOp::write(0x03, 0x02),
    RegisterOp::write(0x04, 0x48),
    RegisterOp::write(0x05, 0x18),
    RegisterOp::write(0x06, 0x50),
    RegisterOp::write(0x07, 0x10),
    RegisterOp::write(0x08, 0x38),
    RegisterOp::write(0x0a, 0x80),
    RegisterOp::write(0x21, 0x04),
    RegisterOp::page(0),
    RegisterOp::write(0x20, 0x03),
    RegisterOp::page(0),
];

// 640x480, 2x2 subsampled.
const VGA_OPS: &[RegisterOp] = &[
    RegisterOp::page(0),
    RegisterOp::write(0xb6, 0x01),
    RegisterOp::write(0xfd, 0x01),
    RegisterOp::write(0xfa, 0x00),
    // Crop window
    RegisterOp::page(0),
    RegisterOp::write(0x90, 0x01),
    RegisterOp::write(0x91, 0x00),
    RegisterOp::write(0x92, 0x00),
    RegisterOp::write(0x93, 0x00),
    RegisterOp::write(0x94, 0x00),
    RegisterOp::write(0x95, 0x01),
    RegisterOp::write(0x96, 0xe0),
    RegisterOp::write(0x97, 0x02),
    RegisterOp::write(0x98, 0x80),
    RegisterOp::write(0x99, 0x55),
    RegisterOp::write(0x9a, 0x06),
    RegisterOp::write(0x9b, 0x01),
    RegisterOp::write(0x9c, 0x23),
    RegisterOp::write(0x9d, 0x00),
    RegisterOp::write(0x9e, 0x00),
    RegisterOp::write(0x9f, 0x01),
    RegisterOp::write(0xa0, 0x23),
    RegisterOp::write(0xa1, 0x00),
    RegisterOp::write(0xa2, 0x00),
    // White balance
    RegisterOp::page(0),
    RegisterOp::write(0xec, 0x02),
    RegisterOp::write(0xed, 0x02),
    RegisterOp::write(0xee, 0x30),
    RegisterOp::write(0xef, 0x48),
    RegisterOp::page(2),
    RegisterOp::write(0x9d, 0x08),
    RegisterOp::page(1),
    RegisterOp::write(0x74, 0x00),
    // Exposure
    RegisterOp::page(1),
    RegisterOp::write(0x01, 0x04),
    RegisterOp::write(0x02, 0x60),
    RegisterOp::write(0x03, 0x02),
    RegisterOp::write(0x04, 0x48),
    RegisterOp::write(0x05, 0x18),
    RegisterOp::write(0x06, 0x50),
    RegisterOp::write(0x07, 0x10),
    RegisterOp::write(0x08, 0x38),
    RegisterOp::write(0x0a, 0x80),
    RegisterOp::write(0x21, 0x04),
    RegisterOp::page(0),
    RegisterOp::write(0x20, 0x03),
    RegisterOp::page(0),
];

// 800x600, 20 fps.
const SVGA_OPS: &[RegisterOp] = &[
    RegisterOp::page(0),
    RegisterOp::write(0x05, 0x02),
    RegisterOp::write(0x06, 0x20),
    RegisterOp::write(0x07, 0x03),
    RegisterOp::write(0x08, 0x80),
    RegisterOp::write(0xb6, 0x01),
    RegisterOp::write(0xfd, 0x03),
    RegisterOp::write(0xfa, 0x00),
    RegisterOp::write(0x18, 0x42),
    // Crop window
    RegisterOp::page(0),
    RegisterOp::write(0x90, 0x01),
    RegisterOp::write(0x91, 0x00),
    RegisterOp::write(0x92, 0x00),
    RegisterOp::write(0x93, 0x00),
    RegisterOp::write(0x94, 0x00),
    RegisterOp::write(0x95, 0x02),
    RegisterOp::write(0x96, 0x58),
    RegisterOp::write(0x97, 0x03),
    RegisterOp::write(0x98, 0x20),
    RegisterOp::write(0x99, 0x11),
    RegisterOp::write(0x9a, 0x06),
    // White balance
    RegisterOp::page(0),
    RegisterOp::write(0xec, 0x02),
    RegisterOp::write(0xed, 0x02),
    RegisterOp::write(0xee, 0x30),
    RegisterOp::write(0xef, 0x48),
    RegisterOp::page(2),
    RegisterOp::write(0x9d, 0x08),
    RegisterOp::page(1),
    RegisterOp::write(0x74, 0x00),
    // Exposure
    RegisterOp::page(1),
    RegisterOp::write(0x01, 0x04),
    RegisterOp::write(0x02, 0x60),
    RegisterOp::write(0x03, 0x02),
    RegisterOp::write(0x04, 0x48),
    RegisterOp::write(0x05, 0x18),
    RegisterOp::write(0x06, 0x50),
    RegisterOp::write(0x07, 0x10),
    RegisterOp::write(0x08, 0x38),
    RegisterOp::write(0x0a, 0x80),
    RegisterOp::write(0x21, 0x04),
    RegisterOp::page(0),
    RegisterOp::write(0x20, 0x03),
    RegisterOp::page(0),
];

// 1600x1200 full array readout.
const UXGA_OPS: &[RegisterOp] = &[
    RegisterOp::page(0),
    RegisterOp::write(0xfd, 0x00),
    RegisterOp::write(0xfa, 0x11),
    // Crop window
    RegisterOp::page(0),
    RegisterOp::write(0x90, 0x01),
    RegisterOp::write(0x91, 0x00),
    RegisterOp::write(0x92, 0x00),
    RegisterOp::write(0x93, 0x00),
    RegisterOp::write(0x94, 0x00),
    RegisterOp::write(0x95, 0x04),
    RegisterOp::write(0x96, 0xb0),
    RegisterOp::write(0x97, 0x06),
    RegisterOp::write(0x98, 0x40),
    RegisterOp::write(0x99, 0x11),
    RegisterOp::write(0x9a, 0x06),
    // White balance
    RegisterOp::page(0),
    RegisterOp::write(0xec, 0x06),
    RegisterOp::write(0xed, 0x04),
    RegisterOp::write(0xee, 0x60),
    RegisterOp::write(0xef, 0x90),
    RegisterOp::page(1),
    RegisterOp::write(0x74, 0x01),
    // Exposure
    RegisterOp::page(1),
    RegisterOp::write(0x01, 0x04),
    RegisterOp::write(0x02, 0xc0),
    RegisterOp::write(0x03, 0x04),
    RegisterOp::write(0x04, 0x90),
    RegisterOp::write(0x05, 0x30),
    RegisterOp::write(0x06, 0x90),
    RegisterOp::write(0x07, 0x30),
    RegisterOp::write(0x08, 0x80),
    RegisterOp::write(0x0a, 0x82),
    RegisterOp::page(1),
    RegisterOp::write(0x21, 0x15),
    RegisterOp::page(0),
    RegisterOp::write(0x20, 0x15),
    RegisterOp::page(0),
];

