use std::sync::Arc;
use std::thread;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use gc2145::format::FORMATS;
use gc2145::mode::MODES;
use gc2145::regs::{FLIP_CONTROL, FLIP_HORIZONTAL, FLIP_VERTICAL, OUTPUT_FORMAT, PAGE_SELECT};
use gc2145::sim::{PowerLine, SimDelay, SimPin, SimulatedSensor};
use gc2145::tables::INIT;
use gc2145::{
    Config, Control, Error, ExternalOscillator, Fault, FormatRequest, Gc2145, Lookup, MbusCode,
    ModeId, Parts, PowerState, SensorSubdev, TrialFormat, Which,
};
use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

type Sensor = Gc2145<CriticalSectionRawMutex, SimulatedSensor, SimPin, SimPin, ExternalOscillator, SimDelay>;
type SimParts = Parts<SimulatedSensor, SimPin, SimPin, ExternalOscillator, SimDelay>;

const XCLK: u32 = 24_000_000;

/// Sensor and power-down pin share one net, so the sensor only answers
/// while the engine has it powered.
fn parts(sim: SimulatedSensor) -> SimParts {
    let line: &'static PowerLine = Box::leak(Box::new(PowerLine::new()));
    Parts {
        i2c: sim.wired(line),
        pwdn: SimPin::wired(line),
        reset: SimPin::default(),
        clock: ExternalOscillator::new(XCLK),
        delay: SimDelay::default(),
    }
}

fn attach_with(config: Config, parts: SimParts) -> Result<Sensor, (Error, SimParts)> {
    Gc2145::attach(config, parts)
}

fn attach(sim: SimulatedSensor) -> Sensor {
    attach_with(Config::default(), parts(sim)).unwrap_or_else(|(e, _)| panic!("attach: {}", e))
}

/// Register writes issued by programming a format: init, page 0, patch.
fn power_on_writes() -> u32 {
    INIT.write_count() as u32 + 2
}

/// Value the init program leaves in `addr` on `page`.
fn init_value(page: u8, addr: u8) -> u8 {
    let mut current = 0;
    let mut value = 0;
    for op in INIT.ops() {
        if op.addr == PAGE_SELECT {
            current = op.val & 0x03;
            if op.val & 0x80 != 0 {
                value = 0;
            }
        } else if current == page && op.addr == addr {
            value = op.val;
        }
    }
    value
}

const POWERED_DOWN: Error = Error::Transport {
    addr: PAGE_SELECT,
    kind: ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
};

#[test]
fn test_end_to_end_negotiation() {
    let sensor = attach(SimulatedSensor::new());
    sensor.set_power(true).unwrap();

    let yuyv = FormatRequest::new(640, 480, MbusCode::YUYV8_2X8);
    let set = sensor.set_format(0, Which::Active, &yuyv).unwrap();
    assert_eq!((set.width, set.height, set.code), (640, 480, MbusCode::YUYV8_2X8));

    let got = sensor.get_format(0, Which::Active).unwrap();
    assert_eq!(got, set);
    assert_eq!(sensor.status().mode, ModeId::Vga640x480);

    // Unsupported code: default code, requested size kept.
    let bogus = FormatRequest::new(640, 480, MbusCode(0x4001));
    let set = sensor.set_format(0, Which::Active, &bogus).unwrap();
    assert_eq!((set.width, set.height, set.code), (640, 480, MbusCode::UYVY8_2X8));

    let parts = sensor.detach();
    assert_eq!(parts.i2c.register(0, OUTPUT_FORMAT), 0x00);
    assert_eq!(parts.i2c.page(), 0);
    assert_eq!(parts.i2c.writes_completed(), 3 * power_on_writes());
}

#[test]
fn test_unsupported_codes_fall_back() {
    let sensor = attach(SimulatedSensor::new());
    sensor.set_power(true).unwrap();
    for code in [0u32, 0x1008, 0x2011, 0x3002, u32::MAX] {
        let request = FormatRequest::new(800, 600, MbusCode(code));
        let set = sensor.set_format(0, Which::Active, &request).unwrap();
        assert_eq!(set.code, MbusCode::UYVY8_2X8, "code {:#x}", code);
    }
}

#[test]
fn test_unpowered_active_format_powers_for_programming() {
    let sensor = attach(SimulatedSensor::new());
    let request = FormatRequest::new(320, 240, MbusCode::YUYV8_2X8);
    sensor.set_format(0, Which::Active, &request).unwrap();

    // Programmed under a temporary reference, then back off.
    let status = sensor.status();
    assert_eq!(status.power, PowerState::Off);
    assert_eq!(status.power_count, 0);
    assert_eq!(status.mode, ModeId::Qvga320x240);

    // The next power up programs the committed format again.
    sensor.set_power(true).unwrap();
    sensor.set_power(false).unwrap();

    let parts = sensor.detach();
    assert_eq!(parts.i2c.register(0, OUTPUT_FORMAT), 0x02);
    assert_eq!(parts.i2c.writes_completed(), 2 * power_on_writes());
    assert!(parts.pwdn.is_high());
}

#[test]
fn test_unpowered_active_format_failure_keeps_previous() {
    let mut sim = SimulatedSensor::new();
    sim.fail_at_write(1);
    let sensor = attach(sim);
    let before = sensor.get_format(0, Which::Active).unwrap();

    let request = FormatRequest::new(320, 240, MbusCode::YUYV8_2X8);
    assert!(matches!(
        sensor.set_format(0, Which::Active, &request),
        Err(Error::Transport { .. })
    ));
    assert_eq!(sensor.get_format(0, Which::Active), Ok(before));
    let status = sensor.status();
    assert_eq!(status.power, PowerState::Off);
    assert_eq!(status.power_count, 0);

    // A later power up programs the old format, not the failed one.
    sensor.set_power(true).unwrap();
    assert_eq!(sensor.get_format(0, Which::Active), Ok(before));
    let parts = sensor.detach();
    assert_eq!(parts.i2c.register(0, OUTPUT_FORMAT), 0x00);
}

#[test]
fn test_failed_power_up_programming_keeps_committed_format() {
    let mut sim = SimulatedSensor::new();
    // First programming (the active change) succeeds; power up NAKs.
    sim.fail_at_write(power_on_writes() + 1);
    let sensor = attach(sim);

    let request = FormatRequest::new(640, 480, MbusCode::YUYV8_2X8);
    let committed = sensor.set_format(0, Which::Active, &request).unwrap();

    assert!(matches!(sensor.set_power(true), Err(Error::Transport { .. })));
    assert_eq!(sensor.get_format(0, Which::Active), Ok(committed));
    assert_eq!(sensor.status().power, PowerState::Off);
}

#[test]
fn test_bad_pad_is_rejected() {
    let sensor = attach(SimulatedSensor::new());
    let request = FormatRequest::new(640, 480, MbusCode::YUYV8_2X8);
    let mut slot = TrialFormat::default();
    let bad = Err(Error::InvalidArgument("pad index out of range"));

    for pad in [1, 2, u32::MAX] {
        assert_eq!(sensor.enumerate_formats(pad, 0).map(|_| ()), bad);
        assert_eq!(
            sensor.enumerate_frame_sizes(pad, 0, MbusCode::UYVY8_2X8).map(|_| ()),
            bad
        );
        assert_eq!(sensor.get_format(pad, Which::Active).map(|_| ()), bad);
        assert_eq!(
            sensor.set_format(pad, Which::Trial(&mut slot), &request).map(|_| ()),
            bad
        );
        assert_eq!(sensor.set_format(pad, Which::Active, &request).map(|_| ()), bad);
    }
    assert_eq!(slot, TrialFormat::default());
}

#[test]
fn test_enumeration() {
    let sensor = attach(SimulatedSensor::new());

    for (i, format) in FORMATS.iter().enumerate() {
        assert_eq!(sensor.enumerate_formats(0, i as u32), Ok(format.code));
    }
    assert_eq!(
        sensor.enumerate_formats(0, FORMATS.len() as u32),
        Err(Error::NotFound(Lookup::FormatIndex(6)))
    );

    for (i, mode) in MODES.iter().enumerate() {
        let size = sensor
            .enumerate_frame_sizes(0, i as u32, MbusCode::SBGGR8_1X8)
            .unwrap();
        assert_eq!((size.min_width, size.max_width), (mode.active_width, mode.active_width));
        assert_eq!((size.min_height, size.max_height), (mode.active_height, mode.active_height));
    }
    assert_eq!(
        sensor.enumerate_frame_sizes(0, 4, MbusCode::UYVY8_2X8),
        Err(Error::NotFound(Lookup::FrameSizeIndex(4)))
    );
    assert_eq!(
        sensor.enumerate_frame_sizes(0, 0, MbusCode(0x2011)),
        Err(Error::InvalidArgument("unsupported media bus code"))
    );
}

#[test]
fn test_power_reference_counting() {
    let sensor = attach(SimulatedSensor::new());

    // 1. Two on, one off: still powered.
    sensor.set_power(true).unwrap();
    sensor.set_power(true).unwrap();
    sensor.set_power(false).unwrap();
    let status = sensor.status();
    assert_eq!(status.power_count, 1);
    assert_eq!(status.power, PowerState::PoweredIdle);

    // 2. Last reference off.
    sensor.set_power(false).unwrap();
    assert_eq!(sensor.status().power, PowerState::Off);

    // 3. One more is a caller bug.
    assert_eq!(
        sensor.set_power(false),
        Err(Error::LogicFault(Fault::PowerUnderflow))
    );
    assert_eq!(sensor.status().power_count, 0);

    // Only the first power on programs the sensor.
    let parts = sensor.detach();
    assert_eq!(parts.i2c.writes_completed(), power_on_writes());
    assert!(parts.pwdn.is_high());
}

#[test]
fn test_vflip_preserves_other_bits() {
    let sensor = attach(SimulatedSensor::new());
    sensor.set_power(true).unwrap();
    let before = init_value(0, FLIP_CONTROL);

    // 1. Clear, then set: only bit 1 moves.
    sensor.set_control(Control::VFlip, 0).unwrap();
    assert_eq!(sensor.get_control(Control::VFlip), Ok(0));
    sensor.set_control(Control::VFlip, 1).unwrap();
    assert_eq!(sensor.get_control(Control::VFlip), Ok(1));
    assert_eq!(
        sensor.get_control(Control::HFlip),
        Ok(i32::from(before & FLIP_HORIZONTAL != 0))
    );

    let parts = sensor.detach();
    assert_eq!(parts.i2c.register(0, FLIP_CONTROL), before | FLIP_VERTICAL);
    // Two power ups (4 x 100us each) plus two 20ms settles.
    assert_eq!(parts.delay.elapsed_ns(), 40_800_000);
}

#[test]
fn test_flip_clear_and_bad_values() {
    let sensor = attach(SimulatedSensor::new());
    sensor.set_power(true).unwrap();
    let before = init_value(0, FLIP_CONTROL);

    sensor.set_control(Control::HFlip, 0).unwrap();
    assert_eq!(sensor.get_control(Control::HFlip), Ok(0));
    assert_eq!(
        sensor.get_control(Control::VFlip),
        Ok(i32::from(before & FLIP_VERTICAL != 0))
    );

    for value in [-1, 2, 255] {
        assert_eq!(
            sensor.set_control(Control::VFlip, value),
            Err(Error::InvalidArgument("flip value must be 0 or 1"))
        );
    }
    assert_eq!(sensor.get_control(Control::PixelRate), Ok(120_000_000));
    assert_eq!(
        sensor.set_control(Control::PixelRate, 1),
        Err(Error::InvalidArgument("control is read-only"))
    );

    let parts = sensor.detach();
    assert_eq!(parts.i2c.register(0, FLIP_CONTROL), before & !FLIP_HORIZONTAL);
}

#[test]
fn test_flip_on_unpowered_sensor_fails() {
    let sensor = attach(SimulatedSensor::new());
    assert_eq!(sensor.set_control(Control::VFlip, 1), Err(POWERED_DOWN));
    assert_eq!(sensor.get_control(Control::HFlip), Err(POWERED_DOWN));

    let parts = sensor.detach();
    assert_eq!(parts.i2c.writes_attempted(), 0);
}

#[test]
fn test_identification_mismatch_powers_off() {
    // Either byte off is a mismatch.
    for id in [0x2155u16, 0x2100, 0x0045, 0x0000] {
        let result = attach_with(Config::default(), parts(SimulatedSensor::with_chip_id(id)));
        let Err((err, parts)) = result else {
            panic!("attached to chip id {:#06x}", id);
        };
        assert_eq!(err, Error::DeviceNotFound { found: id });
        // Power-down is active high.
        assert!(parts.pwdn.is_high());
        assert!(parts.i2c.is_powered_down());
    }
}

#[test]
fn test_failed_identify_read_powers_off() {
    let mut sim = SimulatedSensor::new();
    // Attach reads two id bytes; fail the first byte of the next read.
    sim.fail_at_read(3);
    let sensor = attach(sim);
    sensor.set_power(true).unwrap();
    sensor.set_stream(true).unwrap();

    assert!(matches!(sensor.identify(), Err(Error::Transport { .. })));
    let status = sensor.status();
    assert_eq!(status.power, PowerState::Off);
    assert_eq!(status.power_count, 0);
    assert!(!status.streaming);
}

#[test]
fn test_reattach_after_failed_identification() {
    let wrong = Config {
        chip_id: 0x2155,
        ..Config::default()
    };
    let Err((err, parts)) = attach_with(wrong, parts(SimulatedSensor::new())) else {
        panic!("attached with the wrong chip id");
    };
    assert_eq!(err, Error::DeviceNotFound { found: 0x2145 });

    // Same hardware, right id.
    let sensor = attach_with(Config::default(), parts).unwrap_or_else(|(e, _)| panic!("{}", e));
    assert_eq!(sensor.identify(), Ok(0x2145));
    sensor.set_power(true).unwrap();
    assert_eq!(sensor.status().power, PowerState::PoweredIdle);
}

#[test]
fn test_custom_chip_id() {
    let config = Config {
        chip_id: 0x2155,
        ..Config::default()
    };
    let sensor = attach_with(config, parts(SimulatedSensor::with_chip_id(0x2155)))
        .unwrap_or_else(|(e, _)| panic!("{}", e));
    assert_eq!(sensor.identify(), Ok(0x2155));
    assert_eq!(sensor.status().power, PowerState::Off);
}

#[test]
fn test_attach_rejects_out_of_range_clock() {
    for rate in [0, 5_999_999, 48_000_001] {
        let mut hw = parts(SimulatedSensor::new());
        hw.clock = ExternalOscillator::new(rate);
        let Err((err, hw)) = attach_with(Config::default(), hw) else {
            panic!("attached with a {} Hz clock", rate);
        };
        assert_eq!(err, Error::InvalidArgument("reference clock rate out of range"));
        // Rejected before any signal or bus activity.
        assert_eq!(hw.pwdn.edges(), 0);
        assert_eq!(hw.i2c.reads(), 0);
    }
    for rate in [6_000_000, 48_000_000] {
        let mut hw = parts(SimulatedSensor::new());
        hw.clock = ExternalOscillator::new(rate);
        assert!(attach_with(Config::default(), hw).is_ok());
    }
}

#[test]
fn test_failed_active_format_keeps_previous() {
    let mut sim = SimulatedSensor::new();
    sim.fail_at_write(power_on_writes() + 10);
    let sensor = attach(sim);
    sensor.set_power(true).unwrap();

    let before = sensor.get_format(0, Which::Active).unwrap();
    let request = FormatRequest::new(640, 480, MbusCode::YUYV8_2X8);
    let err = sensor.set_format(0, Which::Active, &request).unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));

    assert_eq!(sensor.get_format(0, Which::Active), Ok(before));
    let status = sensor.status();
    assert_eq!(status.mode, ModeId::Svga800x600);
    assert_eq!(status.power, PowerState::PoweredIdle);

    let parts = sensor.detach();
    assert_eq!(parts.i2c.writes_completed(), power_on_writes() + 9);
}

#[test]
fn test_failed_power_on_programming_powers_off() {
    let mut sim = SimulatedSensor::new();
    sim.fail_at_write(3);
    let sensor = attach(sim);

    assert!(matches!(sensor.set_power(true), Err(Error::Transport { .. })));
    let status = sensor.status();
    assert_eq!(status.power, PowerState::Off);
    assert_eq!(status.power_count, 0);

    // The NAK was one-shot; a fresh attempt programs from scratch.
    sensor.set_power(true).unwrap();
    assert_eq!(sensor.status().power_count, 1);
}

#[test]
fn test_trial_does_not_commit() {
    let sensor = attach(SimulatedSensor::new());
    sensor.set_power(true).unwrap();

    let mut slot = TrialFormat::default();
    assert_eq!(sensor.get_format(0, Which::Trial(&mut slot)), Ok(*slot.format()));

    let request = FormatRequest::new(1600, 1200, MbusCode::RGB565_2X8_BE);
    let tried = sensor.set_format(0, Which::Trial(&mut slot), &request).unwrap();
    assert_eq!((tried.width, tried.height), (1600, 1200));
    assert_eq!(sensor.get_format(0, Which::Trial(&mut slot)), Ok(tried));

    let active = sensor.get_format(0, Which::Active).unwrap();
    assert_eq!((active.width, active.height, active.code), (800, 600, MbusCode::UYVY8_2X8));

    // Exact requests that miss the catalog fail without touching the slot.
    let odd = FormatRequest::new(1024, 768, MbusCode::YUYV8_2X8).exact();
    assert_eq!(
        sensor.set_format(0, Which::Trial(&mut slot), &odd),
        Err(Error::NotFound(Lookup::Mode {
            width: 1024,
            height: 768
        }))
    );
    assert_eq!(*slot.format(), tried);

    let parts = sensor.detach();
    assert_eq!(parts.i2c.writes_completed(), power_on_writes());
}

#[test]
fn test_stream_flag_and_detach() {
    let sensor = attach(SimulatedSensor::new());
    sensor.set_power(true).unwrap();
    sensor.set_stream(true).unwrap();
    assert!(sensor.status().streaming);
    sensor.log_status();

    sensor.set_power(false).unwrap();
    assert!(!sensor.status().streaming);

    sensor.set_power(true).unwrap();
    let parts = sensor.detach();
    assert!(parts.pwdn.is_high());
}

#[test]
fn test_concurrent_callers() {
    let sensor = Arc::new(attach(SimulatedSensor::new()));
    // Held across the run so flips always reach a powered sensor.
    sensor.set_power(true).unwrap();
    let requests = [
        FormatRequest::new(320, 240, MbusCode::YUYV8_2X8),
        FormatRequest::new(640, 480, MbusCode::VYUY8_2X8),
        FormatRequest::new(800, 600, MbusCode::SBGGR8_1X8),
        FormatRequest::new(1600, 1200, MbusCode::RGB565_2X8_BE),
    ];

    let handles: Vec<_> = requests
        .into_iter()
        .map(|request| {
            let sensor = sensor.clone();
            thread::spawn(move || {
                let mut slot = TrialFormat::default();
                for i in 0..8 {
                    sensor.set_power(true).unwrap();
                    let tried = sensor.set_format(0, Which::Trial(&mut slot), &request).unwrap();
                    assert_eq!(sensor.get_format(0, Which::Trial(&mut slot)), Ok(tried));
                    assert_eq!(tried.code, request.code);

                    sensor.set_format(0, Which::Active, &request).unwrap();
                    sensor.set_control(Control::HFlip, i % 2).unwrap();
                    sensor.set_power(false).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let status = sensor.status();
    assert_eq!(status.power_count, 1);
    assert!(requests
        .iter()
        .any(|r| (r.width, r.height, r.code) == (status.format.width, status.format.height, status.format.code)));
}
