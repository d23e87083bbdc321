//! Negotiate a format against the simulated GC2145 and report what the
//! engine resolved and what it wrote.

use clap::Parser;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use gc2145::format::FORMATS;
use gc2145::regs::{FLIP_CONTROL, OUTPUT_FORMAT};
use gc2145::sim::{PowerLine, SimDelay, SimPin, SimulatedSensor};
use gc2145::{
    Config, Control, ExternalOscillator, FormatRequest, FrameFormat, Gc2145, MbusCode, Parts,
    SensorSubdev, TrialFormat, Which,
};
use serde::Serialize;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Media bus code: a name such as YUYV8_2X8 or a hex value.
    #[arg(short, long, default_value = "UYVY8_2X8", value_parser = parse_code)]
    code: MbusCode,

    /// Fail instead of rounding to the nearest mode.
    #[arg(long)]
    exact: bool,

    /// Only try the format; do not program the sensor.
    #[arg(long)]
    trial: bool,

    #[arg(long)]
    hflip: bool,

    #[arg(long)]
    vflip: bool,

    /// Also write the per-mode crop program.
    #[arg(long)]
    apply_mode_program: bool,

    /// Reference clock fed to the sensor, in Hz.
    #[arg(long, default_value_t = 24_000_000)]
    xclk: u32,

    /// NAK the nth register write after attach.
    #[arg(long)]
    fail_at_write: Option<u32>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_code(s: &str) -> Result<MbusCode, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16)
            .map(MbusCode)
            .map_err(|e| format!("bad code {}: {}", s, e));
    }
    FORMATS
        .iter()
        .map(|f| f.code)
        .find(|code| code.name().is_some_and(|name| name.eq_ignore_ascii_case(s)))
        .ok_or_else(|| format!("unknown code {}", s))
}

#[derive(Serialize)]
struct Resolved {
    width: u32,
    height: u32,
    code: String,
    colorspace: String,
    ycbcr_enc: String,
    quantization: String,
    xfer_func: String,
}

impl From<FrameFormat> for Resolved {
    fn from(f: FrameFormat) -> Self {
        Self {
            width: f.width,
            height: f.height,
            code: f.code.to_string(),
            colorspace: format!("{:?}", f.colorspace),
            ycbcr_enc: format!("{:?}", f.ycbcr_enc),
            quantization: format!("{:?}", f.quantization),
            xfer_func: format!("{:?}", f.xfer_func),
        }
    }
}

#[derive(Serialize)]
struct Report {
    chip_id: String,
    requested: String,
    resolved: Resolved,
    committed: Resolved,
    mode: String,
    hflip: i32,
    vflip: i32,
    output_format_reg: String,
    flip_reg: String,
    writes_completed: u32,
    reads: u32,
    delay_us: u64,
}

type Sensor =
    Gc2145<CriticalSectionRawMutex, SimulatedSensor, SimPin, SimPin, ExternalOscillator, SimDelay>;

fn run(args: &Args) -> Result<Report, gc2145::Error> {
    let config = Config {
        apply_mode_program: args.apply_mode_program,
        ..Config::default()
    };
    let mut sim = SimulatedSensor::new();
    if let Some(k) = args.fail_at_write {
        sim.fail_at_write(k);
    }
    let line: &'static PowerLine = Box::leak(Box::new(PowerLine::new()));
    let parts = Parts {
        i2c: sim.wired(line),
        pwdn: SimPin::wired(line),
        reset: SimPin::default(),
        clock: ExternalOscillator::new(args.xclk),
        delay: SimDelay::default(),
    };

    let sensor: Sensor = Gc2145::attach(config, parts).map_err(|(e, _)| e)?;
    let chip_id = sensor.identify()?;
    sensor.set_power(true)?;

    let mut request = FormatRequest::new(args.width, args.height, args.code);
    if args.exact {
        request = request.exact();
    }

    let resolved = if args.trial {
        let mut slot = TrialFormat::default();
        sensor.set_format(0, Which::Trial(&mut slot), &request)?
    } else {
        sensor.set_format(0, Which::Active, &request)?
    };
    tracing::info!(
        "{}x{} {} -> {}x{} {}",
        args.width,
        args.height,
        args.code,
        resolved.width,
        resolved.height,
        resolved.code
    );

    if args.hflip {
        sensor.set_control(Control::HFlip, 1)?;
    }
    if args.vflip {
        sensor.set_control(Control::VFlip, 1)?;
    }
    let hflip = sensor.get_control(Control::HFlip)?;
    let vflip = sensor.get_control(Control::VFlip)?;

    sensor.log_status();
    let status = sensor.status();
    sensor.set_power(false)?;

    let parts = sensor.detach();
    let sim = parts.i2c;
    Ok(Report {
        chip_id: format!("{:#06x}", chip_id),
        requested: format!("{}x{} {}", args.width, args.height, args.code),
        resolved: resolved.into(),
        committed: status.format.into(),
        mode: format!("{:?}", status.mode),
        hflip,
        vflip,
        output_format_reg: format!("{:#04x}", sim.register(0, OUTPUT_FORMAT)),
        flip_reg: format!("{:#04x}", sim.register(0, FLIP_CONTROL)),
        writes_completed: sim.writes_completed(),
        reads: sim.reads(),
        delay_us: parts.delay.elapsed_ns() / 1000,
    })
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let report = match run(&args) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("serializing report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("chip id      {}", report.chip_id);
    println!("requested    {}", report.requested);
    println!(
        "resolved     {}x{} {} ({}, {}, {}, {})",
        report.resolved.width,
        report.resolved.height,
        report.resolved.code,
        report.resolved.colorspace,
        report.resolved.ycbcr_enc,
        report.resolved.quantization,
        report.resolved.xfer_func
    );
    println!(
        "committed    {}x{} {} [{}]",
        report.committed.width, report.committed.height, report.committed.code, report.mode
    );
    println!("flip         h={} v={} reg={}", report.hflip, report.vflip, report.flip_reg);
    println!("out format   {}", report.output_format_reg);
    println!(
        "bus          {} writes, {} reads, {} us of delays",
        report.writes_completed, report.reads, report.delay_us
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("YUYV8_2X8"), Ok(MbusCode::YUYV8_2X8));
        assert_eq!(parse_code("sbggr8_1x8"), Ok(MbusCode::SBGGR8_1X8));
        assert_eq!(parse_code("0x2008"), Ok(MbusCode::YUYV8_2X8));
        assert_eq!(parse_code("0x1234"), Ok(MbusCode(0x1234)));
        assert!(parse_code("mjpeg").is_err());
    }

    #[test]
    fn test_trial_run_leaves_default_committed() {
        let args = Args::parse_from(["gc2145_probe", "--width", "320", "--height", "240", "--trial"]);
        let report = run(&args).unwrap();
        assert_eq!((report.resolved.width, report.resolved.height), (320, 240));
        assert_eq!((report.committed.width, report.committed.height), (800, 600));
    }

    #[test]
    fn test_vflip_run() {
        let args = Args::parse_from(["gc2145_probe", "--code", "YUYV8_2X8", "--vflip"]);
        let report = run(&args).unwrap();
        assert_eq!(report.vflip, 1);
        assert_eq!(report.output_format_reg, "0x02");
    }
}
