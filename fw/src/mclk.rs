use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use gc2145::ReferenceClock;

const SYS_CLK_HZ: u32 = 125_000_000;
const TOP: u16 = 6;

/// MCLK generated by a PWM slice at sys_clk / (TOP + 1), 50% duty.
pub struct PwmClock<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> PwmClock<'d> {
    /// Takes a slice already bound to the MCLK pin. Starts gated.
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = PwmConfig::default();
        config.divider = fixed::FixedU16::from_num(1);
        config.top = TOP;
        config.compare_a = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl ReferenceClock for PwmClock<'_> {
    fn rate_hz(&self) -> u32 {
        SYS_CLK_HZ / (TOP as u32 + 1)
    }

    fn enable(&mut self) {
        self.config.compare_a = (TOP + 1) / 2;
        self.pwm.set_config(&self.config);
    }

    fn disable(&mut self) {
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
    }
}
