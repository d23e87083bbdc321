use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::config::{Config, Polarity};
use crate::error::{Error, Fault, Result};

/// The sensor's master clock input.
pub trait ReferenceClock {
    fn rate_hz(&self) -> u32;
    fn enable(&mut self);
    fn disable(&mut self);
}

/// A free-running oscillator wired straight to XCLK. Cannot be gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalOscillator {
    rate_hz: u32,
}

impl ExternalOscillator {
    pub const fn new(rate_hz: u32) -> Self {
        Self { rate_hz }
    }
}

impl ReferenceClock for ExternalOscillator {
    fn rate_hz(&self) -> u32 {
        self.rate_hz
    }

    fn enable(&mut self) {}

    fn disable(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Off,
    /// Supply released, reset pulse in progress.
    Powering,
    PoweredIdle,
}

fn level(polarity: Polarity, asserted: bool) -> PinState {
    match polarity {
        Polarity::ActiveHigh => PinState::from(asserted),
        Polarity::ActiveLow => PinState::from(!asserted),
    }
}

/// Drives the power-down and reset lines and gates the reference clock.
///
/// Physical transitions only happen on the 0->1 and 1->0 edges of the
/// reference count.
pub struct PowerSequencer<PWDN, RST, CLK> {
    pwdn: PWDN,
    reset: RST,
    clock: CLK,
    pwdn_polarity: Polarity,
    reset_polarity: Polarity,
    settle_us: u32,
    pulse_us: u32,
    state: PowerState,
    count: u32,
}

impl<PWDN, RST, CLK> PowerSequencer<PWDN, RST, CLK>
where
    PWDN: OutputPin,
    RST: OutputPin,
    CLK: ReferenceClock,
{
    pub fn new(pwdn: PWDN, reset: RST, clock: CLK, config: &Config) -> Self {
        Self {
            pwdn,
            reset,
            clock,
            pwdn_polarity: config.pwdn_polarity,
            reset_polarity: config.reset_polarity,
            settle_us: config.power_settle_us,
            pulse_us: config.reset_pulse_us,
            state: PowerState::Off,
            count: 0,
        }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_powered(&self) -> bool {
        self.state == PowerState::PoweredIdle
    }

    pub fn clock_rate_hz(&self) -> u32 {
        self.clock.rate_hz()
    }

    /// Take a power reference. Returns `true` if this call powered the
    /// device up.
    pub fn acquire<D: DelayNs>(&mut self, delay: &mut D) -> Result<bool> {
        if self.count > 0 {
            self.count += 1;
            return Ok(false);
        }
        self.power_up(delay)?;
        self.count = 1;
        Ok(true)
    }

    /// Drop a power reference. Returns `true` if this call powered the
    /// device down.
    ///
    /// Releasing with no reference held is a caller bug. It is logged at
    /// `error` and returned as [`Fault::PowerUnderflow`] without panicking.
    /// The count stays at zero.
    pub fn release(&mut self) -> Result<bool> {
        match self.count {
            0 => {
                log::error!("power off requested with no outstanding power on");
                Err(Error::LogicFault(Fault::PowerUnderflow))
            }
            1 => {
                self.count = 0;
                self.power_down()?;
                Ok(true)
            }
            _ => {
                self.count -= 1;
                Ok(false)
            }
        }
    }

    /// Power down regardless of outstanding references.
    pub fn force_off(&mut self) -> Result<()> {
        if self.count > 1 {
            log::warn!("forcing power off with {} references held", self.count);
        }
        self.count = 0;
        self.power_down()
    }

    pub fn release_parts(self) -> (PWDN, RST, CLK) {
        (self.pwdn, self.reset, self.clock)
    }

    fn set_pwdn(&mut self, asserted: bool) -> Result<()> {
        self.pwdn
            .set_state(level(self.pwdn_polarity, asserted))
            .map_err(Error::signal)
    }

    fn set_reset(&mut self, asserted: bool) -> Result<()> {
        self.reset
            .set_state(level(self.reset_polarity, asserted))
            .map_err(Error::signal)
    }

    fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.state = PowerState::Powering;
        self.clock.enable();
        if let Err(e) = self.sequence_up(delay) {
            log::error!("power up failed: {}", e);
            // Best effort: the line that failed may be the one we need.
            let _ = self.set_pwdn(true);
            self.clock.disable();
            self.state = PowerState::Off;
            return Err(e);
        }
        self.state = PowerState::PoweredIdle;
        log::debug!("powered up");
        Ok(())
    }

    fn sequence_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.set_pwdn(true)?;
        delay.delay_us(self.settle_us);
        self.set_pwdn(false)?;
        delay.delay_us(self.settle_us);

        self.set_reset(true)?;
        delay.delay_us(self.pulse_us);
        self.set_reset(false)?;
        delay.delay_us(self.pulse_us);
        Ok(())
    }

    fn power_down(&mut self) -> Result<()> {
        let result = self.set_pwdn(true);
        self.clock.disable();
        self.state = PowerState::Off;
        log::debug!("powered down");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinLevel, Transaction as PinTransaction,
    };
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Pwdn(bool),
        Reset(bool),
        Clock(bool),
        WaitUs(u32),
    }

    type Trace = Rc<RefCell<Vec<Event>>>;

    struct TracePin {
        trace: Trace,
        wrap: fn(bool) -> Event,
        fail: bool,
    }

    impl ErrorType for TracePin {
        type Error = ErrorKind;
    }

    impl OutputPin for TracePin {
        fn set_low(&mut self) -> core::result::Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.trace.borrow_mut().push((self.wrap)(false));
            Ok(())
        }

        fn set_high(&mut self) -> core::result::Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.trace.borrow_mut().push((self.wrap)(true));
            Ok(())
        }
    }

    struct TraceClock(Trace);

    impl ReferenceClock for TraceClock {
        fn rate_hz(&self) -> u32 {
            24_000_000
        }

        fn enable(&mut self) {
            self.0.borrow_mut().push(Event::Clock(true));
        }

        fn disable(&mut self) {
            self.0.borrow_mut().push(Event::Clock(false));
        }
    }

    struct TraceDelay(Trace);

    impl DelayNs for TraceDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Event::WaitUs(ns / 1000));
        }

        fn delay_us(&mut self, us: u32) {
            self.0.borrow_mut().push(Event::WaitUs(us));
        }
    }

    fn traced() -> (PowerSequencer<TracePin, TracePin, TraceClock>, TraceDelay, Trace) {
        let trace: Trace = Rc::default();
        let pwdn = TracePin {
            trace: trace.clone(),
            wrap: Event::Pwdn,
            fail: false,
        };
        let reset = TracePin {
            trace: trace.clone(),
            wrap: Event::Reset,
            fail: false,
        };
        let seq = PowerSequencer::new(
            pwdn,
            reset,
            TraceClock(trace.clone()),
            &Config::default(),
        );
        (seq, TraceDelay(trace.clone()), trace)
    }

    #[test]
    fn power_up_order() {
        let (mut seq, mut delay, trace) = traced();
        assert!(seq.acquire(&mut delay).unwrap());
        assert_eq!(seq.state(), PowerState::PoweredIdle);

        // pwdn is active high, reset active low.
        assert_eq!(
            *trace.borrow(),
            vec![
                Event::Clock(true),
                Event::Pwdn(true),
                Event::WaitUs(100),
                Event::Pwdn(false),
                Event::WaitUs(100),
                Event::Reset(false),
                Event::WaitUs(100),
                Event::Reset(true),
                Event::WaitUs(100),
            ]
        );
    }

    #[test]
    fn only_edges_of_the_count_touch_hardware() {
        let (mut seq, mut delay, trace) = traced();
        assert!(seq.acquire(&mut delay).unwrap());
        let after_first = trace.borrow().len();

        assert!(!seq.acquire(&mut delay).unwrap());
        assert!(!seq.release().unwrap());
        assert_eq!(seq.count(), 1);
        assert!(seq.is_powered());
        assert_eq!(trace.borrow().len(), after_first);

        assert!(seq.release().unwrap());
        assert_eq!(seq.count(), 0);
        assert_eq!(seq.state(), PowerState::Off);
        assert_eq!(
            trace.borrow()[after_first..],
            [Event::Pwdn(true), Event::Clock(false)]
        );
    }

    #[test]
    fn release_at_zero_is_a_logic_fault() {
        let (mut seq, _delay, trace) = traced();
        assert_eq!(
            seq.release(),
            Err(Error::LogicFault(Fault::PowerUnderflow))
        );
        assert_eq!(seq.count(), 0);
        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn force_off_drops_every_reference() {
        let (mut seq, mut delay, _trace) = traced();
        seq.acquire(&mut delay).unwrap();
        seq.acquire(&mut delay).unwrap();
        seq.force_off().unwrap();
        assert_eq!(seq.count(), 0);
        assert_eq!(seq.state(), PowerState::Off);
    }

    #[test]
    fn failed_signal_leaves_sequencer_off() {
        let trace: Trace = Rc::default();
        let pwdn = TracePin {
            trace: trace.clone(),
            wrap: Event::Pwdn,
            fail: false,
        };
        let reset = TracePin {
            trace: trace.clone(),
            wrap: Event::Reset,
            fail: true,
        };
        let mut seq = PowerSequencer::new(pwdn, reset, TraceClock(trace.clone()), &Config::default());

        assert_eq!(
            seq.acquire(&mut NoopDelay::new()),
            Err(Error::Signal(ErrorKind::Other))
        );
        assert_eq!(seq.state(), PowerState::Off);
        assert_eq!(seq.count(), 0);
        assert_eq!(trace.borrow().last(), Some(&Event::Clock(false)));
    }

    #[test]
    fn inverted_polarities() {
        let config = Config {
            pwdn_polarity: Polarity::ActiveLow,
            reset_polarity: Polarity::ActiveHigh,
            ..Config::default()
        };
        let pwdn_expect = [
            PinTransaction::set(PinLevel::Low),
            PinTransaction::set(PinLevel::High),
            PinTransaction::set(PinLevel::Low),
        ];
        let reset_expect = [
            PinTransaction::set(PinLevel::High),
            PinTransaction::set(PinLevel::Low),
        ];
        let mut pwdn = PinMock::new(&pwdn_expect);
        let mut reset = PinMock::new(&reset_expect);

        let mut seq = PowerSequencer::new(
            &mut pwdn,
            &mut reset,
            ExternalOscillator::new(24_000_000),
            &config,
        );
        seq.acquire(&mut NoopDelay::new()).unwrap();
        seq.release().unwrap();
        drop(seq);

        pwdn.done();
        reset.done();
    }
}
