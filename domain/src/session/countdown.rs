//! Round countdown.
//!
//! A pure, frame-driven timer: the caller feeds it elapsed wall-clock time
//! and forwards the signals it returns. It fires [`CountdownSignal::Timeout`]
//! at most once per [`Countdown::start`].

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownSignal {
    /// Remaining time after this frame
    Tick(Duration),
    /// The countdown reached zero
    Timeout,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    duration: Duration,
    remaining: Duration,
    running: bool,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reset to the full duration and begin ticking.
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
    }

    /// Halt ticking; the remaining time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance by one frame of `elapsed` time.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<CountdownSignal> {
        if !self.running {
            return Vec::new();
        }

        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.running = false;
            return vec![
                CountdownSignal::Tick(Duration::ZERO),
                CountdownSignal::Timeout,
            ];
        }
        vec![CountdownSignal::Tick(self.remaining)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeouts(signals: &[CountdownSignal]) -> usize {
        signals
            .iter()
            .filter(|s| matches!(s, CountdownSignal::Timeout))
            .count()
    }

    #[test]
    fn test_full_duration_fires_once() {
        let mut countdown = Countdown::new(Duration::from_secs(15));
        countdown.start();
        let signals = countdown.advance(Duration::from_secs(15));
        assert_eq!(
            signals,
            vec![
                CountdownSignal::Tick(Duration::ZERO),
                CountdownSignal::Timeout
            ]
        );
        assert_eq!(countdown.remaining(), Duration::ZERO);
        assert!(!countdown.is_running());

        assert!(countdown.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(countdown.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_frames_accumulate() {
        let mut countdown = Countdown::new(Duration::from_secs(15));
        countdown.start();
        let mut fired = 0;
        for _ in 0..200 {
            fired += timeouts(&countdown.advance(Duration::from_millis(100)));
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_tick_reports_remaining() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        countdown.start();
        assert_eq!(
            countdown.advance(Duration::from_secs(3)),
            vec![CountdownSignal::Tick(Duration::from_secs(7))]
        );
    }

    #[test]
    fn test_stop_keeps_remaining() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        countdown.start();
        countdown.advance(Duration::from_secs(4));
        countdown.stop();
        assert!(countdown.advance(Duration::from_secs(20)).is_empty());
        assert_eq!(countdown.remaining(), Duration::from_secs(6));
    }

    #[test]
    fn test_restart_rearms_timeout() {
        let mut countdown = Countdown::new(Duration::from_secs(1));
        countdown.start();
        assert_eq!(timeouts(&countdown.advance(Duration::from_secs(2))), 1);
        countdown.start();
        assert_eq!(countdown.remaining(), Duration::from_secs(1));
        assert_eq!(timeouts(&countdown.advance(Duration::from_secs(2))), 1);
    }
}
