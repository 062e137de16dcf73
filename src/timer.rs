/// Millisecond timestamp from the monotonic clock. Wraps after ~49 days;
/// comparisons are wrap-aware.
pub type Instant = fugit::TimerInstantU32<1_000>;
pub type Duration = fugit::MillisDurationU32;

pub const SETTLE_DELAY: Duration = Duration::from_ticks(200);
pub const CONTROL_INTERVAL: Duration = Duration::from_ticks(1000);
pub const LOOP_DELAY_MS: u32 = 10;

/// Monotonic time source
pub trait Clock {
    fn now(&mut self) -> Instant;
}

/// Remembers when each of `N` inputs last got through and keeps it shut
/// for `window` afterwards.
pub struct SettleTimer<const N: usize> {
    window: Duration,
    last_accepted: [Option<Instant>; N],
}

impl<const N: usize> SettleTimer<N> {
    pub fn new(window: Duration) -> SettleTimer<N> {
        Self {
            window,
            last_accepted: [None; N],
        }
    }

    /// Accepts a press of `index` at `now` if its window is open, and
    /// restarts the window when it does.
    /// An out of range index is never accepted.
    pub fn accept(&mut self, index: usize, now: Instant) -> bool {
        let Some(slot) = self.last_accepted.get_mut(index) else {
            return false;
        };
        let open = match *slot {
            None => true,
            // a clock that went backwards should not lock the button out
            Some(last) => now
                .checked_duration_since(last)
                .map_or(true, |elapsed| elapsed >= self.window),
        };
        if open {
            *slot = Some(now);
        }
        open
    }
}

/// Fires once every `interval`, the first time immediately
pub struct Periodic {
    interval: Duration,
    last: Option<Instant>,
}

impl Periodic {
    pub fn new(interval: Duration) -> Periodic {
        Self {
            interval,
            last: None,
        }
    }

    pub fn is_due(&mut self, now: Instant) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .map_or(true, |elapsed| elapsed >= self.interval),
        };
        if due {
            self.last = Some(now);
        }
        due
    }
}
