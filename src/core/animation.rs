// Auto-rotation state.
//
// The angle only moves through `RotationAnimator::advance`, which is a pure
// function of elapsed time. Where that time comes from is a `Clock`, so the
// browser uses `instant` and tests use `ManualClock`.

use instant::Instant;
use std::cell::Cell;
use std::f64::consts::TAU;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    Rotating,
    Paused,
}

#[derive(Clone, Debug)]
pub struct RotationAnimator {
    angle: f64,
    mode: RotationMode,
    step: f64,
    interval: Duration,
    pending: Duration,
}

impl RotationAnimator {
    pub fn new(step: f64, interval: Duration) -> Self {
        Self {
            angle: 0.0,
            mode: RotationMode::Rotating,
            step,
            interval: interval.max(Duration::from_millis(1)),
            pending: Duration::ZERO,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn is_rotating(&self) -> bool {
        self.mode == RotationMode::Rotating
    }

    /// Apply one step per whole interval in `elapsed`; returns the step count.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_rotating() {
            return 0;
        }
        self.pending += elapsed;
        let ticks = (self.pending.as_nanos() / self.interval.as_nanos()) as u32;
        if ticks > 0 {
            self.pending -= self.interval * ticks;
            self.angle = (self.angle + self.step * ticks as f64).rem_euclid(TAU);
        }
        ticks
    }

    pub fn set_rotating(&mut self, rotating: bool) {
        self.mode = if rotating {
            RotationMode::Rotating
        } else {
            RotationMode::Paused
        };
        self.pending = Duration::ZERO;
    }

    /// Flip between Rotating and Paused. The angle is left as is.
    pub fn toggle(&mut self) -> RotationMode {
        self.set_rotating(!self.is_rotating());
        self.mode
    }

    pub fn reset_angle(&mut self) {
        self.angle = 0.0;
        self.pending = Duration::ZERO;
    }
}

pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[derive(Default, Clone, Copy)]
pub struct InstantClock;

impl Clock for InstantClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

/// Feeds clock readings into a `RotationAnimator`.
pub struct RotationDriver<C: Clock> {
    clock: C,
    last: Instant,
    animator: RotationAnimator,
}

impl<C: Clock> RotationDriver<C> {
    pub fn new(clock: C, animator: RotationAnimator) -> Self {
        let last = clock.now();
        Self {
            clock,
            last,
            animator,
        }
    }

    pub fn animator(&self) -> &RotationAnimator {
        &self.animator
    }

    /// Advance by the time since the last call; true if the angle moved.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let elapsed = if now > self.last {
            now - self.last
        } else {
            Duration::ZERO
        };
        self.last = now;
        self.animator.advance(elapsed) > 0
    }

    pub fn toggle(&mut self) -> RotationMode {
        self.last = self.clock.now();
        self.animator.toggle()
    }

    pub fn set_rotating(&mut self, rotating: bool) {
        self.last = self.clock.now();
        self.animator.set_rotating(rotating);
    }

    pub fn reset_angle(&mut self) {
        self.last = self.clock.now();
        self.animator.reset_angle();
    }
}
