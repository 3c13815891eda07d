/// Constant-deceleration fling physics, advanced by polling.
///
/// A fling starts at `start` with `velocity` (positions per second) and slows down at a fixed
/// rate until it stops or reaches one of its bounds. Nothing runs in the background: callers
/// sample it with [`FlingIntegrator::compute_offset`] from their frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingIntegrator {
    deceleration: f32,
    start: f32,
    velocity: f32,
    min: f32,
    max: f32,
    start_ms: u64,
    /// Seconds until the velocity reaches zero.
    duration: f32,
    current: f32,
    finished: bool,
}

impl FlingIntegrator {
    pub fn new(deceleration: f32) -> Self {
        debug_assert!(deceleration > 0.0, "deceleration must be positive");
        Self {
            deceleration,
            start: 0.0,
            velocity: 0.0,
            min: 0.0,
            max: 0.0,
            start_ms: 0,
            duration: 0.0,
            current: 0.0,
            finished: true,
        }
    }

    pub fn deceleration(&self) -> f32 {
        self.deceleration
    }

    /// Starts a fling, replacing whatever was in flight.
    pub fn fling(&mut self, start: f32, velocity: f32, min: f32, max: f32, now_ms: u64) {
        let min = if min.is_nan() { f32::NEG_INFINITY } else { min };
        let max = if max.is_nan() { f32::INFINITY } else { max };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let velocity = if velocity.is_nan() { 0.0 } else { velocity };
        self.start = start;
        self.velocity = velocity;
        self.min = min;
        self.max = max;
        self.start_ms = now_ms;
        self.duration = abs(velocity) / self.deceleration;
        self.current = start.clamp(min, max);
        self.finished = velocity == 0.0;
        vtrace!(start, velocity, min, max, duration = self.duration, "fling");
    }

    /// Samples the fling at `now_ms`.
    ///
    /// Returns `false` once the fling has finished and there is nothing new to report.
    pub fn compute_offset(&mut self, now_ms: u64) -> bool {
        if self.finished {
            return false;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32 / 1000.0;
        let t = elapsed.min(self.duration);
        let travelled = self.velocity * t - signum(self.velocity) * self.deceleration * t * t / 2.0;
        let unclamped = self.start + travelled;
        self.current = unclamped.clamp(self.min, self.max);
        if t >= self.duration || unclamped != self.current {
            self.finished = true;
        }
        true
    }

    /// Position reported by the last [`Self::compute_offset`].
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Where the fling comes to rest.
    pub fn final_position(&self) -> f32 {
        let distance = signum(self.velocity) * self.velocity * self.velocity
            / (2.0 * self.deceleration);
        (self.start + distance).clamp(self.min, self.max)
    }

    /// Jumps to the resting position. Safe to call when nothing is in flight.
    pub fn force_finished(&mut self) {
        if self.finished {
            return;
        }
        self.current = self.final_position();
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

fn signum(v: f32) -> f32 {
    if v < 0.0 {
        -1.0
    } else if v > 0.0 {
        1.0
    } else {
        0.0
    }
}
