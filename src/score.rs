// The hour counter game: +10 points every time the hour changes,
// plus the short "pop" the score text does when it happens.

// Points awarded per hour rollover.
pub const SCORE_STEP: u64 = 10;

// How long the score stays highlighted after a rollover, in seconds.
pub const HIGHLIGHT_SECS: f64 = 0.6;

// Score plus the hour we saw on the previous frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    score: u64,
    last_hour: u32,
}

impl ScoreState {
    // Start at zero, remembering the hour at startup so the first frame doesn't score.
    pub fn new(start_hour: u32) -> ScoreState {
        ScoreState {
            score: 0,
            last_hour: start_hour,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn last_hour(&self) -> u32 {
        self.last_hour
    }

    // Feed the current 24-hour value. Returns true on the frame the hour changed.
    pub fn observe(&mut self, hour: u32) -> bool {
        if hour == self.last_hour {
            return false;
        }
        self.last_hour = hour;
        // Only ever goes up.
        self.score = self.score.saturating_add(SCORE_STEP);
        true
    }
}

// A deferred action that fires once at a deadline and can be cancelled or re-armed.
// Times are seconds on a monotonic clock (macroquad's `get_time`).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OneShot {
    deadline: Option<f64>,
}

impl OneShot {
    // Schedule to fire `delay` seconds after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: f64, delay: f64) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    // Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

// The transient emphasis on the score text: bigger and green until the revert fires.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScoreHighlight {
    revert: OneShot,
}

impl ScoreHighlight {
    // Scale applied to the score text while highlighted.
    pub const SCALE: f32 = 1.26;

    // Start (or restart) the highlight.
    pub fn trigger(&mut self, now: f64) {
        // A pending revert from an earlier rollover must not cut this one short.
        self.revert.cancel();
        self.revert.arm(now, HIGHLIGHT_SECS);
    }

    // Run the deferred revert if it is due. Returns true when it fired.
    pub fn tick(&mut self, now: f64) -> bool {
        self.revert.poll(now)
    }

    pub fn is_active(&self) -> bool {
        self.revert.is_pending()
    }

    pub fn scale(&self) -> f32 {
        if self.is_active() { Self::SCALE } else { 1.0 }
    }
}
