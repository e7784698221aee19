// Clock math: everything that turns "what time is it" into angles,
// fractions and points on the face. Nothing in here draws.

use std::f32::consts::PI;

use macroquad::prelude::{Vec2, vec2};

// Radius of the clock face in pixels.
pub const RADIUS: f32 = 150.0;

// A single snapshot of the wall clock, taken fresh every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    // Full 24-hour value, 0..=23. Hour rollover is detected on this field.
    pub hour: u32,
    // 0..=59
    pub minute: u32,
    // 0..=59
    pub second: u32,
    // 0..=999
    pub millis: u32,
}

impl ClockReading {
    // Build a reading from its parts. Values are trusted as well-formed.
    pub fn new(hour: u32, minute: u32, second: u32, millis: u32) -> ClockReading {
        ClockReading {
            hour,
            minute,
            second,
            millis,
        }
    }

    // The hour on a 12-hour dial, 0..=11 (0 means the hand points at 12).
    pub fn hour12(&self) -> u32 {
        self.hour % 12
    }
}

// The three hands of the clock, in the order they are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    // Short and thick, one turn every 12 hours.
    Hour,
    // One turn per hour.
    Minute,
    // Thin and long, one turn per minute, moving smoothly with the milliseconds.
    Second,
}

impl Hand {
    // Drawing order: the second hand goes last so it sits on top.
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    // Angle in degrees, clockwise from 12 o'clock.
    pub fn angle(self, reading: &ClockReading) -> f32 {
        match self {
            Hand::Hour => (reading.hour12() as f32 + reading.minute as f32 / 60.0) * 30.0,
            Hand::Minute => (reading.minute as f32 + reading.second as f32 / 60.0) * 6.0,
            Hand::Second => (reading.second as f32 + reading.millis as f32 / 1000.0) * 6.0,
        }
    }

    // Length of the hand as a fraction of the face radius.
    pub fn length_factor(self) -> f32 {
        match self {
            Hand::Hour => 0.54,
            Hand::Minute => 0.70,
            Hand::Second => 0.82,
        }
    }

    pub fn length(self) -> f32 {
        RADIUS * self.length_factor()
    }
}

// A span of time the widget shows progress through.
// The hour fill bar and the minute ring are two readings of the same idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    // Swept by the progress ring; uses sub-second precision.
    Minute,
    // Filled by the progress bar; whole seconds only.
    Hour,
}

impl Period {
    // How far through the current period we are, in 0.0..1.0.
    pub fn fraction(self, reading: &ClockReading) -> f32 {
        match self {
            Period::Minute => (reading.second as f32 + reading.millis as f32 / 1000.0) / 60.0,
            Period::Hour => (reading.minute * 60 + reading.second) as f32 / 3600.0,
        }
    }

    // The same fraction expressed as a clockwise sweep from the top, in degrees.
    pub fn sweep_degrees(self, reading: &ClockReading) -> f32 {
        self.fraction(reading) * 360.0
    }
}

// Convert a clock angle (0° = 12 o'clock, clockwise) into the drawing surface
// convention (0 rad = pointing right, clockwise because y grows downwards).
pub fn to_surface_radians(clock_degrees: f32) -> f32 {
    (clock_degrees - 90.0).to_radians()
}

// Where on the dial the numeral `n` (1..=12) sits, in surface radians.
pub fn numeral_radians(n: u32) -> f32 {
    (n as f32 - 3.0) * PI / 6.0
}

// One tick mark around the rim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    // Surface radians.
    pub radians: f32,
    // Hour ticks are major, the remaining minute positions are minor.
    pub major: bool,
}

// 12 major ticks at 30° steps, then 48 minor ticks at 6° steps.
// Minor positions that fall on an hour are skipped.
pub fn ticks() -> impl Iterator<Item = Tick> {
    let major = (0..12).map(|i| Tick {
        radians: i as f32 * PI / 6.0,
        major: true,
    });
    let minor = (0..60).filter(|i| i % 5 != 0).map(|i| Tick {
        radians: i as f32 * PI / 30.0,
        major: false,
    });
    major.chain(minor)
}

// The fixed center and radius everything is drawn around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    // Pixel position of the dial's center; also where every hand starts.
    pub center: Vec2,
    // Outer radius of the glass face.
    pub radius: f32,
}

impl Face {
    pub fn new(center: Vec2) -> Face {
        Face {
            center,
            radius: RADIUS,
        }
    }

    // A point `distance` pixels out from the center along `radians`.
    pub fn point_at(&self, radians: f32, distance: f32) -> Vec2 {
        self.center + vec2(radians.cos(), radians.sin()) * distance
    }

    // The tip of a hand for the given reading.
    pub fn hand_tip(&self, hand: Hand, reading: &ClockReading) -> Vec2 {
        self.point_at(to_surface_radians(hand.angle(reading)), hand.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn half_past_two_in_the_afternoon() {
        let r = ClockReading::new(14, 30, 0, 0);
        assert_eq!(Hand::Hour.angle(&r), 75.0);
        assert_eq!(Hand::Minute.angle(&r), 180.0);
        assert_eq!(Hand::Second.angle(&r), 0.0);
        assert_eq!(Period::Hour.fraction(&r), 0.5);
    }

    #[test]
    fn hour_fraction_edges() {
        assert_eq!(Period::Hour.fraction(&ClockReading::new(3, 0, 0, 0)), 0.0);
        assert_eq!(Period::Hour.fraction(&ClockReading::new(3, 30, 0, 0)), 0.5);
        let end = Period::Hour.fraction(&ClockReading::new(3, 59, 59, 999));
        assert!(close(end, 3599.0 / 3600.0));
        assert!(end < 1.0);
    }

    #[test]
    fn hour_fraction_ignores_millis() {
        let a = ClockReading::new(8, 12, 40, 0);
        let b = ClockReading::new(8, 12, 40, 950);
        assert_eq!(Period::Hour.fraction(&a), Period::Hour.fraction(&b));
    }

    #[test]
    fn hand_lengths() {
        assert!(close(Hand::Hour.length(), 81.0));
        assert!(close(Hand::Minute.length(), 105.0));
        assert!(close(Hand::Second.length(), 123.0));
    }

    #[test]
    fn zero_degrees_points_up() {
        let face = Face::new(vec2(200.0, 200.0));
        let tip = face.point_at(to_surface_radians(0.0), 100.0);
        assert!(close(tip.x, 200.0));
        assert!(close(tip.y, 100.0));

        let three = face.point_at(to_surface_radians(90.0), 100.0);
        assert!(close(three.x, 300.0));
        assert!(close(three.y, 200.0));
    }

    #[test]
    fn twelve_is_at_the_top() {
        let face = Face::new(vec2(0.0, 0.0));
        let p = face.point_at(numeral_radians(12), 10.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, -10.0));
        let p = face.point_at(numeral_radians(3), 10.0);
        assert!(close(p.x, 10.0));
        assert!(close(p.y, 0.0));
    }

    #[test]
    fn tick_counts() {
        let all: Vec<Tick> = ticks().collect();
        assert_eq!(all.iter().filter(|t| t.major).count(), 12);
        assert_eq!(all.iter().filter(|t| !t.major).count(), 48);
        // No minor tick lands on an hour position.
        for minor in all.iter().filter(|t| !t.major) {
            let steps = minor.radians / (PI / 6.0);
            assert!((steps - steps.round()).abs() > 1e-3);
        }
    }

    #[test]
    fn hand_tip_at_noon() {
        let face = Face::new(vec2(100.0, 100.0));
        let r = ClockReading::new(12, 0, 0, 0);
        let tip = face.hand_tip(Hand::Hour, &r);
        assert!(close(tip.x, 100.0));
        assert!(close(tip.y, 100.0 - Hand::Hour.length()));
    }

    proptest! {
        #[test]
        fn hour_hand_formula(hour in 0u32..24, minute in 0u32..60, second in 0u32..60) {
            let r = ClockReading::new(hour, minute, second, 0);
            let expected = ((hour % 12) as f32 + minute as f32 / 60.0) * 30.0;
            let angle = Hand::Hour.angle(&r);
            prop_assert!(close(angle, expected % 360.0));
            prop_assert!((0.0..360.0).contains(&angle));
        }

        #[test]
        fn minute_hand_formula(minute in 0u32..60, second in 0u32..60) {
            let r = ClockReading::new(0, minute, second, 0);
            prop_assert!(close(Hand::Minute.angle(&r), (minute as f32 + second as f32 / 60.0) * 6.0));
        }

        #[test]
        fn second_hand_and_ring_agree(second in 0u32..60, millis in 0u32..1000) {
            let r = ClockReading::new(0, 0, second, millis);
            let angle = Hand::Second.angle(&r);
            prop_assert!(close(angle, (second as f32 + millis as f32 / 1000.0) * 6.0));
            prop_assert!(close(Period::Minute.sweep_degrees(&r), angle));
        }

        #[test]
        fn hour_fraction_in_range(minute in 0u32..60, second in 0u32..60) {
            let f = Period::Hour.fraction(&ClockReading::new(0, minute, second, 0));
            prop_assert!((0.0..1.0).contains(&f));
        }
    }
}
