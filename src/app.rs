// The clock app: owns every piece of state and runs once per frame.

use log::{debug, info};
use macroquad::prelude::*;

use crate::clock::{ClockReading, Face, Period};
use crate::greeting::Greeting;
use crate::hud::{HudView, Layout, draw_hud};
use crate::render::draw_clock;
use crate::scheduler::{Flow, FrameTask};
use crate::score::{ScoreHighlight, ScoreState};
use crate::theme::Theme;
use crate::time_source::TimeSource;

// Everything the non-drawing half of a frame worked out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    // Score after this frame's rollover check.
    pub score: u64,
    // True only on the frame where the hour rolled over.
    pub scored: bool,
    // How far through the current hour we are, 0.0..1.0, for the fill bar.
    pub hour_progress: f32,
    // Greeting picked from the current 24-hour value.
    pub greeting: Greeting,
}

pub struct ClockApp<C: TimeSource> {
    // Where "now" comes from; the system clock outside of tests.
    clock: C,
    // Points plus the hour seen on the previous frame.
    score: ScoreState,
    // The short emphasis on the score text after a rollover.
    highlight: ScoreHighlight,
    // Light or dark, flipped only by the button.
    theme: Theme,
    // Custom font if one was configured and loaded; macroquad's default otherwise.
    font: Option<Font>,
}

impl<C: TimeSource> ClockApp<C> {
    pub fn new(clock: C, font: Option<Font>) -> ClockApp<C> {
        // Seed the last-seen hour with the current one so startup doesn't score.
        let start = clock.now();
        ClockApp {
            clock,
            score: ScoreState::new(start.hour),
            highlight: ScoreHighlight::default(),
            theme: Theme::default(),
            font,
        }
    }

    pub fn score(&self) -> u64 {
        self.score.score()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn highlight(&self) -> &ScoreHighlight {
        &self.highlight
    }

    // The theme button was clicked.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        debug!("theme switched to {:?}", self.theme);
    }

    // Score, highlight, progress and greeting for this frame. `now` is
    // monotonic seconds and only drives the highlight timer.
    pub fn update(&mut self, reading: ClockReading, now: f64) -> FrameState {
        if self.highlight.tick(now) {
            debug!("score highlight reverted");
        }

        let scored = self.score.observe(reading.hour);
        if scored {
            self.highlight.trigger(now);
            info!(
                "hour rolled over to {:02}:00, score is now {}",
                self.score.last_hour(),
                self.score()
            );
        }

        FrameState {
            score: self.score(),
            scored,
            hour_progress: Period::Hour.fraction(&reading),
            greeting: Greeting::for_hour(reading.hour),
        }
    }

    fn draw_hud(&self, layout: &Layout, state: &FrameState) {
        draw_hud(
            layout,
            &HudView {
                score: state.score,
                highlight_scale: self.highlight().scale(),
                highlighted: self.highlight().is_active(),
                hour_progress: state.hour_progress,
                greeting: state.greeting,
                theme: self.theme(),
                font: self.font.as_ref(),
            },
        );
    }
}

impl<C: TimeSource> FrameTask for ClockApp<C> {
    fn frame(&mut self) -> Flow {
        // Fresh reading every frame; nothing about the time is cached.
        let reading = self.clock.now();
        let layout = Layout::for_width(screen_width());

        // The only input we react to: a click on the theme button.
        if is_mouse_button_pressed(MouseButton::Left)
            && layout.hits_button(Vec2::from(mouse_position()))
        {
            self.toggle_theme();
        }

        clear_background(self.theme().palette().background);
        draw_clock(&Face::new(layout.clock_center), &reading, self.font.as_ref());

        let state = self.update(reading, get_time());
        self.draw_hud(&layout, &state);

        // The clock runs for as long as the window is open.
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A clock stopped at a fixed time.
    struct FakeClock(ClockReading);

    impl FakeClock {
        fn at(hour: u32, minute: u32, second: u32, millis: u32) -> FakeClock {
            FakeClock(ClockReading::new(hour, minute, second, millis))
        }
    }

    impl TimeSource for FakeClock {
        fn now(&self) -> ClockReading {
            self.0
        }
    }

    #[test]
    fn afternoon_scenario() {
        let mut app = ClockApp::new(FakeClock::at(14, 30, 0, 0), None);
        let state = app.update(ClockReading::new(14, 30, 0, 0), 0.0);
        assert_eq!(state.greeting, Greeting::Afternoon);
        assert_eq!(state.hour_progress, 0.5);
        assert_eq!(state.score, 0);
        assert!(!state.scored);
    }

    #[test]
    fn startup_hour_does_not_score() {
        let mut app = ClockApp::new(FakeClock::at(9, 59, 59, 900), None);
        let state = app.update(ClockReading::new(9, 59, 59, 950), 0.0);
        assert!(!state.scored);
        assert_eq!(app.score(), 0);
    }

    #[test]
    fn rollover_scores_and_highlights() {
        let mut app = ClockApp::new(FakeClock::at(9, 59, 59, 900), None);
        let state = app.update(ClockReading::new(10, 0, 0, 10), 100.0);
        assert!(state.scored);
        assert_eq!(state.score, 10);
        assert!(app.highlight().is_active());

        // Later frames in the same hour neither score nor keep the highlight forever.
        let state = app.update(ClockReading::new(10, 0, 0, 300), 100.3);
        assert!(!state.scored);
        assert!(app.highlight().is_active());
        let state = app.update(ClockReading::new(10, 0, 0, 700), 100.7);
        assert!(!state.scored);
        assert_eq!(state.score, 10);
        assert!(!app.highlight().is_active());
    }

    #[test]
    fn hud_reads_through_the_accessors() {
        let mut app = ClockApp::new(FakeClock::at(22, 59, 59, 0), None);
        app.toggle_theme();
        let state = app.update(ClockReading::new(23, 0, 0, 0), 5.0);
        // Frame output, accessors and the underlying state agree.
        assert_eq!(state.score, app.score());
        assert_eq!(app.score.last_hour(), 23);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.highlight().scale(), ScoreHighlight::SCALE);
    }

    #[test]
    fn score_accumulates_over_the_day() {
        let mut app = ClockApp::new(FakeClock::at(0, 0, 0, 0), None);
        let mut now = 0.0;
        for hour in (1..24).chain(0..3) {
            for minute in [0, 30] {
                now += 1800.0;
                app.update(ClockReading::new(hour, minute, 0, 0), now);
            }
        }
        // 23 rollovers up to 23:00, then 00:00, 01:00, 02:00.
        assert_eq!(app.score(), 260);
    }

    #[test]
    fn theme_does_not_touch_the_clock() {
        let mut app = ClockApp::new(FakeClock::at(7, 15, 0, 0), None);
        let before = app.update(ClockReading::new(7, 15, 0, 0), 1.0);
        app.toggle_theme();
        assert_eq!(app.theme(), Theme::Dark);
        let after = app.update(ClockReading::new(7, 15, 0, 0), 1.0);
        assert_eq!(before, after);
        app.toggle_theme();
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.score(), 0);
    }
}
