// Everything around the dial: score, hour progress bar, greeting and the
// theme button.

use macroquad::prelude::*;

use crate::greeting::Greeting;
use crate::render::draw_text_centered;
use crate::theme::Theme;

// Score text color while the highlight is showing.
const SCORE_HIGHLIGHT: Color = Color::new(0.282, 0.906, 0.533, 1.0);
const SCORE_SIZE: u16 = 30;
const GREETING_SIZE: u16 = 24;
const BUTTON_SIZE: u16 = 20;

// Where things go on screen. Only depends on the window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    // Center of the "Score: N" text, above the dial.
    pub score: Vec2,
    // Center of the clock face.
    pub clock_center: Vec2,
    // Track of the hour progress bar, below the dial.
    pub progress_bar: Rect,
    // Center of the greeting text.
    pub greeting: Vec2,
    // The theme toggle button; clicks inside it flip the theme.
    pub button: Rect,
}

impl Layout {
    pub fn for_width(width: f32) -> Layout {
        let mid = width / 2.0;
        Layout {
            score: vec2(mid, 44.0),
            clock_center: vec2(mid, 250.0),
            progress_bar: Rect::new(mid - 150.0, 430.0, 300.0, 12.0),
            greeting: vec2(mid, 490.0),
            button: Rect::new(mid - 70.0, 540.0, 140.0, 40.0),
        }
    }

    // Did a click at `point` land on the theme button?
    pub fn hits_button(&self, point: Vec2) -> bool {
        self.button.contains(point)
    }
}

// What the HUD shows this frame.
pub struct HudView<'a> {
    // Current score, shown as "Score: N".
    pub score: u64,
    // Text scale for the score: 1.0 normally, larger while highlighted.
    pub highlight_scale: f32,
    // True for the short window after a rollover; turns the score green.
    pub highlighted: bool,
    // 0.0..1.0 through the current hour.
    pub hour_progress: f32,
    // Which of the five greetings to show.
    pub greeting: Greeting,
    // Picks the palette and the button caption.
    pub theme: Theme,
    // Custom font, if one was loaded; None means macroquad's built-in font.
    pub font: Option<&'a Font>,
}

pub fn draw_hud(layout: &Layout, view: &HudView) {
    let palette = view.theme.palette();

    // Score, bigger and green right after a rollover.
    let score_color = if view.highlighted {
        SCORE_HIGHLIGHT
    } else {
        palette.score
    };
    draw_text_centered(
        &format!("Score: {}", view.score),
        layout.score,
        view.font,
        SCORE_SIZE,
        view.highlight_scale,
        score_color,
    );

    // Hour progress: the track, then the filled portion on top.
    let bar = layout.progress_bar;
    draw_rectangle(bar.x, bar.y, bar.w, bar.h, palette.bar_track);
    draw_rectangle(
        bar.x,
        bar.y,
        fill_width(bar.w, view.hour_progress),
        bar.h,
        palette.bar_fill,
    );

    // The custom font is the only one that can show the Myanmar greetings.
    let greeting = match view.font {
        Some(_) => view.greeting.text(),
        None => view.greeting.ascii(),
    };
    draw_text_centered(
        greeting,
        layout.greeting,
        view.font,
        GREETING_SIZE,
        1.0,
        palette.text,
    );

    let b = layout.button;
    draw_rectangle(b.x, b.y, b.w, b.h, palette.button);
    draw_text_centered(
        view.theme.button_label(),
        b.center(),
        view.font,
        BUTTON_SIZE,
        1.0,
        palette.button_text,
    );
}

// Width of the filled part of a bar, for a fraction clamped to 0..=1.
pub fn fill_width(total: f32, fraction: f32) -> f32 {
    total * fraction.clamp(0.0, 1.0)
}
