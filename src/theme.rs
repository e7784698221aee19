// Light/dark styling for everything around the clock face.

use macroquad::prelude::Color;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    // Pale blue background, dark text. What the app starts in.
    #[default]
    Light,
    // Near-black background, light text.
    Dark,
}

// Colors the presentation layer reads. The face itself never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    // Window clear color.
    pub background: Color,
    // Greeting text.
    pub text: Color,
    // Score text when it isn't highlighted.
    pub score: Color,
    // Empty part of the hour progress bar.
    pub bar_track: Color,
    // Filled part of the hour progress bar.
    pub bar_fill: Color,
    // Theme button background.
    pub button: Color,
    // Theme button caption.
    pub button_text: Color,
}

const LIGHT: Palette = Palette {
    background: Color::new(0.91, 0.95, 1.0, 1.0),
    text: Color::new(0.18, 0.29, 0.49, 1.0),
    score: Color::new(0.23, 0.42, 0.91, 1.0),
    bar_track: Color::new(0.78, 0.86, 0.96, 1.0),
    bar_fill: Color::new(0.33, 0.59, 0.91, 1.0),
    button: Color::new(0.18, 0.29, 0.49, 1.0),
    button_text: Color::new(0.96, 0.98, 1.0, 1.0),
};

const DARK: Palette = Palette {
    background: Color::new(0.07, 0.09, 0.15, 1.0),
    text: Color::new(0.85, 0.91, 1.0, 1.0),
    score: Color::new(0.40, 0.91, 0.91, 1.0),
    bar_track: Color::new(0.16, 0.20, 0.30, 1.0),
    bar_fill: Color::new(0.40, 0.91, 0.91, 1.0),
    button: Color::new(0.85, 0.91, 1.0, 1.0),
    button_text: Color::new(0.07, 0.09, 0.15, 1.0),
};

impl Theme {
    // Flip between light and dark.
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    // Caption for the toggle button: names the theme you'd switch to.
    pub fn button_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}
