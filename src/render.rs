// Drawing the clock face itself: glass face, ticks, numerals, the seconds
// ring, the three hands and the center dot.
//
// macroquad has no gradient paint or shadow blur, so both are faked:
// gradients are built from many thin slices with interpolated colors, and
// glow is a few wider, mostly transparent strokes drawn underneath.

use std::f32::consts::PI;

use macroquad::prelude::*;

use crate::clock::{ClockReading, Face, Hand, Period, numeral_radians, ticks};

// Build a color from 8-bit channels and a float alpha, like CSS rgba().
const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a)
}

// Glass face.
const FACE_INNER: Color = rgba(245, 255, 255, 0.95);
const FACE_OUTER: Color = rgba(200, 230, 255, 0.28);
const FACE_BORDER: Color = rgba(120, 180, 255, 0.25);
const FACE_INNER_RING: Color = rgba(58, 107, 231, 0.13);

// Tick marks.
const MAJOR_TICK: Color = rgba(123, 167, 214, 1.0);
const MAJOR_TICK_GLOW: Color = rgba(120, 200, 255, 0.19);
const MINOR_TICK: Color = rgba(179, 208, 249, 1.0);

const NUMERAL: Color = rgba(47, 74, 125, 1.0);
const NUMERAL_SIZE: u16 = 21;

// Seconds ring.
const RING_START: Color = rgba(103, 231, 231, 1.0);
const RING_END: Color = rgba(83, 151, 231, 1.0);
const RING_GLOW: Color = rgba(58, 123, 231, 1.0);

// Center ornament.
const DOT: Color = rgba(90, 140, 220, 0.95);
const DOT_GLOW: Color = rgba(129, 231, 194, 1.0);

// How many translucent layers make up one glow.
const GLOW_LAYERS: usize = 4;
// Opacity of each glow layer relative to the glow color.
const GLOW_ALPHA: f32 = 0.12;

// Per-hand stroke settings.
struct HandStyle {
    width: f32,
    color: Color,
    // Multiplies the base blur of 18px.
    glow: f32,
}

fn hand_style(hand: Hand) -> HandStyle {
    match hand {
        Hand::Hour => HandStyle {
            width: 7.0,
            color: rgba(58, 107, 231, 1.0),
            glow: 0.15,
        },
        Hand::Minute => HandStyle {
            width: 5.0,
            color: rgba(57, 231, 180, 1.0),
            glow: 0.18,
        },
        Hand::Second => HandStyle {
            width: 2.3,
            color: rgba(231, 107, 107, 1.0),
            glow: 0.22,
        },
    }
}

// Draw the whole dial for one frame, back to front.
pub fn draw_clock(face: &Face, reading: &ClockReading, font: Option<&Font>) {
    draw_face(face);
    draw_ticks(face);
    draw_numerals(face, font);
    draw_progress_ring(face, reading);
    // Hour, minute, then second so the second hand ends up on top.
    for hand in Hand::ALL {
        draw_hand(face, hand, reading);
    }
    draw_center_dot(face);
}

fn draw_face(face: &Face) {
    let c = face.center;
    let r = face.radius;

    // Radial gradient from 0.3R (inner color) out to R (outer color).
    // Paint from the rim inwards so every disc sits on top of the larger one.
    const STEPS: usize = 24;
    for i in 0..=STEPS {
        let t = i as f32 / STEPS as f32;
        let radius = r - (r - r * 0.3) * t;
        let mut color = lerp_color(FACE_OUTER, FACE_INNER, t);
        // Stacked translucent discs add up; spread the alpha across the slices.
        color.a /= (STEPS / 4) as f32;
        draw_circle(c.x, c.y, radius, color);
    }
    draw_circle(c.x, c.y, r * 0.3, FACE_INNER);

    // Outer border.
    draw_circle_lines(c.x, c.y, r, 7.0, FACE_BORDER);
    // Faint inner ring that reads as an inset shadow.
    draw_circle_lines(c.x, c.y, r - 14.0, 12.0, FACE_INNER_RING);
}

fn draw_ticks(face: &Face) {
    let r = face.radius;
    for tick in ticks() {
        if tick.major {
            let start = face.point_at(tick.radians, r - 18.0);
            let end = face.point_at(tick.radians, r - 6.0);
            draw_glow_line(start, end, 4.2, MAJOR_TICK_GLOW, 6.0);
            draw_line(start.x, start.y, end.x, end.y, 4.2, MAJOR_TICK);
        } else {
            let start = face.point_at(tick.radians, r - 14.0);
            let end = face.point_at(tick.radians, r - 7.0);
            draw_line(start.x, start.y, end.x, end.y, 1.2, MINOR_TICK);
        }
    }
}

fn draw_numerals(face: &Face, font: Option<&Font>) {
    for n in 1..=12u32 {
        let pos = face.point_at(numeral_radians(n), face.radius - 35.0);
        draw_text_centered(&n.to_string(), pos, font, NUMERAL_SIZE, 1.0, NUMERAL);
    }
}

// Arc from 12 o'clock, clockwise, covering the elapsed part of the current minute.
fn draw_progress_ring(face: &Face, reading: &ClockReading) {
    let sweep = Period::Minute.sweep_degrees(reading);
    if sweep <= 0.0 {
        return;
    }
    let radius = face.radius - 5.0;
    let width = 7.5;
    let start = -PI / 2.0;
    let end = sweep.to_radians() - PI / 2.0;

    // The gradient runs along the chord from the arc's start to its end, at full radius.
    let grad_from = face.point_at(start, face.radius);
    let grad_to = face.point_at(end, face.radius);

    // One segment per ~3 degrees keeps the arc smooth.
    let segments = (sweep / 3.0).ceil().max(1.0) as usize;
    let step = (end - start) / segments as f32;
    let points: Vec<Vec2> = (0..=segments)
        .map(|i| face.point_at(start + step * i as f32, radius))
        .collect();

    // Glow underneath the whole arc first.
    for pair in points.windows(2) {
        draw_glow_line(pair[0], pair[1], width, RING_GLOW, 13.0);
    }
    for pair in points.windows(2) {
        let t = gradient_t(grad_from, grad_to, (pair[0] + pair[1]) * 0.5);
        let color = lerp_color(RING_START, RING_END, t);
        draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, width, color);
        // Fill the gap at each joint; also gives the round caps at both ends.
        draw_circle(pair[0].x, pair[0].y, width / 2.0, color);
        draw_circle(pair[1].x, pair[1].y, width / 2.0, color);
    }
}

fn draw_hand(face: &Face, hand: Hand, reading: &ClockReading) {
    let style = hand_style(hand);
    let from = face.center;
    let to = face.hand_tip(hand, reading);
    draw_glow_line(from, to, style.width, style.color, 18.0 * style.glow);
    draw_line(from.x, from.y, to.x, to.y, style.width, style.color);
    // Round caps.
    draw_circle(from.x, from.y, style.width / 2.0, style.color);
    draw_circle(to.x, to.y, style.width / 2.0, style.color);
}

fn draw_center_dot(face: &Face) {
    let c = face.center;
    for i in (1..=GLOW_LAYERS).rev() {
        let spread = 14.0 * i as f32 / GLOW_LAYERS as f32;
        draw_circle(c.x, c.y, 8.0 + spread, with_alpha(DOT_GLOW, GLOW_ALPHA));
    }
    draw_circle(c.x, c.y, 8.0, DOT);
}

// Soft halo around a stroke, widest layer first.
fn draw_glow_line(from: Vec2, to: Vec2, width: f32, color: Color, blur: f32) {
    if blur <= 0.0 {
        return;
    }
    let color = with_alpha(color, color.a * GLOW_ALPHA);
    for i in (1..=GLOW_LAYERS).rev() {
        let w = width + blur * i as f32 / GLOW_LAYERS as f32;
        draw_line(from.x, from.y, to.x, to.y, w, color);
        draw_circle(from.x, from.y, w / 2.0, color);
        draw_circle(to.x, to.y, w / 2.0, color);
    }
}

// Draw `text` so that its visual center lands on `center`.
pub fn draw_text_centered(
    text: &str,
    center: Vec2,
    font: Option<&Font>,
    size: u16,
    scale: f32,
    color: Color,
) {
    let dims = measure_text(text, font, size, scale);
    draw_text_ex(
        text,
        center.x - dims.width / 2.0,
        center.y - dims.height / 2.0 + dims.offset_y,
        TextParams {
            font,
            font_size: size,
            font_scale: scale,
            color,
            ..Default::default()
        },
    );
}

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::new(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

// Position of `p` along a linear gradient from `from` to `to`, clamped to 0..=1.
fn gradient_t(from: Vec2, to: Vec2, p: Vec2) -> f32 {
    let axis = to - from;
    let len_sq = axis.length_squared();
    if len_sq <= f32::EPSILON {
        return 0.0;
    }
    ((p - from).dot(axis) / len_sq).clamp(0.0, 1.0)
}
