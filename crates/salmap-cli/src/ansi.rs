//! ANSI styled-text emission for segment lists and colormap legends.

use std::fmt::Write as _;

use salmap_core::color::Rgb;
use salmap_core::colormap::Colormap;
use salmap_core::range::ValueRange;
use salmap_core::render::Segment;

/// How colors are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    TrueColor,
    Ansi256,
    Plain,
}

/// Map 24-bit RGB onto the 256-color cube / greyscale ramp.
#[must_use]
pub fn rgb_to_ansi256(color: Rgb) -> u8 {
    let (r, g, b) = (color.r, color.g, color.b);
    // Greyscale ramp check
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return (((u16::from(r) - 8) * 24 / 247) as u8) + 232;
    }
    let ri = closest_cube_component(r);
    let gi = closest_cube_component(g);
    let bi = closest_cube_component(b);
    16 + 36 * ri + 6 * gi + bi
}

fn closest_cube_component(value: u8) -> u8 {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    let mut best = 0u8;
    let mut best_dist = u8::abs_diff(value, LEVELS[0]);
    for (i, level) in LEVELS.iter().enumerate().skip(1) {
        let dist = u8::abs_diff(value, *level);
        if dist < best_dist {
            best_dist = dist;
            best = i as u8;
        }
    }
    best
}

fn push_styled(out: &mut String, text: &str, bg: Rgb, fg: Rgb, mode: ColorMode) {
    match mode {
        ColorMode::Plain => out.push_str(text),
        ColorMode::TrueColor => {
            let _ = write!(
                out,
                "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{text}\x1b[0m",
                bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
            );
        }
        ColorMode::Ansi256 => {
            let _ = write!(
                out,
                "\x1b[48;5;{}m\x1b[38;5;{}m{text}\x1b[0m",
                rgb_to_ansi256(bg),
                rgb_to_ansi256(fg)
            );
        }
    }
}

/// Render a segment list as one styled terminal string.
///
/// Text with no resolved background (unknown saliency) passes through
/// unstyled; spaces and newlines are written verbatim.
#[must_use]
pub fn render_segments(segments: &[Segment], mode: ColorMode) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Newline => out.push('\n'),
            Segment::Space { value } => out.push_str(value),
            Segment::Text(text) => match text.background {
                Some(bg) => push_styled(&mut out, &text.text, bg, text.label.rgb(), mode),
                None => out.push_str(&text.text),
            },
        }
    }
    out
}

const LEGEND_GLYPHS: [char; 9] = ['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Render a colormap scale bar with min/max captions.
///
/// Plain mode falls back to an intensity glyph ramp so the legend stays
/// readable without color support.
#[must_use]
pub fn render_legend(colormap: Colormap, range: ValueRange, width: usize, mode: ColorMode) -> String {
    let width = width.max(2);
    let mut bar = String::new();
    for cell in 0..width {
        let t = cell as f64 / (width - 1) as f64;
        match mode {
            ColorMode::Plain => {
                let index = (t * (LEGEND_GLYPHS.len() - 1) as f64).round() as usize;
                bar.push(LEGEND_GLYPHS[index.min(LEGEND_GLYPHS.len() - 1)]);
            }
            _ => {
                let color = colormap.interpolate(t);
                push_styled(&mut bar, " ", color, color, mode);
            }
        }
    }
    format!("{:.2} {bar} {:.2}", range.min, range.max)
}
