//! RGB values and contrast-aware label color selection.

use serde::Serialize;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness, Rec. 601 weights.
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }
}

/// Backgrounds with luminance below this read as dark.
const LABEL_LUMINANCE_THRESHOLD: f64 = 140.0;

/// Foreground color chosen for readability against a token background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelColor {
    Light,
    Dark,
}

impl LabelColor {
    /// Dark backgrounds get light text, light backgrounds get dark text.
    #[must_use]
    pub fn for_background(background: Rgb) -> Self {
        if background.luminance() < LABEL_LUMINANCE_THRESHOLD {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// Concrete foreground color for this label choice.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Light => Rgb::new(255, 255, 255),
            Self::Dark => Rgb::new(17, 17, 17),
        }
    }
}
