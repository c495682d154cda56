//! Named colormaps: static ordered stop tables with piecewise-linear
//! interpolation between them.

use crate::color::Rgb;

/// A gradient stop: position in `[0,1]` and the color at that position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

const fn stop(t: f64, r: u8, g: u8, b: u8) -> ColorStop {
    ColorStop {
        t,
        color: Rgb::new(r, g, b),
    }
}

/// White -> orange -> deep red.
const DEFAULT_STOPS: [ColorStop; 5] = [
    stop(0.0, 248, 248, 245),
    stop(0.3, 255, 235, 210),
    stop(0.55, 255, 180, 100),
    stop(0.8, 230, 90, 40),
    stop(1.0, 160, 20, 10),
];

/// Near-black -> red -> orange -> pale yellow -> white.
const FIRE_STOPS: [ColorStop; 5] = [
    stop(0.0, 20, 10, 8),
    stop(0.25, 150, 30, 20),
    stop(0.5, 230, 110, 30),
    stop(0.75, 250, 210, 120),
    stop(1.0, 255, 255, 245),
];

/// Dark blue -> blue -> cyan -> pale cyan.
const COOL_STOPS: [ColorStop; 4] = [
    stop(0.0, 10, 20, 60),
    stop(0.35, 30, 80, 200),
    stop(0.7, 60, 190, 230),
    stop(1.0, 210, 250, 250),
];

/// Near-black -> dark green -> green -> pale green.
const GREEN_STOPS: [ColorStop; 4] = [
    stop(0.0, 5, 15, 8),
    stop(0.35, 25, 90, 40),
    stop(0.7, 60, 180, 90),
    stop(1.0, 215, 245, 220),
];

/// Two-sided ramp pivoting at the midpoint: blue below, red above.
const DIVERGING_STOPS: [ColorStop; 3] = [
    stop(0.0, 40, 80, 200),
    stop(0.5, 245, 245, 240),
    stop(1.0, 200, 40, 30),
];

/// The closed set of colormaps a render can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Default,
    Fire,
    Cool,
    Green,
    Diverging,
}

impl Colormap {
    /// All colormaps in cycling order.
    pub const ALL: [Colormap; 5] = [
        Self::Default,
        Self::Fire,
        Self::Cool,
        Self::Green,
        Self::Diverging,
    ];

    /// Resolve a colormap from its user-facing name. Unknown names are an
    /// input error reported at the boundary, never a silent fallback.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "fire" => Some(Self::Fire),
            "cool" => Some(Self::Cool),
            "green" => Some(Self::Green),
            "diverging" => Some(Self::Diverging),
            _ => None,
        }
    }

    /// Canonical name accepted by [`Colormap::parse`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Fire => "fire",
            Self::Cool => "cool",
            Self::Green => "green",
            Self::Diverging => "diverging",
        }
    }

    /// Short ramp description for listings.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Default => "white to orange to deep red",
            Self::Fire => "near-black to red to pale yellow to white",
            Self::Cool => "dark blue to cyan to pale cyan",
            Self::Green => "near-black to green to pale green",
            Self::Diverging => "blue below the midpoint, red above",
        }
    }

    /// The ordered stop table backing this colormap.
    #[must_use]
    pub fn stops(self) -> &'static [ColorStop] {
        match self {
            Self::Default => &DEFAULT_STOPS,
            Self::Fire => &FIRE_STOPS,
            Self::Cool => &COOL_STOPS,
            Self::Green => &GREEN_STOPS,
            Self::Diverging => &DIVERGING_STOPS,
        }
    }

    /// Map a normalized value to a color.
    ///
    /// `t` is clamped to `[0,1]`; each channel interpolates linearly between
    /// the bracketing stops. A degenerate bracket returns its lower stop.
    #[must_use]
    pub fn interpolate(self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = t.clamp(0.0, 1.0);
        for pair in stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t >= lo.t && t <= hi.t {
                if hi.t <= lo.t {
                    return lo.color;
                }
                let s = (t - lo.t) / (hi.t - lo.t);
                return Rgb::new(
                    lerp_channel(lo.color.r, hi.color.r, s),
                    lerp_channel(lo.color.g, hi.color.g, s),
                    lerp_channel(lo.color.b, hi.color.b, s),
                );
            }
        }
        stops.last().map_or(Rgb::new(0, 0, 0), |last| last.color)
    }

    /// Step forward/backward through [`Colormap::ALL`], wrapping at the ends.
    #[must_use]
    pub fn cycle(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0) as i32;
        let wrapped = (index + delta).rem_euclid(len);
        Self::ALL[wrapped as usize]
    }
}

fn lerp_channel(a: u8, b: u8, s: f64) -> u8 {
    let value = f64::from(a) + s * (f64::from(b) - f64::from(a));
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::Colormap;
    use crate::color::Rgb;

    #[test]
    fn endpoints_match_first_and_last_stops() {
        for colormap in Colormap::ALL {
            let stops = colormap.stops();
            let first = stops[0].color;
            let last = stops[stops.len() - 1].color;
            assert_eq!(colormap.interpolate(0.0), first, "{}", colormap.as_str());
            assert_eq!(colormap.interpolate(1.0), last, "{}", colormap.as_str());
        }
    }

    #[test]
    fn stop_tables_are_well_formed() {
        for colormap in Colormap::ALL {
            let stops = colormap.stops();
            assert!(stops[0].t == 0.0, "{}", colormap.as_str());
            assert!(stops[stops.len() - 1].t == 1.0, "{}", colormap.as_str());
            for pair in stops.windows(2) {
                assert!(pair[0].t < pair[1].t, "{}", colormap.as_str());
            }
        }
    }

    #[test]
    fn samples_stay_within_bracketing_channels() {
        for colormap in Colormap::ALL {
            for step in 0..=100 {
                let t = f64::from(step) / 100.0;
                let color = colormap.interpolate(t);
                let stops = colormap.stops();
                let bracket = stops
                    .windows(2)
                    .find(|pair| t >= pair[0].t && t <= pair[1].t)
                    .map(|pair| (pair[0].color, pair[1].color));
                if let Some((lo, hi)) = bracket {
                    assert!(color.r >= lo.r.min(hi.r) && color.r <= lo.r.max(hi.r));
                    assert!(color.g >= lo.g.min(hi.g) && color.g <= lo.g.max(hi.g));
                    assert!(color.b >= lo.b.min(hi.b) && color.b <= lo.b.max(hi.b));
                }
            }
        }
    }

    #[test]
    fn gradient_is_continuous() {
        for colormap in Colormap::ALL {
            for step in 1..256 {
                let t0 = f64::from(step - 1) / 255.0;
                let t1 = f64::from(step) / 255.0;
                let c0 = colormap.interpolate(t0);
                let c1 = colormap.interpolate(t1);
                for (a, b) in [(c0.r, c1.r), (c0.g, c1.g), (c0.b, c1.b)] {
                    assert!(
                        u8::abs_diff(a, b) <= 5,
                        "{} jumped between t={t0} and t={t1}",
                        colormap.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_domain_values_clamp_to_endpoints() {
        let map = Colormap::Default;
        assert_eq!(map.interpolate(-0.5), map.interpolate(0.0));
        assert_eq!(map.interpolate(1.5), map.interpolate(1.0));
    }

    #[test]
    fn diverging_pivot_is_neutral() {
        assert_eq!(
            Colormap::Diverging.interpolate(0.5),
            Rgb::new(245, 245, 240)
        );
    }

    #[test]
    fn parse_accepts_known_names_case_insensitively() {
        assert_eq!(Colormap::parse("fire"), Some(Colormap::Fire));
        assert_eq!(Colormap::parse("  DIVERGING "), Some(Colormap::Diverging));
        assert_eq!(Colormap::parse("default"), Some(Colormap::Default));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Colormap::parse("viridis"), None);
        assert_eq!(Colormap::parse(""), None);
    }

    #[test]
    fn parse_round_trips_canonical_names() {
        for colormap in Colormap::ALL {
            assert_eq!(Colormap::parse(colormap.as_str()), Some(colormap));
        }
    }

    #[test]
    fn cycle_wraps_both_directions() {
        assert_eq!(Colormap::Default.cycle(1), Colormap::Fire);
        assert_eq!(Colormap::Default.cycle(-1), Colormap::Diverging);
        assert_eq!(Colormap::Diverging.cycle(1), Colormap::Default);
        assert_eq!(Colormap::Green.cycle(7), Colormap::Default);
    }
}
