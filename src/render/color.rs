//! HSL colours for the decorative quote-box border

use ratatui::style::Color;
use std::fmt;

/// Hues the border cycles through, indexed by `counter % 4`
pub const HUE_PALETTE: [u16; 4] = [60, 65, 55, 50];

pub const BORDER_SATURATION: u8 = 90;
pub const BORDER_LIGHTNESS: u8 = 50;

/// A colour in the hue/saturation/lightness model.
///
/// `hue` is in degrees (0..360), `saturation` and `lightness` in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// Border colour for the given display counter
    pub fn for_counter(counter: u64) -> Self {
        let hue = HUE_PALETTE[(counter % HUE_PALETTE.len() as u64) as usize];
        Hsl::new(hue, BORDER_SATURATION, BORDER_LIGHTNESS)
    }

    /// Convert to 8-bit RGB
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = f64::from(self.hue % 360) / 60.0;
        let s = f64::from(self.saturation.min(100)) / 100.0;
        let l = f64::from(self.lightness.min(100)) / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let (r, g, b) = hsl.to_rgb();
        Color::Rgb(r, g, b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
