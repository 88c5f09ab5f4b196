//! Furniture appearance: icon and colours looked up by furniture name

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Name of the palette entry used for any unrecognised furniture.
pub const DEFAULT_ENTRY: &str = "Default";

/// Amount subtracted from each channel to derive a border colour.
const DARKEN_STEP: u8 = 30;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").expect("valid hex regex")
});

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("invalid colour '{0}': expected #RRGGBB")]
    InvalidHex(String),
}

/// 24-bit colour. Displays as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Subtract a fixed step from every channel, stopping at zero.
    pub fn darken(self) -> Self {
        Self {
            r: self.r.saturating_sub(DARKEN_STEP),
            g: self.g.saturating_sub(DARKEN_STEP),
            b: self.b.saturating_sub(DARKEN_STEP),
        }
    }

    /// CSS functional notation, e.g. `rgb(109, 85, 55)`.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = HEX_RE
            .captures(s.trim())
            .ok_or_else(|| ColorError::InvalidHex(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
        };
        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Visual attributes of one furniture item.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub icon: String,
    pub fill: Rgb,
}

impl Appearance {
    pub fn new(icon: impl Into<String>, fill: Rgb) -> Self {
        Self { icon: icon.into(), fill }
    }

    pub fn border(&self) -> Rgb {
        self.fill.darken()
    }
}

/// Read-only name to appearance mapping with a guaranteed fallback.
///
/// The fallback is held outside the map so lookups are total.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: HashMap<String, Appearance>,
    fallback: Appearance,
}

const STANDARD: &[(&str, &str, Rgb)] = &[
    ("Sofa", "🛋️", Rgb::new(0x8B, 0x73, 0x55)),
    ("Coffee Table", "☕", Rgb::new(0xD4, 0xA5, 0x74)),
    ("TV Stand", "📺", Rgb::new(0x6B, 0x5D, 0x4F)),
    ("Bookshelf", "📚", Rgb::new(0xA0, 0x82, 0x6D)),
    ("Side Table", "🪑", Rgb::new(0xE8, 0xC7, 0xA5)),
    ("Armchair", "🪑", Rgb::new(0x9B, 0x85, 0x77)),
    ("Dining Table", "🍽️", Rgb::new(0xA0, 0x82, 0x6D)),
    ("Chair", "🪑", Rgb::new(0x9B, 0x85, 0x77)),
    ("Bed", "🛏️", Rgb::new(0x8B, 0x73, 0x55)),
    ("Desk", "💼", Rgb::new(0x6B, 0x5D, 0x4F)),
    ("Dresser", "👔", Rgb::new(0xA0, 0x82, 0x6D)),
    ("Nightstand", "🕯️", Rgb::new(0xE8, 0xC7, 0xA5)),
    ("Ottoman", "🪑", Rgb::new(0x9B, 0x85, 0x77)),
];

impl Palette {
    /// Built-in palette for the furniture the layout service knows about.
    pub fn standard() -> Self {
        let entries = STANDARD
            .iter()
            .map(|(name, icon, fill)| (name.to_string(), Appearance::new(*icon, *fill)))
            .collect();
        Self {
            entries,
            fallback: Appearance::new("🪑", Rgb::new(0xA0, 0x82, 0x6D)),
        }
    }

    /// Return a palette with `overrides` layered on top.
    ///
    /// An override named `Default` replaces the fallback.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, Appearance)>,
    {
        for (name, appearance) in overrides {
            if name == DEFAULT_ENTRY {
                self.fallback = appearance;
            } else {
                self.entries.insert(name, appearance);
            }
        }
        self
    }

    /// Look up a furniture name; absent or unknown names get the fallback.
    pub fn resolve(&self, name: Option<&str>) -> &Appearance {
        name.and_then(|n| self.entries.get(n)).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &Appearance {
        &self.fallback
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_their_entry() {
        let palette = Palette::standard();
        let sofa = palette.resolve(Some("Sofa"));
        assert_eq!(sofa.fill.to_string(), "#8B7355");
        assert_eq!(sofa.icon, "🛋️");
    }

    #[test]
    fn unknown_and_missing_names_fall_back() {
        let palette = Palette::standard();
        for name in [Some("Grand Piano"), Some(""), Some("sofa"), None] {
            assert_eq!(palette.resolve(name), palette.fallback());
        }
        assert_eq!(palette.fallback().fill.to_string(), "#A0826D");
    }

    #[test]
    fn darken_subtracts_thirty_and_clamps() {
        let sofa: Rgb = "#8B7355".parse().unwrap();
        assert_eq!(sofa.darken().to_css_rgb(), "rgb(109, 85, 55)");

        let dim = Rgb::new(0x10, 0x1E, 0x1F);
        assert_eq!(dim.darken(), Rgb::new(0, 0, 1));
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert_eq!("#d4a574".parse::<Rgb>().unwrap(), Rgb::new(0xD4, 0xA5, 0x74));
        for bad in ["D4A574", "#D4A57", "#D4A5744", "#GGGGGG", ""] {
            assert!(bad.parse::<Rgb>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn overrides_add_entries_and_replace_fallback() {
        let palette = Palette::standard().with_overrides([
            ("Rug".to_string(), Appearance::new("🧶", Rgb::new(0xB5, 0x65, 0x1D))),
            (DEFAULT_ENTRY.to_string(), Appearance::new("?", Rgb::new(0, 0, 0))),
        ]);
        assert_eq!(palette.resolve(Some("Rug")).icon, "🧶");
        assert_eq!(palette.resolve(Some("Lamp")).icon, "?");
        assert_eq!(palette.resolve(Some("Sofa")).icon, "🛋️");
    }
}
