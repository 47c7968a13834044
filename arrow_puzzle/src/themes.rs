// themes.rs - Colour themes for the board

use egui::Color32;
use thiserror::Error;

pub const DEFAULT_THEME: &str = "blue";

/// A named theme. `background` is indexed by cell value and wraps if it has
/// fewer than six entries.
pub struct Theme {
    pub name: &'static str,
    pub text: &'static str,
    pub stroke: &'static str,
    pub background: &'static [&'static str],
}

pub const THEMES: &[Theme] = &[
    Theme {
        name: "red",
        text: "d83150",
        stroke: "6d1425",
        background: &["641121", "5c0f1e", "540d1a", "4c0b17", "430813", "3b0610"],
    },
    Theme {
        name: "red-blue",
        text: "ffffff",
        stroke: "ffffff",
        background: &["f44369", "d64270", "b74077", "993f7e", "7b3e84", "5c3c8b"],
    },
    Theme {
        name: "blue-pink",
        text: "ffb600",
        stroke: "ffffff",
        background: &["4d00f7", "6a00f4", "8900f2", "bc00dd", "e500a4", "f20089"],
    },
    Theme {
        name: "colorful",
        text: "073b4c",
        stroke: "ffffff",
        background: &["ef476f", "f78c6b", "ffd166", "83d483", "06d6a0", "0cb0a9", "118ab2"],
    },
    Theme {
        name: "gray",
        text: "dddddd",
        stroke: "111111",
        background: &["2f2f2f", "343434", "464646", "575757", "696969", "9a9a9a"],
    },
    Theme {
        name: "teal",
        text: "bbbbbb",
        stroke: "052b56",
        background: &["03416b", "005377", "026879", "036e7a", "03737a", "037d7a"],
    },
    Theme {
        name: "blue",
        text: "ffffff",
        stroke: "1c2541",
        background: &["2b3b56", "3a506b", "4b8895", "53a4aa", "57b2b4", "5bc0be"],
    },
    Theme {
        name: "orange",
        text: "244060",
        stroke: "515575",
        background: &["eaac8b", "e88c7d", "e56b6f", "b56576", "915f78", "6d597a"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid hex colour {0:?}")]
    InvalidHex(String),
    #[error("theme {0:?} has no background colours")]
    EmptyBackground(&'static str),
}

/// Position of a theme in [`THEMES`], matched case-insensitively.
pub fn theme_index(name: &str) -> Option<usize> {
    THEMES
        .iter()
        .position(|theme| theme.name.eq_ignore_ascii_case(name.trim()))
}

pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|theme| theme.name)
}

/// Parses `RGB` (12-bit), `RRGGBB` or `AARRGGBB`, with or without a leading `#`.
pub fn parse_hex(hex: &str) -> Result<Color32, ThemeError> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || ThemeError::InvalidHex(hex.to_string());
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    let byte = |shift: u32| ((value >> shift) & 0xff) as u8;
    match digits.len() {
        3 => {
            let nibble = |shift: u32| ((value >> shift) & 0xf) as u8 * 17;
            Ok(Color32::from_rgb(nibble(8), nibble(4), nibble(0)))
        }
        6 => Ok(Color32::from_rgb(byte(16), byte(8), byte(0))),
        8 => Ok(Color32::from_rgba_unmultiplied(byte(16), byte(8), byte(0), byte(24))),
        _ => Err(invalid()),
    }
}

/// A theme with its colours parsed, ready for painting.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub text: Color32,
    pub stroke: Color32,
    background: Vec<Color32>,
}

impl Palette {
    pub fn from_theme(theme: &Theme) -> Result<Self, ThemeError> {
        if theme.background.is_empty() {
            return Err(ThemeError::EmptyBackground(theme.name));
        }
        Ok(Self {
            text: parse_hex(theme.text)?,
            stroke: parse_hex(theme.stroke)?,
            background: theme
                .background
                .iter()
                .copied()
                .map(parse_hex)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn background_for(&self, value: u8) -> Color32 {
        self.background[usize::from(value) % self.background.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_hex_lengths() {
        assert_eq!(parse_hex("d83150"), Ok(Color32::from_rgb(0xd8, 0x31, 0x50)));
        assert_eq!(parse_hex("#fa0"), Ok(Color32::from_rgb(0xff, 0xaa, 0x00)));
        assert_eq!(parse_hex("ff102030"), Ok(Color32::from_rgb(0x10, 0x20, 0x30)));
        assert_eq!(
            parse_hex("80ff0000"),
            Ok(Color32::from_rgba_unmultiplied(0xff, 0, 0, 0x80))
        );
    }

    #[test]
    fn rejects_bad_hex() {
        for bad in ["", "#", "12345", "zzzzzz", "+abcde", "1234567890"] {
            assert_eq!(parse_hex(bad), Err(ThemeError::InvalidHex(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn every_builtin_theme_parses() {
        for theme in THEMES {
            let palette = Palette::from_theme(theme).expect(theme.name);
            for value in 0..6 {
                // Must not panic for any cell value.
                palette.background_for(value);
            }
        }
    }

    #[test]
    fn short_background_lists_wrap() {
        let theme = Theme {
            name: "two",
            text: "000",
            stroke: "fff",
            background: &["ff0000", "00ff00"],
        };
        let palette = Palette::from_theme(&theme).expect("palette");
        assert_eq!(palette.background_for(0), Color32::from_rgb(0xff, 0, 0));
        assert_eq!(palette.background_for(3), Color32::from_rgb(0, 0xff, 0));
    }

    #[test]
    fn theme_lookup_ignores_case() {
        assert_eq!(theme_index("Blue"), theme_index(DEFAULT_THEME));
        assert!(theme_index(DEFAULT_THEME).is_some());
        assert_eq!(theme_index("red-blue"), Some(1));
        assert_eq!(theme_index("plaid"), None);
        assert_eq!(theme_names().count(), THEMES.len());
    }
}
