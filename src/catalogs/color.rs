use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context};

/// RGB display hint attached to a body; never used in computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

fn parse_channel(hex: &str, label: &str) -> anyhow::Result<u8> {
    u8::from_str_radix(hex, 16).context(format!("parsing {} channel '{}'", label, hex))
}

/// Parses `#rrggbb` or the `#rgb` shorthand; the leading `#` is optional
impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("color '{}' is not a hex string", s);
        }

        match hex.len() {
            6 => Ok(Color::new(
                parse_channel(&hex[0..2], "red")?,
                parse_channel(&hex[2..4], "green")?,
                parse_channel(&hex[4..6], "blue")?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let expand = |i: usize, label: &str| -> anyhow::Result<u8> {
                    let c = &hex[i..i + 1];
                    parse_channel(&format!("{c}{c}"), label)
                };
                Ok(Color::new(
                    expand(0, "red")?,
                    expand(1, "green")?,
                    expand(2, "blue")?,
                ))
            }
            n => bail!("color '{}' has {} hex digits, expected 3 or 6", s, n),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!("#ffffff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#FFF".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(
            "ff8800".parse::<Color>().unwrap(),
            Color::new(0xff, 0x88, 0x00)
        );
        assert_eq!("#a1b".parse::<Color>().unwrap(), Color::new(0xaa, 0x11, 0xbb));
    }

    #[test]
    fn test_reject_bad_colors() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
        // from_str_radix alone would accept a sign prefix
        assert!("#+f+f+f".parse::<Color>().is_err());
        assert!("+fffff".parse::<Color>().is_err());
        assert!("#-1-1-1".parse::<Color>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::default().to_string(), "#ffffff");
        let c = Color::new(1, 0x2a, 0xbc);
        assert_eq!(c.to_string(), "#012abc");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }
}
