use image::Rgba;
use thiserror::Error;

/// Colors accepted for the background entry at index 0.
/// Compared by exact string equality, so a lowercase "#fff" still warns.
const BACKGROUND_COLORS: [&str; 4] = ["#000", "#000000", "#FFF", "#FFFFFF"];

/// Ordered list of hexadecimal color codes, one per category or channel.
/// Insertion order is significant, it defines the index-to-color mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must have at least one color")]
    Empty,
    #[error("{color:?} is not a valid hexadecimal color")]
    InvalidColorFormat { color: String },
}

/// Advisory finding from palette validation. Never fatal, callers decide
/// whether to escalate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteWarning {
    #[error("first palette color {color:?} is neither black nor white for background")]
    BackgroundNotNeutral { color: String },
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// Check if a string is a valid hexadecimal color code,
    /// i.e. #RGB or #RRGGBB. No alpha, no named colors, no rgb()/hsl().
    pub fn is_hex_color(s: &str) -> bool {
        let Some(digits) = s.strip_prefix('#') else {
            return false;
        };
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Check the palette invariants: at least one color, every entry valid
    /// hex. Warnings ride along on the success path.
    pub fn validate(&self) -> Result<Vec<PaletteWarning>, PaletteError> {
        if self.colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        for color in &self.colors {
            if !Self::is_hex_color(color) {
                return Err(PaletteError::InvalidColorFormat {
                    color: color.clone(),
                });
            }
        }
        let mut warnings = Vec::new();
        if !BACKGROUND_COLORS.contains(&self.colors[0].as_str()) {
            warnings.push(PaletteWarning::BackgroundNotNeutral {
                color: self.colors[0].clone(),
            });
        }
        Ok(warnings)
    }

    /// Expand every entry to an RGBA color, alpha fixed at 255.
    pub fn decode(&self) -> Result<Vec<Rgba<u8>>, PaletteError> {
        self.colors
            .iter()
            .map(|color| {
                parse_hex(color).ok_or_else(|| PaletteError::InvalidColorFormat {
                    color: color.clone(),
                })
            })
            .collect()
    }

    /// Decode the entry at `index`, if present and well-formed.
    pub fn rgba(&self, index: usize) -> Option<Rgba<u8>> {
        self.colors.get(index).and_then(|color| parse_hex(color))
    }
}

fn parse_hex(s: &str) -> Option<Rgba<u8>> {
    let digits = s.strip_prefix('#')?;
    let rgb = match digits.len() {
        3 => {
            let mut nibbles = digits
                .chars()
                // 0xF expands to 0xFF and so on
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            [nibbles.next()??, nibbles.next()??, nibbles.next()??]
        }
        6 => {
            let mut rgb = [0u8; 3];
            for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
                let pair = std::str::from_utf8(pair).ok()?;
                rgb[i] = u8::from_str_radix(pair, 16).ok()?;
            }
            rgb
        }
        _ => return None,
    };
    Some(Rgba([rgb[0], rgb[1], rgb[2], u8::MAX]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_grammar() {
        assert!(Palette::is_hex_color("#000"));
        assert!(Palette::is_hex_color("#F00"));
        assert!(Palette::is_hex_color("#f0a"));
        assert!(Palette::is_hex_color("#000000"));
        assert!(Palette::is_hex_color("#AbCdEf"));

        assert!(!Palette::is_hex_color("red"));
        assert!(!Palette::is_hex_color("#GGG"));
        assert!(!Palette::is_hex_color("#12345"));
        assert!(!Palette::is_hex_color("123456"));
        assert!(!Palette::is_hex_color(""));
        assert!(!Palette::is_hex_color("#"));
        assert!(!Palette::is_hex_color("#1234567"));
        assert!(!Palette::is_hex_color("#00112233"));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let palette = Palette::new(Vec::<String>::new());
        assert_eq!(palette.validate(), Err(PaletteError::Empty));
    }

    #[test]
    fn invalid_entry_is_reported_with_its_text() {
        let palette = Palette::new(["#000", "red", "#0F0"]);
        assert_eq!(
            palette.validate(),
            Err(PaletteError::InvalidColorFormat {
                color: "red".to_string()
            })
        );
    }

    #[test]
    fn neutral_background_passes_without_warnings() {
        for first in BACKGROUND_COLORS {
            let palette = Palette::new([first, "#F00"]);
            assert_eq!(palette.validate(), Ok(Vec::new()));
        }
    }

    #[test]
    fn non_neutral_background_warns_but_passes() {
        let palette = Palette::new(["#F00", "#0F0"]);
        assert_eq!(
            palette.validate(),
            Ok(vec![PaletteWarning::BackgroundNotNeutral {
                color: "#F00".to_string()
            }])
        );
    }

    #[test]
    fn lowercase_white_still_warns() {
        // Exact comparison against the background set is intentional.
        let palette = Palette::new(["#fff", "#F00"]);
        assert_eq!(
            palette.validate(),
            Ok(vec![PaletteWarning::BackgroundNotNeutral {
                color: "#fff".to_string()
            }])
        );
    }

    #[test]
    fn decode_expands_short_and_long_forms() {
        let palette = Palette::new(["#F00", "#123456"]);
        assert_eq!(
            palette.decode().unwrap(),
            vec![Rgba([255, 0, 0, 255]), Rgba([0x12, 0x34, 0x56, 255])]
        );
        assert_eq!(palette.rgba(0), Some(Rgba([255, 0, 0, 255])));
        assert_eq!(palette.rgba(2), None);
    }

    #[test]
    fn decode_fails_on_malformed_entry() {
        let palette = Palette::new(["#000", "#12345"]);
        assert_eq!(
            palette.decode(),
            Err(PaletteError::InvalidColorFormat {
                color: "#12345".to_string()
            })
        );
    }
}
