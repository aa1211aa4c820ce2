use crate::{Error, Result, raw};
use indexmap::IndexMap;
use std::fmt;

/// Channel label to channel value, in the order the lookup produced them.
pub type Rgb = IndexMap<String, u8>;

/// A resolved color.
///
/// Name and hex are stored uppercased. Once built, a color can't be changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color {
    name: String,
    hex: String,
    rgb: Rgb,
}

impl Color {
    /// Creates a new color.
    ///
    /// Fails if the name (once trimmed) or the hex is shorter than two characters, or if the
    /// rgb mapping is empty. Only the length of the hex is checked, not its syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use colors::{Color, Rgb};
    /// let rgb = Rgb::from([("R".to_string(), 0), ("G".to_string(), 0), ("B".to_string(), 0)]);
    /// let color = Color::new("black", "#000000", rgb).unwrap();
    /// assert_eq!("BLACK", color.name());
    /// assert!(Color::new("b", "#000000", Default::default()).is_err());
    /// ```
    pub fn new(name: impl Into<String>, hex: impl Into<String>, rgb: Rgb) -> Result<Color> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.chars().count() < 2 {
            return Err(Error::InvalidName(name));
        }
        let name = trimmed.to_uppercase();

        let hex = hex.into();
        if hex.chars().count() < 2 {
            return Err(Error::InvalidHex(hex));
        }
        let hex = hex.to_uppercase();

        if rgb.is_empty() {
            return Err(Error::InvalidRgb(rgb));
        }

        Ok(Color { name, hex, rgb })
    }

    /// Returns the uppercased name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the uppercased hex value.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Returns the rgb channels.
    pub fn rgb(&self) -> &Rgb {
        &self.rgb
    }
}

impl TryFrom<raw::Color> for Color {
    type Error = Error;

    fn try_from(raw_color: raw::Color) -> Result<Color> {
        let name = raw_color.name.ok_or(Error::MissingField(raw::NAME))?;
        let hex = raw_color.hex.ok_or(Error::MissingField(raw::HEX))?;
        let rgb = raw_color.rgb.ok_or(Error::MissingField(raw::RGB))?;
        Color::new(name, hex, rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color(name={}, hex={}, rgb={:?})",
            self.name, self.hex, self.rgb
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> Rgb {
        Rgb::from([
            ("R".to_string(), r),
            ("G".to_string(), g),
            ("B".to_string(), b),
        ])
    }

    #[test]
    fn uppercases_name_and_hex() {
        let color = Color::new("green", "#00ff00", rgb(0, 255, 0)).unwrap();
        assert_eq!("GREEN", color.name());
        assert_eq!("#00FF00", color.hex());
        assert_eq!(&rgb(0, 255, 0), color.rgb());
    }

    #[test]
    fn rgb_is_stored_as_given() {
        let rgb = Rgb::from([("b".to_string(), 3), ("r".to_string(), 1)]);
        let color = Color::new("odd", "xx", rgb.clone()).unwrap();
        assert_eq!(
            vec!["b", "r"],
            color.rgb().keys().map(String::as_str).collect::<Vec<_>>()
        );
        assert_eq!(&rgb, color.rgb());
    }

    #[test]
    fn short_name() {
        match Color::new("r", "#ff0000", rgb(255, 0, 0)).unwrap_err() {
            Error::InvalidName(name) => assert_eq!("r", name),
            err => panic!("unexpected error: {}", err),
        }
        assert!(Color::new("", "#ff0000", rgb(255, 0, 0)).is_err());
        assert!(Color::new(" r ", "#ff0000", rgb(255, 0, 0)).is_err());
    }

    #[test]
    fn name_is_trimmed() {
        let color = Color::new("  red ", "#ff0000", rgb(255, 0, 0)).unwrap();
        assert_eq!("RED", color.name());
    }

    #[test]
    fn short_hex() {
        let err = Color::new("red", "#", rgb(255, 0, 0)).unwrap_err();
        assert_eq!("The attribute hex:# is not valid", err.to_string());
    }

    #[test]
    fn hex_syntax_is_not_checked() {
        let color = Color::new("red", "zz", rgb(255, 0, 0)).unwrap();
        assert_eq!("ZZ", color.hex());
    }

    #[test]
    fn empty_rgb() {
        let err = Color::new("red", "#ff0000", Rgb::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidRgb(_)));
        assert_eq!("The attribute rgb:{} is not valid", err.to_string());
    }

    #[test]
    fn display() {
        let color = Color::new("black", "#000000", rgb(0, 0, 0)).unwrap();
        assert_eq!(
            r#"Color(name=BLACK, hex=#000000, rgb={"R": 0, "G": 0, "B": 0})"#,
            color.to_string()
        );
    }

    #[test]
    fn from_raw() {
        let raw = raw::Color::new("blue", "#0000ff", rgb(0, 0, 255));
        let color = Color::try_from(raw).unwrap();
        assert_eq!("BLUE", color.name());
    }

    #[test]
    fn from_raw_missing_field() {
        let raw = raw::Color {
            name: Some("blue".to_string()),
            hex: None,
            rgb: Some(rgb(0, 0, 255)),
        };
        let err = Color::try_from(raw).unwrap_err();
        assert!(matches!(err, Error::MissingField("HEX")));
    }
}
