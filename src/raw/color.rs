//! Raw lookup responses.

use crate::Rgb;

/// A color as returned by a lookup, before any validation.
///
/// The fields correspond to the `name`, `HEX` and `RGB` keys of a lookup response. Any of them
/// may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Color {
    /// The name the lookup knows this color by.
    pub name: Option<String>,

    /// The hex value, e.g. `#ff0000`.
    pub hex: Option<String>,

    /// Channel label to channel value.
    pub rgb: Option<Rgb>,
}

impl Color {
    /// Creates a raw color with every field present.
    ///
    /// # Examples
    ///
    /// ```
    /// use colors::{raw, Rgb};
    /// let raw_color = raw::Color::new("red", "#ff0000", Rgb::from([("R".to_string(), 255)]));
    /// assert_eq!(Some("red".to_string()), raw_color.name);
    /// ```
    pub fn new(name: impl Into<String>, hex: impl Into<String>, rgb: Rgb) -> Color {
        Color {
            name: Some(name.into()),
            hex: Some(hex.into()),
            rgb: Some(rgb),
        }
    }
}
