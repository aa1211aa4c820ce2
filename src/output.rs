//! Printing resolved colors.
//!
//! Colors are printed either whole, using their `Display` representation, or as a handful of
//! selected fields separated by spaces. The format chosen on the command line picks the fields:
//!
//! ```
//! use colors::{Format, Field};
//! assert_eq!(Some(Format::Rgb), Format::parse(Some("rgb")));
//! assert_eq!(None, Format::parse(Some("pantone")));
//! assert_eq!([Field::Name, Field::Rgb], Format::Rgb.fields());
//! ```

use crate::{Color, Error, Resolution, Result};
use log::debug;
use std::{fmt, io::Write, str::FromStr};

/// A single printable attribute of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// The uppercased name.
    Name,
    /// The uppercased hex value.
    Hex,
    /// The rgb channels.
    Rgb,
}

/// Items that can be printed field by field.
pub trait Fields {
    /// Renders one field of this item.
    fn field(&self, field: Field) -> String;
}

impl Fields for Color {
    fn field(&self, field: Field) -> String {
        match field {
            Field::Name => self.name().to_string(),
            Field::Hex => self.hex().to_string(),
            Field::Rgb => format!("{:?}", self.rgb()),
        }
    }
}

/// Output format for resolved colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Name and hex value.
    Hex,
    /// Name and rgb channels.
    Rgb,
}

impl Format {
    /// Parses an optional format, treating anything unrecognized as no format at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use colors::Format;
    /// assert_eq!(Some(Format::Hex), Format::parse(Some("hex")));
    /// assert_eq!(None, Format::parse(Some("HEX")));
    /// assert_eq!(None, Format::parse(None));
    /// ```
    pub fn parse(s: Option<&str>) -> Option<Format> {
        let s = s?;
        match s.parse() {
            Ok(format) => Some(format),
            Err(err) => {
                debug!("{}, printing full colors", err);
                None
            }
        }
    }

    /// The fields printed for this format, in order.
    pub fn fields(&self) -> [Field; 2] {
        match self {
            Format::Hex => [Field::Name, Field::Hex],
            Format::Rgb => [Field::Name, Field::Rgb],
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Format> {
        match s {
            "hex" => Ok(Format::Hex),
            "rgb" => Ok(Format::Rgb),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Hex => write!(f, "hex"),
            Format::Rgb => write!(f, "rgb"),
        }
    }
}

/// Writes one line per item.
///
/// With no fields, each line is the item's `Display`. Otherwise each line is the requested
/// fields, in order, each followed by a space.
///
/// # Examples
///
/// ```
/// use colors::{output, Field, NamedColors, Resolver};
/// let resolution = Resolver::new(NamedColors).resolve(["red"]);
/// let mut out = Vec::new();
/// output::display(&mut out, &resolution.resolved, &[Field::Name, Field::Hex]).unwrap();
/// assert_eq!(b"RED #FF0000 \n".to_vec(), out);
/// ```
pub fn display<W, T>(out: &mut W, items: &[T], fields: &[Field]) -> Result<()>
where
    W: Write,
    T: Fields + fmt::Display,
{
    for item in items {
        if fields.is_empty() {
            writeln!(out, "{}", item)?;
        } else {
            for &field in fields {
                write!(out, "{} ", item.field(field))?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes one `(name, reason)` tuple per line.
pub fn display_errors<W: Write>(out: &mut W, errors: &[(String, String)]) -> Result<()> {
    for error in errors {
        writeln!(out, "{:?}", error)?;
    }
    Ok(())
}

/// Writes the full report: the resolved colors, then the names that weren't found.
///
/// Resolved colors are printed with the format's fields, or whole if there's no format.
pub fn report<W: Write>(
    out: &mut W,
    resolution: &Resolution,
    format: Option<Format>,
) -> Result<()> {
    let fields = format.map(|format| format.fields());
    let fields: &[Field] = match &fields {
        Some(fields) => fields,
        None => &[],
    };
    writeln!(out, "\n\nInformation about colors")?;
    display(out, &resolution.resolved, fields)?;
    writeln!(out, "\n\nColors not found")?;
    display_errors(out, &resolution.errors)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn color(name: &str, hex: &str, [r, g, b]: [u8; 3]) -> Color {
        let rgb = Rgb::from([
            ("R".to_string(), r),
            ("G".to_string(), g),
            ("B".to_string(), b),
        ]);
        Color::new(name, hex, rgb).unwrap()
    }

    fn colors() -> Vec<Color> {
        vec![
            color("black", "#000000", [0, 0, 0]),
            color("red", "#ff0000", [255, 0, 0]),
        ]
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn format_from_str() {
        assert_eq!(Format::Hex, "hex".parse().unwrap());
        assert_eq!(Format::Rgb, "rgb".parse().unwrap());
        assert!(matches!(
            "pantone".parse::<Format>(),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn format_display() {
        assert_eq!("hex", Format::Hex.to_string());
        assert_eq!("rgb", Format::Rgb.to_string());
    }

    #[test]
    fn full() {
        let out = render(|out| display(out, &colors(), &[]));
        assert_eq!(
            "Color(name=BLACK, hex=#000000, rgb={\"R\": 0, \"G\": 0, \"B\": 0})\n\
             Color(name=RED, hex=#FF0000, rgb={\"R\": 255, \"G\": 0, \"B\": 0})\n",
            out
        );
    }

    #[test]
    fn hex() {
        let out = render(|out| display(out, &colors(), &Format::Hex.fields()));
        assert_eq!("BLACK #000000 \nRED #FF0000 \n", out);
    }

    #[test]
    fn rgb() {
        let out = render(|out| display(out, &colors(), &Format::Rgb.fields()));
        assert_eq!(
            "BLACK {\"R\": 0, \"G\": 0, \"B\": 0} \nRED {\"R\": 255, \"G\": 0, \"B\": 0} \n",
            out
        );
    }

    #[test]
    fn fields_in_given_order() {
        let out = render(|out| display(out, &colors()[..1], &[Field::Hex, Field::Name]));
        assert_eq!("#000000 BLACK \n", out);
    }

    #[test]
    fn errors() {
        let errors = vec![(
            "caqui".to_string(),
            "The color:caqui was not found".to_string(),
        )];
        let out = render(|out| display_errors(out, &errors));
        assert_eq!("(\"caqui\", \"The color:caqui was not found\")\n", out);
    }

    #[test]
    fn report_sections() {
        let resolution = Resolution {
            resolved: colors(),
            errors: vec![("caqui".to_string(), "nope".to_string())],
        };
        let out = render(|out| report(out, &resolution, Some(Format::Hex)));
        assert_eq!(
            "\n\nInformation about colors\n\
             BLACK #000000 \n\
             RED #FF0000 \n\
             \n\nColors not found\n\
             (\"caqui\", \"nope\")\n",
            out
        );
    }

    #[test]
    fn report_empty() {
        let out = render(|out| report(out, &Resolution::default(), None));
        assert_eq!("\n\nInformation about colors\n\n\nColors not found\n", out);
    }

    #[test]
    fn report_write_error() {
        let resolution = Resolution {
            resolved: colors(),
            errors: Vec::new(),
        };
        let err = report(&mut BrokenPipe, &resolution, None).unwrap_err();
        match err {
            Error::Io(err) => assert_eq!(io::ErrorKind::BrokenPipe, err.kind()),
            err => panic!("unexpected error: {}", err),
        }
    }
}
