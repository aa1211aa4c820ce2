//! Raw structures that map directly onto what a color lookup hands back.
//!
//! These structures are "dumb": every field is optional and nothing is validated. For example:
//!
//! ```
//! let raw_color = colors::raw::Color::default();
//! assert_eq!(None, raw_color.name);
//!
//! use colors::Color;
//! assert!(Color::try_from(raw_color).is_err());
//! ```
//!
//! In general, users should prefer `colors::Color` over `colors::raw::Color`, converting with
//! `TryFrom` as soon as a lookup returns.

mod color;

pub use self::color::Color;

/// The key a lookup uses for the color name.
pub const NAME: &str = "name";

/// The key a lookup uses for the hex value.
pub const HEX: &str = "HEX";

/// The key a lookup uses for the rgb channels.
pub const RGB: &str = "RGB";
