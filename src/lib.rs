//! Look up named colors and print their hex and rgb values.
//!
//! # Resolving
//!
//! A `Resolver` runs a list of color names against a `Lookup`, keeping the colors it found and
//! the reasons for the ones it didn't:
//!
//! ```
//! use colors::{NamedColors, Resolver};
//! let resolver = Resolver::new(NamedColors);
//! let resolution = resolver.resolve(["black", "caqui", "red"]);
//! assert_eq!(2, resolution.resolved.len());
//! assert_eq!("BLACK", resolution.resolved[0].name());
//! assert_eq!(
//!     vec![("caqui".to_string(), "The color:caqui was not found".to_string())],
//!     resolution.errors
//! );
//! ```
//!
//! Any function from a name to an optional `raw::Color` can stand in for the lookup:
//!
//! ```
//! use colors::{raw, Resolver, Rgb};
//! let resolver = Resolver::new(|name: &str| {
//!     let rgb = Rgb::from([("R".to_string(), 1), ("G".to_string(), 2), ("B".to_string(), 3)]);
//!     Some(raw::Color::new(name, "#010203", rgb))
//! });
//! let resolution = resolver.resolve(["anything"]);
//! assert_eq!("#010203", resolution.resolved[0].hex());
//! ```
//!
//! # Printing
//!
//! `output::report` writes both sections of a resolution, optionally restricted to a `Format`:
//!
//! ```
//! use colors::{output, Format, NamedColors, Resolver};
//! let resolution = Resolver::new(NamedColors).resolve(["black"]);
//! let mut out = Vec::new();
//! output::report(&mut out, &resolution, Some(Format::Hex)).unwrap();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("BLACK #000000 \n"));
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

pub mod output;
pub mod raw;

mod color;
mod error;
mod lookup;
mod resolver;

pub use color::{Color, Rgb};
pub use error::Error;
pub use lookup::{Lookup, NamedColors};
pub use output::{Field, Format};
pub use resolver::{Outcome, Resolution, Resolver};

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
