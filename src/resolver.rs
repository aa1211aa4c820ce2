use crate::{Color, Error, Lookup, Result};
use log::{debug, info, warn};

/// What became of one requested name.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The lookup knew the name and its response was a valid color.
    Found(Color),

    /// The name was unknown or the lookup's response was unusable, with the reason why.
    Failed(String),
}

impl From<Result<Color>> for Outcome {
    fn from(result: Result<Color>) -> Outcome {
        match result {
            Ok(color) => Outcome::Found(color),
            Err(err) => Outcome::Failed(err.to_string()),
        }
    }
}

/// The result of resolving a list of names.
///
/// Both lists keep the order of the names they came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    /// Colors that were found and valid.
    pub resolved: Vec<Color>,

    /// `(name, reason)` for every name that couldn't be resolved.
    pub errors: Vec<(String, String)>,
}

/// Resolves color names against a lookup.
#[derive(Debug)]
pub struct Resolver<L> {
    lookup: L,
}

impl<L: Lookup> Resolver<L> {
    /// Creates a new resolver.
    ///
    /// # Examples
    ///
    /// ```
    /// use colors::{NamedColors, Resolver};
    /// let resolver = Resolver::new(NamedColors);
    /// ```
    pub fn new(lookup: L) -> Resolver<L> {
        Resolver { lookup }
    }

    /// Resolves every name, in order.
    ///
    /// A name that fails never stops the names after it, and repeated names are resolved again
    /// each time they appear.
    ///
    /// # Examples
    ///
    /// ```
    /// use colors::{NamedColors, Resolver};
    /// let resolution = Resolver::new(NamedColors).resolve(["red", "red"]);
    /// assert_eq!(resolution.resolved[0], resolution.resolved[1]);
    /// ```
    pub fn resolve<I, S>(&self, names: I) -> Resolution
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolution = Resolution::default();
        for name in names {
            let name = name.as_ref();
            match self.resolve_one(name) {
                Outcome::Found(color) => resolution.resolved.push(color),
                Outcome::Failed(reason) => resolution.errors.push((name.to_string(), reason)),
            }
        }
        info!(
            "resolved {} color(s), {} not found",
            resolution.resolved.len(),
            resolution.errors.len()
        );
        resolution
    }

    /// Resolves a single name.
    ///
    /// # Examples
    ///
    /// ```
    /// use colors::{NamedColors, Outcome, Resolver};
    /// let resolver = Resolver::new(NamedColors);
    /// assert!(matches!(resolver.resolve_one("blue"), Outcome::Found(_)));
    /// assert_eq!(
    ///     Outcome::Failed("The color:caqui was not found".to_string()),
    ///     resolver.resolve_one("caqui")
    /// );
    /// ```
    pub fn resolve_one(&self, name: &str) -> Outcome {
        let result = self
            .lookup
            .lookup(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
            .and_then(Color::try_from);
        match &result {
            Ok(color) => debug!("{}: {}", name, color),
            Err(err) => warn!("{}: {}", name, err),
        }
        result.into()
    }
}
