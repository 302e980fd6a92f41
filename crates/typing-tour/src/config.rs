use std::str::FromStr;

use derive_more::Display;
use strum_macros::{EnumIter, EnumString};

use crate::error::{Error, Result};
use crate::person::IdGenerator;

/// Which of the two source dialects of the tour to mimic.
///
/// The Python dialect is the reference one; the TypeScript sibling differs in
/// three observable places: the greeting gains a trailing `!`, the optional
/// fallback only fires on a missing value, and person ids start at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Flavor {
    #[default]
    #[display("python")]
    #[strum(serialize = "python", serialize = "py")]
    Python,
    #[display("typescript")]
    #[strum(serialize = "typescript", serialize = "ts")]
    TypeScript,
}

impl Flavor {
    pub fn parse(name: &str) -> Result<Self> {
        Flavor::from_str(name.trim()).map_err(|_| Error::InvalidFlavor(name.to_owned()))
    }

    pub fn greet(self, name: &str) -> String {
        match self {
            Flavor::Python => crate::greet::greet(name),
            Flavor::TypeScript => format!("Hello {name}!"),
        }
    }

    pub fn optional_foo(self, bar: Option<&str>) -> &str {
        match self {
            Flavor::Python => crate::optional::optional_foo(bar),
            Flavor::TypeScript => crate::optional::optional_foo_nullish(bar),
        }
    }

    /// Fresh id source whose first id matches this flavor's counter.
    pub fn id_generator(self) -> IdGenerator {
        match self {
            Flavor::Python => IdGenerator::new(),
            Flavor::TypeScript => IdGenerator::starting_at(0),
        }
    }
}
