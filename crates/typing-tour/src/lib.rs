#[macro_use]
pub mod macros;

pub mod age;
pub mod config;
pub mod error;
pub mod greet;
pub mod human;
pub mod movie;
pub mod optional;
pub mod person;

// Re-export commonly used items for convenience
pub use tracing;

pub use age::{judge_my_age, AgeBracket};
pub use config::Flavor;
pub use greet::{greet, GREET_ALT_2};
pub use human::Human;
pub use movie::{example_movie, Movie, Rating};
pub use optional::{optional_foo, optional_foo_nullish, NO_INPUT};
pub use person::{IdGenerator, Person};

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
