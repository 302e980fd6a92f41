//! Greeting in two equivalent forms: a named function and a function value.

pub fn greet(name: &str) -> String {
    format!("Hello {name}")
}

/// Same contract as [`greet`], held as an assignable function value.
pub const GREET_ALT_2: fn(&str) -> String = |name| format!("Hello {name}");
