pub const NO_INPUT: &str = "No input";

/// Returns `bar` unless it is missing or empty.
///
/// An empty string counts as missing here; use [`optional_foo_nullish`] to
/// keep it.
pub fn optional_foo(bar: Option<&str>) -> &str {
    bar.filter(|value| !value.is_empty()).unwrap_or(NO_INPUT)
}

/// Falls back only when `bar` is `None`.
pub fn optional_foo_nullish(bar: Option<&str>) -> &str {
    bar.unwrap_or(NO_INPUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_not_empty() {
        assert_eq!(optional_foo(Some(" ")), " ");
    }

    #[test]
    fn nullish_keeps_empty_string() {
        assert_eq!(optional_foo_nullish(Some("")), "");
        assert_eq!(optional_foo_nullish(None), NO_INPUT);
    }
}
