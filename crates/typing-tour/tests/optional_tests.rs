use pretty_assertions::assert_eq;
use typing_tour::{optional_foo, optional_foo_nullish, Flavor, NO_INPUT};

#[test]
fn missing_value_falls_back() {
    assert_eq!(optional_foo(None), "No input");
}

#[test]
fn empty_value_falls_back() {
    assert_eq!(optional_foo(Some("")), "No input");
}

#[test]
fn present_value_is_returned() {
    assert_eq!(optional_foo(Some("x")), "x");
}

#[test]
fn flavors_disagree_only_on_empty_string() {
    for input in [None, Some("x"), Some("bar")] {
        assert_eq!(
            Flavor::Python.optional_foo(input),
            Flavor::TypeScript.optional_foo(input)
        );
    }
    assert_eq!(Flavor::Python.optional_foo(Some("")), NO_INPUT);
    assert_eq!(Flavor::TypeScript.optional_foo(Some("")), "");
    assert_eq!(optional_foo_nullish(Some("")), "");
}
