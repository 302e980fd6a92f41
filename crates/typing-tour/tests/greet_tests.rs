use pretty_assertions::assert_eq;
use typing_tour::{greet, Flavor, GREET_ALT_2};

macro_rules! greet_case {
    ($name:ident, $input:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(greet($input), $expected);
            assert_eq!(GREET_ALT_2($input), $expected);
        }
    };
}

greet_case!(greets_plain_name, "World", "Hello World");
greet_case!(greets_empty_name, "", "Hello ");
greet_case!(greets_unicode_name, "Zoë", "Hello Zoë");
greet_case!(keeps_inner_whitespace, "Ada  Lovelace", "Hello Ada  Lovelace");

#[test]
fn function_value_is_assignable() {
    let greeters: [fn(&str) -> String; 2] = [greet, GREET_ALT_2];
    for greeter in greeters {
        assert_eq!(greeter("Bob"), "Hello Bob");
    }
}

#[test]
fn typescript_flavor_adds_exclamation() {
    assert_eq!(Flavor::TypeScript.greet("Bob"), "Hello Bob!");
    assert_eq!(Flavor::Python.greet("Bob"), greet("Bob"));
}
