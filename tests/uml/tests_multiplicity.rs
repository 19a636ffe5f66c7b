//! Multiplicity parsing from UML range text.

use rstest::rstest;
use umlmeta::uml::Multiplicity;

#[rstest]
#[case("")]
#[case("many")]
#[case("*..1")]
#[case("5..2")]
#[case("1..x")]
fn test_parse_rejects(#[case] text: &str) {
    let err = text.parse::<Multiplicity>().unwrap_err();
    assert_eq!(err.text, text);
}

#[rstest]
#[case(Multiplicity::EXACTLY_ONE, "1")]
#[case(Multiplicity::ZERO_OR_ONE, "0..1")]
#[case(Multiplicity::MANY, "*")]
#[case(Multiplicity::ONE_OR_MORE, "1..*")]
fn test_display(#[case] multiplicity: Multiplicity, #[case] text: &str) {
    assert_eq!(multiplicity.to_string(), text);
}

#[test]
fn test_default_is_exactly_one() {
    assert_eq!(Multiplicity::default(), Multiplicity::EXACTLY_ONE);
    assert!(!Multiplicity::default().is_multi_valued());
}
