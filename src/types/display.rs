// src/types/display.rs
//
// Text form of a fraction: "<numerator>/<denominator>" on the reduced value.
// The same form is used for parsing and for serde.

use super::fraction::Fraction;
use crate::error::FractionError;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

impl Fraction {
    /// Canonical rendering, e.g. `"2/3"`, `"1/1"`, `"0/1"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Parses "N/D" or "N". Only ASCII digits are accepted on either side.
impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = match s.split_once('/') {
            Some((numerator, denominator)) => {
                (parse_component(s, numerator)?, parse_component(s, denominator)?)
            }
            None => (parse_component(s, s)?, 1),
        };
        Fraction::new(numerator, denominator)
    }
}

fn parse_component(input: &str, digits: &str) -> Result<u64, FractionError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FractionError::parse_error(input));
    }
    digits.parse::<u64>().map_err(|_| FractionError::parse_error(input))
}

impl Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_reduced_form() {
        assert_eq!(Fraction::from_integer(3).to_string(), "3/1");
        assert_eq!(Fraction::new(1, 3).unwrap().render(), "1/3");
        assert_eq!(Fraction::new(4, 6).unwrap().render(), "2/3");
        assert_eq!(Fraction::new(0, 9).unwrap().render(), "0/1");
    }

    #[test]
    fn test_parse() {
        assert_eq!("1/3".parse::<Fraction>(), Fraction::new(1, 3));
        assert_eq!("2/6".parse::<Fraction>(), Fraction::new(1, 3));
        assert_eq!("42".parse::<Fraction>(), Ok(Fraction::from_integer(42)));
        assert_eq!("0/5".parse::<Fraction>(), Ok(Fraction::ZERO));
    }

    #[test]
    fn test_parse_zero_denominator() {
        assert_eq!("3/0".parse::<Fraction>(), Err(FractionError::ZeroDenominator));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let samples = vec![
            "", "/", "1/", "/2", "1/2/3", " 1/2", "1 /2", "-1/2", "+1/2", "1/-2", "1.5", "a/b",
            "18446744073709551616",
        ];

        for sample in samples.into_iter() {
            assert_eq!(
                sample.parse::<Fraction>(),
                Err(FractionError::parse_error(sample)),
                "{:?} should not parse",
                sample
            );
        }
    }

    #[test]
    fn test_serde_string_form() {
        let f = Fraction::new(2, 6).unwrap();
        assert_eq!(serde_json::to_string(&f).unwrap(), "\"1/3\"");

        let parsed: Fraction = serde_json::from_str("\"10/4\"").unwrap();
        assert_eq!(parsed, Fraction::new(5, 2).unwrap());

        let list: Vec<Fraction> = serde_json::from_str("[\"1\", \"3/9\"]").unwrap();
        assert_eq!(list, vec![Fraction::ONE, Fraction::new(1, 3).unwrap()]);
    }

    #[test]
    fn test_serde_rejects_zero_denominator() {
        let err = serde_json::from_str::<Fraction>("\"1/0\"").unwrap_err();
        assert!(err.to_string().contains("zero denominator"));
    }
}
