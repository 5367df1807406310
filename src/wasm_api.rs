// src/wasm_api.rs
//
// JavaScript surface. Exposed to JS as `Fraction`; failures come back as the
// error's display text.

use wasm_bindgen::prelude::*;
use crate::types::fraction::Fraction;

#[wasm_bindgen(js_name = Fraction)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsFraction {
    inner: Fraction,
}

impl From<Fraction> for JsFraction {
    fn from(inner: Fraction) -> Self {
        JsFraction { inner }
    }
}

impl JsFraction {
    pub fn into_inner(self) -> Fraction {
        self.inner
    }
}

#[wasm_bindgen(js_class = Fraction)]
impl JsFraction {
    #[wasm_bindgen(constructor)]
    pub fn new(numerator: u64, denominator: u64) -> Result<JsFraction, String> {
        Fraction::new(numerator, denominator)
            .map(JsFraction::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen(js_name = fromInteger)]
    pub fn from_integer(value: u64) -> JsFraction {
        Fraction::from_integer(value).into()
    }

    #[wasm_bindgen]
    pub fn parse(text: &str) -> Result<JsFraction, String> {
        text.parse::<Fraction>()
            .map(JsFraction::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn numerator(&self) -> u64 {
        self.inner.numerator()
    }

    #[wasm_bindgen(getter)]
    pub fn denominator(&self) -> u64 {
        self.inner.denominator()
    }

    #[wasm_bindgen]
    pub fn scale(&self, factor: u64) -> Result<JsFraction, String> {
        self.inner
            .checked_scale(factor)
            .map(JsFraction::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn multiply(&self, other: &JsFraction) -> Result<JsFraction, String> {
        self.inner
            .checked_mul(other.inner)
            .map(JsFraction::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn equals(&self, other: &JsFraction) -> bool {
        self.inner == other.inner
    }

    #[wasm_bindgen(js_name = notEquals)]
    pub fn not_equals(&self, other: &JsFraction) -> bool {
        self.inner != other.inner
    }

    #[wasm_bindgen(js_name = lessThan)]
    pub fn less_than(&self, other: &JsFraction) -> bool {
        self.inner.less_than(&other.inner)
    }

    #[wasm_bindgen(js_name = lessOrEqual)]
    pub fn less_or_equal(&self, other: &JsFraction) -> bool {
        self.inner.less_or_equal(&other.inner)
    }

    #[wasm_bindgen(js_name = greaterThan)]
    pub fn greater_than(&self, other: &JsFraction) -> bool {
        self.inner.greater_than(&other.inner)
    }

    #[wasm_bindgen(js_name = greaterOrEqual)]
    pub fn greater_or_equal(&self, other: &JsFraction) -> bool {
        self.inner.greater_or_equal(&other.inner)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_and_getters() {
        let f = JsFraction::new(2, 6).unwrap();
        assert_eq!(f.numerator(), 1);
        assert_eq!(f.denominator(), 3);
        assert_eq!(f.to_js_string(), "1/3");
        assert_eq!(JsFraction::from_integer(3).to_js_string(), "3/1");
    }

    #[test]
    fn test_errors_are_display_text() {
        assert_eq!(JsFraction::new(1, 0), Err("zero denominator".to_string()));
        assert_eq!(
            JsFraction::parse("x"),
            Err("invalid fraction literal: 'x'".to_string())
        );
        assert!(JsFraction::from_integer(u64::MAX)
            .scale(2)
            .unwrap_err()
            .starts_with("fraction overflow"));
    }

    #[test]
    fn test_operations_match_native_type() {
        let athird = JsFraction::new(1, 3).unwrap();
        let afourth = JsFraction::parse("1/4").unwrap();
        let three = JsFraction::from_integer(3);

        assert_eq!(athird.scale(2).unwrap().to_js_string(), "2/3");
        assert_eq!(three.multiply(&athird).unwrap().to_js_string(), "1/1");
        assert!(athird.equals(&JsFraction::new(2, 6).unwrap()));
        assert!(athird.not_equals(&afourth));
        assert!(afourth.less_than(&athird));
        assert!(!athird.less_or_equal(&afourth));
        assert!(athird.greater_than(&afourth));
        assert!(athird.greater_or_equal(&afourth));
        assert_eq!(athird.into_inner(), Fraction::new(1, 3).unwrap());
    }
}
