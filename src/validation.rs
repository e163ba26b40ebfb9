//! Field-level error collection for HTML forms.
//!
//! Parsing failures are recorded directly; rule violations declared with
//! `validator` derives are folded in through [`FormErrors::merge`].

use std::{borrow::Cow, collections::BTreeMap, str::FromStr};

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NEGATIVE: &str = "Ensure this value is greater than or equal to 0.";

pub const PRICE_MAX_DIGITS: u32 = 10;
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Messages per form field, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields carrying at least one message.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn add_error(&mut self, field: impl Into<String>, error: &ValidationError) {
        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string());
        self.add(field, message);
    }

    pub fn merge(&mut self, errors: ValidationErrors) {
        for (field, list) in errors.field_errors() {
            for error in list.iter() {
                self.add_error(field.to_string(), error);
            }
        }
    }
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", REQUIRED));
    }
    Ok(())
}

pub fn validate_non_negative_quantity(value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(error("min_value", NOT_NEGATIVE));
    }
    Ok(())
}

pub fn validate_non_negative_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(error("min_value", NOT_NEGATIVE));
    }
    Ok(())
}

/// A plain decimal literal (`[+-]digits[.digits]`) split as the user typed it,
/// so precision is judged before any rounding happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLiteral {
    negative: bool,
    whole: String,
    fraction: String,
}

impl PriceLiteral {
    pub fn parse(raw: &str) -> Option<Self> {
        let (negative, unsigned) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            negative,
            whole: whole.to_string(),
            fraction: fraction.to_string(),
        })
    }

    /// Places after the point, trailing zeros included.
    pub fn decimal_places(&self) -> u32 {
        self.fraction.len() as u32
    }

    /// Total digits ignoring leading zeros, never fewer than the decimal places.
    pub fn digits(&self) -> u32 {
        let significant = self
            .whole
            .bytes()
            .chain(self.fraction.bytes())
            .skip_while(|b| *b == b'0')
            .count()
            .max(1) as u32;
        significant.max(self.decimal_places())
    }

    /// Checks against `DECIMAL(10, 2)`.
    pub fn check_precision(&self) -> Result<(), ValidationError> {
        let digits = self.digits();
        let decimals = self.decimal_places();
        let whole_digits = digits - decimals;

        if digits > PRICE_MAX_DIGITS {
            return Err(error(
                "max_digits",
                format!("Ensure that there are no more than {PRICE_MAX_DIGITS} digits in total."),
            ));
        }
        if decimals > PRICE_DECIMAL_PLACES {
            return Err(error(
                "max_decimal_places",
                format!("Ensure that there are no more than {PRICE_DECIMAL_PLACES} decimal places."),
            ));
        }
        if whole_digits > PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES {
            return Err(error(
                "max_whole_digits",
                format!(
                    "Ensure that there are no more than {} digits before the decimal point.",
                    PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES
                ),
            ));
        }
        Ok(())
    }

    /// The exact value. Only call after [`PriceLiteral::check_precision`] passed,
    /// otherwise the literal may not fit a `Decimal`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let sign = if self.negative { "-" } else { "" };
        let whole = if self.whole.is_empty() { "0" } else { &self.whole };
        let text = if self.fraction.is_empty() {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{}", self.fraction)
        };
        Decimal::from_str(&text).ok()
    }
}
