//! Scalar leaf values and their canonical textual forms.
//!
//! A resolved path always terminates at a [`ScalarValue`]. The union is
//! closed over the four supported primitive kinds so that callers can never
//! lose the declared type while formatting. Canonical text follows the XSD
//! lexical rules for the corresponding `xs:*` type; in particular floats use
//! the canonical scientific form (`1.984E2`), not the language's default
//! numeric-to-string conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Declared primitive type of a scalar leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Float,
    Int,
    String,
    Boolean,
}

impl DataType {
    /// The XSD type name this maps to on the wire.
    pub fn xsd_name(&self) -> &'static str {
        match self {
            DataType::Float => "xs:float",
            DataType::Int => "xs:int",
            DataType::String => "xs:string",
            DataType::Boolean => "xs:boolean",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xsd_name())
    }
}

/// A scalar leaf value together with its declared type.
///
/// The variant is the type tag: a `Float` stays a float through resolution
/// and formatting, and callers that need the declared type read it back via
/// [`ScalarValue::data_type`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Float(f64),
    Int(i64),
    Str(String),
    Bool(bool),
}

impl ScalarValue {
    /// The declared primitive type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            ScalarValue::Float(_) => DataType::Float,
            ScalarValue::Int(_) => DataType::Int,
            ScalarValue::Str(_) => DataType::String,
            ScalarValue::Bool(_) => DataType::Boolean,
        }
    }

    /// Canonical textual form for the declared type.
    ///
    /// - floats: XSD canonical scientific form via [`canonical_float`]
    /// - integers: plain decimal, no leading zeros or plus sign
    /// - strings: the string itself, unescaped
    /// - booleans: `true` / `false`
    pub fn canonical_text(&self) -> String {
        match self {
            ScalarValue::Float(v) => canonical_float(*v),
            ScalarValue::Int(v) => v.to_string(),
            ScalarValue::Str(v) => v.clone(),
            ScalarValue::Bool(v) => v.to_string(),
        }
    }

    /// Parse a value from its lexical form under a declared type.
    ///
    /// Accepts the usual XSD lexical space, including the canonical forms
    /// produced by [`ScalarValue::canonical_text`].
    pub fn from_lexical(data_type: DataType, literal: &str) -> Result<Self, TypeError> {
        let invalid = || TypeError::InvalidLiteral {
            data_type: data_type.xsd_name().to_string(),
            literal: literal.to_string(),
        };
        match data_type {
            DataType::Float => match literal {
                "INF" => Ok(ScalarValue::Float(f64::INFINITY)),
                "-INF" => Ok(ScalarValue::Float(f64::NEG_INFINITY)),
                "NaN" => Ok(ScalarValue::Float(f64::NAN)),
                other => other
                    .parse::<f64>()
                    .map(ScalarValue::Float)
                    .map_err(|_| invalid()),
            },
            DataType::Int => literal
                .parse::<i64>()
                .map(ScalarValue::Int)
                .map_err(|_| invalid()),
            DataType::String => Ok(ScalarValue::Str(literal.to_string())),
            DataType::Boolean => match literal {
                "true" | "1" => Ok(ScalarValue::Bool(true)),
                "false" | "0" => Ok(ScalarValue::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

/// Format a float in the XSD canonical lexical form.
///
/// The canonical form is `m.fEe`: a mantissa with exactly one digit before
/// the decimal point and at least one after it, an upper-case `E`, and a
/// plain decimal exponent. The mantissa uses Rust's shortest round-trip
/// representation, so parsing the result back yields the identical bit
/// pattern for every finite input. Specials map to `INF`, `-INF` and `NaN`.
///
/// Examples: `198.4 → "1.984E2"`, `0.0 → "0.0E0"`, `-0.05 → "-5.0E-2"`.
pub fn canonical_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "INF" } else { "-INF" }.to_string();
    }
    let formatted = format!("{value:E}");
    // `{:E}` already normalizes to one leading mantissa digit and a bare
    // exponent, but drops the fraction for whole mantissas ("1E2"); the
    // canonical form always carries one ("1.0E2").
    match formatted.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{mantissa}.0E{exponent}")
        }
        _ => formatted,
    }
}
