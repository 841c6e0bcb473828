//! Numeric config values that keep the form they were written in.
//!
//! `1` and `1.0` decode to the same value but render differently in
//! findings: integers render bare, floats always carry a fractional part.

use serde::Deserialize;
use serde_json::Number;
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Number")]
pub struct Quantity {
    value: f64,
    integer: bool,
}

impl Quantity {
    pub fn float(value: f64) -> Self {
        Self {
            value,
            integer: false,
        }
    }

    pub fn integer(value: i64) -> Self {
        Self {
            value: value as f64,
            integer: true,
        }
    }

    pub fn value(self) -> f64 {
        self.value
    }

    pub fn is_integer(self) -> bool {
        self.integer
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl TryFrom<Number> for Quantity {
    type Error = String;

    fn try_from(number: Number) -> Result<Self, Self::Error> {
        let value = number
            .as_f64()
            .ok_or_else(|| format!("number {} is out of range", number))?;
        Ok(Self {
            value,
            integer: !number.is_f64(),
        })
    }
}

/// Integer plus integer stays an integer; anything else is a float
impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity {
            value: self.value + rhs.value,
            integer: self.integer && rhs.integer,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.integer {
            write!(f, "{:.0}", self.value)
        } else {
            f.write_str(&float_repr(self.value))
        }
    }
}

/// Shortest round-trip rendering that keeps `.0` on whole numbers.
pub fn float_repr(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
