use crate::error::IyzipayError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A strictly positive monetary amount sent to the gateway.
///
/// The gateway expects prices as strings and always with a fractional part,
/// so `Price` serializes `10` as `"10.0"` and `10.50` as `"10.5"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, IyzipayError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(IyzipayError::ValidationError(format!(
                "Price must be positive, got {}",
                value
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Renders the amount the way the gateway formats prices.
    pub fn to_wire(&self) -> String {
        let rendered = self.0.normalize().to_string();
        if rendered.contains('.') {
            rendered
        } else {
            format!("{}.0", rendered)
        }
    }
}

impl TryFrom<Decimal> for Price {
    type Error = IyzipayError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_wire())
    }
}
