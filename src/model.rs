use std::str::FromStr;

use color_eyre::eyre::bail;
use color_eyre::eyre::eyre;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// Product ids are encoded as single characters inside an order's `products` field,
/// hence they can only span the decimal digits.
#[derive(Debug, Serialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
#[display("{0}")]
pub struct ProductId(u8);

impl ProductId {
    pub const MAX: u8 = 9;

    /// Maps one character of an order's `products` field to a [`ProductId`].
    /// Returns [`None`] for anything that isn't a decimal digit.
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|digit| u8::try_from(digit).ok()).map(Self)
    }

    pub const fn as_inner(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ProductId {
    type Error = color_eyre::Report;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            bail!("product id must be a single digit value={value}");
        }
        Ok(Self(value))
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::try_from(value).map_err(|error| serde::de::Error::custom(error.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
#[display("{0}")]
pub struct CustomerId(pub i64);

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
#[display("{0}")]
pub struct OrderId(pub i64);

/// Money amount.
///
/// Read from the textual CSV value through [`Decimal::from_str`] and written back through
/// [`Decimal`]'s `Display`, so amounts never take a detour through floats and keep their scale
/// (`10.50` + `2` is `12.50`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
#[display("{0}")]
pub struct Euros(Decimal);

impl Euros {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl From<Decimal> for Euros {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Euros {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl Serialize for Euros {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Euros {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_str(&raw).map_err(|error| serde::de::Error::custom(format!("invalid amount {raw:?}: {error}")))
    }
}

/// The product references of an order, one [`ProductId`] per digit.
///
/// Whitespace between digits is ignored. Repeated digits are kept: every occurrence is a
/// product bought (and priced) once more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIds(Vec<ProductId>);

impl ProductIds {
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.0.contains(&product_id)
    }
}

impl FromStr for ProductIds {
    type Err = color_eyre::Report;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| ProductId::from_digit(c).ok_or_else(|| eyre!("invalid product reference {c:?} in products={raw:?}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for ProductIds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_str(&raw).map_err(|error| serde::de::Error::custom(error.to_string()))
    }
}
