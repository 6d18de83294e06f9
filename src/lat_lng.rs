//! # Latitude and Longitude
//! This module defines the two bounded components of a `Coordinate`.
//! Both are thin wrappers around `f64` whose constructors enforce the
//! valid range, so a value of either type is always in range and finite.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// The latitude component of a geographic coordinate, in degrees,
/// between -90.0 and 90.0 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Latitude(f64);

impl Latitude {
    /// The southernmost valid latitude.
    pub const MIN: f64 = -90.0;
    /// The northernmost valid latitude.
    pub const MAX: f64 = 90.0;

    /// Create a new `Latitude`, returning an error if the value is
    /// out of range or not finite.
    pub fn new(value: f64) -> Result<Self, RangeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Latitude(value))
        } else {
            Err(RangeError::new("latitude", value, Self::MIN, Self::MAX))
        }
    }

    /// Return the underlying degree value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

// Construction rejects NaN, so equality on validated values is total.
impl Eq for Latitude {}

impl Hash for Latitude {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(canonical_bits(self.0));
    }
}

impl std::fmt::Display for Latitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<Latitude> for f64 {
    fn from(latitude: Latitude) -> Self {
        latitude.value()
    }
}

impl std::convert::TryFrom<f64> for Latitude {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Latitude::new(value)
    }
}

impl Serialize for Latitude {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Latitude {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFloat::deserialize(deserializer)?;
        Latitude::new(raw.0).map_err(de::Error::custom)
    }
}

/// The longitude component of a geographic coordinate, in degrees,
/// between -180.0 and 180.0 inclusive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Longitude(f64);

impl Longitude {
    /// The westernmost valid longitude.
    pub const MIN: f64 = -180.0;
    /// The easternmost valid longitude.
    pub const MAX: f64 = 180.0;

    /// Create a new `Longitude`, returning an error if the value is
    /// out of range or not finite.
    pub fn new(value: f64) -> Result<Self, RangeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Longitude(value))
        } else {
            Err(RangeError::new("longitude", value, Self::MIN, Self::MAX))
        }
    }

    /// Return the underlying degree value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Eq for Longitude {}

impl Hash for Longitude {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(canonical_bits(self.0));
    }
}

impl std::fmt::Display for Longitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<Longitude> for f64 {
    fn from(longitude: Longitude) -> Self {
        longitude.value()
    }
}

impl std::convert::TryFrom<f64> for Longitude {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Longitude::new(value)
    }
}

impl Serialize for Longitude {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Longitude {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFloat::deserialize(deserializer)?;
        Longitude::new(raw.0).map_err(de::Error::custom)
    }
}

// 0.0 and -0.0 compare equal, so they must hash identically.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// An error indicating that a numeric value fell outside the valid
/// range for the coordinate component it was given to.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("{field} {value:?} is out of range: expected a value between {min:?} and {max:?}")]
pub struct RangeError {
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
}

impl RangeError {
    pub(crate) fn new(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self {
            field,
            value,
            min,
            max,
        }
    }

    /// Return the name of the component which rejected the value.
    pub fn field(&self) -> &str {
        self.field
    }

    /// Return the value which was out of range.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Return the lower bound of the valid range.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Return the upper bound of the valid range.
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// A float deserialized from either a number or a numeric string.
pub(crate) struct RawFloat(pub(crate) f64);

impl<'de> Deserialize<'de> for RawFloat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawFloatVisitor;

        impl<'de> Visitor<'de> for RawFloatVisitor {
            type Value = RawFloat;

            fn expecting(
                &self,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                write!(f, "a number or a numeric string")
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RawFloat(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RawFloat(v as f64))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RawFloat(v as f64))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.trim().parse().map(RawFloat).map_err(|_| {
                    E::custom(format!(
                        "could not parse {:?} as a number",
                        v
                    ))
                })
            }
        }

        deserializer.deserialize_any(RawFloatVisitor)
    }
}
