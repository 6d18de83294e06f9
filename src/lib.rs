//! # Overview
//! This crate provides validated geographic coordinate value types
//! (`Coordinate`, `Latitude`, `Longitude`) which plug into serde
//! deserialization and schemars JSON-schema generation. A `Coordinate`
//! can be parsed from a `"<latitude>,<longitude>"` string, a
//! two-element sequence of numbers or numeric strings, or a map with
//! `latitude` and `longitude` keys, and always holds in-range
//! components once constructed.
//!
//! # Usage
//! 1. Put these dependencies in your Cargo.toml:
//!     ```toml
//!     [dependencies]
//!     geocoord = "0.1"
//!     serde_json = "1.0"
//!     ```
//! 1. Parse and validate coordinates:
//!     ```rust
//!     use geocoord::Coordinate;
//!
//!     fn main() {
//!         let coord: Coordinate = "45.678,-123.456".parse().unwrap();
//!         assert_eq!(coord.latitude().value(), 45.678);
//!         assert_eq!(coord.longitude().value(), -123.456);
//!
//!         // The same shapes are accepted inside serde pipelines:
//!         let coord: Coordinate =
//!             serde_json::from_str("[45.678, \"-123.456\"]").unwrap();
//!         assert_eq!(coord.to_string(), "45.678,-123.456");
//!
//!         // Out-of-range components are rejected:
//!         assert!("91.0,0.0".parse::<Coordinate>().is_err());
//!     }
//!     ```
//!
//! Serialization uses the canonical `"<latitude>,<longitude>"` string
//! form, and the schemars `JsonSchema` impls describe the component
//! bounds and mark the pair with the `"coordinate"` format.

mod coord;
mod err;
mod lat_lng;
mod schema;

pub use coord::Coordinate;
pub use err::{Error, ErrorKind};
pub use lat_lng::{Latitude, Longitude, RangeError};
