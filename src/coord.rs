use crate::err::Error;
use crate::lat_lng::{Latitude, Longitude, RawFloat};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::str::FromStr;

/// A validated geographic coordinate, represented as a latitude and
/// longitude pair.
///
/// A `Coordinate` can be parsed from several input shapes:
/// a `"<latitude>,<longitude>"` string, a two-element sequence of
/// numbers or numeric strings, or a map with exactly the keys
/// `latitude` and `longitude`. Empty input (JSON `null` or an empty
/// sequence) yields the "null island" coordinate at (0.0, 0.0).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Coordinate {
    latitude: Latitude,
    longitude: Longitude,
}

impl Coordinate {
    /// Create a new `Coordinate`, returning an error if either
    /// component is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        Ok(Coordinate {
            latitude: Latitude::new(latitude)?,
            longitude: Longitude::new(longitude)?,
        })
    }

    /// Create a new `Coordinate` from components which have already
    /// been validated.
    pub fn from_parts(latitude: Latitude, longitude: Longitude) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Return the "null island" coordinate at (0.0, 0.0), the default
    /// for empty input.
    pub fn null_island() -> Self {
        Coordinate {
            latitude: Latitude::new(0.0).expect("0.0 is a valid latitude"),
            longitude: Longitude::new(0.0).expect("0.0 is a valid longitude"),
        }
    }

    /// Return the latitude component of this `Coordinate`.
    pub fn latitude(&self) -> Latitude {
        self.latitude
    }

    /// Return the longitude component of this `Coordinate`.
    pub fn longitude(&self) -> Longitude {
        self.longitude
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::null_island()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude(), self.longitude())
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// Parse a `Coordinate` from a `"<latitude>,<longitude>"` string.
    /// Both tokens may carry surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s.split(',').collect::<Vec<_>>();
        if tokens.len() != 2 {
            return Err(Error::coordinate(format!(
                "string {:?} not recognised as a coordinate: expected \"<latitude>,<longitude>\"",
                s
            )));
        }

        let mut values = [0.0; 2];
        for (index, token) in tokens.iter().enumerate() {
            values[index] = token.trim().parse().map_err(|_| {
                Error::coordinate(format!(
                    "string {:?} not recognised as a coordinate: could not parse {:?} as a number",
                    s, token
                ))
            })?;
        }

        Coordinate::new(values[0], values[1])
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = Error;

    fn try_from(pair: (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(pair.0, pair.1)
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = Error;

    fn try_from(pair: [f64; 2]) -> Result<Self, Self::Error> {
        Coordinate::new(pair[0], pair[1])
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.latitude().value(), coord.longitude().value())
    }
}

impl Serialize for Coordinate {
    /// Serialize this `Coordinate` as its canonical
    /// `"<latitude>,<longitude>"` string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CoordinateVisitor)
    }
}

struct CoordinateVisitor;

impl<'de> Visitor<'de> for CoordinateVisitor {
    type Value = Coordinate;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "a \"<latitude>,<longitude>\" string, a two-element sequence, \
             or a map with \"latitude\" and \"longitude\" keys"
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Coordinate::null_island())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Coordinate::null_island())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Coordinate::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let first: RawFloat = match seq.next_element()? {
            Some(value) => value,
            None => return Ok(Coordinate::null_island()),
        };
        let second: RawFloat = seq.next_element()?.ok_or_else(|| {
            de::Error::custom(
                "a coordinate sequence must have exactly two elements",
            )
        })?;
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(
                "a coordinate does not accept more than two values",
            ));
        }

        let latitude = Latitude::new(first.0).map_err(de::Error::custom)?;
        let longitude = Longitude::new(second.0).map_err(de::Error::custom)?;
        Ok(Coordinate::from_parts(latitude, longitude))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut latitude: Option<RawFloat> = None;
        let mut longitude: Option<RawFloat> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "latitude" => latitude = Some(map.next_value()?),
                "longitude" => longitude = Some(map.next_value()?),
                other => {
                    return Err(de::Error::custom(format!(
                        "a coordinate map accepts only \"latitude\" and \
                         \"longitude\" keys, found {:?}",
                        other
                    )))
                }
            }
        }

        match (latitude, longitude) {
            (Some(lat), Some(lng)) => {
                let latitude =
                    Latitude::new(lat.0).map_err(de::Error::custom)?;
                let longitude =
                    Longitude::new(lng.0).map_err(de::Error::custom)?;
                Ok(Coordinate::from_parts(latitude, longitude))
            }
            _ => Err(de::Error::custom(
                "a coordinate map requires both \"latitude\" and \
                 \"longitude\" keys",
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Coordinate;
    use std::collections::hash_map::DefaultHasher;
    use std::convert::TryFrom;
    use std::hash::{Hash, Hasher};

    fn hash_of(coord: &Coordinate) -> u64 {
        let mut hasher = DefaultHasher::new();
        coord.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn parse_str() {
        let coord: Coordinate = "45.678,-123.456".parse().unwrap();
        assert_eq!(coord.latitude().value(), 45.678);
        assert_eq!(coord.longitude().value(), -123.456);
    }

    #[test]
    fn parse_str_with_whitespace() {
        let coord: Coordinate = "45.678, -123.456".parse().unwrap();
        assert_eq!(coord.latitude().value(), 45.678);
        assert_eq!(coord.longitude().value(), -123.456);
    }

    #[test]
    fn parse_str_rejects_non_numeric_tokens() {
        let err = "ten,".parse::<Coordinate>().unwrap_err();
        assert!(!err.is_range());
        assert!(err.to_string().contains("not recognised"));
    }

    #[test]
    fn parse_str_rejects_wrong_token_count() {
        assert!("20.0".parse::<Coordinate>().is_err());
        assert!("20.0,10.0,30.0".parse::<Coordinate>().is_err());
    }

    #[test]
    fn parse_str_range_check_runs_after_parsing() {
        let err = "91.0,0.0".parse::<Coordinate>().unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.into_range().unwrap().field(), "latitude");
    }

    #[test]
    fn try_from_pair() {
        let coord = Coordinate::try_from((45.678, -123.456)).unwrap();
        assert_eq!(coord.latitude().value(), 45.678);
        assert_eq!(coord.longitude().value(), -123.456);

        assert!(Coordinate::try_from((50.0, 181.0)).is_err());
        assert!(Coordinate::try_from([-91.0, 0.0]).is_err());
    }

    #[test]
    fn into_pair() {
        let coord = Coordinate::new(20.0, 10.0).unwrap();
        let pair: (f64, f64) = coord.into();
        assert_eq!(pair, (20.0, 10.0));
    }

    #[test]
    fn display_round_trip() {
        let coord = Coordinate::new(20.0, 10.0).unwrap();
        assert_eq!(coord.to_string(), "20.0,10.0");

        let parsed: Coordinate = coord.to_string().parse().unwrap();
        assert_eq!(parsed, coord);
    }

    #[test]
    fn eq_and_hash_are_structural() {
        let a: Coordinate = "20.0,10.0".parse().unwrap();
        let b = Coordinate::new(20.0, 10.0).unwrap();
        let c = Coordinate::new(20.0, 11.0).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn null_island_is_the_default() {
        let coord = Coordinate::default();
        assert_eq!(coord.latitude().value(), 0.0);
        assert_eq!(coord.longitude().value(), 0.0);
        assert_eq!(coord, Coordinate::null_island());
    }

    #[test]
    fn deserialize_from_string() {
        let coord: Coordinate =
            serde_json::from_str("\"45.678,-123.456\"").unwrap();
        assert_eq!(coord.latitude().value(), 45.678);
        assert_eq!(coord.longitude().value(), -123.456);
    }

    #[test]
    fn deserialize_from_sequence() {
        let coord: Coordinate =
            serde_json::from_str("[45.678, -123.456]").unwrap();
        assert_eq!(coord.latitude().value(), 45.678);
        assert_eq!(coord.longitude().value(), -123.456);
    }

    #[test]
    fn deserialize_from_sequence_of_numeric_strings() {
        let coord: Coordinate =
            serde_json::from_str("[\"45.678\", \"-123.456\"]").unwrap();
        assert_eq!(coord.latitude().value(), 45.678);
        assert_eq!(coord.longitude().value(), -123.456);
    }

    #[test]
    fn deserialize_from_map() {
        let coord: Coordinate = serde_json::from_str(
            "{\"latitude\": 45.678, \"longitude\": -123.456}",
        )
        .unwrap();
        assert_eq!(coord.latitude().value(), 45.678);
        assert_eq!(coord.longitude().value(), -123.456);
    }

    #[test]
    fn deserialize_rejects_unsupported_map_keys() {
        let err =
            serde_json::from_str::<Coordinate>("{\"lat\": 1.0, \"lng\": 2.0}")
                .unwrap_err();
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn deserialize_rejects_missing_map_keys() {
        assert!(
            serde_json::from_str::<Coordinate>("{\"latitude\": 1.0}").is_err()
        );
    }

    #[test]
    fn deserialize_empty_input_yields_null_island() {
        let coord: Coordinate = serde_json::from_str("null").unwrap();
        assert_eq!(coord, Coordinate::null_island());

        let coord: Coordinate = serde_json::from_str("[]").unwrap();
        assert_eq!(coord, Coordinate::null_island());
    }

    #[test]
    fn deserialize_rejects_wrong_sequence_length() {
        assert!(serde_json::from_str::<Coordinate>("[10.0]").is_err());
        assert!(
            serde_json::from_str::<Coordinate>("[20.0, 10.0, 30.0]").is_err()
        );
    }

    #[test]
    fn deserialize_rejects_out_of_range_components() {
        assert!(serde_json::from_str::<Coordinate>("[-91.0, 0.0]").is_err());
        assert!(serde_json::from_str::<Coordinate>("[50.0, 181.0]").is_err());

        let coord: Coordinate = serde_json::from_str("[-90.0, 0.0]").unwrap();
        assert_eq!(coord.latitude().value(), -90.0);

        let coord: Coordinate = serde_json::from_str("[50.0, 180.0]").unwrap();
        assert_eq!(coord.longitude().value(), 180.0);
    }

    #[test]
    fn deserialize_rejects_bare_numbers() {
        assert!(serde_json::from_str::<Coordinate>("2").is_err());
    }

    #[test]
    fn serialize_as_canonical_string() {
        let coord = Coordinate::new(20.0, 10.0).unwrap();
        assert_eq!(serde_json::to_string(&coord).unwrap(), "\"20.0,10.0\"");
    }
}
