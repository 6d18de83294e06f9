//! # JSON Schema
//! This module implements the `schemars` schema hooks for the crate's
//! value types. The components advertise their numeric bounds and
//! `Coordinate` advertises its canonical string form with a
//! `"coordinate"` format marker.

use crate::coord::Coordinate;
use crate::lat_lng::{Latitude, Longitude};
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, NumberValidation, Schema, SchemaObject};
use schemars::JsonSchema;

impl JsonSchema for Latitude {
    fn schema_name() -> String {
        "Latitude".to_owned()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        bounded_number_schema(Latitude::MIN, Latitude::MAX)
    }
}

impl JsonSchema for Longitude {
    fn schema_name() -> String {
        "Longitude".to_owned()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        bounded_number_schema(Longitude::MIN, Longitude::MAX)
    }
}

impl JsonSchema for Coordinate {
    fn schema_name() -> String {
        "Coordinate".to_owned()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            format: Some("coordinate".to_owned()),
            ..Default::default()
        }
        .into()
    }
}

fn bounded_number_schema(min: f64, max: f64) -> Schema {
    SchemaObject {
        instance_type: Some(InstanceType::Number.into()),
        number: Some(Box::new(NumberValidation {
            minimum: Some(min),
            maximum: Some(max),
            ..Default::default()
        })),
        ..Default::default()
    }
    .into()
}

#[cfg(test)]
mod test {
    use crate::{Coordinate, Latitude, Longitude};
    use schemars::schema_for;
    use serde_json::json;

    #[test]
    fn latitude_schema_carries_its_bounds() {
        let schema = serde_json::to_value(schema_for!(Latitude)).unwrap();
        assert_eq!(schema["type"], json!("number"));
        assert_eq!(schema["minimum"], json!(-90.0));
        assert_eq!(schema["maximum"], json!(90.0));
    }

    #[test]
    fn longitude_schema_carries_its_bounds() {
        let schema = serde_json::to_value(schema_for!(Longitude)).unwrap();
        assert_eq!(schema["type"], json!("number"));
        assert_eq!(schema["minimum"], json!(-180.0));
        assert_eq!(schema["maximum"], json!(180.0));
    }

    #[test]
    fn coordinate_schema_carries_the_format_marker() {
        let schema = serde_json::to_value(schema_for!(Coordinate)).unwrap();
        assert_eq!(schema["type"], json!("string"));
        assert_eq!(schema["format"], json!("coordinate"));
    }
}
