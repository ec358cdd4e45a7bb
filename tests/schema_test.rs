use schemars::JsonSchema;
use serde::Deserialize;
use vibe_pack::{PackingRecommendation, ResponseSchema, TripRecommendation};

/// A single day of sightseeing
#[derive(Debug, Deserialize, JsonSchema)]
#[vibe_pack::response_schema(name = "day_trip")]
#[allow(dead_code)]
struct DayTrip {
    /// Places to visit in order
    stops: Vec<String>,
    #[serde(default)]
    notes: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[vibe_pack::response_schema(description = "Explicit description wins")]
#[allow(dead_code)]
struct Layover {
    airport: String,
    hours: u32,
}

#[test]
fn test_macro_outside_the_crate() {
    let handle = DayTrip::schema();
    assert_eq!(handle.schema_name(), "day_trip");
    assert_eq!(handle.type_name(), "DayTrip");

    let schema = handle.schema_json();
    assert_eq!(schema["type"], "object");
    assert!(schema["properties"]["stops"].is_object());

    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(required, vec!["stops"]);
}

#[test]
fn test_explicit_description() {
    let schema = Layover::schema().schema_json();
    assert_eq!(schema["description"], "Explicit description wins");
    assert_eq!(Layover::schema().schema_name(), "Layover");
}

#[test]
fn test_result_schemas_describe_the_contract() {
    let trip = TripRecommendation::schema().schema_json();
    for field in [
        "title",
        "description",
        "activities",
        "accommodation",
        "transportation",
        "budget",
        "highlights",
    ] {
        assert!(
            trip["required"]
                .as_array()
                .unwrap()
                .iter()
                .any(|v| v == field),
            "{field} not required"
        );
    }

    let packing = PackingRecommendation::schema().schema_json();
    assert_eq!(packing["properties"]["shopTheLook"]["minItems"], 3);
    assert_eq!(packing["properties"]["shopTheLook"]["maxItems"], 3);
}
