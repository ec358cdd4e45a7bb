use crate::{
    error::{PlannerError, Result},
    schemas::{ResponseSchema, SchemaHandle},
};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate a parsed service payload against a response schema
pub(crate) fn validate_payload(schema: &SchemaHandle, payload: &Value) -> Result<()> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            PlannerError::SchemaMismatch(format!(
                "failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx == MAX_SCHEMA_ERRORS {
                truncated = true;
                break;
            }
            let mut path = error.instance_path.to_string();
            if path.is_empty() {
                path = "<root>".to_string();
            }
            details.push(format!("{}: {}", path, error));
        }

        let mut detail_str = if details.is_empty() {
            "payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::SchemaMismatch(format!(
            "payload does not match `{}`: {}",
            schema.schema_name(),
            detail_str
        )));
    }

    Ok(())
}

/// Check a payload against `T`'s schema, then deserialize it.
///
/// Unknown extra fields pass; missing or mistyped fields are rejected.
pub(crate) fn decode_payload<T: ResponseSchema>(payload: Value) -> Result<T> {
    let schema = T::schema();
    validate_payload(schema, &payload)?;

    serde_path_to_error::deserialize(payload).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::SchemaMismatch(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            location,
            err.inner()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Accommodation, PackingRecommendation, TripRecommendation};
    use serde_json::json;

    fn trip_payload() -> Value {
        json!({
            "title": "Lisbon Light",
            "description": "Tiles, trams and pastel de nata",
            "activities": ["Tram 28", "Belem"],
            "accommodation": "Boutique hotel in Alfama",
            "transportation": "Metro from the airport",
            "budget": {"flights": "$700", "total_estimate": "$1800"},
            "highlights": ["Miradouro sunsets"],
            "confidence": "high"
        })
    }

    #[test]
    fn test_decode_accepts_extra_fields() {
        let rec: TripRecommendation = decode_payload(trip_payload()).unwrap();
        assert_eq!(rec.title, "Lisbon Light");
        assert_eq!(
            rec.accommodation,
            Accommodation::Summary("Boutique hotel in Alfama".into())
        );
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let mut payload = trip_payload();
        payload.as_object_mut().unwrap().remove("highlights");
        let err = decode_payload::<TripRecommendation>(payload).unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_MISMATCH");
        assert!(err.to_string().contains("TripRecommendation"));
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        let mut payload = trip_payload();
        payload["activities"] = json!("hike everything");
        assert!(decode_payload::<TripRecommendation>(payload).is_err());
    }

    #[test]
    fn test_decode_rejects_short_shop_list() {
        let payload = json!({
            "clothing": {
                "Daytime Wear": [{"item": "Linen shirt", "tip": "Breathes"}],
                "Evening Outfits": [],
                "Activity-Specific": []
            },
            "essentials": [],
            "shopTheLook": [{"name": "Scarf", "description": "Silk", "price": "$40"}]
        });
        let err = decode_payload::<PackingRecommendation>(payload).unwrap_err();
        assert!(err.to_string().contains("shopTheLook"));
    }
}
