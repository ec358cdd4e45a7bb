use schemars::schema::RootSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{
    any::TypeId,
    sync::Arc,
};

pub use schemars;

/// Cached JSON schema handle associated with a service response type.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    pub fn from_root_schema<T: 'static>(
        schema_name: &'static str,
        type_name: &'static str,
        root: RootSchema,
    ) -> Self {
        let schema_json = serde_json::to_value(root)
            .unwrap_or_else(|err| panic!("failed to serialize schema for {}: {}", type_name, err));

        Self {
            schema_name,
            type_name,
            type_id: TypeId::of::<T>(),
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }
}

/// A result type the generative service is asked to produce as JSON.
///
/// Implemented through `#[response_schema]`.
pub trait ResponseSchema: DeserializeOwned + Send + Sync + 'static {
    fn schema() -> &'static SchemaHandle;
}

/// Fill in the root title and description unless schemars already set them.
pub fn apply_metadata(root: &mut RootSchema, title: &'static str, description: Option<&'static str>) {
    let metadata = root.schema.metadata();

    if metadata.title.is_none() {
        metadata.title = Some(title.to_string());
    }

    if let Some(description) = description {
        if metadata.description.is_none() {
            metadata.description = Some(description.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PackingRecommendation, TripRecommendation};

    #[test]
    fn test_handles_are_cached_per_type() {
        let first = TripRecommendation::schema();
        let second = TripRecommendation::schema();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.schema_name(), "TripRecommendation");
        assert_eq!(first.type_id(), TypeId::of::<TripRecommendation>());
        assert_ne!(
            PackingRecommendation::schema().type_id(),
            first.type_id()
        );
    }

    #[test]
    fn test_schema_lists_required_fields() {
        let schema = TripRecommendation::schema().schema_json();
        let required = schema["required"].as_array().unwrap();
        for field in ["title", "activities", "accommodation", "budget", "highlights"] {
            assert!(required.iter().any(|f| f == field), "missing {field}");
        }
        assert_eq!(schema["title"], "TripRecommendation");
    }

    #[test]
    fn test_packing_schema_pins_shop_the_look_length() {
        let schema = PackingRecommendation::schema().schema_json();
        let shop = &schema["properties"]["shopTheLook"];
        assert_eq!(shop["minItems"], 3);
        assert_eq!(shop["maxItems"], 3);
    }
}
