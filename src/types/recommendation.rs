use crate::response_schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Personalised itinerary for a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[response_schema]
pub struct TripRecommendation {
    /// Creative title for the trip
    pub title: String,
    /// Brief engaging description
    pub description: String,
    /// Specific activities, typically five to seven
    pub activities: Vec<String>,
    /// Where to stay, either a sentence or a structured record
    pub accommodation: Accommodation,
    /// How to get there and get around
    pub transportation: Transportation,
    /// Cost estimate, either a sentence or named categories
    pub budget: Budget,
    /// Unique highlights or must-see spots
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Accommodation {
    Summary(String),
    Details(AccommodationDetails),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub features: Vec<String>,
    pub price_range: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Transportation {
    Summary(String),
    Details(TransportationDetails),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransportationDetails {
    pub airport: String,
    pub local: Vec<String>,
    pub recommendations: String,
    pub estimated_cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Budget {
    Summary(String),
    /// Cost category (`flights`, `meals`, `total_estimate`, ...) to amount
    Breakdown(BTreeMap<String, String>),
}

impl Budget {
    pub const TOTAL_KEY: &'static str = "total_estimate";

    pub fn total(&self) -> Option<&str> {
        match self {
            Budget::Summary(_) => None,
            Budget::Breakdown(categories) => categories.get(Self::TOTAL_KEY).map(String::as_str),
        }
    }

    pub fn category(&self, name: &str) -> Option<&str> {
        match self {
            Budget::Summary(_) => None,
            Budget::Breakdown(categories) => categories.get(name).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_untagged_variants_deserialize() {
        let rec: TripRecommendation = serde_json::from_value(json!({
            "title": "Kyoto Calm",
            "description": "Temples and tea",
            "activities": ["Tea ceremony"],
            "accommodation": "A ryokan in Gion",
            "transportation": {
                "airport": "Haruka express from KIX",
                "local": ["Bus", "Bicycle"],
                "recommendations": "Buy an ICOCA card",
                "estimatedCost": "$10 per day"
            },
            "budget": {"flights": "$600", "total_estimate": "$1500"},
            "highlights": ["Fushimi Inari at dawn"]
        }))
        .unwrap();

        assert!(matches!(rec.accommodation, Accommodation::Summary(_)));
        match &rec.transportation {
            Transportation::Details(details) => assert_eq!(details.local.len(), 2),
            other => panic!("expected details, got {other:?}"),
        }
        assert_eq!(rec.budget.total(), Some("$1500"));
        assert_eq!(rec.budget.category("flights"), Some("$600"));
    }

    #[test]
    fn test_accommodation_type_field_rename() {
        let details = AccommodationDetails {
            kind: "Lodge".into(),
            name: "Alpine".into(),
            features: vec![],
            price_range: "$100".into(),
            rating: "4/5".into(),
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["type"], "Lodge");
        assert_eq!(value["priceRange"], "$100");
    }
}
