use crate::response_schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PackingItem {
    pub item: String,
    pub tip: String,
}

impl PackingItem {
    pub fn new(item: impl Into<String>, tip: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            tip: tip.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ShopItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClothingGuide {
    #[serde(rename = "Daytime Wear")]
    pub daytime_wear: Vec<PackingItem>,
    #[serde(rename = "Evening Outfits")]
    pub evening_outfits: Vec<PackingItem>,
    #[serde(rename = "Activity-Specific")]
    pub activity_specific: Vec<PackingItem>,
}

impl ClothingGuide {
    pub fn item_count(&self) -> usize {
        self.daytime_wear.len() + self.evening_outfits.len() + self.activity_specific.len()
    }
}

/// Personalised packing list for a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[response_schema]
pub struct PackingRecommendation {
    /// Clothing grouped by daytime, evening and activity wear
    pub clothing: ClothingGuide,
    /// Non-clothing items worth bringing
    pub essentials: Vec<PackingItem>,
    /// Exactly three product suggestions
    #[serde(rename = "shopTheLook")]
    #[schemars(length(equal = 3))]
    pub shop_the_look: Vec<ShopItem>,
}

impl PackingRecommendation {
    /// Clothing plus essentials; shop suggestions are not packed items.
    pub fn item_count(&self) -> usize {
        self.clothing.item_count() + self.essentials.len()
    }
}
