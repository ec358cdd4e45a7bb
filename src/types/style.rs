use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    Casual,
    Formal,
    Sporty,
    Trendy,
    Classic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleItem {
    pub item: String,
    pub description: String,
    pub category: StyleCategory,
    pub price: String,
    /// Catalog image reference
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleLooks {
    #[serde(rename = "Day Look")]
    pub day: Vec<StyleItem>,
    #[serde(rename = "Evening Look")]
    pub evening: Vec<StyleItem>,
    #[serde(rename = "Activity Look")]
    pub activity: Vec<StyleItem>,
}

impl StyleLooks {
    pub fn item_count(&self) -> usize {
        self.day.len() + self.evening.len() + self.activity.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecommendation {
    pub theme: String,
    pub description: String,
    pub looks: StyleLooks,
    pub accessories: Vec<StyleItem>,
    /// Hex colours, most prominent first
    pub color_palette: Vec<String>,
}

impl StyleRecommendation {
    pub fn item_count(&self) -> usize {
        self.looks.item_count() + self.accessories.len()
    }
}
