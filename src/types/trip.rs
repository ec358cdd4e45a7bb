use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{DEFAULT_FROM_LOCATION, MAX_VIBES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Companions {
    Solo,
    Partner,
    Family,
    Friends,
}

impl Companions {
    pub fn as_str(&self) -> &'static str {
        match self {
            Companions::Solo => "solo",
            Companions::Partner => "partner",
            Companions::Family => "family",
            Companions::Friends => "friends",
        }
    }
}

impl fmt::Display for Companions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trip details collected on the planning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub destination: String,
    pub from_location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub companions: Option<Companions>,
    /// Selected vibe tags in selection order
    pub vibes: Vec<String>,
}

impl Default for TripPlan {
    fn default() -> Self {
        Self {
            destination: String::new(),
            from_location: DEFAULT_FROM_LOCATION.to_string(),
            start_date: None,
            end_date: None,
            companions: Some(Companions::Solo),
            vibes: Vec::new(),
        }
    }
}

impl TripPlan {
    /// Select or deselect a vibe tag.
    ///
    /// Deselects when already present; otherwise appends only while fewer than
    /// five vibes are selected. Returns whether the tag is selected afterwards.
    pub fn toggle_vibe(&mut self, vibe: &str) -> bool {
        if let Some(index) = self.vibes.iter().position(|selected| selected == vibe) {
            self.vibes.remove(index);
            return false;
        }

        if self.vibes.len() < MAX_VIBES {
            self.vibes.push(vibe.to_string());
            return true;
        }

        false
    }

    /// First selected vibe, the dominant signal for packing generation.
    pub fn primary_vibe(&self) -> Option<&str> {
        self.vibes.first().map(String::as_str)
    }

    /// Whole days between the two dates, when both are set.
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}
