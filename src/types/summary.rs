use super::{
    packing::PackingRecommendation,
    profile::UserProfile,
    recommendation::{Accommodation, Budget, TripRecommendation},
    style::StyleRecommendation,
    trip::TripPlan,
};
use serde::Serialize;

/// Everything the final step shows, borrowed from the wizard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary<'a> {
    pub profile: &'a UserProfile,
    pub plan: &'a TripPlan,
    pub trip: &'a TripRecommendation,
    pub packing: &'a PackingRecommendation,
    pub style: &'a StyleRecommendation,
}

impl<'a> TripSummary<'a> {
    pub fn new(
        profile: &'a UserProfile,
        plan: &'a TripPlan,
        trip: &'a TripRecommendation,
        packing: &'a PackingRecommendation,
        style: &'a StyleRecommendation,
    ) -> Self {
        Self {
            profile,
            plan,
            trip,
            packing,
            style,
        }
    }

    pub fn trip_days(&self) -> Option<i64> {
        self.plan.duration_days()
    }

    /// Packed clothing and essentials plus every styled item and accessory
    pub fn total_items(&self) -> usize {
        self.packing.item_count() + self.style.item_count()
    }

    /// Plain-text rendering of the summary
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("=== {} ===", self.trip.title));
        lines.push(format!(
            "{} -> {}",
            self.plan.from_location, self.plan.destination
        ));

        if let (Some(start), Some(end)) = (self.plan.start_date, self.plan.end_date) {
            let days = self.trip_days().unwrap_or_default();
            lines.push(format!("Dates: {} to {} ({} days)", start, end, days));
        }

        if let Some(companions) = self.plan.companions {
            lines.push(format!("Travelling: {}", companions));
        }

        if !self.plan.vibes.is_empty() {
            lines.push(format!("Vibes: {}", self.plan.vibes.join(", ")));
        }

        if let Some(persona) = self.profile.persona() {
            lines.push(format!("Persona: {}", persona.name));
        }

        lines.push(String::new());
        lines.push(self.trip.description.clone());

        lines.push(String::new());
        lines.push("--- Activities ---".to_string());
        for (idx, activity) in self.trip.activities.iter().enumerate() {
            lines.push(format!("{}. {}", idx + 1, activity));
        }

        lines.push(String::new());
        lines.push("--- Stay ---".to_string());
        match &self.trip.accommodation {
            Accommodation::Summary(text) => lines.push(text.clone()),
            Accommodation::Details(details) => lines.push(format!(
                "{} ({}), {}, {}",
                details.name, details.kind, details.price_range, details.rating
            )),
        }

        match &self.trip.budget {
            Budget::Summary(text) => lines.push(format!("Budget: {}", text)),
            Budget::Breakdown(_) => {
                if let Some(total) = self.trip.budget.total() {
                    lines.push(format!("Budget: {}", total));
                }
            }
        }

        lines.push(String::new());
        lines.push(format!("--- Style: {} ---", self.style.theme));
        lines.push(format!("Palette: {}", self.style.color_palette.join(" ")));

        lines.push(String::new());
        lines.push(format!("Items to pack and wear: {}", self.total_items()));

        lines.join("\n")
    }
}
