use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens of the planning wizard, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Choose a traveller persona
    PersonaSelect,
    /// Age, gender and preferred destination type
    ProfileEntry,
    /// Destination, dates, companions and vibes
    TripPlanning,
    /// Generated itinerary
    TripResults,
    /// Generated packing list
    PackingResults,
    /// Weather-aware style guide
    StyleResults,
    /// Everything at a glance
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::PersonaSelect,
        WizardStep::ProfileEntry,
        WizardStep::TripPlanning,
        WizardStep::TripResults,
        WizardStep::PackingResults,
        WizardStep::StyleResults,
        WizardStep::Summary,
    ];

    /// 1-based position for progress indicators
    pub fn number(&self) -> usize {
        match self {
            WizardStep::PersonaSelect => 1,
            WizardStep::ProfileEntry => 2,
            WizardStep::TripPlanning => 3,
            WizardStep::TripResults => 4,
            WizardStep::PackingResults => 5,
            WizardStep::StyleResults => 6,
            WizardStep::Summary => 7,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::PersonaSelect => "Choose your persona",
            WizardStep::ProfileEntry => "Tell us about yourself",
            WizardStep::TripPlanning => "Plan your trip",
            WizardStep::TripResults => "Your trip",
            WizardStep::PackingResults => "Your packing list",
            WizardStep::StyleResults => "Your style guide",
            WizardStep::Summary => "Trip summary",
        }
    }

    /// Whether the step renders a generated result
    pub fn shows_results(&self) -> bool {
        matches!(
            self,
            WizardStep::TripResults
                | WizardStep::PackingResults
                | WizardStep::StyleResults
                | WizardStep::Summary
        )
    }

    /// Get a human-readable description of the step
    pub fn describe(&self) -> String {
        format!("Step {}/{}: {}", self.number(), Self::ALL.len(), self.title())
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::PersonaSelect => "persona_select",
            WizardStep::ProfileEntry => "profile_entry",
            WizardStep::TripPlanning => "trip_planning",
            WizardStep::TripResults => "trip_results",
            WizardStep::PackingResults => "packing_results",
            WizardStep::StyleResults => "style_results",
            WizardStep::Summary => "summary",
        };
        f.write_str(name)
    }
}
