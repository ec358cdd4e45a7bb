//! Static reference data offered by the wizard.

use crate::types::profile::Persona;

pub const DEFAULT_FROM_LOCATION: &str = "Delhi, India";

/// Used as the primary vibe for packing when none was selected.
pub const DEFAULT_PRIMARY_VIBE: &str = "adventure";

pub const MAX_VIBES: usize = 5;

struct PersonaEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    traits: [&'static str; 4],
}

const PERSONAS: [PersonaEntry; 8] = [
    PersonaEntry {
        id: "adventurer",
        name: "The Adventurer",
        description: "Thrill-seeker who loves outdoor activities, extreme sports, and exploring off-the-beaten-path destinations.",
        icon: "🏔️",
        traits: ["Risk-taker", "Nature lover", "Athletic", "Spontaneous"],
    },
    PersonaEntry {
        id: "culture-enthusiast",
        name: "The Culture Enthusiast",
        description: "Passionate about history, art, museums, and immersing in local cultures and traditions.",
        icon: "🏛️",
        traits: ["Curious", "Educational", "Artistic", "Thoughtful"],
    },
    PersonaEntry {
        id: "luxury-traveler",
        name: "The Luxury Traveler",
        description: "Enjoys premium experiences, fine dining, luxury accommodations, and exclusive activities.",
        icon: "🥂",
        traits: ["Sophisticated", "Quality-focused", "Comfortable", "Exclusive"],
    },
    PersonaEntry {
        id: "budget-explorer",
        name: "The Budget Explorer",
        description: "Smart traveler who maximizes experiences while minimizing costs, loves local finds and authentic experiences.",
        icon: "🎒",
        traits: ["Resourceful", "Local-focused", "Authentic", "Practical"],
    },
    PersonaEntry {
        id: "wellness-seeker",
        name: "The Wellness Seeker",
        description: "Focuses on relaxation, rejuvenation, spa treatments, yoga retreats, and mental well-being.",
        icon: "🧘",
        traits: ["Mindful", "Health-conscious", "Peaceful", "Restorative"],
    },
    PersonaEntry {
        id: "foodie",
        name: "The Foodie",
        description: "Travels primarily for culinary experiences, local cuisines, food tours, and cooking classes.",
        icon: "🍜",
        traits: ["Culinary-curious", "Experimental", "Social", "Sensory"],
    },
    PersonaEntry {
        id: "social-connector",
        name: "The Social Connector",
        description: "Loves meeting new people, group activities, nightlife, and creating lasting connections.",
        icon: "🎉",
        traits: ["Outgoing", "Social", "Energetic", "Networking"],
    },
    PersonaEntry {
        id: "romantic",
        name: "The Romantic",
        description: "Seeks intimate, couples-focused experiences, romantic dinners, sunset views, and memorable moments.",
        icon: "💕",
        traits: ["Intimate", "Romantic", "Aesthetic", "Memorable"],
    },
];

impl PersonaEntry {
    fn to_persona(&self) -> Persona {
        Persona {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            traits: self.traits.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// All personas in display order
pub fn personas() -> Vec<Persona> {
    PERSONAS.iter().map(PersonaEntry::to_persona).collect()
}

pub fn persona(id: &str) -> Option<Persona> {
    PERSONAS
        .iter()
        .find(|entry| entry.id == id)
        .map(PersonaEntry::to_persona)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibeCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const VIBE_CATEGORIES: [VibeCategory; 12] = [
    VibeCategory {
        id: "adventure",
        name: "Adventure",
        description: "Thrilling outdoor activities and extreme sports",
    },
    VibeCategory {
        id: "relaxation",
        name: "Relaxation",
        description: "Peaceful and rejuvenating experiences",
    },
    VibeCategory {
        id: "cultural",
        name: "Cultural",
        description: "Museums, historical sites, and local traditions",
    },
    VibeCategory {
        id: "luxury",
        name: "Luxury",
        description: "Premium experiences and high-end accommodations",
    },
    VibeCategory {
        id: "budget",
        name: "Budget-Friendly",
        description: "Affordable experiences with great value",
    },
    VibeCategory {
        id: "nightlife",
        name: "Nightlife",
        description: "Vibrant nightlife, bars, and entertainment",
    },
    VibeCategory {
        id: "nature",
        name: "Nature",
        description: "Wildlife, national parks, and natural beauty",
    },
    VibeCategory {
        id: "food",
        name: "Culinary",
        description: "Local cuisines, food tours, and dining experiences",
    },
    VibeCategory {
        id: "romantic",
        name: "Romantic",
        description: "Intimate experiences perfect for couples",
    },
    VibeCategory {
        id: "photography",
        name: "Photography",
        description: "Instagram-worthy spots and scenic photography",
    },
    VibeCategory {
        id: "wellness",
        name: "Wellness",
        description: "Spa treatments, yoga, and health-focused activities",
    },
    VibeCategory {
        id: "shopping",
        name: "Shopping",
        description: "Local markets, boutiques, and shopping districts",
    },
];

/// Look up a vibe by id or display name, ignoring case.
pub fn vibe(tag: &str) -> Option<&'static VibeCategory> {
    VIBE_CATEGORIES
        .iter()
        .find(|v| v.id.eq_ignore_ascii_case(tag) || v.name.eq_ignore_ascii_case(tag))
}

/// Departure cities offered in the "from" picker.
pub const DEPARTURE_CITIES: [&str; 10] = [
    "Delhi, India",
    "Mumbai, India",
    "Bangalore, India",
    "Chennai, India",
    "Kolkata, India",
    "Hyderabad, India",
    "Pune, India",
    "Ahmedabad, India",
    "Jaipur, India",
    "Goa, India",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(personas().len(), 8);
        assert_eq!(VIBE_CATEGORIES.len(), 12);
        assert!(DEPARTURE_CITIES.contains(&DEFAULT_FROM_LOCATION));
    }

    #[test]
    fn test_lookups() {
        let foodie = persona("foodie").unwrap();
        assert_eq!(foodie.name, "The Foodie");
        assert_eq!(foodie.traits.len(), 4);
        assert!(persona("the-foodie").is_none());

        assert_eq!(vibe("Culinary").map(|v| v.id), Some("food"));
        assert_eq!(vibe("ADVENTURE").map(|v| v.id), Some("adventure"));
        assert!(vibe("skydiving").is_none());
    }
}
