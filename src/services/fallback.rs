//! Deterministic results used whenever the text service is unavailable or
//! returns something unusable.

use std::collections::BTreeMap;

use crate::types::{
    Accommodation, AccommodationDetails, Budget, ClothingGuide, Companions, PackingItem,
    PackingRecommendation, ShopItem, Transportation, TransportationDetails, TripPlan,
    TripRecommendation, UserProfile,
};

/// Price band selected by traveller age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    Under25,
    From25To39,
    From40,
}

impl PriceBand {
    pub fn for_age(age: i32) -> Self {
        if age < 25 {
            PriceBand::Under25
        } else if age < 40 {
            PriceBand::From25To39
        } else {
            PriceBand::From40
        }
    }

    fn nightly(self) -> &'static str {
        match self {
            PriceBand::Under25 => "120-180",
            PriceBand::From25To39 => "180-280",
            PriceBand::From40 => "250-350",
        }
    }

    fn meals(self) -> &'static str {
        match self {
            PriceBand::Under25 => "30-50",
            PriceBand::From25To39 => "50-80",
            PriceBand::From40 => "70-120",
        }
    }

    fn activities(self) -> &'static str {
        match self {
            PriceBand::Under25 => "25-40",
            PriceBand::From25To39 => "40-70",
            PriceBand::From40 => "60-100",
        }
    }

    fn daily_total(self) -> &'static str {
        match self {
            PriceBand::Under25 => "190-295",
            PriceBand::From25To39 => "285-455",
            PriceBand::From40 => "395-595",
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn audience(companions: Option<Companions>) -> String {
    match companions.unwrap_or(Companions::Solo) {
        Companions::Solo => "solo travelers".to_string(),
        other => format!("{} trips", other),
    }
}

/// Beach or mountain itinerary priced by the traveller's age band.
pub fn trip_recommendation(profile: &UserProfile, plan: &TripPlan) -> TripRecommendation {
    let beach = profile.is_beach_lover();
    let band = PriceBand::for_age(profile.age);

    let destination = match plan.destination.trim() {
        "" if beach => "Paradise Beach",
        "" => "Mountain Retreat",
        name => name,
    };

    let title = if beach {
        format!("Ultimate Beach Experience in {}", destination)
    } else {
        format!("Mountain Adventure Experience in {}", destination)
    };

    let description = format!(
        "A perfectly curated {} experience designed for {}.",
        plan.vibes.join(" & ").to_lowercase(),
        audience(plan.companions)
    );

    let activities = if beach {
        strings(&[
            "Sunrise beach yoga and meditation session",
            "Snorkeling in crystal-clear waters",
            "Local seafood cooking class",
            "Sunset catamaran cruise",
            "Beachside spa treatments",
            "Island hopping adventure",
            "Local market and cultural tour",
        ])
    } else {
        strings(&[
            "Guided mountain hiking with scenic viewpoints",
            "Cable car rides to summit peaks",
            "Local mountain village exploration",
            "Traditional mountain cuisine experience",
            "Nature photography workshops",
            "Mountain biking trails",
            "Stargazing and campfire evenings",
        ])
    };

    let nightly = format!("${} per night", band.nightly());

    let accommodation = Accommodation::Details(AccommodationDetails {
        kind: if beach { "Beachfront Resort" } else { "Mountain Lodge" }.to_string(),
        name: if beach {
            "Ocean View Paradise Resort"
        } else {
            "Alpine Summit Lodge"
        }
        .to_string(),
        features: if beach {
            strings(&[
                "Ocean view suites",
                "Private beach access",
                "Infinity pool",
                "Spa services",
                "Multiple restaurants",
            ])
        } else {
            strings(&[
                "Valley view rooms",
                "Mountain trail access",
                "Fireplace lounge",
                "Local cuisine restaurant",
                "Wellness center",
            ])
        },
        price_range: nightly.clone(),
        rating: "4.5/5 stars".to_string(),
    });

    let transportation = Transportation::Details(TransportationDetails {
        airport: "Complimentary airport shuttle service".to_string(),
        local: strings(&[
            "Daily shuttle to main attractions",
            "Bike rentals available",
            if beach {
                "Beach buggy tours"
            } else {
                "Mountain trail shuttles"
            },
        ]),
        recommendations: if beach {
            "Walking distance to beach, taxi for restaurants"
        } else {
            "Cable car for mountain access, rental car for villages"
        }
        .to_string(),
        estimated_cost: "$15-25 per day for local transport".to_string(),
    });

    let budget = Budget::Breakdown(BTreeMap::from([
        ("accommodation".to_string(), nightly),
        ("meals".to_string(), format!("${} per day", band.meals())),
        (
            "activities".to_string(),
            format!("${} per day", band.activities()),
        ),
        ("transportation".to_string(), "$15-25 per day".to_string()),
        (
            Budget::TOTAL_KEY.to_string(),
            format!("${} per day", band.daily_total()),
        ),
        (
            "note".to_string(),
            "Flights not included. Prices vary by season.".to_string(),
        ),
    ]));

    let highlights = if beach {
        strings(&[
            "Private beach access with premium amenities",
            "Exclusive sunset viewpoints off the beaten path",
            "Meet local artisans and learn traditional crafts",
            "Hidden cenotes and secret swimming spots",
            "Local music and cultural performances",
            "Farm-to-table dining experiences",
        ])
    } else {
        strings(&[
            "Breathtaking sunrise from mountain peaks",
            "Authentic local mountain culture immersion",
            "Rare wildlife spotting opportunities",
            "Traditional mountain crafts workshops",
            "Scenic train rides through valleys",
            "Natural hot springs and wellness retreats",
        ])
    };

    TripRecommendation {
        title,
        description,
        activities,
        accommodation,
        transportation,
        budget,
        highlights,
    }
}

fn pick(beach: bool, beach_value: &str, other: &str) -> String {
    let chosen = if beach { beach_value } else { other };
    chosen.to_string()
}

/// Packing list keyed off whether the trip vibe is a beach or relaxing one.
pub fn packing_recommendation(destination: &str, trip_vibe: &str) -> PackingRecommendation {
    let vibe = trip_vibe.to_lowercase();
    let beach = vibe.contains("beach") || vibe.contains("relaxing");

    let daytime_wear = vec![
        PackingItem::new(
            pick(beach, "Light Cotton Dresses", "Comfortable Walking Shoes"),
            pick(
                beach,
                "Perfect for beach days and keeping cool in the tropical heat.",
                "Essential for exploring. Choose comfortable yet stylish options for long walking days.",
            ),
        ),
        PackingItem::new(
            pick(beach, "Sun Hat", "Layering Pieces"),
            pick(
                beach,
                "Wide-brim hat for sun protection while maintaining style.",
                "Weather can be unpredictable. Layer with cardigans or light jackets.",
            ),
        ),
        PackingItem::new(
            "Sunglasses",
            "Essential for eye protection and completing your travel look.",
        ),
    ];

    let evening_outfits = vec![
        PackingItem::new(
            pick(beach, "Maxi Dress", "Smart Casual Outfit"),
            pick(
                beach,
                "Perfect for beachside dinners and sunset views.",
                "Versatile for various evening activities and dining options.",
            ),
        ),
        PackingItem::new(
            "Comfortable Flats or Low Heels",
            "Stylish yet practical for evening walks and activities.",
        ),
    ];

    let activity_specific = vec![
        PackingItem::new(
            pick(beach, "Swimwear & Cover-ups", "Day Pack"),
            pick(
                beach,
                "Pack 2-3 swimsuits and stylish cover-ups for beach activities.",
                "Perfect size for day trips and carrying essentials while exploring.",
            ),
        ),
        PackingItem::new(
            "Crossbody Bag",
            "Keep your hands free and belongings secure while sightseeing.",
        ),
    ];

    let essentials = vec![
        PackingItem::new(
            "Passport & Travel Documents",
            "Keep digital copies stored securely in cloud storage as backup.",
        ),
        PackingItem::new(
            "Universal Power Adapter",
            "Research the outlet type for your destination and pack accordingly.",
        ),
        PackingItem::new(
            "Portable Charger",
            "Essential for long days of exploring and taking photos.",
        ),
        PackingItem::new(
            "Travel-Size Toiletries",
            "Pack essentials in TSA-approved sizes to save space and meet regulations.",
        ),
        PackingItem::new(
            pick(beach, "Reef-Safe Sunscreen", "Weather-Appropriate Items"),
            pick(
                beach,
                "Protect both your skin and the marine environment.",
                "Check weather forecast and pack accordingly for comfort.",
            ),
        ),
    ];

    let shop_the_look = vec![
        ShopItem {
            name: format!("{} Memory Scarf", destination),
            description: "A locally-inspired silk scarf that captures the essence of your destination and doubles as a versatile travel accessory.".to_string(),
            price: "$85.00".to_string(),
        },
        ShopItem {
            name: "Travel Wellness Kit".to_string(),
            description: "Compact kit with hydrating mist, lip balm, and hand sanitizer to keep you refreshed during your journey.".to_string(),
            price: "$45.00".to_string(),
        },
        ShopItem {
            name: "Explorer's Crossbody".to_string(),
            description: "Lightweight, water-resistant bag with multiple compartments and anti-theft features for worry-free exploration.".to_string(),
            price: "$120.00".to_string(),
        },
    ];

    PackingRecommendation {
        clothing: ClothingGuide {
            daytime_wear,
            evening_outfits,
            activity_specific,
        },
        essentials,
        shop_the_look,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DestinationType, Gender};

    #[test]
    fn test_price_band_boundaries() {
        assert_eq!(PriceBand::for_age(1), PriceBand::Under25);
        assert_eq!(PriceBand::for_age(24), PriceBand::Under25);
        assert_eq!(PriceBand::for_age(25), PriceBand::From25To39);
        assert_eq!(PriceBand::for_age(39), PriceBand::From25To39);
        assert_eq!(PriceBand::for_age(40), PriceBand::From40);
    }

    #[test]
    fn test_beach_trip_for_thirty_year_old() {
        let profile = UserProfile::new(30, Gender::Female, DestinationType::Beaches);
        let plan = TripPlan {
            destination: "Bali, Indonesia".into(),
            vibes: vec!["Adventure".into(), "Food".into()],
            ..TripPlan::default()
        };

        let trip = trip_recommendation(&profile, &plan);
        assert_eq!(trip.title, "Ultimate Beach Experience in Bali, Indonesia");
        assert_eq!(
            trip.description,
            "A perfectly curated adventure & food experience designed for solo travelers."
        );
        assert_eq!(trip.budget.category("accommodation"), Some("$180-280 per night"));
        assert_eq!(trip.budget.total(), Some("$285-455 per day"));
        match trip.accommodation {
            Accommodation::Details(details) => assert_eq!(details.kind, "Beachfront Resort"),
            other => panic!("expected details, got {other:?}"),
        }
    }

    #[test]
    fn test_mountain_trip_without_destination() {
        let profile = UserProfile::new(45, Gender::Male, DestinationType::Mountains);
        let plan = TripPlan {
            companions: Some(Companions::Family),
            ..TripPlan::default()
        };

        let trip = trip_recommendation(&profile, &plan);
        assert_eq!(trip.title, "Mountain Adventure Experience in Mountain Retreat");
        assert!(trip.description.ends_with("designed for family trips."));
        assert_eq!(trip.budget.category("meals"), Some("$70-120 per day"));
        assert_eq!(trip.activities.len(), 7);
        assert_eq!(trip.highlights.len(), 6);
    }

    #[test]
    fn test_packing_branches_on_vibe() {
        let beach = packing_recommendation("Goa", "Relaxing");
        assert_eq!(beach.clothing.daytime_wear[0].item, "Light Cotton Dresses");
        assert_eq!(beach.essentials[4].item, "Reef-Safe Sunscreen");

        let city = packing_recommendation("Tokyo", "cultural");
        assert_eq!(city.clothing.daytime_wear[0].item, "Comfortable Walking Shoes");
        assert_eq!(city.shop_the_look.len(), 3);
        assert_eq!(city.shop_the_look[0].name, "Tokyo Memory Scarf");
        assert_eq!(city.item_count(), 12);
    }
}
