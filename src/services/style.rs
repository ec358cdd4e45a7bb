//! Rule-based style guide derived from persona, vibes, gender and weather.

use crate::types::{
    Gender, StyleCategory, StyleItem, StyleLooks, StyleRecommendation, TripPlan, UserProfile,
    WeatherForecast,
};

pub const DEFAULT_THEME: &str = "Modern Traveler";

pub const TROPICAL_PALETTE: [&str; 5] = ["#87CEEB", "#F0E68C", "#FFB6C1", "#98FB98", "#FFF8DC"];
pub const URBAN_PALETTE: [&str; 5] = ["#2F4F4F", "#696969", "#D3D3D3", "#000000", "#FFFFFF"];
pub const CULTURAL_PALETTE: [&str; 5] = ["#8B4513", "#DAA520", "#CD853F", "#F5DEB3", "#FFFAF0"];
pub const ADVENTURE_PALETTE: [&str; 5] = ["#228B22", "#8B4513", "#556B2F", "#A0522D", "#F5F5DC"];
pub const LUXURY_PALETTE: [&str; 5] = ["#000000", "#FFFFFF", "#FFD700", "#C0C0C0", "#4B0082"];

/// Keyword groups in priority order; the first group with a matching vibe wins.
const PALETTE_RULES: [(&[&str], &[&str; 5]); 4] = [
    (&["tropical", "beach"], &TROPICAL_PALETTE),
    (&["cultural", "historic"], &CULTURAL_PALETTE),
    (&["adventure", "outdoor"], &ADVENTURE_PALETTE),
    (&["luxury", "romantic"], &LUXURY_PALETTE),
];

const WARM_ABOVE: i32 = 25;
const COLD_BELOW: i32 = 15;
const RAINY_ABOVE: u32 = 30;

pub fn theme_for(persona_id: Option<&str>) -> &'static str {
    match persona_id {
        Some("adventurer") => "Rugged Explorer Chic",
        Some("luxury-traveler") => "Sophisticated Elegance",
        Some("culture-enthusiast") => "Cultured Minimalist",
        Some("foodie") => "Casual Cosmopolitan",
        Some("wellness-seeker") => "Zen Comfort",
        Some("budget-explorer") => "Smart Casual",
        Some("social-connector") => "Trendy Social",
        _ => DEFAULT_THEME,
    }
}

/// Palette for the first keyword group any vibe tag matches, else urban.
pub fn palette_for(vibes: &[String]) -> Vec<String> {
    let tags: Vec<String> = vibes.iter().map(|v| v.trim().to_lowercase()).collect();

    let palette = PALETTE_RULES
        .iter()
        .find(|(keywords, _)| {
            keywords
                .iter()
                .any(|keyword| tags.iter().any(|tag| tag.as_str() == *keyword))
        })
        .map(|(_, palette)| *palette)
        .unwrap_or(&URBAN_PALETTE);

    palette.iter().map(|hex| hex.to_string()).collect()
}

/// Weather flags read from the forecast's current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherFlags {
    pub is_warm: bool,
    pub is_cold: bool,
    pub is_rainy: bool,
}

impl WeatherFlags {
    pub fn from_forecast(forecast: &WeatherForecast) -> Self {
        let current = &forecast.current_weather;
        Self {
            is_warm: current.temperature.max > WARM_ABOVE,
            is_cold: current.temperature.min < COLD_BELOW,
            is_rainy: current.precipitation > RAINY_ABOVE,
        }
    }
}

fn item(name: &str, description: &str, category: StyleCategory, price: &str) -> StyleItem {
    StyleItem {
        item: name.to_string(),
        description: description.to_string(),
        category,
        price: price.to_string(),
        image: slug(name),
    }
}

fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn day_look(flags: WeatherFlags) -> Vec<StyleItem> {
    let top = if flags.is_warm {
        item(
            "Linen Button-Down Shirt",
            "Breathable and comfortable for warm weather exploration",
            StyleCategory::Casual,
            "$85",
        )
    } else {
        item(
            "Merino Wool Sweater",
            "Soft, temperature-regulating for comfortable sightseeing",
            StyleCategory::Casual,
            "$85",
        )
    };

    let bottom = if flags.is_warm {
        item(
            "Comfortable Chino Shorts",
            "Versatile shorts perfect for walking and casual dining",
            StyleCategory::Casual,
            "$65",
        )
    } else {
        item(
            "Dark Wash Jeans",
            "Classic fit jeans that work for most activities",
            StyleCategory::Casual,
            "$65",
        )
    };

    vec![
        top,
        bottom,
        item(
            "Comfortable Walking Sneakers",
            "Supportive shoes for all-day exploration and sightseeing",
            StyleCategory::Sporty,
            "$120",
        ),
    ]
}

fn evening_look(gender: Option<Gender>) -> Vec<StyleItem> {
    let female = gender == Some(Gender::Female);

    let outfit = if female {
        item(
            "Midi Wrap Dress",
            "Elegant yet comfortable dress perfect for dinner out",
            StyleCategory::Formal,
            "$95",
        )
    } else {
        item(
            "Collared Polo Shirt",
            "Smart casual shirt suitable for restaurants and bars",
            StyleCategory::Formal,
            "$95",
        )
    };

    let shoes = if female {
        item(
            "Block Heel Sandals",
            "Stylish sandals that are comfortable for walking",
            StyleCategory::Formal,
            "$110",
        )
    } else {
        item(
            "Leather Loafers",
            "Classic shoes that work from day to evening",
            StyleCategory::Formal,
            "$110",
        )
    };

    vec![
        outfit,
        shoes,
        item(
            "Lightweight Blazer",
            "Perfect for elevating any outfit and handling air conditioning",
            StyleCategory::Classic,
            "$130",
        ),
    ]
}

fn activity_look(flags: WeatherFlags) -> Vec<StyleItem> {
    let top = if flags.is_warm {
        item(
            "Moisture-Wicking Tank Top",
            "Breathable top for outdoor activities and sports",
            StyleCategory::Sporty,
            "$45",
        )
    } else {
        item(
            "Technical Long Sleeve",
            "Temperature-regulating shirt for active pursuits",
            StyleCategory::Sporty,
            "$45",
        )
    };

    vec![
        top,
        item(
            "Quick-Dry Hiking Pants",
            "Versatile pants perfect for adventures and outdoor activities",
            StyleCategory::Sporty,
            "$75",
        ),
        item(
            "Outdoor Adventure Shoes",
            "Durable footwear for hiking, walking, and outdoor exploration",
            StyleCategory::Sporty,
            "$140",
        ),
    ]
}

fn accessories(flags: WeatherFlags) -> Vec<StyleItem> {
    let hat = if flags.is_warm {
        item(
            "Sun Hat",
            "Stylish protection from sun with wide brim",
            StyleCategory::Classic,
            "$35",
        )
    } else {
        item(
            "Warm Beanie",
            "Cozy knit hat to keep warm in cool weather",
            StyleCategory::Classic,
            "$35",
        )
    };

    let cover = if flags.is_rainy {
        item(
            "Compact Travel Umbrella",
            "Portable umbrella for unexpected weather changes",
            StyleCategory::Classic,
            "$25",
        )
    } else {
        item(
            "Lightweight Scarf",
            "Versatile accessory for style and warmth",
            StyleCategory::Classic,
            "$25",
        )
    };

    vec![
        hat,
        item(
            "Crossbody Travel Bag",
            "Secure, hands-free bag perfect for sightseeing and shopping",
            StyleCategory::Casual,
            "$85",
        ),
        item(
            "Polarized Sunglasses",
            "UV protection with style for bright days and outdoor activities",
            StyleCategory::Trendy,
            "$120",
        ),
        cover,
    ]
}

/// Assemble the style guide from a profile, plan and an already fetched forecast.
pub fn build_style(
    profile: &UserProfile,
    plan: &TripPlan,
    forecast: &WeatherForecast,
) -> StyleRecommendation {
    let persona = profile.persona();
    let theme = theme_for(persona.map(|p| p.id.as_str()));
    let flags = WeatherFlags::from_forecast(forecast);

    let persona_style = persona
        .map(|p| p.name.to_lowercase())
        .unwrap_or_else(|| "travel".to_string());

    let description = format!(
        "A curated collection designed for your {} adventure. This {} aesthetic combines comfort \
         with style, perfectly suited for {} and your planned activities. Each piece is chosen to \
         complement your {} style while ensuring you look and feel great throughout your journey.",
        plan.destination,
        theme.to_lowercase(),
        forecast.current_weather.description.to_lowercase(),
        persona_style
    );

    StyleRecommendation {
        theme: theme.to_string(),
        description,
        looks: StyleLooks {
            day: day_look(flags),
            evening: evening_look(profile.gender),
            activity: activity_look(flags),
        },
        accessories: accessories(flags),
        color_palette: palette_for(&plan.vibes),
    }
}
