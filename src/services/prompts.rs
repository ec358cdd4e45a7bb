use chrono::NaiveDate;

use crate::types::{Persona, TripPlan, UserProfile};

const UNSPECIFIED_DATE: &str = "unspecified date";
const DEFAULT_ORIGIN: &str = "India";

fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%a %b %d %Y").to_string())
        .unwrap_or_else(|| UNSPECIFIED_DATE.to_string())
}

fn optional_label<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "not specified".to_string())
}

fn persona_lines(persona: Option<&Persona>) -> String {
    match persona {
        Some(persona) => format!(
            "- Travel Persona: {} - {}\n- Persona Traits: {}\n",
            persona.name,
            persona.description,
            persona.traits.join(", ")
        ),
        None => String::new(),
    }
}

/// Prompt asking for a single JSON trip recommendation.
pub fn trip_prompt(profile: &UserProfile, plan: &TripPlan) -> String {
    let from = &plan.from_location;
    let to = &plan.destination;

    format!(
        "Create a personalized travel recommendation based on the following user preferences.\n\n\
User Profile:\n\
- Age: {age}\n\
- Gender: {gender}\n\
- Preferred destinations: {destination_type}\n\
{persona}\n\
Trip Details:\n\
- Traveling FROM: {from}\n\
- Traveling TO: {to}\n\
- Start Date: {start}\n\
- End Date: {end}\n\
- Travel companions: {companions}\n\
- Preferred vibes: {vibes}\n\n\
Respond with a single JSON object with this structure:\n\
{{\n\
  \"title\": \"Creative title for the trip\",\n\
  \"description\": \"Brief engaging description\",\n\
  \"activities\": [\"List of 5-7 specific activities\"],\n\
  \"accommodation\": \"Accommodation recommendation with specific details\",\n\
  \"transportation\": \"Transportation suggestions from {from} to {to}\",\n\
  \"budget\": {{\n\
    \"flights\": \"Flight cost estimate from {from}\",\n\
    \"accommodation\": \"Accommodation cost estimate\",\n\
    \"activities\": \"Activities cost estimate\",\n\
    \"food\": \"Food and dining cost estimate\",\n\
    \"transportation\": \"Local transportation cost estimate\",\n\
    \"total_estimate\": \"Total trip cost estimate\"\n\
  }},\n\
  \"highlights\": [\"List of 4-6 unique highlights or must-see spots\"]\n\
}}\n\n\
Make the recommendations specific to the destination, reflect the persona traits, and suit the \
traveler's age, preferences and desired vibes. Include concrete transportation options from {from} to {to}.",
        age = profile.age,
        gender = optional_label(profile.gender),
        destination_type = optional_label(profile.preferred_destination_type),
        persona = persona_lines(profile.persona()),
        from = from,
        to = to,
        start = display_date(plan.start_date),
        end = display_date(plan.end_date),
        companions = optional_label(plan.companions),
        vibes = plan.vibes.join(", "),
    )
}

/// Prompt asking for a single JSON packing list.
pub fn packing_prompt(
    destination: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    trip_vibe: &str,
    profile: Option<&UserProfile>,
    from_location: Option<&str>,
) -> String {
    let from = from_location
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ORIGIN);

    let persona = match profile.and_then(UserProfile::persona) {
        Some(persona) => format!(
            "The traveler identifies as \"{}\" - {}\nKey traits: {}\n\n",
            persona.name,
            persona.description,
            persona.traits.join(", ")
        ),
        None => String::new(),
    };

    format!(
        "You are VibePack, an expert travel assistant. A user is traveling from {from} to {destination} \
from {start} to {end} for a {trip_vibe} trip.\n\n\
{persona}\
Based on the typical weather, local culture, planned activities and the traveler's persona, \
generate a personalized packing list.\n\n\
Respond with a single JSON object with three keys: \"clothing\", \"essentials\" and \"shopTheLook\".\n\
- \"clothing\" has the categories \"Daytime Wear\", \"Evening Outfits\" and \"Activity-Specific\"; \
each is a list of {{\"item\", \"tip\"}} objects with a short, helpful tip.\n\
- \"essentials\" lists important non-clothing items as {{\"item\", \"tip\"}} objects \
(consider what is needed when traveling from {from}).\n\
- \"shopTheLook\" has exactly 3 fictional but realistic products, each with \"name\", a one-sentence \
\"description\" and a \"price\".\n\n\
Example structure:\n\
{{\n\
  \"clothing\": {{\n\
    \"Daytime Wear\": [{{\"item\": \"Classic Trench Coat\", \"tip\": \"Chic, versatile and good for layering.\"}}],\n\
    \"Evening Outfits\": [{{\"item\": \"Little Black Dress\", \"tip\": \"Works for a dinner or an elegant evening out.\"}}],\n\
    \"Activity-Specific\": [{{\"item\": \"Crossbody Bag\", \"tip\": \"Keeps your hands free and belongings safe.\"}}]\n\
  }},\n\
  \"essentials\": [{{\"item\": \"Passport & Important Documents\", \"tip\": \"Keep digital copies in cloud storage.\"}}],\n\
  \"shopTheLook\": [{{\"name\": \"Travel Silk Scarf\", \"description\": \"A versatile accessory for any outfit.\", \"price\": \"$75.00\"}}]\n\
}}\n\n\
Make the list specific to {destination}, appropriate for {trip_vibe} activities, mindful of the local \
climate and culture, and aligned with the traveler's persona.",
        from = from,
        destination = destination,
        start = display_date(start_date),
        end = display_date(end_date),
        trip_vibe = trip_vibe,
        persona = persona,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog,
        types::{Companions, DestinationType, Gender},
    };

    #[test]
    fn test_trip_prompt_embeds_inputs() {
        let profile = UserProfile::new(30, Gender::Female, DestinationType::Beaches)
            .with_persona(catalog::persona("foodie").unwrap());
        let plan = TripPlan {
            destination: "Bali, Indonesia".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 11, 2),
            companions: Some(Companions::Partner),
            vibes: vec!["Adventure".into(), "Food".into()],
            ..TripPlan::default()
        };

        let prompt = trip_prompt(&profile, &plan);
        assert!(prompt.contains("Traveling FROM: Delhi, India"));
        assert!(prompt.contains("Traveling TO: Bali, Indonesia"));
        assert!(prompt.contains("Start Date: Mon Nov 02 2026"));
        assert!(prompt.contains("End Date: unspecified date"));
        assert!(prompt.contains("Travel Persona: The Foodie"));
        assert!(prompt.contains("Preferred vibes: Adventure, Food"));
        assert!(prompt.contains("\"total_estimate\""));
    }

    #[test]
    fn test_packing_prompt_defaults_origin() {
        let prompt = packing_prompt("Tokyo", None, None, "cultural", None, Some("  "));
        assert!(prompt.contains("traveling from India to Tokyo"));
        assert!(prompt.contains("\"shopTheLook\""));
        assert!(!prompt.contains("identifies as"));
    }
}
