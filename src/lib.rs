//! vibe-pack: the core of a trip-planning wizard
//!
//! Collects a traveller profile and trip plan, validates them, asks a
//! generative text service for an itinerary and packing list (falling back to
//! deterministic results whenever the service is unavailable or unusable), and
//! derives a weather-aware style guide.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vibe_pack::{GenerationPipeline, PlannerConfig, Wizard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PlannerConfig::from_env()?;
//!     let mut wizard = Wizard::new(GenerationPipeline::new(&config)?);
//!
//!     wizard.select_persona("foodie")?;
//!     wizard.confirm_persona()?;
//!     wizard.update_profile(|profile| {
//!         profile.age = 31;
//!         profile.gender = Some(vibe_pack::Gender::Other);
//!         profile.preferred_destination_type = Some(vibe_pack::DestinationType::Cities);
//!     })?;
//!     wizard.submit_profile()?;
//!     // fill in the plan, then generate_trip / generate_packing / generate_style
//!     Ok(())
//! }
//! ```

extern crate self as vibe_pack;

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod schemas;
pub(crate) mod services;
pub mod types;
pub mod validation;
pub mod weather;

pub use crate::core::{
    BusyFlags, GenerationPipeline, Operation, StepView, TextGenerator, TransitionError, Wizard,
    WizardStep,
};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use schemas::{ResponseSchema, SchemaHandle};
pub use services::extraction::{extract_json_block, parse_json_payload};
pub use services::fallback::{
    packing_recommendation as fallback_packing, trip_recommendation as fallback_trip, PriceBand,
};
pub use services::gemini_client::GeminiClient;
pub use services::style::{build_style, palette_for, theme_for, WeatherFlags};
pub use types::{
    Accommodation, Budget, Companions, DestinationType, Gender, PackingRecommendation, Persona,
    StyleRecommendation, Transportation, TripPlan, TripRecommendation, TripSummary, UserProfile,
};
pub use validation::{validate_profile, validate_trip_plan, ValidationError, ValidationResult};
pub use vibepack_macros::response_schema;
pub use weather::{MockWeatherSource, WeatherSource};

pub use schemas as schema;
pub use services::style::{
    ADVENTURE_PALETTE, CULTURAL_PALETTE, DEFAULT_THEME, LUXURY_PALETTE, TROPICAL_PALETTE,
    URBAN_PALETTE,
};

#[cfg(feature = "cli")]
pub mod cli;
