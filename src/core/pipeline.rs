use chrono::NaiveDate;
use std::{sync::Arc, time::Instant};
use tracing::{debug, info, warn};

use super::generator::TextGenerator;
use crate::{
    config::PlannerConfig,
    error::{PlannerError, Result},
    schemas::{validation::decode_payload, ResponseSchema},
    services::{
        extraction::{parse_json_payload, truncate_for_log},
        fallback,
        gemini_client::GeminiClient,
        prompts, style,
    },
    types::{PackingRecommendation, StyleRecommendation, TripPlan, TripRecommendation, UserProfile},
    weather::{MockWeatherSource, WeatherSource},
};

const LOG_PREVIEW_CHARS: usize = 200;

/// Produces trip, packing and style results.
///
/// The service-backed generators never fail: any error on the way to a typed
/// result is logged and replaced by the deterministic fallback.
#[derive(Debug, Clone)]
pub struct GenerationPipeline {
    generator: Option<Arc<dyn TextGenerator>>,
    model: String,
    weather: Arc<dyn WeatherSource>,
}

impl GenerationPipeline {
    /// Build the pipeline once from configuration.
    ///
    /// Without a credential no client is created and the trip and packing
    /// generators go straight to their fallbacks.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        let generator = match config.api_key() {
            Some(key) => {
                let client = GeminiClient::new(key, config.base_url.clone(), config.timeout)?;
                Some(Arc::new(client) as Arc<dyn TextGenerator>)
            }
            None => {
                info!(
                    target: "vibepack::generation",
                    "no service credential configured; using deterministic results"
                );
                None
            }
        };

        Ok(Self {
            generator,
            model: config.model.clone(),
            weather: Arc::new(MockWeatherSource::new().with_latency(config.weather_latency)),
        })
    }

    /// Fallback-only pipeline with an instant weather lookup.
    pub fn offline() -> Self {
        Self {
            generator: None,
            model: crate::config::DEFAULT_MODEL.to_string(),
            weather: Arc::new(MockWeatherSource::new().with_latency(std::time::Duration::ZERO)),
        }
    }

    pub fn with_text_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_weather_source(mut self, weather: Arc<dyn WeatherSource>) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_text_generator(&self) -> bool {
        self.generator.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate_trip(&self, profile: &UserProfile, plan: &TripPlan) -> TripRecommendation {
        match self.try_generate_trip(profile, plan).await {
            Ok(trip) => trip,
            Err(err) => {
                log_fallback("trip", &err);
                fallback::trip_recommendation(profile, plan)
            }
        }
    }

    pub async fn try_generate_trip(
        &self,
        profile: &UserProfile,
        plan: &TripPlan,
    ) -> Result<TripRecommendation> {
        let prompt = prompts::trip_prompt(profile, plan);
        self.request("trip", &prompt).await
    }

    pub async fn generate_packing(
        &self,
        destination: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        primary_vibe: &str,
        profile: Option<&UserProfile>,
        from_location: Option<&str>,
    ) -> PackingRecommendation {
        let result = self
            .try_generate_packing(
                destination,
                start_date,
                end_date,
                primary_vibe,
                profile,
                from_location,
            )
            .await;

        match result {
            Ok(packing) => packing,
            Err(err) => {
                log_fallback("packing", &err);
                fallback::packing_recommendation(destination, primary_vibe)
            }
        }
    }

    pub async fn try_generate_packing(
        &self,
        destination: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        primary_vibe: &str,
        profile: Option<&UserProfile>,
        from_location: Option<&str>,
    ) -> Result<PackingRecommendation> {
        let prompt = prompts::packing_prompt(
            destination,
            start_date,
            end_date,
            primary_vibe,
            profile,
            from_location,
        );
        self.request("packing", &prompt).await
    }

    /// Rule-based style guide informed by the destination forecast.
    pub async fn generate_style(&self, profile: &UserProfile, plan: &TripPlan) -> StyleRecommendation {
        let forecast = self
            .weather
            .forecast(&plan.destination, plan.start_date, plan.end_date)
            .await;

        let recommendation = style::build_style(profile, plan, &forecast);

        info!(
            target: "vibepack::generation",
            theme = %recommendation.theme,
            items = recommendation.item_count(),
            weather = %forecast.current_weather.condition,
            "style recommendation generated"
        );

        recommendation
    }

    async fn request<T: ResponseSchema>(&self, kind: &'static str, prompt: &str) -> Result<T> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(PlannerError::MissingCredential)?;

        debug!(target: "vibepack::generation", kind, prompt, "sending prompt");

        let started = Instant::now();
        let text = generator.generate(&self.model, prompt).await?;

        info!(
            target: "vibepack::generation",
            kind,
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "service responded"
        );

        let decoded = parse_json_payload(&text).and_then(decode_payload::<T>);
        if let Err(err) = &decoded {
            warn!(
                target: "vibepack::generation",
                kind,
                error = %err,
                raw = %truncate_for_log(&text, LOG_PREVIEW_CHARS),
                "discarding malformed service response"
            );
        }
        decoded
    }
}

fn fallback_reason(err: &PlannerError) -> &'static str {
    match err {
        PlannerError::MissingCredential => "no credential configured",
        other if other.is_malformed_response() => "unusable service response",
        _ => "service unavailable",
    }
}

fn log_fallback(kind: &'static str, err: &PlannerError) {
    let reason = fallback_reason(err);
    match err {
        PlannerError::MissingCredential => {
            debug!(target: "vibepack::generation", kind, reason, "using deterministic fallback");
        }
        other if other.is_malformed_response() => {
            info!(
                target: "vibepack::generation",
                kind,
                reason,
                code = other.error_code(),
                error = %other,
                "using deterministic fallback"
            );
        }
        other => {
            warn!(
                target: "vibepack::generation",
                kind,
                reason,
                code = other.error_code(),
                error = %other,
                "generation failed; using deterministic fallback"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DestinationType, Gender};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Canned {
        reply: std::result::Result<String, u16>,
        calls: AtomicUsize,
    }

    impl Canned {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _model: &str, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(PlannerError::Service {
                    status: *status,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    fn inputs() -> (UserProfile, TripPlan) {
        let profile = UserProfile::new(30, Gender::Female, DestinationType::Beaches);
        let plan = TripPlan {
            destination: "Bali, Indonesia".into(),
            vibes: vec!["Adventure".into()],
            ..TripPlan::default()
        };
        (profile, plan)
    }

    #[test]
    fn test_fallback_reason() {
        assert_eq!(
            fallback_reason(&PlannerError::MissingCredential),
            "no credential configured"
        );
        assert_eq!(
            fallback_reason(&PlannerError::NoJsonFound),
            "unusable service response"
        );
        assert_eq!(
            fallback_reason(&PlannerError::SchemaMismatch("shopTheLook".into())),
            "unusable service response"
        );
        assert_eq!(
            fallback_reason(&PlannerError::Service {
                status: 503,
                message: "overloaded".into(),
            }),
            "service unavailable"
        );
    }

    #[tokio::test]
    async fn test_offline_pipeline_uses_fallback() {
        let (profile, plan) = inputs();
        let pipeline = GenerationPipeline::offline();
        assert!(!pipeline.has_text_generator());

        let err = pipeline.try_generate_trip(&profile, &plan).await.unwrap_err();
        assert_eq!(err.error_code(), "MISSING_CREDENTIAL");

        let trip = pipeline.generate_trip(&profile, &plan).await;
        assert_eq!(trip, fallback::trip_recommendation(&profile, &plan));
    }

    #[tokio::test]
    async fn test_service_error_falls_back_after_one_attempt() {
        let (profile, plan) = inputs();
        let generator = Canned::failing(503);
        let pipeline = GenerationPipeline::offline().with_text_generator(generator.clone());

        let trip = pipeline.generate_trip(&profile, &plan).await;
        assert!(trip.title.contains("Beach"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fenced_service_reply_is_used() {
        let (profile, plan) = inputs();
        let reply = r#"Here is your plan:
```json
{
  "title": "Bali Blue",
  "description": "Reefs and rice terraces",
  "activities": ["Dive Tulamben"],
  "accommodation": "Villa in Ubud",
  "transportation": "Fly DEL to DPS",
  "budget": {"flights": "$500", "total_estimate": "$1800"},
  "highlights": ["Tegallalang"],
  "mood": "ignored extra field"
}
```"#;
        let pipeline = GenerationPipeline::offline().with_text_generator(Canned::ok(reply));

        let trip = pipeline.generate_trip(&profile, &plan).await;
        assert_eq!(trip.title, "Bali Blue");
        assert_eq!(trip.budget.total(), Some("$1800"));
    }

    #[tokio::test]
    async fn test_wrong_shape_reply_falls_back() {
        let (profile, plan) = inputs();
        let pipeline = GenerationPipeline::offline()
            .with_text_generator(Canned::ok(r#"{"title": "Only a title"}"#));

        let err = pipeline.try_generate_trip(&profile, &plan).await.unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_MISMATCH");

        let trip = pipeline.generate_trip(&profile, &plan).await;
        assert_eq!(trip.title, "Ultimate Beach Experience in Bali, Indonesia");
    }

    #[tokio::test]
    async fn test_packing_requires_three_shop_items() {
        let reply = r#"{
            "clothing": {"Daytime Wear": [], "Evening Outfits": [], "Activity-Specific": []},
            "essentials": [],
            "shopTheLook": [{"name": "Hat", "description": "A hat.", "price": "$10"}]
        }"#;
        let pipeline = GenerationPipeline::offline().with_text_generator(Canned::ok(reply));

        let packing = pipeline
            .generate_packing("Lisbon", None, None, "cultural", None, None)
            .await;
        assert_eq!(packing, fallback::packing_recommendation("Lisbon", "cultural"));
    }

    #[tokio::test]
    async fn test_style_uses_weather_source() {
        let (profile, mut plan) = inputs();
        plan.destination = "Dubai".into();
        let pipeline = GenerationPipeline::offline()
            .with_weather_source(Arc::new(MockWeatherSource::seeded(3).with_latency(std::time::Duration::ZERO)));

        let style = pipeline.generate_style(&profile, &plan).await;
        assert_eq!(style.looks.day[0].item, "Linen Button-Down Shirt");
        assert_eq!(style.accessories[3].item, "Lightweight Scarf");
    }
}
