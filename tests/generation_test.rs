use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;
use vibe_pack::{
    fallback_packing, fallback_trip, Budget, Companions, DestinationType, Gender,
    GenerationPipeline, PlannerConfig, PlannerError, TripPlan, UserProfile,
};

const MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/models/gemini-test:generateContent";

fn config(base_url: &str) -> PlannerConfig {
    PlannerConfig::new()
        .with_api_key(Some("test-key".to_string()))
        .with_base_url(base_url)
        .with_model(MODEL)
        .with_timeout(Duration::from_secs(5))
        .with_weather_latency(Duration::ZERO)
}

fn gemini_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn inputs(age: i32) -> (UserProfile, TripPlan) {
    let profile = UserProfile::new(age, Gender::Female, DestinationType::Beaches);
    let plan = TripPlan {
        destination: "Bali, Indonesia".to_string(),
        companions: Some(Companions::Friends),
        vibes: vec!["Adventure".to_string()],
        ..TripPlan::default()
    };
    (profile, plan)
}

#[tokio::test]
async fn test_trip_from_service_reply() {
    let mut server = Server::new_async().await;
    let reply = r#"Absolutely! Here's the plan.
```json
{
  "title": "Bali with Friends",
  "description": "Surf, temples and night markets",
  "activities": ["Surf lesson in Canggu", "Uluwatu temple at sunset"],
  "accommodation": {
    "type": "Villa",
    "name": "Canggu Shared Villa",
    "features": ["Pool"],
    "priceRange": "$90 per night",
    "rating": "4.7/5"
  },
  "transportation": "Direct flight from Delhi to Denpasar",
  "budget": {"flights": "$450", "total_estimate": "$1200"},
  "highlights": ["Mount Batur sunrise"]
}
```
Have fun!"#;

    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("Bali, Indonesia".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(reply))
        .create_async()
        .await;

    let pipeline = GenerationPipeline::new(&config(&server.url())).unwrap();
    let (profile, plan) = inputs(30);
    let trip = pipeline.generate_trip(&profile, &plan).await;

    mock.assert_async().await;
    assert_eq!(trip.title, "Bali with Friends");
    assert_eq!(trip.budget.total(), Some("$1200"));
    assert!(matches!(trip.accommodation, vibe_pack::Accommodation::Details(_)));
}

#[tokio::test]
async fn test_http_error_falls_back() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"code": 500, "message": "backend exploded"}}"#)
        .expect(2)
        .create_async()
        .await;

    let pipeline = GenerationPipeline::new(&config(&server.url())).unwrap();
    let (profile, plan) = inputs(30);

    match pipeline.try_generate_trip(&profile, &plan).await {
        Err(PlannerError::Service { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend exploded");
        }
        other => panic!("expected service error, got {other:?}"),
    }

    let trip = pipeline.generate_trip(&profile, &plan).await;
    assert_eq!(trip, fallback_trip(&profile, &plan));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_garbage_body_falls_back() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let pipeline = GenerationPipeline::new(&config(&server.url())).unwrap();
    let (profile, plan) = inputs(22);

    let err = pipeline.try_generate_trip(&profile, &plan).await.unwrap_err();
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

    let trip = pipeline.generate_trip(&profile, &plan).await;
    assert_eq!(trip.budget.category("accommodation"), Some("$120-180 per night"));
}

#[tokio::test]
async fn test_reply_without_json_falls_back() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", ENDPOINT)
        .with_status(200)
        .with_body(gemini_body("Sorry, I can't plan trips today."))
        .create_async()
        .await;

    let pipeline = GenerationPipeline::new(&config(&server.url())).unwrap();

    let err = pipeline
        .try_generate_packing("Lisbon", None, None, "cultural", None, Some("Mumbai, India"))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "NO_JSON_FOUND");
    assert!(err.is_malformed_response());

    let packing = pipeline
        .generate_packing("Lisbon", None, None, "cultural", None, Some("Mumbai, India"))
        .await;
    assert_eq!(packing, fallback_packing("Lisbon", "cultural"));
}

#[tokio::test]
async fn test_packing_from_bare_json_reply() {
    let mut server = Server::new_async().await;
    let reply = json!({
        "clothing": {
            "Daytime Wear": [{"item": "Linen shirt", "tip": "Stays cool"}],
            "Evening Outfits": [{"item": "Light blazer", "tip": "For rooftop bars"}],
            "Activity-Specific": [{"item": "Walking sandals", "tip": "Cobblestones"}]
        },
        "essentials": [{"item": "Passport", "tip": "Keep a copy"}],
        "shopTheLook": [
            {"name": "Azulejo Tote", "description": "Tiled print tote.", "price": "$40"},
            {"name": "Cork Wallet", "description": "Local cork.", "price": "$25"},
            {"name": "Straw Hat", "description": "Sun cover.", "price": "$30"}
        ]
    });
    let _mock = server
        .mock("POST", ENDPOINT)
        .match_body(Matcher::Regex("Lisbon".to_string()))
        .with_status(200)
        .with_body(gemini_body(&format!("Packing list: {reply}")))
        .create_async()
        .await;

    let pipeline = GenerationPipeline::new(&config(&server.url())).unwrap();
    let packing = pipeline
        .generate_packing("Lisbon", None, None, "cultural", None, None)
        .await;

    assert_eq!(packing.shop_the_look[0].name, "Azulejo Tote");
    assert_eq!(packing.item_count(), 4);
}

#[tokio::test]
async fn test_no_credential_skips_the_service() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", ENDPOINT)
        .expect(0)
        .create_async()
        .await;

    let config = PlannerConfig::new()
        .with_api_key(Some("   ".to_string()))
        .with_base_url(server.url())
        .with_weather_latency(Duration::ZERO);
    let pipeline = GenerationPipeline::new(&config).unwrap();
    assert!(!pipeline.has_text_generator());

    let (profile, plan) = inputs(30);
    let first = pipeline.generate_trip(&profile, &plan).await;
    let second = pipeline.generate_trip(&profile, &plan).await;
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert!(matches!(first.budget, Budget::Breakdown(_)));

    let packing_a = pipeline.generate_packing("Bali", None, None, "Beach", Some(&profile), None).await;
    let packing_b = pipeline.generate_packing("Bali", None, None, "Beach", Some(&profile), None).await;
    assert_eq!(
        serde_json::to_string(&packing_a).unwrap(),
        serde_json::to_string(&packing_b).unwrap()
    );

    mock.assert_async().await;
}
