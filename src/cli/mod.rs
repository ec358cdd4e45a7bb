use crate::{
    catalog, validation::today, Companions, DestinationType, Gender, GenerationPipeline,
    PlannerConfig, TransitionError, Wizard,
};
use chrono::{Duration as Days, NaiveDate};
use clap::{error::ErrorKind, Arg, ArgAction, ArgMatches, Command};
use std::time::Duration;
use tracing::{error, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn command() -> Command {
    let persona_ids: Vec<String> = catalog::personas().into_iter().map(|p| p.id).collect();
    let persona_help = format!("Traveller persona: {}", persona_ids.join(", "));

    Command::new("vibe-pack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plan a trip end-to-end: itinerary, packing list and style guide")
        .arg(
            Arg::new("destination")
                .help("Where you are going, e.g. \"Bali, Indonesia\"")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("persona")
                .short('p')
                .long("persona")
                .value_name("ID")
                .help(persona_help)
                .default_value("adventurer"),
        )
        .arg(
            Arg::new("age")
                .short('a')
                .long("age")
                .value_name("YEARS")
                .value_parser(clap::value_parser!(i32))
                .default_value("30"),
        )
        .arg(
            Arg::new("gender")
                .short('g')
                .long("gender")
                .value_parser(["male", "female", "other"])
                .default_value("other"),
        )
        .arg(
            Arg::new("destination-type")
                .short('d')
                .long("destination-type")
                .value_parser([
                    "beaches",
                    "mountains",
                    "cities",
                    "countryside",
                    "desert",
                    "islands",
                ])
                .default_value("cities"),
        )
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .value_name("CITY")
                .help("Departure location")
                .default_value(catalog::DEFAULT_FROM_LOCATION),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("YYYY-MM-DD")
                .help("Start date (defaults to two weeks from today)"),
        )
        .arg(
            Arg::new("end")
                .short('e')
                .long("end")
                .value_name("YYYY-MM-DD")
                .help("End date (defaults to a week after the start)"),
        )
        .arg(
            Arg::new("companions")
                .short('c')
                .long("companions")
                .value_parser(["solo", "partner", "family", "friends"])
                .default_value("solo"),
        )
        .arg(
            Arg::new("vibe")
                .short('v')
                .long("vibe")
                .value_name("TAG")
                .help("Travel vibe; repeat for up to five")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Model name (or set GEMINI_MODEL)"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("Service API key (or set GEMINI_API_KEY); omit for offline results"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Service base URL (or set GEMINI_BASE_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(u64))
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the summary as JSON")
                .action(ArgAction::SetTrue),
        )
}

/// Repeated `--vibe` tags in order, duplicates dropped; more than five
/// distinct tags is a usage error.
fn vibes_from(matches: &ArgMatches) -> Result<Vec<String>, clap::Error> {
    let mut vibes: Vec<String> = Vec::new();
    for vibe in matches.get_many::<String>("vibe").into_iter().flatten() {
        if !vibes.contains(vibe) {
            vibes.push(vibe.clone());
        }
    }

    if vibes.is_empty() {
        vibes.push(catalog::DEFAULT_PRIMARY_VIBE.to_string());
    }

    if vibes.len() > catalog::MAX_VIBES {
        return Err(command().error(
            ErrorKind::TooManyValues,
            format!(
                "at most {} distinct --vibe tags are allowed, got {}",
                catalog::MAX_VIBES,
                vibes.len()
            ),
        ));
    }

    Ok(vibes)
}

fn parse_date(value: Option<&String>) -> Result<Option<NaiveDate>, Box<dyn std::error::Error>> {
    match value {
        Some(raw) => Ok(Some(NaiveDate::parse_from_str(raw, DATE_FORMAT)?)),
        None => Ok(None),
    }
}

fn gender(value: &str) -> Gender {
    match value {
        "male" => Gender::Male,
        "female" => Gender::Female,
        _ => Gender::Other,
    }
}

fn destination_type(value: &str) -> DestinationType {
    match value {
        "beaches" => DestinationType::Beaches,
        "mountains" => DestinationType::Mountains,
        "countryside" => DestinationType::Countryside,
        "desert" => DestinationType::Desert,
        "islands" => DestinationType::Islands,
        _ => DestinationType::Cities,
    }
}

fn companions(value: &str) -> Companions {
    match value {
        "partner" => Companions::Partner,
        "family" => Companions::Family,
        "friends" => Companions::Friends,
        _ => Companions::Solo,
    }
}

fn config_from(matches: &ArgMatches) -> crate::Result<PlannerConfig> {
    let mut config = PlannerConfig::from_env()?;

    if let Some(key) = matches.get_one::<String>("api-key") {
        config = config.with_api_key(Some(key.clone()));
    }
    if let Some(model) = matches.get_one::<String>("model") {
        config = config.with_model(model.as_str());
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(seconds) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(*seconds));
    }

    Ok(config)
}

fn report(err: TransitionError) -> Box<dyn std::error::Error> {
    if let TransitionError::Validation(errors) = &err {
        for field_error in errors {
            eprintln!("  {}: {}", field_error.field, field_error.message);
        }
    }
    err.into()
}

/// CLI entry point for the vibe-pack planner
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = command().get_matches();
    let config = config_from(&matches)?;

    info!(
        model = %config.model,
        base_url = %config.base_url,
        credential = config.has_credential(),
        "starting planner"
    );

    let start = parse_date(matches.get_one::<String>("start"))?
        .unwrap_or_else(|| today() + Days::days(14));
    let end = parse_date(matches.get_one::<String>("end"))?.unwrap_or(start + Days::days(7));

    let mut wizard = Wizard::new(GenerationPipeline::new(&config)?);

    let persona = matches
        .get_one::<String>("persona")
        .map(String::as_str)
        .unwrap_or("adventurer");
    wizard.select_persona(persona)?;
    wizard.confirm_persona()?;

    let age = matches.get_one::<i32>("age").copied().unwrap_or_default();
    let gender_value = matches.get_one::<String>("gender").map(|g| gender(g));
    let destination_type_value = matches
        .get_one::<String>("destination-type")
        .map(|d| destination_type(d));
    wizard.update_profile(|profile| {
        profile.age = age;
        profile.gender = gender_value;
        profile.preferred_destination_type = destination_type_value;
    })?;
    wizard.submit_profile().map_err(report)?;

    let destination = matches
        .get_one::<String>("destination")
        .cloned()
        .unwrap_or_default();
    let from_location = matches.get_one::<String>("from").cloned();
    let companions_value = matches.get_one::<String>("companions").map(|c| companions(c));
    wizard.update_plan(|plan| {
        plan.destination = destination;
        if let Some(from) = from_location {
            plan.from_location = from;
        }
        plan.start_date = Some(start);
        plan.end_date = Some(end);
        plan.companions = companions_value;
    })?;

    let vibes = vibes_from(&matches).unwrap_or_else(|err| err.exit());
    wizard.update_plan(|plan| plan.vibes = vibes)?;

    wizard.generate_trip().await.map_err(report)?;
    wizard.generate_packing().await?;
    wizard.generate_style().await?;
    wizard.complete()?;

    let Some(summary) = wizard.summary() else {
        error!("wizard finished without a summary");
        return Err("wizard finished without a summary".into());
    };

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.render());
    }

    info!(step = %wizard.step(), "planning completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parses_repeated_vibes() {
        let matches = command()
            .try_get_matches_from([
                "vibe-pack",
                "Tokyo",
                "--vibe",
                "cultural",
                "-v",
                "food",
                "--persona",
                "foodie",
                "--age",
                "27",
            ])
            .unwrap();

        let vibes: Vec<&String> = matches.get_many::<String>("vibe").unwrap().collect();
        assert_eq!(vibes, ["cultural", "food"]);
        assert_eq!(matches.get_one::<i32>("age"), Some(&27));
        assert_eq!(matches.get_one::<String>("companions").unwrap(), "solo");
    }

    #[test]
    fn test_vibes_are_deduplicated_and_capped() {
        let matches = command()
            .try_get_matches_from(["vibe-pack", "Lima", "-v", "food", "-v", "food", "-v", "nightlife"])
            .unwrap();
        assert_eq!(vibes_from(&matches).unwrap(), ["food", "nightlife"]);

        let matches = command().try_get_matches_from(["vibe-pack", "Lima"]).unwrap();
        assert_eq!(
            vibes_from(&matches).unwrap(),
            [catalog::DEFAULT_PRIMARY_VIBE]
        );

        let mut args = vec!["vibe-pack", "Lima"];
        for tag in ["a", "b", "c", "d", "e", "f"] {
            args.extend(["--vibe", tag]);
        }
        let matches = command().try_get_matches_from(args).unwrap();
        let err = vibes_from(&matches).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyValues);
    }

    #[test]
    fn test_missing_destination_rejected() {
        let result = command().try_get_matches_from(["vibe-pack", "--persona", "foodie"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_date() {
        let raw = "2026-12-24".to_string();
        assert_eq!(
            parse_date(Some(&raw)).unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 24)
        );
        assert!(parse_date(Some(&"24/12/2026".to_string())).is_err());
        assert_eq!(parse_date(None).unwrap(), None);
    }
}
