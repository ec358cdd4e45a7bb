//! Field-level validation of the wizard's two input aggregates.
//!
//! Every check runs; failures are collected in order rather than
//! short-circuiting, so a form can highlight all bad fields at once.

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::{
    catalog::MAX_VIBES,
    types::{TripPlan, UserProfile},
};

pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 120;
pub const MAX_TRIP_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |error| error.field == field)
    }
}

#[derive(Default)]
struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    fn add(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
        }
    }
}

fn destination_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z\s,.\-]+$").expect("destination pattern compiles"))
}

fn is_valid_text(value: &str, min_len: usize) -> bool {
    value.trim().chars().count() >= min_len
}

fn is_valid_destination(destination: &str) -> bool {
    is_valid_text(destination, 2) && destination_pattern().is_match(destination)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn validate_profile(profile: &UserProfile) -> ValidationResult {
    let mut collector = Collector::default();

    if !(MIN_AGE..=MAX_AGE).contains(&profile.age) {
        collector.add("age", "Please enter a valid age between 1 and 120");
    }

    if profile.gender.is_none() {
        collector.add("gender", "Please select a gender");
    }

    if profile.preferred_destination_type.is_none() {
        collector.add(
            "preferredDestinationType",
            "Please select a preferred destination type",
        );
    }

    collector.finish()
}

/// Validate a trip plan against today's local date.
pub fn validate_trip_plan(plan: &TripPlan) -> ValidationResult {
    validate_trip_plan_on(plan, today())
}

pub fn validate_trip_plan_on(plan: &TripPlan, today: NaiveDate) -> ValidationResult {
    let mut collector = Collector::default();

    if !is_valid_destination(&plan.destination) {
        collector.add(
            "destination",
            "Please enter a valid destination (letters, spaces, and basic punctuation only)",
        );
    }

    if !is_valid_text(&plan.from_location, 2) {
        collector.add(
            "fromLocation",
            "Please select or enter a valid departure location",
        );
    }

    check_dates(&mut collector, plan.start_date, plan.end_date, today);

    if let (Some(start), Some(end)) = (plan.start_date, plan.end_date) {
        if (end - start).num_days() > MAX_TRIP_DAYS {
            collector.add("endDate", "Trip duration cannot exceed 365 days");
        }
    }

    if plan.companions.is_none() {
        collector.add("companions", "Please select who you're traveling with");
    }

    if plan.vibes.is_empty() {
        collector.add("vibes", "Please select at least one travel vibe");
    } else if plan.vibes.len() > MAX_VIBES {
        collector.add("vibes", "Please select maximum 5 travel vibes");
    }

    collector.finish()
}

pub fn validate_destination(destination: &str) -> ValidationResult {
    let mut collector = Collector::default();

    if !is_valid_destination(destination) {
        collector.add("destination", "Please enter a valid destination");
    }

    collector.finish()
}

pub fn validate_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> ValidationResult {
    validate_date_range_on(start, end, today())
}

pub fn validate_date_range_on(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> ValidationResult {
    let mut collector = Collector::default();
    check_dates(&mut collector, start, end, today);
    collector.finish()
}

fn check_dates(
    collector: &mut Collector,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) {
    match start {
        None => collector.add("startDate", "Please select a valid start date"),
        Some(start) if start < today => {
            collector.add("startDate", "Start date must be today or in the future")
        }
        Some(_) => {}
    }

    match (start, end) {
        (_, None) => collector.add("endDate", "Please select a valid end date"),
        (Some(start), Some(end)) if end <= start => {
            collector.add("endDate", "End date must be after start date")
        }
        _ => {}
    }
}
