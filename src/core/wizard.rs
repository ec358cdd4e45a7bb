use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use thiserror::Error;
use tracing::{info, warn};

use super::{pipeline::GenerationPipeline, steps::WizardStep};
use crate::{
    catalog::{self, DEFAULT_PRIMARY_VIBE, MAX_VIBES},
    types::{
        PackingRecommendation, Persona, StyleRecommendation, TripPlan, TripRecommendation,
        TripSummary, UserProfile,
    },
    validation::{validate_profile, validate_trip_plan, ValidationError},
};

/// One of the three generation transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Trip,
    Packing,
    Style,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Trip => "trip",
            Operation::Packing => "packing",
            Operation::Style => "style",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} from step {step}")]
    InvalidStep {
        action: &'static str,
        step: WizardStep,
    },

    #[error("choose a persona before continuing")]
    NoPersonaSelected,

    #[error("unknown persona `{0}`")]
    UnknownPersona(String),

    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("{0} generation is already in progress")]
    Busy(Operation),

    #[error("at most {max} vibes can be selected, got {got}")]
    TooManyVibes { got: usize, max: usize },
}

/// Shared busy indicators, one per generation operation.
///
/// Clones observe the same flags, so a renderer can hold one while the
/// wizard is suspended in a generation call.
#[derive(Debug, Clone, Default)]
pub struct BusyFlags {
    trip: Arc<AtomicBool>,
    packing: Arc<AtomicBool>,
    style: Arc<AtomicBool>,
}

impl BusyFlags {
    fn flag(&self, operation: Operation) -> &Arc<AtomicBool> {
        match operation {
            Operation::Trip => &self.trip,
            Operation::Packing => &self.packing,
            Operation::Style => &self.style,
        }
    }

    pub fn is_busy(&self, operation: Operation) -> bool {
        self.flag(operation).load(Ordering::SeqCst)
    }

    pub fn any_busy(&self) -> bool {
        [Operation::Trip, Operation::Packing, Operation::Style]
            .into_iter()
            .any(|operation| self.is_busy(operation))
    }

    fn acquire(&self, operation: Operation) -> Result<BusyGuard, TransitionError> {
        let flag = self.flag(operation);
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| TransitionError::Busy(operation))?;
        Ok(BusyGuard {
            flag: Arc::clone(flag),
        })
    }

    fn clear_all(&self) {
        for flag in [&self.trip, &self.packing, &self.style] {
            flag.store(false, Ordering::SeqCst);
        }
    }
}

/// Clears its flag on drop, including when the owning future is dropped.
struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Current step together with the results it is allowed to show.
#[derive(Debug, Clone)]
enum Stage {
    PersonaSelect,
    ProfileEntry,
    TripPlanning,
    TripResults {
        trip: TripRecommendation,
    },
    PackingResults {
        trip: TripRecommendation,
        packing: PackingRecommendation,
    },
    StyleResults {
        trip: TripRecommendation,
        packing: PackingRecommendation,
        style: StyleRecommendation,
    },
    Summary {
        trip: TripRecommendation,
        packing: PackingRecommendation,
        style: StyleRecommendation,
    },
}

impl Stage {
    fn step(&self) -> WizardStep {
        match self {
            Stage::PersonaSelect => WizardStep::PersonaSelect,
            Stage::ProfileEntry => WizardStep::ProfileEntry,
            Stage::TripPlanning => WizardStep::TripPlanning,
            Stage::TripResults { .. } => WizardStep::TripResults,
            Stage::PackingResults { .. } => WizardStep::PackingResults,
            Stage::StyleResults { .. } => WizardStep::StyleResults,
            Stage::Summary { .. } => WizardStep::Summary,
        }
    }
}

/// What a renderer needs for the current step.
#[derive(Debug, Clone)]
pub enum StepView<'a> {
    PersonaSelect {
        personas: Vec<Persona>,
        selected: Option<&'a Persona>,
    },
    ProfileEntry {
        profile: &'a UserProfile,
        errors: &'a [ValidationError],
    },
    TripPlanning {
        plan: &'a TripPlan,
        errors: &'a [ValidationError],
        busy: bool,
    },
    TripResults {
        plan: &'a TripPlan,
        trip: &'a TripRecommendation,
        busy: bool,
    },
    PackingResults {
        plan: &'a TripPlan,
        packing: &'a PackingRecommendation,
        busy: bool,
    },
    StyleResults {
        plan: &'a TripPlan,
        style: &'a StyleRecommendation,
    },
    Summary(TripSummary<'a>),
}

impl StepView<'_> {
    pub fn step(&self) -> WizardStep {
        match self {
            StepView::PersonaSelect { .. } => WizardStep::PersonaSelect,
            StepView::ProfileEntry { .. } => WizardStep::ProfileEntry,
            StepView::TripPlanning { .. } => WizardStep::TripPlanning,
            StepView::TripResults { .. } => WizardStep::TripResults,
            StepView::PackingResults { .. } => WizardStep::PackingResults,
            StepView::StyleResults { .. } => WizardStep::StyleResults,
            StepView::Summary(_) => WizardStep::Summary,
        }
    }
}

/// The planning wizard: owns the profile, the plan and every generated result.
///
/// Every transition returns the step it lands on. A rejected transition
/// leaves the wizard exactly as it was, apart from recording validation
/// errors.
#[derive(Debug)]
pub struct Wizard {
    pipeline: GenerationPipeline,
    stage: Stage,
    profile: UserProfile,
    plan: TripPlan,
    errors: Vec<ValidationError>,
    busy: BusyFlags,
}

impl Wizard {
    pub fn new(pipeline: GenerationPipeline) -> Self {
        Self {
            pipeline,
            stage: Stage::PersonaSelect,
            profile: UserProfile::default(),
            plan: TripPlan::default(),
            errors: Vec::new(),
            busy: BusyFlags::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.stage.step()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn plan(&self) -> &TripPlan {
        &self.plan
    }

    /// Validation errors from the last rejected submission
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn busy_flags(&self) -> BusyFlags {
        self.busy.clone()
    }

    pub fn pipeline(&self) -> &GenerationPipeline {
        &self.pipeline
    }

    pub fn trip(&self) -> Option<&TripRecommendation> {
        match &self.stage {
            Stage::TripResults { trip }
            | Stage::PackingResults { trip, .. }
            | Stage::StyleResults { trip, .. }
            | Stage::Summary { trip, .. } => Some(trip),
            _ => None,
        }
    }

    pub fn packing(&self) -> Option<&PackingRecommendation> {
        match &self.stage {
            Stage::PackingResults { packing, .. }
            | Stage::StyleResults { packing, .. }
            | Stage::Summary { packing, .. } => Some(packing),
            _ => None,
        }
    }

    pub fn style(&self) -> Option<&StyleRecommendation> {
        match &self.stage {
            Stage::StyleResults { style, .. } | Stage::Summary { style, .. } => Some(style),
            _ => None,
        }
    }

    fn require(&self, action: &'static str, allowed: &[WizardStep]) -> Result<(), TransitionError> {
        let step = self.step();
        if allowed.contains(&step) {
            Ok(())
        } else {
            Err(TransitionError::InvalidStep { action, step })
        }
    }

    fn move_to(&mut self, stage: Stage) -> WizardStep {
        let from = self.step();
        self.stage = stage;
        self.errors.clear();
        let to = self.step();
        info!(target: "vibepack::wizard", %from, %to, "step transition");
        to
    }

    fn reject_invalid(&mut self, errors: Vec<ValidationError>) -> TransitionError {
        warn!(
            target: "vibepack::wizard",
            step = %self.step(),
            fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
            "validation failed"
        );
        self.errors = errors.clone();
        TransitionError::Validation(errors)
    }

    /// Choose a persona by catalog id; stays on the persona step.
    pub fn select_persona(&mut self, persona_id: &str) -> Result<WizardStep, TransitionError> {
        self.require("select a persona", &[WizardStep::PersonaSelect])?;
        let persona = catalog::persona(persona_id)
            .ok_or_else(|| TransitionError::UnknownPersona(persona_id.to_string()))?;
        self.profile.set_persona(persona);
        Ok(self.step())
    }

    pub fn confirm_persona(&mut self) -> Result<WizardStep, TransitionError> {
        self.require("confirm the persona", &[WizardStep::PersonaSelect])?;
        if self.profile.persona().is_none() {
            return Err(TransitionError::NoPersonaSelected);
        }
        Ok(self.move_to(Stage::ProfileEntry))
    }

    /// Edit profile fields in place. The persona is fixed on this step.
    pub fn update_profile(
        &mut self,
        edit: impl FnOnce(&mut UserProfile),
    ) -> Result<WizardStep, TransitionError> {
        self.require("edit the profile", &[WizardStep::ProfileEntry])?;
        let persona = self.profile.persona().cloned();
        edit(&mut self.profile);
        if let Some(persona) = persona {
            self.profile.set_persona(persona);
        }
        Ok(self.step())
    }

    pub fn submit_profile(&mut self) -> Result<WizardStep, TransitionError> {
        self.require("submit the profile", &[WizardStep::ProfileEntry])?;
        let result = validate_profile(&self.profile);
        if !result.is_valid {
            return Err(self.reject_invalid(result.errors));
        }
        Ok(self.move_to(Stage::TripPlanning))
    }

    /// Edit plan fields in place. An edit that leaves more than five vibes
    /// selected is undone.
    pub fn update_plan(
        &mut self,
        edit: impl FnOnce(&mut TripPlan),
    ) -> Result<WizardStep, TransitionError> {
        self.require("edit the trip plan", &[WizardStep::TripPlanning])?;
        let previous = self.plan.clone();
        edit(&mut self.plan);
        if self.plan.vibes.len() > MAX_VIBES {
            let got = self.plan.vibes.len();
            self.plan = previous;
            return Err(TransitionError::TooManyVibes {
                got,
                max: MAX_VIBES,
            });
        }
        Ok(self.step())
    }

    /// Select or deselect a vibe tag, capped at five selections.
    pub fn toggle_vibe(&mut self, vibe: &str) -> Result<WizardStep, TransitionError> {
        self.require("change vibes", &[WizardStep::TripPlanning])?;
        self.plan.toggle_vibe(vibe);
        Ok(self.step())
    }

    /// Step backwards where the flow allows it; generated results stay put
    /// only on the step that shows them.
    pub fn back(&mut self) -> Result<WizardStep, TransitionError> {
        let stage = std::mem::replace(&mut self.stage, Stage::PersonaSelect);
        let previous = match stage {
            Stage::ProfileEntry => Stage::PersonaSelect,
            Stage::TripPlanning => Stage::ProfileEntry,
            Stage::PackingResults { trip, .. } => Stage::TripResults { trip },
            Stage::StyleResults { trip, packing, .. } => Stage::PackingResults { trip, packing },
            other => {
                let step = other.step();
                self.stage = other;
                return Err(TransitionError::InvalidStep {
                    action: "go back",
                    step,
                });
            }
        };
        Ok(self.move_to(previous))
    }

    /// Validate the plan and generate the itinerary.
    pub async fn generate_trip(&mut self) -> Result<WizardStep, TransitionError> {
        self.require("generate a trip", &[WizardStep::TripPlanning])?;

        let result = validate_trip_plan(&self.plan);
        if !result.is_valid {
            return Err(self.reject_invalid(result.errors));
        }

        let _guard = self.busy.acquire(Operation::Trip)?;
        let trip = self.pipeline.generate_trip(&self.profile, &self.plan).await;
        Ok(self.move_to(Stage::TripResults { trip }))
    }

    /// Generate the packing list for the first selected vibe.
    pub async fn generate_packing(&mut self) -> Result<WizardStep, TransitionError> {
        self.require("generate a packing list", &[WizardStep::TripResults])?;
        let _guard = self.busy.acquire(Operation::Packing)?;

        let primary_vibe = self.plan.primary_vibe().unwrap_or(DEFAULT_PRIMARY_VIBE);
        let packing = self
            .pipeline
            .generate_packing(
                &self.plan.destination,
                self.plan.start_date,
                self.plan.end_date,
                primary_vibe,
                Some(&self.profile),
                Some(&self.plan.from_location),
            )
            .await;

        let next = match std::mem::replace(&mut self.stage, Stage::PersonaSelect) {
            Stage::TripResults { trip } => Stage::PackingResults { trip, packing },
            other => other,
        };
        Ok(self.move_to(next))
    }

    pub async fn generate_style(&mut self) -> Result<WizardStep, TransitionError> {
        self.require("generate a style guide", &[WizardStep::PackingResults])?;
        let _guard = self.busy.acquire(Operation::Style)?;

        let style = self.pipeline.generate_style(&self.profile, &self.plan).await;

        let next = match std::mem::replace(&mut self.stage, Stage::PersonaSelect) {
            Stage::PackingResults { trip, packing } => Stage::StyleResults {
                trip,
                packing,
                style,
            },
            other => other,
        };
        Ok(self.move_to(next))
    }

    pub fn complete(&mut self) -> Result<WizardStep, TransitionError> {
        let next = match std::mem::replace(&mut self.stage, Stage::PersonaSelect) {
            Stage::StyleResults {
                trip,
                packing,
                style,
            } => Stage::Summary {
                trip,
                packing,
                style,
            },
            other => {
                let step = other.step();
                self.stage = other;
                return Err(TransitionError::InvalidStep {
                    action: "complete the trip",
                    step,
                });
            }
        };
        Ok(self.move_to(next))
    }

    /// Back to the persona step from the itinerary, discarding the profile,
    /// the plan and the itinerary.
    pub fn start_over(&mut self) -> Result<WizardStep, TransitionError> {
        self.require("start over", &[WizardStep::TripResults])?;
        self.profile = UserProfile::default();
        self.plan = TripPlan::default();
        Ok(self.move_to(Stage::PersonaSelect))
    }

    /// Full reset from the style guide or the summary.
    pub fn plan_another(&mut self) -> Result<WizardStep, TransitionError> {
        self.require(
            "plan another trip",
            &[WizardStep::StyleResults, WizardStep::Summary],
        )?;
        self.profile = UserProfile::default();
        self.plan = TripPlan::default();
        self.busy.clear_all();
        Ok(self.move_to(Stage::PersonaSelect))
    }

    /// Borrow exactly what the current step renders.
    pub fn view(&self) -> StepView<'_> {
        match &self.stage {
            Stage::PersonaSelect => StepView::PersonaSelect {
                personas: catalog::personas(),
                selected: self.profile.persona(),
            },
            Stage::ProfileEntry => StepView::ProfileEntry {
                profile: &self.profile,
                errors: &self.errors,
            },
            Stage::TripPlanning => StepView::TripPlanning {
                plan: &self.plan,
                errors: &self.errors,
                busy: self.busy.is_busy(Operation::Trip),
            },
            Stage::TripResults { trip } => StepView::TripResults {
                plan: &self.plan,
                trip,
                busy: self.busy.is_busy(Operation::Packing),
            },
            Stage::PackingResults { packing, .. } => StepView::PackingResults {
                plan: &self.plan,
                packing,
                busy: self.busy.is_busy(Operation::Style),
            },
            Stage::StyleResults { style, .. } => StepView::StyleResults {
                plan: &self.plan,
                style,
            },
            Stage::Summary {
                trip,
                packing,
                style,
            } => StepView::Summary(TripSummary::new(
                &self.profile,
                &self.plan,
                trip,
                packing,
                style,
            )),
        }
    }

    /// The aggregate summary, once all three results exist.
    pub fn summary(&self) -> Option<TripSummary<'_>> {
        match &self.stage {
            Stage::StyleResults {
                trip,
                packing,
                style,
            }
            | Stage::Summary {
                trip,
                packing,
                style,
            } => Some(TripSummary::new(
                &self.profile,
                &self.plan,
                trip,
                packing,
                style,
            )),
            _ => None,
        }
    }
}
